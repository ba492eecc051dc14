//! Seasonal SIS Epidemic Simulator - Rust Engine
//!
//! Exact continuous-time simulation of a recurring (seasonal) SIS epidemic
//! over a contact network, with deterministic execution.
//!
//! # Architecture
//!
//! - **schedule**: Periodic time-varying transmissibility (rate, integral, inverse)
//! - **models**: Domain types (EpidemicState, TransitionEvent)
//! - **network**: Contact graph and topology generators
//! - **simulation**: Event engine, trial runner, ensemble estimator
//! - **output**: Snapshot sinks (TSV, memory, null)
//! - **scenario**: JSON batch-run configuration
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG, explicitly passed)
//! 2. One engine step applies exactly one event, or none at extinction
//! 3. The zero-infected state is absorbing
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod models;
pub mod network;
pub mod output;
pub mod rng;
pub mod scenario;
pub mod schedule;
pub mod simulation;

// Re-exports for convenience
pub use models::{event::TransitionEvent, state::EpidemicState};
pub use network::{ContactNetwork, GraphError, TopologyConfig};
pub use output::{MemorySink, NullSink, Snapshot, SnapshotSink, TsvSink};
pub use rng::RngManager;
pub use scenario::{ScenarioConfig, ScenarioError};
pub use schedule::{ScheduleError, TransmissibilitySchedule};
pub use simulation::{EnsembleEstimator, SimulationError, SisEngine, SisParams, TrialRunner};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn sis_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::simulator::PySimulator>()?;
    Ok(())
}
