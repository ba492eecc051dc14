//! Simulation layer - event engine and trial drivers
//!
//! `SisEngine` advances the epidemic by exactly one state-changing event per
//! step; `TrialRunner` drives it from a seeded initial condition to extinction
//! or a time horizon; `EnsembleEstimator` averages terminal infected counts
//! over many independent trials.
//!
//! See `engine.rs` for the event-selection algorithm.

pub mod engine;
pub mod trial;

// Re-export main types for convenience
pub use engine::{SimulationError, SisEngine, SisParams};
pub use trial::{EnsembleEstimator, TrialRunner};
