//! PyO3 wrapper for the epidemic simulator
//!
//! This module provides the Python interface to the Rust engine.

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::network::ContactNetwork;
use crate::output::MemorySink;
use crate::rng::RngManager;
use crate::simulation::{EnsembleEstimator, SisEngine, TrialRunner};

use super::types::{
    parse_label, parse_rng_seed, parse_sis_params, parse_snapshot_interval,
    parse_topology_config, snapshots_to_py,
};

/// Python wrapper around a configured simulator
///
/// Holds the built contact network, the trial runner, and the deterministic
/// RNG stream shared by consecutive calls.
///
/// # Example (from Python)
///
/// ```python
/// from sis_simulator._core import Simulator
///
/// sim = Simulator.new({
///     "topology": {"type": "complete", "n": 200},
///     "t1": 10.0, "t2": 20.0, "lambda": 2.0, "d_lambda": 0.0, "mu": 10.0,
///     "rng_seed": 12345,
/// })
///
/// snapshots = sim.run_single_trial(1.0, 100.0)
/// for time, fraction in snapshots:
///     print(f"{time:.3f}\t{fraction:.5f}")
/// ```
#[pyclass(name = "Simulator")]
pub struct PySimulator {
    runner: TrialRunner,
    network: ContactNetwork,
    rng: RngManager,
    label: String,
}

#[pymethods]
impl PySimulator {
    /// Create a simulator from a configuration dict
    ///
    /// # Errors
    ///
    /// Raises ValueError for missing or ill-typed keys and RuntimeError for
    /// parameters the engine rejects.
    #[staticmethod]
    fn new(config: &Bound<'_, PyDict>) -> PyResult<Self> {
        let params = parse_sis_params(config)?;
        let topology = parse_topology_config(config)?;
        let seed = parse_rng_seed(config)?;
        let label = parse_label(config)?;
        let snapshot_interval = parse_snapshot_interval(config)?;

        let engine = SisEngine::new(params)
            .map_err(|e| PyRuntimeError::new_err(format!("failed to create engine: {}", e)))?;

        let mut rng = RngManager::new(seed);
        let network = topology
            .build(&mut rng)
            .map_err(|e| PyRuntimeError::new_err(format!("failed to build topology: {}", e)))?;

        Ok(PySimulator {
            runner: TrialRunner::new(engine).with_snapshot_interval(snapshot_interval),
            network,
            rng,
            label,
        })
    }

    /// Run one trial to extinction or the horizon
    ///
    /// Returns the emitted snapshots as a list of `(time, fraction)` tuples.
    fn run_single_trial(
        &mut self,
        py: Python<'_>,
        initial_fraction: f64,
        t_max: f64,
    ) -> PyResult<Py<PyList>> {
        let mut sink = MemorySink::new();
        self.runner
            .run_single_trial(
                initial_fraction,
                &self.network,
                t_max,
                &mut self.rng,
                &mut sink,
                &self.label,
            )
            .map_err(|e| PyRuntimeError::new_err(format!("trial failed: {}", e)))?;

        snapshots_to_py(py, sink.snapshots())
    }

    /// Mean terminal infected count over `ntrials` independent trials
    fn estimate_asymptotic_infected(
        &mut self,
        initial_fraction: f64,
        ntrials: usize,
        t_max: f64,
    ) -> PyResult<f64> {
        let estimator = EnsembleEstimator::new(self.runner.clone());
        estimator
            .estimate_asymptotic_infected(
                initial_fraction,
                &self.network,
                ntrials,
                t_max,
                &mut self.rng,
            )
            .map_err(|e| PyRuntimeError::new_err(format!("estimate failed: {}", e)))
    }

    /// Number of nodes in the built network
    fn node_count(&self) -> usize {
        self.network.node_count()
    }

    /// Current RNG state (for replay)
    fn rng_state(&self) -> u64 {
        self.rng.get_state()
    }
}
