//! Trial drivers
//!
//! `TrialRunner` seeds an initial infected set and drives the event engine
//! until the epidemic dies out or the time horizon passes, emitting periodic
//! snapshots. `EnsembleEstimator` repeats that over many independent trials
//! and averages the terminal infected count.

use tracing::debug;

use crate::models::EpidemicState;
use crate::network::ContactNetwork;
use crate::output::{NullSink, SnapshotSink};
use crate::rng::RngManager;
use crate::simulation::engine::{SimulationError, SisEngine};

/// Snapshots are emitted every this many steps unless overridden
const DEFAULT_SNAPSHOT_INTERVAL: usize = 50;

/// Drives single epidemic trials
///
/// Trial state is created fresh per call and discarded afterwards; the
/// network is only borrowed. Independent trials may therefore run in
/// parallel from separate runners as long as each gets its own RNG.
///
/// # Example
///
/// ```rust
/// use sis_simulator_core_rs::{
///     ContactNetwork, MemorySink, RngManager, SisEngine, SisParams, TrialRunner,
/// };
///
/// let runner = TrialRunner::new(SisEngine::new(SisParams::default()).unwrap());
/// let network = ContactNetwork::complete(20);
/// let mut rng = RngManager::new(12345);
/// let mut sink = MemorySink::new();
///
/// let terminal = runner
///     .run_single_trial(1.0, &network, 10.0, &mut rng, &mut sink, "Cont")
///     .unwrap();
/// assert!(terminal <= 20);
/// assert!(!sink.snapshots().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TrialRunner {
    engine: SisEngine,
    snapshot_interval: usize,
}

impl TrialRunner {
    /// Create a runner with the default snapshot cadence
    pub fn new(engine: SisEngine) -> Self {
        Self {
            engine,
            snapshot_interval: DEFAULT_SNAPSHOT_INTERVAL,
        }
    }

    /// Override how many steps pass between snapshots
    ///
    /// # Panics
    /// Panics if `interval == 0`
    pub fn with_snapshot_interval(mut self, interval: usize) -> Self {
        assert!(interval > 0, "snapshot interval must be positive");
        self.snapshot_interval = interval;
        self
    }

    /// The engine driving this runner's trials
    pub fn engine(&self) -> &SisEngine {
        &self.engine
    }

    /// Seed the initial infected set
    ///
    /// Shuffles the node ids (Fisher–Yates) and infects a prefix: exactly one
    /// node when `initial_fraction <= 0`, otherwise `round(f * n)` nodes,
    /// capped at the population.
    fn seed_initial_infected(
        &self,
        initial_fraction: f64,
        state: &mut EpidemicState,
        rng: &mut RngManager,
    ) {
        let node_count = state.node_count();
        let mut ids: Vec<usize> = (0..node_count).collect();
        rng.shuffle(&mut ids);

        let seeds = if initial_fraction > 0.0 {
            ((initial_fraction * node_count as f64).round() as usize).min(node_count)
        } else {
            1
        };
        for &node in &ids[..seeds] {
            state.set_infected(node, true);
        }
    }

    /// Run one trial to extinction or the time horizon
    ///
    /// Emits a `(label, time, infected fraction)` snapshot every
    /// `snapshot_interval` steps, starting with the first; the snapshot pairs
    /// the pre-step clock with the post-step count. Termination is checked
    /// against the pre-step clock, so the final event may land past `t_max`.
    ///
    /// Returns the terminal infected count.
    ///
    /// # Errors
    ///
    /// `EmptyNetwork` when the network has no nodes.
    pub fn run_single_trial(
        &self,
        initial_fraction: f64,
        network: &ContactNetwork,
        t_max: f64,
        rng: &mut RngManager,
        sink: &mut dyn SnapshotSink,
        label: &str,
    ) -> Result<usize, SimulationError> {
        if network.node_count() == 0 {
            return Err(SimulationError::EmptyNetwork);
        }

        let mut state = EpidemicState::new(network.node_count());
        self.seed_initial_infected(initial_fraction, &mut state, rng);

        let node_count = network.node_count() as f64;
        let mut steps = 0usize;
        loop {
            let t = state.time();
            let ninfected = self.engine.step(network, &mut state, rng);

            if steps % self.snapshot_interval == 0 {
                debug!("time = {:.3}, infected = {}", t, ninfected);
                sink.record(label, t, ninfected as f64 / node_count)
                    .map_err(|e| SimulationError::SinkError(e.to_string()))?;
            }
            steps += 1;

            if t >= t_max || ninfected == 0 {
                return Ok(ninfected);
            }
        }
    }
}

/// Averages terminal infected counts over independent trials
///
/// # Example
///
/// ```rust
/// use sis_simulator_core_rs::{
///     ContactNetwork, EnsembleEstimator, RngManager, SisEngine, SisParams, TrialRunner,
/// };
///
/// let estimator = EnsembleEstimator::new(TrialRunner::new(
///     SisEngine::new(SisParams::default()).unwrap(),
/// ));
/// let network = ContactNetwork::complete(20);
/// let mut rng = RngManager::new(12345);
///
/// let average = estimator
///     .estimate_asymptotic_infected(0.5, &network, 4, 5.0, &mut rng)
///     .unwrap();
/// assert!((0.0..=20.0).contains(&average));
/// ```
#[derive(Debug, Clone)]
pub struct EnsembleEstimator {
    runner: TrialRunner,
}

impl EnsembleEstimator {
    pub fn new(runner: TrialRunner) -> Self {
        Self { runner }
    }

    /// The trial runner backing this estimator
    pub fn runner(&self) -> &TrialRunner {
        &self.runner
    }

    /// Mean terminal infected count over `ntrials` independent trials
    ///
    /// Each trial gets a fresh state and runs to `t_max` or extinction; no
    /// snapshots are emitted. The mean estimates the long-run prevalence (or
    /// the extinction probability scaled by the headcount) under the
    /// configured dynamics.
    ///
    /// # Errors
    ///
    /// `EmptyNetwork` when the network has no nodes; `InvalidParameter` when
    /// `ntrials` is zero.
    pub fn estimate_asymptotic_infected(
        &self,
        initial_fraction: f64,
        network: &ContactNetwork,
        ntrials: usize,
        t_max: f64,
        rng: &mut RngManager,
    ) -> Result<f64, SimulationError> {
        if ntrials == 0 {
            return Err(SimulationError::InvalidParameter(
                "trial count must be positive".to_string(),
            ));
        }

        let mut total = 0.0;
        for trial in 0..ntrials {
            let terminal = self.runner.run_single_trial(
                initial_fraction,
                network,
                t_max,
                rng,
                &mut NullSink,
                "",
            )?;
            debug!("trial {} of {}: {} infected at horizon", trial + 1, ntrials, terminal);
            total += terminal as f64;
        }
        Ok(total / ntrials as f64)
    }
}
