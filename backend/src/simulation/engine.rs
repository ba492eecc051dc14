//! Event Engine - continuous-time SIS step
//!
//! Advances the epidemic by exactly one state-changing event using an exact
//! continuous-time Markov jump process (stochastic simulation algorithm).
//! Each step:
//!
//! ```text
//! 1. Enumerate candidates: one Recovery per infected node, one Infection
//!    per (infected node, susceptible neighbor) pair
//! 2. Draw a waiting time for every candidate; keep the minimum
//! 3. Draw which candidate fires, proportional to its weight
//! 4. Advance the clock by the minimum waiting time and apply the event
//! ```
//!
//! Steps 2 and 3 use separate draws: the applied event is chosen by a single
//! cumulative-weight draw regardless of which candidate produced the minimum
//! waiting time. The minimum of the per-candidate exponentials has the same
//! distribution as one exponential at the total rate, so the advanced time is
//! exact either way.
//!
//! A step is an atomic unit of work: it either fully applies one event and
//! advances the clock, or - when no infected node remains - does nothing at
//! all. The candidate set is rebuilt from scratch every step, costing
//! O(infected nodes + their total degree).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{EpidemicState, TransitionEvent};
use crate::network::ContactNetwork;
use crate::rng::RngManager;
use crate::schedule::{ScheduleError, TransmissibilitySchedule};

/// Per-event weight of a recovery, normalized
const RECOVERY_WEIGHT: f64 = 1.0;

// ============================================================================
// Configuration
// ============================================================================

/// Complete engine configuration
///
/// The defaults describe the continuous-transmissibility baseline scenario:
/// a flat schedule at rate 2 over a period of 20, and a per-contact infection
/// weight of 2/200.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SisParams {
    /// Schedule phase boundary within a period
    pub t1: f64,

    /// Schedule period length
    pub t2: f64,

    /// Base transmissibility during the first phase
    pub lambda: f64,

    /// Transmissibility increment during the second phase
    pub d_lambda: f64,

    /// Recovery rate parameter. Stored with the engine; the per-event
    /// recovery weight in the step itself is the normalized constant 1.0.
    pub mu: f64,

    /// Constant per-contact infection weight applied to every
    /// (infected, susceptible-neighbor) pair
    pub infection_weight: f64,
}

impl Default for SisParams {
    fn default() -> Self {
        Self {
            t1: 10.0,
            t2: 20.0,
            lambda: 2.0,
            d_lambda: 0.0,
            mu: 10.0,
            infection_weight: 2.0 / 200.0,
        }
    }
}

/// Simulation error types
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No meaningful trial can run on a network without nodes
    #[error("network has no nodes")]
    EmptyNetwork,

    /// Snapshot sink failure
    #[error("snapshot sink error: {0}")]
    SinkError(String),
}

impl From<ScheduleError> for SimulationError {
    fn from(err: ScheduleError) -> Self {
        SimulationError::InvalidParameter(err.to_string())
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Continuous-time SIS event engine
///
/// Owns the transmissibility schedule and the event weights; operates on a
/// borrowed network and per-trial state, so one engine instance serves any
/// number of trials.
///
/// The schedule answers rate and integral queries and backs the trace export,
/// but the transition weights used by [`step`](Self::step) are constant: the
/// infection weight does not follow `schedule.evaluate(t)`.
///
/// # Example
///
/// ```rust
/// use sis_simulator_core_rs::{
///     ContactNetwork, EpidemicState, RngManager, SisEngine, SisParams,
/// };
///
/// let engine = SisEngine::new(SisParams::default()).unwrap();
/// let network = ContactNetwork::complete(4);
/// let mut state = EpidemicState::new(4);
/// let mut rng = RngManager::new(12345);
///
/// state.set_infected(0, true);
/// let ninfected = engine.step(&network, &mut state, &mut rng);
/// assert!(ninfected == 0 || ninfected == 2);
/// assert!(state.time() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SisEngine {
    /// Time-varying transmissibility description
    schedule: TransmissibilitySchedule,

    /// Recovery rate parameter (see [`SisParams::mu`])
    mu: f64,

    /// Constant per-contact infection weight
    infection_weight: f64,
}

impl SisEngine {
    /// Create an engine from validated parameters
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when the schedule parameters are inconsistent
    /// (non-positive phase boundary, period not beyond the boundary, negative
    /// net rate) or a weight is negative.
    pub fn new(params: SisParams) -> Result<Self, SimulationError> {
        let schedule =
            TransmissibilitySchedule::new(params.t1, params.t2, params.lambda, params.d_lambda)?;

        if params.mu < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "recovery rate must be non-negative, got {}",
                params.mu
            )));
        }
        if params.infection_weight < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "infection weight must be non-negative, got {}",
                params.infection_weight
            )));
        }

        Ok(Self {
            schedule,
            mu: params.mu,
            infection_weight: params.infection_weight,
        })
    }

    /// The transmissibility schedule attached to this engine
    pub fn schedule(&self) -> &TransmissibilitySchedule {
        &self.schedule
    }

    /// Recovery rate parameter
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Constant per-contact infection weight
    pub fn infection_weight(&self) -> f64 {
        self.infection_weight
    }

    /// Enumerate the candidate transitions of the current state
    ///
    /// Nodes are scanned in index order; each infected node contributes its
    /// recovery first, then one infection per susceptible neighbor in
    /// adjacency order. A susceptible node with several infected contacts
    /// appears once per contact.
    fn candidate_events(
        &self,
        network: &ContactNetwork,
        state: &EpidemicState,
    ) -> Vec<TransitionEvent> {
        let mut events = Vec::new();
        for node in 0..network.node_count() {
            if !state.is_infected(node) {
                continue;
            }
            events.push(TransitionEvent::Recovery {
                node,
                weight: RECOVERY_WEIGHT,
            });
            for &neighbor in network.neighbors(node) {
                if !state.is_infected(neighbor) {
                    events.push(TransitionEvent::Infection {
                        node: neighbor,
                        weight: self.infection_weight,
                    });
                }
            }
        }
        events
    }

    /// Advance the state by exactly one event
    ///
    /// Returns the infected count after the event. With no infected node left
    /// the epidemic is extinct: no draw is attempted, the clock does not move,
    /// and 0 is returned - the caller's loop must stop on a zero count.
    ///
    /// Every applied event changes the infected count by exactly one and
    /// strictly advances the clock (up to the measure-zero chance of a
    /// zero-length waiting time).
    pub fn step(
        &self,
        network: &ContactNetwork,
        state: &mut EpidemicState,
        rng: &mut RngManager,
    ) -> usize {
        debug_assert_eq!(
            state.node_count(),
            network.node_count(),
            "state and network disagree on node count"
        );

        let events = self.candidate_events(network, state);
        if events.is_empty() {
            return 0;
        }

        // Waiting time: the minimum over the candidates' exponential clocks.
        let mut dt_min = f64::INFINITY;
        let mut total_weight = 0.0;
        for event in &events {
            let dt = rng.exp_waiting_time(event.weight());
            if dt < dt_min {
                dt_min = dt;
            }
            total_weight += event.weight();
        }

        // Applied event: one cumulative-weight draw, independent of which
        // candidate produced dt_min.
        let r = total_weight * rng.next_f64();
        let selected = Self::select_by_weight(&events, r);

        state.advance_clock(dt_min);
        match events[selected] {
            TransitionEvent::Infection { node, .. } => state.set_infected(node, true),
            TransitionEvent::Recovery { node, .. } => state.set_infected(node, false),
        }

        state.infected_count()
    }

    /// First event whose cumulative weight exceeds `r`; the last event when
    /// `r` reaches the total (floating-point edge)
    fn select_by_weight(events: &[TransitionEvent], r: f64) -> usize {
        let mut cumulative = 0.0;
        for (index, event) in events.iter().enumerate() {
            cumulative += event.weight();
            if cumulative > r {
                return index;
            }
        }
        events.len() - 1
    }
}
