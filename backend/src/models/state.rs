//! Epidemic State
//!
//! Per-trial infection state layered over an externally supplied contact
//! network: one boolean infection flag per node, the continuous simulation
//! clock, and the cumulative applied-rate integral.
//!
//! # Critical Invariants
//!
//! 1. **Clock monotonicity**: `t >= 0` and never decreases
//! 2. **Count consistency**: the tracked infected count always equals a full
//!    scan of the flags (see `recount_infected`)
//! 3. **Binary flags**: a node is either susceptible or infected, nothing else

/// Infection state of one trial
///
/// Owned by the trial driver for the duration of a single trial and discarded
/// afterwards. The contact network itself is not stored here; this struct
/// only mirrors its node count.
///
/// # Example
///
/// ```rust
/// use sis_simulator_core_rs::EpidemicState;
///
/// let mut state = EpidemicState::new(4);
/// state.set_infected(2, true);
/// assert_eq!(state.infected_count(), 1);
/// assert_eq!(state.infected_fraction(), 0.25);
/// ```
#[derive(Debug, Clone)]
pub struct EpidemicState {
    /// Per-node infection flags
    infected: Vec<bool>,

    /// Number of `true` flags, tracked incrementally
    infected_count: usize,

    /// Simulation clock
    t: f64,

    /// Running integral of the applied transmissibility over the trial.
    /// Reset with the rest of the state; event selection does not read it.
    cumulative_rate: f64,
}

impl EpidemicState {
    /// Create an all-susceptible state for a network of `node_count` nodes
    pub fn new(node_count: usize) -> Self {
        Self {
            infected: vec![false; node_count],
            infected_count: 0,
            t: 0.0,
            cumulative_rate: 0.0,
        }
    }

    /// Reset to all-susceptible with `t = L = 0`
    pub fn reset(&mut self) {
        self.infected.fill(false);
        self.infected_count = 0;
        self.t = 0.0;
        self.cumulative_rate = 0.0;
    }

    /// Number of nodes this state covers
    pub fn node_count(&self) -> usize {
        self.infected.len()
    }

    /// Whether `node` is currently infected
    pub fn is_infected(&self, node: usize) -> bool {
        self.infected[node]
    }

    /// Flip a single node's infection flag
    ///
    /// The tracked count is adjusted only when the flag actually changes, so
    /// setting an infected node infected again is a no-op.
    pub fn set_infected(&mut self, node: usize, infected: bool) {
        if self.infected[node] != infected {
            self.infected[node] = infected;
            if infected {
                self.infected_count += 1;
            } else {
                self.infected_count -= 1;
            }
        }
    }

    /// Current infected count (incrementally tracked)
    pub fn infected_count(&self) -> usize {
        self.infected_count
    }

    /// Infected fraction of the population
    ///
    /// Zero for an empty state.
    pub fn infected_fraction(&self) -> f64 {
        if self.infected.is_empty() {
            0.0
        } else {
            self.infected_count as f64 / self.infected.len() as f64
        }
    }

    /// Recompute the infected count by scanning all flags
    ///
    /// Must always agree with [`infected_count`](Self::infected_count).
    pub fn recount_infected(&self) -> usize {
        self.infected.iter().filter(|&&flag| flag).count()
    }

    /// Current simulation time
    pub fn time(&self) -> f64 {
        self.t
    }

    /// Advance the clock by a non-negative waiting time
    pub fn advance_clock(&mut self, dt: f64) {
        debug_assert!(dt >= 0.0, "clock must not move backwards");
        self.t += dt;
    }

    /// Running integral of the applied transmissibility
    pub fn cumulative_rate(&self) -> f64 {
        self.cumulative_rate
    }

    /// Overwrite the running applied-rate integral
    pub fn set_cumulative_rate(&mut self, l: f64) {
        self.cumulative_rate = l;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_all_susceptible() {
        let state = EpidemicState::new(10);
        assert_eq!(state.node_count(), 10);
        assert_eq!(state.infected_count(), 0);
        assert_eq!(state.time(), 0.0);
        assert_eq!(state.cumulative_rate(), 0.0);
    }

    #[test]
    fn test_set_infected_tracks_count() {
        let mut state = EpidemicState::new(5);
        state.set_infected(0, true);
        state.set_infected(3, true);
        assert_eq!(state.infected_count(), 2);

        state.set_infected(0, false);
        assert_eq!(state.infected_count(), 1);
    }

    #[test]
    fn test_set_infected_idempotent() {
        let mut state = EpidemicState::new(5);
        state.set_infected(1, true);
        state.set_infected(1, true);
        assert_eq!(state.infected_count(), 1);

        state.set_infected(2, false);
        assert_eq!(state.infected_count(), 1);
    }

    #[test]
    fn test_count_matches_full_scan() {
        let mut state = EpidemicState::new(8);
        for node in [0, 2, 5, 7] {
            state.set_infected(node, true);
        }
        state.set_infected(2, false);
        assert_eq!(state.infected_count(), state.recount_infected());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = EpidemicState::new(4);
        state.set_infected(1, true);
        state.advance_clock(3.5);
        state.set_cumulative_rate(7.0);

        state.reset();
        assert_eq!(state.infected_count(), 0);
        assert_eq!(state.recount_infected(), 0);
        assert_eq!(state.time(), 0.0);
        assert_eq!(state.cumulative_rate(), 0.0);
    }

    #[test]
    fn test_infected_fraction() {
        let mut state = EpidemicState::new(4);
        state.set_infected(0, true);
        state.set_infected(1, true);
        assert_eq!(state.infected_fraction(), 0.5);

        let empty = EpidemicState::new(0);
        assert_eq!(empty.infected_fraction(), 0.0);
    }

    #[test]
    fn test_advance_clock_accumulates() {
        let mut state = EpidemicState::new(1);
        state.advance_clock(0.5);
        state.advance_clock(1.25);
        assert_eq!(state.time(), 1.75);
    }
}
