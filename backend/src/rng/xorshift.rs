//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce exact epidemic trajectories)
//! - Testing (verify behavior)
//! - Research (validate results)

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use sis_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let u = rng.next_f64();          // uniform in [0, 1)
/// let node = rng.index(100);       // uniform in [0, 100)
/// let dt = rng.exp_waiting_time(2.0); // exponential with rate 2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// # Example
    /// ```
    /// use sis_simulator_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use sis_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let u = rng.next_f64();
    /// assert!(u >= 0.0 && u < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Convert to [0.0, 1.0) by taking the top 53 bits
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate a random index in [0, n)
    ///
    /// # Panics
    /// Panics if `n == 0`
    ///
    /// # Example
    /// ```
    /// use sis_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let node = rng.index(400);
    /// assert!(node < 400);
    /// ```
    pub fn index(&mut self, n: usize) -> usize {
        assert!(n > 0, "index range must be non-empty");
        (self.next() % n as u64) as usize
    }

    /// Draw an exponential waiting time with the given rate
    ///
    /// Inverse-transform sampling: `-ln(1 - u) / rate` with `u` uniform in
    /// [0, 1). A zero rate yields an infinite waiting time (the event never
    /// fires).
    ///
    /// # Example
    /// ```
    /// use sis_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let dt = rng.exp_waiting_time(1.0);
    /// assert!(dt >= 0.0);
    /// ```
    pub fn exp_waiting_time(&mut self, rate: f64) -> f64 {
        let u = self.next_f64();
        -(1.0 - u).ln() / rate
    }

    /// Bernoulli trial with success probability `p`
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Shuffle a slice in place (Fisher–Yates, high index to low)
    ///
    /// # Example
    /// ```
    /// use sis_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let mut ids: Vec<usize> = (0..10).collect();
    /// rng.shuffle(&mut ids);
    /// ```
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }

    /// Get current RNG state (for replay)
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
