//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random number
//! generation. CRITICAL: all randomness in the simulator MUST go through this
//! module. There is no process-global generator; every stochastic operation
//! takes an explicit `RngManager`, so independent trials can run off
//! independently seeded streams.

mod xorshift;

pub use xorshift::RngManager;
