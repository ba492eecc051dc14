//! Scenario configuration
//!
//! One JSON document describes a complete batch run: which topology to build,
//! the schedule and recovery parameters, the initial infected fraction, the
//! time horizon, the trial count, and the RNG seed.
//!
//! # Example
//!
//! ```
//! use sis_simulator_core_rs::ScenarioConfig;
//!
//! let config = ScenarioConfig::from_json(r#"{
//!     "label": "Cont",
//!     "topology": { "type": "complete", "n": 200 },
//!     "params": { "t1": 10.0, "t2": 20.0, "lambda": 2.0, "d_lambda": 0.0, "mu": 10.0 },
//!     "initial_fraction": 1.0,
//!     "t_max": 100.0,
//!     "ntrials": 1,
//!     "rng_seed": 12345
//! }"#).unwrap();
//! assert_eq!(config.ntrials, 1);
//! assert_eq!(config.snapshot_interval, 50);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::TopologyConfig;
use crate::simulation::SisParams;

/// Errors raised while loading a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Complete description of a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Label written into the first column of every snapshot row
    #[serde(default = "default_label")]
    pub label: String,

    /// Contact network to build
    pub topology: TopologyConfig,

    /// Engine parameters (schedule, recovery, infection weight)
    #[serde(default)]
    pub params: SisParams,

    /// Initial infected fraction; values at or below zero seed one node
    pub initial_fraction: f64,

    /// Time horizon of each trial
    pub t_max: f64,

    /// Number of independent trials
    pub ntrials: usize,

    /// Seed for the deterministic RNG
    pub rng_seed: u64,

    /// Steps between snapshots
    #[serde(default = "default_snapshot_interval")]
    pub snapshot_interval: usize,
}

fn default_label() -> String {
    "Cont".to_string()
}

fn default_snapshot_interval() -> usize {
    50
}

impl ScenarioConfig {
    /// Parse a scenario from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scenario from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }
}
