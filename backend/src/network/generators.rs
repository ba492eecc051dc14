//! Contact network generators
//!
//! Standard topologies for epidemic experiments: complete graph, 2D lattice,
//! Erdős–Rényi G(n, p), and k-regular ring. Construction is deterministic
//! given the RNG stream; the random-graph generator is the only one that
//! consumes randomness.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::ContactNetwork;
use crate::rng::RngManager;

/// Errors raised by generators on impossible parameters
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("edge probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("cannot build a {k}-regular graph on {n} nodes")]
    InvalidDegree { n: usize, k: usize },
}

/// Topology selector with per-topology parameters
///
/// Configured in JSON and built against an explicit RNG:
///
/// ```json
/// { "type": "erdos_renyi", "n": 400, "p": 0.05 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TopologyConfig {
    /// Non-periodic 2D grid with 4-neighbor connectivity
    Lattice { lx: usize, ly: usize },

    /// Erdős–Rényi G(n, p): each node pair is an edge with probability `p`
    ErdosRenyi { n: usize, p: f64 },

    /// k-regular circulant ring
    Regular { n: usize, k: usize },

    /// Complete graph on `n` nodes
    Complete { n: usize },
}

impl TopologyConfig {
    /// Build the configured network
    pub fn build(&self, rng: &mut RngManager) -> Result<ContactNetwork, GraphError> {
        match *self {
            TopologyConfig::Lattice { lx, ly } => Ok(ContactNetwork::lattice(lx, ly)),
            TopologyConfig::ErdosRenyi { n, p } => ContactNetwork::erdos_renyi(n, p, rng),
            TopologyConfig::Regular { n, k } => ContactNetwork::k_regular(n, k),
            TopologyConfig::Complete { n } => Ok(ContactNetwork::complete(n)),
        }
    }
}

impl ContactNetwork {
    /// Complete graph on `n` nodes
    pub fn complete(n: usize) -> Self {
        let mut network = Self::with_node_count(n);
        for a in 0..n {
            for b in (a + 1)..n {
                network.add_edge(a, b);
            }
        }
        network
    }

    /// Non-periodic `lx` by `ly` grid with 4-neighbor connectivity
    ///
    /// Node `(x, y)` has id `y * lx + x`. Either dimension being zero yields
    /// an empty network.
    pub fn lattice(lx: usize, ly: usize) -> Self {
        let mut network = Self::with_node_count(lx * ly);
        for y in 0..ly {
            for x in 0..lx {
                let node = y * lx + x;
                if x + 1 < lx {
                    network.add_edge(node, node + 1);
                }
                if y + 1 < ly {
                    network.add_edge(node, node + lx);
                }
            }
        }
        network
    }

    /// Erdős–Rényi G(n, p) random graph
    ///
    /// Every unordered node pair becomes an edge independently with
    /// probability `p`, drawn from the supplied RNG.
    pub fn erdos_renyi(n: usize, p: f64, rng: &mut RngManager) -> Result<Self, GraphError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(GraphError::InvalidProbability(p));
        }
        let mut network = Self::with_node_count(n);
        for a in 0..n {
            for b in (a + 1)..n {
                if rng.bernoulli(p) {
                    network.add_edge(a, b);
                }
            }
        }
        Ok(network)
    }

    /// k-regular circulant graph on `n` nodes
    ///
    /// Each node connects to its `k/2` nearest neighbors on each side of a
    /// ring; for odd `k` (which needs even `n`) it additionally connects to
    /// its antipode. Requires `k < n` and `n * k` even.
    pub fn k_regular(n: usize, k: usize) -> Result<Self, GraphError> {
        if k >= n || (n * k) % 2 != 0 {
            return Err(GraphError::InvalidDegree { n, k });
        }
        let mut network = Self::with_node_count(n);
        for node in 0..n {
            for offset in 1..=(k / 2) {
                network.add_edge(node, (node + offset) % n);
            }
        }
        if k % 2 == 1 {
            for node in 0..n / 2 {
                network.add_edge(node, node + n / 2);
            }
        }
        Ok(network)
    }
}
