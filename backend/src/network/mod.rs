//! Contact network topology
//!
//! An undirected graph stored as adjacency lists. The epidemic engine only
//! reads it (node count, neighbor enumeration); infection flags live in
//! [`EpidemicState`](crate::models::EpidemicState), not in the graph, and the
//! engine never creates or mutates edges. A built network is therefore safe
//! to share read-only across independent trials.

mod generators;

pub use generators::{GraphError, TopologyConfig};

/// Undirected contact graph over nodes `0..node_count`
///
/// # Example
///
/// ```rust
/// use sis_simulator_core_rs::ContactNetwork;
///
/// let mut network = ContactNetwork::with_node_count(3);
/// network.add_edge(0, 1);
/// network.add_edge(1, 2);
/// assert_eq!(network.degree(1), 2);
/// assert_eq!(network.edge_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContactNetwork {
    /// Neighbor lists, one per node
    adjacency: Vec<Vec<usize>>,
}

impl ContactNetwork {
    /// Create an edgeless network of `node_count` nodes
    pub fn with_node_count(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Add an undirected edge between two distinct nodes
    ///
    /// # Panics
    ///
    /// Panics on a self-loop or an out-of-range endpoint. Generators are
    /// responsible for not inserting duplicate edges.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        assert!(a != b, "self-loops are not allowed");
        assert!(
            a < self.adjacency.len() && b < self.adjacency.len(),
            "edge endpoint out of range: ({}, {}) with {} nodes",
            a,
            b,
            self.adjacency.len()
        );
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    /// Neighbors of `node`, in insertion order
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Degree of `node`
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}
