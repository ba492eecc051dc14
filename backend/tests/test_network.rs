//! Structure checks for the topology generators

use sis_simulator_core_rs::{ContactNetwork, GraphError, RngManager, TopologyConfig};

#[test]
fn test_complete_graph_structure() {
    let network = ContactNetwork::complete(200);
    assert_eq!(network.node_count(), 200);
    assert_eq!(network.edge_count(), 200 * 199 / 2);
    for node in 0..200 {
        assert_eq!(network.degree(node), 199);
    }
}

#[test]
fn test_lattice_structure() {
    let network = ContactNetwork::lattice(10, 10);
    assert_eq!(network.node_count(), 100);
    // 9 horizontal edges per row, 9 vertical per column
    assert_eq!(network.edge_count(), 180);

    // corners touch two neighbors, interior nodes four
    assert_eq!(network.degree(0), 2);
    assert_eq!(network.degree(99), 2);
    assert_eq!(network.degree(55), 4);

    // neighbor ids follow the row-major layout
    assert!(network.neighbors(0).contains(&1));
    assert!(network.neighbors(0).contains(&10));
}

#[test]
fn test_erdos_renyi_edge_count_tracks_density() {
    let mut rng = RngManager::new(12345);
    let network = ContactNetwork::erdos_renyi(400, 0.05, &mut rng).unwrap();
    assert_eq!(network.node_count(), 400);

    // expectation is p * n(n-1)/2 = 3990; allow a wide band
    let edges = network.edge_count();
    assert!(
        (3500..=4500).contains(&edges),
        "edge count {} implausible for p = 0.05",
        edges
    );
}

#[test]
fn test_erdos_renyi_same_seed_same_graph() {
    let a = ContactNetwork::erdos_renyi(100, 0.1, &mut RngManager::new(9)).unwrap();
    let b = ContactNetwork::erdos_renyi(100, 0.1, &mut RngManager::new(9)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_k_regular_structure() {
    let network = ContactNetwork::k_regular(20, 6).unwrap();
    assert_eq!(network.edge_count(), 60);
    for node in 0..20 {
        assert_eq!(network.degree(node), 6);
    }
}

#[test]
fn test_k_regular_impossible_parameters() {
    assert_eq!(
        ContactNetwork::k_regular(5, 3),
        Err(GraphError::InvalidDegree { n: 5, k: 3 })
    );
    assert!(ContactNetwork::k_regular(3, 3).is_err());
}

#[test]
fn test_topology_selector_round_trip() {
    let json = r#"{ "type": "lattice", "lx": 10, "ly": 10 }"#;
    let config: TopologyConfig = serde_json::from_str(json).unwrap();

    let mut rng = RngManager::new(1);
    let network = config.build(&mut rng).unwrap();
    assert_eq!(network.node_count(), 100);

    let back = serde_json::to_string(&config).unwrap();
    let reparsed: TopologyConfig = serde_json::from_str(&back).unwrap();
    assert_eq!(config, reparsed);
}
