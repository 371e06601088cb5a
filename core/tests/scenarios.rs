//! End-to-end max-flow scenarios through the public API.

use augment_core::generators::{random_graph, worst_case_graph, RandomGraphParams, SINK, SOURCE};
use augment_core::{
    check_flow, max_flow, min_cut, Capacity, FlowError, FlowNetwork, FordFulkerson,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn diamond() -> FlowNetwork<String> {
    let mut network = FlowNetwork::new();
    for (u, v, capacity) in [("S", "A", 3), ("S", "B", 2), ("A", "T", 2), ("B", "T", 3)] {
        network.add_edge(u.to_string(), v.to_string(), capacity).unwrap();
    }
    network
}

#[test]
fn diamond_flow_is_four_not_five() {
    init_logging();
    let mut network = diamond();

    let total = max_flow(&mut network, "S", "T");

    assert_eq!(total, 4);
    assert!(check_flow(&network, "S", "T", total).is_valid());
    assert_eq!(min_cut(&network, "S").capacity, 4);
    for (_, edge) in network.edges() {
        assert!(edge.flow() >= 0 && edge.flow() <= edge.capacity());
        assert_eq!(edge.flow(), -network.edge(edge.reverse()).flow());
    }
}

#[test]
fn long_unit_chain_takes_one_augmentation() {
    init_logging();
    let mut network = worst_case_graph(300, 1).unwrap();

    let result = FordFulkerson::new().solve(&mut network, SOURCE, SINK);

    assert_eq!(result.max_flow, 1);
    assert_eq!(result.metrics.augmentations, 1);
    assert!(network.edges().all(|(_, e)| e.flow() == 1));
}

#[test]
fn source_equal_to_sink_mutates_nothing() {
    init_logging();
    let mut network = diamond();

    assert_eq!(max_flow(&mut network, "S", "S"), 0);
    assert!(network.edges().all(|(_, e)| e.flow() == 0));
}

#[test]
fn unreachable_sink_mutates_nothing() {
    init_logging();
    let mut network = FlowNetwork::new();
    network.add_edge("S".to_string(), "A".to_string(), 5).unwrap();
    network.add_edge("A".to_string(), "B".to_string(), 5).unwrap();
    network.add_edge("T".to_string(), "A".to_string(), 5).unwrap();

    assert_eq!(max_flow(&mut network, "S", "T"), 0);
    assert!(network.edges().all(|(_, e)| e.flow() == 0));
}

#[test]
fn negative_capacity_is_rejected_at_construction() {
    let mut network: FlowNetwork<&str> = FlowNetwork::new();
    assert_eq!(
        network.add_edge("S", "T", -5),
        Err(FlowError::NegativeCapacity {
            from: "S".to_string(),
            to: "T".to_string(),
            capacity: -5,
        })
    );
}

#[test]
fn parallel_maximal_edges_are_rejected_before_solving() {
    init_logging();
    let mut network: FlowNetwork<&str> = FlowNetwork::new();
    network.add_edge("S", "T", Capacity::MAX).unwrap();
    assert!(matches!(
        network.add_edge("S", "T", Capacity::MAX),
        Err(FlowError::CapacityOverflow { .. })
    ));

    let total = max_flow(&mut network, "S", "T");
    assert_eq!(total, Capacity::MAX);
    assert!(check_flow(&network, "S", "T", total).is_valid());
    assert_eq!(min_cut(&network, "S").capacity, Capacity::MAX);
}

#[test]
fn random_networks_satisfy_duality() {
    init_logging();
    let params = RandomGraphParams {
        nodes: 30,
        edge_probability: 0.2,
        min_capacity: 1,
        max_capacity: 20,
    };

    for seed in 0..10 {
        let mut network = random_graph(&params, &mut StdRng::seed_from_u64(seed)).unwrap();
        let total = max_flow(&mut network, SOURCE, SINK);

        let report = check_flow(&network, SOURCE, SINK, total);
        assert!(report.is_valid(), "seed {}: {:?}", seed, report.violations);
        assert_eq!(min_cut(&network, SOURCE).capacity, total, "seed {}", seed);
        assert_eq!(max_flow(&mut network, SOURCE, SINK), 0, "seed {}", seed);
    }
}
