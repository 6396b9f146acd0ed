use baseball_elimination::graph::search::residual_reachable;
use baseball_elimination::graph::{
    cut_capacity, max_flow, min_cut_by_enumeration, BreadthFirst, Capacity, DepthFirst, EdgeId,
    FlowNetwork, PathSearch,
};
use baseball_elimination::EliminationError;
use proptest::prelude::*;

fn textbook_network() -> FlowNetwork {
    let mut network = FlowNetwork::new(6);
    for &(from, to, capacity) in &[
        (0, 1, 16),
        (0, 2, 13),
        (1, 3, 12),
        (2, 1, 4),
        (2, 4, 14),
        (3, 2, 9),
        (3, 5, 20),
        (4, 3, 7),
        (4, 5, 4),
    ] {
        network.add_edge(from, to, capacity).unwrap();
    }
    network
}

fn build(vertex_count: usize, edges: &[(usize, usize, u64)]) -> FlowNetwork {
    let mut network = FlowNetwork::new(vertex_count);
    for &(from, to, capacity) in edges {
        network.add_edge(from, to, capacity).unwrap();
    }
    network
}

fn assert_conserved(network: &FlowNetwork, source: usize, sink: usize, value: u64) {
    for vertex in 0..network.vertex_count() {
        if vertex == source || vertex == sink {
            continue;
        }
        assert_eq!(network.excess(vertex), 0, "flow not conserved at {vertex}");
    }
    assert_eq!(network.excess(sink), value as i128);
    for edge in network.edges() {
        if let Capacity::Finite(capacity) = edge.capacity {
            assert!(edge.flow <= capacity, "edge {edge:?} over capacity");
        }
    }
}

#[test]
fn textbook_network_carries_23_units() {
    for search in [&BreadthFirst as &dyn PathSearch, &DepthFirst] {
        let mut network = textbook_network();
        let flow = max_flow(&mut network, 0, 5, search).unwrap();
        assert_eq!(flow.value(), 23, "{}", search.name());
        assert_eq!(flow.cut_capacity(&network), Capacity::Finite(23));
        assert_conserved(&network, 0, 5, 23);

        assert!(flow.in_cut(0));
        assert!(flow.in_cut(1));
        assert!(flow.in_cut(2));
        assert!(flow.in_cut(4));
        assert!(!flow.in_cut(3));
        assert!(!flow.in_cut(5));
        assert!(!flow.in_cut(99));
    }
}

#[test]
fn textbook_network_matches_enumerated_cut() {
    let network = textbook_network();
    assert_eq!(min_cut_by_enumeration(&network, 0, 5), Some(Capacity::Finite(23)));
}

#[test]
fn solving_twice_starts_from_zero_flow() {
    let mut network = textbook_network();
    let first = max_flow(&mut network, 0, 5, &BreadthFirst).unwrap();
    let second = max_flow(&mut network, 0, 5, &BreadthFirst).unwrap();
    assert_eq!(first.value(), second.value());
    assert_eq!(first.source_side(), second.source_side());
}

#[test]
fn same_source_and_sink_is_disconnected_input() {
    let mut network = textbook_network();
    assert!(matches!(
        max_flow(&mut network, 2, 2, &BreadthFirst),
        Err(EliminationError::DisconnectedInput(2))
    ));
    assert!(matches!(
        max_flow(&mut network, 0, 6, &BreadthFirst),
        Err(EliminationError::InvalidInput(_))
    ));
}

#[test]
fn unbounded_edges_never_set_the_bottleneck() {
    let mut network = FlowNetwork::new(5);
    network.add_edge(0, 1, 4).unwrap();
    network.add_unbounded_edge(1, 2).unwrap();
    network.add_unbounded_edge(1, 3).unwrap();
    network.add_edge(2, 4, 3).unwrap();
    network.add_edge(3, 4, 3).unwrap();

    let flow = max_flow(&mut network, 0, 4, &BreadthFirst).unwrap();
    assert_eq!(flow.value(), 4);
    assert_eq!(flow.cut_capacity(&network), Capacity::Finite(4));
    assert_conserved(&network, 0, 4, 4);
    assert_eq!(min_cut_by_enumeration(&network, 0, 4), Some(Capacity::Finite(4)));
}

#[test]
fn all_unbounded_path_is_rejected() {
    let mut network = FlowNetwork::new(3);
    network.add_unbounded_edge(0, 1).unwrap();
    network.add_unbounded_edge(1, 2).unwrap();
    assert!(matches!(
        max_flow(&mut network, 0, 2, &BreadthFirst),
        Err(EliminationError::UnboundedFlow { from: 0, to: 2 })
    ));
    assert_eq!(min_cut_by_enumeration(&network, 0, 2), Some(Capacity::Unbounded));
}

#[test]
fn isolated_sink_has_zero_flow() {
    let mut network = FlowNetwork::new(4);
    network.add_edge(0, 1, 5).unwrap();
    network.add_edge(1, 2, 5).unwrap();
    let flow = max_flow(&mut network, 0, 3, &DepthFirst).unwrap();
    assert_eq!(flow.value(), 0);
    assert_eq!(flow.augmentations(), 0);
    assert!(flow.in_cut(2));
    assert!(!flow.in_cut(3));
}

#[test]
fn enumeration_declines_large_networks() {
    let network = FlowNetwork::new(32);
    assert_eq!(min_cut_by_enumeration(&network, 0, 31), None);
    assert_eq!(min_cut_by_enumeration(&textbook_network(), 1, 1), None);
}

#[test]
fn out_of_range_vertices_are_reported_not_panicked() {
    let mut network = textbook_network();
    assert!(matches!(network.add_edge(0, 6, 1), Err(EliminationError::InvalidInput(_))));
    assert!(matches!(network.add_unbounded_edge(9, 1), Err(EliminationError::InvalidInput(_))));
    assert_eq!(network.edge_count(), 9);

    assert!(network.edge(EdgeId(8)).is_some());
    assert_eq!(network.edge(EdgeId(9)), None);
    assert_eq!(network.outgoing(6).count(), 0);
    assert_eq!(network.incoming(42).count(), 0);
    assert_eq!(network.excess(42), 0);

    assert_eq!(BreadthFirst.find_path(&network, 0, 6), None);
    assert_eq!(DepthFirst.find_path(&network, 7, 5), None);
    assert!(residual_reachable(&network, 6).not_any());

    let short_side = residual_reachable(&FlowNetwork::new(2), 0);
    assert_eq!(cut_capacity(&network, &short_side), Capacity::Finite(29));
}

#[test]
fn depth_first_follows_the_first_arc_to_the_end() {
    let network = build(4, &[(0, 1, 1), (0, 2, 1), (1, 2, 1), (2, 3, 1)]);
    assert_eq!(DepthFirst.find_path(&network, 0, 3), Some(vec![0, 4, 6]));
    assert_eq!(BreadthFirst.find_path(&network, 0, 3), Some(vec![2, 6]));
}

fn arb_network() -> impl Strategy<Value = (usize, Vec<(usize, usize, u64)>)> {
    (2usize..=6).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0u64..10), 0..16),
        )
    })
}

proptest! {
    #[test]
    fn max_flow_equals_enumerated_min_cut((n, edges) in arb_network()) {
        let sink = n - 1;
        let mut network = build(n, &edges);
        let flow = max_flow(&mut network, 0, sink, &BreadthFirst).unwrap();

        prop_assert_eq!(min_cut_by_enumeration(&network, 0, sink), Some(Capacity::Finite(flow.value())));
        prop_assert_eq!(cut_capacity(&network, flow.source_side()), Capacity::Finite(flow.value()));
        prop_assert!(!flow.in_cut(sink));
        assert_conserved(&network, 0, sink, flow.value());
    }

    #[test]
    fn search_order_does_not_change_the_cut((n, edges) in arb_network()) {
        let sink = n - 1;
        let mut bfs_network = build(n, &edges);
        let mut dfs_network = build(n, &edges);
        let bfs = max_flow(&mut bfs_network, 0, sink, &BreadthFirst).unwrap();
        let dfs = max_flow(&mut dfs_network, 0, sink, &DepthFirst).unwrap();

        prop_assert_eq!(bfs.value(), dfs.value());
        prop_assert_eq!(bfs.source_side(), dfs.source_side());
    }
}
