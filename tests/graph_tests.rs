use heap_sssp::graph::WeightedGraph;
use heap_sssp::{Error, OrderedFloat};

type W = OrderedFloat<f64>;

#[test]
fn test_edges_are_symmetric() {
    let mut graph: WeightedGraph<W> = WeightedGraph::new();
    graph.add_edge(1, 2, OrderedFloat(4.0));
    graph.add_edge(2, 3, OrderedFloat(1.5));

    assert_eq!(graph.edge_weight(1, 2), Some(OrderedFloat(4.0)));
    assert_eq!(graph.edge_weight(2, 1), Some(OrderedFloat(4.0)));
    assert_eq!(graph.edge_weight(2, 3), Some(OrderedFloat(1.5)));
    assert_eq!(graph.edge_weight(3, 2), Some(OrderedFloat(1.5)));
    assert_eq!(graph.edge_weight(1, 3), None);
}

#[test]
fn test_duplicate_edge_overwrites_weight() {
    let mut graph: WeightedGraph<W> = WeightedGraph::new();
    graph.add_edge(1, 2, OrderedFloat(4.0));
    graph.add_edge(1, 2, OrderedFloat(7.0));
    graph.add_edge(2, 1, OrderedFloat(2.5));

    // Last write wins in both directions, no accumulation
    assert_eq!(graph.edge_weight(1, 2), Some(OrderedFloat(2.5)));
    assert_eq!(graph.edge_weight(2, 1), Some(OrderedFloat(2.5)));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_edge_creates_missing_endpoints() {
    let mut graph: WeightedGraph<W> = WeightedGraph::new();
    graph.add_edge(10, 20, OrderedFloat(1.0));

    assert!(graph.has_vertex(10));
    assert!(graph.has_vertex(20));
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph: WeightedGraph<W> = WeightedGraph::new();
    graph.add_vertex(1);
    graph.add_vertex(1);
    graph.add_vertex_at(2, 0.5, 1.5);
    graph.add_vertex(2);

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.position(2), Some((0.5, 1.5)));
    assert_eq!(graph.position(1), None);
}

#[test]
fn test_neighbors_of_isolated_or_unknown_vertex_are_empty() {
    let mut graph: WeightedGraph<W> = WeightedGraph::new();
    graph.add_vertex(1);

    assert_eq!(graph.neighbors(1).count(), 0);
    assert_eq!(graph.neighbors(99).count(), 0);
}

#[test]
fn test_neighbors_iterate_in_ascending_order() {
    let mut graph: WeightedGraph<W> = WeightedGraph::new();
    graph.add_edge(5, 9, OrderedFloat(1.0));
    graph.add_edge(5, 2, OrderedFloat(2.0));
    graph.add_edge(5, 7, OrderedFloat(3.0));

    let neighbors: Vec<usize> = graph.neighbors(5).map(|(n, _)| n).collect();
    assert_eq!(neighbors, vec![2, 7, 9]);
}

#[test]
fn test_all_edges_lists_each_undirected_edge_once() {
    let mut graph: WeightedGraph<W> = WeightedGraph::new();
    graph.add_edge(3, 1, OrderedFloat(2.0));
    graph.add_edge(1, 2, OrderedFloat(4.0));
    graph.add_edge(2, 3, OrderedFloat(1.0));

    let edges = graph.all_edges();
    assert_eq!(edges.len(), 3);
    assert_eq!(graph.edge_count(), 3);

    // Ascending (u, v) scan order, reverse directions suppressed
    assert_eq!(
        edges,
        vec![
            (1, 2, OrderedFloat(4.0)),
            (1, 3, OrderedFloat(2.0)),
            (2, 3, OrderedFloat(1.0)),
        ]
    );
}

#[test]
fn test_self_loop_is_stored_as_given() {
    let mut graph: WeightedGraph<W> = WeightedGraph::new();
    graph.add_edge(1, 1, OrderedFloat(3.0));

    assert_eq!(graph.edge_weight(1, 1), Some(OrderedFloat(3.0)));
    assert_eq!(graph.all_edges(), vec![(1, 1, OrderedFloat(3.0))]);
}

#[test]
fn test_check_weights_accepts_non_negative_graph() {
    let mut graph: WeightedGraph<W> = WeightedGraph::new();
    graph.add_edge(1, 2, OrderedFloat(0.0));
    graph.add_edge(2, 3, OrderedFloat(5.0));

    assert!(graph.check_weights().is_ok());
}

#[test]
fn test_check_weights_reports_offending_edge() {
    let mut graph: WeightedGraph<W> = WeightedGraph::new();
    graph.add_edge(1, 2, OrderedFloat(5.0));
    graph.add_edge(2, 3, OrderedFloat(-1.0));

    assert_eq!(graph.check_weights(), Err(Error::NegativeWeight(2, 3)));
}
