use ordered_float::OrderedFloat;
use relax_paths::{AdjacencyGraph, AlgorithmKind, Error, Graph, MutableGraph, PathFinder};
use std::collections::HashMap;

#[test]
fn test_add_edge_overwrites_previous_weight() {
    let mut graph: AdjacencyGraph<&str, i64> = AdjacencyGraph::new();

    assert_eq!(graph.add_edge("A", "B", 4), None);
    assert_eq!(graph.add_edge("A", "B", 7), Some(4));

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(&"A", &"B"), Some(7));
    assert!(!graph.has_edge(&"B", &"A"));
}

#[test]
fn test_undirected_edge_inserts_both_directions() {
    let mut graph: AdjacencyGraph<&str, i64> = AdjacencyGraph::new();
    graph.add_undirected_edge("A", "B", 3);

    assert_eq!(graph.edge_weight(&"A", &"B"), Some(3));
    assert_eq!(graph.edge_weight(&"B", &"A"), Some(3));
    assert_eq!(graph.edge_count(), 2);

    graph.add_undirected_edge("B", "A", 9);
    assert_eq!(graph.edge_weight(&"A", &"B"), Some(9));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_node_universe_includes_neighbor_only_nodes() {
    let mut graph: AdjacencyGraph<&str, i64> = AdjacencyGraph::new();
    graph.add_edge("A", "B", 1);
    graph.add_node("Z");

    let universe = graph.node_universe();
    assert_eq!(universe.len(), 3);
    assert_eq!(universe.sorted(), vec![&"A", &"B", &"Z"]);
    assert!(graph.adjacency().get(&"B").is_none());

    // Recomputed after mutation
    graph.add_edge("B", "C", 1);
    assert!(graph.node_universe().contains(&"C"));
    assert_eq!(universe.len(), 3);
}

#[test]
fn test_version_advances_on_mutation() {
    let mut graph: AdjacencyGraph<&str, i64> = AdjacencyGraph::new();
    let v0 = graph.version();

    graph.add_edge("A", "B", 1);
    let v1 = graph.version();
    assert!(v1 > v0);

    assert!(!graph.add_node("A"));
    assert_eq!(graph.version(), v1);

    assert_eq!(graph.remove_edge(&"A", &"C"), None);
    assert_eq!(graph.version(), v1);

    assert_eq!(graph.remove_edge(&"A", &"B"), Some(1));
    assert!(graph.version() > v1);
    // A stays in the universe as a node without edges
    assert!(graph.node_universe().contains(&"A"));
}

#[test]
fn test_from_adjacency_structure() {
    let adjacency: HashMap<&str, HashMap<&str, i64>> = HashMap::from([
        ("A", HashMap::from([("B", 4), ("C", 2)])),
        ("C", HashMap::from([("B", 2), ("D", 3)])),
        ("B", HashMap::from([("D", 3)])),
        ("D", HashMap::new()),
    ]);
    let graph = AdjacencyGraph::from_adjacency(adjacency);

    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.node_universe().len(), 4);
    assert_eq!(graph.outgoing_edges(&"D").count(), 0);
    assert_eq!(graph.outgoing_edges(&"missing").count(), 0);
}

#[test]
fn test_from_json() {
    let json = r#"{
        "A": {"B": 4, "C": 2, "F": 40},
        "C": {"B": 2},
        "B": {"D": -3},
        "D": {},
        "F": {"B": -40}
    }"#;
    let graph: AdjacencyGraph<String, OrderedFloat<f64>> = AdjacencyGraph::from_json(json).unwrap();

    assert_eq!(graph.edge_count(), 6);
    assert!(graph.has_negative_weight());
    assert_eq!(AlgorithmKind::recommended_for(&graph), AlgorithmKind::BellmanFord);

    let reparsed: AdjacencyGraph<String, OrderedFloat<f64>> =
        AdjacencyGraph::from_json(&graph.to_json().unwrap()).unwrap();
    assert_eq!(reparsed.adjacency(), graph.adjacency());

    let finder = PathFinder::new(graph);
    let route = finder
        .shortest_path(&"A".to_string(), &"D".to_string(), "bellman-ford")
        .unwrap();
    assert_eq!(route.path, vec!["A", "F", "B", "D"]);
    assert_eq!(route.distance, Some(OrderedFloat(-3.0)));
}

#[test]
fn test_invalid_json_is_rejected() {
    let result: Result<AdjacencyGraph<String, i64>, Error> = AdjacencyGraph::from_json(r#"{"A": {"B": "heavy"}}"#);
    assert!(matches!(result, Err(Error::InvalidGraph(_))));
}

#[test]
fn test_algorithm_names() {
    assert_eq!("dijkstra".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Dijkstra);
    assert_eq!("bellman-ford".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::BellmanFord);
    assert!(matches!("Dijkstra".parse::<AlgorithmKind>(), Err(Error::UnknownAlgorithm(_))));
    assert_eq!(AlgorithmKind::BellmanFord.to_string(), "bellman-ford");

    let graph: AdjacencyGraph<&str, i64> = vec![("A", "B", 1)].into_iter().collect();
    assert_eq!(AlgorithmKind::recommended_for(&graph), AlgorithmKind::Dijkstra);
}
