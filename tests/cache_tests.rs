use relax_paths::{AdjacencyGraph, AlgorithmKind, FinderConfig, PathFinder};
use std::sync::Arc;

fn chain() -> AdjacencyGraph<&'static str, i64> {
    vec![("A", "B", 5), ("B", "C", 5), ("A", "C", 20)].into_iter().collect()
}

#[test]
fn test_repeated_query_is_served_from_cache() {
    let finder = PathFinder::new(chain());

    let first = finder.dijkstra(&"A").unwrap();
    let second = finder.dijkstra(&"A").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(finder.cache_stats(), (1, 1));
}

#[test]
fn test_algorithm_and_source_are_part_of_the_key() {
    let finder = PathFinder::new(chain());

    let dijkstra = finder.dijkstra(&"A").unwrap();
    let bellman_ford = finder.bellman_ford(&"A").unwrap();
    let from_b = finder.dijkstra(&"B").unwrap();

    assert!(!Arc::ptr_eq(&dijkstra, &bellman_ford));
    assert_eq!(dijkstra.distances, bellman_ford.distances);
    assert_eq!(from_b.source, "B");
    assert_eq!(finder.cache_stats(), (0, 3));
    assert_eq!(finder.cached_results(), 3);
}

#[test]
fn test_mutation_invalidates_cached_results() {
    let mut finder = PathFinder::new(chain());

    let before = finder.shortest_path(&"A", &"C", "dijkstra").unwrap();
    assert_eq!(before.path, vec!["A", "B", "C"]);
    assert_eq!(before.distance, Some(10));

    finder.add_edge("A", "C", 1);

    let after = finder.shortest_path(&"A", &"C", "dijkstra").unwrap();
    assert_eq!(after.path, vec!["A", "C"]);
    assert_eq!(after.distance, Some(1));
    assert_eq!(finder.cache_stats(), (0, 2));
    assert_eq!(finder.cached_results(), 1);
}

#[test]
fn test_removing_an_edge_invalidates_cached_results() {
    let mut finder = PathFinder::new(chain());
    assert_eq!(finder.shortest_path(&"A", &"C", "bellman-ford").unwrap().distance, Some(10));

    assert_eq!(finder.remove_edge(&"B", &"C"), Some(5));

    let route = finder.shortest_path(&"A", &"C", "bellman-ford").unwrap();
    assert_eq!(route.path, vec!["A", "C"]);
    assert_eq!(route.distance, Some(20));
}

#[test]
fn test_last_result_tracks_graph_version() {
    let mut finder = PathFinder::new(chain());
    assert!(finder.last_result().is_none());

    finder.bellman_ford(&"A").unwrap();
    let (algorithm, result) = finder.last_result().expect("last result");
    assert_eq!(algorithm, AlgorithmKind::BellmanFord);
    assert_eq!(result.source, "A");

    finder.add_node("Z");
    assert!(finder.last_result().is_none());
}

#[test]
fn test_disabled_cache_recomputes() {
    let config = FinderConfig::new().with_cache(false);
    let finder = PathFinder::with_config(chain(), config);

    let first = finder.dijkstra(&"A").unwrap();
    let second = finder.dijkstra(&"A").unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);
    assert_eq!(finder.cache_stats(), (0, 2));
    assert_eq!(finder.cached_results(), 0);
    assert!(finder.last_result().is_some());
}

#[test]
fn test_cache_capacity_evicts_oldest() {
    let config = FinderConfig::new().with_cache_capacity(2);
    let finder = PathFinder::with_config(chain(), config);

    finder.dijkstra(&"A").unwrap();
    finder.dijkstra(&"B").unwrap();
    finder.dijkstra(&"C").unwrap();
    assert_eq!(finder.cached_results(), 2);

    // A was evicted first
    finder.dijkstra(&"A").unwrap();
    assert_eq!(finder.cache_stats(), (0, 4));
    finder.dijkstra(&"C").unwrap();
    assert_eq!(finder.cache_stats(), (1, 4));
}

#[test]
fn test_errors_are_not_cached() {
    let finder = PathFinder::new(chain());

    assert!(finder.dijkstra(&"missing").is_err());
    assert!(finder.dijkstra(&"missing").is_err());
    assert_eq!(finder.cached_results(), 0);
    assert_eq!(finder.cache_stats(), (0, 2));
}
