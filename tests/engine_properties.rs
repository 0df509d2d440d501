use relax_paths::algorithm::path::path_weight;
use relax_paths::graph::generators::{generate_dag, generate_random};
use relax_paths::{AlgorithmKind, BellmanFord, Dijkstra, Graph, ShortestPathAlgorithm};

const SEEDS: std::ops::Range<u64> = 0..20;

#[test]
fn test_engines_agree_on_non_negative_weights() {
    for seed in SEEDS {
        // Zero weights included on purpose
        let graph = generate_random(40, 3.0, 0..50, seed);

        let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap();
        let bellman_ford = BellmanFord::new().compute_shortest_paths(&graph, &0).unwrap();

        assert_eq!(dijkstra.distances, bellman_ford.distances, "seed {}", seed);
    }
}

#[test]
fn test_path_weights_match_distances() {
    for seed in SEEDS {
        let graph = generate_random(40, 3.0, 1..20, seed);

        for algorithm in [AlgorithmKind::Dijkstra, AlgorithmKind::BellmanFord] {
            let result = algorithm.run(&graph, &0).unwrap();

            for node in graph.node_universe() {
                let path = result.path_to(&node);
                match result.distance(&node) {
                    Some(distance) => {
                        assert_eq!(path.first(), Some(&0), "seed {} {}", seed, algorithm);
                        assert_eq!(path.last(), Some(&node));
                        assert_eq!(path_weight(&graph, &path), Some(distance), "seed {} {}", seed, algorithm);
                    }
                    None => assert!(path.is_empty(), "seed {} {}: path to unreached {}", seed, algorithm, node),
                }
            }
        }
    }
}

#[test]
fn test_bellman_ford_on_negative_dag() {
    for seed in SEEDS {
        let graph = generate_dag(30, 3.0, -20..30, seed);
        assert!(graph.has_negative_weight() || graph.edge_count() == 0);

        let result = BellmanFord::new().compute_shortest_paths(&graph, &0).unwrap();
        assert_eq!(result.distance(&0), Some(0));

        for node in graph.node_universe() {
            if let Some(distance) = result.distance(&node) {
                let path = result.path_to(&node);
                assert_eq!(path_weight(&graph, &path), Some(distance), "seed {}", seed);
            }
        }

        // Every edge out of a reached node is settled
        for (u, v, w) in graph.edges() {
            if let Some(du) = result.distance(u) {
                let dv = result.distance(v).expect("head of a reached edge is reached");
                assert!(dv <= du + w, "seed {}: edge {} -> {} still relaxes", seed, u, v);
            }
        }
    }
}

#[test]
fn test_repeated_queries_are_identical() {
    let graph = generate_random(60, 4.0, 0..100, 42);

    for algorithm in [AlgorithmKind::Dijkstra, AlgorithmKind::BellmanFord] {
        let first = algorithm.run(&graph, &3).unwrap();
        let second = algorithm.run(&graph, &3).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_source_distance_is_zero() {
    for seed in SEEDS {
        let graph = generate_random(25, 2.0, 0..10, seed);
        for source in [0, 7, 24] {
            let result = Dijkstra::new().compute_shortest_paths(&graph, &source).unwrap();
            assert_eq!(result.distance(&source), Some(0));
            assert_eq!(result.predecessor(&source), None);
            assert_eq!(result.distances.len(), graph.node_universe().len());
        }
    }
}
