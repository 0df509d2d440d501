use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use relax_paths::graph::generators::generate_random_float;
use relax_paths::{AdjacencyGraph, BellmanFord, Dijkstra, Graph, ShortestPathAlgorithm};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &AdjacencyGraph<usize, OrderedFloat<f64>>, source: usize) -> Result<(Duration, usize), relax_paths::Error>
where
    A: ShortestPathAlgorithm,
{
    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, &source)?;
    let duration = start.elapsed();

    let reached = result.reached_count();
    println!("  - {}: {} reachable nodes in {:?}", algorithm.name(), reached, duration);

    Ok((duration, reached))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Bellman-Ford is O(V * E), keep sizes modest
    let sizes: Vec<usize> = match std::env::args().nth(1) {
        Some(max) => {
            let max: usize = max.parse()?;
            [100, 500, 1_000, 2_000, 5_000, 10_000]
                .into_iter()
                .filter(|&n| n <= max)
                .collect()
        }
        None => vec![100, 500, 1_000, 2_000],
    };

    // Edge factor: average number of edges per node
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Bellman-Ford");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let bellman_ford = BellmanFord::new();

    let mut results = Vec::new();

    for &size in &sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = generate_random_float(size, edge_factor, size as u64);
        let source = 0;

        println!("Graph has {} nodes and {} edges", graph.node_universe().len(), graph.edge_count());

        let (dijkstra_time, dijkstra_reached) = benchmark_algorithm(&dijkstra, &graph, source)?;
        let (bellman_time, bellman_reached) = benchmark_algorithm(&bellman_ford, &graph, source)?;

        if dijkstra_reached != bellman_reached {
            eprintln!("  ! engines disagree on reachability: {} vs {}", dijkstra_reached, bellman_reached);
        }

        results.push((size, dijkstra_time, bellman_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<18} | {:<10}", "Nodes", "Dijkstra (ms)", "Bellman-Ford (ms)", "Ratio");
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, bellman_time) in &results {
        let ratio = bellman_time.as_secs_f64() / dijkstra_time.as_secs_f64().max(f64::EPSILON);

        println!(
            "{:<10} | {:<15.3} | {:<18.3} | {:<10.2}",
            size,
            dijkstra_time.as_secs_f64() * 1000.0,
            bellman_time.as_secs_f64() * 1000.0,
            ratio
        );
    }

    Ok(())
}
