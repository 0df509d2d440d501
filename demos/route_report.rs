use colored::*;
use ordered_float::OrderedFloat;
use relax_paths::{AdjacencyGraph, AlgorithmKind, MutableGraph, PathFinder};

type W = OrderedFloat<f64>;

fn build(edges: &[(&str, &str, f64)], sinks: &[&str]) -> AdjacencyGraph<String, W> {
    let mut graph: AdjacencyGraph<String, W> = edges
        .iter()
        .map(|(from, to, w)| (from.to_string(), to.to_string(), OrderedFloat(*w)))
        .collect();
    for sink in sinks {
        graph.add_node(sink.to_string());
    }
    graph
}

/// Negative weights: Dijkstra goes wrong, Bellman-Ford finds A -> F -> B -> D
fn negative_weights() -> AdjacencyGraph<String, W> {
    build(
        &[
            ("A", "B", 4.0),
            ("A", "C", 2.0),
            ("A", "F", 40.0),
            ("C", "B", 2.0),
            ("C", "C", 3.0),
            ("B", "D", -3.0),
            ("F", "B", -40.0),
        ],
        &["D"],
    )
}

fn non_negative() -> AdjacencyGraph<String, W> {
    build(
        &[
            ("A", "B", 4.0),
            ("A", "C", 2.0),
            ("C", "B", 2.0),
            ("C", "D", 3.0),
            ("B", "D", 3.0),
        ],
        &["D"],
    )
}

/// Undirected ring with an expensive shortcut and an isolated node F
fn trap() -> AdjacencyGraph<String, W> {
    let mut graph = AdjacencyGraph::new();
    graph.add_undirected_edge("A".to_string(), "B".to_string(), OrderedFloat(2.0));
    graph.add_undirected_edge("A".to_string(), "D".to_string(), OrderedFloat(15.0));
    graph.add_undirected_edge("B".to_string(), "C".to_string(), OrderedFloat(3.0));
    graph.add_undirected_edge("C".to_string(), "D".to_string(), OrderedFloat(4.0));
    graph.add_node("F".to_string());
    graph
}

fn report(title: &str, finder: &PathFinder<String, W>, algorithm: AlgorithmKind, targets: &[&str]) {
    println!("\n{} {}", title.bold(), format!("[{}]", algorithm).cyan());
    let source = "A".to_string();

    let result = match finder.compute(algorithm, &source) {
        Ok(result) => result,
        Err(e) => {
            println!("  {}", e.to_string().red());
            return;
        }
    };

    println!("Distances from {}:", source);
    let mut nodes: Vec<&String> = result.distances.keys().collect();
    nodes.sort();
    for node in nodes {
        match result.distance(node) {
            Some(d) => println!("  {} -> {}: {:.2}", source, node, d.into_inner()),
            None => println!("  {} -> {}: {}", source, node, "∞".dimmed()),
        }
    }

    for target in targets {
        let target = target.to_string();
        match finder.shortest_path_with(&source, &target, algorithm) {
            Ok(route) => match route.distance {
                Some(d) => println!(
                    "  {} {} (distance = {:.2})",
                    "path:".green(),
                    route.path.join(" -> "),
                    d.into_inner()
                ),
                None => println!("  {} no path from {} to {}", "path:".yellow(), source, target),
            },
            Err(e) => println!("  {}", e.to_string().red()),
        }
    }
}

fn main() {
    env_logger::init();

    let negative = PathFinder::new(negative_weights());
    report("Negative weights", &negative, AlgorithmKind::Dijkstra, &["D"]);
    report("Negative weights", &negative, AlgorithmKind::BellmanFord, &["D"]);

    let plain = PathFinder::new(non_negative());
    report("Non-negative weights", &plain, AlgorithmKind::Dijkstra, &["D"]);

    let undirected = PathFinder::new(trap());
    report("Undirected trap", &undirected, AlgorithmKind::Dijkstra, &["D", "F"]);
    report("Undirected trap", &undirected, AlgorithmKind::BellmanFord, &["D", "F"]);

    let mut cyclic = PathFinder::new(non_negative());
    cyclic.add_edge("D".to_string(), "A".to_string(), OrderedFloat(-10.0));
    report("Negative cycle", &cyclic, AlgorithmKind::Dijkstra, &["D"]);
    report("Negative cycle", &cyclic, AlgorithmKind::BellmanFord, &["D"]);
}
