use ordered_float::OrderedFloat;
use relax_paths::{AdjacencyGraph, AlgorithmKind, PathFinder};
use std::env;
use std::fs;
use std::process;

const USAGE: &str = "usage: shortest-path <graph.json> <source> <target> [dijkstra|bellman-ford] [--json]";

fn main() {
    // Initialize logging
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().skip(1).collect();
    let json_output = args.iter().any(|arg| arg == "--json");
    let positional: Vec<&String> = args.iter().filter(|arg| *arg != "--json").collect();

    if positional.len() < 3 {
        return Err(USAGE.into());
    }
    let (file, source, target) = (positional[0], positional[1], positional[2]);

    let document = fs::read_to_string(file)?;
    let graph: AdjacencyGraph<String, OrderedFloat<f64>> = AdjacencyGraph::from_json(&document)?;

    let algorithm = match positional.get(3) {
        Some(name) => name.parse::<AlgorithmKind>()?,
        None => AlgorithmKind::recommended_for(&graph),
    };

    let finder = PathFinder::new(graph);
    let route = finder.shortest_path_with(source, target, algorithm)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&route)?);
        return Ok(());
    }

    match route.distance {
        Some(distance) => {
            println!("{}: {}", algorithm, route.path.join(" -> "));
            println!("distance: {:.2}", distance.into_inner());
        }
        None => println!("{}: no path from {} to {}", algorithm, source, target),
    }

    Ok(())
}
