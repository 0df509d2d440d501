use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use relax_paths::graph::generators::{generate_grid, generate_random_float};
use relax_paths::{BellmanFord, Dijkstra, ShortestPathAlgorithm};

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    for &n in &[100usize, 500, 1_000] {
        let graph = generate_random_float(n, 4.0, 7);
        group.bench_with_input(BenchmarkId::new("dijkstra", n), &graph, |b, g| {
            b.iter(|| Dijkstra::new().compute_shortest_paths(g, black_box(&0)))
        });
        group.bench_with_input(BenchmarkId::new("bellman-ford", n), &graph, |b, g| {
            b.iter(|| BellmanFord::new().compute_shortest_paths(g, black_box(&0)))
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let graph = generate_grid(30, 30);
    c.bench_function("grid 30x30 dijkstra", |b| {
        b.iter(|| Dijkstra::new().compute_shortest_paths(&graph, black_box(&0)))
    });
}

criterion_group!(benches, bench_random, bench_grid);
criterion_main!(benches);
