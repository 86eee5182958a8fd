// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Walk search benchmarks on seeded random graphs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dirgraph::algo::{backward_dijkstra, longest_path, min_cost_walk, topological_order};
use dirgraph::graph::DirectedGraph;
use dirgraph::random::generate_random_graph;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_graph(vertices: usize, edges: usize) -> DirectedGraph {
    let mut rng = StdRng::seed_from_u64(42);
    generate_random_graph(vertices, edges, 200, &mut rng).unwrap()
}

/// A layered DAG: every edge goes from a lower to a higher id
fn forward_dag(vertices: usize) -> DirectedGraph {
    let mut graph = DirectedGraph::with_vertices(vertices);
    for from in 0..vertices {
        for step in [1, 3, 7] {
            let to = from + step;
            if to < vertices {
                graph.add_edge(from, to, (from * step % 17) as i64).unwrap();
            }
        }
    }
    graph
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("backward_dijkstra");
    for size in [100, 1_000, 10_000] {
        let graph = random_graph(size, size * 4);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| backward_dijkstra(graph, black_box(size - 1)).unwrap());
        });
    }
    group.finish();
}

fn bench_dag(c: &mut Criterion) {
    let graph = forward_dag(10_000);
    c.bench_function("topological_order", |b| {
        b.iter(|| topological_order(black_box(&graph)));
    });
    c.bench_function("longest_path", |b| {
        b.iter(|| longest_path(black_box(&graph), 0, 9_999).unwrap());
    });
}

fn bench_bellman_ford(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_cost_walk");
    group.sample_size(20);
    for size in [50, 200] {
        let graph = random_graph(size, size * 3);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| min_cost_walk(graph, 0, black_box(size - 1)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dijkstra, bench_dag, bench_bellman_ford);
criterion_main!(benches);
