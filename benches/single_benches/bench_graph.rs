use super::params::*;
use classic_algo::algo::{bfs, dfs, dijkstra, dijkstra_dense};
use classic_algo::graphs::VecGraph;
use criterion::{BenchmarkId, Criterion, Throughput};
use dsi_progress_logger::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(n: usize) -> VecGraph<u64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut graph = VecGraph::empty(n);
    // A cycle through all nodes makes every node reachable from 0
    for node in 0..n {
        graph.add_labeled_arc(node, (node + 1) % n, rng.random_range(1..100));
    }
    for _ in 0..7 * n {
        let (u, v) = (rng.random_range(0..n), rng.random_range(0..n));
        graph.add_labeled_arc(u, v, rng.random_range(1..100));
    }
    graph
}

pub fn bench_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("Graph");
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);

    for n in GRAPH_SIZES {
        let graph = random_graph(n);
        let parameter = format!("{n} nodes");
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("Depth-first", &parameter), &graph, |b, g| {
            b.iter_with_large_drop(|| dfs(g, 0, no_logging![]))
        });
        group.bench_with_input(BenchmarkId::new("Breadth-first", &parameter), &graph, |b, g| {
            b.iter_with_large_drop(|| bfs(g, 0, no_logging![]))
        });
        group.bench_with_input(BenchmarkId::new("Dijkstra", &parameter), &graph, |b, g| {
            b.iter_with_large_drop(|| dijkstra(g, 0, no_logging![]))
        });
        // The quadratic form is too slow on the larger graphs
        if n <= 10_000 {
            group.bench_with_input(
                BenchmarkId::new("Dijkstra (dense)", &parameter),
                &graph,
                |b, g| b.iter_with_large_drop(|| dijkstra_dense(g, 0, no_logging![])),
            );
        }
    }

    group.finish();
}
