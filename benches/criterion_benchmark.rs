/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dsi_progress_logger::prelude::*;
use fork_join_maze::prelude::*;
use webgraph::graphs::vec_graph::VecGraph;
use webgraph::traits::SequentialLabeling;

const NUM_SAMPLES: usize = 20;
const ARITY: usize = 5;
const DEPTH: u32 = 7;

/// A complete tree of the given arity whose only goal is its last leaf.
fn tree_maze() -> (VecGraph, usize) {
    let num_nodes = (ARITY.pow(DEPTH) - 1) / (ARITY - 1);
    let graph = VecGraph::from_arcs((1..num_nodes).flat_map(|node| {
        let parent = (node - 1) / ARITY;
        [(parent, node), (node, parent)]
    }));
    (graph, num_nodes - 1)
}

pub fn bench_fork_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fork/join search");
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);

    let (graph, goal) = tree_maze();
    let maze = GraphMaze::new(&graph, [goal]);
    let threads = Threads::Default.build().unwrap();
    let parameter = format!("tree ({} nodes)", graph.num_nodes());
    group.throughput(Throughput::Elements(graph.num_nodes() as u64));

    for fork_threshold in [1, DEFAULT_FORK_THRESHOLD, ARITY, usize::MAX] {
        group.bench_with_input(
            BenchmarkId::new(format!("threshold {}", fork_threshold), &parameter),
            &fork_threshold,
            |b, &fork_threshold| {
                b.iter_with_large_drop(|| {
                    ForkJoinSolver::new(&maze)
                        .fork_threshold(fork_threshold)
                        .solve(0, &threads, no_logging![])
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fork_threshold);
criterion_main!(benches);
