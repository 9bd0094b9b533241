/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The classic-algo contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use classic_algo::algo::{bfs, bfs_distances};
use classic_algo::graphs::traits::RandomAccessGraph;
use classic_algo::graphs::{NamedGraph, VecGraph};
use classic_algo::prelude::*;
use dsi_progress_logger::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::convert::Infallible;

fn reference_graph() -> NamedGraph {
    NamedGraph::from_adjacency([
        ("A", vec!["B", "C"]),
        ("B", vec!["A", "D", "E"]),
        ("C", vec!["A", "F"]),
        ("D", vec!["B"]),
        ("E", vec!["B", "F"]),
        ("F", vec!["C", "E"]),
    ])
}

/// The textbook breadth-first visit, storing distances in an array.
fn queue_bfs(graph: &impl RandomAccessGraph, start: usize) -> (Vec<usize>, Vec<Option<usize>>) {
    let mut dist = vec![None; graph.num_nodes()];
    let mut order = vec![];
    let mut queue = VecDeque::from([start]);
    dist[start] = Some(0);
    while let Some(node) = queue.pop_front() {
        order.push(node);
        for succ in graph.successors(node) {
            if dist[succ].is_none() {
                dist[succ] = dist[node].map(|d| d + 1);
                queue.push_back(succ);
            }
        }
    }
    (order, dist)
}

fn random_graph(rng: &mut StdRng, n: usize, m: usize) -> VecGraph {
    let mut graph = VecGraph::<()>::empty(n);
    for _ in 0..m {
        graph.add_arc(rng.random_range(0..n), rng.random_range(0..n));
    }
    graph
}

#[test]
fn test_reference_order() {
    let graph = reference_graph();
    let order = bfs(&graph, graph.node("A").unwrap(), no_logging![]);
    assert_eq!(graph.names(order), ["A", "B", "C", "D", "E", "F"]);

    let dist = bfs_distances(&graph, graph.node("D").unwrap(), no_logging![]);
    assert_eq!(dist, [2, 1, 3, 0, 2, 3].map(Some));
}

#[test]
fn test_matches_queue_visit() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..100 {
        let n = rng.random_range(1..60);
        let m = rng.random_range(0..3 * n);
        let graph = random_graph(&mut rng, n, m);
        let start = rng.random_range(0..n);

        let (order, dist) = queue_bfs(&graph, start);
        assert_eq!(bfs(&graph, start, no_logging![]), order);
        assert_eq!(bfs_distances(&graph, start, no_logging![]), dist);
    }
}

#[test]
fn test_order_by_distance() {
    let mut rng = StdRng::seed_from_u64(1);
    let graph = random_graph(&mut rng, 500, 1000);
    let order = bfs(&graph, 0, no_logging![]);
    let dist = bfs_distances(&graph, 0, no_logging![]);

    // Each node once, reachable nodes only, distances non-decreasing
    let mut seen = vec![false; 500];
    for &node in &order {
        assert!(!seen[node]);
        seen[node] = true;
    }
    assert_eq!(order.len(), dist.iter().filter(|d| d.is_some()).count());
    assert!(order.windows(2).all(|w| dist[w[0]] <= dist[w[1]]));
}

#[test]
#[should_panic]
fn test_start_out_of_range() {
    bfs(&VecGraph::<()>::empty(0), 0, no_logging![]);
}

#[test]
fn test_visit_all_trees() -> Result<()> {
    let graph = VecGraph::from_arcs([(0, 1), (2, 3), (3, 2), (4, 4)]);
    let mut visit = breadth_first::Seq::new(&graph);
    let mut parents = vec![usize::MAX; graph.num_nodes()];
    visit.visit_all(
        |event| {
            if let breadth_first::EventPred::Unknown { curr, pred, .. } = event {
                parents[curr] = pred;
            }
            Ok::<_, Infallible>(())
        },
        no_logging![],
    )?;
    assert_eq!(parents, [0, 0, 2, 2, 4]);
    Ok(())
}

#[test]
fn test_filtered_visit() -> Result<()> {
    let graph = reference_graph();
    let forbidden = graph.node("B").unwrap();
    let mut visit = breadth_first::Seq::new(&graph);
    let mut order = vec![];
    visit.visit_filtered(
        0,
        |event| {
            if let breadth_first::EventPred::Unknown { curr, .. } = event {
                order.push(curr);
            }
            Ok::<_, Infallible>(())
        },
        |args| args.curr != forbidden,
        no_logging![],
    )?;
    // D is reachable only through B
    assert_eq!(graph.names(order), ["A", "C", "F", "E"]);
    Ok(())
}

#[test]
fn test_stop_at_distance() {
    let graph = reference_graph();
    let mut visit = breadth_first::Seq::new(&graph);
    let mut order = vec![];
    let result = visit.visit(
        0,
        |event| match event {
            breadth_first::EventPred::Unknown { distance: 2, .. } => Err(StoppedWhenDone {}),
            breadth_first::EventPred::Unknown { curr, .. } => {
                order.push(curr);
                Ok(())
            }
            _ => Ok(()),
        },
        no_logging![],
    );
    assert!(result.is_err());
    assert_eq!(graph.names(order), ["A", "B", "C"]);
}
