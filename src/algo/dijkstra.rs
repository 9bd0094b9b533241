//! Single-source shortest paths on graphs with non-negative arc weights.
//!
//! Two implementations are provided: [`dijkstra`] uses a binary heap with
//! lazy deletion and runs in time *O*((*n* + *m*) log *n*), whereas
//! [`dijkstra_dense`] is the textbook quadratic algorithm that scans all
//! nodes to select the next one to settle, which is competitive on dense
//! graphs.
//!
//! Both implementations settle nodes in the same order (minimum tentative
//! distance, lowest index on ties) and relax arcs only on strict
//! improvement, so they return identical [`ShortestPaths`].
//!
//! Weights are `u64`, so negative weights cannot be represented. Distances
//! saturate at `u64::MAX`.

use crate::graphs::traits::WeightedGraph;
use crate::utils::math::filtered_argmin;
use dsi_progress_logger::ProgressLog;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use sux::bits::BitVec;

/// The result of a single-source shortest-path computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    root: usize,
    dist: Box<[Option<u64>]>,
    pred: Box<[Option<usize>]>,
}

impl ShortestPaths {
    /// Returns the source of the computation.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns the distance of `node` from the root, or `None` if `node` is
    /// not reachable.
    ///
    /// # Panics
    ///
    /// If `node` is not a node of the graph.
    pub fn distance(&self, node: usize) -> Option<u64> {
        self.dist[node]
    }

    /// Returns the distances of all nodes from the root.
    pub fn distances(&self) -> &[Option<u64>] {
        &self.dist
    }

    /// Returns the node preceding `node` on a shortest path from the root,
    /// or `None` if `node` is the root or it is not reachable.
    ///
    /// # Panics
    ///
    /// If `node` is not a node of the graph.
    pub fn predecessor(&self, node: usize) -> Option<usize> {
        self.pred[node]
    }

    /// Returns a shortest path from the root to `node`, both included, or
    /// `None` if `node` is not reachable.
    ///
    /// # Panics
    ///
    /// If `node` is not a node of the graph.
    pub fn path_to(&self, node: usize) -> Option<Vec<usize>> {
        self.dist[node]?;
        let mut path = vec![node];
        let mut curr = node;
        while let Some(pred) = self.pred[curr] {
            path.push(pred);
            curr = pred;
        }
        path.reverse();
        Some(path)
    }
}

fn check_start(num_nodes: usize, start: usize) {
    assert!(
        start < num_nodes,
        "Start node {start} is not smaller than the number of nodes ({num_nodes})"
    );
}

/// Computes shortest paths from `start` using a binary heap.
///
/// # Panics
///
/// If `start` is not a node of the graph.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::dijkstra;
/// use classic_algo::graphs::NamedGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = NamedGraph::from_labeled_adjacency([
///     ("A", vec![("B", 4_u64), ("C", 2)]),
///     ("B", vec![("A", 4), ("C", 1), ("D", 5)]),
///     ("C", vec![("A", 2), ("B", 1), ("D", 8), ("E", 10)]),
///     ("D", vec![("B", 5), ("C", 8), ("E", 2)]),
///     ("E", vec![("C", 10), ("D", 2)]),
/// ]);
/// let paths = dijkstra(&graph, 0, no_logging![]);
/// assert_eq!(paths.distance(graph.node("D").unwrap()), Some(8));
/// assert_eq!(graph.names(paths.path_to(4).unwrap()), ["A", "C", "B", "D", "E"]);
/// ```
pub fn dijkstra(
    graph: impl WeightedGraph,
    start: usize,
    pl: &mut impl ProgressLog,
) -> ShortestPaths {
    let num_nodes = graph.num_nodes();
    check_start(num_nodes, start);

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.info(format_args!("Starting from node {start}"));
    pl.start("Computing shortest paths...");

    let mut dist: Box<[Option<u64>]> = vec![None; num_nodes].into_boxed_slice();
    let mut pred: Box<[Option<usize>]> = vec![None; num_nodes].into_boxed_slice();
    let mut settled = BitVec::new(num_nodes);
    // Entries are (distance, node); stale entries are skipped when popped
    let mut queue = BinaryHeap::new();

    dist[start] = Some(0);
    queue.push(Reverse((0_u64, start)));

    while let Some(Reverse((d, node))) = queue.pop() {
        if settled[node] {
            continue;
        }
        settled.set(node, true);

        for (succ, weight) in graph.weighted_successors(node) {
            let candidate = d.saturating_add(weight);
            if dist[succ].is_none_or(|curr| candidate < curr) {
                dist[succ] = Some(candidate);
                pred[succ] = Some(node);
                queue.push(Reverse((candidate, succ)));
            }
        }

        pl.light_update();
    }

    pl.done();
    ShortestPaths {
        root: start,
        dist,
        pred,
    }
}

/// Computes shortest paths from `start` by repeatedly scanning all nodes
/// for the unsettled node with minimum tentative distance.
///
/// # Panics
///
/// If `start` is not a node of the graph.
pub fn dijkstra_dense(
    graph: impl WeightedGraph,
    start: usize,
    pl: &mut impl ProgressLog,
) -> ShortestPaths {
    let num_nodes = graph.num_nodes();
    check_start(num_nodes, start);

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.info(format_args!("Starting from node {start}"));
    pl.start("Computing shortest paths (dense)...");

    // Tentative distances are meaningful only for reached nodes
    let mut tentative = vec![u64::MAX; num_nodes];
    let mut reached = BitVec::new(num_nodes);
    let mut settled = BitVec::new(num_nodes);
    let mut pred = vec![None; num_nodes].into_boxed_slice();

    tentative[start] = 0;
    reached.set(start, true);

    while let Some(node) = filtered_argmin(&tentative, |i| reached[i] && !settled[i]) {
        settled.set(node, true);
        let d = tentative[node];

        for (succ, weight) in graph.weighted_successors(node) {
            let candidate = d.saturating_add(weight);
            if !reached[succ] || candidate < tentative[succ] {
                reached.set(succ, true);
                tentative[succ] = candidate;
                pred[succ] = Some(node);
            }
        }

        pl.light_update();
    }

    pl.done();
    ShortestPaths {
        root: start,
        dist: (0..num_nodes)
            .map(|node| reached[node].then_some(tentative[node]))
            .collect(),
        pred,
    }
}
