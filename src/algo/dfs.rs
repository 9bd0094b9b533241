use crate::algo::visits::{depth_first, Sequential};
use crate::graphs::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;

/// Returns the nodes reachable from `start` in depth-first preorder.
///
/// Successors are explored in adjacency order, so the result is the order
/// in which a recursive depth-first visit would first reach each node. The
/// visit itself is iterative (see [`depth_first::Seq`]).
///
/// # Panics
///
/// If `start` is not a node of the graph.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::dfs;
/// use classic_algo::graphs::NamedGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = NamedGraph::from_adjacency([
///     ("A", vec!["B", "C"]),
///     ("B", vec!["A", "D", "E"]),
///     ("C", vec!["A", "F"]),
///     ("D", vec!["B"]),
///     ("E", vec!["B", "F"]),
///     ("F", vec!["C", "E"]),
/// ]);
/// let order = dfs(&graph, 0, no_logging![]);
/// assert_eq!(graph.names(order), ["A", "B", "D", "E", "F", "C"]);
/// ```
pub fn dfs(graph: impl RandomAccessGraph, start: usize, pl: &mut impl ProgressLog) -> Vec<usize> {
    let num_nodes = graph.num_nodes();
    assert!(
        start < num_nodes,
        "Start node {start} is not smaller than the number of nodes ({num_nodes})"
    );

    let mut visit = depth_first::Seq::new(&graph);
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.info(format_args!("Starting from node {start}"));
    pl.start("Visiting graph depth-first...");

    let mut order = Vec::new();
    visit
        .visit(
            start,
            |event| {
                if let depth_first::EventPred::Previsit { curr, .. } = event {
                    order.push(curr);
                }
                Ok::<_, Infallible>(())
            },
            pl,
        )
        .unwrap_or_else(|never| match never {});

    pl.done();
    order
}
