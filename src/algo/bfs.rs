use crate::algo::visits::{breadth_first, Sequential};
use crate::graphs::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;

/// Returns the nodes reachable from `start` in breadth-first order.
///
/// Nodes appear in non-decreasing order of distance from `start`; nodes at
/// the same distance appear in the order in which they are discovered
/// following adjacency order.
///
/// # Panics
///
/// If `start` is not a node of the graph.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::bfs;
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
/// let order = bfs(&graph, 0, no_logging![]);
/// assert_eq!(graph.names(order), ["A", "B", "C", "D", "E", "F"]);
/// ```
pub fn bfs(graph: impl RandomAccessGraph, start: usize, pl: &mut impl ProgressLog) -> Vec<usize> {
    let mut order = Vec::new();
    run(graph, start, pl, |curr, _| order.push(curr));
    order
}

/// Returns the distance in arcs of every node from `start`, or `None` for
/// nodes that are not reachable.
///
/// # Panics
///
/// If `start` is not a node of the graph.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::bfs_distances;
/// use classic_algo::graphs::VecGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (0, 2), (3, 0)]);
/// assert_eq!(
///     bfs_distances(&graph, 0, no_logging![]),
///     [Some(0), Some(1), Some(1), None]
/// );
/// ```
pub fn bfs_distances(
    graph: impl RandomAccessGraph,
    start: usize,
    pl: &mut impl ProgressLog,
) -> Vec<Option<usize>> {
    let mut distances = vec![None; graph.num_nodes()];
    run(graph, start, pl, |curr, distance| distances[curr] = Some(distance));
    distances
}

/// Calls `on_discovery` with each node reachable from `start` and its
/// distance, in breadth-first order.
fn run(
    graph: impl RandomAccessGraph,
    start: usize,
    pl: &mut impl ProgressLog,
    mut on_discovery: impl FnMut(usize, usize),
) {
    let num_nodes = graph.num_nodes();
    assert!(
        start < num_nodes,
        "Start node {start} is not smaller than the number of nodes ({num_nodes})"
    );

    let mut visit = breadth_first::Seq::new(&graph);
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.info(format_args!("Starting from node {start}"));
    pl.start("Visiting graph breadth-first...");

    visit
        .visit(
            start,
            |event| {
                if let breadth_first::EventPred::Unknown { curr, distance, .. } = event {
                    on_discovery(curr, distance);
                }
                Ok::<_, Infallible>(())
            },
            pl,
        )
        .unwrap_or_else(|never| match never {});

    pl.done();
}
