use crate::algo::visits::{
    breadth_first::{EventPred, FilterArgsPred},
    Sequential,
};
use crate::graphs::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use nonmax::NonMaxUsize;
use std::collections::VecDeque;
use sux::bits::BitVec;

/// A sequential breadth-first visit.
///
/// This implementation uses an algorithm that is slightly different from the
/// classical textbook algorithm, as we do not store parents or distances of the
/// nodes from the root: parents and distances are computed on the fly and
/// passed to the callback function by visiting nodes when they are discovered,
/// rather than when they are extracted from the queue. The order of
/// [discovery events](EventPred::Unknown) is nonetheless the textbook one.
///
/// This approach requires inserting a level separator between nodes at
/// different distances: to obtain this result in a compact way, nodes are
/// represented using [`NonMaxUsize`], so the `None` variant of
/// `Option<NonMaxUsize>` can be used as a separator.
///
/// The progress logger will be [invoked](ProgressLog::light_update) after
/// the successors of each node have been enumerated.
///
/// # Examples
///
/// Let's compute the distances from 0:
///
/// ```
/// use classic_algo::algo::visits::*;
/// use classic_algo::graphs::VecGraph;
/// use dsi_progress_logger::no_logging;
/// use std::convert::Infallible;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3), (3, 3)]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut d = [0; 4];
/// visit.visit(
///     0,
///     |event| {
///         // Set distance from 0
///         if let breadth_first::EventPred::Unknown { curr, distance, .. } = event {
///             d[curr] = distance;
///         }
///         Ok::<_, Infallible>(())
///     },
///     no_logging![]
/// ).unwrap();
/// assert_eq!(d, [0, 1, 2, 2]);
/// ```
pub struct Seq<G: RandomAccessGraph> {
    graph: G,
    visited: BitVec,
    /// The visit queue; to avoid storing distances, we use `None` as a
    /// separator between levels. [`NonMaxUsize`] is used to avoid
    /// storage for the option variant tag.
    queue: VecDeque<Option<NonMaxUsize>>,
}

/// Alias emphasizing the type of events generated by [`Seq`].
pub type SeqPred<G> = Seq<G>;

impl<G: RandomAccessGraph> Seq<G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit; usually, a reference.
    pub fn new(graph: G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            queue: VecDeque::new(),
        }
    }
}

/// Wraps a node for the queue.
///
/// Nodes index the visited bit vector, so they are smaller than
/// `usize::MAX` and never collide with the level separator.
#[inline(always)]
fn enqueued(node: usize) -> Option<NonMaxUsize> {
    debug_assert_ne!(node, usize::MAX);
    NonMaxUsize::new(node)
}

impl<G: RandomAccessGraph> Sequential<EventPred> for Seq<G> {
    fn visit_filtered<E, C: FnMut(EventPred) -> Result<(), E>, F: FnMut(FilterArgsPred) -> bool>(
        &mut self,
        root: usize,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        if self.visited[root]
            || !filter(FilterArgsPred {
                curr: root,
                pred: root,
                root,
                distance: 0,
            })
        {
            return Ok(());
        }

        callback(EventPred::Init { root })?;

        self.visited.set(root, true);

        callback(EventPred::Unknown {
            curr: root,
            pred: root,
            root,
            distance: 0,
        })?;

        self.queue.push_back(enqueued(root));
        self.queue.push_back(None);

        let mut distance = 1;

        while let Some(current_node) = self.queue.pop_front() {
            match current_node {
                Some(node) => {
                    let node = node.get();
                    for succ in self.graph.successors(node) {
                        if !self.visited[succ] {
                            if filter(FilterArgsPred {
                                curr: succ,
                                pred: node,
                                root,
                                distance,
                            }) {
                                self.visited.set(succ, true);
                                callback(EventPred::Unknown {
                                    curr: succ,
                                    pred: node,
                                    root,
                                    distance,
                                })?;
                                self.queue.push_back(enqueued(succ));
                            }
                        } else {
                            callback(EventPred::Known {
                                curr: succ,
                                pred: node,
                                root,
                            })?;
                        }
                    }
                    pl.light_update();
                }
                None => {
                    // We are at the end of the current level, so
                    // we increment the distance and add a separator.
                    if !self.queue.is_empty() {
                        distance += 1;
                        self.queue.push_back(None);
                    }
                }
            }
        }

        callback(EventPred::Done { root })
    }

    fn visit_all_filtered<
        E,
        C: FnMut(EventPred) -> Result<(), E>,
        F: FnMut(FilterArgsPred) -> bool,
    >(
        &mut self,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        for node in 0..self.graph.num_nodes() {
            self.visit_filtered(node, &mut callback, &mut filter, pl)?;
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.visited.fill(false);
    }
}
