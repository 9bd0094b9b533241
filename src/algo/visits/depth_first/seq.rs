use crate::algo::visits::{
    depth_first::{EventPred, FilterArgsPred},
    Sequential,
};
use crate::graphs::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use sux::bits::BitVec;

/// A sequential depth-first visit keeping track of predecessors.
///
/// This is an iterative implementation that does not need a large stack
/// size: the visit path is kept on an explicit stack of pairs made of an
/// iterator on the successors of a node and the parent of the node. Known
/// nodes are remembered using one bit per node.
///
/// Successors are explored in the order in which the graph enumerates them,
/// so the order of [previsit events](EventPred::Previsit) is the same as that
/// of the textbook recursive visit.
///
/// If the visit was interrupted, the nodes still on the visit path can be
/// retrieved using the [`stack`](Seq::stack) method.
///
/// The progress logger will be [invoked](ProgressLog::light_update) after
/// each [postvisit event](EventPred::Postvisit).
///
/// # Examples
///
/// Let us compute the reverse of a topological sort of an acyclic graph:
///
/// ```
/// use classic_algo::algo::visits::*;
/// use classic_algo::algo::visits::depth_first::*;
/// use classic_algo::graphs::VecGraph;
/// use dsi_progress_logger::no_logging;
/// use std::convert::Infallible;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (1, 3), (0, 3)]);
/// let mut visit = depth_first::Seq::new(&graph);
/// let mut postorder = Vec::new();
///
/// visit.visit_all(
///     |event| {
///         if let EventPred::Postvisit { curr, .. } = event {
///             postorder.push(curr);
///         }
///         Ok::<_, Infallible>(())
///     },
///     no_logging![]
/// ).unwrap();
///
/// assert_eq!(postorder, [2, 3, 1, 0]);
/// ```
pub struct Seq<'a, G: RandomAccessGraph> {
    graph: &'a G,
    /// Entries on this stack represent the iterator on the successors of a
    /// node and the parent of the node. This approach makes it possible to
    /// avoid storing both the current and the parent node in the stack.
    stack: Vec<(<G::Successors<'a> as IntoIterator>::IntoIter, usize)>,
    known: BitVec,
}

/// Alias emphasizing the type of events generated by [`Seq`].
pub type SeqPred<'a, G> = Seq<'a, G>;

/// The iterator returned by [`stack`](Seq::stack).
pub struct StackIterator<'a, 'b, G: RandomAccessGraph> {
    visit: &'b mut Seq<'a, G>,
}

impl<G: RandomAccessGraph> Iterator for StackIterator<'_, '_, G> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        // Since we put predecessors on the stack, the
        // first two stack entries are equal to the root,
        // so we avoid to return the first one
        if self.visit.stack.len() <= 1 {
            return None;
        }
        self.visit.stack.pop().map(|(_, parent)| parent)
    }
}

impl<'a, G: RandomAccessGraph> Seq<'a, G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            stack: Vec::with_capacity(16),
            known: BitVec::new(graph.num_nodes()),
        }
    }

    /// Returns an iterator over the nodes still on the visit path,
    /// except for the last one.
    ///
    /// Nodes will be returned in reverse order of visit.
    ///
    /// This method is useful only in the case of interrupted visits,
    /// as in a completed visit the stack will be empty. The last node
    /// on the visit path at the moment of the interruption must be
    /// treated separately.
    pub fn stack(&mut self) -> StackIterator<'a, '_, G> {
        StackIterator { visit: self }
    }
}

impl<G: RandomAccessGraph> Sequential<EventPred> for Seq<'_, G> {
    fn visit_filtered<E, C: FnMut(EventPred) -> Result<(), E>, F: FnMut(FilterArgsPred) -> bool>(
        &mut self,
        root: usize,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        if self.known[root]
            || !filter(FilterArgsPred {
                curr: root,
                pred: root,
                root,
                depth: 0,
            })
        {
            // We ignore the node: it might be visited later
            return Ok(());
        }

        callback(EventPred::Init { root })?;

        self.known.set(root, true);

        callback(EventPred::Previsit {
            curr: root,
            pred: root,
            root,
            depth: 0,
        })?;

        self.stack
            .push((self.graph.successors(root).into_iter(), root));

        // This variable keeps track of the current node being visited; the
        // parent node is derived at each iteration of the 'recurse loop.
        let mut current_node = root;

        'recurse: loop {
            // Successors of current_node are one level below it
            let depth = self.stack.len();
            let Some((iter, parent)) = self.stack.last_mut() else {
                callback(EventPred::Done { root })?;
                return Ok(());
            };

            for succ in iter {
                if self.known[succ] {
                    callback(EventPred::Revisit {
                        curr: succ,
                        pred: current_node,
                        root,
                        depth,
                    })?;
                } else if filter(FilterArgsPred {
                    curr: succ,
                    pred: current_node,
                    root,
                    depth,
                }) {
                    self.known.set(succ, true);

                    callback(EventPred::Previsit {
                        curr: succ,
                        pred: current_node,
                        root,
                        depth,
                    })?;
                    // current_node is the parent of succ
                    self.stack
                        .push((self.graph.successors(succ).into_iter(), current_node));

                    // At the next iteration, succ will be the current node
                    current_node = succ;

                    continue 'recurse;
                } // Else we ignore the node: it might be visited later
            }

            callback(EventPred::Postvisit {
                curr: current_node,
                pred: *parent,
                root,
                depth: depth - 1,
            })?;

            pl.light_update();

            // We're going up one stack level, so the next current_node
            // is the current parent.
            current_node = *parent;
            self.stack.pop();
        }
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
        self.stack.clear();
        self.known.fill(false);
    }
}
