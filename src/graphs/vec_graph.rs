use super::traits::{RandomAccessGraph, WeightedGraph};
use std::iter::Copied;
use std::slice::Iter;

/// A mutable graph stored as adjacency lists.
///
/// Each arc carries a label of type `L`; unlabeled graphs use `()`, and
/// weighted graphs `u64`. Successors are enumerated in the order in which
/// arcs were added. Parallel arcs and loops are allowed.
///
/// # Examples
///
/// ```
/// use classic_algo::graphs::VecGraph;
/// use classic_algo::graphs::traits::RandomAccessGraph;
///
/// let graph = VecGraph::from_arcs([(0, 1), (0, 2), (2, 3)]);
/// assert_eq!(graph.num_nodes(), 4);
/// assert_eq!(graph.successors(0).into_iter().collect::<Vec<_>>(), [1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecGraph<L = ()> {
    succ: Vec<Vec<(usize, L)>>,
    num_arcs: usize,
}

impl<L> Default for VecGraph<L> {
    fn default() -> Self {
        Self {
            succ: Vec::new(),
            num_arcs: 0,
        }
    }
}

impl<L> VecGraph<L> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `n` nodes and no arcs.
    pub fn empty(n: usize) -> Self {
        Self {
            succ: (0..n).map(|_| Vec::new()).collect(),
            num_arcs: 0,
        }
    }

    /// Ensures that `node` is a node of the graph, adding as many nodes as
    /// necessary.
    ///
    /// Returns true if the graph grew.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.succ.len();
        if node >= len {
            self.succ.resize_with(node + 1, Vec::new);
        }
        node >= len
    }

    /// Adds a labeled arc from `u` to `v`, adding nodes as needed.
    pub fn add_labeled_arc(&mut self, u: usize, v: usize, label: L) {
        self.add_node(u.max(v));
        self.succ[u].push((v, label));
        self.num_arcs += 1;
    }

    /// Creates a graph from an iterator of labeled arcs.
    pub fn from_labeled_arcs(arcs: impl IntoIterator<Item = (usize, usize, L)>) -> Self {
        let mut graph = Self::new();
        for (u, v, label) in arcs {
            graph.add_labeled_arc(u, v, label);
        }
        graph
    }

    /// Returns the successors of a node with their labels.
    pub fn labeled_successors(&self, node: usize) -> &[(usize, L)] {
        &self.succ[node]
    }
}

impl<L: Clone> VecGraph<L> {
    /// Adds a labeled arc from `u` to `v` and one from `v` to `u`.
    pub fn add_labeled_edge(&mut self, u: usize, v: usize, label: L) {
        self.add_labeled_arc(u, v, label.clone());
        self.add_labeled_arc(v, u, label);
    }
}

impl VecGraph {
    /// Adds an arc from `u` to `v`, adding nodes as needed.
    pub fn add_arc(&mut self, u: usize, v: usize) {
        self.add_labeled_arc(u, v, ());
    }

    /// Adds an arc from `u` to `v` and one from `v` to `u`.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.add_labeled_edge(u, v, ());
    }

    /// Creates a graph from an iterator of arcs.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self::from_labeled_arcs(arcs.into_iter().map(|(u, v)| (u, v, ())))
    }
}

/// Iterator over the successors of a node of a [`VecGraph`].
pub struct Successors<'a, L>(Iter<'a, (usize, L)>);

impl<L> Iterator for Successors<'_, L> {
    type Item = usize;

    #[inline(always)]
    fn next(&mut self) -> Option<usize> {
        self.0.next().map(|&(succ, _)| succ)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<L> ExactSizeIterator for Successors<'_, L> {}

impl<L> RandomAccessGraph for VecGraph<L> {
    type Successors<'a>
        = Successors<'a, L>
    where
        Self: 'a;

    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    fn successors(&self, node: usize) -> Self::Successors<'_> {
        Successors(self.succ[node].iter())
    }

    fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }
}

impl WeightedGraph for VecGraph<u64> {
    type WeightedSuccessors<'a> = Copied<Iter<'a, (usize, u64)>>;

    fn weighted_successors(&self, node: usize) -> Self::WeightedSuccessors<'_> {
        self.succ[node].iter().copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_growth() {
        let mut graph = VecGraph::<()>::new();
        assert_eq!(graph.num_nodes(), 0);
        graph.add_arc(3, 1);
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_arcs(), 1);
        assert!(!graph.add_node(2));
        assert!(graph.add_node(5));
        assert_eq!(graph.num_nodes(), 6);
        assert_eq!(graph.outdegree(5), 0);
        assert_eq!(VecGraph::<()>::empty(3).num_nodes(), 3);
        assert_eq!(VecGraph::<()>::empty(0).num_nodes(), 0);
    }

    #[test]
    fn test_weighted() {
        let mut graph = VecGraph::<u64>::new();
        graph.add_labeled_edge(0, 1, 7_u64);
        graph.add_labeled_arc(1, 2, 3);
        assert_eq!(graph.num_arcs(), 3);
        assert_eq!(
            graph.weighted_successors(1).collect::<Vec<_>>(),
            [(0, 7), (2, 3)]
        );
        assert_eq!(graph.successors(1).collect::<Vec<_>>(), [0, 2]);
    }
}
