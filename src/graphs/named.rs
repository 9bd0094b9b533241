use super::traits::{RandomAccessGraph, WeightedGraph};
use super::VecGraph;
use crate::{Error, Result};
use std::collections::HashMap;

/// A [`VecGraph`] whose nodes have names.
///
/// Nodes are numbered in order of first appearance of their name. Algorithms
/// work on node indices; [`node`](NamedGraph::node) and
/// [`name`](NamedGraph::name) translate between the two.
///
/// # Examples
///
/// ```
/// use classic_algo::graphs::NamedGraph;
///
/// let graph = NamedGraph::from_adjacency([("A", vec!["B", "C"]), ("B", vec!["A"])]);
/// assert_eq!(graph.node("C"), Some(2));
/// assert_eq!(graph.name(1), "B");
/// ```
#[derive(Debug, Clone)]
pub struct NamedGraph<L = ()> {
    graph: VecGraph<L>,
    names: Vec<String>,
    ids: HashMap<String, usize>,
}

impl<L> Default for NamedGraph<L> {
    fn default() -> Self {
        Self {
            graph: VecGraph::new(),
            names: Vec::new(),
            ids: HashMap::new(),
        }
    }
}

impl<L> NamedGraph<L> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node with the given name, adding it if necessary.
    pub fn add_node(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        self.graph.add_node(id);
        id
    }

    /// Adds a labeled arc between two named nodes, adding them if necessary.
    pub fn add_labeled_arc(&mut self, from: &str, to: &str, label: L) {
        let u = self.add_node(from);
        let v = self.add_node(to);
        self.graph.add_labeled_arc(u, v, label);
    }

    /// Creates a graph from labeled adjacency lists.
    ///
    /// Nodes are numbered in order of appearance, scanning each list after
    /// its source.
    pub fn from_labeled_adjacency<'a, S>(lists: impl IntoIterator<Item = (&'a str, S)>) -> Self
    where
        S: IntoIterator<Item = (&'a str, L)>,
    {
        let mut graph = Self::new();
        for (from, succ) in lists {
            graph.add_node(from);
            for (to, label) in succ {
                graph.add_labeled_arc(from, to, label);
            }
        }
        graph
    }

    /// Returns the index of the node with the given name.
    pub fn node(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Returns the index of the node with the given name, or an error.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNode`] if no node has the given name.
    pub fn try_node(&self, name: &str) -> Result<usize> {
        self.node(name).ok_or_else(|| Error::UnknownNode(name.to_owned()))
    }

    /// Returns the name of a node.
    pub fn name(&self, node: usize) -> &str {
        &self.names[node]
    }

    /// Maps a sequence of nodes to their names.
    pub fn names(&self, nodes: impl IntoIterator<Item = usize>) -> Vec<&str> {
        nodes.into_iter().map(|node| self.name(node)).collect()
    }

    /// Returns the underlying graph.
    pub fn graph(&self) -> &VecGraph<L> {
        &self.graph
    }
}

impl NamedGraph {
    /// Adds an arc between two named nodes, adding them if necessary.
    pub fn add_arc(&mut self, from: &str, to: &str) {
        self.add_labeled_arc(from, to, ());
    }

    /// Creates a graph from adjacency lists.
    pub fn from_adjacency<'a, S>(lists: impl IntoIterator<Item = (&'a str, S)>) -> Self
    where
        S: IntoIterator<Item = &'a str>,
    {
        Self::from_labeled_adjacency(
            lists
                .into_iter()
                .map(|(from, succ)| (from, succ.into_iter().map(|to| (to, ())))),
        )
    }
}

impl<L> RandomAccessGraph for NamedGraph<L> {
    type Successors<'a>
        = <VecGraph<L> as RandomAccessGraph>::Successors<'a>
    where
        Self: 'a;

    fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    fn num_arcs(&self) -> usize {
        self.graph.num_arcs()
    }

    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.graph.successors(node)
    }

    fn outdegree(&self, node: usize) -> usize {
        self.graph.outdegree(node)
    }
}

impl WeightedGraph for NamedGraph<u64> {
    type WeightedSuccessors<'a> = <VecGraph<u64> as WeightedGraph>::WeightedSuccessors<'a>;

    fn weighted_successors(&self, node: usize) -> Self::WeightedSuccessors<'_> {
        self.graph.weighted_successors(node)
    }
}
