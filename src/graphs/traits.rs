/// A graph providing random access to the successors of its nodes.
///
/// Successors are enumerated in a fixed order, which determines the order
/// in which visits discover nodes.
pub trait RandomAccessGraph {
    /// The iterator over the successors of a node.
    type Successors<'a>: IntoIterator<Item = usize>
    where
        Self: 'a;

    /// Returns the number of nodes.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs.
    fn num_arcs(&self) -> usize;

    /// Returns the successors of a node.
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of a node.
    fn outdegree(&self, node: usize) -> usize;
}

/// A graph whose arcs carry a non-negative integer weight.
pub trait WeightedGraph: RandomAccessGraph {
    /// The iterator over the successors of a node and the weight of the
    /// corresponding arcs.
    type WeightedSuccessors<'a>: IntoIterator<Item = (usize, u64)>
    where
        Self: 'a;

    /// Returns the successors of a node with the weight of the
    /// corresponding arcs.
    fn weighted_successors(&self, node: usize) -> Self::WeightedSuccessors<'_>;
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    type Successors<'a>
        = G::Successors<'a>
    where
        Self: 'a;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        (**self).num_arcs()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        (**self).successors(node)
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        (**self).outdegree(node)
    }
}

impl<G: WeightedGraph + ?Sized> WeightedGraph for &G {
    type WeightedSuccessors<'a>
        = G::WeightedSuccessors<'a>
    where
        Self: 'a;

    #[inline(always)]
    fn weighted_successors(&self, node: usize) -> Self::WeightedSuccessors<'_> {
        (**self).weighted_successors(node)
    }
}
