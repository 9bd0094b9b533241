//! Graph representations.
//!
//! Graphs have nodes `0..num_nodes()`, and every node has an ordered list
//! of successors, possibly labeled. Algorithms access graphs only through
//! the traits in [`traits`](crate::graphs::traits), so they work with any
//! representation; [`VecGraph`] is an adjacency-list implementation, and
//! [`NamedGraph`] adds names to its nodes.

pub mod traits;

mod vec_graph;
pub use vec_graph::*;

mod named;
pub use named::*;
