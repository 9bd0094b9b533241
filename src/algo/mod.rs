//! Module containing all algorithm implementations, grouped by family.

pub mod search;

pub mod sort;

pub mod recursion;

pub mod dp;

pub mod greedy;

pub mod visits;

pub mod bfs;
pub use bfs::{bfs, bfs_distances};

pub mod dfs;
pub use dfs::dfs;

pub mod dijkstra;
pub use dijkstra::{dijkstra, dijkstra_dense, ShortestPaths};

/// Traits used to interact with the implemented algorithms.
pub mod traits {
    pub use super::visits::Sequential;
}
