/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The classic-algo contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Classic algorithms: searching, sorting, recursion, dynamic programming,
//! greedy algorithms and graph algorithms.
//!
//! Every algorithm is a function returning an explicit result, or a small
//! reusable object (a [visit](algo::visits), a [cache](algo::recursion::FibonacciCache))
//! owned by the caller. Domain errors are reported through [`Error`].
//!
//! Algorithms on graphs take a [progress
//! logger](dsi_progress_logger::ProgressLog); pass `no_logging![]` to
//! disable logging.

pub mod algo;
pub mod error;
pub mod graphs;
pub mod utils;

pub use error::{Error, Result};

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
    pub use graphs::traits::*;
}

/// Use `use classic_algo::prelude::*;` to import common modules, functions
/// and all traits.
pub mod prelude {
    use super::*;
    pub use algo::dp;
    pub use algo::greedy;
    pub use algo::recursion;
    pub use algo::search;
    pub use algo::sort;
    pub use algo::visits::breadth_first;
    pub use algo::visits::depth_first;
    pub use algo::visits::{Interrupted, StoppedWhenDone};
    pub use algo::{bfs, bfs_distances, dfs, dijkstra, dijkstra_dense, ShortestPaths};
    pub use graphs::{NamedGraph, VecGraph};
    pub use traits::*;
    pub use super::Error;
}
