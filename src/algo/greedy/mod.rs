//! Greedy algorithms.

mod activity;
pub use activity::*;

mod huffman;
pub use huffman::*;
