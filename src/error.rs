//! Error types for the algorithms in this crate.
//!
//! Domain errors are always reported through [`Error`]; "no solution"
//! outcomes (an absent element, an unreachable amount or node) are reported
//! as [`None`] by the functions that can produce them.

use thiserror::Error;

/// Error type for algorithm invocations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input is negative, but the function is defined only on
    /// non-negative integers.
    #[error("Negative input: {0}")]
    NegativeInput(i64),

    /// The result does not fit the output type.
    #[error("{operation}({input}) overflows (maximum input is {max})")]
    Overflow {
        operation: &'static str,
        input: u64,
        max: u64,
    },

    /// The Tower of Hanoi was requested with too many disks.
    #[error("Too many disks: {disks} (maximum is {max})")]
    TooManyDisks { disks: u32, max: u32 },

    /// Two parallel input slices have different lengths.
    #[error("Length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Activities are not sorted by finish time.
    #[error("Activities are not sorted by finish time at index {index}")]
    UnsortedActivities { index: usize },

    /// A Huffman code was requested for an empty alphabet.
    #[error("Empty alphabet")]
    EmptyAlphabet,

    /// The same symbol appears twice in a Huffman alphabet.
    #[error("Duplicate symbol at index {index}")]
    DuplicateSymbol { index: usize },

    /// A symbol to encode is not part of the alphabet.
    #[error("Unknown symbol at position {position}")]
    UnknownSymbol { position: usize },

    /// A bit string cannot be decoded.
    #[error("Invalid code at position {position}")]
    InvalidCode { position: usize },

    /// A child was added to a tree node that already has one on that side.
    #[error("Node {parent} already has a {side} child")]
    OccupiedChild { parent: usize, side: &'static str },

    /// A node name is not part of a named graph.
    #[error("Unknown node: {0}")]
    UnknownNode(String),
}

/// Result type for algorithm invocations.
pub type Result<T> = std::result::Result<T, Error>;
