//! Searching in sequences.
//!
//! [`linear_search`] has no precondition; the binary searches require the
//! sequence to be sorted in ascending order with respect to the comparator
//! used, or their result is unspecified (but they never panic).

mod linear;
pub use linear::*;

mod binary;
pub use binary::*;
