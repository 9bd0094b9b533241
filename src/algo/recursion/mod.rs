//! Recursive algorithms.
//!
//! Functions whose natural recursive formulation has unbounded depth are
//! either bounded by an explicit maximum input ([`MAX_FACTORIAL_INPUT`],
//! [`MAX_FIBONACCI_INPUT`], [`MAX_HANOI_DISKS`]) or run on an explicit
//! stack (tree traversals, Tower of Hanoi).

mod factorial;
pub use factorial::*;

mod fibonacci;
pub use fibonacci::*;

mod hanoi;
pub use hanoi::*;

mod tree;
pub use tree::*;
