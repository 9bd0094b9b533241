//! Sorting algorithms.
//!
//! All sorts are generic over a total order: either the [`Ord`] instance of
//! the element type or, for the `_by` variants, a comparator that must be a
//! total order. Quadratic sorts work in place; divide-and-conquer sorts
//! return a new vector and leave the input untouched.
//!
//! | Sort                 | Time (worst) | Extra space | Stable |
//! |----------------------|--------------|-------------|--------|
//! | [`bubble_sort`]      | O(n²)        | O(1)        | yes    |
//! | [`selection_sort`]   | O(n²)        | O(1)        | no     |
//! | [`insertion_sort`]   | O(n²)        | O(1)        | yes    |
//! | [`merge_sort`]       | O(n log n)   | O(n)        | yes    |
//! | [`par_merge_sort`]   | O(n log n)   | O(n)        | yes    |
//! | [`quick_sort`]       | O(n²)        | O(n)        | yes    |

mod simple;
pub use simple::*;

mod merge;
pub use merge::*;

mod quick;
pub use quick::*;
