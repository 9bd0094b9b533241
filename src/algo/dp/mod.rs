//! Dynamic programming.
//!
//! Each function builds its table bottom-up and drops it on return; no
//! state survives between calls.

mod lcs;
pub use lcs::*;

mod knapsack;
pub use knapsack::*;

mod coin_change;
pub use coin_change::*;
