//! Breadth-first visits.
//!
//! Implementations must accept a callback function with argument
//! [`EventPred`]. The callback must be called at the [start of a
//! visit](EventPred::Init), [every time a new node is
//! discovered](EventPred::Unknown), [every time a node is
//! revisited](EventPred::Known), and at the [end of the
//! visit](EventPred::Done).

mod seq;
pub use seq::*;

use super::Event;

/// Types of callback events generated during a breadth-first visit
/// keeping track of parent nodes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// Initialization: all fields are equal to the root.
    /// This event should be used to set up state at the start of the visit.
    Init {
        /// The root of the current visit tree.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless all fields are equal to the root.
    Unknown {
        /// The current node.
        curr: usize,
        /// The parent of [curr](`EventPred::Unknown::curr`) in the visit tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The distance of [curr](`EventPred::Unknown::curr`) from the
        /// [root](`EventPred::Unknown::root`).
        distance: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Known {
        /// The current node.
        curr: usize,
        /// The predecessor of [curr](`EventPred::Known::curr`).
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
    },
    /// The visit has been completed.
    Done {
        /// The root of the current visit tree.
        root: usize,
    },
}

/// Filter arguments for breadth-first visits.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    /// The current node.
    pub curr: usize,
    /// The predecessor of [curr](`Self::curr`).
    pub pred: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The distance of [curr](`Self::curr`) from the [root](`Self::root`).
    pub distance: usize,
}

impl Event for EventPred {
    type FilterArgs = FilterArgsPred;
}
