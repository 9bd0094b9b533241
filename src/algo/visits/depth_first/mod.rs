//! Depth-first visits.
//!
//! Implementations must accept a callback function with argument
//! [`EventPred`]. The callback must be called at the [start of a
//! visit](EventPred::Init), [every time a new node is
//! discovered](EventPred::Previsit), [every time a node is
//! revisited](EventPred::Revisit), [every time the enumeration of the
//! successors of a node is completed](EventPred::Postvisit), and at the [end
//! of the visit](EventPred::Done).
//!
//! Note that since [`EventPred`] contains the predecessor of the visited
//! node, all post-start visit events can be interpreted as arc events. The
//! only exception are the previsit and postvisit events of the root.

mod seq;
pub use seq::*;

use super::Event;

/// Types of callback events generated during a depth-first visit
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
    Previsit {
        /// The current node.
        curr: usize,
        /// The parent of [curr](`EventPred::Previsit::curr`) in the visit
        /// tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path
        /// from the [root](`EventPred::Previsit::root`) to
        /// [curr](`EventPred::Previsit::curr`).
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        /// The current node.
        curr: usize,
        /// The predecessor of [curr](`EventPred::Revisit::curr`).
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path
        /// from the [root](`EventPred::Revisit::root`) to
        /// [curr](`EventPred::Revisit::curr`).
        depth: usize,
    },
    /// The enumeration of the successors of the node has been completed: we
    /// are retreating from a tree arc, unless all fields are equal to the
    /// root.
    Postvisit {
        /// The current node.
        curr: usize,
        /// The parent of [curr](`EventPred::Postvisit::curr`) in the visit
        /// tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path
        /// from the [root](`EventPred::Postvisit::root`) to
        /// [curr](`EventPred::Postvisit::curr`).
        depth: usize,
    },
    /// The visit has been completed.
    Done {
        /// The root of the current visit tree.
        root: usize,
    },
}

/// Filter arguments for visits that keep track of predecessors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    /// The current node.
    pub curr: usize,
    /// The predecessor of [curr](`Self::curr`).
    pub pred: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The depth of the visit, that is, the length of the visit path from the
    /// [root](`Self::root`) to [curr](`Self::curr`).
    pub depth: usize,
}

impl Event for EventPred {
    type FilterArgs = FilterArgsPred;
}
