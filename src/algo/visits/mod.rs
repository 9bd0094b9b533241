//! Visits on graphs.
//!
//! Implementation of [sequential visits](Sequential) depend on a type
//! parameter `A` that implements the trait [`Event`]; they provide visit
//! methods accepting a callback function with argument `A` and returning a
//! `Result<(), E>`, where `E` is a type parameter of the visit method: for
//! example, `E` might be [`StoppedWhenDone`] when completing early,
//! [`Interrupted`] when interrupted or [`Infallible`](std::convert::Infallible)
//! if the visit cannot be interrupted.
//!
//! If a callback returns an error, the visit will be interrupted, and the
//! error will be returned by the visit method; it is up to the visit
//! implementation to restore a coherent state, so that [`reset`] can be
//! called and the visit reused.
//!
//! Visits can also be filtered by a filter function accepting an argument of
//! type [`Event::FilterArgs`]. The filter is called when a node is discovered
//! for the first time: if it returns false, the node is ignored, but it might
//! be discovered again through another arc.
//!
//! Visits are iterative, so visiting deep graphs does not need a large
//! call stack.
//!
//! [`reset`]: Sequential::reset

pub mod breadth_first;
pub mod depth_first;

use dsi_progress_logger::ProgressLog;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Stopped when done")]
/// A signal that the visit completed early.
pub struct StoppedWhenDone {}

#[derive(Error, Debug)]
#[error("The visit was interrupted")]
/// The result of the visit was interrupted.
pub struct Interrupted {}

/// Types usable as arguments for the callbacks in visits.
///
/// Arguments are usually enums in which variants represent visit events
/// (previsits, postvisits, etc.). Each variant then contains data specific
/// to the visit event.
///
/// This trait is used to associate a type of filter arguments to the event.
pub trait Event {
    /// The type passed as input to the filter.
    type FilterArgs;
}

/// A sequential visit.
///
/// Implementation of this trait must provide the
/// [`visit_filtered`](Sequential::visit_filtered) method, which should
/// perform a visit of a graph starting from a given node, and the
/// [`visit_all_filtered`](Sequential::visit_all_filtered) method, which
/// should perform a visit of the whole graph, starting from every node in
/// increasing index order.
///
/// For each node, the visit should invoke a callback with argument of type
/// `A`. In particular, the callback will be called every time a new node is
/// discovered, every time a node is revisited, and, if supported, every time
/// the enumeration of the successors of a node is completed.
pub trait Sequential<A: Event> {
    /// Visits the graph from the specified node.
    ///
    /// # Arguments
    /// * `root`: The node to start the visit from.
    ///
    /// * `callback`: The callback function.
    ///
    /// * `filter`: The filter function.
    ///
    /// * `pl`: A progress logger that implements
    ///   [`dsi_progress_logger::ProgressLog`] may be passed to the method to
    ///   log the progress of the visit. If `no_logging![]` is passed, logging
    ///   code should be optimized away by the compiler.
    fn visit_filtered<E, C: FnMut(A) -> Result<(), E>, F: FnMut(A::FilterArgs) -> bool>(
        &mut self,
        root: usize,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E>;

    /// Visits the graph from the specified node without a filter.
    ///
    /// The default implementation calls
    /// [`visit_filtered`](Sequential::visit_filtered) with a filter that
    /// always returns true.
    #[inline(always)]
    fn visit<E, C: FnMut(A) -> Result<(), E>>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        self.visit_filtered(root, callback, |_| true, pl)
    }

    /// Visits the whole graph.
    ///
    /// See [`visit_filtered`](Sequential::visit_filtered) for more details.
    fn visit_all_filtered<E, C: FnMut(A) -> Result<(), E>, F: FnMut(A::FilterArgs) -> bool>(
        &mut self,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E>;

    /// Visits the whole graph without a filter.
    ///
    /// The default implementation calls
    /// [`visit_all_filtered`](Sequential::visit_all_filtered) with a filter
    /// that always returns true.
    #[inline(always)]
    fn visit_all<E, C: FnMut(A) -> Result<(), E>>(
        &mut self,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        self.visit_all_filtered(callback, |_| true, pl)
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
