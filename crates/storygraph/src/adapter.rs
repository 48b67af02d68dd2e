// SPDX-License-Identifier: MIT OR Apache-2.0
//! The capability contract a domain implements to plug its nodes into the
//! generic graph engine.
//!
//! The adapter owns everything: node payload, the child/parent collections
//! that actually store the edges, and any bookkeeping attached to them. The
//! engine only ever calls through these hooks.

use indexmap::IndexSet;

/// Primitive hooks over one node type.
///
/// `children` and `parents` must be mutual inverses at all times:
/// `b ∈ children(a)` exactly when `a ∈ parents(b)`. Both return sets in
/// registration order; the engine relies on that order for deterministic
/// path selection.
pub trait NodeAdapter<E> {
    /// Create a fresh, unattached node.
    fn create_new_node(&mut self) -> E;

    /// Attach `child` below `parent`.
    ///
    /// Returns `false` when the edge already exists or the domain refuses it,
    /// in which case nothing may have changed.
    fn add_child(&mut self, child: E, parent: E) -> bool;

    /// Detach `child` from `parent`.
    ///
    /// Returns `false` when there was no such edge. Domain side effects
    /// (counters, clean-up) happen here.
    fn remove_child(&mut self, child: E, parent: E) -> bool;

    /// Direct children of `node`, in registration order.
    fn children(&self, node: E) -> IndexSet<E>;

    /// Direct parents of `node`, in registration order.
    fn parents(&self, node: E) -> IndexSet<E>;

    /// Copy the payload of `source` onto `existing` in place, leaving the
    /// edges of `existing` untouched.
    fn overwrite_node_data(&mut self, existing: E, source: E) -> bool;
}
