//! CourseStore Trait - Content Tree Abstraction Layer
//!
//! This module defines the `CourseStore` trait that abstracts read access to a
//! course content tree. The trait is the seam between the scheduling core and
//! whatever system owns course content; the core consumes an
//! already-materialized snapshot and never writes through it.
//!
//! # Design Decisions
//!
//! 1. **Read-only**: scheduling derives values keyed by node identity; it has
//!    no mutation surface at all
//! 2. **Synchronous**: extraction runs single-threaded over an in-memory
//!    snapshot, so the trait stays sync and simple
//! 3. **Bulk-read bracket**: `begin_bulk_read`/`end_bulk_read` let a backend
//!    pin or prefetch one course subtree for the duration of a traversal.
//!    They are an optimization hint only, never a correctness requirement,
//!    and default to no-ops.

use crate::models::{CourseNode, NodeKey};

/// Read access to one course content tree snapshot.
///
/// Child ordering is authored order and must be preserved by implementations;
/// even spacing depends on it.
pub trait CourseStore {
    /// Look up a node by its location key
    fn node(&self, key: &NodeKey) -> Option<&CourseNode>;

    /// Keys of a node's children, in authored order.
    ///
    /// Unknown keys and leaf nodes both return an empty list.
    fn children(&self, key: &NodeKey) -> Vec<NodeKey>;

    /// Hint that a full-course traversal is starting
    fn begin_bulk_read(&self, _course: &NodeKey) {}

    /// Hint that the traversal started by `begin_bulk_read` has finished
    fn end_bulk_read(&self, _course: &NodeKey) {}
}
