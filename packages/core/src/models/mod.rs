//! Data Models
//!
//! This module contains the core data structures used throughout CoursePace:
//!
//! - `CourseNode` - One node of the read-only course content tree
//! - `Category` / `NodeKey` - Content vocabulary and opaque node identity
//! - `DateOverride` / `DateItem` - Derived schedule values keyed by identity
//!
//! The content tree itself is owned by a [`crate::store::CourseStore`]
//! implementation; models here carry no parent/child links of their own.

mod node;
mod schedule;

pub use node::{Category, CourseNode, NodeKey, ValidationError, DATE_EXEMPT_CATEGORIES};
pub use schedule::{DateItem, DateOverride};
