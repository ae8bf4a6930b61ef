//! Content Tree Access Layer
//!
//! This module defines the collaborator contracts the scheduling core
//! consumes, plus the in-memory reference implementation:
//!
//! - `CourseStore` - read access to a materialized course content tree
//! - `DurationSource` - expected-duration lookup for a course
//! - `MemoryCourseStore` - in-memory snapshot store for tests and embedders
//!
//! Persistence, caching, and content authoring all live behind these traits;
//! the core never mutates course content.

mod course_store;
mod duration;
mod memory_store;

pub use course_store::CourseStore;
pub use duration::{DurationSource, FixedDuration, NoDuration};
pub use memory_store::{MemoryCourseStore, StoreError};
