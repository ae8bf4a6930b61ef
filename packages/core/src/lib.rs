//! CoursePace Core Scheduling Logic
//!
//! This crate derives effective due dates for the content tree of a
//! self-paced online course.
//!
//! # Architecture
//!
//! - **Read-only tree**: course content is consumed through the
//!   [`store::CourseStore`] trait; the core computes derived values keyed by
//!   node identity and never mutates content
//! - **Two date mechanisms**: authored `due_num_weeks` overrides propagate
//!   down their subtree; everything else assignment-bearing is spaced evenly
//!   across the course's expected duration
//! - **Injected collaborators**: duration policy ([`store::DurationSource`])
//!   and feature flags ([`services::ScheduleConfig`]) are passed in, never
//!   read from ambient state
//!
//! # Modules
//!
//! - [`models`] - Content node structures and derived schedule values
//! - [`store`] - Content tree access traits and the in-memory snapshot store
//! - [`services`] - The schedule-derivation service
//!
//! # Example
//!
//! ```rust
//! use coursepace_core::models::{Category, CourseNode};
//! use coursepace_core::services::ScheduleService;
//! use coursepace_core::store::{FixedDuration, MemoryCourseStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = MemoryCourseStore::new();
//! let course = store.insert_root(
//!     CourseNode::new(Category::Course, "Demo Course").with_self_paced(true),
//! )?;
//! let chapter = store.insert_child(&course, CourseNode::new(Category::Chapter, "Week 1"))?;
//! store.insert_child(
//!     &chapter,
//!     CourseNode::new(Category::Sequential, "Homework").with_due_num_weeks(1),
//! )?;
//!
//! let durations = FixedDuration::weeks(4);
//! let service = ScheduleService::new(&store, &durations);
//! let dates = service.extract_dates_from_course(&course)?;
//! assert_eq!(dates.len(), 3); // course root, chapter, homework
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use models::*;
pub use services::*;
pub use store::*;
