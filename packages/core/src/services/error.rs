//! Service Layer Error Types
//!
//! This module defines error types for schedule-derivation operations. All
//! failures are synchronous and surfaced to the immediate caller; nothing is
//! retried or recovered internally.

use crate::models::{Category, NodeKey};
use thiserror::Error;

/// Schedule derivation errors
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The store listed a key it cannot resolve
    #[error("Node not found: {key}")]
    NodeNotFound { key: NodeKey },

    /// An operation that requires a course root was handed something else
    #[error("Node {key} is not a course (found category '{found}')")]
    NotACourse { key: NodeKey, found: Category },

    /// The duration source has no expected duration for a course that needs one.
    /// Even spacing cannot divide an undefined duration; this is a fatal
    /// precondition failure, never silently defaulted.
    #[error("No expected duration available for course {course}")]
    MissingDuration { course: NodeKey },
}

impl ScheduleError {
    /// Create a node not found error
    pub fn node_not_found(key: impl Into<NodeKey>) -> Self {
        Self::NodeNotFound { key: key.into() }
    }

    /// Create a not-a-course error
    pub fn not_a_course(key: impl Into<NodeKey>, found: Category) -> Self {
        Self::NotACourse {
            key: key.into(),
            found,
        }
    }

    /// Create a missing duration error
    pub fn missing_duration(course: impl Into<NodeKey>) -> Self {
        Self::MissingDuration {
            course: course.into(),
        }
    }
}
