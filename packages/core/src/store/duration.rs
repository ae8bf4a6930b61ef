//! Expected Course Duration Lookup
//!
//! Self-paced scheduling spaces work across a course's expected total
//! duration. How that duration is derived (enrollment window, pacing policy,
//! catalog data) is a collaborator's concern; the core only consumes the
//! lookup through the `DurationSource` trait.

use crate::models::NodeKey;
use chrono::Duration;

/// Expected-duration lookup for a course.
///
/// Returning `None` means no duration is known. The scheduling core treats a
/// missing duration as a fatal precondition failure whenever it actually
/// needs one; it never substitutes a silent default.
pub trait DurationSource {
    /// Expected total duration of the given course
    fn expected_duration(&self, course: &NodeKey) -> Option<Duration>;
}

/// A `DurationSource` that answers the same duration for every course.
///
/// The canonical in-repo implementation, used wherever a test or embedding
/// application already knows the course length.
#[derive(Debug, Clone, Copy)]
pub struct FixedDuration(pub Duration);

impl FixedDuration {
    /// A fixed duration of `n` weeks
    pub fn weeks(n: i64) -> Self {
        Self(Duration::weeks(n))
    }

    /// A fixed duration of `n` days
    pub fn days(n: i64) -> Self {
        Self(Duration::days(n))
    }
}

impl DurationSource for FixedDuration {
    fn expected_duration(&self, _course: &NodeKey) -> Option<Duration> {
        Some(self.0)
    }
}

/// A `DurationSource` with no answer for any course.
///
/// Useful for exercising the fail-loudly path and for courses whose duration
/// is intentionally unconfigured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDuration;

impl DurationSource for NoDuration {
    fn expected_duration(&self, _course: &NodeKey) -> Option<Duration> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_duration() {
        let source = FixedDuration::weeks(4);
        let key = NodeKey::from("course-1");
        assert_eq!(source.expected_duration(&key), Some(Duration::days(28)));
    }

    #[test]
    fn test_no_duration() {
        assert_eq!(NoDuration.expected_duration(&NodeKey::from("course-1")), None);
    }
}
