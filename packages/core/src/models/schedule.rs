//! Derived Schedule Values
//!
//! Output types of the date-derivation pass. These are computed fresh on each
//! extraction and are never persisted by this crate; applying them to stored
//! course content is the caller's responsibility.

use crate::models::NodeKey;
use chrono::Duration;

/// A field override derived for one node.
///
/// The shape mirrors the downstream consumer contract exactly, including its
/// historical asymmetry: chapters receive a bare duration while every other
/// dated node receives a `due` field. `Bare` keeps that asymmetry explicit
/// rather than normalizing it away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOverride {
    /// No overrides; emitted for the course root to signal "use defaults"
    Defaults,

    /// A `due` field override. `Due(None)` is an explicit null that clears
    /// any due date the node may carry.
    Due(Option<Duration>),

    /// Chapter-level bare duration (not wrapped in a field map)
    Bare(Duration),
}

impl DateOverride {
    /// A `due` override at the given offset from course start
    pub fn due(offset: Duration) -> Self {
        Self::Due(Some(offset))
    }

    /// An explicit-null `due` override
    pub fn cleared() -> Self {
        Self::Due(None)
    }

    /// Whether this is the course-root "use defaults" marker
    pub fn is_defaults(&self) -> bool {
        matches!(self, Self::Defaults)
    }
}

/// One derived override, keyed by node identity
pub type DateItem = (NodeKey, DateOverride);
