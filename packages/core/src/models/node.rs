//! Course Content Node Structures
//!
//! This module defines the core `CourseNode` struct and related types for
//! CoursePace's read-only view of a course content tree.
//!
//! # Architecture
//!
//! - **Opaque identity**: nodes are addressed by a stable `NodeKey` location key
//! - **Closed category vocabulary**: `course | chapter | sequential | vertical |
//!   problem | openassessment | other`
//! - **Author-supplied fields**: pacing inputs (`graded`, `weight`,
//!   `due_num_weeks`, `visible_to_staff_only`, `self_paced`) are explicit per
//!   node; everything else the author set rides along in the `properties` bag
//! - **Read-only**: the scheduling core never mutates nodes, it only computes
//!   derived values keyed by node identity
//!
//! # Examples
//!
//! ```rust
//! use coursepace_core::models::{Category, CourseNode};
//!
//! // A graded problem worth one point
//! let problem = CourseNode::new(Category::Problem, "Checkpoint quiz")
//!     .with_graded(true)
//!     .with_weight(1.0);
//!
//! // A subsection due two weeks after the learner starts
//! let subsection = CourseNode::new(Category::Sequential, "Week 2 homework")
//!     .with_due_num_weeks(2);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Default weight for serde deserialization and new nodes.
///
/// An authored problem with no explicit weight still scores, so the neutral
/// default is 1.0 rather than 0.0.
fn default_weight() -> f64 {
    1.0
}

/// Default properties bag (empty JSON object)
fn empty_properties() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Validation errors for CourseNode field combinations
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid assignment weight: {weight}")]
    InvalidWeight { weight: f64 },

    #[error("Properties validation failed: {0}")]
    InvalidProperties(String),

    #[error("Field '{field}' is not valid on a {category} node")]
    FieldNotAllowed {
        field: &'static str,
        category: Category,
    },
}

/// Opaque, stable location key identifying one node in a course tree.
///
/// Keys are supplied by the content store and treated as opaque text. Derived
/// date values are keyed by `NodeKey`, never by position, so a key must stay
/// stable across extractions of the same tree snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeKey(String);

impl NodeKey {
    /// Wrap an existing location key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for NodeKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Closed category vocabulary for course content nodes.
///
/// Serialized with the lowercase names the authoring side uses
/// (`"openassessment"`, not `"open_assessment"`). Anything outside the known
/// hierarchy maps to `Other` and is ignored by structure-sensitive walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Course,
    Chapter,
    Sequential,
    Vertical,
    Problem,
    OpenAssessment,
    Other,
}

/// Categories exempt from standard leaf-level due-date assignment.
///
/// Open-response assessments manage their own step deadlines, so the
/// scheduling core must neither classify them as assignments nor hand them
/// sequence-level due dates. Kept as a data-driven set so future exempt
/// categories are a one-line change.
pub const DATE_EXEMPT_CATEGORIES: &[Category] = &[Category::OpenAssessment];

impl Category {
    /// Lowercase wire name for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Course => "course",
            Category::Chapter => "chapter",
            Category::Sequential => "sequential",
            Category::Vertical => "vertical",
            Category::Problem => "problem",
            Category::OpenAssessment => "openassessment",
            Category::Other => "other",
        }
    }

    /// Whether this category is exempt from standard due-date assignment
    pub fn is_date_exempt(&self) -> bool {
        DATE_EXEMPT_CATEGORIES.contains(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the course content tree, as supplied by the content store.
///
/// # Fields
///
/// - `key`: stable location key (UUID for nodes minted locally)
/// - `category`: position in the closed category vocabulary
/// - `display_name`: author-facing title
/// - `graded`: whether the node counts toward the grade
/// - `weight`: scoring weight; `0.0` means graded in name only
/// - `due_num_weeks`: explicit relative due date in weeks, if authored
/// - `visible_to_staff_only`: hidden from learners (and from even spacing)
/// - `self_paced`: pacing mode; meaningful on `course` nodes only
/// - `properties`: all other author-supplied fields, uninterpreted here
///
/// Child ordering is owned by the store, not the node; sibling order is
/// authored order and is significant for even spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseNode {
    /// Stable location key
    pub key: NodeKey,

    /// Content category
    pub category: Category,

    /// Author-facing title
    #[serde(default)]
    pub display_name: String,

    /// Counts toward the grade
    #[serde(default)]
    pub graded: bool,

    /// Scoring weight (0.0 = graded in name only)
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Explicit relative due date, in weeks from course start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_num_weeks: Option<u32>,

    /// Hidden from learners
    #[serde(default)]
    pub visible_to_staff_only: bool,

    /// Self-paced course flag (course nodes only)
    #[serde(default)]
    pub self_paced: bool,

    /// Remaining author-supplied fields, uninterpreted by the core
    #[serde(default = "empty_properties")]
    pub properties: serde_json::Value,
}

impl CourseNode {
    /// Create a new node with an auto-generated UUID key
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use coursepace_core::models::{Category, CourseNode};
    /// let chapter = CourseNode::new(Category::Chapter, "Week 1");
    /// assert!(!chapter.key.as_str().is_empty());
    /// ```
    pub fn new(category: Category, display_name: impl Into<String>) -> Self {
        Self::new_with_key(Uuid::new_v4().to_string(), category, display_name)
    }

    /// Create a new node with an explicit location key
    ///
    /// Use this when mirroring an existing tree whose keys must stay stable
    /// across snapshots.
    pub fn new_with_key(
        key: impl Into<NodeKey>,
        category: Category,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            category,
            display_name: display_name.into(),
            graded: false,
            weight: default_weight(),
            due_num_weeks: None,
            visible_to_staff_only: false,
            self_paced: false,
            properties: empty_properties(),
        }
    }

    /// Set the graded flag
    pub fn with_graded(mut self, graded: bool) -> Self {
        self.graded = graded;
        self
    }

    /// Set the scoring weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Set an explicit relative due date in weeks
    pub fn with_due_num_weeks(mut self, weeks: u32) -> Self {
        self.due_num_weeks = Some(weeks);
        self
    }

    /// Hide the node from learners
    pub fn with_staff_only(mut self, staff_only: bool) -> Self {
        self.visible_to_staff_only = staff_only;
        self
    }

    /// Set the self-paced flag (course nodes)
    pub fn with_self_paced(mut self, self_paced: bool) -> Self {
        self.self_paced = self_paced;
        self
    }

    /// Attach uninterpreted author-supplied fields
    pub fn with_properties(mut self, properties: serde_json::Value) -> Self {
        self.properties = properties;
        self
    }

    /// Validate field combinations
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - `key` is empty
    /// - `weight` is negative or not finite
    /// - `properties` is not a JSON object
    /// - `self_paced` is set on a non-course node
    /// - `due_num_weeks` is set on the course root itself
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key.as_str().is_empty() {
            return Err(ValidationError::MissingField("key".to_string()));
        }

        if self.weight < 0.0 || !self.weight.is_finite() {
            return Err(ValidationError::InvalidWeight {
                weight: self.weight,
            });
        }

        if !self.properties.is_object() {
            return Err(ValidationError::InvalidProperties(
                "properties must be a JSON object".to_string(),
            ));
        }

        if self.self_paced && self.category != Category::Course {
            return Err(ValidationError::FieldNotAllowed {
                field: "self_paced",
                category: self.category,
            });
        }

        if self.due_num_weeks.is_some() && self.category == Category::Course {
            return Err(ValidationError::FieldNotAllowed {
                field: "due_num_weeks",
                category: self.category,
            });
        }

        Ok(())
    }

    /// Whether this node is an assignment on its own: graded with a nonzero weight
    pub fn is_assignment(&self) -> bool {
        self.graded && self.weight > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_creation() {
        let node = CourseNode::new(Category::Sequential, "Section 0");

        assert!(!node.key.as_str().is_empty());
        assert_eq!(node.category, Category::Sequential);
        assert_eq!(node.display_name, "Section 0");
        assert!(!node.graded);
        assert_eq!(node.weight, 1.0);
        assert!(node.due_num_weeks.is_none());
    }

    #[test]
    fn test_node_keys_are_unique() {
        let a = CourseNode::new(Category::Problem, "a");
        let b = CourseNode::new(Category::Problem, "b");
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn test_node_with_explicit_key() {
        let node = CourseNode::new_with_key("block@chapter+week1", Category::Chapter, "Week 1");
        assert_eq!(node.key.as_str(), "block@chapter+week1");
    }

    #[test]
    fn test_builder_fields() {
        let node = CourseNode::new(Category::Problem, "Quiz")
            .with_graded(true)
            .with_weight(2.5)
            .with_staff_only(true)
            .with_properties(json!({"max_attempts": 3}));

        assert!(node.graded);
        assert_eq!(node.weight, 2.5);
        assert!(node.visible_to_staff_only);
        assert_eq!(node.properties["max_attempts"], 3);
    }

    #[test]
    fn test_is_assignment() {
        let scored = CourseNode::new(Category::Problem, "p").with_graded(true);
        assert!(scored.is_assignment());

        // Graded in name only
        let zero_weight = CourseNode::new(Category::Problem, "p")
            .with_graded(true)
            .with_weight(0.0);
        assert!(!zero_weight.is_assignment());

        let ungraded = CourseNode::new(Category::Problem, "p").with_weight(1.0);
        assert!(!ungraded.is_assignment());
    }

    #[test]
    fn test_validate_ok() {
        let node = CourseNode::new(Category::Course, "Demo").with_self_paced(true);
        assert!(node.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_key() {
        let node = CourseNode::new_with_key("", Category::Problem, "p");
        assert!(matches!(
            node.validate(),
            Err(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn test_validate_negative_weight() {
        let node = CourseNode::new(Category::Problem, "p").with_weight(-1.0);
        assert!(matches!(
            node.validate(),
            Err(ValidationError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_validate_properties_must_be_object() {
        let node = CourseNode::new(Category::Problem, "p").with_properties(json!("not an object"));
        assert!(matches!(
            node.validate(),
            Err(ValidationError::InvalidProperties(_))
        ));
    }

    #[test]
    fn test_validate_self_paced_only_on_courses() {
        let node = CourseNode::new(Category::Sequential, "s").with_self_paced(true);
        assert!(matches!(
            node.validate(),
            Err(ValidationError::FieldNotAllowed {
                field: "self_paced",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_no_due_num_weeks_on_course_root() {
        let node = CourseNode::new(Category::Course, "Demo").with_due_num_weeks(1);
        assert!(matches!(
            node.validate(),
            Err(ValidationError::FieldNotAllowed {
                field: "due_num_weeks",
                ..
            })
        ));
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&Category::OpenAssessment).unwrap(),
            "\"openassessment\""
        );
        assert_eq!(
            serde_json::from_str::<Category>("\"sequential\"").unwrap(),
            Category::Sequential
        );
        assert_eq!(Category::Chapter.to_string(), "chapter");
    }

    #[test]
    fn test_date_exemption_set() {
        assert!(Category::OpenAssessment.is_date_exempt());
        assert!(!Category::Problem.is_date_exempt());
        assert!(!Category::Vertical.is_date_exempt());
    }

    #[test]
    fn test_node_serialization_roundtrip() {
        let node = CourseNode::new(Category::Sequential, "Homework")
            .with_graded(true)
            .with_due_num_weeks(2);

        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"dueNumWeeks\":2"));

        let back: CourseNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }

    #[test]
    fn test_node_deserialization_defaults() {
        // A minimal authored node: absent fields take their documented defaults
        let node: CourseNode =
            serde_json::from_str(r#"{"key": "p1", "category": "problem"}"#).unwrap();

        assert!(!node.graded);
        assert_eq!(node.weight, 1.0);
        assert!(node.properties.is_object());
    }
}
