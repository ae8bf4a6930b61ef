//! In-Memory Course Tree Snapshot
//!
//! `MemoryCourseStore` is the reference `CourseStore` implementation: a
//! materialized, immutable-once-built snapshot of one or more course trees.
//! Production deployments are expected to adapt their own content backend to
//! the trait; this store backs tests and embedding applications that already
//! hold the tree in memory.

use crate::models::{CourseNode, NodeKey};
use crate::store::CourseStore;
use std::collections::HashMap;
use thiserror::Error;

/// Snapshot construction errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// A node with this key is already present
    #[error("Duplicate node key: {key}")]
    DuplicateKey { key: NodeKey },

    /// The named parent has not been inserted
    #[error("Unknown parent node: {key}")]
    UnknownParent { key: NodeKey },
}

/// In-memory content tree snapshot.
///
/// Nodes are held flat, keyed by `NodeKey`; hierarchy lives in an adjacency
/// map from parent key to ordered child keys. Sibling order is insertion
/// order, which is authored order by construction.
#[derive(Debug, Default, Clone)]
pub struct MemoryCourseStore {
    nodes: HashMap<NodeKey, CourseNode>,
    children: HashMap<NodeKey, Vec<NodeKey>>,
}

impl MemoryCourseStore {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a root node (a course, or a detached subtree root)
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateKey` if the key is already present.
    pub fn insert_root(&mut self, node: CourseNode) -> Result<NodeKey, StoreError> {
        let key = node.key.clone();
        if self.nodes.contains_key(&key) {
            return Err(StoreError::DuplicateKey { key });
        }
        self.nodes.insert(key.clone(), node);
        Ok(key)
    }

    /// Insert a node as the last child of an existing parent
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownParent` if the parent has not been
    /// inserted, or `StoreError::DuplicateKey` if the key is already present.
    pub fn insert_child(
        &mut self,
        parent: &NodeKey,
        node: CourseNode,
    ) -> Result<NodeKey, StoreError> {
        if !self.nodes.contains_key(parent) {
            return Err(StoreError::UnknownParent {
                key: parent.clone(),
            });
        }
        let key = self.insert_root(node)?;
        self.children
            .entry(parent.clone())
            .or_default()
            .push(key.clone());
        Ok(key)
    }

    /// Number of nodes in the snapshot
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the snapshot holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl CourseStore for MemoryCourseStore {
    fn node(&self, key: &NodeKey) -> Option<&CourseNode> {
        self.nodes.get(key)
    }

    fn children(&self, key: &NodeKey) -> Vec<NodeKey> {
        self.children.get(key).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_insert_and_lookup() {
        let mut store = MemoryCourseStore::new();
        let course = store
            .insert_root(CourseNode::new(Category::Course, "Demo"))
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.node(&course).unwrap().display_name, "Demo");
        assert!(store.node(&NodeKey::from("missing")).is_none());
    }

    #[test]
    fn test_children_preserve_authored_order() {
        let mut store = MemoryCourseStore::new();
        let course = store
            .insert_root(CourseNode::new(Category::Course, "Demo"))
            .unwrap();

        let mut inserted = Vec::new();
        for i in 0..4 {
            let key = store
                .insert_child(
                    &course,
                    CourseNode::new(Category::Sequential, format!("Section {i}")),
                )
                .unwrap();
            inserted.push(key);
        }

        assert_eq!(store.children(&course), inserted);
    }

    #[test]
    fn test_leaf_and_unknown_children_are_empty() {
        let mut store = MemoryCourseStore::new();
        let course = store
            .insert_root(CourseNode::new(Category::Course, "Demo"))
            .unwrap();

        assert!(store.children(&course).is_empty());
        assert!(store.children(&NodeKey::from("missing")).is_empty());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut store = MemoryCourseStore::new();
        store
            .insert_root(CourseNode::new_with_key("c1", Category::Course, "Demo"))
            .unwrap();

        let result = store.insert_root(CourseNode::new_with_key("c1", Category::Course, "Again"));
        assert!(matches!(result, Err(StoreError::DuplicateKey { .. })));
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let mut store = MemoryCourseStore::new();
        let result = store.insert_child(
            &NodeKey::from("missing"),
            CourseNode::new(Category::Sequential, "s"),
        );
        assert!(matches!(result, Err(StoreError::UnknownParent { .. })));
    }
}
