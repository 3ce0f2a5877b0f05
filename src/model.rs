//! Tree model
//!
//! The hierarchical data handed to the navigator by its owner. Nodes are
//! identified by caller-assigned ids that stay stable across tree
//! replacements; the navigator only ever stores ids, never node references.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};

/// Stable, caller-assigned node identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A node in the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Unique id within one tree
    pub id: NodeId,
    /// Display label
    #[serde(alias = "value")]
    pub label: String,
    /// Ordered children (empty for leaf nodes)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
    /// Icon shown while the node is closed (opaque to the navigator)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Icon shown while the node is open, falls back to `icon`
    #[serde(default, alias = "altIcon", skip_serializing_if = "Option::is_none")]
    pub alt_icon: Option<String>,
}

impl TreeNode {
    /// Create a node without children
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
            icon: None,
            alt_icon: None,
        }
    }

    /// Builder-style child append
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Builder-style children append
    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Builder-style icon pair
    pub fn with_icons(mut self, icon: impl Into<String>, alt_icon: Option<String>) -> Self {
        self.icon = Some(icon.into());
        self.alt_icon = alt_icon;
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The icon matching the given open state
    pub fn icon_for(&self, open: bool) -> Option<&str> {
        if open {
            self.alt_icon.as_deref().or(self.icon.as_deref())
        } else {
            self.icon.as_deref()
        }
    }

    /// Number of nodes in this subtree, including this node
    pub fn total_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::total_count).sum::<usize>()
    }

    /// Pre-order iterator over this node and all of its descendants
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Check the caller contract: every id appears at most once.
    ///
    /// Traversal with duplicate ids is ill-defined (first match wins), so
    /// owners should run this before handing the tree to a navigator.
    pub fn validate(&self) -> TreeResult<()> {
        let mut seen = HashSet::new();
        let mut duplicates: Vec<NodeId> = Vec::new();
        for node in self.iter() {
            if !seen.insert(node.id) && !duplicates.contains(&node.id) {
                duplicates.push(node.id);
            }
        }

        if duplicates.is_empty() {
            Ok(())
        } else {
            duplicates.sort();
            Err(TreeError::DuplicateIds { ids: duplicates })
        }
    }
}

/// Pre-order traversal over a subtree
pub struct PreOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
