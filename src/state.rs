//! Navigation state
//!
//! The mutable half of the engine: which nodes are open and which node
//! holds keyboard focus. Both are stored as ids so the state survives the
//! owner swapping in a new tree instance.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::NodeId;

/// Open-set plus focus pointer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    /// Ids of expanded nodes. Only nodes with children are ever inserted.
    pub open: BTreeSet<NodeId>,
    /// The focused node, `None` until something receives focus
    pub focused: Option<NodeId>,
}

impl NavState {
    /// Fresh state: nothing open, nothing focused
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the given ids open and an optional focus
    pub fn with(open: impl IntoIterator<Item = NodeId>, focused: Option<NodeId>) -> Self {
        Self {
            open: open.into_iter().collect(),
            focused,
        }
    }

    pub fn is_open(&self, id: NodeId) -> bool {
        self.open.contains(&id)
    }

    /// Flip membership of `id`, returning the new open flag
    pub(crate) fn flip(&mut self, id: NodeId) -> bool {
        if self.open.remove(&id) {
            false
        } else {
            self.open.insert(id);
            true
        }
    }
}

/// Where focus moves when stepping past either end of the visible sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Stay on the first / last item
    #[default]
    Clamp,
    /// Jump to the opposite end
    Wrap,
}

/// What Tab / Shift+Tab do while an item has focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabBehavior {
    /// Leave the tree; arrows are the only in-tree movement
    #[default]
    Exit,
    /// Move like Down / Up, leaving the tree past either end
    Navigate,
}

/// Element kind a renderer uses for every item of one tree.
///
/// Chosen once per tree instance. Navigation never looks at it; the item
/// role is "treeitem" either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemElement {
    #[default]
    ListItem,
    Link,
}

impl ItemElement {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemElement::ListItem => "list-item",
            ItemElement::Link => "link",
        }
    }
}
