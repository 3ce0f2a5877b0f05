//! Visible-node indexing and tree lookups.
//!
//! The visible sequence is derived on demand from the tree and the open-set
//! and is never cached across mutations. Structural lookups (parent,
//! children, depth) go through [`TreeIndex`], which is built once per tree
//! instance so that keystrokes do not re-walk the whole tree.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::trace;

use crate::model::{NodeId, TreeNode};

/// One row of the visible sequence, with the data a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleEntry {
    pub id: NodeId,
    /// Nesting level, 1 for children of the root
    pub depth: usize,
    /// Parent id, `None` for top-level items
    pub parent: Option<NodeId>,
    /// 1-based position among siblings
    pub position: usize,
    /// Number of siblings including this node
    pub set_size: usize,
    pub has_children: bool,
    pub open: bool,
}

/// Ordered ids of the nodes currently eligible for focus.
///
/// Pre-order over the root's descendants; a subtree is entered only when
/// its root is in `open`. The root itself is never listed.
pub fn visible_nodes(tree: &TreeNode, open: &BTreeSet<NodeId>) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect_ids(tree, open, &mut out);
    trace!(message = "index.visible", count = out.len());
    out
}

fn collect_ids(node: &TreeNode, open: &BTreeSet<NodeId>, out: &mut Vec<NodeId>) {
    for child in &node.children {
        out.push(child.id);
        if child.has_children() && open.contains(&child.id) {
            collect_ids(child, open, out);
        }
    }
}

/// Same walk as [`visible_nodes`], with depth and sibling data per row
pub fn visible_entries(tree: &TreeNode, open: &BTreeSet<NodeId>) -> Vec<VisibleEntry> {
    let mut out = Vec::new();
    walk_visible(tree, open, |_, entry| out.push(entry));
    out
}

/// Visit every visible node in order together with its row data
pub fn walk_visible<'a>(
    tree: &'a TreeNode,
    open: &BTreeSet<NodeId>,
    mut visit: impl FnMut(&'a TreeNode, VisibleEntry),
) {
    walk(tree, None, 1, open, &mut visit);
}

fn walk<'a, F>(node: &'a TreeNode, parent: Option<NodeId>, depth: usize, open: &BTreeSet<NodeId>, visit: &mut F)
where
    F: FnMut(&'a TreeNode, VisibleEntry),
{
    let set_size = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let is_open = child.has_children() && open.contains(&child.id);
        visit(
            child,
            VisibleEntry {
                id: child.id,
                depth,
                parent,
                position: i + 1,
                set_size,
                has_children: child.has_children(),
                open: is_open,
            },
        );
        if is_open {
            walk(child, Some(child.id), depth + 1, open, visit);
        }
    }
}

/// Pre-order search over the whole tree; the first match wins.
pub fn find_by_id(tree: &TreeNode, id: NodeId) -> Option<&TreeNode> {
    tree.iter().find(|n| n.id == id)
}

/// Parent of the first node with `id`, walking the full tree.
///
/// Top-level nodes return the root. The root and unknown ids return `None`.
pub fn parent_of(tree: &TreeNode, id: NodeId) -> Option<&TreeNode> {
    if tree.id == id {
        return None;
    }
    find_parent(tree, id)
}

fn find_parent(node: &TreeNode, id: NodeId) -> Option<&TreeNode> {
    for child in &node.children {
        if child.id == id {
            return Some(node);
        }
        if let Some(found) = find_parent(child, id) {
            return Some(found);
        }
    }
    None
}

/// Structural data for one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// 0 for the root, 1 for top-level items
    pub depth: usize,
    pub parent: Option<NodeId>,
    /// 1-based position among siblings (1 for the root)
    pub position: usize,
    pub children: Vec<NodeId>,
}

impl IndexEntry {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Id-keyed index over an entire tree.
///
/// Rebuild whenever the tree instance changes. On duplicate ids the first
/// occurrence in pre-order wins, matching [`find_by_id`].
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    root: Option<NodeId>,
    entries: HashMap<NodeId, IndexEntry>,
}

impl TreeIndex {
    pub fn build(tree: &TreeNode) -> Self {
        let mut entries = HashMap::with_capacity(tree.total_count());
        entries.insert(
            tree.id,
            IndexEntry {
                depth: 0,
                parent: None,
                position: 1,
                children: child_ids(tree),
            },
        );
        index_children(tree, 1, &mut entries);
        Self {
            root: Some(tree.id),
            entries,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&IndexEntry> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(IndexEntry::has_children)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    /// Ancestors of `id`, nearest first, stopping before the root
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        // Parent links always point earlier in pre-order, so the walk ends;
        // the bound only guards against a malformed index.
        while let Some(parent) = current {
            if Some(parent) == self.root || out.len() >= self.entries.len() {
                break;
            }
            out.push(parent);
            current = self.parent(parent);
        }
        out
    }
}

fn child_ids(node: &TreeNode) -> Vec<NodeId> {
    node.children.iter().map(|c| c.id).collect()
}

fn index_children(node: &TreeNode, depth: usize, entries: &mut HashMap<NodeId, IndexEntry>) {
    for (i, child) in node.children.iter().enumerate() {
        entries.entry(child.id).or_insert_with(|| IndexEntry {
            depth,
            parent: Some(node.id),
            position: i + 1,
            children: child_ids(child),
        });
        index_children(child, depth + 1, entries);
    }
}
