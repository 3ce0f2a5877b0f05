//! Command processor
//!
//! Pure transition function from (state, tree, command) to the next state.
//! Every command either changes state predictably or leaves it untouched;
//! nothing here fails. Ids that are not in the tree (for example after the
//! owner swapped trees) degrade to no-ops.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::index::{visible_nodes, TreeIndex};
use crate::model::{NodeId, TreeNode};
use crate::state::{BoundaryPolicy, NavState};

/// Interaction command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "command", content = "id", rename_all = "kebab-case")]
pub enum Command {
    /// Arrow Down: next visible item
    MoveNext,
    /// Arrow Up: previous visible item
    MovePrevious,
    /// Home: first visible item
    MoveFirst,
    /// End: last visible item
    MoveLast,
    /// Enter / Space: open or close the focused item
    Toggle,
    /// Pointer click on an item: focus it and toggle it
    Activate(NodeId),
    /// Platform focus landed on an item
    Focus(NodeId),
    /// Arrow Right: open, or step into the first child when already open
    ExpandOrDescend,
    /// Arrow Left: close, or step out to the parent when already closed
    CollapseOrAscend,
    /// `*`: open every sibling of the focused item that has children
    ExpandSiblings,
}

impl Command {
    /// Short name used in logs and replay output
    pub fn name(&self) -> &'static str {
        match self {
            Command::MoveNext => "move-next",
            Command::MovePrevious => "move-previous",
            Command::MoveFirst => "move-first",
            Command::MoveLast => "move-last",
            Command::Toggle => "toggle",
            Command::Activate(_) => "activate",
            Command::Focus(_) => "focus",
            Command::ExpandOrDescend => "expand-or-descend",
            Command::CollapseOrAscend => "collapse-or-ascend",
            Command::ExpandSiblings => "expand-siblings",
        }
    }
}

/// Apply a command, building a throwaway index for the tree.
///
/// Callers handling many commands against the same tree should keep a
/// [`TreeIndex`] and use [`apply_indexed`].
pub fn apply(
    state: &NavState,
    tree: &TreeNode,
    command: Command,
    policy: BoundaryPolicy,
) -> NavState {
    let index = TreeIndex::build(tree);
    apply_indexed(state, tree, &index, command, policy)
}

/// Apply a command using a prebuilt index.
///
/// `index` must have been built from `tree`. The returned state always
/// satisfies the focus invariant (a defined focus is a visible node) and
/// its open-set only holds nodes of `tree` that have children.
pub fn apply_indexed(
    state: &NavState,
    tree: &TreeNode,
    index: &TreeIndex,
    command: Command,
    policy: BoundaryPolicy,
) -> NavState {
    let mut next = state.clone();
    // State carried over from another tree: only expandable nodes of this
    // one stay open, and a dangling focus falls back to the implicit tab stop.
    next.open.retain(|&id| index.has_children(id));
    restore_focus(&mut next, index);

    match command {
        Command::MoveNext => step(&mut next, tree, true, policy),
        Command::MovePrevious => step(&mut next, tree, false, policy),
        Command::MoveFirst => {
            if let Some(first) = first_item(tree) {
                next.focused = Some(first);
            }
        }
        Command::MoveLast => {
            if let Some(&last) = visible_nodes(tree, &next.open).last() {
                next.focused = Some(last);
            }
        }
        Command::Toggle => {
            if let Some(id) = target(&next, tree, index) {
                if index.has_children(id) {
                    next.flip(id);
                }
            }
        }
        Command::Activate(id) => {
            if is_visible(&next.open, index, id) {
                next.focused = Some(id);
                if index.has_children(id) {
                    next.flip(id);
                }
            }
        }
        Command::Focus(id) => {
            if is_visible(&next.open, index, id) {
                next.focused = Some(id);
            }
        }
        Command::ExpandOrDescend => expand_or_descend(&mut next, tree, index),
        Command::CollapseOrAscend => collapse_or_ascend(&mut next, tree, index),
        Command::ExpandSiblings => expand_siblings(&mut next, tree, index),
    }

    restore_focus(&mut next, index);
    next
}

/// Copy of `state` with the focus invariant re-established
pub(crate) fn normalize(state: &NavState, index: &TreeIndex) -> NavState {
    let mut next = state.clone();
    restore_focus(&mut next, index);
    next
}

/// The node commands act on: the focused node, or the first item when
/// nothing has been focused yet. Stale focus resolves to nothing.
fn target(state: &NavState, tree: &TreeNode, index: &TreeIndex) -> Option<NodeId> {
    match state.focused {
        Some(id) => index.contains(id).then_some(id),
        None => first_item(tree),
    }
}

fn first_item(tree: &TreeNode) -> Option<NodeId> {
    tree.children.first().map(|c| c.id)
}

fn step(state: &mut NavState, tree: &TreeNode, forward: bool, policy: BoundaryPolicy) {
    let visible = visible_nodes(tree, &state.open);
    let (Some(&first), Some(&last)) = (visible.first(), visible.last()) else {
        return;
    };

    // Nothing focused yet: either direction lands on the first item.
    let Some(current) = state.focused else {
        state.focused = Some(first);
        return;
    };
    let Some(pos) = visible.iter().position(|&id| id == current) else {
        return;
    };

    let next = if forward {
        visible.get(pos + 1).copied()
    } else {
        pos.checked_sub(1).map(|p| visible[p])
    };

    state.focused = match (next, policy) {
        (Some(id), _) => Some(id),
        (None, BoundaryPolicy::Clamp) => Some(current),
        (None, BoundaryPolicy::Wrap) => Some(if forward { first } else { last }),
    };
}

fn expand_or_descend(state: &mut NavState, tree: &TreeNode, index: &TreeIndex) {
    let Some(id) = target(state, tree, index) else {
        return;
    };
    if !index.has_children(id) {
        return;
    }

    if state.is_open(id) {
        // Resolved from the tree, not from the previous visible sequence.
        if let Some(&child) = index.children(id).first() {
            state.focused = Some(child);
        }
    } else {
        state.open.insert(id);
    }
}

fn collapse_or_ascend(state: &mut NavState, tree: &TreeNode, index: &TreeIndex) {
    let Some(id) = target(state, tree, index) else {
        return;
    };

    if index.has_children(id) && state.is_open(id) {
        state.open.remove(&id);
        return;
    }

    // Top-level items have no focusable parent.
    if let Some(parent) = index.parent(id).filter(|&p| Some(p) != index.root()) {
        state.focused = Some(parent);
    }
}

fn expand_siblings(state: &mut NavState, tree: &TreeNode, index: &TreeIndex) {
    let Some(id) = target(state, tree, index) else {
        return;
    };
    let Some(parent) = index.parent(id) else {
        return;
    };

    let siblings: Vec<NodeId> = index
        .children(parent)
        .iter()
        .copied()
        .filter(|&sib| sib != id && index.has_children(sib))
        .collect();
    state.open.extend(siblings);
}

/// A node is visible when every ancestor below the root is open.
fn is_visible(open: &BTreeSet<NodeId>, index: &TreeIndex, id: NodeId) -> bool {
    if !index.contains(id) || Some(id) == index.root() {
        return false;
    }
    index.ancestors(id).iter().all(|a| open.contains(a))
}

fn is_stale(focused: Option<NodeId>, index: &TreeIndex) -> bool {
    focused.is_some_and(|id| !index.contains(id) || Some(id) == index.root())
}

/// Re-establish the focus invariant.
///
/// A focused node hidden by a closed ancestor moves to the outermost closed
/// ancestor, which is the nearest ancestor that is still visible. Focus on
/// an id missing from the tree (or on the root) is cleared.
fn restore_focus(state: &mut NavState, index: &TreeIndex) {
    let Some(id) = state.focused else {
        return;
    };
    if is_stale(Some(id), index) {
        state.focused = None;
        return;
    }

    let ancestors = index.ancestors(id);
    if let Some(&closed) = ancestors.iter().rev().find(|a| !state.open.contains(a)) {
        state.focused = Some(closed);
    }
}
