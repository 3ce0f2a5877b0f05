//! Navigator: the navigation state container.
//!
//! Owns the tree, its index and the [`NavState`], and exposes a single
//! mutation entry point ([`Navigator::apply`]). One navigator per tree
//! instance; it is an ordinary owned value passed to whoever renders it.

use serde::Serialize;
use tracing::debug;

use crate::index::{find_by_id, visible_entries, visible_nodes, TreeIndex, VisibleEntry};
use crate::model::{NodeId, TreeNode};
use crate::processor::{self, Command};
use crate::state::{BoundaryPolicy, ItemElement, NavState, TabBehavior};

/// Per-instance navigation options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigatorOptions {
    pub boundary: BoundaryPolicy,
    pub tab: TabBehavior,
    pub element: ItemElement,
}

/// What one command did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub command: Command,
    pub previous_focus: Option<NodeId>,
    pub focus: Option<NodeId>,
    pub open_changed: bool,
}

impl Transition {
    pub fn focus_changed(&self) -> bool {
        self.previous_focus != self.focus
    }

    /// The item the renderer must move platform focus to, if any
    pub fn focus_request(&self) -> Option<NodeId> {
        if self.focus_changed() {
            self.focus
        } else {
            None
        }
    }

    pub fn changed(&self) -> bool {
        self.open_changed || self.focus_changed()
    }
}

/// Result of a Tab / Shift+Tab press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOutcome {
    /// Focus moved to another item inside the tree
    Moved(Transition),
    /// Focus leaves the tree; state is kept for re-entry
    Exit,
}

/// Interactive navigation over one tree
#[derive(Debug, Clone)]
pub struct Navigator {
    tree: TreeNode,
    index: TreeIndex,
    state: NavState,
    options: NavigatorOptions,
}

impl Navigator {
    /// Create a navigator with nothing open and nothing focused
    pub fn new(tree: TreeNode, options: NavigatorOptions) -> Self {
        let index = TreeIndex::build(&tree);
        Self {
            tree,
            index,
            state: NavState::new(),
            options,
        }
    }

    pub fn tree(&self) -> &TreeNode {
        &self.tree
    }

    pub fn index(&self) -> &TreeIndex {
        &self.index
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    pub fn element(&self) -> ItemElement {
        self.options.element
    }

    /// Replace the tree wholesale, resetting open-set and focus
    pub fn set_tree(&mut self, tree: TreeNode) {
        debug!(
            message = "tree.replace",
            nodes = tree.total_count(),
            previous_focus = ?self.state.focused
        );
        self.index = TreeIndex::build(&tree);
        self.tree = tree;
        self.state = NavState::new();
    }

    /// Start from a saved state.
    ///
    /// Ids that are not expandable nodes of this tree are dropped and the
    /// focus is moved to a visible node (or cleared) as `apply` would.
    pub fn restore(&mut self, mut state: NavState) {
        state.open.retain(|&id| self.index.has_children(id));
        self.state = processor::normalize(&state, &self.index);
    }

    /// Apply one command. The only way navigation state changes.
    pub fn apply(&mut self, command: Command) -> Transition {
        let next = processor::apply_indexed(
            &self.state,
            &self.tree,
            &self.index,
            command,
            self.options.boundary,
        );

        let transition = Transition {
            command,
            previous_focus: self.state.focused,
            focus: next.focused,
            open_changed: next.open != self.state.open,
        };
        debug!(
            message = "tree.command",
            command = command.name(),
            from = ?transition.previous_focus,
            to = ?transition.focus,
            open_changed = transition.open_changed
        );

        self.state = next;
        transition
    }

    /// Tab (`forward`) or Shift+Tab pressed on an item
    pub fn tab(&mut self, forward: bool) -> TabOutcome {
        if self.options.tab == TabBehavior::Exit {
            debug!(message = "tree.tab_exit", forward);
            return TabOutcome::Exit;
        }

        let visible = self.visible_nodes();
        let pos = self
            .tab_stop()
            .and_then(|id| visible.iter().position(|&v| v == id));
        let at_edge = match pos {
            None => true,
            Some(p) if forward => p + 1 >= visible.len(),
            Some(p) => p == 0,
        };
        if at_edge {
            debug!(message = "tree.tab_exit", forward);
            return TabOutcome::Exit;
        }

        let previous_focus = self.state.focused;
        // Focus the implicit tab stop first so the step starts from it.
        if previous_focus.is_none() {
            if let Some(&first) = visible.first() {
                self.apply(Command::Focus(first));
            }
        }
        let command = if forward {
            Command::MoveNext
        } else {
            Command::MovePrevious
        };
        let step = self.apply(command);
        TabOutcome::Moved(Transition {
            previous_focus,
            ..step
        })
    }

    pub fn is_open(&self, id: NodeId) -> bool {
        self.state.is_open(id)
    }

    pub fn focused_id(&self) -> Option<NodeId> {
        self.state.focused
    }

    pub fn focused_node(&self) -> Option<&TreeNode> {
        find_by_id(&self.tree, self.tab_stop()?)
    }

    /// The single item in the tab order: the focused item, or the first
    /// visible item while nothing has been focused.
    pub fn tab_stop(&self) -> Option<NodeId> {
        self.state
            .focused
            .or_else(|| self.tree.children.first().map(|c| c.id))
    }

    pub fn visible_nodes(&self) -> Vec<NodeId> {
        visible_nodes(&self.tree, &self.state.open)
    }

    pub fn visible_entries(&self) -> Vec<VisibleEntry> {
        visible_entries(&self.tree, &self.state.open)
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        find_by_id(&self.tree, id)
    }
}
