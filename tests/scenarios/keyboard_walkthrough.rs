//! Arrow key journeys over small trees.

use treenav::{apply, BoundaryPolicy, Command, NavState, Navigator, NavigatorOptions, NodeId, TreeNode};

/// Root -> [Folder(1) -> [File(2)], File(3)]
fn folder_tree() -> TreeNode {
    TreeNode::new(0, "Root")
        .with_child(TreeNode::new(1, "Folder").with_child(TreeNode::new(2, "File")))
        .with_child(TreeNode::new(3, "File"))
}

fn ids(raw: &[u64]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId).collect()
}

#[test]
fn scenario_first_arrow_enters_then_right_opens_and_descends() {
    let tree = folder_tree();
    let mut state = NavState::new();

    state = apply(&state, &tree, Command::MoveNext, BoundaryPolicy::Clamp);
    assert_eq!(state.focused, Some(NodeId(1)));
    assert!(state.open.is_empty());

    state = apply(&state, &tree, Command::ExpandOrDescend, BoundaryPolicy::Clamp);
    assert_eq!(state, NavState::with(ids(&[1]), Some(NodeId(1))));

    state = apply(&state, &tree, Command::ExpandOrDescend, BoundaryPolicy::Clamp);
    assert_eq!(state, NavState::with(ids(&[1]), Some(NodeId(2))));
}

#[test]
fn scenario_left_from_child_returns_to_open_parent() {
    let tree = folder_tree();
    let start = NavState::with(ids(&[1]), Some(NodeId(2)));

    let state = apply(&start, &tree, Command::CollapseOrAscend, BoundaryPolicy::Clamp);
    assert_eq!(state, NavState::with(ids(&[1]), Some(NodeId(1))));

    // A second Left closes the parent
    let state = apply(&state, &tree, Command::CollapseOrAscend, BoundaryPolicy::Clamp);
    assert_eq!(state, NavState::with([], Some(NodeId(1))));
}

#[test]
fn scenario_star_opens_expandable_siblings_only() {
    let tree = TreeNode::new(0, "Root")
        .with_child(TreeNode::new(1, "A").with_child(TreeNode::new(2, "a")))
        .with_child(TreeNode::new(3, "B"))
        .with_child(TreeNode::new(4, "C").with_child(TreeNode::new(5, "c")));
    let start = NavState::with([], Some(NodeId(1)));

    let state = apply(&start, &tree, Command::ExpandSiblings, BoundaryPolicy::Clamp);
    assert_eq!(state, NavState::with(ids(&[4]), Some(NodeId(1))));
}

#[test]
fn scenario_enter_on_leaf_changes_nothing() {
    let tree = folder_tree();
    let start = NavState::with([], Some(NodeId(3)));
    assert_eq!(apply(&start, &tree, Command::Toggle, BoundaryPolicy::Clamp), start);
}

#[test]
fn scenario_full_session_through_navigator() {
    let mut nav = Navigator::new(folder_tree(), NavigatorOptions::default());
    assert_eq!(nav.tab_stop(), Some(NodeId(1)));

    for command in [
        Command::MoveNext,
        Command::Toggle,
        Command::MoveNext,
        Command::MoveNext,
        Command::MoveNext,
    ] {
        nav.apply(command);
    }
    // Clamped on the last row
    assert_eq!(nav.focused_id(), Some(NodeId(3)));
    assert_eq!(nav.visible_nodes(), ids(&[1, 2, 3]));

    nav.apply(Command::MoveFirst);
    nav.apply(Command::Toggle);
    assert_eq!(nav.visible_nodes(), ids(&[1, 3]));
    assert_eq!(nav.focused_id(), Some(NodeId(1)));
}

#[test]
fn scenario_collapsing_ancestor_pulls_focus_up() {
    let tree = TreeNode::new(0, "Root").with_child(
        TreeNode::new(1, "outer")
            .with_child(TreeNode::new(2, "inner").with_child(TreeNode::new(3, "deep"))),
    );
    let mut nav = Navigator::new(tree, NavigatorOptions::default());
    nav.apply(Command::Activate(NodeId(1)));
    nav.apply(Command::Activate(NodeId(2)));
    nav.apply(Command::Focus(NodeId(3)));
    assert_eq!(nav.focused_id(), Some(NodeId(3)));

    // Clicking the outer folder closes it; focus lands on the clicked item
    nav.apply(Command::Activate(NodeId(1)));
    assert_eq!(nav.focused_id(), Some(NodeId(1)));
    assert_eq!(nav.visible_nodes(), ids(&[1]));
    // Inner stays open for when the outer folder is reopened
    assert!(nav.is_open(NodeId(2)));
}

#[test]
fn scenario_wrap_policy_cycles() {
    let options = NavigatorOptions {
        boundary: BoundaryPolicy::Wrap,
        ..NavigatorOptions::default()
    };
    let mut nav = Navigator::new(folder_tree(), options);
    nav.apply(Command::MoveLast);
    nav.apply(Command::MoveNext);
    assert_eq!(nav.focused_id(), Some(NodeId(1)));
    nav.apply(Command::MovePrevious);
    assert_eq!(nav.focused_id(), Some(NodeId(3)));
}
