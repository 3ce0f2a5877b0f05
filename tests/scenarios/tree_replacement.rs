//! The owner swaps in a new tree instance while navigation state exists.

use treenav::{apply, BoundaryPolicy, Command, NavState, Navigator, NavigatorOptions, NodeId, TreeNode};

fn first_tree() -> TreeNode {
    TreeNode::new(0, "Root")
        .with_child(TreeNode::new(1, "Folder").with_child(TreeNode::new(2, "File")))
        .with_child(TreeNode::new(3, "File"))
}

fn second_tree() -> TreeNode {
    TreeNode::new(0, "Root")
        .with_child(TreeNode::new(10, "Other"))
        .with_child(TreeNode::new(11, "Again").with_child(TreeNode::new(12, "Child")))
}

#[test]
fn stale_focus_falls_back_to_first_item() {
    let stale = NavState::with([NodeId(1)], Some(NodeId(2)));
    let next = apply(&stale, &second_tree(), Command::MoveNext, BoundaryPolicy::Clamp);
    assert_eq!(next.focused, Some(NodeId(10)));
    // Id 1 does not exist in the new tree
    assert!(next.open.is_empty());
}

#[test]
fn click_lands_while_focus_is_stale() {
    let stale = NavState::with([NodeId(1)], Some(NodeId(2)));
    let next = apply(&stale, &second_tree(), Command::Activate(NodeId(11)), BoundaryPolicy::Clamp);
    assert_eq!(next, NavState::with([NodeId(11)], Some(NodeId(11))));
}

#[test]
fn carried_open_ids_do_not_reopen_reused_ids() {
    // 3 is missing from the new tree and 12 is a leaf in it
    let carried = NavState::with([NodeId(3), NodeId(12)], None);
    let next = apply(&carried, &second_tree(), Command::MoveFirst, BoundaryPolicy::Clamp);
    assert!(next.open.is_empty());
    assert_eq!(next.focused, Some(NodeId(10)));
}

#[test]
fn set_tree_resets_navigation() {
    let mut nav = Navigator::new(first_tree(), NavigatorOptions::default());
    nav.apply(Command::Activate(NodeId(1)));
    nav.apply(Command::MoveNext);

    nav.set_tree(second_tree());
    assert_eq!(nav.focused_id(), None);
    assert_eq!(nav.tab_stop(), Some(NodeId(10)));
    assert_eq!(nav.visible_nodes(), vec![NodeId(10), NodeId(11)]);
}

#[test]
fn restore_keeps_ids_shared_by_both_trees() {
    let mut nav = Navigator::new(second_tree(), NavigatorOptions::default());
    nav.restore(NavState::with([NodeId(1), NodeId(11)], Some(NodeId(12))));
    assert_eq!(nav.state().open.iter().copied().collect::<Vec<_>>(), vec![NodeId(11)]);
    assert_eq!(nav.focused_id(), Some(NodeId(12)));
}
