//! Tab and Shift+Tab while an item has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use treenav::ui::widgets::tree_view::{FocusLog, FocusMove, KeyResponse, RenderBinding};
use treenav::{Command, Navigator, NavigatorOptions, NodeId, TabBehavior, TabOutcome, TreeNode};

fn tree() -> TreeNode {
    TreeNode::new(0, "Root")
        .with_child(TreeNode::new(1, "Folder").with_child(TreeNode::new(2, "File")))
        .with_child(TreeNode::new(3, "File"))
}

fn navigator(tab: TabBehavior) -> Navigator {
    Navigator::new(
        tree(),
        NavigatorOptions {
            tab,
            ..NavigatorOptions::default()
        },
    )
}

#[test]
fn tab_leaves_tree_and_reentry_lands_on_last_focus() {
    let mut nav = navigator(TabBehavior::Exit);
    nav.apply(Command::Focus(NodeId(3)));
    assert_eq!(nav.tab(true), TabOutcome::Exit);

    let mut binding = RenderBinding::new(&mut nav);
    let mut sink = FocusLog::new();
    binding.enter(&mut sink).unwrap();
    assert_eq!(sink.last(), Some(FocusMove { id: NodeId(3), row: 1 }));
}

#[test]
fn navigate_mode_walks_visible_rows_then_exits() {
    let mut nav = navigator(TabBehavior::Navigate);
    nav.apply(Command::Activate(NodeId(1)));

    let mut binding = RenderBinding::new(&mut nav);
    let mut sink = FocusLog::new();
    let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);

    assert!(matches!(binding.key(tab, &mut sink).unwrap(), KeyResponse::Handled(_)));
    assert!(matches!(binding.key(tab, &mut sink).unwrap(), KeyResponse::Handled(_)));
    assert_eq!(binding.key(tab, &mut sink).unwrap(), KeyResponse::Exit);

    let rows: Vec<usize> = sink.moves().iter().map(|m| m.row).collect();
    assert_eq!(rows, vec![1, 2]);
}

#[test]
fn shift_tab_on_first_item_exits_in_either_mode() {
    for behavior in [TabBehavior::Exit, TabBehavior::Navigate] {
        let mut nav = navigator(behavior);
        nav.apply(Command::MoveFirst);
        assert_eq!(nav.tab(false), TabOutcome::Exit);
        assert_eq!(nav.focused_id(), Some(NodeId(1)));
    }
}
