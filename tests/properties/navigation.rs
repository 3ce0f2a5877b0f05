//! Property tests for the command processor.

use proptest::prelude::*;

use treenav::{
    apply, BoundaryPolicy, Command, NavState, Navigator, NavigatorOptions, TabBehavior, TabOutcome,
};

use super::strategies::{command, commands, tree};

fn navigator(tree: treenav::TreeNode, boundary: BoundaryPolicy) -> Navigator {
    Navigator::new(
        tree,
        NavigatorOptions {
            boundary,
            ..NavigatorOptions::default()
        },
    )
}

fn boundary() -> impl Strategy<Value = BoundaryPolicy> {
    prop_oneof![Just(BoundaryPolicy::Clamp), Just(BoundaryPolicy::Wrap)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a defined focus is always a visible node.
    #[test]
    fn property_focus_stays_visible(tree in tree(), cmds in commands(), policy in boundary()) {
        let mut nav = navigator(tree, policy);
        for cmd in cmds {
            nav.apply(cmd);
            if let Some(focused) = nav.focused_id() {
                prop_assert!(nav.visible_nodes().contains(&focused), "{:?} hidden after {:?}", focused, cmd);
            }
        }
    }

    /// PROPERTY: only nodes with children ever enter the open-set.
    #[test]
    fn property_open_set_holds_expandable_nodes(tree in tree(), cmds in commands()) {
        let mut nav = navigator(tree, BoundaryPolicy::Clamp);
        for cmd in cmds {
            nav.apply(cmd);
        }
        for id in &nav.state().open {
            prop_assert!(nav.index().has_children(*id));
        }
    }

    /// PROPERTY: Toggle twice on a focused node restores the state.
    #[test]
    fn property_toggle_twice_is_identity(tree in tree(), cmds in commands()) {
        let mut nav = navigator(tree.clone(), BoundaryPolicy::Clamp);
        for cmd in cmds {
            nav.apply(cmd);
        }
        let state = nav.state().clone();
        prop_assume!(state.focused.is_some());

        let once = apply(&state, &tree, Command::Toggle, BoundaryPolicy::Clamp);
        let twice = apply(&once, &tree, Command::Toggle, BoundaryPolicy::Clamp);
        prop_assert_eq!(twice, state);
    }

    /// PROPERTY: ExpandSiblings never closes a node or moves focus.
    #[test]
    fn property_expand_siblings_is_monotonic(tree in tree(), cmds in commands()) {
        let mut nav = navigator(tree.clone(), BoundaryPolicy::Clamp);
        for cmd in cmds {
            nav.apply(cmd);
        }
        let before = nav.state().clone();
        let after = apply(&before, &tree, Command::ExpandSiblings, BoundaryPolicy::Clamp);
        prop_assert!(before.open.is_subset(&after.open));
        prop_assert_eq!(after.focused, before.focused);
    }

    /// PROPERTY: under Clamp, stepping past either end keeps focus in place.
    #[test]
    fn property_clamp_holds_at_edges(tree in tree(), cmds in commands()) {
        let mut nav = navigator(tree, BoundaryPolicy::Clamp);
        for cmd in cmds {
            nav.apply(cmd);
        }
        let visible = nav.visible_nodes();
        prop_assume!(!visible.is_empty());

        nav.apply(Command::MoveLast);
        nav.apply(Command::MoveNext);
        prop_assert_eq!(nav.focused_id(), visible.last().copied());

        nav.apply(Command::MoveFirst);
        nav.apply(Command::MovePrevious);
        prop_assert_eq!(nav.focused_id(), visible.first().copied());
    }

    /// PROPERTY: under Wrap, stepping past either end reaches the other end.
    #[test]
    fn property_wrap_reaches_other_end(tree in tree(), cmds in commands()) {
        let mut nav = navigator(tree, BoundaryPolicy::Wrap);
        for cmd in cmds {
            nav.apply(cmd);
        }
        let visible = nav.visible_nodes();
        prop_assume!(!visible.is_empty());

        nav.apply(Command::MoveLast);
        nav.apply(Command::MoveNext);
        prop_assert_eq!(nav.focused_id(), visible.first().copied());

        nav.apply(Command::MovePrevious);
        prop_assert_eq!(nav.focused_id(), visible.last().copied());
    }

    /// PROPERTY: commands on a stale state never panic, leave no dangling focus
    /// and leave only expandable nodes open.
    #[test]
    fn property_arbitrary_state_never_panics(
        tree in tree(),
        open in proptest::collection::btree_set(0u64..40, 0..10),
        focused in proptest::option::of(0u64..40),
        cmd in command(),
    ) {
        let state = NavState::with(open.into_iter().map(treenav::NodeId), focused.map(treenav::NodeId));
        let next = apply(&state, &tree, cmd, BoundaryPolicy::Clamp);
        if let Some(id) = next.focused {
            prop_assert!(treenav::find_by_id(&tree, id).is_some());
        }
        for id in &next.open {
            let node = treenav::find_by_id(&tree, *id);
            prop_assert!(node.is_some_and(|n| n.has_children()), "open id {} has no children", id);
        }
    }

    /// PROPERTY: in Navigate mode Tab eventually leaves the tree.
    #[test]
    fn property_tab_navigation_terminates(tree in tree(), cmds in commands()) {
        let mut nav = Navigator::new(
            tree,
            NavigatorOptions {
                tab: TabBehavior::Navigate,
                ..NavigatorOptions::default()
            },
        );
        for cmd in cmds {
            nav.apply(cmd);
        }
        let limit = nav.visible_nodes().len() + 1;
        let exited = (0..limit).any(|_| nav.tab(true) == TabOutcome::Exit);
        prop_assert!(exited);
    }
}
