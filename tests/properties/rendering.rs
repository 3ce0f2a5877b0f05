//! Property tests for derived item attributes.

use proptest::prelude::*;

use treenav::ui::widgets::tree_view::{item_attributes, render_tree, RenderStyle};
use treenav::{Navigator, NavigatorOptions};

use super::strategies::{commands, tree};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: exactly one rendered item is the tab stop when the tree has items.
    #[test]
    fn property_single_tab_stop(tree in tree(), cmds in commands()) {
        let has_items = !tree.children.is_empty();
        let mut nav = Navigator::new(tree, NavigatorOptions::default());
        for cmd in cmds {
            nav.apply(cmd);
        }

        let rows = item_attributes(&nav);
        let stops = rows.iter().filter(|r| r.tab_index == 0).count();
        prop_assert_eq!(stops, usize::from(has_items));
        prop_assert!(rows.iter().all(|r| r.tab_index == 0 || r.tab_index == -1));
    }

    /// PROPERTY: attributes agree with the visible sequence.
    #[test]
    fn property_rows_match_visible_sequence(tree in tree(), cmds in commands()) {
        let mut nav = Navigator::new(tree, NavigatorOptions::default());
        for cmd in cmds {
            nav.apply(cmd);
        }

        let rows = item_attributes(&nav);
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        prop_assert_eq!(ids, nav.visible_nodes());
        for row in &rows {
            prop_assert!(row.pos_in_set >= 1 && row.pos_in_set <= row.set_size);
            prop_assert_eq!(row.expanded.is_some(), nav.index().has_children(row.id));
            prop_assert_eq!(row.expanded == Some(true), nav.is_open(row.id));
        }
        prop_assert_eq!(render_tree(&nav, &RenderStyle::ascii()).lines().count(), rows.len());
    }
}
