#![no_main]

use libfuzzer_sys::fuzz_target;
use treenav::{Navigator, NavigatorOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(tree) = serde_json::from_slice::<treenav::TreeNode>(data) {
        // Any parsed tree, duplicates included, must render without panicking
        let _ = tree.validate();
        let nav = Navigator::new(tree, NavigatorOptions::default());
        let _ = treenav::ui::widgets::tree_view::item_attributes(&nav);
    }
});
