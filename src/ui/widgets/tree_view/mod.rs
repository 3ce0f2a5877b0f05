//! Tree View Widget
//!
//! Keyboard navigable tree with roving tabindex semantics.
//!
//! # Module Structure
//!
//! - `render` - Item attributes, row painting and announcements
//! - `binding` - Roving focus binding between navigator and view
//! - `input` - Key map, replay key names and the interactive loop

mod binding;
mod input;
mod render;

pub use binding::{FocusLog, FocusMove, FocusSink, KeyResponse, RenderBinding};
pub use input::{key_to_command, parse_key_name, run_interactive, KeyInput, UiOptions};
pub use render::{
    announce, item_attributes, render_help_bar, render_row, render_rows, render_status_bar, render_tree,
    ItemAttributes, RenderStyle, TREE_ITEM_ROLE,
};
