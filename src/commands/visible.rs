use std::io::Write;
use std::path::Path;

use anyhow::Result;
use treenav::ui::context::UiContext;
use treenav::ui::json::write_document;
use treenav::ui::widgets::tree_view::{item_attributes, render_tree, RenderStyle};
use treenav::{Config, NavState, Navigator, NodeId};

use super::load_tree_file;

pub fn cmd_visible(
    file: &Path,
    open: &[u64],
    focus: Option<u64>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let tree = load_tree_file(file)?;
    let mut nav = Navigator::new(tree, config.navigator_options());
    nav.restore(NavState::with(
        open.iter().copied().map(NodeId),
        focus.map(NodeId),
    ));

    let mut out = std::io::stdout().lock();
    if json {
        write_document(&mut out, &item_attributes(&nav))?;
        return Ok(());
    }

    let ui = UiContext::new(config);
    let style = RenderStyle {
        unicode: ui.unicode,
        color: ui.color,
        width: None,
    };
    write!(out, "{}", render_tree(&nav, &style))?;
    Ok(())
}
