use std::path::Path;

use anyhow::{bail, Result};
use is_terminal::IsTerminal;
use treenav::ui::context::UiContext;
use treenav::ui::widgets::tree_view::{run_interactive, UiOptions};
use treenav::{Config, Navigator};

use super::load_tree_file;

pub fn cmd_browse(file: &Path, config: &Config) -> Result<()> {
    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `treenav visible` or `treenav replay` instead");
    }

    let tree = load_tree_file(file)?;
    let title = format!("{} ({})", tree.label, file.display());
    let mut nav = Navigator::new(tree, config.navigator_options());

    let ui = UiContext::new(config);
    let options = UiOptions::from_context(&ui, title);

    if let Some(id) = run_interactive(&mut nav, &options)? {
        if let Some(node) = nav.node(id) {
            println!("{}", node.label);
        }
    }
    Ok(())
}
