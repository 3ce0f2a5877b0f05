use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use treenav::ui::context::UiContext;
use treenav::ui::json::write_event;
use treenav::ui::widgets::tree_view::{
    parse_key_name, FocusLog, FocusMove, KeyResponse, RenderBinding, RenderStyle,
};
use treenav::{Config, Navigator, NodeId, TreeResult};

use super::load_tree_file;

/// Outcome of one replayed key
#[derive(Debug, Serialize)]
struct ReplayStep<'a> {
    event: &'static str,
    key: &'a str,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'static str>,
    focus: Option<NodeId>,
    open_changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_move: Option<FocusMove>,
}

impl<'a> ReplayStep<'a> {
    fn new(key: &'a str, response: KeyResponse, focus: Option<NodeId>, focus_move: Option<FocusMove>) -> Self {
        let (outcome, command, open_changed) = match response {
            KeyResponse::Handled(t) => ("handled", Some(t.command.name()), t.open_changed),
            KeyResponse::Exit => ("exit", None, false),
            KeyResponse::Ignored => ("ignored", None, false),
        };
        Self {
            event: "key",
            key,
            outcome,
            command,
            focus,
            open_changed,
            focus_move,
        }
    }

    fn describe(&self) -> String {
        let Some(command) = self.command else {
            return format!("{:<10} {}", self.key, self.outcome);
        };
        let mut line = format!("{:<10} {:<20} focus {}", self.key, command, describe_focus(self.focus));
        if let Some(moved) = self.focus_move {
            line.push_str(&format!(" (row {})", moved.row));
        }
        if self.open_changed {
            line.push_str(" [open set changed]");
        }
        line
    }
}

#[derive(Debug, Serialize)]
struct ReplayState {
    event: &'static str,
    open: Vec<NodeId>,
    focused: Option<NodeId>,
    tab_stop: Option<NodeId>,
}

fn describe_focus(focus: Option<NodeId>) -> String {
    focus.map_or_else(|| "-".to_string(), |id| id.to_string())
}

pub fn cmd_replay(file: &Path, keys: &str, json: bool, config: &Config) -> Result<()> {
    let names: Vec<&str> = keys
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();
    let events = names
        .iter()
        .map(|name| parse_key_name(name))
        .collect::<TreeResult<Vec<_>>>()
        .context("Invalid --keys")?;

    let tree = load_tree_file(file)?;
    let mut nav = Navigator::new(tree, config.navigator_options());
    let mut binding = RenderBinding::new(&mut nav);
    let mut log = FocusLog::new();
    let mut out = std::io::stdout().lock();

    for (name, key) in names.iter().copied().zip(events) {
        let before = log.moves().len();
        let response = binding.key(key, &mut log)?;
        let moved = log.moves().get(before).copied();
        let step = ReplayStep::new(name, response, binding.navigator().focused_id(), moved);
        if json {
            write_event(&mut out, &step)?;
        } else {
            writeln!(out, "{}", step.describe())?;
        }
    }

    let nav = binding.navigator();
    let state = ReplayState {
        event: "state",
        open: nav.state().open.iter().copied().collect(),
        focused: nav.focused_id(),
        tab_stop: nav.tab_stop(),
    };
    if json {
        write_event(&mut out, &state)?;
        return Ok(());
    }

    let ui = UiContext::new(config);
    let style = RenderStyle {
        unicode: ui.unicode,
        color: ui.color,
        width: None,
    };
    if !names.is_empty() {
        writeln!(out)?;
    }
    write!(out, "{}", binding.render(&style))?;
    let open: Vec<String> = state.open.iter().map(ToString::to_string).collect();
    writeln!(
        out,
        "open: {}",
        if open.is_empty() { "-".to_string() } else { open.join(", ") }
    )?;
    writeln!(out, "focus: {}", describe_focus(state.focused))?;
    Ok(())
}
