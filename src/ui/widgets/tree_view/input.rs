//! Keyboard input handling and interactive loop.
//!
//! Maps crossterm key events to navigation commands and runs the raw-mode
//! terminal loop that paints the tree and keeps the terminal cursor on the
//! focused row.

use std::io::{self, stdout, Stdout, Write};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    terminal::{self, ClearType},
};
use tracing::debug;

use crate::error::{TreeError, TreeResult};
use crate::model::NodeId;
use crate::navigator::Navigator;
use crate::processor::Command;
use crate::state::TabBehavior;
use crate::ui::context::UiContext;

use super::binding::{FocusSink, KeyResponse, RenderBinding};
use super::render::{render_help_bar, render_status_bar, RenderStyle, CURSOR_COLUMN};

/// A key press after mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Command(Command),
    /// Tab (`forward`) or Shift+Tab
    Tab { forward: bool },
}

/// Convert a keyboard event to a navigation input
pub fn key_to_command(key: KeyEvent) -> Option<KeyInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Command::MovePrevious,
        KeyCode::Down | KeyCode::Char('j') => Command::MoveNext,
        KeyCode::Right | KeyCode::Char('l') => Command::ExpandOrDescend,
        KeyCode::Left | KeyCode::Char('h') => Command::CollapseOrAscend,
        KeyCode::Enter | KeyCode::Char(' ') => Command::Toggle,
        KeyCode::Char('*') => Command::ExpandSiblings,
        KeyCode::Home => Command::MoveFirst,
        KeyCode::End => Command::MoveLast,
        KeyCode::Tab => {
            return Some(KeyInput::Tab {
                forward: !key.modifiers.contains(KeyModifiers::SHIFT),
            })
        }
        KeyCode::BackTab => return Some(KeyInput::Tab { forward: false }),
        _ => return None,
    };
    Some(KeyInput::Command(command))
}

/// Parse a key name used in replay scripts ("down", "shift+tab", "*", ...)
pub fn parse_key_name(name: &str) -> TreeResult<KeyEvent> {
    let (code, modifiers) = match name.trim().to_ascii_lowercase().as_str() {
        "down" => (KeyCode::Down, KeyModifiers::NONE),
        "up" => (KeyCode::Up, KeyModifiers::NONE),
        "left" => (KeyCode::Left, KeyModifiers::NONE),
        "right" => (KeyCode::Right, KeyModifiers::NONE),
        "enter" => (KeyCode::Enter, KeyModifiers::NONE),
        "space" => (KeyCode::Char(' '), KeyModifiers::NONE),
        "*" => (KeyCode::Char('*'), KeyModifiers::NONE),
        "home" => (KeyCode::Home, KeyModifiers::NONE),
        "end" => (KeyCode::End, KeyModifiers::NONE),
        "tab" => (KeyCode::Tab, KeyModifiers::NONE),
        "shift+tab" => (KeyCode::BackTab, KeyModifiers::SHIFT),
        _ => {
            return Err(TreeError::UnknownKey {
                name: name.trim().to_string(),
            })
        }
    };
    Ok(KeyEvent::new(code, modifiers))
}

/// Settings for one interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiOptions {
    pub style: RenderStyle,
    pub title: String,
}

impl UiOptions {
    pub fn from_context(ui: &UiContext, title: impl Into<String>) -> Self {
        Self {
            style: RenderStyle {
                unicode: ui.unicode,
                color: ui.color,
                width: Some(usize::from(ui.caps.width)),
            },
            title: title.into(),
        }
    }
}

/// Rows above the first tree row: title and a blank line
const HEADER_ROWS: u16 = 2;

/// Moves the terminal cursor onto the focused row
struct TerminalFocus {
    out: Stdout,
}

impl FocusSink for TerminalFocus {
    fn move_focus(&mut self, id: NodeId, row: usize) -> io::Result<()> {
        debug!(message = "tree.focus_move", id = %id, row);
        execute!(self.out, cursor::MoveTo(CURSOR_COLUMN, screen_row(row)))
    }
}

fn screen_row(row: usize) -> u16 {
    u16::try_from(row)
        .unwrap_or(u16::MAX)
        .saturating_add(HEADER_ROWS)
}

/// Run the tree view interactively.
///
/// Returns the leaf confirmed with Enter, or `None` when the user quits
/// or tabs out of the tree.
pub fn run_interactive(nav: &mut Navigator, options: &UiOptions) -> io::Result<Option<NodeId>> {
    terminal::enable_raw_mode()?;
    let mut out = stdout();
    let result = execute!(out, EnableMouseCapture).and_then(|_| event_loop(nav, options, &mut out));

    // Restore terminal
    let restored = execute!(
        out,
        DisableMouseCapture,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .and_then(|_| terminal::disable_raw_mode());

    let chosen = result?;
    restored?;
    Ok(chosen)
}

fn event_loop(nav: &mut Navigator, options: &UiOptions, out: &mut Stdout) -> io::Result<Option<NodeId>> {
    let tab = nav.options().tab;
    let mut binding = RenderBinding::new(nav);
    let mut focus = TerminalFocus { out: stdout() };

    binding.enter(&mut focus)?;
    draw(out, &binding, options, tab)?;
    show_focus(&binding, &mut focus)?;

    loop {
        match event::read()? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if is_quit(key) {
                    return Ok(None);
                }
                if key.code == KeyCode::Enter {
                    let leaf = binding.navigator().focused_node().filter(|n| n.is_leaf());
                    if let Some(node) = leaf {
                        return Ok(Some(node.id));
                    }
                }
                if binding.key(key, &mut focus)? == KeyResponse::Exit {
                    return Ok(None);
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                row,
                ..
            }) => {
                if let Some(row) = row.checked_sub(HEADER_ROWS) {
                    binding.click(usize::from(row), &mut focus)?;
                }
            }
            Event::Resize(..) => {}
            _ => continue,
        }
        draw(out, &binding, options, tab)?;
        show_focus(&binding, &mut focus)?;
    }
}

/// The terminal cursor is the platform focus: after a repaint the sink
/// parks it on the tab stop row, or hides it when the tree is empty.
fn show_focus(binding: &RenderBinding<'_>, focus: &mut TerminalFocus) -> io::Result<()> {
    if binding.park(focus)? {
        execute!(focus.out, cursor::Show)
    } else {
        execute!(focus.out, cursor::Hide)
    }
}

fn is_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn draw(
    out: &mut Stdout,
    binding: &RenderBinding<'_>,
    options: &UiOptions,
    tab: TabBehavior,
) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    write!(out, "{}\r\n\r\n", options.title)?;
    for line in binding.render(&options.style).lines() {
        write!(out, "{}\r\n", line)?;
    }

    let rule = if options.style.unicode { "─" } else { "-" };
    write!(out, "{}\r\n", rule.repeat(40))?;
    write!(out, "{}\r\n\r\n", render_status_bar(binding.rows()))?;
    for line in render_help_bar(tab, options.style.unicode).lines() {
        write!(out, "{}\r\n", line)?;
    }

    out.flush()
}
