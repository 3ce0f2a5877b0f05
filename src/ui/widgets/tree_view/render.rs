//! Row rendering and accessibility attributes for the tree view.
//!
//! Attributes are derived from the navigator on every repaint and never
//! stored between commands. Painting is plain string building so that
//! the same rows can go to a raw-mode terminal, stdout or a test.

use crossterm::style::Stylize;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::index::walk_visible;
use crate::model::NodeId;
use crate::navigator::Navigator;
use crate::state::{ItemElement, TabBehavior};
use crate::ui::theme::{colors, icons, icons_ascii};

/// Role carried by every rendered item
pub const TREE_ITEM_ROLE: &str = "treeitem";

/// Accessibility attributes of one visible item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemAttributes {
    pub id: NodeId,
    pub role: &'static str,
    pub element: ItemElement,
    /// `None` for leaves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    /// 0 for the single tab stop, -1 for every other item
    pub tab_index: i8,
    pub level: usize,
    pub pos_in_set: usize,
    pub set_size: usize,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub in_current_group: bool,
}

impl ItemAttributes {
    pub fn is_tab_stop(&self) -> bool {
        self.tab_index == 0
    }

    pub fn has_children(&self) -> bool {
        self.expanded.is_some()
    }
}

/// Attributes for every visible item, in visible order.
///
/// Exactly one item is the tab stop whenever the tree has items.
pub fn item_attributes(nav: &Navigator) -> Vec<ItemAttributes> {
    let tab_stop = nav.tab_stop();
    let group = current_group(nav);
    let element = nav.element();

    let mut rows = Vec::new();
    let mut stop_taken = false;
    walk_visible(nav.tree(), &nav.state().open, |node, entry| {
        let is_stop = !stop_taken && Some(entry.id) == tab_stop;
        stop_taken |= is_stop;
        rows.push(ItemAttributes {
            id: entry.id,
            role: TREE_ITEM_ROLE,
            element,
            expanded: entry.has_children.then_some(entry.open),
            tab_index: if is_stop { 0 } else { -1 },
            level: entry.depth,
            pos_in_set: entry.position,
            set_size: entry.set_size,
            label: node.label.clone(),
            icon: node.icon_for(entry.open).map(str::to_string),
            in_current_group: group.is_some() && entry.parent == group,
        });
    });
    rows
}

/// Parent of the group the focused item belongs to.
///
/// An item with children heads its own group; a leaf belongs to its
/// parent's. Top-level items have no highlighted group.
fn current_group(nav: &Navigator) -> Option<NodeId> {
    let focused = nav.focused_id()?;
    let index = nav.index();
    let group = if index.has_children(focused) {
        Some(focused)
    } else {
        index.parent(focused)
    };
    group.filter(|&g| Some(g) != index.root())
}

/// How rows are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub unicode: bool,
    pub color: bool,
    /// Maximum row width in columns; labels are cut to fit
    pub width: Option<usize>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            unicode: true,
            color: false,
            width: None,
        }
    }
}

impl RenderStyle {
    /// Uncolored, unbounded ascii rows
    pub fn ascii() -> Self {
        Self {
            unicode: false,
            ..Self::default()
        }
    }
}

struct Glyphs {
    expand: &'static str,
    collapse: &'static str,
    leaf: &'static str,
    cursor: &'static str,
    guide: &'static str,
    ellipsis: &'static str,
}

impl Glyphs {
    fn for_style(style: &RenderStyle) -> Self {
        if style.unicode {
            Self {
                expand: icons::EXPAND,
                collapse: icons::COLLAPSE,
                leaf: icons::LEAF,
                cursor: icons::CURSOR,
                guide: icons::GUIDE,
                ellipsis: "…",
            }
        } else {
            Self {
                expand: icons_ascii::EXPAND,
                collapse: icons_ascii::COLLAPSE,
                leaf: icons_ascii::LEAF,
                cursor: icons_ascii::CURSOR,
                guide: icons_ascii::GUIDE,
                ellipsis: "...",
            }
        }
    }
}

/// Column at which the marker of the tab stop row is drawn
pub const CURSOR_COLUMN: u16 = 0;

/// Render a single item to a string
pub fn render_row(item: &ItemAttributes, style: &RenderStyle) -> String {
    let glyphs = Glyphs::for_style(style);

    let marker = if item.is_tab_stop() { glyphs.cursor } else { " " };
    let units = item.level.saturating_sub(1);
    let indent = if item.in_current_group && units > 0 {
        let guide = if style.color {
            glyphs.guide.with(colors::GROUP).to_string()
        } else {
            glyphs.guide.to_string()
        };
        format!("{}{} ", "  ".repeat(units - 1), guide)
    } else {
        "  ".repeat(units)
    };
    let twisty = match item.expanded {
        Some(true) => glyphs.expand,
        Some(false) => glyphs.collapse,
        None => glyphs.leaf,
    };
    let icon = item
        .icon
        .as_deref()
        .map(|icon| format!("{icon} "))
        .unwrap_or_default();

    let prefix_width = marker.width() + 1 + units * 2 + twisty.width() + 1 + icon.width();
    let label = match style.width {
        Some(max) => truncate_to_width(&item.label, max.saturating_sub(prefix_width), glyphs.ellipsis),
        None => item.label.clone(),
    };
    let label = if style.color { paint_label(label, item) } else { label };

    let row = format!("{marker} {indent}{twisty} {icon}{label}");
    row.trim_end().to_string()
}

fn paint_label(label: String, item: &ItemAttributes) -> String {
    let mut styled = label.stylize();
    if item.is_tab_stop() {
        styled = styled.with(colors::FOCUS).bold();
    }
    if item.element == ItemElement::Link {
        styled = styled.underlined();
    }
    styled.to_string()
}

fn truncate_to_width(text: &str, max: usize, ellipsis: &str) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let budget = max.saturating_sub(ellipsis.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if max >= ellipsis.width() {
        out.push_str(ellipsis);
    }
    out
}

/// Render prepared rows, one per line
pub fn render_rows(rows: &[ItemAttributes], style: &RenderStyle) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&render_row(row, style));
        out.push('\n');
    }
    out
}

/// Render every visible item of the navigator
pub fn render_tree(nav: &Navigator, style: &RenderStyle) -> String {
    render_rows(&item_attributes(nav), style)
}

/// Screen-reader style description, e.g. "Docs, expanded, level 1, 1 of 3"
pub fn announce(item: &ItemAttributes) -> String {
    let mut parts = vec![item.label.clone()];
    match item.expanded {
        Some(true) => parts.push("expanded".to_string()),
        Some(false) => parts.push("collapsed".to_string()),
        None => {}
    }
    if item.element == ItemElement::Link {
        parts.push("link".to_string());
    }
    parts.push(format!("level {}", item.level));
    parts.push(format!("{} of {}", item.pos_in_set, item.set_size));
    parts.join(", ")
}

/// Status line: the announcement of the tab stop
pub fn render_status_bar(rows: &[ItemAttributes]) -> String {
    rows.iter()
        .find(|row| row.is_tab_stop())
        .map(announce)
        .unwrap_or_else(|| String::from("Empty tree"))
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(tab: TabBehavior, unicode: bool) -> String {
    let (vertical, horizontal) = if unicode {
        ("↑↓", "→←")
    } else {
        ("Up/Down", "Right/Left")
    };
    let tab_hint = match tab {
        TabBehavior::Exit => "[Tab] Leave tree",
        TabBehavior::Navigate => "[Tab] Next item",
    };
    format!(
        "[{vertical}] Move    [{horizontal}] Open/close    [Enter] Toggle/choose    [*] Open siblings\n\
         [Home/End] First/last    {tab_hint}    [q] Quit"
    )
}
