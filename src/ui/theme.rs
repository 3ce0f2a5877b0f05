use crossterm::style::Color;

/// Design tokens for the tree view.
///
/// All icons and colors used when painting rows come from this module.
pub mod colors {
    use super::Color;

    /// Focused row
    pub const FOCUS: Color = Color::Green;
    /// Guide of the group the focused item belongs to
    pub const GROUP: Color = Color::Cyan;
    /// Hints and status text
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
    pub const LEAF: &str = " ";

    pub const CURSOR: &str = "❯";
    pub const GUIDE: &str = "│";
}

pub mod icons_ascii {
    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";
    pub const LEAF: &str = "   ";

    pub const CURSOR: &str = ">";
    pub const GUIDE: &str = "|";
}
