//! Terminal presentation: capability detection, theme and the tree view.

pub mod context;
pub mod json;
pub mod terminal;
pub mod theme;
pub mod widgets;
