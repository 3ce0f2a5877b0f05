//! treenav - keyboard navigation for collapsible trees
//!
//! A tree of labeled nodes is navigated with the keyboard the way
//! accessible tree widgets expect: a single tab stop (roving tabindex),
//! arrow keys that walk the visible rows, Right/Left to open and close,
//! and `*` to open a whole group. The engine is pure and renderer
//! agnostic; a crossterm terminal view is included.

pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod navigator;
pub mod processor;
pub mod state;
pub mod ui;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use error::{TreeError, TreeResult};
pub use index::{find_by_id, parent_of, visible_entries, visible_nodes, TreeIndex, VisibleEntry};
pub use loader::{load_tree, load_validated, parse_tree, TreeFormat};
pub use model::{NodeId, TreeNode};
pub use navigator::{Navigator, NavigatorOptions, TabOutcome, Transition};
pub use processor::{apply, Command};
pub use state::{BoundaryPolicy, ItemElement, NavState, TabBehavior};
