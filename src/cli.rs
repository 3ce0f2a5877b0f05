//! CLI Argument Parsing
//!
//! Global flags (--config, --anchors, --tab, --wrap, --color, --verbose)
//! are inherited by all subcommands and override configuration files.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use treenav::config::ColorMode;
use treenav::TabBehavior;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabWhen {
    /// Tab leaves the tree
    Exit,
    /// Tab moves like the arrow keys, leaving the tree past either end
    Navigate,
}

impl From<TabWhen> for TabBehavior {
    fn from(value: TabWhen) -> Self {
        match value {
            TabWhen::Exit => TabBehavior::Exit,
            TabWhen::Navigate => TabBehavior::Navigate,
        }
    }
}

/// treenav - keyboard navigation for collapsible trees
#[derive(Parser, Debug)]
#[command(name = "treenav")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (takes precedence over project and user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Render items as links instead of list items
    #[arg(long, global = true)]
    pub anchors: bool,

    /// What Tab does while an item has focus
    #[arg(long, global = true, value_enum)]
    pub tab: Option<TabWhen>,

    /// Wrap around at either end instead of stopping
    #[arg(long, global = true)]
    pub wrap: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Navigate a tree interactively and print the chosen leaf
    Browse {
        /// Tree file (.json, .yaml or .yml)
        file: PathBuf,
    },

    /// Print the visible rows of a tree
    Visible {
        /// Tree file (.json, .yaml or .yml)
        file: PathBuf,

        /// Ids of open nodes
        #[arg(long, value_delimiter = ',', value_name = "IDS")]
        open: Vec<u64>,

        /// Id of the focused node
        #[arg(long, value_name = "ID")]
        focus: Option<u64>,

        /// Print item attributes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay key presses and print the resulting state
    Replay {
        /// Tree file (.json, .yaml or .yml)
        file: PathBuf,

        /// Comma separated key names (down, up, left, right, enter, space, *, home, end, tab, shift+tab)
        #[arg(long, value_name = "KEYS", allow_hyphen_values = true)]
        keys: String,

        /// Emit NDJSON events
        #[arg(long)]
        json: bool,
    },

    /// Validate a tree file (exits non-zero on duplicate ids)
    Check {
        /// Tree file (.json, .yaml or .yml)
        file: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
