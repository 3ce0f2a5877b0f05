//! Subcommand implementations

pub mod browse;
pub mod check;
pub mod replay;
pub mod visible;

use std::path::Path;

use anyhow::{Context, Result};
use treenav::config::ConfigWarning;
use treenav::{BoundaryPolicy, Config, ItemElement, TreeNode};

use crate::cli::Cli;

/// Resolve configuration: files, then environment, then CLI flags
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            print_config_warnings(&warnings);
            config
        }
        None => Config::load_or_default(std::env::current_dir().ok().as_deref()),
    };

    let mut config = config.with_env_overrides();
    if let Some(tab) = cli.tab {
        config.navigation.tab = tab.into();
    }
    if cli.wrap {
        config.navigation.boundary = BoundaryPolicy::Wrap;
    }
    if cli.anchors {
        config.output.element = ItemElement::Link;
    }
    if let Some(color) = cli.color {
        config.output.color = color.into();
    }
    Ok(config)
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => eprintln!(
                "Warning: unknown config key '{}' in {} (did you mean '{}'?)",
                warning.key, location, suggestion
            ),
            None => eprintln!("Warning: unknown config key '{}' in {}", warning.key, location),
        }
    }
}

/// Load a tree file and reject duplicate ids
pub fn load_tree_file(path: &Path) -> Result<TreeNode> {
    treenav::load_validated(path).with_context(|| format!("Failed to load tree {}", path.display()))
}
