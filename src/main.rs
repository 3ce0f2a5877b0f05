//! treenav CLI - keyboard navigation for collapsible trees
//!
//! Usage: treenav <COMMAND>
//!
//! Commands:
//!   browse   Navigate a tree interactively
//!   visible  Print the visible rows of a tree
//!   replay   Replay key presses and print the resulting state
//!   check    Validate a tree file

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = commands::resolve_config(&cli)?;

    match &cli.command {
        Commands::Browse { file } => commands::browse::cmd_browse(file, &config),
        Commands::Visible {
            file,
            open,
            focus,
            json,
        } => commands::visible::cmd_visible(file, open, *focus, *json, &config),
        Commands::Replay { file, keys, json } => {
            commands::replay::cmd_replay(file, keys, *json, &config)
        }
        Commands::Check { file, json } => commands::check::cmd_check(file, *json),
    }
}

/// Log to stderr. `-v` flags win over `RUST_LOG`; the default is warnings only.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
