//! Configuration module for treenav
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREENAV_*)
//! 3. Explicit `--config` file
//! 4. Project config (.treenav.toml)
//! 5. User config (~/.config/treenav/config.toml)
//! 6. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{ColorMode, Config, NavigationConfig, OutputConfig};
