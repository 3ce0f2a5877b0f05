//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{TreeError, TreeResult};
use crate::state::{BoundaryPolicy, ItemElement, TabBehavior};

use super::types::Config;

/// File name looked up in the project directory
pub const PROJECT_CONFIG: &str = ".treenav.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TreeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG))
        .into_iter()
        .chain(config_dir().map(|dir| dir.join("treenav/config.toml")));

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match Config::load(&path) {
            Ok(config) => {
                debug!(message = "config.load", file = %path.display());
                return config;
            }
            Err(e) => warn!(message = "config.skip", file = %path.display(), error = %e),
        }
    }

    Config::default()
}

/// Apply environment variable overrides (TREENAV_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // TREENAV_TAB
    if let Some(tab) = get_env("TREENAV_TAB") {
        match tab.to_lowercase().as_str() {
            "exit" => config.navigation.tab = TabBehavior::Exit,
            "navigate" => config.navigation.tab = TabBehavior::Navigate,
            _ => {}
        }
    }

    // TREENAV_BOUNDARY
    if let Some(boundary) = get_env("TREENAV_BOUNDARY") {
        match boundary.to_lowercase().as_str() {
            "clamp" => config.navigation.boundary = BoundaryPolicy::Clamp,
            "wrap" => config.navigation.boundary = BoundaryPolicy::Wrap,
            _ => {}
        }
    }

    // TREENAV_ELEMENT
    if let Some(element) = get_env("TREENAV_ELEMENT") {
        match element.to_lowercase().as_str() {
            "list-item" | "li" => config.output.element = ItemElement::ListItem,
            "link" | "a" => config.output.element = ItemElement::Link,
            _ => {}
        }
    }

    config
}

/// Get XDG config directory
fn config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "navigation",
        "tab",
        "boundary",
        "output",
        "element",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
