//! Tree file loading
//!
//! Trees are stored as JSON or YAML documents describing the root node.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{TreeError, TreeResult};
use crate::model::TreeNode;

/// Supported tree file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    Json,
    Yaml,
}

impl TreeFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parse a tree from an in-memory document
pub fn parse_tree(content: &str, format: TreeFormat, file: &Path) -> TreeResult<TreeNode> {
    let parsed = match format {
        TreeFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        TreeFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| TreeError::InvalidTree {
        file: file.to_path_buf(),
        message,
    })
}

/// Load a tree file without validating ids
pub fn load_tree(path: &Path) -> TreeResult<TreeNode> {
    let format = TreeFormat::from_path(path).ok_or_else(|| TreeError::UnsupportedFormat {
        file: path.to_path_buf(),
    })?;
    let content = fs::read_to_string(path)?;
    let tree = parse_tree(&content, format, path)?;
    debug!(
        message = "tree.load",
        file = %path.display(),
        nodes = tree.total_count()
    );
    Ok(tree)
}

/// Load a tree file and check that ids are unique
pub fn load_validated(path: &Path) -> TreeResult<TreeNode> {
    let tree = load_tree(path)?;
    tree.validate()?;
    Ok(tree)
}
