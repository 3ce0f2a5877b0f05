use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use treenav::ui::json::write_document;
use treenav::TreeNode;

#[derive(Debug, Serialize)]
struct CheckReport {
    file: String,
    valid: bool,
    nodes: usize,
    max_depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn cmd_check(file: &Path, json: bool) -> Result<()> {
    let tree = treenav::load_tree(file)
        .with_context(|| format!("Failed to load tree {}", file.display()))?;
    let result = tree.validate();

    let report = CheckReport {
        file: file.display().to_string(),
        valid: result.is_ok(),
        nodes: tree.total_count(),
        max_depth: max_depth(&tree),
        error: result.as_ref().err().map(ToString::to_string),
    };

    if json {
        write_document(&mut std::io::stdout().lock(), &report)?;
    } else if report.valid {
        println!(
            "✓ {}: {} nodes, depth {}, ids unique",
            report.file, report.nodes, report.max_depth
        );
    }

    if let Err(e) = result {
        bail!("{}: {}", report.file, e);
    }
    Ok(())
}

/// Deepest item level below the root (0 for a root without children)
fn max_depth(node: &TreeNode) -> usize {
    node.children
        .iter()
        .map(|child| 1 + max_depth(child))
        .max()
        .unwrap_or(0)
}
