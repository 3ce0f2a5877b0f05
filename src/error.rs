//! Error types for treenav
//!
//! The navigation engine itself never fails: stale ids and invalid
//! transitions are no-ops. These errors cover loading trees and
//! configuration, and caller contract violations found by validation.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::NodeId;

/// Result type alias for treenav operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Main error type for treenav operations
#[derive(Error, Debug)]
pub enum TreeError {
    /// The same id is used by more than one node
    #[error("duplicate node ids: {}", format_ids(ids))]
    DuplicateIds { ids: Vec<NodeId> },

    /// Tree file has an extension we cannot parse
    #[error("unsupported tree file '{}' - expected .json, .yaml or .yml", file.display())]
    UnsupportedFormat { file: PathBuf },

    /// Tree file could not be parsed
    #[error("invalid tree in {}: {message}", file.display())]
    InvalidTree { file: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Key name in a replay script is not recognised
    #[error("unknown key '{name}'")]
    UnknownKey { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_ids(ids: &[NodeId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
