//! Error types for the boxtree engine.

use thiserror::Error;

use crate::types::NodeId;

/// Top-level error type for the boxtree engine.
#[derive(Debug, Error)]
pub enum BoxTreeError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors while building a tree from input data.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Malformed tree: node {key} references missing child {missing}")]
    MalformedTree { key: String, missing: String },

    #[error("Missing root record: {key}")]
    MissingRoot { key: String },

    #[error("Record {key} is not reachable from the root")]
    OrphanRecord { key: String },

    #[error("Invalid node key: {key}")]
    InvalidKey { key: String },

    #[error("Unknown split direction: {value}{}", at_key(.key))]
    UnknownDirection { key: Option<String>, value: String },

    #[error("Unknown node {id}")]
    UnknownNode { id: NodeId },

    #[cfg(feature = "serde")]
    #[error("Invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn at_key(key: &Option<String>) -> String {
    key.as_ref()
        .map(|key| format!(" (node {key})"))
        .unwrap_or_default()
}

/// Errors during layout computation.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Sizes were never computed for node {path}")]
    MissingSize { path: String },

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Errors while emitting draw primitives.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),
}

/// Errors during export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to format output: {0}")]
    Format(#[from] std::fmt::Error),
}
