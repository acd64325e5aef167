//! Core types, tree model, and errors for the boxtree layout engine.
//!
//! This crate provides the foundational types used across all other boxtree crates:
//! - Value types (sizes, split directions, colors)
//! - Path keys addressing nodes from the root
//! - The arena-backed [`BoxTree`] and flat record ingestion
//! - Error types

pub mod errors;
pub mod path;
pub mod records;
pub mod tree;
pub mod types;

pub use errors::*;
pub use path::NodePath;
pub use records::FlatRecord;
pub use tree::{BoxNode, BoxTree, DEFAULT_ROOT_KEY};
pub use types::*;
