//! 2D draw primitives for box trees.
//!
//! Turns a sized tree into a [`Scene`]: one rectangle and one label per node,
//! parents before their descendants.

pub mod primitives;
pub mod scene;

pub use primitives::*;
pub use scene::{render, render_with_sizes, RenderOptions};

pub use boxtree_core::RenderError;
