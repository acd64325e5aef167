//! Layout computation for box trees.
//!
//! This crate computes the sizes and positions of every node in a
//! [`BoxTree`](boxtree_core::BoxTree).
//!
//! # Architecture
//!
//! 1. **Sizing**: a bottom-up pass derives text, node and total sizes for
//!    every node from its own direction, its parent's direction and its
//!    children's total sizes.
//! 2. **Placement**: a top-down pass assigns each node an origin, centers its
//!    box inside its footprint and advances sibling origins by their total
//!    sizes.
//!
//! Same-depth alignment across different subtrees is not performed.
//!
//! # Example
//!
//! ```ignore
//! use boxtree_layout::{size_tree, LayoutOptions};
//!
//! let sized = size_tree(&tree, &LayoutOptions::default());
//! for placement in sized.place()? {
//!     println!("{}: {:?}", placement.path, placement.rect);
//! }
//! ```

mod bounds;
mod options;
mod placement;
mod sizing;

pub use bounds::Bounds;
pub use options::{LayoutOptions, TextSizeTable};
pub use placement::{place, Placement};
pub use sizing::{compute_sizes, size_tree, NodeSizes, SizeTable, SizedTree};

pub use boxtree_core::LayoutError;
