//! Export formats for box tree drawings.
//!
//! Supported formats:
//! - SVG document (standalone file)
//! - SVG fragment (inline element strings for embedding in a host page)

#[cfg(feature = "svg")]
pub mod svg;

use boxtree_core::{BoxTree, BoxTreeError, ExportError};
use boxtree_layout::{size_tree, LayoutOptions};
use boxtree_render_2d::{render, RenderOptions, Scene};

/// Export a scene as a standalone SVG document.
#[cfg(feature = "svg")]
pub fn export_svg(scene: &Scene) -> Result<String, ExportError> {
    svg::export(scene)
}

/// Export a scene as concatenated inline SVG elements.
#[cfg(feature = "svg")]
pub fn export_svg_fragment(scene: &Scene) -> Result<String, ExportError> {
    svg::export_fragment(scene)
}

/// Size, place, render and serialize a tree in one go.
#[cfg(feature = "svg")]
pub fn tree_to_svg(
    tree: &BoxTree,
    layout: &LayoutOptions,
    style: &RenderOptions,
) -> Result<String, BoxTreeError> {
    let sized = size_tree(tree, layout);
    let scene = render(&sized, style)?;
    tracing::debug!(nodes = tree.len(), width = scene.width, height = scene.height, "exporting svg");
    Ok(svg::export(&scene)?)
}
