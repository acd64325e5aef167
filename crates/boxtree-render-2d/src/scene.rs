//! Scene building from sized box trees.

use boxtree_core::{types::Color, BoxTree, RenderError};
use boxtree_layout::{place, Placement, SizeTable, SizedTree};
use glam::DVec2;
use tracing::debug;

use crate::primitives::{LabelPrimitive, RectPrimitive, Scene, Stroke};

/// Styling applied to every node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderOptions {
    /// Box fill
    pub fill: Color,
    /// Box outline
    pub stroke: Stroke,
    /// Label text color
    pub label_color: Color,
    /// Label baseline position relative to the box's top-left corner
    pub label_offset: DVec2,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fill: Color::BLUE,
            stroke: Stroke::new(Color::BLACK, 2.0),
            label_color: Color::BLACK,
            label_offset: DVec2::new(2.0, 14.0),
        }
    }
}

impl RenderOptions {
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Stroke::new(color, width);
        self
    }

    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    pub fn with_label_offset(mut self, x: f64, y: f64) -> Self {
        self.label_offset = DVec2::new(x, y);
        self
    }
}

/// Emit the draw commands for a sized tree.
pub fn render(sized: &SizedTree<'_>, options: &RenderOptions) -> Result<Scene, RenderError> {
    let placements = sized.place()?;
    Ok(build_scene(sized.tree(), &placements, options))
}

/// Emit the draw commands for a tree using an externally computed size table.
///
/// Fails with [`LayoutError::MissingSize`](boxtree_core::LayoutError::MissingSize)
/// when any node lacks sizes; nothing is drawn in that case.
pub fn render_with_sizes(
    tree: &BoxTree,
    sizes: &SizeTable,
    origin: DVec2,
    options: &RenderOptions,
) -> Result<Scene, RenderError> {
    let placements = place(tree, sizes, origin)?;
    Ok(build_scene(tree, &placements, options))
}

fn build_scene(tree: &BoxTree, placements: &[Placement], options: &RenderOptions) -> Scene {
    let mut scene = placements
        .first()
        .map(|root| {
            let footprint = root.footprint;
            Scene::new(footprint.width, footprint.height).with_origin(footprint.x, footprint.y)
        })
        .unwrap_or_default();
    let mut builder = SceneBuilder {
        scene: &mut scene,
        tree,
        options,
    };
    for placement in placements {
        builder.build_node(placement);
    }

    debug!(nodes = placements.len(), commands = scene.len(), "built scene");
    scene
}

struct SceneBuilder<'a> {
    scene: &'a mut Scene,
    tree: &'a BoxTree,
    options: &'a RenderOptions,
}

impl<'a> SceneBuilder<'a> {
    fn build_node(&mut self, placement: &Placement) {
        let rect = placement.rect;
        self.scene.rect(
            RectPrimitive::new(rect.x, rect.y, rect.width, rect.height)
                .with_fill(self.options.fill)
                .with_stroke(self.options.stroke),
        );

        let text = self
            .tree
            .get(placement.id)
            .map(|node| node.label.clone())
            .unwrap_or_else(|| placement.path.key(self.tree.root_key()));
        let anchor = rect.position() + self.options.label_offset;
        self.scene
            .label(LabelPrimitive::new(anchor.x, anchor.y, text).with_color(self.options.label_color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::DrawCommand;
    use boxtree_core::{Direction, LayoutError};
    use boxtree_layout::{compute_sizes, size_tree, LayoutOptions};

    #[test]
    fn test_single_leaf_scene() {
        let tree = BoxTree::with_root("mg", Direction::EastWest);
        let sized = size_tree(&tree, &LayoutOptions::default());
        let scene = render(&sized, &RenderOptions::default()).unwrap();

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.width, 100.0);
        assert_eq!(scene.height, 30.0);
        assert_eq!(
            scene.commands[0],
            DrawCommand::Rect(RectPrimitive::new(0.0, 0.0, 100.0, 30.0))
        );
        assert_eq!(
            scene.commands[1],
            DrawCommand::Label(LabelPrimitive::new(2.0, 14.0, "root"))
        );
    }

    #[test]
    fn test_parent_painted_before_children() {
        let mut tree = BoxTree::with_root("mg", Direction::EastWest);
        let root = tree.root();
        tree.add_child(root, "mg", Direction::EastWest).unwrap();
        tree.add_child(root, "mg", Direction::EastWest).unwrap();

        let sized = size_tree(&tree, &LayoutOptions::default());
        let scene = render(&sized, &RenderOptions::default()).unwrap();

        let labels: Vec<_> = scene.labels().map(|l| l.text.as_str()).collect();
        assert_eq!(labels, vec!["root", "root_0", "root_1"]);

        let ys: Vec<_> = scene.rects().map(|r| (r.x, r.y)).collect();
        assert_eq!(ys, vec![(0.0, 15.0), (100.0, 0.0), (100.0, 30.0)]);
        assert_eq!((scene.width, scene.height), (200.0, 60.0));
    }

    #[test]
    fn test_custom_style() {
        let mut tree = BoxTree::with_root("mg", Direction::EastWest);
        tree.set_label(tree.root(), "multigrid").unwrap();

        let options = RenderOptions::default()
            .with_fill(Color::WHITE)
            .with_stroke(Color::BLUE, 1.0)
            .with_label_offset(4.0, 20.0);
        let sized = size_tree(&tree, &LayoutOptions::default().with_origin(10.0, 10.0));
        let scene = render(&sized, &options).unwrap();

        let rect = scene.rects().next().unwrap();
        assert_eq!(rect.fill, Color::WHITE);
        assert_eq!(rect.stroke, Stroke::new(Color::BLUE, 1.0));

        let label = scene.labels().next().unwrap();
        assert_eq!((label.x, label.y), (14.0, 30.0));
        assert_eq!(label.text, "multigrid");
        assert_eq!((scene.x, scene.y), (10.0, 10.0));
        assert_eq!((scene.width, scene.height), (100.0, 30.0));
    }

    #[test]
    fn test_negative_origin_moves_scene_bounds() {
        let mut tree = BoxTree::with_root("mg", Direction::EastWest);
        tree.add_child(tree.root(), "mg", Direction::EastWest).unwrap();

        let sized = size_tree(&tree, &LayoutOptions::default().with_origin(-50.0, -20.0));
        let scene = render(&sized, &RenderOptions::default()).unwrap();

        assert_eq!((scene.x, scene.y), (-50.0, -20.0));
        assert_eq!((scene.width, scene.height), (200.0, 30.0));
        let first = scene.rects().next().unwrap();
        assert_eq!((first.x, first.y), (-50.0, -20.0));
    }

    #[test]
    fn test_missing_sizes_render_nothing() {
        let mut tree = BoxTree::with_root("fieldsplit", Direction::NorthSouth);
        let child = tree.add_child(tree.root(), "mg", Direction::EastWest).unwrap();

        let mut sizes = compute_sizes(&tree, &LayoutOptions::default());
        sizes.remove(child);

        let err = render_with_sizes(&tree, &sizes, DVec2::ZERO, &RenderOptions::default()).unwrap_err();
        match err {
            RenderError::Layout(LayoutError::MissingSize { path }) => assert_eq!(path, "root_0"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
