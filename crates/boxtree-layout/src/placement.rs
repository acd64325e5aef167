//! Top-down placement of sized nodes.

use boxtree_core::{BoxTree, Direction, LayoutError, NodeId, NodePath};
use glam::DVec2;
use tracing::{debug, trace};

use crate::bounds::Bounds;
use crate::sizing::SizeTable;

/// Where one node ends up.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub id: NodeId,
    pub path: NodePath,
    pub direction: Direction,
    /// Area reserved for the node and all its descendants
    pub footprint: Bounds,
    /// The node's own box, centered across its footprint
    pub rect: Bounds,
}

impl Placement {
    pub fn depth(&self) -> usize {
        self.path.depth()
    }
}

/// Assign absolute positions to every node, parents before descendants.
///
/// The root's footprint starts at `origin`. An east-growing node is centered
/// vertically in its footprint and its children start at its right edge; a
/// south-growing node is centered horizontally and its children start below
/// it. Each child's origin advances by its preceding siblings' totals.
pub fn place(tree: &BoxTree, sizes: &SizeTable, origin: DVec2) -> Result<Vec<Placement>, LayoutError> {
    let mut placements = Vec::with_capacity(tree.len());
    let mut stack = vec![(tree.root(), origin)];

    while let Some((id, origin)) = stack.pop() {
        let node = tree.node(id)?;
        let own = sizes.require(tree, id)?;

        let offset = match node.direction {
            Direction::EastWest => DVec2::new(0.0, (own.total.height - own.text.height) / 2.0),
            Direction::NorthSouth => DVec2::new((own.total.width - own.text.width) / 2.0, 0.0),
        };
        let rect = Bounds::from_origin(origin + offset, own.text);
        trace!(node = %node.path.key(tree.root_key()), x = rect.x, y = rect.y, "placed node");

        placements.push(Placement {
            id,
            path: node.path.clone(),
            direction: node.direction,
            footprint: Bounds::from_origin(origin, own.total),
            rect,
        });

        let mut elapsed = 0.0;
        let mut child_origins = Vec::with_capacity(node.children.len());
        for &child in &node.children {
            let child_total = sizes.require(tree, child)?.total;
            let child_origin = match node.direction {
                Direction::EastWest => {
                    let at = origin + DVec2::new(own.text.width, elapsed);
                    elapsed += child_total.height;
                    at
                }
                Direction::NorthSouth => {
                    let at = origin + DVec2::new(elapsed, own.text.height);
                    elapsed += child_total.width;
                    at
                }
            };
            child_origins.push((child, child_origin));
        }
        stack.extend(child_origins.into_iter().rev());
    }

    debug!(nodes = placements.len(), "placed box tree");
    Ok(placements)
}
