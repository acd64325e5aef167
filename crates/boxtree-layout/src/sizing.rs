//! Bottom-up size computation.
//!
//! Every node gets three sizes:
//! - `text`: its own box, looked up from its category
//! - `total`: its box plus all descendants laid out in its own direction
//! - `node`: what its parent reserves for it; `text`, or `total` when the
//!   node's direction differs from its parent's
//!
//! A node's sizes depend only on its text size, its own and its parent's
//! direction, and its children's totals.

use boxtree_core::{BoxTree, Direction, LayoutError, NodeId, Size};
use glam::DVec2;
use tracing::{debug, trace};

use crate::options::LayoutOptions;
use crate::placement::{place, Placement};

/// The three sizes of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSizes {
    /// Intrinsic box size
    pub text: Size,
    /// Footprint presented to the parent
    pub node: Size,
    /// Box plus all descendants
    pub total: Size,
}

impl NodeSizes {
    /// Sizes of a node without children.
    pub fn leaf(text: Size) -> Self {
        Self { text, node: text, total: text }
    }

    /// Sizes of a node given its children's totals.
    pub fn compute(
        text: Size,
        direction: Direction,
        parent_direction: Option<Direction>,
        child_totals: impl IntoIterator<Item = Size>,
    ) -> Self {
        let Some(aggregate) = aggregate_children(direction, child_totals) else {
            return Self::leaf(text);
        };

        let total = combine(direction, text, aggregate);
        let node = match parent_direction {
            Some(parent) if parent != direction => total,
            _ => text,
        };

        Self { text, node, total }
    }

    /// True when the parent reserves the whole subtree for this node.
    pub fn is_collapsed(&self) -> bool {
        self.node == self.total && self.total != self.text
    }
}

/// Stack children's totals along the direction they are placed in.
///
/// East-growing nodes stack children vertically; south-growing nodes stack
/// them horizontally. Returns `None` when there are no children.
fn aggregate_children(direction: Direction, child_totals: impl IntoIterator<Item = Size>) -> Option<Size> {
    let mut totals = child_totals.into_iter().peekable();
    totals.peek()?;

    let aggregate = totals.fold(Size::ZERO, |acc, child| match direction {
        Direction::EastWest => Size::new(acc.width.max(child.width), acc.height + child.height),
        Direction::NorthSouth => Size::new(acc.width + child.width, acc.height.max(child.height)),
    });
    Some(aggregate)
}

/// Put the node's own box beside (east) or above (south) its children.
fn combine(direction: Direction, text: Size, aggregate: Size) -> Size {
    match direction {
        Direction::EastWest => Size::new(text.width + aggregate.width, text.height.max(aggregate.height)),
        Direction::NorthSouth => Size::new(text.width.max(aggregate.width), text.height + aggregate.height),
    }
}

/// Sizes for every node of one tree, indexed by [`NodeId`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeTable {
    sizes: Vec<Option<NodeSizes>>,
}

impl SizeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the sizes of a node.
    pub fn insert(&mut self, id: NodeId, sizes: NodeSizes) {
        if self.sizes.len() <= id.index() {
            self.sizes.resize(id.index() + 1, None);
        }
        self.sizes[id.index()] = Some(sizes);
    }

    /// Forget the sizes of a node.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeSizes> {
        self.sizes.get_mut(id.index()).and_then(Option::take)
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeSizes> {
        self.sizes.get(id.index()).and_then(Option::as_ref)
    }

    /// Sizes of a node of `tree`, failing with the node's key when absent.
    pub fn require(&self, tree: &BoxTree, id: NodeId) -> Result<NodeSizes, LayoutError> {
        self.get(id).copied().ok_or_else(|| LayoutError::MissingSize {
            path: tree.key(id).unwrap_or_else(|| id.to_string()),
        })
    }

    /// Number of nodes with sizes.
    pub fn len(&self) -> usize {
        self.sizes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over sized nodes in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeSizes)> {
        self.sizes
            .iter()
            .enumerate()
            .filter_map(|(index, sizes)| sizes.as_ref().map(|s| (NodeId(index), s)))
    }
}

/// Compute the sizes of every node in the tree.
///
/// Children always carry larger IDs than their parent, so walking IDs in
/// reverse visits every child before its parent.
pub fn compute_sizes(tree: &BoxTree, options: &LayoutOptions) -> SizeTable {
    let mut table = SizeTable {
        sizes: vec![None; tree.len()],
    };

    for node in tree.nodes().rev() {
        let text = options.text_sizes.text_size(&node.category);
        let child_totals = node
            .children
            .iter()
            .filter_map(|child| table.get(*child))
            .map(|sizes| sizes.total);

        let sizes = NodeSizes::compute(text, node.direction, tree.parent_direction(node.id), child_totals);
        trace!(node = %node.path.key(tree.root_key()), ?sizes, "sized node");
        table.insert(node.id, sizes);
    }

    if let Some(root) = table.get(tree.root()) {
        debug!(nodes = tree.len(), width = root.total.width, height = root.total.height, "computed box sizes");
    }

    table
}

/// Run the sizing pass, producing a tree that is ready to place.
pub fn size_tree<'a>(tree: &'a BoxTree, options: &LayoutOptions) -> SizedTree<'a> {
    SizedTree {
        tree,
        sizes: compute_sizes(tree, options),
        origin: options.origin,
    }
}

/// A tree whose sizes are fully computed.
#[derive(Debug, Clone)]
pub struct SizedTree<'a> {
    tree: &'a BoxTree,
    sizes: SizeTable,
    origin: DVec2,
}

impl<'a> SizedTree<'a> {
    pub fn tree(&self) -> &'a BoxTree {
        self.tree
    }

    pub fn sizes(&self) -> &SizeTable {
        &self.sizes
    }

    /// Top-left corner of the root's footprint.
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeSizes> {
        self.sizes.get(id)
    }

    /// Total extent of the whole drawing.
    pub fn extent(&self) -> Size {
        self.sizes
            .get(self.tree.root())
            .map(|sizes| sizes.total)
            .unwrap_or_default()
    }

    /// Run the placement pass from this tree's origin.
    pub fn place(&self) -> Result<Vec<Placement>, LayoutError> {
        place(self.tree, &self.sizes, self.origin)
    }
}
