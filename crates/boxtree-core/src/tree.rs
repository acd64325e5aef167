//! Box tree data structures.
//!
//! Nodes live in an arena owned by [`BoxTree`]. A child is always inserted
//! after its parent, so every child's [`NodeId`] is larger than its parent's.
//! Passes that need children before parents can walk ids in reverse.

use crate::errors::TreeError;
use crate::path::NodePath;
use crate::types::{Direction, NodeId};

/// Root name used when rendering path keys.
pub const DEFAULT_ROOT_KEY: &str = "root";

/// A node in the box tree.
#[derive(Debug, Clone)]
pub struct BoxNode {
    /// Arena ID for this node
    pub id: NodeId,
    /// Child indices from the root
    pub path: NodePath,
    /// Content tag; selects the text size
    pub category: String,
    /// Where this node places its children
    pub direction: Direction,
    /// Text drawn inside the node's box
    pub label: String,
    /// Parent node ID (None for root)
    pub parent: Option<NodeId>,
    /// Child node IDs, in layout order
    pub children: Vec<NodeId>,
}

impl BoxNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.path.depth()
    }
}

/// A rooted, ordered tree of boxes.
#[derive(Debug, Clone)]
pub struct BoxTree {
    /// All nodes, indexed by ID
    nodes: Vec<BoxNode>,
    /// Name of the root in path keys
    root_key: String,
}

impl BoxTree {
    /// Create a tree holding a single root node.
    pub fn with_root(category: impl Into<String>, direction: Direction) -> Self {
        Self::with_root_key(DEFAULT_ROOT_KEY, category, direction)
    }

    /// Create a tree whose path keys start with `root_key`.
    pub fn with_root_key(
        root_key: impl Into<String>,
        category: impl Into<String>,
        direction: Direction,
    ) -> Self {
        let root_key = root_key.into();
        let root = BoxNode {
            id: NodeId(0),
            path: NodePath::root(),
            category: category.into(),
            direction,
            label: root_key.clone(),
            parent: None,
            children: Vec::new(),
        };
        Self { nodes: vec![root], root_key }
    }

    /// Append a child to `parent`, returning its ID.
    ///
    /// The child's label defaults to its path key.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        category: impl Into<String>,
        direction: Direction,
    ) -> Result<NodeId, TreeError> {
        let id = NodeId(self.nodes.len());
        let parent_node = self
            .nodes
            .get_mut(parent.index())
            .ok_or(TreeError::UnknownNode { id: parent })?;

        let path = parent_node.path.child(parent_node.children.len() as u32);
        parent_node.children.push(id);

        let label = path.key(&self.root_key);
        self.nodes.push(BoxNode {
            id,
            path,
            category: category.into(),
            direction,
            label,
            parent: Some(parent),
            children: Vec::new(),
        });

        Ok(id)
    }

    /// Replace the label drawn for a node.
    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), TreeError> {
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or(TreeError::UnknownNode { id })?;
        node.label = label.into();
        Ok(())
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root_key(&self) -> &str {
        &self.root_key
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&BoxNode> {
        self.nodes.get(id.index())
    }

    /// Get a node by ID, failing with [`TreeError::UnknownNode`].
    pub fn node(&self, id: NodeId) -> Result<&BoxNode, TreeError> {
        self.get(id).ok_or(TreeError::UnknownNode { id })
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all nodes in ID order.
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = &BoxNode> + ExactSizeIterator {
        self.nodes.iter()
    }

    /// Get children of a node.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &BoxNode> {
        self.nodes
            .get(id.index())
            .into_iter()
            .flat_map(|n| n.children.iter())
            .filter_map(|child| self.nodes.get(child.index()))
    }

    /// Direction of the node's parent, `None` at the root.
    pub fn parent_direction(&self, id: NodeId) -> Option<Direction> {
        let parent = self.get(id)?.parent?;
        self.get(parent).map(|p| p.direction)
    }

    /// Rendered path key of a node.
    pub fn key(&self, id: NodeId) -> Option<String> {
        self.get(id).map(|n| n.path.key(&self.root_key))
    }

    /// Look a node up by path.
    pub fn find(&self, path: &NodePath) -> Option<NodeId> {
        let mut current = self.root();
        for &segment in path.segments() {
            current = *self.get(current)?.children.get(segment as usize)?;
        }
        Some(current)
    }

    /// Look a node up by its textual key.
    pub fn find_key(&self, key: &str) -> Result<NodeId, TreeError> {
        let path = NodePath::parse(key, &self.root_key)?;
        self.find(&path)
            .ok_or_else(|| TreeError::InvalidKey { key: key.to_string() })
    }

    /// Node IDs in depth-first pre-order (parent before its descendants).
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(node) = self.get(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (BoxTree, NodeId, NodeId, NodeId) {
        let mut tree = BoxTree::with_root("fieldsplit", Direction::NorthSouth);
        let root = tree.root();
        let a = tree.add_child(root, "mg", Direction::EastWest).unwrap();
        let b = tree.add_child(root, "jacobi", Direction::NorthSouth).unwrap();
        let a0 = tree.add_child(a, "sor", Direction::NorthSouth).unwrap();
        (tree, a, b, a0)
    }

    #[test]
    fn test_paths_and_labels() {
        let (tree, a, b, a0) = sample();
        assert_eq!(tree.key(a).unwrap(), "root_0");
        assert_eq!(tree.key(b).unwrap(), "root_1");
        assert_eq!(tree.get(a0).unwrap().label, "root_0_0");
        assert_eq!(tree.get(tree.root()).unwrap().label, "root");
        assert_eq!(tree.get(a0).unwrap().depth(), 2);
    }

    #[test]
    fn test_children_have_larger_ids() {
        let (tree, ..) = sample();
        for node in tree.nodes() {
            for child in &node.children {
                assert!(*child > node.id);
            }
        }
    }

    #[test]
    fn test_pre_order_is_depth_first() {
        let (tree, a, b, a0) = sample();
        assert_eq!(tree.pre_order(), vec![tree.root(), a, a0, b]);
    }

    #[test]
    fn test_find() {
        let (tree, _, b, a0) = sample();
        assert_eq!(tree.find_key("root_0_0").unwrap(), a0);
        assert_eq!(tree.find(&NodePath::root().child(1)), Some(b));
        assert!(tree.find_key("root_2").is_err());
    }

    #[test]
    fn test_parent_direction() {
        let (tree, a, _, a0) = sample();
        assert_eq!(tree.parent_direction(tree.root()), None);
        assert_eq!(tree.parent_direction(a), Some(Direction::NorthSouth));
        assert_eq!(tree.parent_direction(a0), Some(Direction::EastWest));
    }

    #[test]
    fn test_unknown_parent() {
        let (mut tree, ..) = sample();
        let err = tree.add_child(NodeId(99), "mg", Direction::EastWest).unwrap_err();
        assert!(matches!(err, TreeError::UnknownNode { id: NodeId(99) }));
    }
}
