//! Property-based invariant tests for the sizing and placement passes.
//!
//! For arbitrary trees with mixed directions and category sizes:
//!
//! 1. Total size covers text size.
//! 2. Leaves have identical text, node and total sizes.
//! 3. A direction switch makes the node size equal the total size.
//! 4. Sibling footprints never overlap.
//! 5. Every box and every child footprint lies inside its parent's footprint.
//! 6. Boxes are centered across their footprint.
//! 7. Sizing is idempotent.

use boxtree_core::{BoxTree, Direction, NodeId, Size};
use boxtree_layout::{compute_sizes, size_tree, LayoutOptions, Placement, TextSizeTable};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const CATEGORIES: [&str; 4] = ["mg", "fieldsplit", "jacobi", "ilu"];

#[derive(Debug, Clone)]
struct TreeShape {
    /// (parent choice, category index, east-growing)
    nodes: Vec<(usize, usize, bool)>,
    /// Text size per category, integral so sums stay exact
    sizes: Vec<(u16, u16)>,
}

fn tree_strategy() -> impl Strategy<Value = TreeShape> {
    (
        prop::collection::vec((any::<usize>(), 0..CATEGORIES.len(), any::<bool>()), 1..40),
        prop::collection::vec((1u16..=200, 1u16..=80), CATEGORIES.len()),
    )
        .prop_map(|(nodes, sizes)| TreeShape { nodes, sizes })
}

fn direction(east: bool) -> Direction {
    if east {
        Direction::EastWest
    } else {
        Direction::NorthSouth
    }
}

fn build(shape: &TreeShape) -> (BoxTree, LayoutOptions) {
    let (_, category, east) = shape.nodes[0];
    let mut tree = BoxTree::with_root(CATEGORIES[category], direction(east));
    let mut ids = vec![tree.root()];

    for (i, &(parent, category, east)) in shape.nodes.iter().enumerate().skip(1) {
        let parent = ids[parent % i];
        let id = tree
            .add_child(parent, CATEGORIES[category], direction(east))
            .expect("parent exists");
        ids.push(id);
    }

    let mut table = TextSizeTable::uniform(Size::new(1.0, 1.0));
    for (category, &(w, h)) in CATEGORIES.iter().zip(&shape.sizes) {
        table = table.with_category(*category, Size::new(w as f64, h as f64));
    }

    (tree, LayoutOptions::default().with_text_sizes(table))
}

fn placement(placements: &[Placement], id: NodeId) -> &Placement {
    placements.iter().find(|p| p.id == id).expect("every node is placed")
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ═════════════════════════════════════════════════════════════════════════
// Sizing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn total_covers_text(shape in tree_strategy()) {
        let (tree, options) = build(&shape);
        let sizes = compute_sizes(&tree, &options);
        for (id, s) in sizes.iter() {
            prop_assert!(s.total.covers(&s.text), "node {} total {:?} < text {:?}", id, s.total, s.text);
        }
    }

    #[test]
    fn leaves_have_identical_sizes(shape in tree_strategy()) {
        let (tree, options) = build(&shape);
        let sizes = compute_sizes(&tree, &options);
        for node in tree.nodes().filter(|n| n.is_leaf()) {
            let s = sizes.get(node.id).unwrap();
            prop_assert_eq!(s.total, s.text);
            prop_assert_eq!(s.node, s.text);
        }
    }

    #[test]
    fn direction_switch_collapses(shape in tree_strategy()) {
        let (tree, options) = build(&shape);
        let sizes = compute_sizes(&tree, &options);
        for node in tree.nodes() {
            let s = sizes.get(node.id).unwrap();
            match tree.parent_direction(node.id) {
                Some(parent) if parent != node.direction => prop_assert_eq!(s.node, s.total),
                _ => prop_assert_eq!(s.node, s.text),
            }
        }
    }

    #[test]
    fn sizing_is_idempotent(shape in tree_strategy()) {
        let (tree, options) = build(&shape);
        prop_assert_eq!(compute_sizes(&tree, &options), compute_sizes(&tree, &options));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Placement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sibling_footprints_do_not_overlap(shape in tree_strategy()) {
        let (tree, options) = build(&shape);
        let placements = size_tree(&tree, &options).place().unwrap();
        prop_assert_eq!(placements.len(), tree.len());

        for node in tree.nodes() {
            for (i, &a) in node.children.iter().enumerate() {
                for &b in &node.children[i + 1..] {
                    let fa = placement(&placements, a).footprint;
                    let fb = placement(&placements, b).footprint;
                    prop_assert!(fa.intersect(&fb).is_none(), "{:?} overlaps {:?}", fa, fb);
                }
            }
        }
    }

    #[test]
    fn descendants_stay_inside_footprint(shape in tree_strategy()) {
        let (tree, options) = build(&shape);
        let placements = size_tree(&tree, &options).place().unwrap();

        for node in tree.nodes() {
            let own = placement(&placements, node.id);
            prop_assert!(own.footprint.contains_bounds(&own.rect));
            for &child in &node.children {
                let child = placement(&placements, child);
                prop_assert!(own.footprint.contains_bounds(&child.footprint));
                prop_assert!(own.rect.intersect(&child.footprint).is_none());
            }
        }
    }

    #[test]
    fn boxes_are_centered_across(shape in tree_strategy()) {
        let (tree, options) = build(&shape);
        let placements = size_tree(&tree, &options).place().unwrap();

        for p in &placements {
            match p.direction {
                Direction::EastWest => {
                    prop_assert!(approx_eq(p.rect.center_y(), p.footprint.center_y()));
                    prop_assert!(approx_eq(p.rect.x, p.footprint.x));
                }
                Direction::NorthSouth => {
                    prop_assert!(approx_eq(p.rect.center_x(), p.footprint.center_x()));
                    prop_assert!(approx_eq(p.rect.y, p.footprint.y));
                }
            }
        }
    }
}
