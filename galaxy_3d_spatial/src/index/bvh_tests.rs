use glam::Vec3;
use crate::geometry::Aabb;
use crate::primitive::{IdAllocator, Item, PrimitiveSet};
use super::*;

fn world() -> Aabb {
    Aabb::new(Vec3::splat(-50.0), Vec3::splat(50.0))
}

/// `count` unit items spaced 3 apart along x
fn row(count: usize) -> Vec<Item> {
    let mut ids = IdAllocator::new();
    (0..count)
        .map(|i| Item::from_center_size(&mut ids, Vec3::new(i as f32 * 3.0, 0.0, 0.0), Vec3::ONE))
        .collect()
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_builder_defaults() {
    let builder = BvhBuilder::default();
    assert_eq!(builder.max_leaf_size, 4);
    assert!(!builder.extra_info);
    assert_eq!(BvhBuilder::new(0).max_leaf_size, 1);
}

#[test]
fn test_empty_input_uses_world_box() {
    let items: Vec<Item> = Vec::new();
    let index = BvhBuilder::default().build(&items, world());

    assert_eq!(index.node_count(), 1);
    assert_eq!(index.world_box(), world());
    assert!(index.root().primitives.is_empty());
}

#[test]
fn test_small_set_is_single_leaf() {
    let items = row(3);
    let index = BvhBuilder::new(4).build(&items, world());

    assert_eq!(index.node_count(), 1);
    assert_eq!(index.root().primitives.len(), 3);
    // Root box is the union of the items, not the world box
    assert_eq!(index.world_box().min, Vec3::new(-0.5, -0.5, -0.5));
    assert_eq!(index.world_box().max, Vec3::new(6.5, 0.5, 0.5));
}

#[test]
fn test_leaves_respect_size_and_hold_each_primitive_once() {
    let items = row(10);
    let index = BvhBuilder::new(2).build(&items, world());

    let mut seen = vec![0usize; items.len()];
    for node in index.nodes() {
        if node.is_leaf() {
            assert!(node.primitives.len() <= 2);
            for &id in &node.primitives {
                seen[id as usize] += 1;
            }
        } else {
            assert_eq!(node.child_count, 2);
            assert!(node.primitives.is_empty());
        }
    }
    assert!(seen.iter().all(|&count| count == 1));
    assert_eq!(index.primitive_reference_count(), 10);
}

#[test]
fn test_node_bounds_enclose_members() {
    let items = row(9);
    let index = BvhBuilder::new(1).build(&items, world());

    for node in index.nodes() {
        for child in node.children() {
            assert!(node.bounds.contains(&index.node(child).bounds));
            assert_eq!(index.node(child).depth, node.depth + 1);
        }
        for &id in &node.primitives {
            assert!(node.bounds.contains(&items.primitive_bounds(id)));
        }
    }
}

#[test]
fn test_median_split_is_balanced() {
    let items = row(16);
    let index = BvhBuilder::new(1).build(&items, world());

    assert_eq!(index.leaf_count(), 16);
    assert_eq!(index.node_count(), 31);
    assert_eq!(index.max_depth(), 4);
}

#[test]
fn test_coincident_centroids_stay_together() {
    let mut ids = IdAllocator::new();
    let items: Vec<Item> = (0..5)
        .map(|i| Item::from_center_size(&mut ids, Vec3::ZERO, Vec3::splat(1.0 + i as f32)))
        .collect();
    let index = BvhBuilder::new(1).build(&items, world());

    assert_eq!(index.node_count(), 1);
    assert_eq!(index.root().primitives.len(), 5);
}
