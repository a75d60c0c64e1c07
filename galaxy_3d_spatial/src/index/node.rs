//! Arena node of a spatial index.

use std::ops::Range;
use crate::geometry::Aabb;

/// Index of a node in its index's flat node array
pub type NodeId = u32;

/// Index of the root node in the flat node array.
pub const ROOT: NodeId = 0;

/// A single node in the flat node array.
///
/// Children are stored contiguously starting at `first_child`. Since the
/// root is node 0 and never anyone's child, `first_child == 0` marks a leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// World-space box of this node (the cell for an octree, the union of
    /// member bounds for a BVH)
    pub bounds: Aabb,
    /// Depth below the root (root = 0)
    pub depth: u32,
    /// Index of the first child in the flat array (0 = no children / leaf)
    pub first_child: NodeId,
    /// Number of children (0 for a leaf, 8 for an octree node, 2 for a BVH node)
    pub child_count: u32,
    /// Primitive ids; only non-empty at leaves
    pub primitives: Vec<u32>,
}

impl Node {
    /// New leaf node.
    pub fn leaf(bounds: Aabb, depth: u32, primitives: Vec<u32>) -> Self {
        Self { bounds, depth, first_child: 0, child_count: 0, primitives }
    }

    pub fn is_leaf(&self) -> bool {
        self.first_child == 0
    }

    /// Ids of this node's children (empty for a leaf).
    pub fn children(&self) -> Range<NodeId> {
        if self.is_leaf() {
            0..0
        } else {
            self.first_child..self.first_child + self.child_count
        }
    }
}
