//! Octree builder: recursive 8-way subdivision with duplication.
//!
//! Each node's box is split at its center into the 8 octants (bit0 = X,
//! bit1 = Y, bit2 = Z, 0 = low). A primitive goes into every child it
//! overlaps, so a straddling primitive is duplicated across siblings rather
//! than kept in the parent; only leaves own primitives.
//!
//! A node stays a leaf when any of these holds:
//! - it owns fewer than `split_threshold` primitives;
//! - one of its box dimensions is below [`MIN_CELL_SIZE`];
//! - it sits at [`MAX_DEPTH`];
//! - splitting makes no progress: two or more children would own the whole
//!   parent set unchanged.

use std::time::Instant;
use crate::geometry::Aabb;
use crate::primitive::PrimitiveSet;
use super::node::{Node, NodeId, ROOT};
use super::options::QueryOptions;
use super::spatial_index::{IndexBuilder, SpatialIndex};

const SOURCE: &str = "galaxy3d::Octree";

/// Smallest box dimension a node may be split at.
pub const MIN_CELL_SIZE: f32 = 0.0005;

/// Deepest level a node may reach (root = 0).
pub const MAX_DEPTH: u32 = 10;

/// Children owning the whole parent set at which a split is abandoned.
const NO_PROGRESS_CHILDREN: usize = 2;

/// Octree build configuration.
///
/// # Example
///
/// ```ignore
/// let index = OctreeBuilder::new(3).with_extra_info(true).build(&items, world_box);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctreeBuilder {
    /// A node with fewer primitives than this is not split
    pub split_threshold: usize,
    /// Queries on the built index record diagnostics by default
    pub extra_info: bool,
}

impl OctreeBuilder {
    /// Builder with the given split threshold and no diagnostics.
    pub fn new(split_threshold: usize) -> Self {
        Self { split_threshold, extra_info: false }
    }

    /// Enable or disable default diagnostics on the built index.
    pub fn with_extra_info(mut self, extra_info: bool) -> Self {
        self.extra_info = extra_info;
        self
    }
}

impl Default for OctreeBuilder {
    fn default() -> Self {
        Self::new(3)
    }
}

impl IndexBuilder for OctreeBuilder {
    fn build<'a, S: PrimitiveSet + ?Sized>(
        &self,
        primitives: &'a S,
        world_box: Aabb,
    ) -> SpatialIndex<'a, S> {
        let start = Instant::now();

        let count = primitives.primitive_count() as u32;
        let outside = (0..count)
            .filter(|&id| !primitives.overlaps_cell(id, &world_box))
            .count();
        if outside > 0 {
            crate::spatial_warn!(
                SOURCE,
                "{} of {} primitives lie outside the world box {:?}",
                outside,
                count,
                world_box.to_array()
            );
        }

        let mut build = OctreeBuild {
            primitives,
            split_threshold: self.split_threshold,
            nodes: vec![Node::leaf(world_box, 0, (0..count).collect())],
        };
        build.subdivide(ROOT);

        let index = SpatialIndex::from_nodes(
            primitives,
            build.nodes,
            start.elapsed(),
            QueryOptions::from_extra_info(self.extra_info),
        );

        crate::spatial_debug!(
            SOURCE,
            "Built octree over {} primitives: {} nodes, depth {}, {} leaves, {} references, {:.3} ms",
            count,
            index.node_count(),
            index.max_depth(),
            index.leaf_count(),
            index.primitive_reference_count(),
            index.build_duration_ms()
        );

        index
    }
}

/// Transient state of one build
struct OctreeBuild<'s, S: ?Sized> {
    primitives: &'s S,
    split_threshold: usize,
    nodes: Vec<Node>,
}

impl<'s, S: PrimitiveSet + ?Sized> OctreeBuild<'s, S> {
    /// Split `node_id` if it qualifies, then recurse into the new children.
    fn subdivide(&mut self, node_id: NodeId) {
        let node = &self.nodes[node_id as usize];
        let bounds = node.bounds;
        let depth = node.depth;
        let parent_count = node.primitives.len();

        if parent_count < self.split_threshold {
            return;
        }
        if bounds.min_dimension() < MIN_CELL_SIZE {
            crate::spatial_trace!(
                SOURCE,
                "node {} kept as leaf: cell size {} below minimum ({} primitives)",
                node_id,
                bounds.min_dimension(),
                parent_count
            );
            return;
        }
        if depth >= MAX_DEPTH {
            crate::spatial_trace!(
                SOURCE,
                "node {} kept as leaf: maximum depth reached ({} primitives)",
                node_id,
                parent_count
            );
            return;
        }

        let primitives = self.primitives;
        let children: [Vec<u32>; 8] = std::array::from_fn(|octant| {
            let cell = bounds.octant(octant as u8);
            node.primitives
                .iter()
                .copied()
                .filter(|&id| primitives.overlaps_cell(id, &cell))
                .collect()
        });

        // Children hold subsets of the parent list, so equal length means equal set
        let unchanged = children.iter().filter(|ids| ids.len() == parent_count).count();
        if unchanged >= NO_PROGRESS_CHILDREN {
            crate::spatial_trace!(
                SOURCE,
                "node {} kept as leaf: no progress ({} of 8 children own all {} primitives)",
                node_id,
                unchanged,
                parent_count
            );
            return;
        }

        let first_child = self.nodes.len() as NodeId;
        for (octant, ids) in children.into_iter().enumerate() {
            self.nodes.push(Node::leaf(bounds.octant(octant as u8), depth + 1, ids));
        }

        let parent = &mut self.nodes[node_id as usize];
        parent.first_child = first_child;
        parent.child_count = 8;
        parent.primitives = Vec::new();

        for child in first_child..first_child + 8 {
            self.subdivide(child);
        }
    }
}

#[cfg(test)]
#[path = "octree_tests.rs"]
mod tests;
