//! Binary bounding-volume hierarchy builder.
//!
//! Primitives are partitioned at the median centroid along the longest axis
//! of their centroid bounds. Each primitive lands in exactly one leaf, and
//! every node box is the union of its members' bounds, so node boxes may
//! overlap but never miss a member. Produces the same node arena as the
//! octree and is queried by the same engine.

use std::time::Instant;
use glam::Vec3;
use crate::geometry::Aabb;
use crate::primitive::PrimitiveSet;
use super::node::{Node, NodeId, ROOT};
use super::options::QueryOptions;
use super::spatial_index::{IndexBuilder, SpatialIndex};

const SOURCE: &str = "galaxy3d::Bvh";

/// BVH build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BvhBuilder {
    /// A node with at most this many primitives is not split
    pub max_leaf_size: usize,
    /// Queries on the built index record diagnostics by default
    pub extra_info: bool,
}

impl BvhBuilder {
    /// Builder with the given leaf size (at least 1) and no diagnostics.
    pub fn new(max_leaf_size: usize) -> Self {
        Self { max_leaf_size: max_leaf_size.max(1), extra_info: false }
    }

    /// Enable or disable default diagnostics on the built index.
    pub fn with_extra_info(mut self, extra_info: bool) -> Self {
        self.extra_info = extra_info;
        self
    }
}

impl Default for BvhBuilder {
    fn default() -> Self {
        Self::new(4)
    }
}

impl IndexBuilder for BvhBuilder {
    /// `world_box` only bounds the root of an empty set; otherwise the root
    /// box is the union of every primitive's bounds.
    fn build<'a, S: PrimitiveSet + ?Sized>(
        &self,
        primitives: &'a S,
        world_box: Aabb,
    ) -> SpatialIndex<'a, S> {
        let start = Instant::now();

        let count = primitives.primitive_count() as u32;
        let bounds: Vec<Aabb> = (0..count).map(|id| primitives.primitive_bounds(id)).collect();
        let centroids: Vec<Vec3> = bounds.iter().map(Aabb::center).collect();
        let mut ids: Vec<u32> = (0..count).collect();

        let root_bounds = union_of(&bounds, &ids).unwrap_or(world_box);
        let mut build = BvhBuild {
            bounds: &bounds,
            centroids: &centroids,
            max_leaf_size: self.max_leaf_size.max(1),
            nodes: vec![Node::leaf(root_bounds, 0, Vec::new())],
        };
        build.split(ROOT, &mut ids);

        let index = SpatialIndex::from_nodes(
            primitives,
            build.nodes,
            start.elapsed(),
            QueryOptions::from_extra_info(self.extra_info),
        );

        crate::spatial_debug!(
            SOURCE,
            "Built BVH over {} primitives: {} nodes, depth {}, {} leaves, {:.3} ms",
            count,
            index.node_count(),
            index.max_depth(),
            index.leaf_count(),
            index.build_duration_ms()
        );

        index
    }
}

/// Union of the bounds of `ids`, `None` when empty.
fn union_of(bounds: &[Aabb], ids: &[u32]) -> Option<Aabb> {
    ids.iter()
        .map(|&id| bounds[id as usize])
        .reduce(|acc, b| acc.union(&b))
}

struct BvhBuild<'b> {
    bounds: &'b [Aabb],
    centroids: &'b [Vec3],
    max_leaf_size: usize,
    nodes: Vec<Node>,
}

impl BvhBuild<'_> {
    /// Make `node_id` own `ids`, splitting it in two when it is too large.
    fn split(&mut self, node_id: NodeId, ids: &mut [u32]) {
        if ids.len() <= self.max_leaf_size {
            self.nodes[node_id as usize].primitives = ids.to_vec();
            return;
        }

        let centroids = self.centroids;
        let spread = Aabb::from_points(ids.iter().map(|&id| centroids[id as usize]));
        let size = spread.size();
        let axis = if size.x >= size.y && size.x >= size.z {
            0
        } else if size.y >= size.z {
            1
        } else {
            2
        };

        // All centroids coincide: no axis separates them
        if size[axis] <= 0.0 {
            crate::spatial_trace!(
                SOURCE,
                "node {} kept as leaf: {} primitives share one centroid",
                node_id,
                ids.len()
            );
            self.nodes[node_id as usize].primitives = ids.to_vec();
            return;
        }

        let mid = ids.len() / 2;
        ids.select_nth_unstable_by(mid, |&a, &b| {
            centroids[a as usize][axis].total_cmp(&centroids[b as usize][axis])
        });
        let (left, right) = ids.split_at_mut(mid);

        let depth = self.nodes[node_id as usize].depth + 1;
        let first_child = self.nodes.len() as NodeId;
        for half in [&*left, &*right] {
            let half_bounds = union_of(self.bounds, half).unwrap_or(Aabb::ZERO);
            self.nodes.push(Node::leaf(half_bounds, depth, Vec::new()));
        }

        let parent = &mut self.nodes[node_id as usize];
        parent.first_child = first_child;
        parent.child_count = 2;

        self.split(first_child, left);
        self.split(first_child + 1, right);
    }
}

#[cfg(test)]
#[path = "bvh_tests.rs"]
mod tests;
