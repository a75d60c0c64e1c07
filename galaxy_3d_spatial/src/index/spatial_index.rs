//! Immutable tree built over a primitive set.
//!
//! An index has two states: being built (inside a builder) and built. Once
//! returned by a builder it is never mutated; a changed scene is handled by
//! building a new index and dropping the old one.

use std::time::Duration;
use crate::geometry::Aabb;
use crate::primitive::PrimitiveSet;
use super::node::{Node, NodeId, ROOT};
use super::options::QueryOptions;

/// Builds a [`SpatialIndex`] over a primitive set.
///
/// Implemented by the octree and BVH builders, so callers can swap the
/// structure without touching query code.
pub trait IndexBuilder {
    /// Build an index over `primitives` covering `world_box`.
    fn build<'a, S: PrimitiveSet + ?Sized>(
        &self,
        primitives: &'a S,
        world_box: Aabb,
    ) -> SpatialIndex<'a, S>;
}

/// Counters gathered by one full traversal after a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Nodes reachable from the root
    pub node_count: usize,
    /// Deepest node depth (root = 0)
    pub max_depth: u32,
    /// Leaves reachable from the root
    pub leaf_count: usize,
    /// Sum of leaf list lengths; exceeds the primitive count when
    /// straddling primitives are duplicated across leaves
    pub primitive_reference_count: usize,
}

/// Built spatial index.
///
/// Borrows its primitive set for its whole lifetime: the ids stored in the
/// leaves are positions in that set.
#[derive(Debug)]
pub struct SpatialIndex<'a, S: PrimitiveSet + ?Sized> {
    pub(crate) primitives: &'a S,
    pub(crate) nodes: Vec<Node>,
    stats: IndexStats,
    build_duration: Duration,
    default_options: QueryOptions,
}

impl<'a, S: PrimitiveSet + ?Sized> SpatialIndex<'a, S> {
    /// Wrap a finished node arena. Runs the counting traversal.
    pub(crate) fn from_nodes(
        primitives: &'a S,
        nodes: Vec<Node>,
        build_duration: Duration,
        default_options: QueryOptions,
    ) -> Self {
        let mut stats = IndexStats::default();
        count_subtree(&nodes, ROOT, &mut stats);
        debug_assert_eq!(stats.node_count, nodes.len(), "unreachable nodes in arena");

        Self { primitives, nodes, stats, build_duration, default_options }
    }

    /// Primitive set this index was built over.
    pub fn primitives(&self) -> &'a S {
        self.primitives
    }

    /// Root node.
    pub fn root(&self) -> &Node {
        &self.nodes[ROOT as usize]
    }

    /// Node by id.
    ///
    /// # Panics
    ///
    /// If `id` is not a node of this index.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    /// All nodes, in arena order (root first).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Root box.
    pub fn world_box(&self) -> Aabb {
        self.root().bounds
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    pub fn node_count(&self) -> usize {
        self.stats.node_count
    }

    /// Deepest node depth (root = 0).
    pub fn max_depth(&self) -> u32 {
        self.stats.max_depth
    }

    pub fn leaf_count(&self) -> usize {
        self.stats.leaf_count
    }

    /// Total leaf memberships (duplicates included).
    pub fn primitive_reference_count(&self) -> usize {
        self.stats.primitive_reference_count
    }

    /// Wall-clock time the build took.
    pub fn build_duration(&self) -> Duration {
        self.build_duration
    }

    /// Build time in milliseconds.
    pub fn build_duration_ms(&self) -> f64 {
        self.build_duration.as_secs_f64() * 1000.0
    }

    /// Options used by queries that do not pass their own.
    pub fn default_options(&self) -> QueryOptions {
        self.default_options
    }
}

fn count_subtree(nodes: &[Node], id: NodeId, stats: &mut IndexStats) {
    let node = &nodes[id as usize];
    stats.node_count += 1;
    stats.max_depth = stats.max_depth.max(node.depth);
    if node.is_leaf() {
        stats.leaf_count += 1;
        stats.primitive_reference_count += node.primitives.len();
        return;
    }
    for child in node.children() {
        count_subtree(nodes, child, stats);
    }
}
