//! Range, frustum and ray queries over a built index.
//!
//! All three share one traversal: depth-first, pre-order from the root.
//! A node whose box fails the query's node test prunes its subtree; a leaf
//! that passes has every primitive tested with the exact predicate. Every
//! child of a passing internal node is visited, in arena order.
//!
//! Range and frustum hits are deduplicated by primitive id, since a
//! straddling primitive may sit in several leaves. Ray queries examine
//! every reachable leaf and keep the smallest hit distance, so the closest
//! hit does not depend on traversal order.

use std::time::{Duration, Instant};
use glam::Vec3;
use rustc_hash::FxHashSet;
use crate::camera::Frustum;
use crate::geometry::{self, Aabb, Ray};
use crate::primitive::PrimitiveSet;
use super::node::{NodeId, ROOT};
use super::options::QueryOptions;
use super::spatial_index::SpatialIndex;

/// Node lists recorded by a query with diagnostics enabled.
///
/// A list whose option flag was not set stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeDiagnostics {
    /// Nodes whose box was tested, in visit order
    pub tested_nodes: Vec<NodeId>,
    /// Nodes whose box passed the test
    pub intersected_nodes: Vec<NodeId>,
    /// Leaves whose primitives were tested
    pub leaf_nodes: Vec<NodeId>,
}

/// Result of a range or frustum query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Hit primitive ids, deduplicated, in first-visit order
    pub primitives: Vec<u32>,
    /// Present only when the query requested diagnostics
    pub diagnostics: Option<NodeDiagnostics>,
    /// Exact primitive tests performed, hits or not
    pub primitive_test_count: usize,
    /// Wall-clock traversal time
    pub elapsed: Duration,
}

impl QueryResult {
    pub fn hit_count(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Traversal time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Result of a ray query.
///
/// No hit is `t == f32::INFINITY` with `face` and `final_node` both `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RayQueryResult {
    /// Closest hit distance, in units of the ray direction's length
    pub t: f32,
    /// Primitive id of the closest hit
    pub face: Option<u32>,
    /// Leaf that produced the closest hit
    pub final_node: Option<NodeId>,
    /// Present only when the query requested diagnostics
    pub diagnostics: Option<NodeDiagnostics>,
    /// Exact primitive tests performed, hits or not
    pub primitive_test_count: usize,
    /// Wall-clock traversal time
    pub elapsed: Duration,
}

impl RayQueryResult {
    pub fn is_hit(&self) -> bool {
        self.face.is_some()
    }

    /// World-space hit point on `ray` (the ray the query was run with).
    pub fn hit_point(&self, ray: &Ray) -> Option<Vec3> {
        self.face.map(|_| ray.at(self.t))
    }

    /// Traversal time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Per-query bookkeeping shared by the three query kinds
struct Traversal {
    options: QueryOptions,
    diagnostics: Option<NodeDiagnostics>,
    primitive_test_count: usize,
}

impl Traversal {
    fn new(options: QueryOptions) -> Self {
        Self {
            options,
            diagnostics: (!options.is_empty()).then(NodeDiagnostics::default),
            primitive_test_count: 0,
        }
    }

    fn record(&mut self, flag: QueryOptions, node: NodeId) {
        if !self.options.contains(flag) {
            return;
        }
        if let Some(diagnostics) = self.diagnostics.as_mut() {
            let list = if flag == QueryOptions::TESTED_NODES {
                &mut diagnostics.tested_nodes
            } else if flag == QueryOptions::INTERSECTED_NODES {
                &mut diagnostics.intersected_nodes
            } else {
                &mut diagnostics.leaf_nodes
            };
            list.push(node);
        }
    }
}

impl<'a, S: PrimitiveSet + ?Sized> SpatialIndex<'a, S> {
    // ===== RANGE =====

    /// Primitives passing the set's range test (strict Box∩Box for boxes,
    /// exact Triangle∩Box for mesh faces), with the index's default options.
    pub fn query_range(&self, range: &Aabb) -> QueryResult {
        self.query_range_with(range, self.default_options())
    }

    /// Range query with explicit diagnostic options.
    pub fn query_range_with(&self, range: &Aabb, options: QueryOptions) -> QueryResult {
        let start = Instant::now();
        let mut traversal = Traversal::new(options);
        let mut hits = HitSet::default();

        self.descend(
            ROOT,
            &mut traversal,
            // Closed: faces lying on a node boundary are reported by the exact
            // test even when the range only touches that boundary
            &|bounds: &Aabb| geometry::aabb_touches(bounds, range),
            &mut |_: NodeId, id: u32| {
                if self.primitives.overlaps_range(id, range) {
                    hits.insert(id);
                }
            },
        );

        hits.into_result(traversal, start)
    }

    // ===== FRUSTUM =====

    /// Primitives inside or straddling `frustum` (conservative Box∩Frustum),
    /// with the index's default options.
    pub fn query_frustum(&self, frustum: &Frustum) -> QueryResult {
        self.query_frustum_with(frustum, self.default_options())
    }

    /// Frustum query with explicit diagnostic options.
    pub fn query_frustum_with(&self, frustum: &Frustum, options: QueryOptions) -> QueryResult {
        let start = Instant::now();
        let mut traversal = Traversal::new(options);
        let mut hits = HitSet::default();
        let planes = &frustum.planes;

        self.descend(
            ROOT,
            &mut traversal,
            &|bounds: &Aabb| geometry::aabb_frustum(bounds, planes),
            &mut |_: NodeId, id: u32| {
                if self.primitives.overlaps_frustum(id, planes) {
                    hits.insert(id);
                }
            },
        );

        hits.into_result(traversal, start)
    }

    // ===== RAY =====

    /// Closest primitive hit by `ray`, with the index's default options.
    pub fn query_ray(&self, ray: &Ray) -> RayQueryResult {
        self.query_ray_with(ray, self.default_options())
    }

    /// Ray query with explicit diagnostic options.
    pub fn query_ray_with(&self, ray: &Ray, options: QueryOptions) -> RayQueryResult {
        let start = Instant::now();
        let mut traversal = Traversal::new(options);
        let mut t = f32::INFINITY;
        let mut face = None;
        let mut final_node = None;

        self.descend(
            ROOT,
            &mut traversal,
            &|bounds: &Aabb| geometry::ray_aabb(ray, bounds),
            &mut |leaf: NodeId, id: u32| {
                if let Some(hit) = self.primitives.intersect_ray(id, ray) {
                    if hit < t {
                        t = hit;
                        face = Some(id);
                        final_node = Some(leaf);
                    }
                }
            },
        );

        RayQueryResult {
            t,
            face,
            final_node,
            diagnostics: traversal.diagnostics,
            primitive_test_count: traversal.primitive_test_count,
            elapsed: start.elapsed(),
        }
    }

    // ===== TRAVERSAL =====

    /// Pre-order descent shared by every query kind.
    ///
    /// `node_test` prunes subtrees; `primitive_test` runs once per primitive
    /// of every reached leaf, with the leaf's id.
    fn descend<N, P>(
        &self,
        node_id: NodeId,
        traversal: &mut Traversal,
        node_test: &N,
        primitive_test: &mut P,
    ) where
        N: Fn(&Aabb) -> bool,
        P: FnMut(NodeId, u32),
    {
        let node = &self.nodes[node_id as usize];

        traversal.record(QueryOptions::TESTED_NODES, node_id);
        if !node_test(&node.bounds) {
            return;
        }
        traversal.record(QueryOptions::INTERSECTED_NODES, node_id);

        if node.is_leaf() {
            traversal.record(QueryOptions::LEAF_NODES, node_id);
            for &id in &node.primitives {
                traversal.primitive_test_count += 1;
                primitive_test(node_id, id);
            }
            return;
        }

        for child in node.children() {
            self.descend(child, traversal, node_test, primitive_test);
        }
    }
}

/// Deduplicating hit collector for range and frustum queries
#[derive(Default)]
struct HitSet {
    seen: FxHashSet<u32>,
    primitives: Vec<u32>,
}

impl HitSet {
    fn insert(&mut self, id: u32) {
        if self.seen.insert(id) {
            self.primitives.push(id);
        }
    }

    fn into_result(self, traversal: Traversal, start: Instant) -> QueryResult {
        QueryResult {
            primitives: self.primitives,
            diagnostics: traversal.diagnostics,
            primitive_test_count: traversal.primitive_test_count,
            elapsed: start.elapsed(),
        }
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
