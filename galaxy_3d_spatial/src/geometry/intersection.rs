//! Geometric predicates used by the spatial index.
//!
//! All functions are pure. Boxes follow the `min <= max` precondition of
//! [`Aabb`]; nothing here checks it.
//!
//! | Predicate | Used for |
//! |-----------|----------|
//! | [`aabb_aabb`] | item range test |
//! | [`aabb_touches`] | range query node pruning, box membership at build time |
//! | [`aabb_plane`] | frustum test, approximate triangle membership |
//! | [`aabb_frustum`] | frustum queries (nodes and items) |
//! | [`ray_aabb`] | ray query node pruning |
//! | [`ray_triangle`] | ray query primitive test |
//! | [`triangle_aabb_approx`] | triangle membership at build time |
//! | [`triangle_aabb`] | exact reference test |

use glam::Vec3;
use super::aabb::Aabb;
use super::plane::Plane;
use super::ray::Ray;
use super::triangle::Triangle;

/// Determinants at or below this are treated as parallel / back-facing.
const RAY_TRIANGLE_EPSILON: f32 = 1e-12;

/// Relative growth applied to a cell before the approximate triangle test,
/// so rounding can only add memberships, never drop one.
const APPROX_CELL_SLACK: f32 = 1e-5;

/// Successful ray/triangle intersection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Parametric distance along the ray (in direction-length units)
    pub t: f32,
    /// World-space intersection point
    pub point: Vec3,
}

/// Strict box/box overlap.
///
/// Uses `max_a > min_b && min_a < max_b` on every axis, so two boxes that
/// share a face exactly (`a.max.x == b.min.x`) do not intersect.
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.max.x > b.min.x && a.min.x < b.max.x
        && a.max.y > b.min.y && a.min.y < b.max.y
        && a.max.z > b.min.z && a.min.z < b.max.z
}

/// Closed box/box overlap: boxes sharing a face, an edge or a corner count.
///
/// A zero-thickness box lying on another box's face also counts.
pub fn aabb_touches(a: &Aabb, b: &Aabb) -> bool {
    a.min.cmple(b.max).all() && a.max.cmpge(b.min).all()
}

/// Box/plane straddle test.
///
/// Projects the half-extents onto the absolute plane normal to get the box
/// "radius" along the normal; the box touches the plane when the center's
/// distance is within that radius.
pub fn aabb_plane(aabb: &Aabb, plane: &Plane) -> bool {
    let center = aabb.center();
    let extents = aabb.max - center;
    let radius = extents.dot(plane.normal.abs());
    plane.signed_distance(center).abs() <= radius
}

/// Conservative box/frustum test over inward-facing planes.
///
/// Never rejects a box that overlaps the volume. Boxes near a corner of the
/// frustum, outside it but straddling two planes, are accepted.
pub fn aabb_frustum(aabb: &Aabb, planes: &[Plane]) -> bool {
    let center = aabb.center();
    for plane in planes {
        // Center in front: plausibly inside with respect to this plane
        if plane.signed_distance(center) >= 0.0 {
            continue;
        }
        // Center behind: the box has to reach across the plane to survive
        if !aabb_plane(aabb, plane) {
            return false;
        }
    }
    true
}

/// Slab test returning the parametric interval `[t_near, t_far]` of the ray
/// inside the box, or `None` when it misses or the box is behind the origin.
///
/// A direction component of exactly zero is handled per axis: the ray is
/// inside that slab for every `t` when its origin lies between the planes
/// (boundaries included), and never otherwise. This avoids the `0 * inf`
/// NaN that plain IEEE arithmetic produces when the origin sits on a slab plane.
pub fn ray_aabb_interval(ray: &Ray, aabb: &Aabb) -> Option<(f32, f32)> {
    let inv_dir = ray.inverse_direction();
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        if ray.direction[axis] == 0.0 {
            if origin < aabb.min[axis] || origin > aabb.max[axis] {
                return None;
            }
            continue;
        }
        let t0 = (aabb.min[axis] - origin) * inv_dir[axis];
        let t1 = (aabb.max[axis] - origin) * inv_dir[axis];
        t_near = t_near.max(t0.min(t1));
        t_far = t_far.min(t0.max(t1));
    }

    if t_near > t_far || t_far < 0.0 {
        None
    } else {
        Some((t_near, t_far))
    }
}

/// Ray/box hit test (slab method). A ray starting inside the box always hits.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> bool {
    ray_aabb_interval(ray, aabb).is_some()
}

/// Distance to the first point of the box along the ray (0 when the origin is inside).
pub fn ray_aabb_distance(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    ray_aabb_interval(ray, aabb).map(|(t_near, _)| t_near.max(0.0))
}

/// Möller–Trumbore ray/triangle intersection with back-face culling.
///
/// Returns `None` when the ray is parallel to the triangle, hits its back
/// face (clockwise as seen from the ray), misses the barycentric range, or
/// intersects at `t <= 0`.
pub fn ray_triangle(ray: &Ray, triangle: &Triangle) -> Option<TriangleHit> {
    let edge1 = triangle.b - triangle.a;
    let edge2 = triangle.c - triangle.a;
    let pvec = ray.direction.cross(edge2);
    let det = edge1.dot(pvec);

    // Parallel or back face
    if det <= RAY_TRIANGLE_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin - triangle.a;
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(edge1);
    let v = ray.direction.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(qvec) * inv_det;
    if t <= 0.0 {
        return None;
    }

    Some(TriangleHit { t, point: ray.at(t) })
}

/// Approximate triangle/box test used when assigning triangles to cells.
///
/// Checks the triangle's bounding box against the (slightly grown) cell and
/// the cell against the triangle's plane. Both are necessary conditions for
/// a real overlap, so the test can over-report but never misses a triangle
/// that touches the cell.
pub fn triangle_aabb_approx(triangle: &Triangle, cell: &Aabb) -> bool {
    let slack = cell.size() * APPROX_CELL_SLACK + Vec3::splat(f32::EPSILON);
    let grown = Aabb { min: cell.min - slack, max: cell.max + slack };

    let bounds = triangle.bounds();
    if bounds.min.cmpgt(grown.max).any() || bounds.max.cmplt(grown.min).any() {
        return false;
    }

    // A degenerate triangle has a zero normal and always passes this test
    let plane = Plane::from_points(triangle.a, triangle.b, triangle.c);
    aabb_plane(&grown, &plane)
}

/// Exact triangle/box overlap (separating axis theorem, 13 axes).
///
/// Touching counts as overlapping.
pub fn triangle_aabb(triangle: &Triangle, aabb: &Aabb) -> bool {
    let center = aabb.center();
    let half = aabb.half_extents();

    let v0 = triangle.a - center;
    let v1 = triangle.b - center;
    let v2 = triangle.c - center;
    let edges = [v1 - v0, v2 - v1, v0 - v2];

    let separated = |axis: Vec3| -> bool {
        let p0 = v0.dot(axis);
        let p1 = v1.dot(axis);
        let p2 = v2.dot(axis);
        let radius = half.dot(axis.abs());
        p0.min(p1).min(p2) > radius || p0.max(p1).max(p2) < -radius
    };

    // Edge x box-axis cross products. A zero axis projects everything to 0
    // and can never separate.
    for edge in &edges {
        for box_axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            if separated(box_axis.cross(*edge)) {
                return false;
            }
        }
    }

    // Box face normals
    for box_axis in [Vec3::X, Vec3::Y, Vec3::Z] {
        if separated(box_axis) {
            return false;
        }
    }

    // Triangle normal
    !separated(edges[0].cross(edges[1]))
}

#[cfg(test)]
#[path = "intersection_tests.rs"]
mod tests;
