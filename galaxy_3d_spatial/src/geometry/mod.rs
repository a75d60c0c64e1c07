//! Geometry module: primitives and intersection predicates
//!
//! Boxes, planes, rays and triangles, plus the pure tests the spatial
//! index is built on. Nothing here allocates or logs.

mod aabb;
mod plane;
mod ray;
mod triangle;
pub mod intersection;

pub use aabb::Aabb;
pub use plane::Plane;
pub use ray::Ray;
pub use triangle::Triangle;
pub use intersection::{
    TriangleHit,
    aabb_aabb, aabb_touches, aabb_plane, aabb_frustum,
    ray_aabb, ray_aabb_distance, ray_aabb_interval,
    ray_triangle, triangle_aabb, triangle_aabb_approx,
};
