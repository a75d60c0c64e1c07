//! Plane in signed-distance form.
//!
//! A point `p` has signed distance `dot(normal, p) - d`. Positive values are
//! on the front (inside) of the plane.

use glam::Vec3;

/// Plane with unit normal and offset `d`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal (zero for a degenerate plane)
    pub normal: Vec3,
    /// Offset along the normal
    pub d: f32,
}

impl Plane {
    /// Create a plane from a normal and offset. The normal is normalized;
    /// a zero normal stays zero.
    pub fn new(normal: Vec3, d: f32) -> Self {
        Self { normal: normal.normalize_or_zero(), d }
    }

    /// Plane through three points.
    ///
    /// The normal is `cross(p1 - p0, p2 - p0)`, so the winding of the points
    /// decides which side is positive. Collinear points give a zero normal.
    pub fn from_points(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        let normal = (p1 - p0).cross(p2 - p0).normalize_or_zero();
        Self { normal, d: normal.dot(p0) }
    }

    /// Signed distance from `point` to the plane.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.d
    }

    /// Pack as `(nx, ny, nz, d)`.
    pub fn to_array(&self) -> [f32; 4] {
        [self.normal.x, self.normal.y, self.normal.z, self.d]
    }
}
