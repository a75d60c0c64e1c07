//! Half-line used by ray queries.
//!
//! The direction does not need to be normalized; every `t` reported for a
//! ray is measured in units of the direction's length.

use glam::Vec3;

/// Ray with origin and direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point
    pub origin: Vec3,
    /// Direction (any non-zero length)
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Ray from `origin` through `target`, with `t = 1` at the target.
    pub fn through(origin: Vec3, target: Vec3) -> Self {
        Self { origin, direction: target - origin }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Component-wise reciprocal of the direction (`±inf` on zero components).
    pub fn inverse_direction(&self) -> Vec3 {
        self.direction.recip()
    }
}
