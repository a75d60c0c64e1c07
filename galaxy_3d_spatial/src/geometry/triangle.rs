//! Triangle with counter-clockwise front face.

use glam::Vec3;
use super::aabb::Aabb;

/// Three vertices; `(b - a) x (c - a)` is the front-facing normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex
    pub a: Vec3,
    /// Second vertex
    pub b: Vec3,
    /// Third vertex
    pub c: Vec3,
}

impl Triangle {
    /// Create a triangle.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Tight bounding box of the three vertices.
    pub fn bounds(&self) -> Aabb {
        Aabb {
            min: self.a.min(self.b).min(self.c),
            max: self.a.max(self.b).max(self.c),
        }
    }

    /// Unit front-face normal (zero for a degenerate triangle).
    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a).normalize_or_zero()
    }

    /// Same triangle with reversed winding.
    pub fn flipped(&self) -> Triangle {
        Triangle { a: self.b, b: self.a, c: self.c }
    }

    /// Vertex centroid.
    pub fn centroid(&self) -> Vec3 {
        (self.a + self.b + self.c) / 3.0
    }
}
