//! Axis-aligned bounding box.
//!
//! Stored as two corners. The flat 6-float layout
//! `[minX, minY, minZ, maxX, maxY, maxZ]` used by item sources is available
//! through `from_array` / `to_array`.
//!
//! Precondition: `min <= max` on every axis. An inverted box is a caller
//! error; it is only checked by `debug_assert!`.

use glam::Vec3;

/// Axis-Aligned Bounding Box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Aabb {
    /// Zero-sized box at the origin
    pub const ZERO: Aabb = Aabb { min: Vec3::ZERO, max: Vec3::ZERO };

    /// Create a box from its corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(
            min.cmple(max).all(),
            "inverted AABB: min {:?} max {:?}",
            min,
            max
        );
        Self { min, max }
    }

    /// Create a box from `[minX, minY, minZ, maxX, maxY, maxZ]`.
    pub fn from_array(values: [f32; 6]) -> Self {
        Self::new(
            Vec3::new(values[0], values[1], values[2]),
            Vec3::new(values[3], values[4], values[5]),
        )
    }

    /// Flatten to `[minX, minY, minZ, maxX, maxY, maxZ]`.
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.min.x, self.min.y, self.min.z,
            self.max.x, self.max.y, self.max.z,
        ]
    }

    /// Box centered on `center` with full edge lengths `size`.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self::new(center - half, center + half)
    }

    /// Tight box around a set of points.
    ///
    /// An empty iterator yields `Aabb::ZERO` rather than an inverted box.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::ZERO;
        };
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Self { min, max }
    }

    /// Compute the center point of this AABB.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half of the edge lengths.
    pub fn half_extents(&self) -> Vec3 {
        self.max - self.center()
    }

    /// Full edge lengths.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Smallest of the three edge lengths.
    pub fn min_dimension(&self) -> f32 {
        self.size().min_element()
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Inclusive point containment.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Test if this AABB fully contains another AABB (inclusive).
    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }

    /// Strict overlap test. Boxes that only share a face are NOT intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        super::intersection::aabb_aabb(self, other)
    }

    /// Compute the AABB of a specific octant (0–7) split at the center.
    ///
    /// Octant bit layout: bit0 = X, bit1 = Y, bit2 = Z (0 = low, 1 = high),
    /// which gives the canonical order `---, +--, -+-, ++-, --+, +-+, -++, +++`.
    pub fn octant(&self, octant: u8) -> Aabb {
        let center = self.center();
        Aabb {
            min: Vec3::new(
                if octant & 1 == 0 { self.min.x } else { center.x },
                if octant & 2 == 0 { self.min.y } else { center.y },
                if octant & 4 == 0 { self.min.z } else { center.z },
            ),
            max: Vec3::new(
                if octant & 1 == 0 { center.x } else { self.max.x },
                if octant & 2 == 0 { center.y } else { self.max.y },
                if octant & 4 == 0 { center.z } else { self.max.z },
            ),
        }
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[f32; 6]> for Aabb {
    fn from(values: [f32; 6]) -> Self {
        Self::from_array(values)
    }
}
