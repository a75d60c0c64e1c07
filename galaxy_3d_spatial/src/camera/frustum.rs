//! Six inward-facing planes for visibility queries.
//!
//! Planes are stored in a fixed order (near, far, left, right, top, bottom),
//! each in signed-distance form with its normal pointing into the view
//! volume: a point is inside when every `signed_distance` is `>= 0`.
//!
//! The frustum is derived per query from the camera's current transform and
//! is never cached in a spatial index.

use glam::{Mat4, Vec3, Vec4};
use crate::geometry::{self, Aabb, Plane};
use super::camera::Camera;

/// Frustum plane indices
pub const PLANE_NEAR: usize = 0;
pub const PLANE_FAR: usize = 1;
pub const PLANE_LEFT: usize = 2;
pub const PLANE_RIGHT: usize = 3;
pub const PLANE_TOP: usize = 4;
pub const PLANE_BOTTOM: usize = 5;

/// NDC cube corners: near face (z = -1) counter-clockwise from (-1, -1),
/// then the far face (z = +1) in the same order.
const NDC_CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// Corner triples per plane, in plane order. The winding gives inward
/// normals for a right-handed view with an OpenGL projection.
const PLANE_CORNERS: [[usize; 3]; 6] = [
    [0, 2, 1], // near
    [4, 5, 6], // far
    [7, 3, 0], // left
    [2, 6, 5], // right
    [6, 2, 3], // top
    [5, 4, 0], // bottom
];

/// Six frustum planes for culling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: near, far, left, right, top, bottom
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Frustum of a camera's current view.
    pub fn from_camera(camera: &Camera) -> Self {
        Self::from_inverse_view_projection(&camera.inverse_view_projection())
    }

    /// Unproject the 8 NDC cube corners (`(±1, ±1, ±1)`) into world space and
    /// build each plane from three of them.
    ///
    /// Normals are oriented toward the centroid of the corners, so a
    /// mirrored transform still yields an inward-facing frustum.
    pub fn from_inverse_view_projection(inverse_view_projection: &Mat4) -> Self {
        let corners = Self::corners(inverse_view_projection);
        let centroid = corners.iter().copied().sum::<Vec3>() / 8.0;

        let planes = PLANE_CORNERS.map(|[i, j, k]| {
            let plane = Plane::from_points(corners[i], corners[j], corners[k]);
            if plane.signed_distance(centroid) < 0.0 {
                Plane { normal: -plane.normal, d: -plane.d }
            } else {
                plane
            }
        });

        Self { planes }
    }

    /// World-space frustum corners, in the same order as the NDC cube corners.
    pub fn corners(inverse_view_projection: &Mat4) -> [Vec3; 8] {
        NDC_CORNERS.map(|corner| inverse_view_projection.project_point3(corner))
    }

    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method for clip space with z in [-w, w].
    /// Gives the same planes as [`Frustum::from_inverse_view_projection`]
    /// up to rounding.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();
        let row = |r: usize| Vec4::new(m[0][r], m[1][r], m[2][r], m[3][r]);
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        // Clip-space (A, B, C, D) with Ax + By + Cz + D >= 0 inside
        let clip_planes = [
            r3 + r2, // near
            r3 - r2, // far
            r3 + r0, // left
            r3 - r0, // right
            r3 - r1, // top
            r3 + r1, // bottom
        ];

        let planes = clip_planes.map(|p| {
            let normal = p.truncate();
            let length = normal.length();
            if length > 0.0 {
                Plane { normal: normal / length, d: -p.w / length }
            } else {
                Plane { normal: Vec3::ZERO, d: -p.w }
            }
        });

        Self { planes }
    }

    /// Plane by index (`PLANE_NEAR` .. `PLANE_BOTTOM`).
    pub fn plane(&self, index: usize) -> &Plane {
        &self.planes[index]
    }

    /// Whether a point lies inside (or on) every plane.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.signed_distance(point) >= 0.0)
    }

    /// Conservative AABB test.
    ///
    /// May return false positives near frustum corners, never false negatives.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        geometry::aabb_frustum(aabb, &self.planes)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
