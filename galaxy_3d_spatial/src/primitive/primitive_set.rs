//! The seam between a spatial index and its primitives.
//!
//! An index never stores primitives, only their `u32` positions in the set
//! it was built from. Every geometric question about a primitive goes
//! through this trait, so the same builders and queries serve moving items
//! and static meshes alike.

use crate::geometry::{self, Aabb, Plane, Ray};
use super::item::Item;
use super::mesh::Mesh;

/// Indexed collection of primitives.
///
/// Ids run from `0` to `primitive_count() - 1`.
pub trait PrimitiveSet {
    /// Number of primitives.
    fn primitive_count(&self) -> usize;

    /// World-space bounds of primitive `id`.
    fn primitive_bounds(&self, id: u32) -> Aabb;

    /// Build-time membership test against an index cell.
    ///
    /// May report a primitive in a cell it does not touch; must never miss
    /// one that does.
    fn overlaps_cell(&self, id: u32, cell: &Aabb) -> bool;

    /// Exact range-query test.
    fn overlaps_range(&self, id: u32, range: &Aabb) -> bool {
        geometry::aabb_aabb(&self.primitive_bounds(id), range)
    }

    /// Exact frustum-query test.
    fn overlaps_frustum(&self, id: u32, planes: &[Plane]) -> bool {
        geometry::aabb_frustum(&self.primitive_bounds(id), planes)
    }

    /// Ray-query test: parametric hit distance, or `None` for a miss.
    fn intersect_ray(&self, id: u32, ray: &Ray) -> Option<f32>;
}

// ===== BOXES =====

impl PrimitiveSet for [Aabb] {
    fn primitive_count(&self) -> usize {
        self.len()
    }

    fn primitive_bounds(&self, id: u32) -> Aabb {
        self[id as usize]
    }

    fn overlaps_cell(&self, id: u32, cell: &Aabb) -> bool {
        geometry::aabb_touches(&self[id as usize], cell)
    }

    fn intersect_ray(&self, id: u32, ray: &Ray) -> Option<f32> {
        geometry::ray_aabb_distance(ray, &self[id as usize])
    }
}

// ===== ITEMS =====

impl PrimitiveSet for [Item] {
    fn primitive_count(&self) -> usize {
        self.len()
    }

    fn primitive_bounds(&self, id: u32) -> Aabb {
        *self[id as usize].aabb()
    }

    fn overlaps_cell(&self, id: u32, cell: &Aabb) -> bool {
        geometry::aabb_touches(self[id as usize].aabb(), cell)
    }

    fn intersect_ray(&self, id: u32, ray: &Ray) -> Option<f32> {
        geometry::ray_aabb_distance(ray, self[id as usize].aabb())
    }
}

// ===== MESH FACES =====

impl PrimitiveSet for Mesh {
    fn primitive_count(&self) -> usize {
        self.face_count()
    }

    fn primitive_bounds(&self, id: u32) -> Aabb {
        self.triangle(id).bounds()
    }

    fn overlaps_cell(&self, id: u32, cell: &Aabb) -> bool {
        geometry::triangle_aabb_approx(&self.triangle(id), cell)
    }

    // Bounding-box overlap would report faces in cells they were never
    // assigned to, so the range test is the exact one.
    fn overlaps_range(&self, id: u32, range: &Aabb) -> bool {
        geometry::triangle_aabb(&self.triangle(id), range)
    }

    fn intersect_ray(&self, id: u32, ray: &Ray) -> Option<f32> {
        geometry::ray_triangle(ray, &self.triangle(id)).map(|hit| hit.t)
    }
}

// ===== FORWARDING =====

impl<T> PrimitiveSet for Vec<T>
where
    [T]: PrimitiveSet,
{
    fn primitive_count(&self) -> usize {
        self.as_slice().primitive_count()
    }

    fn primitive_bounds(&self, id: u32) -> Aabb {
        self.as_slice().primitive_bounds(id)
    }

    fn overlaps_cell(&self, id: u32, cell: &Aabb) -> bool {
        self.as_slice().overlaps_cell(id, cell)
    }

    fn overlaps_range(&self, id: u32, range: &Aabb) -> bool {
        self.as_slice().overlaps_range(id, range)
    }

    fn overlaps_frustum(&self, id: u32, planes: &[Plane]) -> bool {
        self.as_slice().overlaps_frustum(id, planes)
    }

    fn intersect_ray(&self, id: u32, ray: &Ray) -> Option<f32> {
        self.as_slice().intersect_ray(id, ray)
    }
}

#[cfg(test)]
#[path = "primitive_set_tests.rs"]
mod tests;
