//! A primitive that owns a world-space AABB.
//!
//! The box is kept current by whoever moves the item (an animation step,
//! a physics update). The index reads it at build time and never stores it.

use glam::Vec3;
use crate::geometry::Aabb;
use super::id_allocator::{IdAllocator, ItemId};

/// Bounding-box primitive with a stable id
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    aabb: Aabb,
}

impl Item {
    /// Create an item, taking the next id from `ids`.
    pub fn new(ids: &mut IdAllocator, aabb: Aabb) -> Self {
        Self { id: ids.alloc(), aabb }
    }

    /// Create an item from the flat `[minX, minY, minZ, maxX, maxY, maxZ]` layout.
    pub fn from_array(ids: &mut IdAllocator, values: [f32; 6]) -> Self {
        Self::new(ids, Aabb::from_array(values))
    }

    /// Create an item centered on `center` with edge lengths `size`.
    pub fn from_center_size(ids: &mut IdAllocator, center: Vec3, size: Vec3) -> Self {
        Self::new(ids, Aabb::from_center_size(center, size))
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Current world-space box.
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Replace the box (external update step).
    pub fn set_aabb(&mut self, aabb: Aabb) {
        self.aabb = aabb;
    }

    /// Move the box by `delta`, keeping its size.
    pub fn translate(&mut self, delta: Vec3) {
        self.aabb = Aabb { min: self.aabb.min + delta, max: self.aabb.max + delta };
    }
}
