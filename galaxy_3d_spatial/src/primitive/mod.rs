//! Primitive module
//!
//! Two primitive sources are supported: moving `Item`s that own a
//! bounding box, and the faces of a static `Mesh`. Both are seen by the
//! index only through the `PrimitiveSet` trait.

mod id_allocator;
mod item;
mod mesh;
mod primitive_set;

pub use id_allocator::{IdAllocator, ItemId};
pub use item::Item;
pub use mesh::Mesh;
pub use primitive_set::PrimitiveSet;
