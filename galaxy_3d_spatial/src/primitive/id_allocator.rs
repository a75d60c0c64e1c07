//! Allocates unique, monotonically increasing item identifiers.
//!
//! Ids are never recycled: an item keeps its id across every index rebuild,
//! and a dropped item's id is simply retired.
//!
//! # Example
//!
//! ```ignore
//! let mut ids = IdAllocator::new();
//! let a = ids.alloc();  // ItemId(0)
//! let b = ids.alloc();  // ItemId(1)
//! ```

use std::fmt;

/// Stable identifier of an [`Item`](super::Item)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Owned counter handing out [`ItemId`]s
#[derive(Debug, Default)]
pub struct IdAllocator {
    next_id: u32,
}

impl IdAllocator {
    /// Create a new allocator starting at 0
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Create an allocator whose first id is `first`.
    ///
    /// Lets a caller continue a sequence after reloading saved items.
    pub fn starting_at(first: u32) -> Self {
        Self { next_id: first }
    }

    /// Allocate the next id
    pub fn alloc(&mut self) -> ItemId {
        let id = self.next_id;
        self.next_id = self
            .next_id
            .checked_add(1)
            .unwrap_or_else(|| panic!("item id space exhausted"));
        ItemId(id)
    }

    /// Id the next call to `alloc` will return
    pub fn peek(&self) -> ItemId {
        ItemId(self.next_id)
    }

    /// Number of ids handed out so far (for an allocator started at 0)
    pub fn allocated(&self) -> u32 {
        self.next_id
    }
}

#[cfg(test)]
#[path = "id_allocator_tests.rs"]
mod tests;
