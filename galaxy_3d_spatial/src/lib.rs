/*!
# Galaxy 3D Spatial

Spatial indexing for the Galaxy 3D engine: an adaptive octree (with a
bounding-volume hierarchy as a drop-in alternative) built over moving
items or static mesh faces, and answering range, frustum and ray queries.

## Architecture

- **Geometry**: boxes, planes, rays, triangles and the intersection predicates
- **Camera**: look-at camera and frustum extraction from its transform
- **Primitive**: `PrimitiveSet` trait, `Item`, `Mesh`, `IdAllocator`
- **Index**: `OctreeBuilder`, `BvhBuilder`, `SpatialIndex` and its queries

An index is immutable once built. When the scene changes, build a new one:

```ignore
use galaxy_3d_spatial::galaxy3d::{Aabb, Frustum, IndexBuilder, OctreeBuilder};

let index = OctreeBuilder::new(3).build(&items, world_box);
let visible = index.query_frustum(&Frustum::from_camera(&camera));
```
*/

// Internal modules
mod error;
pub mod log;
pub mod geometry;
pub mod camera;
pub mod primitive;
pub mod index;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Galaxy3dError, Galaxy3dResult, Result};

    // Geometry
    pub use crate::geometry::{Aabb, Plane, Ray, Triangle, TriangleHit};

    // Camera and frustum
    pub use crate::camera::{Camera, Frustum};

    // Primitive sources
    pub use crate::primitive::{IdAllocator, Item, ItemId, Mesh, PrimitiveSet};

    // Builders, index and query results
    pub use crate::index::{
        BvhBuilder, IndexBuilder, IndexStats, Node, NodeDiagnostics, NodeId,
        OctreeBuilder, QueryOptions, QueryResult, RayQueryResult, SpatialIndex,
    };

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity,
        };
    }

    // Intersection predicates
    pub mod intersection {
        pub use crate::geometry::intersection::*;
    }
}

// Re-export math library at crate root
pub use glam;
