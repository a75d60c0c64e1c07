//! Index module: spatial index builders and the query engine
//!
//! Builders (`OctreeBuilder`, `BvhBuilder`) turn a `PrimitiveSet` into an
//! immutable `SpatialIndex` stored as a flat node arena. Range, frustum and
//! ray queries run on any built index through the same traversal.

mod bvh;
mod node;
mod octree;
mod options;
mod query;
mod spatial_index;

pub use bvh::BvhBuilder;
pub use node::{Node, NodeId, ROOT};
pub use octree::{OctreeBuilder, MAX_DEPTH, MIN_CELL_SIZE};
pub use options::QueryOptions;
pub use query::{NodeDiagnostics, QueryResult, RayQueryResult};
pub use spatial_index::{IndexBuilder, IndexStats, SpatialIndex};
