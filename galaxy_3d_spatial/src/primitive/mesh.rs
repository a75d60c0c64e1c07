//! Static triangle soup whose faces are indexed primitives.
//!
//! Face `f` is the triangle `vertices[indices[3f]], vertices[indices[3f + 1]],
//! vertices[indices[3f + 2]]`, counter-clockwise front face. Buffers are
//! validated once at construction so face access never fails afterward.

use glam::Vec3;
use crate::error::{Error, Result};
use crate::geometry::{Aabb, Triangle};

const SOURCE: &str = "galaxy3d::Mesh";

/// Validated vertex + index buffers
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Create a mesh from vertices and triangle indices.
    ///
    /// # Errors
    ///
    /// `Error::InvalidMesh` if the index count is not a multiple of 3 or an
    /// index is out of range.
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(invalid(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        if u32::try_from(indices.len() / 3).is_err() {
            return Err(invalid(format!("{} faces exceed the u32 id range", indices.len() / 3)));
        }
        if let Some((position, index)) = indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertices.len())
        {
            return Err(invalid(format!(
                "index {} at position {} is out of range ({} vertices)",
                index,
                position,
                vertices.len()
            )));
        }

        Ok(Self { vertices, indices })
    }

    /// Create a mesh from flat buffers (`[x0, y0, z0, x1, ...]` positions).
    ///
    /// # Errors
    ///
    /// `Error::InvalidMesh` if the position count is not a multiple of 3, or
    /// for any reason [`Mesh::new`] rejects.
    pub fn from_flat(positions: &[f32], indices: &[u32]) -> Result<Self> {
        let vertices: &[Vec3] = bytemuck::try_cast_slice(positions).map_err(|e| {
            invalid(format!(
                "{} floats do not form whole vertices ({:?})",
                positions.len(),
                e
            ))
        })?;
        Self::new(vertices.to_vec(), indices.to_vec())
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex positions as flat floats.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// The three vertex indices of a face.
    ///
    /// # Panics
    ///
    /// If `face >= face_count()`.
    pub fn face_indices(&self, face: u32) -> [u32; 3] {
        let base = face as usize * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// World-space triangle of a face.
    ///
    /// # Panics
    ///
    /// If `face >= face_count()`.
    pub fn triangle(&self, face: u32) -> Triangle {
        let [a, b, c] = self.face_indices(face);
        Triangle::new(
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        )
    }

    /// Iterate all faces as triangles, in face order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.face_count() as u32).map(move |face| self.triangle(face))
    }

    /// Tight box around every vertex (`Aabb::ZERO` for an empty mesh).
    ///
    /// This is the world box to build a static mesh's index over.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().copied())
    }
}

fn invalid(message: String) -> Error {
    crate::spatial_error!(SOURCE, "{}", message);
    Error::InvalidMesh(message)
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
