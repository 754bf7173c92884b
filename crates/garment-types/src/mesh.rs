//! Indexed triangle mesh.

use crate::{Aabb, GeometryError, GeometryResult, Vertex};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// The primary surface representation for the fitting pipeline. Vertices and
/// faces are stored separately, with faces referencing vertices by index.
/// After flattening a multi-part source, indices are contiguous and every
/// face references a valid vertex (see [`TriangleMesh::validate`]).
///
/// # Example
///
/// ```
/// use garment_types::{TriangleMesh, Vertex};
///
/// let mut mesh = TriangleMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no vertices or no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Compute the axis-aligned bounding box.
    ///
    /// Returns an empty AABB if the mesh has no vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }

    /// Translate every vertex by the given offset.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Merge another mesh into this one.
    ///
    /// The other mesh's vertices and faces are appended, with face indices
    /// renumbered to reference the unified vertex array.
    ///
    /// # Note
    ///
    /// Vertex indices are u32; meshes beyond ~4 billion vertices are
    /// unsupported.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so vertex counts > 4B are unsupported by design
    pub fn merge(&mut self, other: &Self) {
        let vertex_offset = self.vertices.len() as u32;

        self.vertices.extend(other.vertices.iter().cloned());

        for face in &other.faces {
            self.faces.push([
                face[0] + vertex_offset,
                face[1] + vertex_offset,
                face[2] + vertex_offset,
            ]);
        }
    }

    /// Check that every face references a valid vertex index.
    ///
    /// Loader output should pass this before entering the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::FaceIndexOutOfRange`] for the first face
    /// referencing a vertex outside the vertex array.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so vertex counts > 4B are unsupported by design
    pub fn validate(&self) -> GeometryResult<()> {
        let vertex_count = self.vertices.len() as u32;
        for (face_index, face) in self.faces.iter().enumerate() {
            for &index in face {
                if index >= vertex_count {
                    return Err(GeometryError::FaceIndexOutOfRange {
                        face: face_index,
                        index,
                        vertex_count: self.vertices.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Create an axis-aligned box mesh centered at the origin.
///
/// Extents are `(width, depth, height)` along X, Y, Z. Faces wind
/// counter-clockwise viewed from outside. Primarily a synthetic-geometry
/// helper for tests and examples.
///
/// # Example
///
/// ```
/// use garment_types::box_mesh;
///
/// let mesh = box_mesh(2.0, 1.0, 3.0);
/// let bounds = mesh.bounds();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 12);
/// assert!((bounds.extents().z - 3.0).abs() < 1e-12);
/// assert!(bounds.center().coords.norm() < 1e-12);
/// ```
#[must_use]
pub fn box_mesh(width: f64, depth: f64, height: f64) -> TriangleMesh {
    let (hx, hy, hz) = (width / 2.0, depth / 2.0, height / 2.0);
    let mut mesh = TriangleMesh::with_capacity(8, 12);

    mesh.vertices.push(Vertex::from_coords(-hx, -hy, -hz)); // 0
    mesh.vertices.push(Vertex::from_coords(hx, -hy, -hz)); // 1
    mesh.vertices.push(Vertex::from_coords(hx, hy, -hz)); // 2
    mesh.vertices.push(Vertex::from_coords(-hx, hy, -hz)); // 3
    mesh.vertices.push(Vertex::from_coords(-hx, -hy, hz)); // 4
    mesh.vertices.push(Vertex::from_coords(hx, -hy, hz)); // 5
    mesh.vertices.push(Vertex::from_coords(hx, hy, hz)); // 6
    mesh.vertices.push(Vertex::from_coords(-hx, hy, hz)); // 7

    // Bottom (-Z)
    mesh.faces.push([0, 2, 1]);
    mesh.faces.push([0, 3, 2]);
    // Top (+Z)
    mesh.faces.push([4, 5, 6]);
    mesh.faces.push([4, 6, 7]);
    // Front (-Y)
    mesh.faces.push([0, 1, 5]);
    mesh.faces.push([0, 5, 4]);
    // Back (+Y)
    mesh.faces.push([3, 7, 6]);
    mesh.faces.push([3, 6, 2]);
    // Left (-X)
    mesh.faces.push([0, 4, 7]);
    mesh.faces.push([0, 7, 3]);
    // Right (+X)
    mesh.faces.push([1, 2, 6]);
    mesh.faces.push([1, 6, 5]);

    mesh
}
