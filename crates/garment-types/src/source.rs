//! Mesh sources: single meshes and named multi-part collections.
//!
//! Scene loaders return either one mesh or a set of named parts (a glTF
//! binary usually yields several). [`MeshSource`] models both shapes as a
//! tagged variant with one explicit flatten step, resolved at the pipeline
//! boundary instead of re-checked inside every component.

use crate::{GeometryError, GeometryResult, TriangleMesh};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered collection of named mesh parts.
///
/// Part order is insertion order and is preserved through flattening, so
/// flatten output is deterministic for a given input.
///
/// # Example
///
/// ```
/// use garment_types::{MeshCollection, box_mesh};
///
/// let mut collection = MeshCollection::new();
/// collection.push("torso", box_mesh(1.0, 1.0, 1.0));
/// collection.push("sleeves", box_mesh(2.0, 0.5, 0.5));
///
/// let combined = collection.flatten().unwrap();
/// assert_eq!(combined.vertex_count(), 16);
/// assert_eq!(combined.face_count(), 24);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshCollection {
    parts: Vec<(String, TriangleMesh)>,
}

impl MeshCollection {
    /// Create an empty collection.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Append a named part.
    pub fn push(&mut self, name: impl Into<String>, mesh: TriangleMesh) {
        self.parts.push((name.into(), mesh));
    }

    /// Get the number of parts.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if the collection has no parts.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterate over part names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(name, _)| name.as_str())
    }

    /// Concatenate all parts into one mesh.
    ///
    /// Faces are renumbered to reference the unified vertex array; part
    /// order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyGeometry`] if the collection has zero
    /// parts or zero vertices in total.
    pub fn flatten(&self) -> GeometryResult<TriangleMesh> {
        let vertex_total = self.parts.iter().map(|(_, m)| m.vertex_count()).sum();
        let face_total = self.parts.iter().map(|(_, m)| m.face_count()).sum();

        let mut combined = TriangleMesh::with_capacity(vertex_total, face_total);
        for (_, part) in &self.parts {
            combined.merge(part);
        }

        if combined.vertices.is_empty() {
            return Err(GeometryError::EmptyGeometry);
        }
        Ok(combined)
    }
}

/// A mesh input as produced by the loading collaborator.
///
/// Either a single mesh or a named collection of parts. Components that need
/// one surface call [`MeshSource::flatten`] exactly once at their boundary.
///
/// # Example
///
/// ```
/// use garment_types::{MeshSource, box_mesh};
///
/// let source = MeshSource::from(box_mesh(1.0, 1.0, 1.0));
/// let mesh = source.flatten().unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeshSource {
    /// A single mesh.
    Single(TriangleMesh),
    /// A named collection of mesh parts.
    Collection(MeshCollection),
}

impl MeshSource {
    /// Resolve the source into one mesh.
    ///
    /// A single mesh passes through without copying; a collection is
    /// concatenated with faces renumbered.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyGeometry`] if the source resolves to
    /// zero vertices.
    pub fn flatten(self) -> GeometryResult<TriangleMesh> {
        let mesh = match self {
            Self::Single(mesh) => mesh,
            Self::Collection(collection) => collection.flatten()?,
        };
        if mesh.vertices.is_empty() {
            return Err(GeometryError::EmptyGeometry);
        }
        Ok(mesh)
    }
}

impl From<TriangleMesh> for MeshSource {
    fn from(mesh: TriangleMesh) -> Self {
        Self::Single(mesh)
    }
}

impl From<MeshCollection> for MeshSource {
    fn from(collection: MeshCollection) -> Self {
        Self::Collection(collection)
    }
}
