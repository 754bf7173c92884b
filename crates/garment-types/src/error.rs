//! Error types for geometry operations.

use thiserror::Error;

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors that can occur while resolving or validating geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A mesh or collection resolved to zero usable geometry after
    /// flattening.
    #[error("no usable geometry after flattening (zero parts or zero vertices)")]
    EmptyGeometry,

    /// A face references a vertex index outside the vertex array.
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}
