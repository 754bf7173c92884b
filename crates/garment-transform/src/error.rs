//! Error types for transformation and analysis operations.

use garment_types::GeometryError;
use thiserror::Error;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors that can occur during mesh transformation or analysis.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The input source resolved to no usable geometry.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Not enough vertices for orientation analysis.
    #[error("insufficient vertices: need at least {required}, got {actual}")]
    InsufficientVertices {
        /// Minimum number of vertices required.
        required: usize,
        /// Actual number of vertices provided.
        actual: usize,
    },
}
