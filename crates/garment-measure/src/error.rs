//! Error types for landmark measurement.

use thiserror::Error;

/// Result type alias for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur during landmark measurement.
#[derive(Debug, Error)]
pub enum MeasureError {
    /// Input mesh has no vertices.
    #[error("input mesh is empty")]
    EmptyMesh,

    /// No vertices at or above the upper-band threshold.
    ///
    /// The threshold landed above the mesh's actual top, or the geometry is
    /// degenerate. Fatal for the fitting invocation.
    #[error("no upper body vertices at threshold {threshold} (mesh top is {z_max})")]
    NoUpperBodyVertices {
        /// The Z threshold that selected nothing.
        threshold: f64,
        /// The mesh's maximum Z coordinate.
        z_max: f64,
    },
}
