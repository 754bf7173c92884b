//! Error types for the fitting pipeline.

use garment_measure::MeasureError;
use garment_transform::TransformError;
use garment_types::GeometryError;
use thiserror::Error;

/// Result type for fitting operations.
pub type FitResult<T> = Result<T, FitError>;

/// Errors that can occur during a fitting invocation.
///
/// All variants are fatal to the single body/garment pair being fitted;
/// batch drivers catch them and decide whether to continue.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FitError {
    /// An input source resolved to no usable geometry.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Normalization or orientation analysis failed.
    #[error("transform operation failed: {0}")]
    Transform(#[from] TransformError),

    /// Shoulder measurement failed.
    #[error("measurement failed: {0}")]
    Measure(#[from] MeasureError),
}
