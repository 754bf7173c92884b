//! Fitting results.

use garment_transform::OrientationDescriptor;
use garment_types::{TriangleMesh, Vector3};

/// How a body asset was authored, as classified from its principal-inertia
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPose {
    /// Standing along the vertical axis; no correction rotation needed.
    Upright,
    /// Lying on its side; stood up by the sideways correction rotation.
    Sideways,
}

/// Result of a successful fitting invocation.
///
/// Carries the canonical body mesh, the sized and positioned garment mesh,
/// and the intermediate values the pipeline derived on the way, for
/// diagnostics and batch reporting.
#[derive(Debug, Clone)]
pub struct GarmentFit {
    /// The body mesh in canonical pose and size.
    pub body: TriangleMesh,

    /// The garment mesh, sized from the shoulder landmark and positioned
    /// over the torso.
    pub garment: TriangleMesh,

    /// The authoring pose classified for the body.
    pub pose: BodyPose,

    /// Orientation analysis of the raw (pre-normalization) body mesh.
    pub orientation: OrientationDescriptor,

    /// Estimated shoulder width of the canonical body mesh.
    pub shoulder_width: f64,

    /// Shoulder width after the piecewise garment scale rule.
    pub scaled_shoulder_width: f64,

    /// Target dimensions the garment was normalized to.
    pub garment_dims: Vector3<f64>,
}

impl GarmentFit {
    /// Consume the result, yielding the `(body, garment)` mesh pair ready
    /// for the scene/viewer collaborator.
    #[must_use]
    pub fn into_meshes(self) -> (TriangleMesh, TriangleMesh) {
        (self.body, self.garment)
    }
}
