//! Fitting pipeline implementation.

use garment_measure::shoulder_width;
use garment_transform::{OrientationDescriptor, analyze_mesh, normalize, normalize_mesh};
use garment_types::{MeshSource, Vector3};
use tracing::info;

use crate::error::FitResult;
use crate::params::FitParams;
use crate::result::{BodyPose, GarmentFit};

/// Fit a garment mesh onto a body mesh.
///
/// Pipeline stages:
/// 1. Flatten the body source.
/// 2. Classify the authoring pose from the body's principal-inertia
///    orientation (Y Euler angle sign).
/// 3. Normalize the body to the canonical dimensions for that pose.
/// 4. Estimate shoulder width from the upper vertex band.
/// 5. Map the width to garment width via the piecewise scale rule.
/// 6. Flatten and normalize the garment to the derived dimensions at the
///    fixed garment correction rotation.
/// 7. Raise the garment by the fixed vertical offset.
///
/// # Errors
///
/// Propagates [`FitError`](crate::FitError) variants from flattening,
/// orientation analysis, normalization, and measurement. Failures are fatal
/// to this invocation; nothing is retried.
///
/// # Example
///
/// ```
/// use garment_fit::{BodyPose, FitParams, fit_garment};
/// use garment_types::{MeshSource, box_mesh};
///
/// let body = MeshSource::from(box_mesh(0.5, 0.25, 1.75));
/// let garment = MeshSource::from(box_mesh(1.0, 0.5, 1.0));
///
/// let fit = fit_garment(body, garment, &FitParams::default()).unwrap();
/// assert_eq!(fit.pose, BodyPose::Upright);
/// ```
pub fn fit_garment(
    body: MeshSource,
    garment: MeshSource,
    params: &FitParams,
) -> FitResult<GarmentFit> {
    let body_mesh = body.flatten()?;

    let orientation = analyze_mesh(&body_mesh)?;
    let pose = classify_pose(&orientation);
    let (body_dims, rotation_deg) = match pose {
        BodyPose::Sideways => (params.sideways_body_dims, params.sideways_rotation_deg),
        BodyPose::Upright => (params.upright_body_dims, 0.0),
    };

    info!(
        ?pose,
        pitch_deg = orientation.euler_angles_deg.y,
        "canonicalizing body mesh"
    );
    let body_mesh = normalize_mesh(&body_mesh, body_dims, rotation_deg)?;

    let width = shoulder_width(&body_mesh, params.shoulder_band_ratio)?;
    let scaled_width = scale_shoulder_width(width, params);
    let garment_dims = Vector3::new(scaled_width, params.garment_depth, params.garment_height);

    info!(
        shoulder_width = width,
        scaled_width,
        "sizing garment from shoulder landmark"
    );
    let mut garment_mesh = normalize(garment, garment_dims, params.garment_rotation_deg)?;
    garment_mesh.translate(Vector3::new(0.0, 0.0, params.garment_vertical_offset));

    Ok(GarmentFit {
        body: body_mesh,
        garment: garment_mesh,
        pose,
        orientation,
        shoulder_width: width,
        scaled_shoulder_width: scaled_width,
        garment_dims,
    })
}

/// Classify the authoring pose from the orientation descriptor.
///
/// A negative Y Euler angle marks the side-lying authoring convention.
fn classify_pose(orientation: &OrientationDescriptor) -> BodyPose {
    if orientation.euler_angles_deg.y < 0.0 {
        BodyPose::Sideways
    } else {
        BodyPose::Upright
    }
}

/// Apply the piecewise garment width rule.
///
/// Bodies already wide at the shoulder band take the smaller multiplier;
/// the cutoff itself belongs to the narrow regime.
fn scale_shoulder_width(width: f64, params: &FitParams) -> f64 {
    if width > params.wide_shoulder_cutoff {
        width * params.wide_shoulder_scale
    } else {
        width * params.narrow_shoulder_scale
    }
}
