//! Mesh normalization: canonical orientation and target size.
//!
//! Source assets arrive in inconsistent orientations ("lying down" vs
//! "standing") and arbitrary scales. Normalization resolves both with a
//! fixed sequence: rotate about X, recenter the bounding-box centroid to
//! the origin, then scale each axis to the target extents.
//!
//! The scale step is diagonal about the current origin, not about the
//! post-scale centroid, and no recentering follows it. Downstream placement
//! offsets are calibrated against exactly this sequence; do not reorder.

use garment_types::{GeometryError, MeshSource, TriangleMesh, Vector3};
use tracing::debug;

use crate::error::TransformResult;
use crate::transform::Transform3D;

/// Substitute for exactly-zero bounding-box extents.
///
/// Keeps flat or planar assets from dividing by zero during scaling; the
/// affected axis simply stays flat.
pub const MIN_EXTENT: f64 = 1e-8;

/// Normalize a mesh source to a canonical orientation and size.
///
/// Flattens the source, rotates about the X axis by `rotation_deg`,
/// recenters the bounding-box centroid to the origin, and scales per-axis
/// to `target_dims`.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyGeometry`] (wrapped) if the source
/// resolves to zero vertices.
///
/// # Example
///
/// ```
/// use garment_transform::normalize;
/// use garment_types::{MeshSource, Vector3, box_mesh};
///
/// let source = MeshSource::from(box_mesh(4.0, 4.0, 4.0));
/// let mesh = normalize(source, Vector3::new(0.8, 0.28, 1.8), 90.0).unwrap();
///
/// let extents = mesh.bounds().extents();
/// assert!((extents.x - 0.8).abs() < 1e-9);
/// assert!((extents.y - 0.28).abs() < 1e-9);
/// assert!((extents.z - 1.8).abs() < 1e-9);
/// ```
pub fn normalize(
    source: MeshSource,
    target_dims: Vector3<f64>,
    rotation_deg: f64,
) -> TransformResult<TriangleMesh> {
    let mesh = source.flatten()?;
    normalize_mesh(&mesh, target_dims, rotation_deg)
}

/// Normalize an already-flattened mesh.
///
/// Same sequence as [`normalize`]; returns a new mesh.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyGeometry`] (wrapped) if the mesh has no
/// vertices.
pub fn normalize_mesh(
    mesh: &TriangleMesh,
    target_dims: Vector3<f64>,
    rotation_deg: f64,
) -> TransformResult<TriangleMesh> {
    if mesh.vertices.is_empty() {
        return Err(GeometryError::EmptyGeometry.into());
    }

    let centered = rotate_and_recenter(mesh, rotation_deg);
    let extents = guarded_extents(&centered);
    let factors = Vector3::new(
        target_dims.x / extents.x,
        target_dims.y / extents.y,
        target_dims.z / extents.z,
    );

    debug!(
        sx = factors.x,
        sy = factors.y,
        sz = factors.z,
        "scaling mesh to target dimensions"
    );

    Ok(Transform3D::from_scale(factors).apply_to_mesh(&centered))
}

/// Rotate about X (degrees, pivot at origin), then translate the
/// bounding-box centroid of the *rotated* mesh to the origin.
fn rotate_and_recenter(mesh: &TriangleMesh, rotation_deg: f64) -> TriangleMesh {
    let rotated = Transform3D::rotation_x_deg(rotation_deg).apply_to_mesh(mesh);
    let center = rotated.bounds().center();
    Transform3D::translation(-center.x, -center.y, -center.z).apply_to_mesh(&rotated)
}

/// Bounding-box extents with exactly-zero axes replaced by [`MIN_EXTENT`].
#[allow(clippy::float_cmp)]
// Exact comparison: only extents that are exactly zero get the substitute
fn guarded_extents(mesh: &TriangleMesh) -> Vector3<f64> {
    let mut extents = mesh.bounds().extents();
    if extents.x == 0.0 {
        extents.x = MIN_EXTENT;
    }
    if extents.y == 0.0 {
        extents.y = MIN_EXTENT;
    }
    if extents.z == 0.0 {
        extents.z = MIN_EXTENT;
    }
    extents
}
