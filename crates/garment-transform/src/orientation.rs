//! Principal-inertia orientation analysis.
//!
//! Classifying how a source asset was authored (standing vs lying on its
//! side) only needs a gross orientation estimate, not a physical simulation:
//! the inertia tensor of unit point masses at the vertices is decomposed
//! into principal axes, and the resulting rotation is reported as Euler
//! angles for branch logic downstream.

use garment_types::{GeometryError, MeshSource, TriangleMesh, Vector3};
use nalgebra::{Matrix3, Rotation3, SymmetricEigen};

use crate::error::{TransformError, TransformResult};

/// Minimum vertex count for a meaningful inertia frame.
const MIN_ANALYSIS_VERTICES: usize = 3;

/// Result of orientation analysis on a mesh.
///
/// Purely informational; the fitting pipeline consumes it once to pick a
/// discrete rotation branch.
#[derive(Debug, Clone)]
pub struct OrientationDescriptor {
    /// Bounding-box extents of the analyzed mesh.
    pub extents: Vector3<f64>,

    /// Rotation aligning the mesh's principal inertia axes to the world
    /// axes. Rows are the principal axes, ordered by ascending moment of
    /// inertia (longest physical axis first), sign-canonicalized and
    /// right-handed.
    pub rotation: Matrix3<f64>,

    /// The rotation as Euler angles in degrees, extrinsic X-Y-Z order.
    pub euler_angles_deg: Vector3<f64>,
}

/// Analyze the orientation of a mesh source.
///
/// Collections are flattened exactly as in normalization. Pure: the input
/// is never mutated.
///
/// # Errors
///
/// Returns [`TransformError::Geometry`] if the source resolves to no
/// vertices, or [`TransformError::InsufficientVertices`] below the
/// three-vertex analysis floor.
pub fn analyze(source: &MeshSource) -> TransformResult<OrientationDescriptor> {
    match source {
        MeshSource::Single(mesh) => analyze_mesh(mesh),
        MeshSource::Collection(collection) => analyze_mesh(&collection.flatten()?),
    }
}

/// Analyze the orientation of a single mesh.
///
/// # Errors
///
/// Same conditions as [`analyze`].
///
/// # Example
///
/// ```
/// use garment_transform::analyze_mesh;
/// use garment_types::box_mesh;
///
/// // A box standing along Z reads as upright: zero pitch
/// let body = box_mesh(0.5, 0.25, 1.75);
/// let orientation = analyze_mesh(&body).unwrap();
/// assert!(orientation.euler_angles_deg.y.abs() < 1e-6);
/// ```
pub fn analyze_mesh(mesh: &TriangleMesh) -> TransformResult<OrientationDescriptor> {
    if mesh.vertices.is_empty() {
        return Err(GeometryError::EmptyGeometry.into());
    }
    if mesh.vertex_count() < MIN_ANALYSIS_VERTICES {
        return Err(TransformError::InsufficientVertices {
            required: MIN_ANALYSIS_VERTICES,
            actual: mesh.vertex_count(),
        });
    }

    let rotation = principal_rotation(mesh);

    Ok(OrientationDescriptor {
        extents: mesh.bounds().extents(),
        euler_angles_deg: euler_xyz_deg(&rotation),
        rotation,
    })
}

/// Compute the rotation aligning principal inertia axes to world axes.
#[allow(clippy::cast_precision_loss)]
// Precision loss: vertex counts beyond 2^52 are unsupported
fn principal_rotation(mesh: &TriangleMesh) -> Matrix3<f64> {
    let count = mesh.vertices.len() as f64;

    let mut centroid = Vector3::zeros();
    for v in &mesh.vertices {
        centroid += v.position.coords;
    }
    centroid /= count;

    // Inertia tensor of unit point masses about the centroid
    let (mut ixx, mut iyy, mut izz) = (0.0f64, 0.0f64, 0.0f64);
    let (mut ixy, mut ixz, mut iyz) = (0.0f64, 0.0f64, 0.0f64);
    for v in &mesh.vertices {
        let d = v.position.coords - centroid;
        ixx += d.y.mul_add(d.y, d.z * d.z);
        iyy += d.x.mul_add(d.x, d.z * d.z);
        izz += d.x.mul_add(d.x, d.y * d.y);
        ixy -= d.x * d.y;
        ixz -= d.x * d.z;
        iyz -= d.y * d.z;
    }

    #[rustfmt::skip]
    let inertia = Matrix3::new(
        ixx, ixy, ixz,
        ixy, iyy, iyz,
        ixz, iyz, izz,
    ) / count;

    let eigen = SymmetricEigen::new(inertia);

    // Ascending moment: the axis the mass is most spread along comes first
    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| {
        eigen.eigenvalues[a]
            .partial_cmp(&eigen.eigenvalues[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut axes = [
        canonical_sign(eigen.eigenvectors.column(order[0]).into_owned()),
        canonical_sign(eigen.eigenvectors.column(order[1]).into_owned()),
        canonical_sign(eigen.eigenvectors.column(order[2]).into_owned()),
    ];

    // Right-handedness wins over the third axis's sign canonicalization
    if axes[0].cross(&axes[1]).dot(&axes[2]) < 0.0 {
        axes[2] = -axes[2];
    }

    Matrix3::from_rows(&[
        axes[0].transpose(),
        axes[1].transpose(),
        axes[2].transpose(),
    ])
}

/// Flip an eigenvector so its largest-magnitude component is positive.
///
/// Eigenvector signs are otherwise arbitrary; pinning them keeps the
/// descriptor (and every branch taken from it) deterministic.
fn canonical_sign(axis: Vector3<f64>) -> Vector3<f64> {
    let dominant = if axis.x.abs() >= axis.y.abs() && axis.x.abs() >= axis.z.abs() {
        axis.x
    } else if axis.y.abs() >= axis.z.abs() {
        axis.y
    } else {
        axis.z
    };
    if dominant < 0.0 { -axis } else { axis }
}

/// Extract Euler angles (extrinsic X-Y-Z, degrees) from a rotation matrix.
fn euler_xyz_deg(rotation: &Matrix3<f64>) -> Vector3<f64> {
    let (roll, pitch, yaw) = Rotation3::from_matrix_unchecked(*rotation).euler_angles();
    Vector3::new(roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees())
}
