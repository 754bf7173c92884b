//! 4x4 homogeneous transformation matrices.

use garment_types::TriangleMesh;
use nalgebra::{Matrix4, Vector3, Vector4};

/// A 3D transformation represented as a 4x4 homogeneous matrix.
///
/// Supports rotation, non-uniform scale, translation, and composition.
/// Applying a transform to a mesh returns a new mesh; the input is never
/// mutated, so concurrent fits can never alias each other's geometry.
///
/// # Example
///
/// ```
/// use garment_transform::Transform3D;
///
/// let rotate = Transform3D::rotation_x_deg(90.0);
/// let recenter = Transform3D::translation(0.0, 0.0, -1.0);
/// let combined = rotate.then(&recenter);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transform3D {
    /// The 4x4 transformation matrix in column-major order.
    matrix: Matrix4<f64>,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create a transformation from a 4x4 matrix.
    #[must_use]
    pub const fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// Create the identity transformation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation.
    #[must_use]
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vector3::new(tx, ty, tz)),
        }
    }

    /// Create a translation from a vector.
    #[must_use]
    pub fn from_translation(v: Vector3<f64>) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    /// Create a non-uniform scaling transformation about the origin.
    ///
    /// Per-axis factors on the diagonal, 1 in the homogeneous row.
    #[must_use]
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)),
        }
    }

    /// Create a non-uniform scaling transformation from a factor vector.
    #[must_use]
    pub fn from_scale(factors: Vector3<f64>) -> Self {
        Self::scale(factors.x, factors.y, factors.z)
    }

    /// Create a rotation around the X axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation_x(angle: f64) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            1.0,   0.0,    0.0, 0.0,
            0.0, cos_a, -sin_a, 0.0,
            0.0, sin_a,  cos_a, 0.0,
            0.0,   0.0,    0.0, 1.0,
        );
        Self { matrix }
    }

    /// Create a rotation around the X axis from degrees.
    ///
    /// Source assets declare their correction angle in degrees; this is the
    /// single degree of freedom the normalizer corrects for.
    #[must_use]
    pub fn rotation_x_deg(angle_deg: f64) -> Self {
        Self::rotation_x(angle_deg.to_radians())
    }

    /// Create a rotation around the Y axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation_y(angle: f64) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
             cos_a, 0.0, sin_a, 0.0,
               0.0, 1.0,   0.0, 0.0,
            -sin_a, 0.0, cos_a, 0.0,
               0.0, 0.0,   0.0, 1.0,
        );
        Self { matrix }
    }

    /// Create a rotation around the Z axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation_z(angle: f64) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            cos_a, -sin_a, 0.0, 0.0,
            sin_a,  cos_a, 0.0, 0.0,
              0.0,    0.0, 1.0, 0.0,
              0.0,    0.0, 0.0, 1.0,
        );
        Self { matrix }
    }

    /// Get the underlying 4x4 matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Compose this transformation with another (self then other).
    ///
    /// The result applies `self` first, then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Transform a point (applies translation).
    #[must_use]
    pub fn transform_point(&self, point: Vector3<f64>) -> Vector3<f64> {
        let p = Vector4::new(point.x, point.y, point.z, 1.0);
        let result = self.matrix * p;
        Vector3::new(result.x, result.y, result.z)
    }

    /// Transform a direction vector (ignores translation).
    #[must_use]
    pub fn transform_vector(&self, vector: Vector3<f64>) -> Vector3<f64> {
        let v = Vector4::new(vector.x, vector.y, vector.z, 0.0);
        let result = self.matrix * v;
        Vector3::new(result.x, result.y, result.z)
    }

    /// Transform a normal vector (uses inverse transpose).
    ///
    /// # Returns
    ///
    /// The transformed normal, or the original if the matrix is not
    /// invertible.
    #[must_use]
    pub fn transform_normal(&self, normal: Vector3<f64>) -> Vector3<f64> {
        let m = self.matrix.fixed_view::<3, 3>(0, 0);
        m.try_inverse()
            .map_or(normal, |inv| inv.transpose() * normal)
    }

    /// Apply this transformation to all vertices of a mesh.
    ///
    /// Returns a new mesh with transformed positions and normals; texture
    /// coordinates pass through unchanged.
    #[must_use]
    pub fn apply_to_mesh(&self, mesh: &TriangleMesh) -> TriangleMesh {
        let mut result = mesh.clone();

        for vertex in &mut result.vertices {
            let pos = Vector3::new(vertex.position.x, vertex.position.y, vertex.position.z);
            let transformed = self.transform_point(pos);
            vertex.position.x = transformed.x;
            vertex.position.y = transformed.y;
            vertex.position.z = transformed.z;

            if let Some(normal) = vertex.attributes.normal {
                let transformed_normal = self.transform_normal(normal);
                if let Some(normalized) = transformed_normal.try_normalize(f64::EPSILON) {
                    vertex.attributes.normal = Some(normalized);
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use garment_types::Vertex;
    use std::f64::consts::PI;

    #[test]
    fn identity_transformation() {
        let t = Transform3D::identity();
        let result = t.transform_point(Vector3::new(1.0, 2.0, 3.0));

        assert_relative_eq!(result.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(result.y, 2.0, epsilon = 1e-10);
        assert_relative_eq!(result.z, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn translation_moves_points_not_vectors() {
        let t = Transform3D::translation(10.0, 20.0, 30.0);

        let p = t.transform_point(Vector3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(p.x, 11.0, epsilon = 1e-10);
        assert_relative_eq!(p.y, 22.0, epsilon = 1e-10);
        assert_relative_eq!(p.z, 33.0, epsilon = 1e-10);

        let v = t.transform_vector(Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn non_uniform_scale() {
        let t = Transform3D::from_scale(Vector3::new(2.0, 3.0, 4.0));
        let result = t.transform_point(Vector3::new(1.0, 1.0, 1.0));

        assert_relative_eq!(result.x, 2.0, epsilon = 1e-10);
        assert_relative_eq!(result.y, 3.0, epsilon = 1e-10);
        assert_relative_eq!(result.z, 4.0, epsilon = 1e-10);
    }

    #[test]
    fn rotation_x_90_degrees() {
        let t = Transform3D::rotation_x(PI / 2.0);
        let result = t.transform_point(Vector3::new(0.0, 1.0, 0.0));

        // Y axis rotates to Z axis
        assert_relative_eq!(result.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(result.y, 0.0, epsilon = 1e-10);
        assert_relative_eq!(result.z, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn rotation_x_deg_matches_radians() {
        let deg = Transform3D::rotation_x_deg(90.0);
        let rad = Transform3D::rotation_x(PI / 2.0);
        let p = Vector3::new(0.3, -1.2, 0.7);

        let a = deg.transform_point(p);
        let b = rad.transform_point(p);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
    }

    #[test]
    fn rotation_y_90_degrees() {
        let t = Transform3D::rotation_y(PI / 2.0);
        let result = t.transform_point(Vector3::new(1.0, 0.0, 0.0));

        // X axis rotates to -Z axis
        assert_relative_eq!(result.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(result.z, -1.0, epsilon = 1e-10);
    }

    #[test]
    fn rotation_z_90_degrees() {
        let t = Transform3D::rotation_z(PI / 2.0);
        let result = t.transform_point(Vector3::new(1.0, 0.0, 0.0));

        assert_relative_eq!(result.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(result.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn composition_applies_in_order() {
        let translate = Transform3D::translation(1.0, 0.0, 0.0);
        let scale = Transform3D::scale(2.0, 2.0, 2.0);

        // Translate then scale: (0,0,0) -> (1,0,0) -> (2,0,0)
        let combined = translate.then(&scale);
        let result = combined.transform_point(Vector3::zeros());
        assert_relative_eq!(result.x, 2.0, epsilon = 1e-10);
    }

    #[test]
    fn apply_to_mesh_leaves_input_untouched() {
        let mut mesh = TriangleMesh::new();
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0));
        mesh.faces.push([0, 1, 2]);

        let t = Transform3D::translation(10.0, 20.0, 30.0);
        let transformed = t.apply_to_mesh(&mesh);

        assert_relative_eq!(transformed.vertices[0].position.x, 11.0, epsilon = 1e-10);
        assert_relative_eq!(transformed.vertices[1].position.y, 21.0, epsilon = 1e-10);
        // Input stays where it was
        assert_relative_eq!(mesh.vertices[0].position.x, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn apply_to_mesh_rotates_normals() {
        let mut mesh = TriangleMesh::new();
        mesh.vertices.push(Vertex::with_normal(
            garment_types::Point3::new(1.0, 0.0, 0.0),
            Vector3::x(),
        ));
        mesh.faces.push([0, 0, 0]);

        let t = Transform3D::rotation_z(PI / 2.0);
        let transformed = t.apply_to_mesh(&mesh);

        let normal = transformed.vertices[0]
            .attributes
            .normal
            .unwrap_or_else(Vector3::zeros);
        assert_relative_eq!(normal.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(normal.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn transform_normal_non_invertible_returns_original() {
        let t = Transform3D::scale(0.0, 0.0, 0.0);
        let result = t.transform_normal(Vector3::z());
        assert_relative_eq!(result.z, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn default_is_identity() {
        let t = Transform3D::default();
        let result = t.transform_point(Vector3::new(5.0, 10.0, 15.0));
        assert_relative_eq!(result.x, 5.0, epsilon = 1e-10);
        assert_relative_eq!(result.y, 10.0, epsilon = 1e-10);
        assert_relative_eq!(result.z, 15.0, epsilon = 1e-10);
    }

    #[test]
    fn matrix_accessor() {
        let t = Transform3D::identity();
        let m = t.matrix();
        assert_relative_eq!(m[(0, 0)], 1.0, epsilon = 1e-10);
        assert_relative_eq!(m[(0, 1)], 0.0, epsilon = 1e-10);
    }
}
