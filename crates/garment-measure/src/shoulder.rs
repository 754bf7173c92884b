//! Shoulder-width estimation from the upper vertex band.

use garment_types::TriangleMesh;

use crate::error::{MeasureError, MeasureResult};

/// Default fraction of the Z span below the band threshold.
///
/// 0.85 places the band over the shoulder/neck region of a standing
/// humanoid without catching raised arms in typical rest poses.
pub const DEFAULT_BAND_RATIO: f64 = 0.85;

/// Estimate shoulder width from a normalized body mesh.
///
/// Selects the vertices with `z >= z_min + ratio * (z_max - z_min)` (the
/// upper band) and returns their horizontal span `max(x) - min(x)`.
///
/// This is a deliberately coarse heuristic: it assumes the canonical pose
/// (upright, Z up, X left/right) with arms below the band. Meshes that do
/// not conform are the reason the fitter classifies orientation before
/// measuring.
///
/// # Errors
///
/// - [`MeasureError::EmptyMesh`] if the mesh has no vertices.
/// - [`MeasureError::NoUpperBodyVertices`] if no vertex reaches the
///   threshold (possible when `z_threshold_ratio > 1`).
///
/// # Example
///
/// ```
/// use garment_measure::shoulder_width;
/// use garment_types::box_mesh;
///
/// let body = box_mesh(0.5, 0.28, 1.8);
/// let width = shoulder_width(&body, 0.85).unwrap();
/// assert!((width - 0.5).abs() < 1e-12);
/// ```
pub fn shoulder_width(mesh: &TriangleMesh, z_threshold_ratio: f64) -> MeasureResult<f64> {
    if mesh.vertices.is_empty() {
        return Err(MeasureError::EmptyMesh);
    }

    let bounds = mesh.bounds();
    let (z_min, z_max) = (bounds.min.z, bounds.max.z);
    let threshold = (z_max - z_min).mul_add(z_threshold_ratio, z_min);

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut selected = 0usize;

    for vertex in &mesh.vertices {
        if vertex.position.z >= threshold {
            x_min = x_min.min(vertex.position.x);
            x_max = x_max.max(vertex.position.x);
            selected += 1;
        }
    }

    if selected == 0 {
        return Err(MeasureError::NoUpperBodyVertices { threshold, z_max });
    }

    Ok(x_max - x_min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use garment_types::Vertex;

    /// Mesh with a wide base and a narrower top band.
    fn tapered_mesh() -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        // Base at z = 0, span 2.0
        mesh.vertices.push(Vertex::from_coords(-1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        // Mid at z = 0.5
        mesh.vertices.push(Vertex::from_coords(-0.8, 0.0, 0.5));
        mesh.vertices.push(Vertex::from_coords(0.8, 0.0, 0.5));
        // Top band at z = 0.9 and z = 1.0, span 0.6
        mesh.vertices.push(Vertex::from_coords(-0.3, 0.0, 0.9));
        mesh.vertices.push(Vertex::from_coords(0.3, 0.0, 0.9));
        mesh.vertices.push(Vertex::from_coords(-0.1, 0.0, 1.0));
        mesh.vertices.push(Vertex::from_coords(0.1, 0.0, 1.0));
        mesh.faces.push([0, 1, 2]);
        mesh.faces.push([2, 3, 4]);
        mesh.faces.push([4, 5, 6]);
        mesh
    }

    #[test]
    fn width_is_band_span_not_full_span() {
        let mesh = tapered_mesh();
        // Threshold at z = 0.85: selects the four top-band vertices
        let width = shoulder_width(&mesh, 0.85).unwrap();
        assert_relative_eq!(width, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn vertices_exactly_at_threshold_are_included() {
        let mesh = tapered_mesh();
        // Threshold exactly at z = 0.9: the z >= comparison keeps that row
        let width = shoulder_width(&mesh, 0.9).unwrap();
        assert_relative_eq!(width, 0.6, epsilon = 1e-12);

        // Just above, only the z = 1.0 pair remains
        let width = shoulder_width(&mesh, 0.95).unwrap();
        assert_relative_eq!(width, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn threshold_above_top_fails() {
        let mesh = tapered_mesh();
        match shoulder_width(&mesh, 1.5) {
            Err(MeasureError::NoUpperBodyVertices { threshold, z_max }) => {
                assert!(threshold > z_max);
            }
            other => panic!("expected NoUpperBodyVertices, got {other:?}"),
        }
    }

    #[test]
    fn ratio_one_selects_the_top() {
        let mesh = tapered_mesh();
        let width = shoulder_width(&mesh, 1.0).unwrap();
        assert_relative_eq!(width, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn empty_mesh_fails() {
        let mesh = TriangleMesh::new();
        assert!(matches!(
            shoulder_width(&mesh, 0.85),
            Err(MeasureError::EmptyMesh)
        ));
    }

    #[test]
    fn flat_mesh_zero_span_band() {
        // All vertices at one Z: the whole mesh is the band
        let mut mesh = TriangleMesh::new();
        mesh.vertices.push(Vertex::from_coords(-2.0, 0.0, 1.0));
        mesh.vertices.push(Vertex::from_coords(3.0, 0.0, 1.0));
        mesh.faces.push([0, 1, 0]);

        let width = shoulder_width(&mesh, 0.85).unwrap();
        assert_relative_eq!(width, 5.0, epsilon = 1e-12);
    }
}
