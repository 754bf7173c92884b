//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (AABB).
///
/// A derived, read-only view over a mesh: minimum and maximum corners plus
/// the measurements the fitting pipeline reads from them (extents and
/// centroid). Recomputed on demand after every transform, never cached.
///
/// # Example
///
/// ```
/// use garment_types::{Aabb, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(-1.0, -1.0, 0.0),
///     Point3::new(1.0, 1.0, 2.0),
/// );
///
/// assert_eq!(aabb.extents().z, 2.0);
/// assert_eq!(aabb.center().z, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a new AABB from minimum and maximum corners.
    ///
    /// The corners are swapped per axis if min > max.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create an empty (invalid) AABB.
    ///
    /// An empty AABB has min > max, which makes it a valid starting point
    /// for expanding to include points.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create an AABB from an iterator of points.
    ///
    /// Returns an empty AABB if the iterator is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use garment_types::{Aabb, Point3};
    ///
    /// let points = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(10.0, 5.0, 3.0),
    ///     Point3::new(-2.0, 8.0, 1.0),
    /// ];
    ///
    /// let aabb = Aabb::from_points(points.iter());
    /// assert_eq!(aabb.min, Point3::new(-2.0, 0.0, 0.0));
    /// assert_eq!(aabb.max, Point3::new(10.0, 8.0, 3.0));
    /// ```
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Check if the AABB is empty (min > max on any axis).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Get the extents (max − min per axis).
    #[inline]
    #[must_use]
    pub fn extents(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Get the centroid ((min + max) / 2).
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            f64::midpoint(self.min.x, self.max.x),
            f64::midpoint(self.min.y, self.max.y),
            f64::midpoint(self.min.z, self.max.z),
        )
    }

    /// Expand the AABB in place to include a point.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_covers_all() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 5.0, 3.0),
            Point3::new(-2.0, 8.0, 1.0),
        ];

        let aabb = Aabb::from_points(points.iter());
        assert!((aabb.min.x - (-2.0)).abs() < f64::EPSILON);
        assert!((aabb.min.y - 0.0).abs() < f64::EPSILON);
        assert!((aabb.max.x - 10.0).abs() < f64::EPSILON);
        assert!((aabb.max.y - 8.0).abs() < f64::EPSILON);
        assert!((aabb.max.z - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_aabb() {
        let aabb = Aabb::empty();
        assert!(aabb.is_empty());

        let none: [Point3<f64>; 0] = [];
        assert!(Aabb::from_points(none.iter()).is_empty());
    }

    #[test]
    fn corners_are_corrected() {
        let aabb = Aabb::new(Point3::new(5.0, 0.0, 2.0), Point3::new(1.0, 3.0, -1.0));
        assert!(!aabb.is_empty());
        assert!((aabb.min.x - 1.0).abs() < f64::EPSILON);
        assert!((aabb.max.x - 5.0).abs() < f64::EPSILON);
        assert!((aabb.min.z - (-1.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn extents_and_center() {
        let aabb = Aabb::new(Point3::new(-1.0, 0.0, 0.0), Point3::new(3.0, 2.0, 4.0));
        let extents = aabb.extents();
        assert!((extents.x - 4.0).abs() < f64::EPSILON);
        assert!((extents.y - 2.0).abs() < f64::EPSILON);
        assert!((extents.z - 4.0).abs() < f64::EPSILON);

        let center = aabb.center();
        assert!((center.x - 1.0).abs() < f64::EPSILON);
        assert!((center.y - 1.0).abs() < f64::EPSILON);
        assert!((center.z - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn expand_to_include_grows() {
        let mut aabb = Aabb::empty();
        aabb.expand_to_include(&Point3::new(1.0, 2.0, 3.0));
        assert!(!aabb.is_empty());
        assert!((aabb.extents().norm() - 0.0).abs() < f64::EPSILON);

        aabb.expand_to_include(&Point3::new(-1.0, 2.0, 3.0));
        assert!((aabb.extents().x - 2.0).abs() < f64::EPSILON);
    }
}
