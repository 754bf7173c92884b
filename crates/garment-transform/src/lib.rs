//! Mesh transformation, normalization, and orientation analysis.
//!
//! This crate provides:
//! - [`Transform3D`] - 4x4 homogeneous transforms (rotate, scale, translate)
//! - [`normalize`] - canonicalize an arbitrary mesh source into a target
//!   orientation and size
//! - [`analyze`] - principal-inertia orientation of a mesh, for pose
//!   classification
//!
//! # Example
//!
//! ```
//! use garment_transform::{Transform3D, normalize};
//! use garment_types::{MeshSource, Vector3, box_mesh};
//!
//! // Rescale a box to target extents
//! let source = MeshSource::from(box_mesh(2.0, 2.0, 2.0));
//! let mesh = normalize(source, Vector3::new(1.5, 0.28, 1.8), 0.0).unwrap();
//! let extents = mesh.bounds().extents();
//! assert!((extents.x - 1.5).abs() < 1e-9);
//!
//! // Or apply a transform directly
//! let transform = Transform3D::translation(1.0, 2.0, 3.0);
//! let moved = transform.apply_to_mesh(&mesh);
//! assert!((moved.bounds().center().z - mesh.bounds().center().z - 3.0).abs() < 1e-9);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod normalize;
mod orientation;
mod transform;

pub use error::{TransformError, TransformResult};
pub use normalize::{MIN_EXTENT, normalize, normalize_mesh};
pub use orientation::{OrientationDescriptor, analyze, analyze_mesh};
pub use transform::Transform3D;
