//! Core geometry types for the garment fitting pipeline.
//!
//! This crate provides the foundational types the rest of the workspace
//! builds on:
//!
//! - [`Vertex`] - A point in 3D space with optional attributes
//! - [`TriangleMesh`] - A triangle mesh with indexed vertices
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`MeshCollection`] - Ordered, named mesh parts as returned by scene
//!   loaders
//! - [`MeshSource`] - Either a single mesh or a collection, with an explicit
//!   flatten step
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`. The fitting
//! pipeline's calibration constants assume meters.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**:
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up/down)
//!
//! A body mesh in canonical pose stands along +Z with shoulders spanning X.
//!
//! # Example
//!
//! ```
//! use garment_types::{TriangleMesh, Vertex, Point3};
//!
//! let mut mesh = TriangleMesh::new();
//! mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(0.5, 1.0, 0.0)));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod error;
mod mesh;
mod source;
mod vertex;

// Re-export core types
pub use bounds::Aabb;
pub use error::{GeometryError, GeometryResult};
pub use mesh::{TriangleMesh, box_mesh};
pub use source::{MeshCollection, MeshSource};
pub use vertex::{Vertex, VertexAttributes};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
