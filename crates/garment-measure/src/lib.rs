//! Anthropometric landmark estimation for the garment fitting pipeline.
//!
//! Currently one landmark: shoulder width, estimated from the horizontal
//! span of a normalized body mesh's uppermost vertex band.
//!
//! # Coordinate System
//!
//! Measurements assume the canonical pose: Z up, X left/right, roughly
//! standing. Run meshes through normalization first.
//!
//! # Example
//!
//! ```
//! use garment_measure::{DEFAULT_BAND_RATIO, shoulder_width};
//! use garment_types::box_mesh;
//!
//! let body = box_mesh(0.5, 0.28, 1.8);
//! let width = shoulder_width(&body, DEFAULT_BAND_RATIO).unwrap();
//! assert!((width - 0.5).abs() < 1e-12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod shoulder;

pub use error::{MeasureError, MeasureResult};
pub use shoulder::{DEFAULT_BAND_RATIO, shoulder_width};
