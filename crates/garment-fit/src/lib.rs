//! Garment-to-body fitting.
//!
//! Orchestrates the full pipeline: classify how the body asset was
//! authored, normalize it into the canonical pose, measure shoulder width
//! from the upper vertex band, size the garment from that landmark, and
//! position it over the torso.
//!
//! Each invocation is independent and stateless; inputs are consumed by
//! value, so concurrent fits can never share a mesh. Any failure (empty
//! geometry, empty upper band) is fatal to that single invocation and
//! propagates to the caller, which decides whether to continue with the
//! next body/garment pair. No retries: the inputs are deterministic, so
//! retrying cannot change the outcome.
//!
//! # Example
//!
//! ```
//! use garment_fit::{FitParams, fit_garment};
//! use garment_types::{MeshSource, box_mesh};
//!
//! let body = MeshSource::from(box_mesh(0.5, 0.25, 1.75));
//! let garment = MeshSource::from(box_mesh(1.0, 0.5, 1.0));
//!
//! let fit = fit_garment(body, garment, &FitParams::default()).unwrap();
//! assert!(fit.shoulder_width > 0.0);
//!
//! // Hand the pair to the viewer collaborator
//! let (body_out, garment_out) = fit.into_meshes();
//! assert!(!body_out.is_empty());
//! assert!(!garment_out.is_empty());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod fit;
mod params;
mod result;

pub use error::{FitError, FitResult};
pub use fit::fit_garment;
pub use params::FitParams;
pub use result::{BodyPose, GarmentFit};
