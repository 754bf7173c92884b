//! Fitting parameters and calibration constants.

use garment_types::Vector3;

/// Parameters for a fitting invocation.
///
/// The defaults are calibration constants of the body/garment asset corpus
/// this pipeline was tuned against, not universal human proportions. They
/// live here as named constants so recalibration stays localized; change
/// them only with new measurement data.
///
/// # Examples
///
/// ```
/// use garment_fit::FitParams;
///
/// let params = FitParams::default();
/// assert_eq!(params.wide_shoulder_cutoff, FitParams::DEFAULT_WIDE_SHOULDER_CUTOFF);
/// ```
///
/// Individual values can be overridden builder-style:
///
/// ```
/// use garment_fit::FitParams;
///
/// let params = FitParams::new()
///     .with_shoulder_band_ratio(0.9)
///     .with_garment_vertical_offset(0.3);
/// assert_eq!(params.shoulder_band_ratio, 0.9);
/// ```
#[derive(Debug, Clone)]
pub struct FitParams {
    /// Canonical body dimensions for bodies authored upright.
    pub upright_body_dims: Vector3<f64>,

    /// Canonical body dimensions for bodies authored lying on their side.
    pub sideways_body_dims: Vector3<f64>,

    /// X-axis correction applied to side-lying bodies, in degrees.
    pub sideways_rotation_deg: f64,

    /// Fraction of the body's Z span below the shoulder band threshold.
    pub shoulder_band_ratio: f64,

    /// Shoulder width above which the wide-regime multiplier applies.
    /// The boundary itself takes the narrow regime.
    pub wide_shoulder_cutoff: f64,

    /// Garment width multiplier for wide shoulder bands.
    pub wide_shoulder_scale: f64,

    /// Garment width multiplier for narrow shoulder bands.
    pub narrow_shoulder_scale: f64,

    /// Target garment depth (Y extent).
    pub garment_depth: f64,

    /// Target garment height (Z extent).
    pub garment_height: f64,

    /// X-axis correction applied to garment assets, in degrees.
    /// Garments are authored in a different canonical orientation than
    /// bodies.
    pub garment_rotation_deg: f64,

    /// Fixed vertical offset placing the garment over the torso.
    /// Calibrated against the canonical body pose; there is no dynamic
    /// vertical alignment.
    pub garment_vertical_offset: f64,
}

impl FitParams {
    /// Default canonical dimensions for upright bodies.
    pub const DEFAULT_UPRIGHT_BODY_DIMS: [f64; 3] = [1.5, 0.28, 1.8];

    /// Default canonical dimensions for side-lying bodies.
    pub const DEFAULT_SIDEWAYS_BODY_DIMS: [f64; 3] = [0.8, 0.28, 1.8];

    /// Default correction rotation for side-lying bodies.
    pub const DEFAULT_SIDEWAYS_ROTATION_DEG: f64 = 90.0;

    /// Default cutoff between the narrow and wide shoulder regimes.
    pub const DEFAULT_WIDE_SHOULDER_CUTOFF: f64 = 0.4;

    /// Default multiplier for shoulder widths above the cutoff.
    pub const DEFAULT_WIDE_SHOULDER_SCALE: f64 = 2.7;

    /// Default multiplier for shoulder widths at or below the cutoff.
    pub const DEFAULT_NARROW_SHOULDER_SCALE: f64 = 3.6;

    /// Default garment depth.
    pub const DEFAULT_GARMENT_DEPTH: f64 = 0.45;

    /// Default garment height.
    pub const DEFAULT_GARMENT_HEIGHT: f64 = 0.85;

    /// Default correction rotation for garment assets.
    pub const DEFAULT_GARMENT_ROTATION_DEG: f64 = 90.0;

    /// Default vertical garment offset.
    pub const DEFAULT_GARMENT_VERTICAL_OFFSET: f64 = 0.24;

    /// Create parameters with the corpus calibration defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canonical dimensions for upright bodies.
    #[must_use]
    pub const fn with_upright_body_dims(mut self, dims: Vector3<f64>) -> Self {
        self.upright_body_dims = dims;
        self
    }

    /// Set the canonical dimensions for side-lying bodies.
    #[must_use]
    pub const fn with_sideways_body_dims(mut self, dims: Vector3<f64>) -> Self {
        self.sideways_body_dims = dims;
        self
    }

    /// Set the shoulder band ratio.
    #[must_use]
    pub const fn with_shoulder_band_ratio(mut self, ratio: f64) -> Self {
        self.shoulder_band_ratio = ratio;
        self
    }

    /// Set the target garment depth and height.
    #[must_use]
    pub const fn with_garment_profile(mut self, depth: f64, height: f64) -> Self {
        self.garment_depth = depth;
        self.garment_height = height;
        self
    }

    /// Set the vertical garment offset.
    #[must_use]
    pub const fn with_garment_vertical_offset(mut self, offset: f64) -> Self {
        self.garment_vertical_offset = offset;
        self
    }
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            upright_body_dims: Vector3::from_column_slice(&Self::DEFAULT_UPRIGHT_BODY_DIMS),
            sideways_body_dims: Vector3::from_column_slice(&Self::DEFAULT_SIDEWAYS_BODY_DIMS),
            sideways_rotation_deg: Self::DEFAULT_SIDEWAYS_ROTATION_DEG,
            shoulder_band_ratio: garment_measure::DEFAULT_BAND_RATIO,
            wide_shoulder_cutoff: Self::DEFAULT_WIDE_SHOULDER_CUTOFF,
            wide_shoulder_scale: Self::DEFAULT_WIDE_SHOULDER_SCALE,
            narrow_shoulder_scale: Self::DEFAULT_NARROW_SHOULDER_SCALE,
            garment_depth: Self::DEFAULT_GARMENT_DEPTH,
            garment_height: Self::DEFAULT_GARMENT_HEIGHT,
            garment_rotation_deg: Self::DEFAULT_GARMENT_ROTATION_DEG,
            garment_vertical_offset: Self::DEFAULT_GARMENT_VERTICAL_OFFSET,
        }
    }
}
