//! Default rates, multipliers, and heuristic constants
//!
//! This module contains the empirical defaults used by the pricing tables and
//! the soil-level heuristic. All of them are tuning choices, not laws; the
//! classifier constants can be overridden through [`crate::ClassifierConfig`].

/// Pricing table defaults
pub mod rates {
    /// Hourly rate for maintenance cleaning (per hour)
    pub const HOURLY_MAINTENANCE: f64 = 35.0;

    /// Hourly rate for special/deep cleaning (per hour)
    pub const HOURLY_SPECIAL: f64 = 60.0;

    /// Fallback hourly rate for unrecognized cleaning types
    pub const HOURLY_FALLBACK: f64 = 35.0;

    /// Fallback base cleaning minutes per m² for unrecognized room types
    pub const BASE_MIN_FALLBACK: f64 = 1.2;

    /// Fallback floor-covering multiplier
    pub const FLOOR_MUL_FALLBACK: f64 = 1.0;

    /// Default contract fractions (overhead / profit margin / VAT)
    pub const DEFAULT_OVERHEAD_RATE: f64 = 0.10;
    pub const DEFAULT_PROFIT_RATE: f64 = 0.15;
    pub const DEFAULT_VAT_RATE: f64 = 0.19;

    /// Default average travel speed in km/h
    pub const DEFAULT_TRAVEL_SPEED_KMH: f64 = 35.0;
}

/// Soil-level heuristic defaults
pub mod classifier {
    /// Score weight for luminance standard deviation (texture/dirt contrast)
    pub const WEIGHT_STD_LUMINANCE: f64 = 0.6;

    /// Score weight for inverted average luminance (darker reads dirtier)
    pub const WEIGHT_DARKNESS: f64 = 0.2;

    /// Score weight for average saturation proxy
    pub const WEIGHT_SATURATION: f64 = 0.2;

    /// Normalization range for luminance standard deviation
    pub const STD_LUM_RANGE: (f64, f64) = (0.0, 80.0);

    /// Normalization range for average luminance
    pub const AVG_LUM_RANGE: (f64, f64) = (20.0, 220.0);

    /// Normalization range for the saturation proxy
    pub const AVG_SAT_RANGE: (f64, f64) = (0.0, 120.0);

    /// Score thresholds separating grades S1|S2|S3|S4|S5, ascending
    pub const GRADE_THRESHOLDS: [f64; 4] = [0.18, 0.36, 0.58, 0.78];

    /// Default sampling grid edge length (grid has edge² samples)
    pub const DEFAULT_SAMPLE_SIZE: u32 = 192;
}

/// Photograph evidence handling
pub mod evidence {
    /// Maximum number of photographs analyzed per suggestion
    pub const MAX_EVIDENCE_IMAGES: usize = 5;
}
