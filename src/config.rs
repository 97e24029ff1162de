//! Configuration for the soil-level suggestion heuristic.
//!
//! The score weights, normalization ranges, and grade thresholds are
//! empirically chosen constants with no derivation behind them, so they are
//! kept as configuration rather than hard-coded literals.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use clean_quote::ClassifierConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ClassifierConfig::from_json_file(Path::new("classifier.json"))?;
//!
//! // Or use defaults
//! let config = ClassifierConfig::default_baseline();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::classifier;

/// Complete configuration for the soil-level classifier.
///
/// Can be serialized to/from JSON for reproducible tuning experiments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Edge length of the sampling grid; a photo contributes edge² samples
    pub sample_size: u32,

    /// Relative weight of each score component
    pub weights: ScoreWeights,

    /// Normalization range for luminance standard deviation
    pub std_luminance: NormRange,

    /// Normalization range for average luminance (inverted in the score)
    pub avg_luminance: NormRange,

    /// Normalization range for the average saturation proxy
    pub avg_saturation: NormRange,

    /// Ascending score thresholds separating grades S1|S2|S3|S4|S5
    pub grade_thresholds: [f64; 4],
}

/// Score component weights.
///
/// Luminance variance dominates: texture and dirt contrast are the strongest
/// visual signal. Darkness and saturation contribute moderately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight of normalized luminance standard deviation
    pub std_luminance: f64,

    /// Weight of inverted normalized average luminance
    pub darkness: f64,

    /// Weight of normalized average saturation
    pub saturation: f64,
}

/// Linear normalization range.
///
/// Values are mapped through `clamp((v - lo) / (hi - lo), 0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormRange {
    pub lo: f64,
    pub hi: f64,
}

impl NormRange {
    /// Normalize a value into [0, 1] over this range
    pub fn normalize(&self, v: f64) -> f64 {
        let span = self.hi - self.lo;
        if span == 0.0 {
            return 0.0;
        }
        ((v - self.lo) / span).clamp(0.0, 1.0)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::default_baseline()
    }
}

impl ClassifierConfig {
    /// Create the baseline configuration with the documented empirical defaults
    pub fn default_baseline() -> Self {
        Self {
            sample_size: classifier::DEFAULT_SAMPLE_SIZE,
            weights: ScoreWeights {
                std_luminance: classifier::WEIGHT_STD_LUMINANCE,
                darkness: classifier::WEIGHT_DARKNESS,
                saturation: classifier::WEIGHT_SATURATION,
            },
            std_luminance: NormRange {
                lo: classifier::STD_LUM_RANGE.0,
                hi: classifier::STD_LUM_RANGE.1,
            },
            avg_luminance: NormRange {
                lo: classifier::AVG_LUM_RANGE.0,
                hi: classifier::AVG_LUM_RANGE.1,
            },
            avg_saturation: NormRange {
                lo: classifier::AVG_SAT_RANGE.0,
                hi: classifier::AVG_SAT_RANGE.1,
            },
            grade_thresholds: classifier::GRADE_THRESHOLDS,
        }
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
