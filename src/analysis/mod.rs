//! Photograph analysis module
//!
//! This module computes pixel statistics from decoded photographs and maps
//! them to a heuristic soil-level grade suggestion.

pub mod classifier;
pub mod stats;

pub use classifier::{classify_soil_level, soil_score};
pub use stats::{extract_image_stats, ImageStats};
