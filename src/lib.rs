//! # Clean Quote
//!
//! A Rust crate for estimating price and duration of multi-room cleaning
//! jobs, with a heuristic soil-level suggestion derived from photographs.
//!
//! This library provides:
//! - Per-room time and cost calculation from physical and contract parameters
//! - Quote aggregation with team-adjusted completion time
//! - Pixel-statistics extraction from photographs (luminance, contrast,
//!   saturation over a fixed sampling grid)
//! - A tunable heuristic mapping those statistics to a soil grade S1..S5
//!
//! ## Example
//!
//! ```rust
//! use clean_quote::{aggregate, calc_room, ContractParams, RoomInput, RoomType, SoilGrade};
//!
//! let room = RoomInput {
//!     area_m2: 20.0,
//!     room_type: RoomType::Kitchen,
//!     soil: SoilGrade::S3,
//!     ..RoomInput::default()
//! };
//! let contract = ContractParams::default();
//! let result = calc_room(&room, &contract);
//! let totals = aggregate(&[result], contract.team_size);
//! assert!(totals.gross > 0.0);
//! ```

use std::path::Path;

pub mod analysis;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;
pub mod pricing;

pub use analysis::{classify_soil_level, extract_image_stats, soil_score, ImageStats};
pub use config::{ClassifierConfig, NormRange, ScoreWeights};
pub use error::{EstimateError, Result};
pub use pricing::{
    aggregate, calc_room, CleaningType, ContractParams, FloorCovering, QuoteTotals, RoomInput,
    RoomResult, RoomType, SoilGrade,
};
pub use pricing::quote::finish_hours;

/// Suggest a soil-level grade from photographs on disk.
///
/// This is the end-to-end entry point for the image-analysis path: it decodes
/// each photo, extracts pixel statistics, and classifies the batch. At most
/// the first [`constants::evidence::MAX_EVIDENCE_IMAGES`] photographs are
/// analyzed.
///
/// # Arguments
///
/// * `paths` - Photograph files, in the order the user supplied them
/// * `config` - Classifier tuning parameters
///
/// # Errors
///
/// Returns `EstimateError` if:
/// - `paths` is empty (`NoEvidence`)
/// - Any of the analyzed photographs cannot be decoded (`ImageLoad`)
///
/// Both are recoverable: the quote stays computable, the room simply gets no
/// suggestion.
pub fn suggest_soil_level<P: AsRef<Path>>(
    paths: &[P],
    config: &ClassifierConfig,
) -> Result<SoilGrade> {
    if paths.is_empty() {
        return Err(EstimateError::NoEvidence);
    }

    let mut stats = Vec::with_capacity(paths.len().min(constants::evidence::MAX_EVIDENCE_IMAGES));
    for path in paths.iter().take(constants::evidence::MAX_EVIDENCE_IMAGES) {
        let img = image_loader::load_image(path.as_ref())?;
        stats.push(extract_image_stats(&img, config.sample_size)?);
    }

    classify_soil_level(&stats, config)
}
