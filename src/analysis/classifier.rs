//! Heuristic soil-level classification
//!
//! Combines the per-photo statistics into a scalar dirtiness score and maps
//! the worst score of a batch to a discrete grade:
//! - High luminance variance (texture/dirt contrast) dominates the score
//! - Low overall brightness contributes moderately, inverted
//! - High color saturation contributes moderately
//!
//! A job is graded by its dirtiest-looking sampled evidence, so the batch
//! reduction takes the maximum per-image score, not the average.

use super::stats::ImageStats;
use crate::config::ClassifierConfig;
use crate::error::{EstimateError, Result};
use crate::pricing::categories::SoilGrade;

/// Compute the scalar dirtiness score for one photograph, in [0, 1]
pub fn soil_score(stats: &ImageStats, config: &ClassifierConfig) -> f64 {
    let w = &config.weights;
    w.std_luminance * config.std_luminance.normalize(stats.std_luminance)
        + w.darkness * (1.0 - config.avg_luminance.normalize(stats.avg_luminance))
        + w.saturation * config.avg_saturation.normalize(stats.avg_saturation)
}

/// Map a score to its grade via the ascending configured thresholds
fn score_to_grade(score: f64, thresholds: &[f64; 4]) -> SoilGrade {
    let mut grade = SoilGrade::S5;
    for (i, threshold) in thresholds.iter().enumerate() {
        if score < *threshold {
            grade = SoilGrade::ALL[i];
            break;
        }
    }
    grade
}

/// Classify a batch of photograph statistics into a soil-level grade.
///
/// Folds the per-image scores with a max reduction and maps the worst score
/// to a grade. The fold is explicit over a possibly-empty sequence: an empty
/// batch is a defined failure, not a sentinel-driven default.
///
/// # Errors
///
/// Returns `EstimateError::NoEvidence` when `stats` is empty; the caller is
/// responsible for prompting for photographs first.
pub fn classify_soil_level(stats: &[ImageStats], config: &ClassifierConfig) -> Result<SoilGrade> {
    let worst = stats
        .iter()
        .map(|s| soil_score(s, config))
        .fold(None, |acc: Option<f64>, score| match acc {
            Some(best) if best >= score => Some(best),
            _ => Some(score),
        })
        .ok_or(EstimateError::NoEvidence)?;

    Ok(score_to_grade(worst, &config.grade_thresholds))
}
