//! Pixel statistics extraction from decoded photographs
//!
//! Computes average luminance, luminance standard deviation, and an average
//! saturation proxy over a fixed N×N sampling grid:
//! - The grid covers the image via uniform scale-to-cover plus center crop,
//!   so statistics are comparable across photo resolutions and aspect ratios
//! - Luminance uses the ITU-R BT.709 perceptual luma weights
//! - Saturation is approximated by the per-pixel max-minus-min channel range
//! - The standard deviation is the population form, sqrt(E[l²] − E[l]²)
//!
//! The extractor consumes an already-decoded pixel buffer; all file and
//! format handling lives in [`crate::image_loader`].

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, Result};

/// BT.709 luma weights for red, green, and blue
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// Per-photo pixel statistics
///
/// Ephemeral: computed once per classifier invocation, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageStats {
    /// Average BT.709 luminance over the sample grid, in [0, 255]
    pub avg_luminance: f64,
    /// Population standard deviation of luminance
    pub std_luminance: f64,
    /// Average max-minus-min channel range, in [0, 255]
    pub avg_saturation: f64,
}

/// Extract pixel statistics from a decoded photograph.
///
/// Samples the image on a `sample_size` × `sample_size` grid after uniform
/// scale-to-cover and center crop, then accumulates luminance and saturation
/// statistics. Deterministic for identical pixel data and grid size.
///
/// # Arguments
///
/// * `img` - Decoded RGB pixel buffer
/// * `sample_size` - Edge length of the sampling grid, ≥ 1
///
/// # Errors
///
/// Returns `EstimateError::InvalidParameter` for a zero grid size and
/// `EstimateError::ImageLoad` for an empty pixel buffer.
pub fn extract_image_stats(img: &RgbImage, sample_size: u32) -> Result<ImageStats> {
    if sample_size == 0 {
        return Err(EstimateError::InvalidParameter {
            parameter: "sample_size".into(),
            value: "0".into(),
        });
    }

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(EstimateError::image_load_msg(
            "Image has no pixels to sample",
        ));
    }

    let n = sample_size as f64;
    // Scale-to-cover: the scaled image fills the grid in both dimensions,
    // overflow is cropped symmetrically
    let scale = (n / width as f64).max(n / height as f64);
    let offset_x = (n - width as f64 * scale) / 2.0;
    let offset_y = (n - height as f64 * scale) / 2.0;

    let mut sum_lum = 0.0;
    let mut sum_lum_sq = 0.0;
    let mut sum_sat = 0.0;

    for gy in 0..sample_size {
        for gx in 0..sample_size {
            let src_x = ((gx as f64 + 0.5 - offset_x) / scale).floor();
            let src_y = ((gy as f64 + 0.5 - offset_y) / scale).floor();
            let px = (src_x.max(0.0) as u32).min(width - 1);
            let py = (src_y.max(0.0) as u32).min(height - 1);

            let [r, g, b] = img.get_pixel(px, py).0;
            let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));

            let lum = LUMA_R * r + LUMA_G * g + LUMA_B * b;
            let sat = r.max(g).max(b) - r.min(g).min(b);

            sum_lum += lum;
            sum_lum_sq += lum * lum;
            sum_sat += sat;
        }
    }

    let samples = n * n;
    let avg_luminance = sum_lum / samples;
    // Population variance; clamp against negative rounding residue
    let variance = (sum_lum_sq / samples - avg_luminance * avg_luminance).max(0.0);

    Ok(ImageStats {
        avg_luminance,
        std_luminance: variance.sqrt(),
        avg_saturation: sum_sat / samples,
    })
}
