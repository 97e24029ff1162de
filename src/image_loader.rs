//! Image loading boundary for photograph analysis
//!
//! This module is the only place that touches files and codecs; everything
//! downstream consumes already-decoded RGB buffers. Decoding is delegated to
//! the `image` crate (JPEG, PNG, GIF, WebP, TIFF, BMP, and friends).

use std::path::Path;

use image::RgbImage;

use crate::error::{EstimateError, Result};

/// Supported photograph formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }
}

/// Load a photograph from disk and decode it to an RGB buffer.
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Errors
///
/// Returns `EstimateError::ImageLoad` if:
/// - The extension is not a supported photograph format
/// - The file cannot be opened
/// - Decoding fails
pub fn load_image(path: &Path) -> Result<RgbImage> {
    use image::ImageReader;

    if ImageFormat::from_extension(path).is_none() {
        return Err(EstimateError::image_load_msg(format!(
            "Unknown image format for file: {}",
            path.display()
        )));
    }

    let reader = ImageReader::open(path).map_err(|e| {
        EstimateError::image_load(
            format!("Failed to open image file: {}", path.display()),
            e,
        )
    })?;

    let img = reader.decode().map_err(|e| {
        EstimateError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    Ok(img.to_rgb8())
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.jpg")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.JPEG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.png")),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.webp")),
            Some(ImageFormat::WebP)
        );
        assert_eq!(ImageFormat::from_extension(Path::new("photo.xyz")), None);
        assert_eq!(ImageFormat::from_extension(Path::new("photo")), None);
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("jpg"));
        assert!(is_supported_extension("JPEG"));
        assert!(is_supported_extension("png"));
        assert!(!is_supported_extension("heic"));
        assert!(!is_supported_extension("doc"));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load_image(Path::new("nonexistent_photo.jpg")).unwrap_err();
        assert!(matches!(err, EstimateError::ImageLoad { .. }));
    }
}
