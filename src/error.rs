//! Error types for the clean_quote library

use thiserror::Error;

/// Result type alias for clean_quote operations
pub type Result<T> = std::result::Result<T, EstimateError>;

/// Error types for image analysis and soil-level suggestion
///
/// Pricing (`calc_room`, `aggregate`) is total and never produces an error;
/// only the photograph-analysis path can fail.
#[derive(Error, Debug)]
pub enum EstimateError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Classifier invoked without any analyzed photographs
    #[error("No photographs to analyze")]
    NoEvidence,

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl EstimateError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an image load error without an underlying cause
    pub fn image_load_msg(message: impl Into<String>) -> Self {
        Self::ImageLoad {
            message: message.into(),
            source: None,
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Every analysis failure is recoverable at the quote level: the affected
    /// room simply gets no suggestion and pricing stays computable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EstimateError::ImageLoad { .. } | EstimateError::NoEvidence
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            EstimateError::ImageLoad { .. } => {
                "Could not read the photograph. Please check the file format and try again."
                    .to_string()
            }
            EstimateError::NoEvidence => {
                "Please add photographs of the room first.".to_string()
            }
            EstimateError::InvalidParameter { .. } => {
                "Soil-level analysis failed. Please try again with different settings.".to_string()
            }
        }
    }
}
