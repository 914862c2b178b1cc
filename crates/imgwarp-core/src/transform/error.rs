//! Error type shared by the transform operations.

use thiserror::Error;

/// Errors that can occur while selecting or applying a transform.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The filter name is the placeholder or not one of the known filters.
    #[error("Unsupported filter: {0:?}")]
    UnsupportedFilter(String),

    /// A filter parameter cannot be applied.
    #[error("Invalid value for {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Pixel buffer length doesn't match the image dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}
