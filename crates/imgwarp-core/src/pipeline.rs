//! The request boundary: upload bytes in, PNG download or user notice out.
//!
//! One apply-action runs decode, filter selection, transform, and encode in
//! order. Every failure is turned into a [`Notice`] for the form to display;
//! nothing is retried and nothing is kept after the call returns.

use serde::Serialize;
use thiserror::Error;

use crate::decode::{decode_upload, DecodeError, DecodedImage};
use crate::encode::{encode_png, EncodeError, DOWNLOAD_FILE_NAME, PNG_MIME_TYPE};
use crate::filter::{FilterRequest, FilterSelection};
use crate::transform::{apply_filter, TransformError};

/// Warning shown when the upload is not a usable image.
pub const INVALID_IMAGE_MESSAGE: &str = "Invalid image format. Please upload a valid image file.";

/// Warning shown when the apply action is pressed with no filter chosen.
pub const UNSUPPORTED_FILTER_MESSAGE: &str = "Please select a filter before applying.";

/// Any failure of a single apply-action.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The upload is missing, unreadable, or not JPEG/PNG.
    #[error("Invalid image: {0}")]
    InvalidImage(#[from] DecodeError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// A message for the form to show instead of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl From<&PipelineError> for Notice {
    fn from(err: &PipelineError) -> Self {
        match err {
            PipelineError::InvalidImage(_) => Notice::warning(INVALID_IMAGE_MESSAGE),
            PipelineError::Transform(TransformError::UnsupportedFilter(_)) => {
                Notice::warning(UNSUPPORTED_FILTER_MESSAGE)
            }
            other => Notice::error(format!("An error occurred: {}", other)),
        }
    }
}

impl From<PipelineError> for Notice {
    fn from(err: PipelineError) -> Self {
        Notice::from(&err)
    }
}

/// The result of a successful apply-action.
#[derive(Debug, Clone)]
pub struct FilteredImage {
    /// Transformed image, for the preview.
    pub image: DecodedImage,
    /// PNG-encoded download.
    pub png: Vec<u8>,
    /// Caption shown under the preview, e.g. `"Rotation Filtered Image"`.
    pub caption: String,
    pub file_name: &'static str,
    pub mime_type: &'static str,
}

/// Run one apply-action, keeping the typed error.
///
/// The filter request is validated only after the upload decodes, so a bad
/// upload never reaches the transform stage.
pub fn try_process_upload(
    bytes: &[u8],
    request: FilterRequest,
) -> Result<FilteredImage, PipelineError> {
    let image = decode_upload(bytes)?;
    let selection = FilterSelection::try_from(request)?;
    let transformed = apply_filter(&image, &selection)?;
    let png = encode_png(&transformed)?;

    Ok(FilteredImage {
        caption: format!("{} Filtered Image", selection.kind()),
        image: transformed,
        png,
        file_name: DOWNLOAD_FILE_NAME,
        mime_type: PNG_MIME_TYPE,
    })
}

/// Run one apply-action and turn any failure into a user-visible notice.
pub fn process_upload(bytes: &[u8], request: FilterRequest) -> Result<FilteredImage, Notice> {
    match try_process_upload(bytes, request) {
        Ok(result) => {
            tracing::info!(
                "{}: {}x{}, {} PNG bytes",
                result.caption,
                result.image.width,
                result.image.height,
                result.png.len()
            );
            Ok(result)
        }
        Err(err) => {
            tracing::warn!("apply failed: {}", err);
            Err(Notice::from(err))
        }
    }
}
