//! imgwarp Core - Image transform library
//!
//! This crate provides the core functionality behind the imgwarp form:
//! upload decoding, the four geometric filters (scaling, rotation,
//! translation, shearing), PNG encoding for the download, and the request
//! boundary that turns failures into user-visible notices.
//!
//! # Flow
//!
//! ```ignore
//! use imgwarp_core::{process_upload, FilterRequest};
//!
//! let mut request = FilterRequest::new("Rotation");
//! request.rotation_angle = Some(30.0);
//!
//! match process_upload(&upload_bytes, request) {
//!     Ok(result) => save(result.file_name, &result.png),
//!     Err(notice) => show(notice.level, &notice.message),
//! }
//! ```
//!
//! Logging goes through `tracing`. With no subscriber installed, events are
//! forwarded to the `log` facade.

pub mod controls;
pub mod decode;
pub mod encode;
pub mod filter;
pub mod pipeline;
pub mod transform;

pub use controls::{FilterControl, FilterControls, SliderSpec, PLACEHOLDER_OPTION};
pub use decode::{decode_upload, is_supported_upload, DecodeError, DecodedImage};
pub use encode::{encode_png, EncodeError, DOWNLOAD_FILE_NAME, PNG_MIME_TYPE};
pub use filter::{
    FilterKind, FilterRequest, FilterSelection, RotationParams, ScaleParams, ShearParams,
    TranslationParams,
};
pub use pipeline::{
    process_upload, try_process_upload, FilteredImage, Notice, NoticeLevel, PipelineError,
};
pub use transform::{
    apply_filter, apply_named_filter, apply_rotation, apply_scaling, apply_shearing,
    apply_translation, compute_rotated_bounds, InterpolationFilter, TransformError,
};
