//! Upload decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_upload, is_supported_upload } from '@imgwarp/wasm';
//!
//! if (!is_supported_upload(file.name)) {
//!   showWarning('Please upload a jpg, jpeg or png file.');
//! }
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_upload(bytes);
//! ```

use crate::types::{to_js_error, JsDecodedImage};
use imgwarp_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an uploaded JPEG or PNG into RGBA pixels.
///
/// JPEG EXIF orientation is applied.
///
/// # Errors
///
/// Throws if the bytes are empty, not an image, corrupted, or an image
/// format other than JPEG/PNG.
#[wasm_bindgen]
pub fn decode_upload(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_upload(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(to_js_error)
}

/// Check whether a file name has an extension the upload accepts
/// (`jpg`, `jpeg`, `png`, case-insensitive).
#[wasm_bindgen]
pub fn is_supported_upload(file_name: &str) -> bool {
    decode::is_supported_upload(file_name)
}

/// Extensions for the file picker's `accept` attribute, e.g. `".jpg,.png,.jpeg"`.
#[wasm_bindgen]
pub fn upload_accept_attribute() -> String {
    decode::SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}
