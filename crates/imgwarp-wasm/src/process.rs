//! The apply-action binding: upload bytes and form state in, preview and
//! download out.
//!
//! Failures are thrown as a plain `{ level, message }` object rather than an
//! `Error`, so the page can show warnings and errors differently without
//! parsing messages.

use crate::types::{to_js_error, JsDecodedImage};
use imgwarp_core::filter::FilterRequest;
use imgwarp_core::pipeline::{self, FilteredImage, Notice};
use wasm_bindgen::prelude::*;

/// Result of a successful apply-action.
#[wasm_bindgen]
pub struct JsFilteredImage {
    inner: FilteredImage,
}

#[wasm_bindgen]
impl JsFilteredImage {
    /// The transformed image, for the preview canvas.
    pub fn image(&self) -> JsDecodedImage {
        JsDecodedImage::from_decoded(self.inner.image.clone())
    }

    /// PNG bytes for the download button.
    pub fn png(&self) -> Vec<u8> {
        self.inner.png.clone()
    }

    /// Caption for the preview, e.g. `"Rotation Filtered Image"`.
    #[wasm_bindgen(getter)]
    pub fn caption(&self) -> String {
        self.inner.caption.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.inner.file_name.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type.to_string()
    }
}

fn notice_to_js(notice: &Notice) -> JsValue {
    serde_wasm_bindgen::to_value(notice).unwrap_or_else(|_| to_js_error(&notice.message))
}

/// Decode, transform, and encode in one call.
///
/// # Example (TypeScript)
///
/// ```typescript
/// try {
///   const result = process_upload(bytes, { filter: 'Rotation', rotation_angle: 30 });
///   preview(result.image(), result.caption);
///   offerDownload(result.png(), result.file_name, result.mime_type);
/// } catch (notice) {
///   notice.level === 'warning' ? showWarning(notice.message) : showError(notice.message);
/// }
/// ```
#[wasm_bindgen]
pub fn process_upload(bytes: &[u8], request: JsValue) -> Result<JsFilteredImage, JsValue> {
    let request: FilterRequest = serde_wasm_bindgen::from_value(request).map_err(|e| {
        notice_to_js(&Notice::error(format!(
            "An error occurred: invalid filter request: {}",
            e
        )))
    })?;

    pipeline::process_upload(bytes, request)
        .map(|inner| JsFilteredImage { inner })
        .map_err(|notice| notice_to_js(&notice))
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn upload() -> Vec<u8> {
        imgwarp_core::encode_png(&imgwarp_core::DecodedImage::new(4, 4, vec![255u8; 64])).unwrap()
    }

    fn level_of(value: &JsValue) -> String {
        js_sys::Reflect::get(value, &JsValue::from_str("level"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn test_process_upload_success() {
        let request = serde_wasm_bindgen::to_value(&FilterRequest::new("Rotation")).unwrap();
        let result = process_upload(&upload(), request).unwrap();
        assert_eq!(result.caption(), "Rotation Filtered Image");
    }

    #[wasm_bindgen_test]
    fn test_process_upload_invalid_image_is_warning() {
        let request = serde_wasm_bindgen::to_value(&FilterRequest::new("Scaling")).unwrap();
        let notice = process_upload(b"not an image", request).err().unwrap();
        assert_eq!(level_of(&notice), "warning");
    }

    #[wasm_bindgen_test]
    fn test_process_upload_bad_request_is_error() {
        let notice = process_upload(&upload(), JsValue::from_str("Scaling")).err().unwrap();
        assert_eq!(level_of(&notice), "error");
    }
}
