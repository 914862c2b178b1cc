//! PNG encoding WASM bindings for the download button.
//!
//! # Example
//!
//! ```typescript
//! const png = encode_png(filtered);
//! const url = URL.createObjectURL(new Blob([png], { type: png_mime_type() }));
//! link.download = download_file_name();
//! link.href = url;
//! ```

use crate::types::{to_js_error, JsDecodedImage};
use imgwarp_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image to PNG bytes.
///
/// # Errors
///
/// Throws if the image has a zero dimension or a malformed pixel buffer.
#[wasm_bindgen]
pub fn encode_png(image: &JsDecodedImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&image.to_decoded()).map_err(to_js_error)
}

/// File name for the download (`filtered_image.png`).
#[wasm_bindgen]
pub fn download_file_name() -> String {
    encode::DOWNLOAD_FILE_NAME.to_string()
}

/// MIME type for the download (`image/png`).
#[wasm_bindgen]
pub fn png_mime_type() -> String {
    encode::PNG_MIME_TYPE.to_string()
}

/// Tests for encode bindings.
///
/// Error paths build a `JsValue`, which only works on wasm32 targets.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_creates_valid_png() {
        let img = JsDecodedImage::new(10, 10, vec![128u8; 10 * 10 * 4]);
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn test_download_metadata() {
        assert_eq!(download_file_name(), "filtered_image.png");
        assert_eq!(png_mime_type(), "image/png");
    }
}

/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_png_invalid_dimensions() {
        let img = JsDecodedImage::new(0, 10, vec![]);
        assert!(encode_png(&img).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_png_invalid_pixel_data() {
        let img = JsDecodedImage::new(10, 10, vec![0u8; 12]);
        assert!(encode_png(&img).is_err());
    }
}
