//! WASM bindings for the four geometric filters.
//!
//! `apply_filter` takes the form state as a plain object and is what the
//! "Apply Filter" button calls. The per-filter functions are there for live
//! slider previews, where the caller already knows which filter is active.

use crate::types::{filter_from_u8, to_js_error, JsDecodedImage};
use imgwarp_core::filter::{FilterRequest, FilterSelection};
use imgwarp_core::transform::{self, TransformError};
use imgwarp_core::DecodedImage;
use wasm_bindgen::prelude::*;

fn finish(result: Result<DecodedImage, TransformError>) -> Result<JsDecodedImage, JsValue> {
    result.map(JsDecodedImage::from_decoded).map_err(to_js_error)
}

/// Apply the filter described by a form request.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const out = apply_filter(image, {
///   filter: 'Translation',
///   x_translation: 10,
///   y_translation: -5,
/// });
/// ```
///
/// # Errors
///
/// Throws if the request is malformed, names the `"Select"` placeholder or
/// an unknown filter, or carries an out-of-range value.
#[wasm_bindgen]
pub fn apply_filter(image: &JsDecodedImage, request: JsValue) -> Result<JsDecodedImage, JsValue> {
    let request: FilterRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|e| to_js_error(format!("Invalid filter request: {}", e)))?;
    let selection = FilterSelection::try_from(request).map_err(to_js_error)?;

    finish(transform::apply_filter(&image.to_decoded(), &selection))
}

/// Scale an image uniformly.
///
/// * `filter` - 0=Nearest, 1=Bilinear, 2=Bicubic (default)
#[wasm_bindgen]
pub fn apply_scaling(
    image: &JsDecodedImage,
    scale_factor: f64,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    finish(transform::apply_scaling(
        &image.to_decoded(),
        scale_factor,
        filter_from_u8(filter),
    ))
}

/// Rotate an image about its centre, expanding the canvas.
///
/// * `angle_degrees` - positive = counter-clockwise
/// * `filter` - 0=Nearest, 1=Bilinear (fast preview), 2=Bicubic (default)
#[wasm_bindgen]
pub fn apply_rotation(
    image: &JsDecodedImage,
    angle_degrees: f64,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    finish(transform::apply_rotation(
        &image.to_decoded(),
        angle_degrees,
        filter_from_u8(filter),
    ))
}

/// Shift image content by whole pixels; positive `dy` moves content down.
#[wasm_bindgen]
pub fn apply_translation(
    image: &JsDecodedImage,
    dx: i32,
    dy: i32,
) -> Result<JsDecodedImage, JsValue> {
    finish(transform::apply_translation(&image.to_decoded(), dx, dy))
}

/// Shear an image with `x' = x + shx*y, y' = shy*x + y`.
#[wasm_bindgen]
pub fn apply_shearing(
    image: &JsDecodedImage,
    shx: f64,
    shy: f64,
) -> Result<JsDecodedImage, JsValue> {
    finish(transform::apply_shearing(&image.to_decoded(), shx, shy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> JsDecodedImage {
        let pixels: Vec<u8> = (0..(width * height * 4) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsDecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_scaling_doubles() {
        let img = test_image(100, 100);
        let result = apply_scaling(&img, 2.0, 2).unwrap();
        assert_eq!(result.width(), 200);
        assert_eq!(result.height(), 200);
    }

    #[test]
    fn test_rotation_no_change() {
        let img = test_image(100, 60);
        let result = apply_rotation(&img, 0.0, 2).unwrap();
        assert_eq!(result.width(), 100);
        assert_eq!(result.height(), 60);
        assert_eq!(result.pixels(), img.pixels());
    }

    #[test]
    fn test_rotation_90_degrees() {
        let img = test_image(100, 50);
        let result = apply_rotation(&img, 90.0, 1).unwrap();
        assert_eq!(result.width(), 50);
        assert_eq!(result.height(), 100);
    }

    #[test]
    fn test_rotation_45_degrees_expands() {
        let img = test_image(100, 100);
        let result = apply_rotation(&img, 45.0, 1).unwrap();
        assert!(result.width() > 100);
        assert!(result.height() > 100);
    }

    #[test]
    fn test_translation_keeps_size() {
        let img = test_image(30, 20);
        let result = apply_translation(&img, 10, -5).unwrap();
        assert_eq!(result.width(), 30);
        assert_eq!(result.height(), 20);
    }

    #[test]
    fn test_shearing_identity() {
        let img = test_image(30, 20);
        let result = apply_shearing(&img, 0.0, 0.0).unwrap();
        assert_eq!(result.pixels(), img.pixels());
    }
}
