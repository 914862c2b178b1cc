//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core imgwarp
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use std::fmt::Display;

use imgwarp_core::decode::DecodedImage;
use imgwarp_core::transform::InterpolationFilter;
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// Pixels are RGBA (4 bytes per pixel, row-major), so they can be copied
/// straight into an `ImageData` for canvas previews.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create a new JsDecodedImage from dimensions and RGBA pixel data.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core DecodedImage.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Convert a u8 filter value to the core InterpolationFilter enum.
///
/// Values:
/// - 0 = Nearest
/// - 1 = Bilinear (cheap previews)
/// - 2 = Bicubic (default)
///
/// Any other value defaults to Bicubic.
pub(crate) fn filter_from_u8(value: u8) -> InterpolationFilter {
    match value {
        0 => InterpolationFilter::Nearest,
        1 => InterpolationFilter::Bilinear,
        _ => InterpolationFilter::Bicubic,
    }
}

/// Wrap a Rust error in a JavaScript `Error` so callers get a stack trace.
pub(crate) fn to_js_error(err: impl Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
