//! imgwarp WASM - WebAssembly bindings for the imgwarp form
//!
//! This crate exposes the imgwarp-core functionality to the browser page that
//! renders the upload form, filter select, sliders, and download button.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Upload decoding and file name checks
//! - `transform` - The four filters and the form-driven dispatcher
//! - `encode` - PNG encoding and download metadata
//! - `controls` - Select options and slider descriptors
//! - `process` - One-call apply-action with user-facing notices
//!
//! # Usage
//!
//! ```typescript
//! import init, { process_upload, filter_controls } from '@imgwarp/wasm';
//!
//! await init();
//! const controls = filter_controls();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = process_upload(bytes, { filter: 'Scaling', scale_factor: 2 });
//! ```
//!
//! Building with the `dev` feature routes log output to the browser console
//! and prints Rust panics there too.

use wasm_bindgen::prelude::*;

mod controls;
mod decode;
mod encode;
mod process;
mod transform;
mod types;

// Re-export public types
pub use controls::filter_controls;
pub use decode::{decode_upload, is_supported_upload, upload_accept_attribute};
pub use encode::{download_file_name, encode_png, png_mime_type};
pub use process::{process_upload, JsFilteredImage};
pub use transform::{apply_filter, apply_rotation, apply_scaling, apply_shearing, apply_translation};
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "dev")]
    {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        console_log::init().ok();
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
