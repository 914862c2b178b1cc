//! PNG encoding for the download button.
//!
//! # Examples
//!
//! ```ignore
//! use imgwarp_core::encode::{encode_png, DOWNLOAD_FILE_NAME};
//!
//! let png_bytes = encode_png(&image).unwrap();
//! std::fs::write(DOWNLOAD_FILE_NAME, png_bytes).unwrap();
//! ```

mod png;

pub use png::{encode_png, encode_png_pixels, EncodeError, DOWNLOAD_FILE_NAME, PNG_MIME_TYPE};
