//! Upload decoding for imgwarp.
//!
//! This module turns the bytes from the upload form into a [`DecodedImage`]:
//! - Sniffing the format (JPEG and PNG are accepted)
//! - Applying EXIF orientation for JPEG uploads
//! - Converting to RGBA so transforms can expose transparent regions
//!
//! All operations are synchronous and single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use imgwarp_core::decode::decode_upload;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let image = decode_upload(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod upload;
mod types;

pub use types::{DecodeError, DecodedImage, CHANNELS};
pub(crate) use types::Orientation;
pub use upload::{decode_upload, is_supported_upload, SUPPORTED_EXTENSIONS};
