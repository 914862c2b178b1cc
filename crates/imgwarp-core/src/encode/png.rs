//! PNG encoding using the `image` crate's PNG encoder.
//!
//! Output is always RGBA8 so transparent regions left by a transform
//! survive the download.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::decode::{DecodedImage, CHANNELS};

/// File name offered by the download button.
pub const DOWNLOAD_FILE_NAME: &str = "filtered_image.png";

/// MIME type of the download.
pub const PNG_MIME_TYPE: &str = "image/png";

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a decoded image to PNG bytes.
pub fn encode_png(image: &DecodedImage) -> Result<Vec<u8>, EncodeError> {
    encode_png_pixels(&image.pixels, image.width, image.height)
}

/// Encode raw RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
pub fn encode_png_pixels(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = width as usize * height as usize * CHANNELS;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Valid input always produces a PNG with matching dimensions.
        #[test]
        fn prop_valid_input_produces_png(width in 1u32..=40, height in 1u32..=40, fill in any::<u8>()) {
            let image = DecodedImage::new(width, height, vec![fill; (width * height * 4) as usize]);
            let png = encode_png(&image).unwrap();

            prop_assert_eq!(&png[1..4], b"PNG");
            let decoded = image::load_from_memory(&png).unwrap();
            prop_assert_eq!((decoded.width(), decoded.height()), (width, height));
        }
    }
}
