//! Geometric transforms: scaling, rotation, translation, and shearing.
//!
//! Every transform takes a borrowed [`DecodedImage`] and returns a new one.
//! Regions of the output that are not covered by the source are
//! transparent (RGBA `0, 0, 0, 0`).
//!
//! # Resampling
//!
//! - Scaling and rotation use bicubic (Catmull-Rom) resampling by default
//! - Translation and shearing sample the nearest source pixel, so zero
//!   parameters reproduce the input exactly
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, x grows right, y grows down
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Affine maps are written in the forward direction (source to output)

mod affine;
mod dispatch;
mod error;
mod rotation;
mod scale;
mod shear;
mod translate;

pub use affine::{warp_affine, AffineMatrix};
pub use dispatch::{apply_filter, apply_named_filter};
pub use error::TransformError;
pub use rotation::{apply_rotation, compute_rotated_bounds};
pub use scale::{apply_scaling, compute_scaled_dimensions};
pub use shear::apply_shearing;
pub use translate::apply_translation;

use crate::decode::{DecodedImage, CHANNELS};

/// Interpolation filter for resampling transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum InterpolationFilter {
    /// Nearest neighbour (no blending).
    Nearest,
    /// Bilinear interpolation - cheap, good for live previews.
    Bilinear,
    /// Bicubic (Catmull-Rom) interpolation.
    #[default]
    Bicubic,
}

impl InterpolationFilter {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            InterpolationFilter::Nearest => image::imageops::FilterType::Nearest,
            InterpolationFilter::Bilinear => image::imageops::FilterType::Triangle,
            InterpolationFilter::Bicubic => image::imageops::FilterType::CatmullRom,
        }
    }
}

/// Check that the pixel buffer matches the image dimensions.
pub(crate) fn check_buffer(image: &DecodedImage) -> Result<(), TransformError> {
    let expected = image.width as usize * image.height as usize * CHANNELS;
    if image.pixels.len() != expected {
        return Err(TransformError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }
    Ok(())
}
