//! Integer translation on a fixed-size canvas.

use super::{warp_affine, AffineMatrix, TransformError};
use crate::decode::DecodedImage;

/// Shift image content by `(dx, dy)` pixels.
///
/// The output has the same dimensions as the input. Content moved past an
/// edge is discarded and the exposed strip is transparent. Positive `dx`
/// moves content right, positive `dy` moves it down.
pub fn apply_translation(
    image: &DecodedImage,
    dx: i32,
    dy: i32,
) -> Result<DecodedImage, TransformError> {
    if dx == 0 && dy == 0 {
        super::check_buffer(image)?;
        return Ok(image.clone());
    }

    let matrix = AffineMatrix::translation(dx as f64, dy as f64);
    warp_affine(image, &matrix, image.width, image.height)
}
