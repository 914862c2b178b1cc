//! Shear on a fixed-size canvas.

use super::{warp_affine, AffineMatrix, TransformError};
use crate::decode::DecodedImage;

/// Shear image content with `x' = x + shx * y, y' = shy * x + y`.
///
/// The origin is the top-left corner and the output keeps the input
/// dimensions; uncovered areas are transparent. When `shx * shy == 1` the
/// map is singular and the content collapses onto a line through the origin.
///
/// # Errors
///
/// Returns `TransformError::InvalidParameter` if a factor is not finite.
pub fn apply_shearing(
    image: &DecodedImage,
    shx: f64,
    shy: f64,
) -> Result<DecodedImage, TransformError> {
    for (name, value) in [("x_shear", shx), ("y_shear", shy)] {
        if !value.is_finite() {
            return Err(TransformError::InvalidParameter {
                name,
                reason: format!("{} is not a finite shear factor", value),
            });
        }
    }

    warp_affine(image, &AffineMatrix::shear(shx, shy), image.width, image.height)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::transform::test_support::gradient;
    use proptest::prelude::*;

    proptest! {
        /// Property: Shearing never changes dimensions.
        #[test]
        fn prop_dimensions_preserved(
            width in 1u32..=40,
            height in 1u32..=40,
            shx in -1.0f64..=1.0,
            shy in -1.0f64..=1.0,
        ) {
            let img = gradient(width, height);
            let result = apply_shearing(&img, shx, shy).unwrap();
            prop_assert_eq!((result.width, result.height), (width, height));
        }
    }
}
