//! Uniform scaling using the `image` crate's resize.
//!
//! Output dimensions are `round(width * factor) x round(height * factor)`,
//! never smaller than 1x1.

use super::{check_buffer, InterpolationFilter, TransformError};
use crate::decode::DecodedImage;

/// Compute the output dimensions for a uniform scale.
///
/// Each dimension is rounded to the nearest pixel and clamped to at least 1,
/// so tiny factors on small images still produce a valid image.
///
/// # Errors
///
/// Returns `TransformError::InvalidParameter` if `scale_factor` is not a
/// positive finite number, or the result would not fit in a `u32`.
pub fn compute_scaled_dimensions(
    width: u32,
    height: u32,
    scale_factor: f64,
) -> Result<(u32, u32), TransformError> {
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        return Err(TransformError::InvalidParameter {
            name: "scale_factor",
            reason: format!("{} is not a positive finite number", scale_factor),
        });
    }

    let scale_dim = |dim: u32| -> Result<u32, TransformError> {
        let scaled = (dim as f64 * scale_factor).round();
        if scaled > u32::MAX as f64 {
            return Err(TransformError::InvalidParameter {
                name: "scale_factor",
                reason: format!("{} scales a {} pixel edge past the size limit", scale_factor, dim),
            });
        }
        Ok((scaled as u32).max(1))
    };

    Ok((scale_dim(width)?, scale_dim(height)?))
}

/// Scale an image uniformly by `scale_factor`.
///
/// # Arguments
///
/// * `image` - The source image
/// * `scale_factor` - Positive scale factor (1.0 keeps the size)
/// * `filter` - Interpolation filter to use
///
/// # Errors
///
/// Returns `TransformError::InvalidParameter` for non-positive or non-finite
/// factors and `TransformError::InvalidPixelData` for a malformed source.
pub fn apply_scaling(
    image: &DecodedImage,
    scale_factor: f64,
    filter: InterpolationFilter,
) -> Result<DecodedImage, TransformError> {
    check_buffer(image)?;
    let (width, height) = compute_scaled_dimensions(image.width, image.height, scale_factor)?;

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgba = image
        .to_rgba_image()
        .ok_or_else(|| TransformError::InvalidPixelData {
            expected: image.width as usize * image.height as usize * 4,
            actual: image.pixels.len(),
        })?;

    let resized = image::imageops::resize(&rgba, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgba_image(resized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::test_support::gradient;

    #[test]
    fn test_scale_doubles() {
        let img = gradient(100, 100);
        let result = apply_scaling(&img, 2.0, InterpolationFilter::Bicubic).unwrap();

        assert_eq!(result.width, 200);
        assert_eq!(result.height, 200);
        assert_eq!(result.pixels.len(), 200 * 200 * 4);
    }

    #[test]
    fn test_scale_one_is_unchanged() {
        let img = gradient(37, 21);
        let result = apply_scaling(&img, 1.0, InterpolationFilter::Bicubic).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_scale_down_rounds() {
        let img = gradient(101, 51);
        let result = apply_scaling(&img, 0.5, InterpolationFilter::Bilinear).unwrap();

        // 50.5 and 25.5 round half away from zero
        assert_eq!(result.width, 51);
        assert_eq!(result.height, 26);
    }

    #[test]
    fn test_scale_never_produces_zero_dimension() {
        let img = gradient(3, 2);
        let result = apply_scaling(&img, 0.1, InterpolationFilter::Bicubic).unwrap();

        assert_eq!(result.width, 1);
        assert_eq!(result.height, 1);
    }

    #[test]
    fn test_scale_rejects_bad_factors() {
        let img = gradient(10, 10);
        for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = apply_scaling(&img, factor, InterpolationFilter::Bicubic);
            assert!(
                matches!(
                    result,
                    Err(TransformError::InvalidParameter {
                        name: "scale_factor",
                        ..
                    })
                ),
                "factor {} should be rejected",
                factor
            );
        }
    }

    #[test]
    fn test_scale_rejects_oversized_output() {
        assert!(compute_scaled_dimensions(u32::MAX, 1, 2.0).is_err());
    }

    #[test]
    fn test_uniform_image_stays_uniform() {
        let img = DecodedImage::new(8, 8, [10u8, 20, 30, 255].repeat(64));
        let result = apply_scaling(&img, 1.5, InterpolationFilter::Bicubic).unwrap();

        assert_eq!((result.width, result.height), (12, 12));
        assert!(result.pixels.chunks_exact(4).all(|p| p == [10, 20, 30, 255]));
    }

    #[test]
    fn test_all_filter_types() {
        let img = gradient(100, 50);

        for filter in [
            InterpolationFilter::Nearest,
            InterpolationFilter::Bilinear,
            InterpolationFilter::Bicubic,
        ] {
            let result = apply_scaling(&img, 0.5, filter).unwrap();
            assert_eq!(result.width, 50);
            assert_eq!(result.height, 25);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::transform::test_support::gradient;
    use proptest::prelude::*;

    proptest! {
        /// Property: Output dimensions follow round(dim * factor), min 1.
        #[test]
        fn prop_dimensions_follow_factor(
            width in 1u32..=60,
            height in 1u32..=60,
            factor in 0.1f64..=2.0,
        ) {
            let img = gradient(width, height);
            let result = apply_scaling(&img, factor, InterpolationFilter::Bilinear).unwrap();

            let expected_w = ((width as f64 * factor).round() as u32).max(1);
            let expected_h = ((height as f64 * factor).round() as u32).max(1);
            prop_assert_eq!(result.width, expected_w);
            prop_assert_eq!(result.height, expected_h);
            prop_assert_eq!(result.pixels.len(), (expected_w * expected_h * 4) as usize);
        }

        /// Property: A factor of 1.0 keeps dimensions for every image.
        #[test]
        fn prop_unit_scale_keeps_dimensions(width in 1u32..=80, height in 1u32..=80) {
            let img = gradient(width, height);
            let result = apply_scaling(&img, 1.0, InterpolationFilter::Bicubic).unwrap();
            prop_assert_eq!((result.width, result.height), (width, height));
        }
    }
}
