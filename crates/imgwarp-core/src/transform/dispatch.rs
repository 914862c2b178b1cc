//! Dispatcher from a filter selection to the matching transform.

use super::{
    apply_rotation, apply_scaling, apply_shearing, apply_translation, InterpolationFilter,
    TransformError,
};
use crate::decode::DecodedImage;
use crate::filter::{FilterRequest, FilterSelection};

/// Apply exactly one filter to an image, returning a new image.
///
/// Scaling and rotation use bicubic resampling; translation and shearing
/// copy the nearest source pixel.
pub fn apply_filter(
    image: &DecodedImage,
    selection: &FilterSelection,
) -> Result<DecodedImage, TransformError> {
    let result = match *selection {
        FilterSelection::Scaling(p) => {
            apply_scaling(image, p.scale_factor, InterpolationFilter::Bicubic)
        }
        FilterSelection::Rotation(p) => {
            apply_rotation(image, p.rotation_angle, InterpolationFilter::Bicubic)
        }
        FilterSelection::Translation(p) => {
            apply_translation(image, p.x_translation, p.y_translation)
        }
        FilterSelection::Shearing(p) => apply_shearing(image, p.x_shear, p.y_shear),
    }?;

    tracing::debug!(
        "applied {:?}: {}x{} -> {}x{}",
        selection,
        image.width,
        image.height,
        result.width,
        result.height
    );

    Ok(result)
}

/// Apply a filter chosen by its select label.
///
/// `request.filter` is ignored in favour of `name`. The placeholder
/// `"Select"` and unknown names fail with `TransformError::UnsupportedFilter`.
pub fn apply_named_filter(
    image: &DecodedImage,
    name: &str,
    request: FilterRequest,
) -> Result<DecodedImage, TransformError> {
    let selection = FilterSelection::try_from(FilterRequest {
        filter: name.to_string(),
        ..request
    })?;
    apply_filter(image, &selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{RotationParams, ScaleParams, ShearParams, TranslationParams};
    use crate::transform::test_support::gradient;

    #[test]
    fn test_dispatch_scaling() {
        let img = gradient(100, 100);
        let selection = FilterSelection::Scaling(ScaleParams { scale_factor: 2.0 });
        let result = apply_filter(&img, &selection).unwrap();
        assert_eq!((result.width, result.height), (200, 200));
    }

    #[test]
    fn test_dispatch_rotation() {
        let img = gradient(100, 100);
        let selection = FilterSelection::Rotation(RotationParams {
            rotation_angle: 90.0,
        });
        let result = apply_filter(&img, &selection).unwrap();
        assert_eq!((result.width, result.height), (100, 100));
        assert_eq!(result.pixel(0, 0), img.pixel(99, 0));
    }

    #[test]
    fn test_dispatch_translation() {
        let img = gradient(20, 20);
        let selection = FilterSelection::Translation(TranslationParams {
            x_translation: 3,
            y_translation: 0,
        });
        let result = apply_filter(&img, &selection).unwrap();
        assert_eq!(result.pixel(3, 0), img.pixel(0, 0));
    }

    #[test]
    fn test_dispatch_shearing_identity() {
        let img = gradient(20, 20);
        let selection = FilterSelection::Shearing(ShearParams::default());
        assert_eq!(apply_filter(&img, &selection).unwrap(), img);
    }

    #[test]
    fn test_named_filter_rejects_placeholder() {
        let img = gradient(4, 4);
        let result = apply_named_filter(&img, "Select", FilterRequest::default());
        assert!(matches!(result, Err(TransformError::UnsupportedFilter(_))));

        let result = apply_named_filter(&img, "Blur", FilterRequest::default());
        assert!(matches!(result, Err(TransformError::UnsupportedFilter(_))));
    }

    #[test]
    fn test_named_filter_uses_request_values() {
        let img = gradient(10, 10);
        let request = FilterRequest {
            scale_factor: Some(0.5),
            ..Default::default()
        };
        let result = apply_named_filter(&img, "Scaling", request).unwrap();
        assert_eq!((result.width, result.height), (5, 5));
    }
}
