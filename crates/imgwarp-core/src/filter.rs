//! Filter selection for a single apply-action.
//!
//! The form submits a loosely typed [`FilterRequest`] (a filter name plus
//! whichever slider values were on screen). It is converted once into a
//! [`FilterSelection`], which carries exactly the parameters of the chosen
//! filter and is then handed by value to the dispatcher.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::controls::{
    SliderSpec, ROTATION_ANGLE, SCALE_FACTOR, X_SHEAR, X_TRANSLATION, Y_SHEAR, Y_TRANSLATION,
};
use crate::transform::TransformError;

/// The four geometric filters offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    Scaling,
    Rotation,
    Translation,
    Shearing,
}

impl FilterKind {
    /// All filters in select order.
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Scaling,
        FilterKind::Rotation,
        FilterKind::Translation,
        FilterKind::Shearing,
    ];

    /// Label used in the filter select and in captions.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Scaling => "Scaling",
            FilterKind::Rotation => "Rotation",
            FilterKind::Translation => "Translation",
            FilterKind::Shearing => "Shearing",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = TransformError;

    /// Parse an exact select label. The `"Select"` placeholder and any
    /// other string are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| TransformError::UnsupportedFilter(s.to_string()))
    }
}

/// Parameters for the Scaling filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleParams {
    /// Uniform scale factor, must be positive.
    pub scale_factor: f64,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            scale_factor: SCALE_FACTOR.default,
        }
    }
}

/// Parameters for the Rotation filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationParams {
    /// Angle in degrees, positive = counter-clockwise.
    pub rotation_angle: f64,
}

impl Default for RotationParams {
    fn default() -> Self {
        Self {
            rotation_angle: ROTATION_ANGLE.default,
        }
    }
}

/// Parameters for the Translation filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationParams {
    /// Horizontal offset in pixels, positive = right.
    pub x_translation: i32,
    /// Vertical offset in pixels, positive = down.
    pub y_translation: i32,
}

/// Parameters for the Shearing filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShearParams {
    pub x_shear: f64,
    pub y_shear: f64,
}

/// Exactly one filter with its fully populated parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "filter")]
pub enum FilterSelection {
    Scaling(ScaleParams),
    Rotation(RotationParams),
    Translation(TranslationParams),
    Shearing(ShearParams),
}

impl FilterSelection {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterSelection::Scaling(_) => FilterKind::Scaling,
            FilterSelection::Rotation(_) => FilterKind::Rotation,
            FilterSelection::Translation(_) => FilterKind::Translation,
            FilterSelection::Shearing(_) => FilterKind::Shearing,
        }
    }

    /// Selection for `kind` with every slider at its default.
    pub fn with_defaults(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Scaling => FilterSelection::Scaling(ScaleParams::default()),
            FilterKind::Rotation => FilterSelection::Rotation(RotationParams::default()),
            FilterKind::Translation => FilterSelection::Translation(TranslationParams::default()),
            FilterKind::Shearing => FilterSelection::Shearing(ShearParams::default()),
        }
    }
}

/// Raw form state submitted with one apply-action.
///
/// Slider fields that are absent fall back to the slider default. Fields
/// belonging to other filters are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRequest {
    /// Label chosen in the filter select, e.g. `"Rotation"`.
    pub filter: String,
    pub scale_factor: Option<f64>,
    pub rotation_angle: Option<f64>,
    pub x_translation: Option<i32>,
    pub y_translation: Option<i32>,
    pub x_shear: Option<f64>,
    pub y_shear: Option<f64>,
}

impl FilterRequest {
    /// Start a request for the given select label.
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..Default::default()
        }
    }
}

impl From<FilterSelection> for FilterRequest {
    fn from(selection: FilterSelection) -> Self {
        let mut request = FilterRequest::new(selection.kind().name());
        match selection {
            FilterSelection::Scaling(p) => request.scale_factor = Some(p.scale_factor),
            FilterSelection::Rotation(p) => request.rotation_angle = Some(p.rotation_angle),
            FilterSelection::Translation(p) => {
                request.x_translation = Some(p.x_translation);
                request.y_translation = Some(p.y_translation);
            }
            FilterSelection::Shearing(p) => {
                request.x_shear = Some(p.x_shear);
                request.y_shear = Some(p.y_shear);
            }
        }
        request
    }
}

impl TryFrom<FilterRequest> for FilterSelection {
    type Error = TransformError;

    fn try_from(request: FilterRequest) -> Result<Self, Self::Error> {
        let kind: FilterKind = request.filter.parse()?;

        let selection = match kind {
            FilterKind::Scaling => FilterSelection::Scaling(ScaleParams {
                scale_factor: slider_value(&SCALE_FACTOR, request.scale_factor)?,
            }),
            FilterKind::Rotation => FilterSelection::Rotation(RotationParams {
                rotation_angle: slider_value(&ROTATION_ANGLE, request.rotation_angle)?,
            }),
            FilterKind::Translation => FilterSelection::Translation(TranslationParams {
                x_translation: int_slider_value(&X_TRANSLATION, request.x_translation)?,
                y_translation: int_slider_value(&Y_TRANSLATION, request.y_translation)?,
            }),
            FilterKind::Shearing => FilterSelection::Shearing(ShearParams {
                x_shear: slider_value(&X_SHEAR, request.x_shear)?,
                y_shear: slider_value(&Y_SHEAR, request.y_shear)?,
            }),
        };

        Ok(selection)
    }
}

fn slider_value(slider: &SliderSpec, value: Option<f64>) -> Result<f64, TransformError> {
    let value = value.unwrap_or(slider.default);
    if slider.contains(value) {
        Ok(value)
    } else {
        Err(out_of_range(slider, value))
    }
}

fn int_slider_value(slider: &SliderSpec, value: Option<i32>) -> Result<i32, TransformError> {
    match value {
        None => Ok(slider.default as i32),
        Some(v) if slider.contains(v as f64) => Ok(v),
        Some(v) => Err(out_of_range(slider, v as f64)),
    }
}

fn out_of_range(slider: &SliderSpec, value: f64) -> TransformError {
    TransformError::InvalidParameter {
        name: slider.key,
        reason: format!(
            "{} is outside the range [{}, {}]",
            value, slider.min, slider.max
        ),
    }
}
