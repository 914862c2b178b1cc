//! Form control descriptors for the filter picker.
//!
//! The browser form is rendered from these descriptors so that slider
//! bounds, defaults, and labels live in one place. The same bounds are used
//! to validate a submitted [`FilterRequest`](crate::filter::FilterRequest).

use serde::Serialize;

use crate::filter::FilterKind;

/// Label of the placeholder entry at the top of the filter select.
pub const PLACEHOLDER_OPTION: &str = "Select";

/// A numeric slider on the filter form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderSpec {
    /// Request field this slider fills in.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl SliderSpec {
    /// Check whether `value` is finite and inside `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

pub const SCALE_FACTOR: SliderSpec = SliderSpec {
    key: "scale_factor",
    label: "Scale Factor",
    min: 0.1,
    max: 2.0,
    default: 1.0,
    step: 0.01,
};

pub const ROTATION_ANGLE: SliderSpec = SliderSpec {
    key: "rotation_angle",
    label: "Rotation Angle (degrees)",
    min: -180.0,
    max: 180.0,
    default: 0.0,
    step: 1.0,
};

pub const X_TRANSLATION: SliderSpec = SliderSpec {
    key: "x_translation",
    label: "X-Translation",
    min: -100.0,
    max: 100.0,
    default: 0.0,
    step: 1.0,
};

pub const Y_TRANSLATION: SliderSpec = SliderSpec {
    key: "y_translation",
    label: "Y-Translation",
    min: -100.0,
    max: 100.0,
    default: 0.0,
    step: 1.0,
};

pub const X_SHEAR: SliderSpec = SliderSpec {
    key: "x_shear",
    label: "X-Shear",
    min: -1.0,
    max: 1.0,
    default: 0.0,
    step: 0.01,
};

pub const Y_SHEAR: SliderSpec = SliderSpec {
    key: "y_shear",
    label: "Y-Shear",
    min: -1.0,
    max: 1.0,
    default: 0.0,
    step: 0.01,
};

impl FilterKind {
    /// Sliders shown when this filter is selected, in display order.
    pub fn sliders(self) -> &'static [SliderSpec] {
        match self {
            FilterKind::Scaling => &[SCALE_FACTOR],
            FilterKind::Rotation => &[ROTATION_ANGLE],
            FilterKind::Translation => &[X_TRANSLATION, Y_TRANSLATION],
            FilterKind::Shearing => &[X_SHEAR, Y_SHEAR],
        }
    }
}

/// Controls for one entry of the filter select.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterControl {
    pub name: &'static str,
    pub sliders: Vec<SliderSpec>,
}

/// Everything the form needs to render the filter picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterControls {
    /// Select options, placeholder first.
    pub options: Vec<&'static str>,
    pub filters: Vec<FilterControl>,
}

impl FilterControls {
    pub fn new() -> Self {
        let options = std::iter::once(PLACEHOLDER_OPTION)
            .chain(FilterKind::ALL.iter().map(|kind| kind.name()))
            .collect();
        let filters = FilterKind::ALL
            .iter()
            .map(|kind| FilterControl {
                name: kind.name(),
                sliders: kind.sliders().to_vec(),
            })
            .collect();
        Self { options, filters }
    }

    /// Look up the controls for a filter by its select label.
    pub fn get(&self, name: &str) -> Option<&FilterControl> {
        self.filters.iter().find(|f| f.name == name)
    }
}

impl Default for FilterControls {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_order() {
        let controls = FilterControls::new();
        assert_eq!(
            controls.options,
            vec!["Select", "Scaling", "Rotation", "Translation", "Shearing"]
        );
    }

    #[test]
    fn test_placeholder_has_no_controls() {
        let controls = FilterControls::new();
        assert!(controls.get(PLACEHOLDER_OPTION).is_none());
        assert_eq!(controls.filters.len(), 4);
    }

    #[test]
    fn test_translation_sliders() {
        let controls = FilterControls::new();
        let translation = controls.get("Translation").unwrap();
        let keys: Vec<_> = translation.sliders.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["x_translation", "y_translation"]);
    }

    #[test]
    fn test_defaults_inside_bounds() {
        for kind in FilterKind::ALL {
            for slider in kind.sliders() {
                assert!(slider.contains(slider.default), "{}", slider.key);
                assert!(slider.step > 0.0);
            }
        }
    }

    #[test]
    fn test_contains() {
        assert!(SCALE_FACTOR.contains(0.1));
        assert!(SCALE_FACTOR.contains(2.0));
        assert!(!SCALE_FACTOR.contains(0.0));
        assert!(!SCALE_FACTOR.contains(2.5));
        assert!(!SCALE_FACTOR.contains(f64::NAN));
        assert!(!ROTATION_ANGLE.contains(f64::INFINITY));
    }
}
