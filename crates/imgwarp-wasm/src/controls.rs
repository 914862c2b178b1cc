//! Form control descriptor bindings.
//!
//! The page builds its filter select and sliders from `filter_controls()`
//! instead of hard-coding bounds.

use crate::types::to_js_error;
use imgwarp_core::controls::FilterControls;
use wasm_bindgen::prelude::*;

/// Describe the filter select and every filter's sliders.
///
/// Returns an object shaped like:
///
/// ```typescript
/// {
///   options: ['Select', 'Scaling', 'Rotation', 'Translation', 'Shearing'],
///   filters: [
///     { name: 'Scaling', sliders: [{ key: 'scale_factor', label: 'Scale Factor',
///                                    min: 0.1, max: 2.0, default: 1.0, step: 0.01 }] },
///     ...
///   ],
/// }
/// ```
#[wasm_bindgen]
pub fn filter_controls() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&FilterControls::new()).map_err(to_js_error)
}
