//! WebAssembly bindings for trueno-picker.
//!
//! Exposes the picker state engine to JavaScript. The page renders the
//! controls and forwards input; the engine owns the color.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { JsColorPicker } from 'trueno-picker';
//!
//! await init();
//!
//! const picker = new JsColorPicker('hex', 'hex8', '#fff', '#4285F4');
//! picker.onChange((color) => { input.value = color; });
//!
//! // Forward a hue slider drag (x pixels out of the slider width).
//! picker.drag('hue', event.offsetX, slider.clientWidth);
//! swatch.style.background = picker.preview();
//! ```

use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::config::PickerConfig;
use crate::format::{AlphaChannel, OutputFormat};
use crate::picker::ColorPicker;
use crate::slider::{Channel, SliderDrag};

// ============================================================================
// Initialization
// ============================================================================

/// Initialize the WASM module.
///
/// Call this before using any other functions.
#[wasm_bindgen(start)]
pub fn init() {
    // WASM module initialized
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Log a callback that threw. Returns true when it did.
fn report_callback(value: &str, result: &Result<JsValue, JsValue>) -> bool {
    match result {
        Ok(_) => false,
        Err(err) => {
            warn!(output = value, error = ?err, "change callback threw");
            true
        }
    }
}

fn parse_channel(name: &str) -> Option<Channel> {
    let channel = match name.trim().to_ascii_lowercase().as_str() {
        "hue" | "h" => Channel::Hue,
        "saturation" | "s" => Channel::Saturation,
        "value" | "v" => Channel::Value,
        "alpha" | "a" => Channel::Alpha,
        "hsl-saturation" => Channel::HslSaturation,
        "lightness" | "l" => Channel::Lightness,
        "red" | "r" => Channel::Red,
        "green" | "g" => Channel::Green,
        "blue" | "b" => Channel::Blue,
        _ => return None,
    };
    Some(channel)
}

// ============================================================================
// Picker
// ============================================================================

/// Color picker state for use from JavaScript.
#[wasm_bindgen]
#[derive(Debug)]
pub struct JsColorPicker {
    inner: ColorPicker,
}

#[wasm_bindgen]
impl JsColorPicker {
    /// Create a picker.
    ///
    /// `output_format` is `hex`, `rgba` or `hsla`; `alpha_channel` is `hex6`
    /// or `hex8`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        output_format: &str,
        alpha_channel: &str,
        fallback_color: &str,
        initial: Option<String>,
    ) -> Result<JsColorPicker, JsValue> {
        let config = PickerConfig::new()
            .with_output_format(output_format.parse::<OutputFormat>().map_err(to_js_error)?)
            .with_alpha_channel(alpha_channel.parse::<AlphaChannel>().map_err(to_js_error)?)
            .with_fallback_color(fallback_color);
        config.validate().map_err(to_js_error)?;

        Ok(Self {
            inner: ColorPicker::new(config, initial.as_deref()),
        })
    }

    /// Create a picker from a YAML configuration document.
    #[wasm_bindgen(js_name = fromYaml)]
    pub fn from_yaml(yaml: &str, initial: Option<String>) -> Result<JsColorPicker, JsValue> {
        let config = PickerConfig::parse(yaml).map_err(to_js_error)?;
        Ok(Self {
            inner: ColorPicker::new(config, initial.as_deref()),
        })
    }

    /// Register the change callback. It receives the output string.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: js_sys::Function) {
        self.inner.on_change(move |value: &str| {
            // A throwing callback must not poison the picker.
            let result = callback.call1(&JsValue::NULL, &JsValue::from_str(value));
            report_callback(value, &result);
        });
    }

    /// Apply typed text. Returns true when the callback fired.
    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&mut self, text: &str) -> bool {
        self.inner.set_color_from_str(text)
    }

    /// Apply a host-side color without firing the callback.
    #[wasm_bindgen(js_name = syncColor)]
    pub fn sync_color(&mut self, text: &str) {
        self.inner.sync_color_from_str(text);
    }

    /// Apply a drag on a named channel (`hue`, `saturation`, `value`,
    /// `alpha`, `hsl-saturation`, `lightness`, `red`, `green`, `blue`).
    pub fn drag(&mut self, channel: &str, value: f64, range_max: f64) -> Result<bool, JsValue> {
        let channel = parse_channel(channel)
            .ok_or_else(|| JsValue::from_str(&format!("unknown channel: {channel}")))?;
        Ok(self.inner.drag(channel, SliderDrag::new(value, range_max)))
    }

    /// Apply a drag on the saturation/value plane.
    #[wasm_bindgen(js_name = dragPlane)]
    pub fn drag_plane(&mut self, x: f64, width: f64, y: f64, height: f64) -> bool {
        self.inner
            .drag_plane(SliderDrag::new(x, width), SliderDrag::new(y, height))
    }

    /// Advance the display format; returns its name.
    #[wasm_bindgen(js_name = cycleFormat)]
    pub fn cycle_format(&mut self) -> String {
        self.inner.cycle_format().to_string()
    }

    /// Revert to the initial color.
    pub fn cancel(&mut self) -> bool {
        self.inner.cancel()
    }

    /// Load a configured preset.
    #[wasm_bindgen(js_name = selectPreset)]
    pub fn select_preset(&mut self, index: usize) -> bool {
        self.inner.select_preset(index)
    }

    /// The last emitted output string.
    pub fn output(&self) -> String {
        self.inner.output().to_string()
    }

    /// The color in the active display format.
    #[wasm_bindgen(js_name = displayValue)]
    pub fn display_value(&self) -> String {
        self.inner.display_value()
    }

    /// Name of the active display format.
    pub fn format(&self) -> String {
        self.inner.format().to_string()
    }

    /// `rgba(...)` for preview swatches.
    pub fn preview(&self) -> String {
        self.inner.preview()
    }

    /// `rgb(...)` of the pure hue.
    #[wasm_bindgen(js_name = hueColor)]
    pub fn hue_color(&self) -> String {
        self.inner.hue_slider_color()
    }

    /// Current color as `[h, s, v, a]`, each in `[0, 1]`.
    pub fn hsva(&self) -> Vec<f64> {
        let c = self.inner.hsva();
        vec![c.h, c.s, c.v, c.a]
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_channel() {
        assert_eq!(parse_channel("Hue"), Some(Channel::Hue));
        assert_eq!(parse_channel(" l "), Some(Channel::Lightness));
        assert_eq!(parse_channel("hsl-saturation"), Some(Channel::HslSaturation));
        assert_eq!(parse_channel("cyan"), None);
    }

    #[test]
    fn test_report_callback() {
        assert!(!report_callback("#ff0000", &Ok(JsValue::UNDEFINED)));
        assert!(report_callback("#ff0000", &Err(JsValue::NULL)));
    }

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
