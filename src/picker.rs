//! Color picker state.
//!
//! [`ColorPicker`] is the single owner of the canonical [`Hsva`]. Every input
//! channel (typed text, slider drags, presets, cancel) has one entry point
//! that computes a new value with the pure functions of this crate and
//! replaces the old one. After each replacement the picker re-applies the
//! alpha skip rule to the active display format and re-serializes the output;
//! the change listener fires only when that string actually changed.
//!
//! # Example
//!
//! ```rust
//! use trueno_picker::prelude::*;
//!
//! let config = PickerConfig::new()
//!     .with_output_format(OutputFormat::Hex)
//!     .with_alpha_channel(AlphaChannel::Hex8);
//! let mut picker = ColorPicker::new(config, Some("#FF000080"));
//!
//! assert_eq!(picker.output(), "#ff000080");
//! assert_eq!(picker.preview(), "rgba(255,0,0,0.5)");
//!
//! picker.drag(Channel::Alpha, SliderDrag::new(230.0, 230.0));
//! assert_eq!(picker.output(), "#ff0000");
//! ```

use std::fmt;

use tracing::{debug, trace, warn};

use crate::color::Hsva;
use crate::config::PickerConfig;
use crate::convert::{denormalize_rgba, hsva_to_rgba};
use crate::format::{
    format_color, format_rgb, hex_text, hue_color, rgba_text, HslaText, OutputFormat, RgbaText,
};
use crate::parse::parse_color;
use crate::policy::{enforce_alpha, next_format};
use crate::slider::{
    from_plane_drag, from_slider_drag, to_slider_position, Channel, SliderDimension, SliderDrag,
    SliderPosition,
};

/// Receives the serialized output whenever it changes.
///
/// The listener cannot reach back into the picker while it runs; queue any
/// follow-up edits and apply them after the mutating call returns.
pub trait ColorListener {
    /// Called with the new output string.
    fn color_changed(&mut self, value: &str);
}

impl<F: FnMut(&str)> ColorListener for F {
    fn color_changed(&mut self, value: &str) {
        self(value);
    }
}

/// Resolve `text` to a color: the preferred alpha mode, then the alternate
/// mode, then the configured fallback color (again in both modes).
///
/// Returns `None` only when the fallback itself is unparsable.
#[must_use]
pub fn parse_with_fallback(text: Option<&str>, config: &PickerConfig) -> Option<Hsva> {
    let preferred = config.alpha_channel;
    let attempt = |s: &str| {
        parse_color(s, preferred).or_else(|| {
            debug!(input = s, mode = %preferred, "retrying with the alternate alpha mode");
            parse_color(s, preferred.alternate())
        })
    };

    if let Some(hsva) = text.and_then(attempt) {
        return Some(hsva);
    }

    debug!(input = ?text, fallback = %config.fallback_color, "color did not parse, using fallback");
    attempt(&config.fallback_color)
}

/// Serialize `hsva` for the change listener: the configured output format,
/// moved off hex while hex would hide alpha.
fn emitted_output(hsva: Hsva, config: &PickerConfig) -> String {
    let mode = config.alpha_channel;
    let format = enforce_alpha(config.output_format, hsva, mode);
    format_color(hsva, format, mode.allows_hex_alpha())
}

/// Interactive color picker state.
///
/// Mutators return `true` when the output string changed and a
/// notification was sent (to the listener, if one is registered).
pub struct ColorPicker {
    config: PickerConfig,
    hsva: Hsva,
    format: OutputFormat,
    output: String,
    initial_color: Option<String>,
    dims: Option<SliderDimension>,
    listener: Option<Box<dyn ColorListener>>,
}

impl fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPicker")
            .field("config", &self.config)
            .field("hsva", &self.hsva)
            .field("format", &self.format)
            .field("output", &self.output)
            .field("initial_color", &self.initial_color)
            .field("dims", &self.dims)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl ColorPicker {
    /// Create a picker for `initial`, falling back to the configured
    /// fallback color. Does not notify.
    ///
    /// If neither parses the picker starts at opaque white.
    #[must_use]
    pub fn new(config: PickerConfig, initial: Option<&str>) -> Self {
        let hsva = parse_with_fallback(initial, &config).unwrap_or_else(|| {
            warn!(fallback = %config.fallback_color, "fallback color did not parse, using white");
            Hsva::WHITE
        });
        let format = enforce_alpha(config.output_format, hsva, config.alpha_channel);
        let output = emitted_output(hsva, &config);

        Self {
            config,
            hsva,
            format,
            output,
            initial_color: initial.map(str::to_string),
            dims: None,
            listener: None,
        }
    }

    /// Register the change listener, replacing any previous one.
    pub fn on_change(&mut self, listener: impl ColorListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the change listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The canonical color.
    #[must_use]
    pub fn hsva(&self) -> Hsva {
        self.hsva
    }

    /// The active display format.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// The last serialized output, in the configured output format (or
    /// `rgba` while that format is hex and hex cannot carry alpha).
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// The color the picker was opened with.
    #[must_use]
    pub fn initial_color(&self) -> Option<&str> {
        self.initial_color.as_deref()
    }

    fn allow_hex_alpha(&self) -> bool {
        self.config.alpha_channel.allows_hex_alpha()
    }

    /// Replace the color. Returns true when the output changed and `emit`
    /// was requested.
    fn update(&mut self, hsva: Hsva, emit: bool) -> bool {
        self.hsva = hsva.clamped();
        self.format = enforce_alpha(self.format, self.hsva, self.config.alpha_channel);

        let output = emitted_output(self.hsva, &self.config);
        if output == self.output {
            return false;
        }
        self.output = output;

        if !emit {
            return false;
        }
        trace!(output = %self.output, "color changed");
        if let Some(listener) = self.listener.as_mut() {
            listener.color_changed(&self.output);
        }
        true
    }

    fn load(&mut self, text: Option<&str>, emit: bool) -> bool {
        match parse_with_fallback(text, &self.config) {
            Some(hsva) => self.update(hsva, emit),
            None => {
                warn!(input = ?text, "no color could be parsed, keeping the current one");
                false
            }
        }
    }

    /// Apply a typed color. Unparsable text goes through the fallback chain;
    /// if that fails too the current color is kept.
    pub fn set_color_from_str(&mut self, text: &str) -> bool {
        self.load(Some(text), true)
    }

    /// Apply a color pushed by the host. Same as
    /// [`ColorPicker::set_color_from_str`] but never notifies.
    pub fn sync_color_from_str(&mut self, text: &str) {
        self.load(Some(text), false);
    }

    /// Reopen the picker on `color`, which becomes the new initial color.
    pub fn open(&mut self, color: Option<&str>) -> bool {
        self.initial_color = color.map(str::to_string);
        self.load(color, true)
    }

    /// Revert to the initial color.
    pub fn cancel(&mut self) -> bool {
        let initial = self.initial_color.clone();
        self.load(initial.as_deref(), true)
    }

    /// The picker was dismissed without OK or Cancel. Reverts unless
    /// `save_on_dismiss` is set.
    pub fn dismiss(&mut self) -> bool {
        if self.config.save_on_dismiss {
            false
        } else {
            self.cancel()
        }
    }

    /// Load preset number `index`. Out of range is a no-op.
    pub fn select_preset(&mut self, index: usize) -> bool {
        match self.config.preset_colors.get(index).cloned() {
            Some(color) => self.set_color_from_str(&color),
            None => false,
        }
    }

    /// Apply a drag or field edit on one channel.
    pub fn drag(&mut self, channel: Channel, drag: SliderDrag) -> bool {
        let hsva = from_slider_drag(channel, drag.value, drag.range_max, self.hsva);
        self.update(hsva, true)
    }

    /// Apply a drag on the saturation/value plane.
    pub fn drag_plane(&mut self, x: SliderDrag, y: SliderDrag) -> bool {
        let hsva = from_plane_drag(x, y, self.hsva);
        self.update(hsva, true)
    }

    /// Advance the display format, skipping hex when it would hide alpha.
    pub fn cycle_format(&mut self) -> OutputFormat {
        let next = next_format(self.format, self.hsva, self.config.alpha_channel);
        debug!(from = %self.format, to = %next, "display format cycled");
        self.format = next;
        next
    }

    /// Record the current control sizes reported by the view layer.
    pub fn set_dimensions(&mut self, dims: SliderDimension) {
        self.dims = Some(dims);
    }

    /// Control sizes, once known.
    #[must_use]
    pub fn dimensions(&self) -> Option<SliderDimension> {
        self.dims
    }

    /// Thumb positions for the current color, once dimensions are known.
    #[must_use]
    pub fn slider_position(&self) -> Option<SliderPosition> {
        self.dims
            .map(|dims| to_slider_position(self.hsva, dims, self.config.thumb_offset))
    }

    /// The color in the active display format.
    #[must_use]
    pub fn display_value(&self) -> String {
        format_color(self.hsva, self.format, self.allow_hex_alpha())
    }

    /// Format-independent `rgba(...)` for preview swatches.
    #[must_use]
    pub fn preview(&self) -> String {
        format_color(self.hsva, OutputFormat::Rgba, false)
    }

    /// RGBA field values.
    #[must_use]
    pub fn rgba_text(&self) -> RgbaText {
        rgba_text(self.hsva)
    }

    /// HSLA field values.
    #[must_use]
    pub fn hsla_text(&self) -> HslaText {
        HslaText::from_hsva(self.hsva)
    }

    /// Hex field value.
    #[must_use]
    pub fn hex_text(&self) -> String {
        hex_text(denormalize_rgba(hsva_to_rgba(self.hsva)), self.allow_hex_alpha())
    }

    /// Opaque `rgb(...)` of the current color, for the alpha slider gradient.
    #[must_use]
    pub fn alpha_slider_color(&self) -> String {
        format_rgb(self.hsva)
    }

    /// `rgb(...)` of the pure hue, for the saturation/value plane.
    #[must_use]
    pub fn hue_slider_color(&self) -> String {
        hue_color(self.hsva)
    }
}
