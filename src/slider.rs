//! Mapping between colors and slider thumb positions.
//!
//! The view layer reports the pixel extent of each control
//! ([`SliderDimension`]) and raw drag values (`value` out of `range_max`).
//! This module turns an [`Hsva`] into thumb offsets and drags back into a new
//! [`Hsva`]. It knows nothing about screen coordinates beyond those numbers.
//!
//! The saturation/value plane has full value at the top, so its vertical axis
//! is inverted in both directions.

use crate::color::{clamp_unit, Hsva};
use crate::convert::{hsla_to_hsva, hsva_to_hsla, hsva_to_rgba, rgba_to_hsva_preserving};

/// Thumb radius used by the stock widget skin.
pub const DEFAULT_THUMB_OFFSET: f64 = 8.0;

/// Pixel extents of the interactive controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderDimension {
    /// Hue slider length.
    pub hue: f64,
    /// Saturation/value plane width.
    pub sv_width: f64,
    /// Saturation/value plane height.
    pub sv_height: f64,
    /// Alpha slider length.
    pub alpha: f64,
}

impl SliderDimension {
    /// Create slider dimensions.
    #[must_use]
    pub const fn new(hue: f64, sv_width: f64, sv_height: f64, alpha: f64) -> Self {
        Self {
            hue,
            sv_width,
            sv_height,
            alpha,
        }
    }
}

/// Thumb offsets in pixels, already shifted by the thumb radius.
///
/// Values can be negative: a thumb at the very start of a control is centered
/// on its edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPosition {
    /// Hue slider thumb.
    pub hue: f64,
    /// Plane cursor x (saturation).
    pub saturation: f64,
    /// Plane cursor y (inverted value).
    pub value: f64,
    /// Alpha slider thumb.
    pub alpha: f64,
}

/// Compute thumb positions for `hsva` within `dims`.
#[must_use]
pub fn to_slider_position(hsva: Hsva, dims: SliderDimension, thumb_offset: f64) -> SliderPosition {
    let hsva = hsva.clamped();
    SliderPosition {
        hue: hsva.h * dims.hue - thumb_offset,
        saturation: hsva.s * dims.sv_width - thumb_offset,
        value: (1.0 - hsva.v) * dims.sv_height - thumb_offset,
        alpha: hsva.a * dims.alpha - thumb_offset,
    }
}

/// A single input channel a drag or numeric field can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// HSV hue.
    Hue,
    /// HSV saturation.
    Saturation,
    /// HSV value.
    Value,
    /// Alpha.
    Alpha,
    /// HSL saturation.
    HslSaturation,
    /// HSL lightness.
    Lightness,
    /// RGB red.
    Red,
    /// RGB green.
    Green,
    /// RGB blue.
    Blue,
}

/// A raw drag or field value, `value` out of `range_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderDrag {
    /// Position along the control.
    pub value: f64,
    /// Length of the control.
    pub range_max: f64,
}

impl SliderDrag {
    /// Create a drag value.
    #[must_use]
    pub const fn new(value: f64, range_max: f64) -> Self {
        Self { value, range_max }
    }

    /// `value / range_max` clamped into `[0, 1]`, or `None` for an unusable
    /// range or a NaN value.
    #[must_use]
    pub fn fraction(self) -> Option<f64> {
        if !(self.range_max.is_finite() && self.range_max > 0.0) || self.value.is_nan() {
            return None;
        }
        Some(clamp_unit(self.value / self.range_max))
    }
}

/// Apply a drag on one channel. Overshoot is clamped; an unusable
/// `range_max` leaves `hsva` unchanged.
#[must_use]
pub fn from_slider_drag(channel: Channel, value: f64, range_max: f64, hsva: Hsva) -> Hsva {
    let hsva = hsva.clamped();
    let Some(f) = SliderDrag::new(value, range_max).fraction() else {
        return hsva;
    };

    match channel {
        Channel::Hue => Hsva { h: f, ..hsva },
        Channel::Saturation => Hsva { s: f, ..hsva },
        Channel::Value => Hsva { v: f, ..hsva },
        Channel::Alpha => Hsva { a: f, ..hsva },
        Channel::HslSaturation | Channel::Lightness => {
            let mut hsla = hsva_to_hsla(hsva);
            if channel == Channel::HslSaturation {
                hsla.s = f;
            } else {
                hsla.l = f;
            }
            hsla_to_hsva(hsla)
        }
        Channel::Red | Channel::Green | Channel::Blue => {
            let mut rgba = hsva_to_rgba(hsva);
            match channel {
                Channel::Red => rgba.r = f,
                Channel::Green => rgba.g = f,
                _ => rgba.b = f,
            }
            rgba_to_hsva_preserving(rgba, hsva)
        }
    }
}

/// Apply a drag on the saturation/value plane. `x` runs left to right for
/// saturation, `y` top to bottom for decreasing value.
#[must_use]
pub fn from_plane_drag(x: SliderDrag, y: SliderDrag, hsva: Hsva) -> Hsva {
    let hsva = hsva.clamped();
    Hsva {
        s: x.fraction().unwrap_or(hsva.s),
        v: y.fraction().map_or(hsva.v, |f| 1.0 - f),
        ..hsva
    }
}
