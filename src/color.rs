//! Color value types.
//!
//! [`Hsva`] is the canonical representation a picker edits; [`Hsla`] and
//! [`Rgba`] are derived display spaces. All three hold normalized `f64`
//! components in `[0, 1]` (hue included: `1.0` is a full turn). [`Rgba8`] is
//! the denormalized form shown to users, with 0-255 integer channels.
//!
//! Constructors clamp their inputs, so a value built through `new` is always
//! in range. Conversions live in [`crate::convert`].

/// Clamps a component into `[0, 1]`, mapping NaN to `0`.
#[inline]
pub(crate) fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Hue / saturation / value / alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsva {
    /// Hue (0.0-1.0, one full turn).
    pub h: f64,
    /// Saturation (0.0-1.0).
    pub s: f64,
    /// Value / brightness (0.0-1.0).
    pub v: f64,
    /// Alpha (0.0-1.0, 1.0 = fully opaque).
    pub a: f64,
}

impl Hsva {
    /// Opaque white.
    pub const WHITE: Self = Self { h: 0.0, s: 0.0, v: 1.0, a: 1.0 };
    /// Opaque black.
    pub const BLACK: Self = Self { h: 0.0, s: 0.0, v: 0.0, a: 1.0 };

    /// Create a new HSVA color, clamping every component into `[0, 1]`.
    #[must_use]
    pub fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self {
            h: clamp_unit(h),
            s: clamp_unit(s),
            v: clamp_unit(v),
            a: clamp_unit(a),
        }
    }

    /// Create an opaque HSV color (alpha = 1.0).
    #[must_use]
    pub fn hsv(h: f64, s: f64, v: f64) -> Self {
        Self::new(h, s, v, 1.0)
    }

    /// Returns a copy with every component clamped into `[0, 1]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(self.h, self.s, self.v, self.a)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Self::new(self.h, self.s, self.v, a)
    }

    /// True when the color is not fully opaque.
    #[must_use]
    pub fn is_translucent(&self) -> bool {
        self.a < 1.0
    }
}

/// Hue / saturation / lightness / alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// Hue (0.0-1.0, one full turn).
    pub h: f64,
    /// Saturation (0.0-1.0).
    pub s: f64,
    /// Lightness (0.0-1.0).
    pub l: f64,
    /// Alpha (0.0-1.0).
    pub a: f64,
}

impl Hsla {
    /// Create a new HSLA color, clamping every component into `[0, 1]`.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            h: clamp_unit(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
            a: clamp_unit(a),
        }
    }

    /// Create an opaque HSL color (alpha = 1.0).
    #[must_use]
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::new(h, s, l, 1.0)
    }

    /// Returns a copy with every component clamped into `[0, 1]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(self.h, self.s, self.l, self.a)
    }
}

/// Normalized RGBA color (every channel 0.0-1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red component (0.0-1.0).
    pub r: f64,
    /// Green component (0.0-1.0).
    pub g: f64,
    /// Blue component (0.0-1.0).
    pub b: f64,
    /// Alpha component (0.0-1.0).
    pub a: f64,
}

impl Rgba {
    /// Create a new normalized RGBA color, clamping every channel into `[0, 1]`.
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// Create an opaque RGB color (alpha = 1.0).
    #[must_use]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create from 0-255 channels and a 0-1 alpha.
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            a,
        )
    }

    /// Returns a copy with every channel clamped into `[0, 1]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(self.r, self.g, self.b, self.a)
    }
}

/// Denormalized RGBA color for display.
///
/// Channels are `round(normalized * 255)`. Alpha stays a 0-1 fraction; it is
/// rounded only when serialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba8 {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0-1.0).
    pub a: f64,
}

impl Rgba8 {
    /// Create a new display color. Alpha is clamped into `[0, 1]`.
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: clamp_unit(a),
        }
    }

    /// Convert to array representation, alpha scaled to 0-255.
    #[must_use]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, (self.a * 255.0).round() as u8]
    }
}
