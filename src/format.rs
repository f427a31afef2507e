//! Serialization of colors into display strings.
//!
//! Output is compact CSS with no spaces, lowercase hex, integer channels and
//! alpha rounded to two decimals:
//!
//! ```text
//! hex   #rrggbb  or  #rrggbbaa
//! rgba  rgba(255,0,0,0.5)     (alpha-free variant: rgb(255,0,0))
//! hsla  hsla(0,100%,50%,0.5)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Hsva, Rgba8};
use crate::convert::{denormalize_rgba, hsva_to_hsla, hsva_to_rgba};
use crate::error::{Error, Result};

/// Textual output format, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum OutputFormat {
    /// `#rrggbb` / `#rrggbbaa`.
    #[default]
    Hex = 0,
    /// `rgba(r,g,b,a)`.
    Rgba = 1,
    /// `hsla(h,s%,l%,a)`.
    Hsla = 2,
}

impl OutputFormat {
    /// All formats in cycle order.
    pub const ALL: [Self; 3] = [Self::Hex, Self::Rgba, Self::Hsla];

    /// Position in the cycle (0 = hex, 1 = rgba, 2 = hsla).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Format at `index`, wrapping modulo 3.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % 3) as usize]
    }

    /// The next format in the cycle, without any alpha policy applied.
    #[must_use]
    pub const fn successor(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Lowercase name as used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgba => "rgba",
            Self::Hsla => "hsla",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgba" => Ok(Self::Rgba),
            "hsla" => Ok(Self::Hsla),
            other => Err(Error::InvalidFormat(format!("unknown output format: {other}"))),
        }
    }
}

/// Whether hex strings may carry an alpha component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphaChannel {
    /// Hex is always six digits; alpha cannot be shown in hex.
    #[default]
    Hex6,
    /// Hex may be eight digits when alpha < 1.
    Hex8,
}

impl AlphaChannel {
    /// True for [`AlphaChannel::Hex8`].
    #[must_use]
    pub const fn allows_hex_alpha(self) -> bool {
        matches!(self, Self::Hex8)
    }

    /// The other mode; used as the second parse attempt.
    #[must_use]
    pub const fn alternate(self) -> Self {
        match self {
            Self::Hex6 => Self::Hex8,
            Self::Hex8 => Self::Hex6,
        }
    }

    /// Lowercase name as used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hex6 => "hex6",
            Self::Hex8 => "hex8",
        }
    }
}

impl fmt::Display for AlphaChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlphaChannel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex6" => Ok(Self::Hex6),
            "hex8" => Ok(Self::Hex8),
            other => Err(Error::InvalidFormat(format!("unknown alpha channel: {other}"))),
        }
    }
}

/// Rounds a 0-1 fraction to two decimals.
#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// RGBA as shown in the per-channel text fields.
pub type RgbaText = Rgba8;

/// HSLA as shown in the per-channel text fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslaText {
    /// Hue in whole degrees (0-359).
    pub h: u16,
    /// Saturation in whole percent.
    pub s: u8,
    /// Lightness in whole percent.
    pub l: u8,
    /// Alpha rounded to two decimals.
    pub a: f64,
}

impl HslaText {
    /// Rounds an HSVA value for display.
    #[must_use]
    pub fn from_hsva(hsva: Hsva) -> Self {
        let hsla = hsva_to_hsla(hsva);
        Self {
            h: ((hsla.h * 360.0).round() as u16) % 360,
            s: (hsla.s * 100.0).round() as u8,
            l: (hsla.l * 100.0).round() as u8,
            a: round2(hsla.a),
        }
    }
}

impl fmt::Display for HslaText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsla({},{}%,{}%,{})", self.h, self.s, self.l, self.a)
    }
}

/// Denormalized channels with alpha rounded to two decimals.
#[must_use]
pub fn rgba_text(hsva: Hsva) -> RgbaText {
    let rgba = denormalize_rgba(hsva_to_rgba(hsva));
    Rgba8 {
        a: round2(rgba.a),
        ..rgba
    }
}

/// `#rrggbb`, plus `aa` when `allow_hex8` and the color is translucent.
#[must_use]
pub fn hex_text(rgba: Rgba8, allow_hex8: bool) -> String {
    let mut hex = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    if allow_hex8 && rgba.a < 1.0 {
        hex.push_str(&format!("{:02x}", rgba.to_array()[3]));
    }
    hex
}

/// Serialize `hsva` in `target` format.
///
/// `allow_alpha_in_hex` only affects [`OutputFormat::Hex`]. Requesting hex for
/// a translucent color without it drops alpha; keeping hex out of reach in
/// that case is [`crate::policy`]'s job.
#[must_use]
pub fn format_color(hsva: Hsva, target: OutputFormat, allow_alpha_in_hex: bool) -> String {
    match target {
        OutputFormat::Hex => hex_text(denormalize_rgba(hsva_to_rgba(hsva)), allow_alpha_in_hex),
        OutputFormat::Rgba => {
            let t = rgba_text(hsva);
            format!("rgba({},{},{},{})", t.r, t.g, t.b, t.a)
        }
        OutputFormat::Hsla => HslaText::from_hsva(hsva).to_string(),
    }
}

/// The alpha-free `rgb(r,g,b)` variant.
#[must_use]
pub fn format_rgb(hsva: Hsva) -> String {
    let t = rgba_text(hsva);
    format!("rgb({},{},{})", t.r, t.g, t.b)
}

/// `rgb(...)` of the pure hue at full saturation and value.
#[must_use]
pub fn hue_color(hsva: Hsva) -> String {
    format_rgb(Hsva::hsv(hsva.h, 1.0, 1.0))
}
