//! Color string parsing.
//!
//! # Syntax
//!
//! ```text
//! #rgb  #rgba  #rrggbb  #rrggbbaa      - hex, '#' optional, any case
//! rgb(r, g, b)  rgba(r, g, b, a)       - r/g/b as 0-255 or percent, a as 0-1 or percent
//! hsl(h, s%, l%)  hsla(h, s%, l%, a)   - h in signed degrees (mod 360), s/l in percent
//! ```
//!
//! Parsing is total: anything that does not match yields `None`. Surrounding
//! whitespace is ignored and out-of-range numbers are clamped.
//!
//! # Example
//!
//! ```rust
//! use trueno_picker::format::AlphaChannel;
//! use trueno_picker::parse::parse_color;
//!
//! let red = parse_color("#ff0000", AlphaChannel::Hex6).unwrap();
//! assert_eq!((red.h, red.s, red.v), (0.0, 1.0, 1.0));
//! assert!(parse_color("not-a-color", AlphaChannel::Hex6).is_none());
//! ```

use std::str::FromStr;

use crate::color::{Hsla, Hsva, Rgba};
use crate::convert::{hsla_to_hsva, rgba_to_hsva};
use crate::error::{Error, Result};
use crate::format::AlphaChannel;

/// Parse a color string into HSVA.
///
/// `mode` selects which hex lengths are recognized: [`AlphaChannel::Hex6`]
/// accepts 3 and 6 digits only, [`AlphaChannel::Hex8`] also accepts the
/// alpha-bearing 4 and 8 digit forms. Functional notations parse in both
/// modes. The parser never retries with the other mode; callers chain that.
#[must_use]
pub fn parse_color(text: &str, mode: AlphaChannel) -> Option<Hsva> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let lower = text.to_ascii_lowercase();
    if let Some(args) = function_args(&lower, "rgba").or_else(|| function_args(&lower, "rgb")) {
        return parse_rgb_args(args);
    }
    if let Some(args) = function_args(&lower, "hsla").or_else(|| function_args(&lower, "hsl")) {
        return parse_hsl_args(args);
    }

    parse_hex(&lower, mode)
}

impl FromStr for Hsva {
    type Err = Error;

    /// Parses with every hex length enabled.
    fn from_str(s: &str) -> Result<Self> {
        parse_color(s, AlphaChannel::Hex8).ok_or_else(|| Error::InvalidColor(s.trim().to_string()))
    }
}

/// Returns the text between `name(` and the closing `)`.
fn function_args<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    text.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn split_args(args: &str) -> Option<Vec<&str>> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    matches!(parts.len(), 3 | 4).then_some(parts)
}

/// Unsigned decimal number: digits with at most one '.'.
fn parse_number(s: &str) -> Option<f64> {
    let digits = s.bytes().filter(u8::is_ascii_digit).count();
    let dots = s.bytes().filter(|&b| b == b'.').count();
    if digits == 0 || dots > 1 || digits + dots != s.len() {
        return None;
    }
    s.parse::<f64>().ok()
}

/// A number with an optional `%`. Percentages scale by 1/100, bare numbers by
/// `1 / scale`.
fn parse_scaled(s: &str, scale: f64) -> Option<f64> {
    match s.strip_suffix('%') {
        Some(pct) => parse_number(pct.trim_end()).map(|n| n / 100.0),
        None => parse_number(s).map(|n| n / scale),
    }
}

fn parse_alpha(parts: &[&str]) -> Option<f64> {
    match parts.get(3) {
        Some(a) => parse_scaled(a, 1.0),
        None => Some(1.0),
    }
}

fn parse_rgb_args(args: &str) -> Option<Hsva> {
    let parts = split_args(args)?;
    let r = parse_scaled(parts[0], 255.0)?;
    let g = parse_scaled(parts[1], 255.0)?;
    let b = parse_scaled(parts[2], 255.0)?;
    let a = parse_alpha(&parts)?;

    Some(rgba_to_hsva(Rgba::new(r, g, b, a)))
}

/// Hue in degrees, optionally signed and suffixed with `deg`.
fn parse_hue(s: &str) -> Option<f64> {
    let s = s.strip_suffix("deg").unwrap_or(s);
    match s.strip_prefix('-') {
        Some(magnitude) => parse_number(magnitude).map(|n| -n),
        None => parse_number(s.strip_prefix('+').unwrap_or(s)),
    }
}

fn parse_hsl_args(args: &str) -> Option<Hsva> {
    let parts = split_args(args)?;
    let degrees = parse_hue(parts[0])?;
    let s = parse_scaled(parts[1], 100.0)?;
    let l = parse_scaled(parts[2], 100.0)?;
    let a = parse_alpha(&parts)?;

    Some(hsla_to_hsva(Hsla::new(degrees.rem_euclid(360.0) / 360.0, s, l, a)))
}

fn parse_hex(text: &str, mode: AlphaChannel) -> Option<Hsva> {
    let hex = text.strip_prefix('#').unwrap_or(text);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    let (r, g, b, a) = match (hex.len(), mode) {
        (3, _) => (nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17, 255),
        (6, _) => (byte(0)?, byte(2)?, byte(4)?, 255),
        (4, AlphaChannel::Hex8) => (
            nibble(0)? * 17,
            nibble(1)? * 17,
            nibble(2)? * 17,
            nibble(3)? * 17,
        ),
        (8, AlphaChannel::Hex8) => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
        _ => return None,
    };

    Some(rgba_to_hsva(Rgba::from_u8(r, g, b, f64::from(a) / 255.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn hex6(s: &str) -> Option<Hsva> {
        parse_color(s, AlphaChannel::Hex6)
    }

    fn hex8(s: &str) -> Option<Hsva> {
        parse_color(s, AlphaChannel::Hex8)
    }

    #[test]
    fn test_parse_hex6() {
        let red = hex6("#FF0000").unwrap();
        assert_eq!(red, Hsva::hsv(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_parse_hex_without_hash() {
        assert_eq!(hex6("00ff00"), hex6("#00FF00"));
        assert!(hex6("00ff00").is_some());
    }

    #[test]
    fn test_parse_hex3_expands() {
        assert_eq!(hex6("#fff"), Some(Hsva::WHITE));
        assert_eq!(hex6("#f00"), hex6("#ff0000"));
    }

    #[test]
    fn test_parse_hex8_alpha() {
        let c = hex8("#FF000080").unwrap();
        assert_eq!((c.h, c.s, c.v), (0.0, 1.0, 1.0));
        assert_abs_diff_eq!(c.a, 128.0 / 255.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_hex4_alpha() {
        let c = hex8("#f008").unwrap();
        assert_abs_diff_eq!(c.a, 136.0 / 255.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hex6_mode_rejects_alpha_lengths() {
        assert!(hex6("#FF000080").is_none());
        assert!(hex6("#f008").is_none());
    }

    #[test]
    fn test_hex8_mode_accepts_opaque_lengths() {
        assert_eq!(hex8("#ffffff"), Some(Hsva::WHITE));
        assert_eq!(hex8("#fff"), Some(Hsva::WHITE));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(hex8("#ff00").is_some());
        assert!(hex8("#ff0").is_some());
        assert!(hex8("#ff").is_none());
        assert!(hex8("#fffff").is_none());
        assert!(hex8("#gggggg").is_none());
        assert!(hex8("##ffffff").is_none());
        assert!(hex8("#ffffffff00").is_none());
    }

    #[test]
    fn test_parse_whitespace_ignored() {
        assert_eq!(hex6("  #ffffff \n"), Some(Hsva::WHITE));
        assert_eq!(hex6(" rgb(255, 255, 255) "), Some(Hsva::WHITE));
    }

    #[test]
    fn test_parse_empty() {
        assert!(hex6("").is_none());
        assert!(hex6("   ").is_none());
        assert!(hex6("#").is_none());
    }

    #[test]
    fn test_parse_rgb() {
        let c = hex6("rgb(255,0,0)").unwrap();
        assert_eq!(c, Hsva::hsv(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_parse_rgba() {
        let c = hex6("rgba(0, 0, 255, 0.5)").unwrap();
        assert_abs_diff_eq!(c.h, 2.0 / 3.0, epsilon = 1e-12);
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn test_parse_rgb_percentages() {
        let c = hex6("rgba(100%, 50%, 0%, 25%)").unwrap();
        assert_eq!(c.v, 1.0);
        assert_eq!(c.a, 0.25);
        assert_abs_diff_eq!(c.h, 1.0 / 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_rgb_case_insensitive() {
        assert_eq!(hex6("RGB(255,255,255)"), Some(Hsva::WHITE));
        assert_eq!(hex6("Rgba(255,255,255,1)"), Some(Hsva::WHITE));
    }

    #[test]
    fn test_parse_rgb_clamps_out_of_range() {
        assert_eq!(hex6("rgb(300, 300, 999)"), Some(Hsva::WHITE));
        assert_eq!(hex6("rgba(255, 255, 255, 7)"), Some(Hsva::WHITE));
    }

    #[test]
    fn test_parse_rgb_malformed() {
        assert!(hex6("rgb(255,0)").is_none());
        assert!(hex6("rgb(255,0,0,1,1)").is_none());
        assert!(hex6("rgb(255,0,0").is_none());
        assert!(hex6("rgb(-1,0,0)").is_none());
        assert!(hex6("rgb(a,b,c)").is_none());
        assert!(hex6("rgb(1.2.3,0,0)").is_none());
        assert!(hex6("rgb(inf,0,0)").is_none());
        assert!(hex6("rgb(,0,0)").is_none());
        assert!(hex6("rgbx(0,0,0)").is_none());
    }

    #[test]
    fn test_parse_hsl() {
        let c = hex6("hsl(120, 100%, 50%)").unwrap();
        assert_abs_diff_eq!(c.h, 1.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.s, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.v, 1.0, epsilon = 1e-12);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_parse_hsla() {
        let c = hex6("hsla(240,100%,50%,0.3)").unwrap();
        assert_abs_diff_eq!(c.h, 2.0 / 3.0, epsilon = 1e-12);
        assert_eq!(c.a, 0.3);
    }

    #[test]
    fn test_parse_hsl_hue_wraps() {
        let wrapped = hex6("hsl(480, 100%, 50%)").unwrap();
        let plain = hex6("hsl(120, 100%, 50%)").unwrap();
        assert_abs_diff_eq!(wrapped.h, plain.h, epsilon = 1e-12);
        assert_eq!(hex6("hsl(360, 100%, 50%)").unwrap().h, 0.0);
    }

    #[test]
    fn test_parse_hsl_keeps_hue_for_gray() {
        let gray = hex6("hsl(200, 0%, 50%)").unwrap();
        assert_abs_diff_eq!(gray.h, 200.0 / 360.0, epsilon = 1e-12);
        assert_eq!(gray.s, 0.0);
    }

    #[test]
    fn test_parse_hsl_deg_suffix() {
        assert_eq!(hex6("hsl(90deg, 50%, 50%)"), hex6("hsl(90, 50%, 50%)"));
    }

    #[test]
    fn test_parse_hsl_negative_hue() {
        let negative = hex6("hsl(-120, 100%, 50%)").unwrap();
        assert_eq!(Some(negative), hex6("hsl(240, 100%, 50%)"));
        assert_eq!(hex6("hsla(-90deg, 50%, 50%, 0.5)"), hex6("hsla(270deg, 50%, 50%, 0.5)"));
        assert_eq!(hex6("hsl(+90, 50%, 50%)"), hex6("hsl(90, 50%, 50%)"));
    }

    #[test]
    fn test_parse_hsl_sign_only_on_hue() {
        assert!(hex6("hsl(120, -50%, 50%)").is_none());
        assert!(hex6("hsl(--120, 50%, 50%)").is_none());
        assert!(hex6("hsl(-, 50%, 50%)").is_none());
    }

    #[test]
    fn test_parse_keyword_unsupported() {
        assert!(hex6("red").is_none());
        assert!(hex6("not-a-color").is_none());
    }

    #[test]
    fn test_from_str() {
        let c: Hsva = "#ff000080".parse().unwrap();
        assert_eq!(c.s, 1.0);

        let err = "bogus".parse::<Hsva>().unwrap_err();
        assert!(matches!(err, Error::InvalidColor(ref s) if s == "bogus"));
    }
}
