//! Conversions between the HSVA, HSLA and RGBA color spaces.
//!
//! Every function is total: inputs are clamped into `[0, 1]` before any math
//! runs, and outputs are built through the clamping constructors.
//!
//! Achromatic colors carry no hue (and black carries no saturation) in RGB.
//! HSV <-> HSL keeps both through the degenerate cases, and
//! [`rgba_to_hsva_preserving`] restores them from the previous value so that
//! editing a gray does not throw away the user's hue.

use crate::color::{clamp_unit, Hsla, Hsva, Rgba, Rgba8};

/// `1 - |2l - 1|`, written so small and large lightness stay exact.
#[inline]
fn chroma_span(l: f64) -> f64 {
    2.0 * l.min(1.0 - l)
}

/// HSVA -> HSLA.
///
/// Black keeps its HSV saturation as HSL saturation so the conversion stays
/// reversible; white maps to zero saturation.
#[must_use]
pub fn hsva_to_hsla(hsva: Hsva) -> Hsla {
    let Hsva { h, s, v, a } = hsva.clamped();

    if v == 0.0 {
        return Hsla::new(h, s, 0.0, a);
    }

    let l = v * (2.0 - s) / 2.0;
    if l >= 1.0 {
        return Hsla::new(h, 0.0, 1.0, a);
    }

    Hsla::new(h, v * s / chroma_span(l), l, a)
}

/// HSLA -> HSVA.
#[must_use]
pub fn hsla_to_hsva(hsla: Hsla) -> Hsva {
    let Hsla { h, s, l, a } = hsla.clamped();

    if l == 0.0 {
        return Hsva::new(h, s, 0.0, a);
    }

    let v = l + s * chroma_span(l) / 2.0;
    Hsva::new(h, 2.0 * (v - l) / v, v, a)
}

/// HSVA -> normalized RGBA.
#[must_use]
pub fn hsva_to_rgba(hsva: Hsva) -> Rgba {
    let Hsva { h, s, v, a } = hsva.clamped();

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    // h == 1.0 lands on sector 6, which is the same as sector 0.
    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgba::new(r, g, b, a)
}

/// Normalized RGBA -> HSVA.
///
/// Achromatic input yields hue 0. Use [`rgba_to_hsva_preserving`] when a
/// previous value is available.
#[must_use]
pub fn rgba_to_hsva(rgba: Rgba) -> Hsva {
    let Rgba { r, g, b, a } = rgba.clamped();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };

    let h = if d == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    Hsva::new(h, s, max, a)
}

/// Normalized RGBA -> HSVA, keeping the hue of `previous` when the result is
/// achromatic and its saturation when the result is black.
#[must_use]
pub fn rgba_to_hsva_preserving(rgba: Rgba, previous: Hsva) -> Hsva {
    let mut hsva = rgba_to_hsva(rgba);
    let previous = previous.clamped();

    if hsva.s == 0.0 || hsva.v == 0.0 {
        hsva.h = previous.h;
    }
    if hsva.v == 0.0 {
        hsva.s = previous.s;
    }

    hsva
}

/// Scales a normalized channel to 0-255.
#[inline]
fn to_byte(x: f64) -> u8 {
    (clamp_unit(x) * 255.0).round() as u8
}

/// Normalized RGBA -> 0-255 display channels. Alpha stays a fraction.
#[must_use]
pub fn denormalize_rgba(rgba: Rgba) -> Rgba8 {
    let rgba = rgba.clamped();
    Rgba8::new(to_byte(rgba.r), to_byte(rgba.g), to_byte(rgba.b), rgba.a)
}

/// 0-255 display channels -> normalized RGBA.
#[must_use]
pub fn normalize_rgba(rgba: Rgba8) -> Rgba {
    Rgba::from_u8(rgba.r, rgba.g, rgba.b, rgba.a)
}

impl From<Hsva> for Hsla {
    fn from(hsva: Hsva) -> Self {
        hsva_to_hsla(hsva)
    }
}

impl From<Hsla> for Hsva {
    fn from(hsla: Hsla) -> Self {
        hsla_to_hsva(hsla)
    }
}

impl From<Hsva> for Rgba {
    fn from(hsva: Hsva) -> Self {
        hsva_to_rgba(hsva)
    }
}

impl From<Rgba> for Hsva {
    fn from(rgba: Rgba) -> Self {
        rgba_to_hsva(rgba)
    }
}

impl From<Rgba> for Rgba8 {
    fn from(rgba: Rgba) -> Self {
        denormalize_rgba(rgba)
    }
}

impl From<Rgba8> for Rgba {
    fn from(rgba: Rgba8) -> Self {
        normalize_rgba(rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hsva_to_rgba_primaries() {
        assert_eq!(hsva_to_rgba(Hsva::hsv(0.0, 1.0, 1.0)), Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(denormalize_rgba(hsva_to_rgba(Hsva::hsv(1.0 / 3.0, 1.0, 1.0))).g, 255);
        assert_eq!(denormalize_rgba(hsva_to_rgba(Hsva::hsv(2.0 / 3.0, 1.0, 1.0))).b, 255);
    }

    #[test]
    fn test_hsva_to_rgba_full_turn_is_red() {
        let rgba = denormalize_rgba(hsva_to_rgba(Hsva::hsv(1.0, 1.0, 1.0)));
        assert_eq!((rgba.r, rgba.g, rgba.b), (255, 0, 0));
    }

    #[test]
    fn test_hsva_to_rgba_gray() {
        let gray = denormalize_rgba(hsva_to_rgba(Hsva::hsv(0.7, 0.0, 0.5)));
        assert_eq!((gray.r, gray.g, gray.b), (128, 128, 128));
    }

    #[test]
    fn test_rgba_to_hsva_sectors() {
        let yellow = rgba_to_hsva(Rgba::rgb(1.0, 1.0, 0.0));
        assert_abs_diff_eq!(yellow.h, 1.0 / 6.0, epsilon = 1e-12);

        let cyan = rgba_to_hsva(Rgba::rgb(0.0, 1.0, 1.0));
        assert_abs_diff_eq!(cyan.h, 0.5, epsilon = 1e-12);

        let magenta = rgba_to_hsva(Rgba::rgb(1.0, 0.0, 1.0));
        assert_abs_diff_eq!(magenta.h, 5.0 / 6.0, epsilon = 1e-12);
        assert_eq!(magenta.s, 1.0);
        assert_eq!(magenta.v, 1.0);
    }

    #[test]
    fn test_rgba_to_hsva_achromatic_hue_zero() {
        let gray = rgba_to_hsva(Rgba::rgb(0.5, 0.5, 0.5));
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert_eq!(gray.v, 0.5);
    }

    #[test]
    fn test_preserving_keeps_hue_on_gray() {
        let previous = Hsva::new(0.4, 0.8, 0.9, 1.0);
        let gray = rgba_to_hsva_preserving(Rgba::rgb(0.3, 0.3, 0.3), previous);
        assert_eq!(gray.h, 0.4);
        assert_eq!(gray.s, 0.0);
    }

    #[test]
    fn test_preserving_keeps_hue_and_saturation_on_black() {
        let previous = Hsva::new(0.4, 0.8, 0.9, 1.0);
        let black = rgba_to_hsva_preserving(Rgba::rgb(0.0, 0.0, 0.0), previous);
        assert_eq!(black, Hsva::new(0.4, 0.8, 0.0, 1.0));
    }

    #[test]
    fn test_preserving_ignores_previous_for_chromatic() {
        let previous = Hsva::new(0.4, 0.8, 0.9, 1.0);
        let red = rgba_to_hsva_preserving(Rgba::rgb(1.0, 0.0, 0.0), previous);
        assert_eq!(red.h, 0.0);
        assert_eq!(red.s, 1.0);
    }

    #[test]
    fn test_hsva_to_hsla_known_values() {
        let red = hsva_to_hsla(Hsva::hsv(0.0, 1.0, 1.0));
        assert_abs_diff_eq!(red.s, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(red.l, 0.5, epsilon = 1e-12);

        let white = hsva_to_hsla(Hsva::WHITE);
        assert_eq!((white.s, white.l), (0.0, 1.0));

        let black = hsva_to_hsla(Hsva::new(0.3, 0.6, 0.0, 0.5));
        assert_eq!(black, Hsla::new(0.3, 0.6, 0.0, 0.5));
    }

    #[test]
    fn test_hsla_to_hsva_known_values() {
        let red = hsla_to_hsva(Hsla::hsl(0.0, 1.0, 0.5));
        assert_abs_diff_eq!(red.s, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(red.v, 1.0, epsilon = 1e-12);

        let white = hsla_to_hsva(Hsla::hsl(0.2, 0.7, 1.0));
        assert_eq!((white.h, white.s, white.v), (0.2, 0.0, 1.0));
    }

    #[test]
    fn test_hue_and_alpha_pass_through() {
        let hsva = Hsva::new(0.123, 0.4, 0.6, 0.37);
        let hsla = hsva_to_hsla(hsva);
        assert_eq!(hsla.h, 0.123);
        assert_eq!(hsla.a, 0.37);
        assert_eq!(hsva_to_rgba(hsva).a, 0.37);
    }

    #[test]
    fn test_out_of_range_inputs_clamped() {
        let wild = Hsva { h: 4.0, s: -3.0, v: 9.0, a: -1.0 };
        assert_eq!(hsva_to_rgba(wild), Rgba::new(1.0, 1.0, 1.0, 0.0));

        let wild = Rgba { r: 2.0, g: -1.0, b: 0.0, a: 7.0 };
        assert_eq!(denormalize_rgba(wild), Rgba8::new(255, 0, 0, 1.0));
    }

    #[test]
    fn test_denormalize_rounds() {
        let rgba = Rgba::new(0.5, 0.2, 1.0 / 255.0 * 0.49, 0.5);
        let d = denormalize_rgba(rgba);
        assert_eq!((d.r, d.g, d.b), (128, 51, 0));
        assert_eq!(d.a, 0.5);
    }

    #[test]
    fn test_normalize_denormalize_bytes_exact() {
        for byte in 0..=255u8 {
            let back = denormalize_rgba(normalize_rgba(Rgba8::new(byte, byte, byte, 1.0)));
            assert_eq!(back.r, byte);
        }
    }

    #[test]
    fn test_from_impls() {
        let hsva = Hsva::hsv(0.0, 1.0, 1.0);
        let rgba: Rgba = hsva.into();
        let rgba8: Rgba8 = rgba.into();
        assert_eq!(rgba8, Rgba8::new(255, 0, 0, 1.0));
        let back: Hsva = Rgba::from(rgba8).into();
        assert_eq!(back, hsva);
    }
}
