//! Active display format policy.
//!
//! The display cycles hex -> rgba -> hsla -> hex. Hex is skipped while the
//! color is translucent and the alpha channel mode cannot embed alpha in hex,
//! so the user never sees a value that silently drops transparency.

use tracing::debug;

use crate::color::Hsva;
use crate::format::{AlphaChannel, OutputFormat};

/// True when `format` cannot show `hsva` without losing alpha.
#[must_use]
pub fn hides_alpha(format: OutputFormat, hsva: Hsva, mode: AlphaChannel) -> bool {
    format == OutputFormat::Hex && hsva.is_translucent() && !mode.allows_hex_alpha()
}

/// Reactive form of the skip rule: moves off hex when it would hide alpha,
/// otherwise returns `current` unchanged.
///
/// Called after every alpha change, not only on explicit cycling.
#[must_use]
pub fn enforce_alpha(current: OutputFormat, hsva: Hsva, mode: AlphaChannel) -> OutputFormat {
    if hides_alpha(current, hsva, mode) {
        let next = current.successor();
        debug!(from = %current, to = %next, alpha = hsva.a, "hex cannot show alpha, skipping");
        next
    } else {
        current
    }
}

/// The format after `current` in the cycle, with the hex skip rule applied.
#[must_use]
pub fn next_format(current: OutputFormat, hsva: Hsva, mode: AlphaChannel) -> OutputFormat {
    enforce_alpha(current.successor(), hsva, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat::{Hex, Hsla, Rgba};

    const OPAQUE: Hsva = Hsva::WHITE;

    fn translucent() -> Hsva {
        Hsva::WHITE.with_alpha(0.5)
    }

    #[test]
    fn test_cycle_opaque() {
        assert_eq!(next_format(Hex, OPAQUE, AlphaChannel::Hex6), Rgba);
        assert_eq!(next_format(Rgba, OPAQUE, AlphaChannel::Hex6), Hsla);
        assert_eq!(next_format(Hsla, OPAQUE, AlphaChannel::Hex6), Hex);
    }

    #[test]
    fn test_cycle_skips_hex_when_alpha_hidden() {
        assert_eq!(next_format(Hsla, translucent(), AlphaChannel::Hex6), Rgba);
    }

    #[test]
    fn test_cycle_from_hex_with_alpha() {
        assert_eq!(next_format(Hex, translucent(), AlphaChannel::Hex6), Rgba);
    }

    #[test]
    fn test_cycle_keeps_hex_in_hex8_mode() {
        assert_eq!(next_format(Hsla, translucent(), AlphaChannel::Hex8), Hex);
    }

    #[test]
    fn test_enforce_alpha() {
        assert_eq!(enforce_alpha(Hex, translucent(), AlphaChannel::Hex6), Rgba);
        assert_eq!(enforce_alpha(Hex, OPAQUE, AlphaChannel::Hex6), Hex);
        assert_eq!(enforce_alpha(Hex, translucent(), AlphaChannel::Hex8), Hex);
        assert_eq!(enforce_alpha(Hsla, translucent(), AlphaChannel::Hex6), Hsla);
    }

    #[test]
    fn test_hides_alpha() {
        assert!(hides_alpha(Hex, translucent(), AlphaChannel::Hex6));
        assert!(!hides_alpha(Rgba, translucent(), AlphaChannel::Hex6));
        assert!(!hides_alpha(Hex, OPAQUE, AlphaChannel::Hex6));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The policy never lands on a format that hides alpha.
        #[test]
        fn prop_never_lands_on_hidden_alpha(
            start in 0u8..3,
            a in 0.0f64..=1.0,
            hex8 in any::<bool>()
        ) {
            let mode = if hex8 { AlphaChannel::Hex8 } else { AlphaChannel::Hex6 };
            let hsva = Hsva::WHITE.with_alpha(a);
            let next = next_format(OutputFormat::from_index(start), hsva, mode);
            prop_assert!(!hides_alpha(next, hsva, mode));
        }
    }
}
