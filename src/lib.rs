//! # Trueno-Picker
//!
//! Color conversion and state engine for interactive color pickers.
//!
//! The crate holds no rendering code. A view layer reports slider drags,
//! typed text and button presses; the engine keeps one canonical HSVA value,
//! converts it to HSLA/RGBA/hex for display, and notifies a listener with the
//! serialized color whenever that string changes.
//!
//! ## Features
//!
//! - **Exact conversions**: HSVA, HSLA and RGBA with hue kept through grays
//! - **Lenient parsing**: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`, `hsl()`, `hsla()`
//! - **Compact output**: `#ff0000`, `rgba(255,0,0,0.5)`, `hsla(0,100%,50%,0.5)`
//! - **Alpha-aware format cycling**: hex is skipped when it would hide transparency
//! - **YAML configuration** with defaults matching the stock widget
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_picker::prelude::*;
//!
//! let mut picker = ColorPicker::new(PickerConfig::default(), Some("rgb(255, 0, 0)"));
//! picker.on_change(|color: &str| println!("picked {color}"));
//!
//! // Drag the plane cursor to the top-left corner: white.
//! picker.drag_plane(SliderDrag::new(0.0, 230.0), SliderDrag::new(0.0, 130.0));
//! assert_eq!(picker.output(), "#ffffff");
//! ```
//!
//! ## Feature Flags
//!
//! - `wasm`: WebAssembly bindings for browser usage

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code (Cloudflare incident 2025-11-18)
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Channel math converts between f64 and small integers everywhere
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Color Model
// ============================================================================

/// Color types in normalized and byte form.
pub mod color;

/// Conversions between color spaces.
pub mod convert;

// ============================================================================
// Text Interfaces
// ============================================================================

/// Parsing of CSS-style color strings.
pub mod parse;

/// Serialization of colors into display strings.
pub mod format;

/// Display format cycling and the hex alpha skip rule.
pub mod policy;

// ============================================================================
// Interaction
// ============================================================================

/// Slider geometry and drag handling.
pub mod slider;

/// Picker state holder.
pub mod picker;

/// Picker configuration.
pub mod config;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-picker operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_picker::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Hsla, Hsva, Rgba, Rgba8};
    pub use crate::config::PickerConfig;
    pub use crate::convert::{hsla_to_hsva, hsva_to_hsla, hsva_to_rgba, rgba_to_hsva};
    pub use crate::error::{Error, Result};
    pub use crate::format::{format_color, AlphaChannel, HslaText, OutputFormat, RgbaText};
    pub use crate::parse::parse_color;
    pub use crate::picker::{ColorListener, ColorPicker};
    pub use crate::policy::next_format;
    pub use crate::slider::{Channel, SliderDimension, SliderDrag, SliderPosition};
}
