//! Picker configuration.
//!
//! Supports YAML configuration files; every field has a default matching the
//! stock widget, so an empty document is a valid configuration.
//!
//! ```yaml
//! output_format: rgba
//! alpha_channel: hex8
//! fallback_color: "#000"
//! preset_colors: ["#ff0000", "hsl(120, 100%, 50%)"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::format::{AlphaChannel, OutputFormat};
use crate::parse::parse_color;
use crate::slider::DEFAULT_THUMB_OFFSET;

/// Picker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Format of the emitted color string and the initial display format.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether hex output may embed alpha.
    #[serde(default)]
    pub alpha_channel: AlphaChannel,

    /// Color used when the initial or typed color fails to parse.
    #[serde(default = "default_fallback_color")]
    pub fallback_color: String,

    /// Thumb radius subtracted from every slider position.
    #[serde(default = "default_thumb_offset")]
    pub thumb_offset: f64,

    /// Heading shown above the preset swatches.
    #[serde(default = "default_preset_label")]
    pub preset_label: String,

    /// Preset swatches, any parseable color strings.
    #[serde(default)]
    pub preset_colors: Vec<String>,

    /// Keep the edited color when the picker is dismissed without OK or
    /// Cancel. When false, dismissing reverts to the initial color.
    #[serde(default = "default_save_on_dismiss")]
    pub save_on_dismiss: bool,
}

fn default_fallback_color() -> String {
    "#fff".to_string()
}
fn default_thumb_offset() -> f64 {
    DEFAULT_THUMB_OFFSET
}
fn default_preset_label() -> String {
    "Preset colors".to_string()
}
fn default_save_on_dismiss() -> bool {
    true
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            alpha_channel: AlphaChannel::default(),
            fallback_color: default_fallback_color(),
            thumb_offset: default_thumb_offset(),
            preset_label: default_preset_label(),
            preset_colors: Vec::new(),
            save_on_dismiss: default_save_on_dismiss(),
        }
    }
}

impl PickerConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Sets the alpha channel mode.
    #[must_use]
    pub fn with_alpha_channel(mut self, mode: AlphaChannel) -> Self {
        self.alpha_channel = mode;
        self
    }

    /// Sets the fallback color.
    #[must_use]
    pub fn with_fallback_color(mut self, color: impl Into<String>) -> Self {
        self.fallback_color = color.into();
        self
    }

    /// Sets the thumb radius offset.
    #[must_use]
    pub fn with_thumb_offset(mut self, offset: f64) -> Self {
        self.thumb_offset = offset;
        self
    }

    /// Sets the preset label and colors.
    #[must_use]
    pub fn with_presets<I, S>(mut self, label: impl Into<String>, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preset_label = label.into();
        self.preset_colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether dismissing keeps the edited color.
    #[must_use]
    pub fn with_save_on_dismiss(mut self, save: bool) -> Self {
        self.save_on_dismiss = save;
        self
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist,
    /// [`Error::Io`] for other read failures, and parse or validation errors
    /// otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::ConfigInvalid`] if validation fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Checks values serde cannot: the fallback color must parse and the
    /// thumb offset must be finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        let mode = self.alpha_channel;
        if parse_color(&self.fallback_color, mode).is_none()
            && parse_color(&self.fallback_color, mode.alternate()).is_none()
        {
            return Err(Error::ConfigInvalid {
                key: "fallback_color".to_string(),
                message: format!("'{}' is not a recognized color", self.fallback_color),
            });
        }

        if !self.thumb_offset.is_finite() {
            return Err(Error::ConfigInvalid {
                key: "thumb_offset".to_string(),
                message: "must be a finite number".to_string(),
            });
        }

        Ok(())
    }
}
