//! Error types for trueno-picker operations.
//!
//! Color parsing itself never fails loudly: [`crate::parse::parse_color`]
//! returns `None` for malformed input. The variants here cover the
//! `Result`-returning conveniences (`FromStr` impls) and configuration loading.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-picker operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },

    /// Color string did not match any recognized syntax.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Unknown output format or alpha channel mode name.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
