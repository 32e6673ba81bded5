//! Custom error types for rolo-rs
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the rolo-rs application
#[derive(Error, Debug)]
pub enum RoloError {
    /// Draft submitted without the two required fields
    #[error("Please fill the name and phone number.")]
    MissingRequiredFields,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),
}

impl From<toml::de::Error> for RoloError {
    fn from(err: toml::de::Error) -> Self {
        RoloError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for RoloError {
    fn from(err: toml::ser::Error) -> Self {
        RoloError::Toml(err.to_string())
    }
}

/// Result type alias using RoloError
pub type Result<T> = std::result::Result<T, RoloError>;
