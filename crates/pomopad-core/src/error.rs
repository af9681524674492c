//! Core error types for pomopad-core.
//!
//! Every user-facing failure is recoverable: the widget rejects the intent,
//! leaves its state untouched and hands the error back to the host, which
//! shows it as a notice.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pomopad-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input validation errors (durations, colors, presets)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Notepad import/export errors
    #[error("Notepad error: {0}")]
    Notepad(#[from] NotepadError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A work or break duration that is not a positive integer
    #[error("Invalid {field} duration '{value}': expected a positive whole number")]
    InvalidDuration { field: String, value: String },

    /// A color that is not `#rgb` or `#rrggbb`
    #[error("Invalid color '{0}': expected #rgb or #rrggbb")]
    InvalidColor(String),

    /// A background mode other than theme, solid, gradient or preset
    #[error("Unknown background mode '{0}'")]
    UnknownBackgroundMode(String),

    /// A gradient preset name outside the catalog
    #[error("Unknown gradient preset '{0}'")]
    UnknownPreset(String),
}

impl ValidationError {
    pub(crate) fn duration(field: &str, value: impl ToString) -> Self {
        ValidationError::InvalidDuration {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Notepad import/export errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotepadError {
    /// Import file is not declared as plain text
    #[error("Unsupported file type '{mime}': please select a valid .txt file")]
    UnsupportedFileType { mime: String },

    /// The file could not be read or decoded as UTF-8
    #[error("Failed to read file: {0}")]
    FileReadFailure(String),

    /// The exported file could not be written
    #[error("Failed to write file: {0}")]
    FileWriteFailure(String),

    /// Export requested while the note is empty
    #[error("Note is empty, nothing to export")]
    EmptyExportContent,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
