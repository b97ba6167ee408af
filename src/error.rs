//! Centralized error types for tagline.
//!
//! All error types use `thiserror` for ergonomic error handling. Guard-rejected
//! editor actions are deliberately not errors: pressing a disallowed key in a
//! disallowed state is a silent no-op.

use thiserror::Error;

/// Errors detected when constructing an editor from an [`EditorConfig`].
///
/// These are configuration mistakes, surfaced fail-fast at construction and
/// not recoverable at runtime.
///
/// [`EditorConfig`]: crate::config::EditorConfig
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_suggestions_length` was zero, leaving nothing to suggest.
    #[error("max_suggestions_length must be at least 1")]
    ZeroMaxSuggestions,

    /// `min_query_length` was zero; commit would fire on an empty query.
    #[error("min_query_length must be at least 1")]
    ZeroMinQueryLength,

    /// Neither delimiter keys nor delimiter characters were configured, so no
    /// input could ever commit a tag.
    #[error("at least one delimiter key or delimiter character is required")]
    NoDelimiters,
}

/// Errors from loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("could not read settings file: {0}")]
    Read(#[from] std::io::Error),

    /// The settings file is not valid TOML.
    #[error("settings file is invalid: {0}")]
    Parse(#[from] toml::de::Error),

    /// A delimiter key name was not recognized.
    #[error("unknown delimiter key name '{0}'")]
    UnknownKey(String),
}

/// The main application error type, used by the demo binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Editor configuration errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Settings file errors.
    #[error("{0}")]
    Settings(#[from] SettingsError),

    /// IO errors (terminal, file system, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let err: AppError = ConfigError::NoDelimiters.into();
        assert!(matches!(err, AppError::Config(ConfigError::NoDelimiters)));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ZeroMaxSuggestions;
        assert!(err.to_string().contains("max_suggestions_length"));
    }

    #[test]
    fn test_settings_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SettingsError = io.into();
        assert!(err.to_string().contains("could not read"));
    }
}
