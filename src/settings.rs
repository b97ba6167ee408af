//! Settings file support.
//!
//! A TOML settings file mapped onto [`EditorConfig`], so hosts (and the demo
//! binary) can configure the editor without code. Delimiter keys are named
//! symbolically ("tab", "enter", ...); single-character names map to literal
//! character keys.

use std::path::{Path, PathBuf};

use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::error::SettingsError;

/// Serializable editor settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delimiter key names, e.g. `["tab", "enter"]`.
    pub delimiter_keys: Vec<String>,
    /// Literal delimiter characters, e.g. `[","]`.
    pub delimiter_chars: Vec<char>,
    /// Minimum query length before commit/suggestions activate.
    pub min_query_length: usize,
    /// Cap on the filtered suggestion count.
    pub max_suggestions_length: usize,
    /// Permit synthesizing tags from free text.
    pub allow_new: bool,
    /// Permit Backspace-to-delete.
    pub allow_backspace: bool,
    /// Commit the pending query on blur.
    pub add_on_blur: bool,
    /// Clear query text after a delete.
    pub clear_input_on_delete: bool,
    /// Start focused.
    pub autofocus: bool,
    /// Placeholder text for the empty edit point.
    pub placeholder: String,
    /// Text shown when nothing matches.
    pub no_suggestions_text: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let config = EditorConfig::default();
        Self {
            delimiter_keys: vec!["tab".to_string(), "enter".to_string()],
            delimiter_chars: Vec::new(),
            min_query_length: config.min_query_length,
            max_suggestions_length: config.max_suggestions_length,
            allow_new: config.allow_new,
            allow_backspace: config.allow_backspace,
            add_on_blur: config.add_on_blur,
            clear_input_on_delete: config.clear_input_on_delete,
            autofocus: config.autofocus,
            placeholder: config.placeholder,
            no_suggestions_text: config.no_suggestions_text,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load settings from `path`, falling back to defaults if it is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// The platform-specific default settings path,
    /// e.g. `~/.config/tagline/settings.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tagline").join("settings.toml"))
    }

    /// Build an [`EditorConfig`] from these settings.
    pub fn editor_config(&self) -> Result<EditorConfig, SettingsError> {
        let delimiter_keys = self
            .delimiter_keys
            .iter()
            .map(|name| parse_key(name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EditorConfig {
            delimiter_keys,
            delimiter_chars: self.delimiter_chars.clone(),
            min_query_length: self.min_query_length,
            max_suggestions_length: self.max_suggestions_length,
            allow_new: self.allow_new,
            allow_backspace: self.allow_backspace,
            add_on_blur: self.add_on_blur,
            clear_input_on_delete: self.clear_input_on_delete,
            autofocus: self.autofocus,
            placeholder: self.placeholder.clone(),
            no_suggestions_text: self.no_suggestions_text.clone(),
            ..EditorConfig::default()
        })
    }
}

/// Parse a symbolic key name into a [`KeyCode`].
fn parse_key(name: &str) -> Result<KeyCode, SettingsError> {
    let lowered = name.to_lowercase();
    match lowered.as_str() {
        "tab" => Ok(KeyCode::Tab),
        "enter" | "return" => Ok(KeyCode::Enter),
        "space" => Ok(KeyCode::Char(' ')),
        _ => {
            let mut chars = lowered.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(KeyCode::Char(ch)),
                _ => Err(SettingsError::UnknownKey(name.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_match_editor_config() {
        let settings = Settings::default();
        let config = settings.editor_config().unwrap();
        assert_eq!(config.delimiter_keys, vec![KeyCode::Tab, KeyCode::Enter]);
        assert_eq!(config.min_query_length, 2);
        assert_eq!(config.max_suggestions_length, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!(parse_key("tab").unwrap(), KeyCode::Tab);
        assert_eq!(parse_key("Enter").unwrap(), KeyCode::Enter);
        assert_eq!(parse_key("return").unwrap(), KeyCode::Enter);
        assert_eq!(parse_key("space").unwrap(), KeyCode::Char(' '));
        assert_eq!(parse_key(";").unwrap(), KeyCode::Char(';'));
    }

    #[test]
    fn test_parse_key_unknown() {
        let err = parse_key("hyperspace").unwrap_err();
        assert!(matches!(err, SettingsError::UnknownKey(name) if name == "hyperspace"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "allow_new = true\nmin_query_length = 1\ndelimiter_chars = [\",\"]"
        )
        .unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert!(settings.allow_new);
        assert_eq!(settings.min_query_length, 1);
        assert_eq!(settings.delimiter_chars, vec![',']);
        // Unspecified fields keep their defaults.
        assert_eq!(settings.max_suggestions_length, 6);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "allow_new = [not toml").unwrap();

        let err = Settings::load(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(settings.min_query_length, 2);
    }

    #[test]
    fn test_default_path_structure() {
        if let Some(path) = Settings::default_path() {
            assert!(path.ends_with("tagline/settings.toml"));
        }
    }
}
