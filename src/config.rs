//! Editor configuration.
//!
//! An immutable default configuration merged with caller overrides at
//! construction time; there is no shared mutable global. Invalid combinations
//! are rejected fail-fast by [`EditorConfig::validate`] when the editor is
//! built.

use std::fmt;

use crossterm::event::KeyCode;

use crate::error::ConfigError;
use crate::matcher::FilterPredicate;
use crate::tag::Tag;

/// Optional validation hook consulted before a tag is added.
pub type ValidateHook = dyn Fn(&Tag) -> bool;

/// Configuration for a [`TagEditor`](crate::editor::TagEditor).
///
/// All fields have defaults; construct with struct update syntax:
///
/// ```
/// use tagline::config::EditorConfig;
///
/// let config = EditorConfig {
///     allow_new: true,
///     min_query_length: 1,
///     ..EditorConfig::default()
/// };
/// ```
pub struct EditorConfig {
    /// Keys that trigger commit. Default: Tab, Enter.
    pub delimiter_keys: Vec<KeyCode>,
    /// Literal characters that trigger commit (e.g. comma). Default: empty.
    pub delimiter_chars: Vec<char>,
    /// Minimum query length before commit and suggestions activate.
    pub min_query_length: usize,
    /// Cap on the filtered suggestion count.
    pub max_suggestions_length: usize,
    /// Permit synthesizing tags from free text.
    pub allow_new: bool,
    /// Permit Backspace-to-delete when the query is empty.
    pub allow_backspace: bool,
    /// Commit the pending query on blur.
    pub add_on_blur: bool,
    /// Clear the query text after a delete.
    pub clear_input_on_delete: bool,
    /// Start focused.
    pub autofocus: bool,
    /// Placeholder text shown when the query is empty.
    pub placeholder: String,
    /// Text for the synthetic disabled entry shown when nothing matches.
    pub no_suggestions_text: Option<String>,
    /// Custom filter predicate, replacing the default word-prefix rule.
    pub filter: Option<Box<FilterPredicate>>,
    /// Validation hook; returning false silently rejects the add.
    pub validate: Option<Box<ValidateHook>>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            delimiter_keys: vec![KeyCode::Tab, KeyCode::Enter],
            delimiter_chars: Vec::new(),
            min_query_length: 2,
            max_suggestions_length: 6,
            allow_new: false,
            allow_backspace: true,
            add_on_blur: false,
            clear_input_on_delete: true,
            autofocus: true,
            placeholder: "Add new tag".to_string(),
            no_suggestions_text: None,
            filter: None,
            validate: None,
        }
    }
}

impl EditorConfig {
    /// Check the configuration for combinations that could never work.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.max_suggestions_length == 0 {
            return Err(ConfigError::ZeroMaxSuggestions);
        }
        if self.min_query_length == 0 {
            return Err(ConfigError::ZeroMinQueryLength);
        }
        if self.delimiter_keys.is_empty() && self.delimiter_chars.is_empty() {
            return Err(ConfigError::NoDelimiters);
        }
        Ok(())
    }

    /// Whether `code` is one of the configured delimiter keys.
    pub fn is_delimiter_key(&self, code: KeyCode) -> bool {
        self.delimiter_keys.contains(&code)
    }

    /// Whether `ch` is one of the configured delimiter characters.
    pub fn is_delimiter_char(&self, ch: char) -> bool {
        self.delimiter_chars.contains(&ch)
    }
}

impl fmt::Debug for EditorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorConfig")
            .field("delimiter_keys", &self.delimiter_keys)
            .field("delimiter_chars", &self.delimiter_chars)
            .field("min_query_length", &self.min_query_length)
            .field("max_suggestions_length", &self.max_suggestions_length)
            .field("allow_new", &self.allow_new)
            .field("allow_backspace", &self.allow_backspace)
            .field("add_on_blur", &self.add_on_blur)
            .field("clear_input_on_delete", &self.clear_input_on_delete)
            .field("autofocus", &self.autofocus)
            .field("placeholder", &self.placeholder)
            .field("no_suggestions_text", &self.no_suggestions_text)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .field("validate", &self.validate.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.delimiter_keys, vec![KeyCode::Tab, KeyCode::Enter]);
        assert!(config.delimiter_chars.is_empty());
        assert_eq!(config.min_query_length, 2);
        assert_eq!(config.max_suggestions_length, 6);
        assert!(!config.allow_new);
        assert!(config.allow_backspace);
        assert!(!config.add_on_blur);
        assert!(config.clear_input_on_delete);
        assert!(config.autofocus);
        assert_eq!(config.placeholder, "Add new tag");
        assert!(config.no_suggestions_text.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(EditorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_max_suggestions_rejected() {
        let config = EditorConfig {
            max_suggestions_length: 0,
            ..EditorConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxSuggestions));
    }

    #[test]
    fn test_zero_min_query_length_rejected() {
        let config = EditorConfig {
            min_query_length: 0,
            ..EditorConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMinQueryLength));
    }

    #[test]
    fn test_no_delimiters_rejected() {
        let config = EditorConfig {
            delimiter_keys: Vec::new(),
            delimiter_chars: Vec::new(),
            ..EditorConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoDelimiters));
    }

    #[test]
    fn test_delimiter_chars_alone_are_enough() {
        let config = EditorConfig {
            delimiter_keys: Vec::new(),
            delimiter_chars: vec![','],
            ..EditorConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.is_delimiter_char(','));
        assert!(!config.is_delimiter_key(KeyCode::Tab));
    }

    #[test]
    fn test_debug_does_not_require_fn_debug() {
        let config = EditorConfig {
            filter: Some(Box::new(|tag: &Tag, query: &str| tag.name.contains(query))),
            ..EditorConfig::default()
        };
        let repr = format!("{:?}", config);
        assert!(repr.contains("filter"));
    }
}
