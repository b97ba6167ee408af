//! The filtered suggestion list.
//!
//! Holds the current filtered/ranked candidate set, recomputed in full from
//! the latest (query, pool) pair whenever either changes. No debouncing and no
//! incremental diffing: pools are small and in-memory, so a full recompute per
//! keystroke is the simple, correct option.

use crate::config::EditorConfig;
use crate::matcher;
use crate::tag::Tag;

/// The derived suggestion list. Never carries stale state past a query or
/// pool change; the editor recomputes it on entry to every event handler.
#[derive(Debug, Default)]
pub struct SuggestionList {
    options: Vec<Tag>,
}

impl SuggestionList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the options from the latest query and pool.
    pub fn recompute(&mut self, query: &str, pool: &[Tag], config: &EditorConfig) {
        self.options = matcher::filter_suggestions(
            query,
            pool,
            config.max_suggestions_length,
            config.filter.as_deref(),
            config.no_suggestions_text.as_deref(),
        );
    }

    /// The current filtered options.
    pub fn options(&self) -> &[Tag] {
        &self.options
    }

    /// Number of current options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether there are no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// The option at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.options.get(index)
    }

    /// Index of the top-ranked option that can actually be added.
    ///
    /// Skips disabled entries so the synthetic "no suggestions" placeholder is
    /// never a commit target.
    pub fn first_selectable(&self) -> Option<usize> {
        self.options.iter().position(|tag| !tag.disabled)
    }

    /// Index of a case-insensitive full-string match of `query`, if any.
    pub fn exact_match(&self, query: &str) -> Option<usize> {
        matcher::find_exact(&self.options, query)
    }
}
