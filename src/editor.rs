//! The tag editor state machine.
//!
//! [`TagEditor`] owns the query text, the cursor, the focus flag, and the
//! suggestion highlight. It maps keyboard, mouse, and focus events onto state
//! transitions and emits [`EditorEvent`] values for the host to apply. The
//! host owns the authoritative tag sequence: it inserts on `Add`, removes on
//! `Delete`, and passes the updated sequence (and the latest suggestion pool)
//! into the next event call.
//!
//! Every handler runs to completion and either commits a consistent new state
//! or leaves state unchanged; disallowed key/state combinations are silent
//! no-ops. The editor never re-clamps the cursor when the external sequence
//! shrinks behind its back — hosts must call [`TagEditor::move_cursor`] after
//! any externally-driven deletion.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::config::EditorConfig;
use crate::cursor::Cursor;
use crate::error::ConfigError;
use crate::suggestions::SuggestionList;
use crate::tag::Tag;

/// An effect emitted by the editor.
///
/// `Add` and `Delete` are commands the host must apply to its tag sequence;
/// the rest are notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Insert `tag` at `position` in the authoritative sequence.
    Add { tag: Tag, position: usize },
    /// Remove the tag at `position`.
    Delete { position: usize },
    /// The query text changed through user input.
    InputChanged(String),
    /// A configured delimiter character fired, after any commit it caused.
    DelimiterTriggered { ch: char, cursor: usize },
    /// The editor gained focus.
    Focused,
    /// The editor lost focus.
    Blurred,
}

/// The editable tag-list input state machine.
#[derive(Debug)]
pub struct TagEditor {
    config: EditorConfig,
    query: String,
    cursor: Cursor,
    focused: bool,
    /// Highlighted suggestion. Persists across query edits; reset only on add
    /// and on blur, matching the original widget's behavior.
    selected: Option<usize>,
    suggestions: SuggestionList,
}

impl TagEditor {
    /// Create an editor for a sequence that currently holds `tags`.
    ///
    /// The cursor starts at the end of the sequence. Fails fast on a
    /// configuration that could never work.
    pub fn new(config: EditorConfig, tags: &[Tag]) -> Result<Self, ConfigError> {
        config.validate()?;
        let focused = config.autofocus;
        Ok(Self {
            config,
            query: String::new(),
            cursor: Cursor::at_end(tags.len()),
            focused,
            selected: None,
            suggestions: SuggestionList::new(),
        })
    }

    /// The in-progress query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The current insertion point in the tag sequence.
    pub fn cursor(&self) -> usize {
        self.cursor.position()
    }

    /// Whether the editor has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The highlighted suggestion index, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The current filtered suggestions.
    pub fn options(&self) -> &[Tag] {
        self.suggestions.options()
    }

    /// The editor configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Whether the suggestion list should be shown.
    pub fn expandable(&self) -> bool {
        self.focused && self.query.len() >= self.config.min_query_length
    }

    /// Move the cursor to a tag-sequence boundary in `[0, tags.len()]`.
    ///
    /// Callers are responsible for bounds; this is also the hook hosts use to
    /// keep the cursor consistent after mutating the sequence themselves.
    pub fn move_cursor(&mut self, index: usize) {
        self.cursor.move_to(index);
    }

    /// Recompute suggestions from the latest (query, pool) pair.
    fn refresh(&mut self, pool: &[Tag]) {
        self.suggestions.recompute(&self.query, pool, &self.config);
    }

    /// Handle a key event against the latest tag sequence and pool.
    pub fn handle_key(&mut self, key: KeyEvent, tags: &[Tag], pool: &[Tag]) -> Vec<EditorEvent> {
        self.refresh(pool);
        let mut events = Vec::new();

        match (key.code, key.modifiers) {
            (code, _) if self.config.is_delimiter_key(code) => {
                if !self.query.is_empty() || self.selected.is_some() {
                    self.commit(&mut events);
                }
            }
            (KeyCode::Char(ch), KeyModifiers::NONE | KeyModifiers::SHIFT)
                if self.config.is_delimiter_char(ch) =>
            {
                if !self.query.is_empty() || self.selected.is_some() {
                    self.commit(&mut events);
                    events.push(EditorEvent::DelimiterTriggered {
                        ch,
                        cursor: self.cursor.position(),
                    });
                } else {
                    // Nothing to commit: the character falls through as text,
                    // as the unsuppressed key would in the original widget.
                    self.insert_char(ch, &mut events);
                }
            }
            (KeyCode::Backspace, _) => {
                if !self.query.is_empty() {
                    self.query.pop();
                    events.push(EditorEvent::InputChanged(self.query.clone()));
                } else if self.config.allow_backspace && self.cursor.position() > 0 {
                    self.delete_tag(self.cursor.position() - 1, &mut events);
                }
            }
            (KeyCode::Left, KeyModifiers::NONE) => {
                if self.query.is_empty() && self.cursor.position() > 0 {
                    self.cursor.move_to(self.cursor.position() - 1);
                }
            }
            (KeyCode::Right, KeyModifiers::NONE) => {
                if self.query.is_empty() && self.cursor.position() < tags.len() {
                    self.cursor.move_to(self.cursor.position() + 1);
                }
            }
            (KeyCode::Home, _) => {
                if self.query.is_empty() && self.cursor.position() > 0 {
                    self.cursor.move_to(0);
                }
            }
            (KeyCode::End, _) => {
                if self.query.is_empty() {
                    self.cursor.move_to(tags.len());
                }
            }
            (KeyCode::Up, _) => self.select_previous(),
            (KeyCode::Down, _) => self.select_next(),
            (KeyCode::Char(ch), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.insert_char(ch, &mut events);
            }
            _ => {}
        }

        self.refresh(pool);
        events
    }

    /// Add the suggestion at `index` directly, as a mouse click does.
    ///
    /// Bypasses the keyboard highlight and does not touch the focus state, so
    /// the edit point keeps focus across the click. Disabled entries are
    /// ignored.
    pub fn click_suggestion(&mut self, index: usize, pool: &[Tag]) -> Vec<EditorEvent> {
        self.refresh(pool);
        let mut events = Vec::new();
        if let Some(tag) = self.suggestions.get(index).cloned() {
            self.add_tag(tag, &mut events);
        }
        self.refresh(pool);
        events
    }

    /// Delete the tag at `index`, as a click on a chip's delete control does.
    pub fn delete_at(&mut self, index: usize) -> Vec<EditorEvent> {
        let mut events = Vec::new();
        self.delete_tag(index, &mut events);
        events
    }

    /// The editor gained focus.
    pub fn focus(&mut self) -> Vec<EditorEvent> {
        self.focused = true;
        vec![EditorEvent::Focused]
    }

    /// The editor lost focus.
    ///
    /// Clears the suggestion highlight; if `add_on_blur` is set, commits the
    /// pending query first-class (with the highlight already cleared, so only
    /// exact or top-ranked matches apply).
    pub fn blur(&mut self, pool: &[Tag]) -> Vec<EditorEvent> {
        self.refresh(pool);
        self.focused = false;
        self.selected = None;
        let mut events = vec![EditorEvent::Blurred];
        if self.config.add_on_blur {
            self.commit(&mut events);
        }
        self.refresh(pool);
        events
    }

    fn insert_char(&mut self, ch: char, events: &mut Vec<EditorEvent>) {
        self.query.push(ch);
        events.push(EditorEvent::InputChanged(self.query.clone()));
    }

    /// Move the highlight up, wrapping from the top to the last option.
    fn select_previous(&mut self) {
        let count = self.suggestions.len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = match self.selected {
            None | Some(0) => Some(count - 1),
            Some(index) => Some(index - 1),
        };
    }

    /// Move the highlight down, wrapping past the last option to the first.
    fn select_next(&mut self) {
        let count = self.suggestions.len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = match self.selected {
            None => Some(0),
            Some(index) => Some((index + 1) % count),
        };
    }

    /// Resolve the current query/selection into an added tag.
    ///
    /// Resolution order: highlighted suggestion, exact full-string match,
    /// top-ranked selectable suggestion, then free-text synthesis when
    /// `allow_new` is set. Otherwise a no-op that leaves the query untouched.
    fn commit(&mut self, events: &mut Vec<EditorEvent>) {
        if self.query.len() < self.config.min_query_length {
            return;
        }

        let resolved = self
            .selected
            .filter(|&index| index < self.suggestions.len())
            .or_else(|| self.suggestions.exact_match(&self.query))
            .or_else(|| self.suggestions.first_selectable());

        if let Some(index) = resolved {
            if let Some(tag) = self.suggestions.get(index).cloned() {
                self.add_tag(tag, events);
            }
        } else if self.config.allow_new {
            let tag = Tag::new(self.query.clone());
            self.add_tag(tag, events);
        }
    }

    /// Emit `Add` and advance past the inserted tag.
    fn add_tag(&mut self, tag: Tag, events: &mut Vec<EditorEvent>) {
        if tag.disabled {
            return;
        }
        if let Some(validate) = &self.config.validate {
            if !validate(&tag) {
                debug!(name = %tag.name, "add rejected by validation hook");
                return;
            }
        }

        let position = self.cursor.position();
        debug!(name = %tag.name, position, "adding tag");
        events.push(EditorEvent::Add { tag, position });

        self.cursor.move_to(position + 1);
        self.query.clear();
        self.selected = None;
    }

    /// Emit `Delete` and move the edit point to where the tag was.
    fn delete_tag(&mut self, index: usize, events: &mut Vec<EditorEvent>) {
        debug!(position = index, "deleting tag");
        events.push(EditorEvent::Delete { position: index });
        self.cursor.move_to(index);

        if self.config.clear_input_on_delete && !self.query.is_empty() {
            self.query.clear();
        }
    }
}
