//! tagline — an editable tag-list input widget for ratatui terminal UIs.
//!
//! A user types free text or picks from a filtered suggestion list to build an
//! ordered collection of tags, with keyboard-driven navigation, insertion, and
//! deletion at an arbitrary cursor position. The host application owns the
//! authoritative tag sequence: the editor emits [`EditorEvent`] commands
//! (`Add`, `Delete`) and the host applies them, passing the updated sequence
//! into the next event call.
//!
//! # Example
//!
//! ```
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use tagline::{EditorConfig, EditorEvent, Tag, TagEditor};
//!
//! # fn main() -> Result<(), tagline::ConfigError> {
//! let pool = vec![Tag::new("France"), Tag::new("Germany")];
//! let mut tags: Vec<Tag> = Vec::new();
//! let mut editor = TagEditor::new(EditorConfig::default(), &tags)?;
//!
//! for ch in "fr".chars() {
//!     editor.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE), &tags, &pool);
//! }
//! for event in editor.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &tags, &pool) {
//!     match event {
//!         EditorEvent::Add { tag, position } => tags.insert(position, tag),
//!         EditorEvent::Delete { position } => {
//!             tags.remove(position);
//!         }
//!         _ => {}
//!     }
//! }
//!
//! assert_eq!(tags[0].name, "France");
//! assert_eq!(editor.cursor(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod cursor;
pub mod editor;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod settings;
pub mod suggestions;
pub mod tag;
pub mod ui;

pub use config::EditorConfig;
pub use editor::{EditorEvent, TagEditor};
pub use error::{AppError, ConfigError, Result, SettingsError};
pub use settings::Settings;
pub use tag::{Tag, TagKind};
