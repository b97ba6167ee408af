//! Tag data model.
//!
//! Tags are owned by the host application; the editor only reads them. A tag's
//! identity is its position in the ordered sequence, not its id (ids may
//! repeat), and the editor never deduplicates.

/// The kind of a suggestion pool entry.
///
/// `Group` entries are ranked before all others in filtered output and are
/// rendered under their own heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagKind {
    /// A regular tag.
    #[default]
    Item,
    /// A group entry, ranked before non-group entries.
    Group,
    /// A label entry.
    Label,
}

/// One item in the user-curated ordered collection, or one candidate in the
/// suggestion pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Optional identifier. Not used for identity; may repeat.
    pub id: Option<String>,
    /// Display name, matched against the query.
    pub name: String,
    /// Disabled entries cannot be added or highlighted.
    pub disabled: bool,
    /// Entry kind, used for suggestion ranking and grouping.
    pub kind: TagKind,
}

impl Tag {
    /// Create a tag with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            disabled: false,
            kind: TagKind::Item,
        }
    }

    /// Create a tag with an id and a name.
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            disabled: false,
            kind: TagKind::Item,
        }
    }

    /// Set the kind.
    pub fn kind(mut self, kind: TagKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark the tag as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tag() {
        let tag = Tag::new("rust");
        assert_eq!(tag.name, "rust");
        assert!(tag.id.is_none());
        assert!(!tag.disabled);
        assert_eq!(tag.kind, TagKind::Item);
    }

    #[test]
    fn test_with_id() {
        let tag = Tag::with_id("42", "rust");
        assert_eq!(tag.id.as_deref(), Some("42"));
        assert_eq!(tag.name, "rust");
    }

    #[test]
    fn test_builders() {
        let tag = Tag::new("langs").kind(TagKind::Group).disabled();
        assert_eq!(tag.kind, TagKind::Group);
        assert!(tag.disabled);
    }

    #[test]
    fn test_ids_may_repeat() {
        let a = Tag::with_id("1", "a");
        let b = Tag::with_id("1", "b");
        assert_eq!(a.id, b.id);
        assert_ne!(a, b);
    }
}
