//! The insertion point within the tag sequence.

/// The boundary index in the tag sequence where the next tag is inserted.
///
/// The value is always in `[0, tags.len()]` for the sequence the editor last
/// observed. Callers own the bounds: the editor only moves the cursor through
/// guarded transitions, and hosts that shrink the sequence externally must
/// re-position it themselves via [`Cursor::move_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    /// Create a cursor at the end of a sequence of `len` tags.
    pub fn at_end(len: usize) -> Self {
        Self { position: len }
    }

    /// The current boundary index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor to `index`. The caller is responsible for keeping
    /// `index` within `[0, tags.len()]`.
    pub fn move_to(&mut self, index: usize) {
        self.position = index;
    }
}
