use serde::Serialize;

use super::EditError;

/// A byte range `[start, end]` into the edited text.
///
/// A zero-length selection is a plain caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    #[must_use]
    pub fn is_caret(self) -> bool {
        self.start == self.end
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Shifts both ends right by `by` bytes.
    #[must_use]
    pub fn offset(self, by: usize) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
        }
    }

    /// Checks `start <= end <= text.len()` with both ends on char boundaries.
    pub fn validate(self, text: &str) -> Result<(), EditError> {
        if self.start > self.end {
            return Err(EditError::ReversedSelection {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > text.len() {
            return Err(EditError::OutOfBounds {
                end: self.end,
                len: text.len(),
            });
        }
        for offset in [self.start, self.end] {
            if !text.is_char_boundary(offset) {
                return Err(EditError::NotCharBoundary { offset });
            }
        }
        Ok(())
    }

    /// The selected substring. Call [`Selection::validate`] first.
    pub fn slice(self, text: &str) -> &str {
        &text[self.range()]
    }
}
