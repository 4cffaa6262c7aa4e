use thiserror::Error;

/// Errors from editing operations that take caller-supplied offsets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("selection start {start} is after its end {end}")]
    ReversedSelection { start: usize, end: usize },

    #[error("selection end {end} is past the end of the text ({len} bytes)")]
    OutOfBounds { end: usize, len: usize },

    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}
