use super::Selection;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Byte range of the new text that was inserted or rewritten. Empty for
    /// pure deletions and for commands that only move the selection.
    pub changed: std::ops::Range<usize>,
    pub new_selection: Selection,
    pub version: u64,
}
