use serde::Serialize;

/// A single source line classified by its prefix.
///
/// There is exactly one `Block` per line of input and blocks never span lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// A `### ` line; holds the text after the prefix.
    Heading(String),
    /// A `- ` line; holds the text after the marker.
    ListItem(String),
    /// Any other non-blank line, unmodified.
    Paragraph(String),
    /// An empty or whitespace-only line.
    Blank,
}

impl Block {
    /// The inline-eligible content of this block, `None` for [`Block::Blank`].
    pub fn content(&self) -> Option<&str> {
        match self {
            Block::Heading(s) | Block::ListItem(s) | Block::Paragraph(s) => Some(s),
            Block::Blank => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading(_) => "Heading",
            Block::ListItem(_) => "ListItem",
            Block::Paragraph(_) => "Paragraph",
            Block::Blank => "Blank",
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Block::Blank)
    }
}
