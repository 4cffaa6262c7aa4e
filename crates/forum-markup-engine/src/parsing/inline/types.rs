use serde::Serialize;

/// A typed fragment of rendered text within a block.
///
/// `Strong` and `Emphasis` hold child nodes rather than a string so passes can
/// be composed without changing the shape of the tree. With the current syntax
/// their children are always a single `Text` leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineNode {
    /// Plain text. Never empty when produced by the parser.
    Text(String),
    /// `**text**`
    Strong(Vec<InlineNode>),
    /// `*text*`
    Emphasis(Vec<InlineNode>),
    /// `[label](href)` or a bare `http(s)://` URL (label equals href).
    Link { label: String, href: String },
}

impl InlineNode {
    pub fn text(s: impl Into<String>) -> Self {
        InlineNode::Text(s.into())
    }
}

