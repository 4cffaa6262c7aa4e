use super::{
    kinds::{Heading, ListItem},
    types::Block,
};

/// Classifies individual lines into [`Block`]s.
///
/// Each line is classified on its own, with no reference to the lines
/// around it. Precedence is heading, then list item, then blank, then paragraph.
pub struct PostLineClassifier;

impl PostLineClassifier {
    pub fn classify(&self, line: &str) -> Block {
        if let Some(rest) = Heading::strip(line) {
            return Block::Heading(rest.to_string());
        }
        if let Some(rest) = ListItem::strip(line) {
            return Block::ListItem(rest.to_string());
        }
        if line.trim().is_empty() {
            return Block::Blank;
        }
        Block::Paragraph(line.to_string())
    }
}
