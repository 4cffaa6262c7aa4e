use regex::{Captures, Regex};

use super::types::InlineNode;

/// One ordered scan of the inline pipeline, recognising exactly one construct.
///
/// A pass only rewrites [`InlineNode::Text`] leaves; every other node is
/// passed through untouched and never re-scanned.
pub trait InlinePass: Sync {
    /// Short name used in trace logging.
    fn name(&self) -> &'static str;

    /// The pattern this pass recognises.
    fn pattern(&self) -> &Regex;

    /// Builds the typed node for one match.
    fn build(&self, caps: &Captures<'_>) -> InlineNode;

    /// Runs this pass over a node list, returning the rewritten list.
    fn apply(&self, nodes: Vec<InlineNode>) -> Vec<InlineNode> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            match node {
                InlineNode::Text(text) => self.split_text(&text, &mut out),
                other => out.push(other),
            }
        }
        out
    }

    /// Single left-to-right, non-overlapping scan of one text leaf.
    ///
    /// Text before each match becomes a `Text` leaf, the match becomes a typed
    /// node, and scanning resumes right after the match. Empty leaves are
    /// never emitted.
    fn split_text(&self, text: &str, out: &mut Vec<InlineNode>) {
        let mut last = 0;
        for caps in self.pattern().captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            if m.start() > last {
                out.push(InlineNode::text(&text[last..m.start()]));
            }
            out.push(self.build(&caps));
            last = m.end();
        }
        if last < text.len() {
            out.push(InlineNode::text(&text[last..]));
        }
    }
}
