use super::{
    kinds::{Emphasis, ExplicitLink, RawUrl, Strong},
    pass::InlinePass,
    types::InlineNode,
};

/// The inline pipeline, in the order the passes run.
///
/// Links come first so URLs are claimed before any asterisk inside them can be
/// read as emphasis. Strong comes before emphasis because `**` would otherwise
/// lose one asterisk to the single-asterisk pattern.
pub static DEFAULT_PASSES: &[&dyn InlinePass] = &[&ExplicitLink, &RawUrl, &Strong, &Emphasis];

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// Never fails: input with unbalanced or malformed markup comes back as plain
/// `Text`, marker characters included. Returns an empty list for empty input.
pub fn parse_inline(text: &str) -> Vec<InlineNode> {
    parse_inline_with(text, DEFAULT_PASSES)
}

/// Runs `passes` in order, starting from a single `Text` leaf holding `text`.
pub fn parse_inline_with(text: &str, passes: &[&dyn InlinePass]) -> Vec<InlineNode> {
    if text.is_empty() {
        return vec![];
    }
    passes
        .iter()
        .fold(vec![InlineNode::text(text)], |nodes, pass| {
            let nodes = pass.apply(nodes);
            log::trace!("inline pass {} -> {} nodes", pass.name(), nodes.len());
            nodes
        })
}
