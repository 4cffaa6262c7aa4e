use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::inline::{pass::InlinePass, types::InlineNode};

/// Strong emphasis `**text**`.
///
/// Matches non-greedily within a single line. Must run before
/// [`super::Emphasis`] since `**` also matches the single-asterisk pattern.
pub struct Strong;

impl Strong {
    pub const DELIMITER: &'static str = "**";
}

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("strong pattern"));

impl InlinePass for Strong {
    fn name(&self) -> &'static str {
        "strong"
    }

    fn pattern(&self) -> &Regex {
        &PATTERN
    }

    fn build(&self, caps: &Captures<'_>) -> InlineNode {
        InlineNode::Strong(vec![InlineNode::text(&caps[1])])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn non_greedy_pairs() {
        let out = Strong.apply(vec![InlineNode::text("**a** and **b**")]);
        assert_eq!(
            out,
            vec![
                InlineNode::Strong(vec![InlineNode::text("a")]),
                InlineNode::text(" and "),
                InlineNode::Strong(vec![InlineNode::text("b")]),
            ]
        );
    }

    #[test]
    fn does_not_cross_newlines() {
        let out = Strong.apply(vec![InlineNode::text("**a\nb**")]);
        assert_eq!(out, vec![InlineNode::text("**a\nb**")]);
    }

    #[test]
    fn empty_pair_is_literal() {
        let out = Strong.apply(vec![InlineNode::text("****")]);
        assert_eq!(out, vec![InlineNode::text("****")]);
    }
}
