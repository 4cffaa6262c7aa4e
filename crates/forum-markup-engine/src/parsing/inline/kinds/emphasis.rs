use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::inline::{pass::InlinePass, types::InlineNode};

/// Light emphasis `*text*`, matched non-greedily within a single line.
///
/// The content may not start or end with `*`, so the leftovers of an empty
/// strong pair (`****`) stay literal instead of becoming an emphasised `*`.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITER: &'static str = "*";
}

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n](?:.*?[^*\n])?)\*").expect("emphasis pattern"));

impl InlinePass for Emphasis {
    fn name(&self) -> &'static str {
        "emphasis"
    }

    fn pattern(&self) -> &Regex {
        &PATTERN
    }

    fn build(&self, caps: &Captures<'_>) -> InlineNode {
        InlineNode::Emphasis(vec![InlineNode::text(&caps[1])])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_single_asterisks() {
        let out = Emphasis.apply(vec![InlineNode::text("an *aside* here")]);
        assert_eq!(
            out,
            vec![
                InlineNode::text("an "),
                InlineNode::Emphasis(vec![InlineNode::text("aside")]),
                InlineNode::text(" here"),
            ]
        );
    }

    #[test]
    fn single_char_content() {
        let out = Emphasis.apply(vec![InlineNode::text("*a*")]);
        assert_eq!(out, vec![InlineNode::Emphasis(vec![InlineNode::text("a")])]);
    }

    #[test]
    fn asterisk_runs_are_literal() {
        for input in ["***", "****", "a****b"] {
            let out = Emphasis.apply(vec![InlineNode::text(input)]);
            assert_eq!(out, vec![InlineNode::text(input)], "input {input:?}");
        }
    }

    #[test]
    fn lone_asterisk_is_literal() {
        let out = Emphasis.apply(vec![InlineNode::text("5 * 3")]);
        assert_eq!(out, vec![InlineNode::text("5 * 3")]);
    }
}
