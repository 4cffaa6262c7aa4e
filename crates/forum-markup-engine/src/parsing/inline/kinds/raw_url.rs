use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::inline::{pass::InlinePass, types::InlineNode};

/// Bare URL starting with `http://` or `https://`.
///
/// The URL runs until whitespace or `)`, so a URL written inside parentheses
/// does not swallow the closing paren.
pub struct RawUrl;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s)]+").expect("raw url pattern"));

impl InlinePass for RawUrl {
    fn name(&self) -> &'static str {
        "raw-url"
    }

    fn pattern(&self) -> &Regex {
        &PATTERN
    }

    fn build(&self, caps: &Captures<'_>) -> InlineNode {
        let url = caps[0].to_string();
        InlineNode::Link {
            label: url.clone(),
            href: url,
        }
    }
}
