use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::inline::{pass::InlinePass, types::InlineNode};

/// Explicit link `[label](url)`.
///
/// Label and URL may both be empty; the label may not contain `]` and the
/// URL may not contain `)`.
pub struct ExplicitLink;

impl ExplicitLink {
    pub const OPEN: &'static str = "[";
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: &'static str = ")";
}

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("explicit link pattern"));

impl InlinePass for ExplicitLink {
    fn name(&self) -> &'static str {
        "explicit-link"
    }

    fn pattern(&self) -> &Regex {
        &PATTERN
    }

    fn build(&self, caps: &Captures<'_>) -> InlineNode {
        InlineNode::Link {
            label: caps[1].to_string(),
            href: caps[2].to_string(),
        }
    }
}
