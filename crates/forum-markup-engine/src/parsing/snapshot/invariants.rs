use crate::parsing::{ParsedPost, inline::InlineNode, lines::source_lines};

/// Validates render output invariants.
///
/// Asserts that:
/// - There is exactly one block per source line
/// - Blank blocks carry no inline nodes
/// - No `Text` leaf is empty, at any depth
/// - Every link label and href is free of newlines
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, post: &ParsedPost) {
    let line_count = source_lines(text).count();
    assert_eq!(
        post.blocks.len(),
        line_count,
        "expected one block per line ({line_count} lines, {} blocks)",
        post.blocks.len()
    );
    for (i, rb) in post.blocks.iter().enumerate() {
        if rb.block.is_blank() {
            assert!(
                rb.inline.is_empty(),
                "blank block {i} has inline nodes: {:?}",
                rb.inline
            );
        }
        for node in &rb.inline {
            check_node(i, node);
        }
    }
}

fn check_node(block: usize, node: &InlineNode) {
    match node {
        InlineNode::Text(s) => {
            assert!(!s.is_empty(), "empty text leaf in block {block}");
        }
        InlineNode::Strong(children) | InlineNode::Emphasis(children) => {
            for child in children {
                check_node(block, child);
            }
        }
        InlineNode::Link { label, href } => {
            assert!(
                !label.contains('\n') && !href.contains('\n'),
                "link spans lines in block {block}: {node:?}"
            );
        }
    }
}
