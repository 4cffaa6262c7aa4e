use crate::parsing::{ParsedPost, inline::InlineNode};

const INDENT: &str = "  ";

/// Dumps a post as an indented outline, one node per line.
///
/// ```text
/// Paragraph
///   Strong
///     Text "bold"
///   Link "Docs" -> "https://x.co"
/// ```
pub fn to_outline(post: &ParsedPost) -> String {
    let mut lines = Vec::new();
    for rb in &post.blocks {
        lines.push(rb.block.kind_name().to_string());
        for node in &rb.inline {
            push_node(&mut lines, node, 1);
        }
    }
    lines.join("\n")
}

fn push_node(lines: &mut Vec<String>, node: &InlineNode, depth: usize) {
    let pad = INDENT.repeat(depth);
    match node {
        InlineNode::Text(s) => lines.push(format!("{pad}Text {s:?}")),
        InlineNode::Strong(children) => {
            lines.push(format!("{pad}Strong"));
            for child in children {
                push_node(lines, child, depth + 1);
            }
        }
        InlineNode::Emphasis(children) => {
            lines.push(format!("{pad}Emphasis"));
            for child in children {
                push_node(lines, child, depth + 1);
            }
        }
        InlineNode::Link { label, href } => {
            lines.push(format!("{pad}Link {label:?} -> {href:?}"));
        }
    }
}
