use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{ParsedPost, RenderedBlock, blocks::Block, inline::InlineNode};

/// Renders a post as an HTML fragment, one element per line.
///
/// Consecutive list items are grouped into a single `<ul>`; blank lines emit
/// nothing. All text and `href` values are escaped.
pub fn to_html(post: &ParsedPost) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_list = false;

    for RenderedBlock { block, inline } in &post.blocks {
        let is_item = matches!(block, Block::ListItem(_));
        if in_list && !is_item {
            out.push("</ul>".to_string());
            in_list = false;
        }
        let body = inline_html(inline);
        match block {
            Block::Heading(_) => out.push(format!("<h3>{body}</h3>")),
            Block::ListItem(_) => {
                if !in_list {
                    out.push("<ul>".to_string());
                    in_list = true;
                }
                out.push(format!("<li>{body}</li>"));
            }
            Block::Paragraph(_) => out.push(format!("<p>{body}</p>")),
            Block::Blank => {}
        }
    }
    if in_list {
        out.push("</ul>".to_string());
    }
    out.join("\n")
}

/// Renders a run of inline nodes without any surrounding block element.
pub fn inline_html(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        push_inline(&mut out, node);
    }
    out
}

fn push_inline(out: &mut String, node: &InlineNode) {
    match node {
        InlineNode::Text(s) => out.push_str(&encode_text(s)),
        InlineNode::Strong(children) => {
            out.push_str("<strong>");
            for child in children {
                push_inline(out, child);
            }
            out.push_str("</strong>");
        }
        InlineNode::Emphasis(children) => {
            out.push_str("<em>");
            for child in children {
                push_inline(out, child);
            }
            out.push_str("</em>");
        }
        InlineNode::Link { label, href } => {
            out.push_str("<a href=\"");
            out.push_str(&encode_double_quoted_attribute(href));
            out.push_str("\">");
            out.push_str(&encode_text(label));
            out.push_str("</a>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::render_post;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_consecutive_list_items() {
        let post = render_post("### Todo\n- one\n- *two*\n\nafter");
        insta::assert_snapshot!(to_html(&post), @r"
        <h3>Todo</h3>
        <ul>
        <li>one</li>
        <li><em>two</em></li>
        </ul>
        <p>after</p>
        ");
    }

    #[test]
    fn list_at_end_is_closed() {
        let post = render_post("- last");
        assert_eq!(to_html(&post), "<ul>\n<li>last</li>\n</ul>");
    }

    #[test]
    fn escapes_text_and_href() {
        let post = render_post(r#"<b>x</b> [a&b](https://x.co/?q="1")"#);
        assert_eq!(
            to_html(&post),
            r#"<p>&lt;b&gt;x&lt;/b&gt; <a href="https://x.co/?q=&quot;1&quot;">a&amp;b</a></p>"#
        );
    }

    #[test]
    fn blank_only_post_is_empty() {
        assert_eq!(to_html(&render_post("\n\n")), "");
    }
}
