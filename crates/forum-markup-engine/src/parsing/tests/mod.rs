//! Integration tests for the parsing module.
//!
//! Posts are rendered to the outline format and compared with inline `insta`
//! snapshots; every render is also run through the invariant checks.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    ParsedPost, RenderedBlock,
    blocks::Block,
    inline::InlineNode,
    render_post,
    snapshot,
};
use crate::render::outline::to_outline;

fn render_checked(text: &str) -> ParsedPost {
    let post = render_post(text);
    snapshot::invariants(text, &post);
    post
}

#[test]
fn course_announcement_outline() {
    let post = render_checked(
        "### Week 2\nRead **chapter 3** before *Friday*.\n\n- slides: https://cdn.example/w2.pdf\n- [Forum](https://forum.example/t/42)",
    );
    insta::assert_snapshot!(to_outline(&post), @r#"
    Heading
      Text "Week 2"
    Paragraph
      Text "Read "
      Strong
        Text "chapter 3"
      Text " before "
      Emphasis
        Text "Friday"
      Text "."
    Blank
    ListItem
      Text "slides: "
      Link "https://cdn.example/w2.pdf" -> "https://cdn.example/w2.pdf"
    ListItem
      Link "Forum" -> "https://forum.example/t/42"
    "#);
}

#[test]
fn empty_post_is_single_blank() {
    let post = render_checked("");
    assert_eq!(
        post.blocks,
        vec![RenderedBlock {
            block: Block::Blank,
            inline: vec![],
        }]
    );
}

#[test]
fn heading_content_is_parsed_inline() {
    let post = render_checked("### **Important** notice");
    assert_eq!(
        post.blocks[0].inline,
        vec![
            InlineNode::Strong(vec![InlineNode::text("Important")]),
            InlineNode::text(" notice"),
        ]
    );
}

#[test]
fn whitespace_line_is_blank_without_inline() {
    let post = render_checked("a\n   \nb");
    assert_eq!(post.blocks[1].block, Block::Blank);
    assert!(post.blocks[1].inline.is_empty());
}

#[test]
fn markup_never_spans_lines() {
    let post = render_checked("**start\nend**");
    assert_eq!(post.blocks[0].inline, vec![InlineNode::text("**start")]);
    assert_eq!(post.blocks[1].inline, vec![InlineNode::text("end**")]);
}

#[rstest]
#[case("**bold")]
#[case("*lonely")]
#[case("[label](no close")]
#[case("[label] (space) https:// x")]
#[case("*** ** *")]
#[case("- ")]
#[case("### ")]
#[case("\n\n\n")]
#[case("tab\tseparated *ok*")]
fn malformed_input_still_renders(#[case] text: &str) {
    render_checked(text);
}

#[test]
fn rendering_is_deterministic() {
    let text = "- *a* **b** [c](d) https://e.example";
    assert_eq!(render_post(text), render_post(text));
}
