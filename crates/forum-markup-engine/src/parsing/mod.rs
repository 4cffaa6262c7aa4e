pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

use serde::Serialize;

use blocks::{Block, split_blocks};
use inline::{InlineNode, parse_inline};

/// A block together with the inline nodes of its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedBlock {
    pub block: Block,
    /// Empty for [`Block::Blank`].
    pub inline: Vec<InlineNode>,
}

/// The full render of a post: one [`RenderedBlock`] per source line.
///
/// Recomputed from scratch on every call; the source text is the only state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPost {
    pub blocks: Vec<RenderedBlock>,
}

pub fn render_post(text: &str) -> ParsedPost {
    let blocks: Vec<RenderedBlock> = split_blocks(text)
        .into_iter()
        .map(|block| {
            let inline = parse_inline_for_block(&block);
            RenderedBlock { block, inline }
        })
        .collect();
    log::debug!(
        "rendered {} bytes into {} blocks",
        text.len(),
        blocks.len()
    );
    ParsedPost { blocks }
}

/// Convenience: inline parse of a block's content (empty for blanks).
pub fn parse_inline_for_block(b: &Block) -> Vec<InlineNode> {
    b.content().map(parse_inline).unwrap_or_default()
}
