pub mod editing;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use editing::{
    Cmd, Draft, EditError, Patch, Selection, ToolbarAction, Wrapped, wrap_selection,
};
pub use parsing::{
    ParsedPost, RenderedBlock,
    blocks::{Block, split_blocks},
    inline::{InlineNode, parse_inline},
    render_post,
};
