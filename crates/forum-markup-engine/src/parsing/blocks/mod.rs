//! # Block Splitting
//!
//! Line-level structure of a post. Every source line becomes exactly one
//! [`Block`]; there is no multi-line merging, so a post with `n` lines always
//! yields `n` blocks.
//!
//! ## Modules
//!
//! - **`types`**: the `Block` enum
//! - **`kinds`**: block types that own their prefixes (`Heading`, `ListItem`)
//! - **`classify`**: `PostLineClassifier` maps one line to one `Block`

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::PostLineClassifier;
pub use types::Block;

use crate::parsing::lines::source_lines;

/// Splits raw text into one [`Block`] per line, in source order.
///
/// Never fails and never drops a line: `""` yields a single `Blank`, and a
/// trailing newline yields a trailing `Blank`.
pub fn split_blocks(text: &str) -> Vec<Block> {
    let classifier = PostLineClassifier;
    source_lines(text).map(|line| classifier.classify(line)).collect()
}
