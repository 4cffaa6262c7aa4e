//! # Inline Parsing
//!
//! A fixed pipeline of passes over a node list. Parsing starts from a single
//! `Text` leaf; each pass splits the `Text` leaves it matches into typed nodes
//! and leaves everything else alone.
//!
//! ## Pass order
//!
//! 1. explicit links `[label](url)`
//! 2. raw URLs `https?://...`
//! 3. strong `**text**`
//! 4. emphasis `*text*`
//!
//! The first pass to claim a span owns it: a URL inside a link label stays in
//! the label, and link labels are never scanned for emphasis.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Strong, Emphasis, Link)
//! - **`kinds`**: one type per construct, owning its delimiters and pattern
//! - **`pass`**: the `InlinePass` trait and the per-leaf scan
//! - **`parser`**: `parse_inline()` and the default pass order

pub mod kinds;
pub mod parser;
pub mod pass;
pub mod types;

pub use parser::{DEFAULT_PASSES, parse_inline, parse_inline_with};
pub use pass::InlinePass;
pub use types::InlineNode;
