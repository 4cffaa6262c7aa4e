//! Block-specific types that own their line prefixes.
//!
//! - **`Heading`**: `PREFIX = "### "`
//! - **`ListItem`**: `PREFIX = "- "`
//!
//! Paragraphs have no prefix; they are the classifier's fallback.

pub mod heading;
pub mod list_item;

pub use heading::Heading;
pub use list_item::ListItem;
