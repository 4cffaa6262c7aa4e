//! # Editing
//!
//! Selection-aware text editing for the draft of a post or comment.
//!
//! ## Explicit State
//!
//! Nothing here looks up an active input element. The caller passes the
//! current text and [`Selection`] in, and gets new text and a new selection
//! back, so a toolbar click can restore focus and caret deterministically.
//!
//! ## Module Structure
//!
//! - **`selection`**: `Selection` byte range and its validation
//! - **`wrap`**: `wrap_selection`, the pure insertion helper
//! - **`commands`**: `ToolbarAction` delimiter pairs and the `Cmd` enum
//! - **`draft`**: `Draft`, an owned text + selection that applies `Cmd`s
//! - **`patch`**: edit result metadata including changed range and new selection
//!
//! ## Usage Pattern
//!
//! ```rust
//! use forum_markup_engine::editing::*;
//!
//! let mut draft = Draft::new("hello world");
//! draft.apply(Cmd::Select(Selection::new(0, 5))).unwrap();
//! let patch = draft.apply(Cmd::Toolbar(ToolbarAction::Bold)).unwrap();
//!
//! assert_eq!(draft.text(), "**hello** world");
//! assert_eq!(patch.new_selection, Selection::new(2, 7));
//! ```

pub mod commands;
pub mod draft;
pub mod error;
pub mod patch;
pub mod selection;
pub mod wrap;

pub use commands::{Cmd, DEFAULT_LINK_PLACEHOLDER, ToolbarAction};
pub use draft::Draft;
pub use error::EditError;
pub use patch::Patch;
pub use selection::Selection;
pub use wrap::{Wrapped, wrap_selection};
