//! # Rendering
//!
//! Presentation of a [`crate::ParsedPost`] for hosts that want a string
//! rather than walking the tree themselves.
//!
//! - **`html`**: escaped HTML fragment (`<h3>`, `<ul>/<li>`, `<p>`, `<strong>`, `<em>`, `<a>`)
//! - **`outline`**: one line per node, indented by depth; stable enough for snapshots

pub mod html;
pub mod outline;

pub use html::to_html;
pub use outline::to_outline;
