//! # Inline Kinds
//!
//! One type per inline construct, each owning its delimiters and its match
//! pattern. The pipeline in `parser` only orders these; it never hardcodes
//! `[`, `**` or `*` itself.
//!
//! - **`ExplicitLink`**: `[label](url)`
//! - **`RawUrl`**: `http://...` / `https://...`
//! - **`Strong`**: `**text**`
//! - **`Emphasis`**: `*text*`

pub mod emphasis;
pub mod link;
pub mod raw_url;
pub mod strong;

pub use emphasis::Emphasis;
pub use link::ExplicitLink;
pub use raw_url::RawUrl;
pub use strong::Strong;
