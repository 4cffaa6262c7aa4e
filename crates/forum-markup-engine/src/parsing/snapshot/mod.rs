//! # Snapshot Testing Support
//!
//! Runtime checks for parser output, used by unit tests, integration tests
//! and benches alongside `insta` snapshots of [`crate::render::outline`].

pub mod invariants;

pub use invariants::check as invariants;
