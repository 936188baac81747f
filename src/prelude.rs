//! Prelude module for calendar_pages crate.
//!
//! Re-exports the derive macros used across the crate from derive_more.

pub use derive_more::Display;
