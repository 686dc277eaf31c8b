//! Prelude module for the date_range_picker crate.
//!
//! Re-exports the derive macros from derive_more used across the value types.

pub use derive_more::Display;
