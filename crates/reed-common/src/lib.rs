//! Shared building blocks for the Reed compiler.
//!
//! Currently this crate holds source-position tracking: byte-offset spans
//! and the line index used to turn offsets into human-readable positions
//! for diagnostics.

pub mod span;

pub use span::{LineIndex, Span};
