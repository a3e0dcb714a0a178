//! tsfront_core: Core utilities shared by every tsfront crate.
//!
//! Provides source positions (byte offsets, spans, line maps) and the
//! arena helpers used to build the AST.

pub mod arena;
pub mod text;

// Re-export commonly used types
pub use arena::{alloc_slice, alloc_str};
pub use text::{LineAndColumn, LineMap, TextRange, TextSpan};
