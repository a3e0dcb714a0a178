//! tsfront_ast: Abstract syntax tree of the tsfront TypeScript front-end.
//!
//! Defines the arena-allocated node types, the `SyntaxKind` enum, the flag
//! sets shared with the scanner and parser, and the [`Program`] result.

pub mod accessors;
pub mod node;
pub mod program;
pub mod syntax_kind;
pub mod types;

// Re-export key types
pub use accessors::parse_numeric_literal;
pub use node::*;
pub use program::{InterfaceMap, Program};
pub use syntax_kind::SyntaxKind;
pub use types::*;
