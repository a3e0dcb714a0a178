//! Token information produced by the scanner.

use std::borrow::Cow;

use tsfront_ast::syntax_kind::SyntaxKind;
use tsfront_ast::types::TokenFlags;

/// A scanned token with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenInfo<'s> {
    pub kind: SyntaxKind,
    /// Start byte offset (after leading trivia).
    pub pos: u32,
    /// End byte offset (exclusive).
    pub end: u32,
    /// 0-based line of `pos`.
    pub line: u32,
    /// 0-based byte column of `pos`.
    pub column: u32,
    /// Identifier spelling, cooked string/template text, or raw literal text.
    pub text: Cow<'s, str>,
    pub flags: TokenFlags,
}

impl<'s> TokenInfo<'s> {
    /// The length of this token in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    /// Whether there was a line break before this token.
    pub fn has_preceding_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }
}
