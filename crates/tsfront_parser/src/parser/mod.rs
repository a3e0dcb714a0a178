//! The TypeScript parser.
//!
//! A recursive descent parser over the scanner's token stream. Every parse
//! function returns [`ParseResult`]; the first error inside a top-level item
//! unwinds to [`Parser::parse_unit`], which records it and skips to the next
//! safe boundary.

mod declarations;
mod expressions;
mod statements;
mod types;

use std::borrow::Cow;

use bumpalo::Bump;
use tsfront_ast::node::*;
use tsfront_ast::syntax_kind::SyntaxKind;
use tsfront_ast::types::*;
use tsfront_core::text::{LineMap, TextSpan};
use tsfront_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticKind, DiagnosticMessage};
use tsfront_scanner::Scanner;

use crate::options::ParserOptions;

/// Result of a parse function. The error is boxed to keep deep recursion
/// frames small.
pub type ParseResult<T> = Result<T, Box<Diagnostic>>;

/// Top-level items of one unit before assembly.
#[derive(Debug)]
pub struct ParsedUnit<'a> {
    pub file_name: &'a str,
    pub declarations: Vec<Declaration<'a>>,
    /// Scanner and parser diagnostics, resolved and ordered by position.
    pub diagnostics: DiagnosticCollection,
    pub line_map: LineMap,
}

/// The parser produces top-level declarations from TypeScript source text.
pub struct Parser<'a> {
    arena: &'a Bump,
    scanner: Scanner<'a>,
    options: &'a ParserOptions,
    file_name: &'a str,
    context_flags: NodeFlags,
    /// Kind given to diagnostics raised in the current construct.
    error_kind: DiagnosticKind,
    diagnostics: DiagnosticCollection,
    /// Tracks recursion depth to prevent stack overflow on deeply nested input.
    recursion_depth: u32,
    /// End of the last consumed token.
    prev_end: u32,
    /// Names bound by `infer`, one scope per open conditional `extends` clause.
    infer_scopes: Vec<Vec<&'a str>>,
    /// First declaration keyword seen at the start of a line inside the
    /// current top-level item.
    resync_point: Option<tsfront_scanner::ScannerState<'a>>,
}

/// Parser state captured for speculative parsing.
struct Checkpoint<'a> {
    scanner: tsfront_scanner::ScannerState<'a>,
    prev_end: u32,
    context_flags: NodeFlags,
    error_kind: DiagnosticKind,
    recursion_depth: u32,
    infer_scopes: Vec<Vec<&'a str>>,
    diagnostics_len: usize,
}

impl<'a> Parser<'a> {
    pub fn new(arena: &'a Bump, file_name: &str, source_text: &'a str, options: &'a ParserOptions) -> Self {
        let file_name = tsfront_core::alloc_str(arena, file_name);
        let mut scanner = Scanner::with_keywords(source_text, &options.keywords);
        scanner.set_file_name(file_name);
        Self {
            arena,
            scanner,
            options,
            file_name,
            context_flags: NodeFlags::AWAIT_CONTEXT,
            error_kind: DiagnosticKind::DeclarationSyntaxError,
            diagnostics: DiagnosticCollection::new(),
            recursion_depth: 0,
            prev_end: 0,
            infer_scopes: Vec::new(),
            resync_point: None,
        }
    }

    /// Parse every top-level item of the unit, recovering after each
    /// malformed one.
    pub fn parse_unit(mut self) -> ParsedUnit<'a> {
        self.next_token();
        if self.token() == SyntaxKind::EndOfFileToken {
            let end = self.token_pos();
            self.diagnostics.add(Diagnostic::new(
                DiagnosticKind::UnexpectedTokenError,
                self.file_name,
                TextSpan::empty(end),
                &messages::FILE_IS_EMPTY,
                &[],
            ));
        }

        let mut declarations = Vec::new();
        while self.token() != SyntaxKind::EndOfFileToken {
            let start = self.token_pos();
            let depth = self.depth_before_current_token();
            self.resync_point = None;
            match self.parse_top_level_item() {
                Ok(declaration) => declarations.push(declaration),
                Err(diagnostic) => {
                    self.record_error(*diagnostic, start);
                    self.reset_context();
                    if !self.resume_at_resync_point() {
                        self.skip_to_recovery_point(start, depth);
                    }
                }
            }
        }

        let line_map = self.scanner.line_map().clone();
        let mut diagnostics = self.scanner.take_diagnostics();
        diagnostics.extend(self.diagnostics);
        diagnostics.sort();
        diagnostics.resolve_all(&line_map);
        ParsedUnit {
            file_name: self.file_name,
            declarations,
            diagnostics,
            line_map,
        }
    }

    fn parse_top_level_item(&mut self) -> ParseResult<Declaration<'a>> {
        Ok(match self.parse_statement()? {
            Statement::Declaration(declaration) => declaration,
            statement => Declaration::Statement(self.arena.alloc(statement)),
        })
    }

    /// Record a top-level error unless a lexical error already explains it.
    fn record_error(&mut self, diagnostic: Diagnostic, start: u32) {
        let end = self.token_end().max(diagnostic.span.end()).max(start + 1);
        if self.scanner.diagnostics().has_kind_in(DiagnosticKind::LexError, start, end) {
            tracing::trace!(code = diagnostic.code, "parse error follows a lexical error");
            return;
        }
        self.diagnostics.add(diagnostic);
    }

    fn reset_context(&mut self) {
        self.context_flags = NodeFlags::AWAIT_CONTEXT;
        self.error_kind = DiagnosticKind::DeclarationSyntaxError;
        self.recursion_depth = 0;
        self.infer_scopes.clear();
    }

    /// Brace depth in front of the current token.
    fn depth_before_current_token(&self) -> i32 {
        let depth = self.scanner.brace_depth();
        match self.token() {
            SyntaxKind::OpenBraceToken => depth - 1,
            SyntaxKind::CloseBraceToken => depth + 1,
            _ => depth,
        }
    }

    /// Resume at a line-start declaration the failed item swallowed, as when
    /// a `{` is never closed. The point only counts while the braces open
    /// around it are still open where the error was raised.
    fn resume_at_resync_point(&mut self) -> bool {
        let Some(state) = self.resync_point.take() else {
            return false;
        };
        let from = self.token_pos();
        let resume_pos = state.token_start();
        if resume_pos >= from || state.brace_depth() > self.scanner.brace_depth() {
            return false;
        }
        self.scanner.resume_at(state);
        self.prev_end = resume_pos;
        tracing::debug!(file = self.file_name, from, to = resume_pos, "resumed at swallowed declaration");
        true
    }

    /// Skip to the next `;` at `depth` (consumed), the `}` that returns to
    /// `depth` (consumed), a declaration keyword at `depth`, or a
    /// declaration that opens a line at any depth. Always consumes at least
    /// one token when the item made no progress.
    fn skip_to_recovery_point(&mut self, start: u32, depth: i32) {
        let from = self.token_pos();
        loop {
            let token = self.token();
            if token == SyntaxKind::EndOfFileToken {
                break;
            }
            let current = self.scanner.brace_depth();
            match token {
                SyntaxKind::SemicolonToken if current == depth => {
                    self.next_token();
                    break;
                }
                SyntaxKind::CloseBraceToken if current <= depth => {
                    self.next_token();
                    break;
                }
                _ if self.token_pos() > start
                    && ((current == depth && self.is_recovery_keyword()) || self.is_line_start_declaration()) =>
                {
                    break
                }
                _ => {
                    self.next_token();
                }
            }
        }
        tracing::debug!(file = self.file_name, from, to = self.token_pos(), "skipped malformed item");
    }

    /// A keyword that starts a new top-level item. Contextual keywords only
    /// count at the start of a line.
    fn is_recovery_keyword(&self) -> bool {
        match self.token() {
            SyntaxKind::ExportKeyword
            | SyntaxKind::ImportKeyword
            | SyntaxKind::ClassKeyword
            | SyntaxKind::InterfaceKeyword
            | SyntaxKind::EnumKeyword
            | SyntaxKind::FunctionKeyword
            | SyntaxKind::ConstKeyword
            | SyntaxKind::VarKeyword => true,
            SyntaxKind::LetKeyword
            | SyntaxKind::TypeKeyword
            | SyntaxKind::DeclareKeyword
            | SyntaxKind::AbstractKeyword => self.scanner.has_preceding_line_break(),
            _ => false,
        }
    }

    /// A declaration keyword opening a line and followed by what that
    /// declaration needs next. `type: string` and `import(...)` don't count.
    fn is_line_start_declaration(&mut self) -> bool {
        let keyword = self.token();
        if !self.has_preceding_line_break()
            || !matches!(
                keyword,
                SyntaxKind::InterfaceKeyword
                    | SyntaxKind::ClassKeyword
                    | SyntaxKind::EnumKeyword
                    | SyntaxKind::TypeKeyword
                    | SyntaxKind::ExportKeyword
                    | SyntaxKind::ImportKeyword
                    | SyntaxKind::DeclareKeyword
            )
        {
            return false;
        }
        self.scanner.look_ahead(|scanner| {
            let next = scanner.scan();
            match keyword {
                SyntaxKind::ExportKeyword => {
                    next.is_keyword() || matches!(next, SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken)
                }
                SyntaxKind::ImportKeyword => matches!(
                    next,
                    SyntaxKind::Identifier
                        | SyntaxKind::OpenBraceToken
                        | SyntaxKind::AsteriskToken
                        | SyntaxKind::StringLiteral
                        | SyntaxKind::TypeKeyword
                ),
                SyntaxKind::DeclareKeyword => next.is_keyword(),
                _ => next.is_identifier_like(),
            }
        })
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    fn token(&self) -> SyntaxKind {
        self.scanner.token()
    }

    #[inline]
    fn next_token(&mut self) -> SyntaxKind {
        self.prev_end = self.token_end();
        let token = self.scanner.scan();
        if self.resync_point.is_none() && self.has_preceding_line_break() && self.is_line_start_declaration() {
            self.resync_point = Some(self.scanner.save_state());
        }
        token
    }

    #[inline]
    fn token_pos(&self) -> u32 {
        self.scanner.token_start() as u32
    }

    #[inline]
    fn token_end(&self) -> u32 {
        self.scanner.token_end() as u32
    }

    #[inline]
    fn has_preceding_line_break(&self) -> bool {
        self.scanner.has_preceding_line_break()
    }

    /// The current token's value, borrowed from the source or copied into
    /// the arena when it had to be cooked.
    fn token_text(&self) -> &'a str {
        match self.scanner.token_value_cow() {
            Cow::Borrowed(text) => text,
            Cow::Owned(text) => self.arena.alloc_str(&text),
        }
    }

    /// Node flags for a literal built from the current token.
    fn literal_flags(&self) -> NodeFlags {
        if self
            .scanner
            .token_flags()
            .intersects(TokenFlags::UNTERMINATED | TokenFlags::IS_INVALID)
        {
            NodeFlags::CONTAINS_LEX_ERROR
        } else {
            NodeFlags::NONE
        }
    }

    /// Node data spanning from `pos` to the end of the last consumed token.
    #[inline]
    fn finish(&self, kind: SyntaxKind, pos: u32) -> NodeData {
        NodeData::new(kind, pos, self.prev_end.max(pos))
    }

    #[inline]
    fn alloc<T>(&self, value: T) -> &'a T {
        self.arena.alloc(value)
    }

    #[inline]
    fn alloc_slice<T>(&self, items: Vec<T>) -> &'a [T] {
        tsfront_core::alloc_slice(self.arena, items)
    }

    fn parse_expected(&mut self, kind: SyntaxKind) -> ParseResult<()> {
        if self.token() == kind {
            self.next_token();
            Ok(())
        } else {
            Err(self.expected_error(kind))
        }
    }

    fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.token() == kind {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consume a `;`, or accept its absence before a line break, `}` or the
    /// end of the file.
    fn parse_semicolon(&mut self) -> ParseResult<()> {
        match self.token() {
            SyntaxKind::SemicolonToken => {
                self.next_token();
                Ok(())
            }
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken => Ok(()),
            _ if self.has_preceding_line_break() => Ok(()),
            _ => Err(self.expected_error(SyntaxKind::SemicolonToken)),
        }
    }

    fn can_parse_semicolon(&self) -> bool {
        matches!(
            self.token(),
            SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) || self.has_preceding_line_break()
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    /// Whether the current token can be used as a binding identifier.
    #[inline]
    fn is_identifier(&self) -> bool {
        self.token().is_identifier_like()
    }

    fn parse_identifier(&mut self) -> ParseResult<Identifier<'a>> {
        if !self.is_identifier() {
            return Err(self.error_here(&messages::IDENTIFIER_EXPECTED, &[]));
        }
        Ok(self.consume_identifier(SyntaxKind::Identifier))
    }

    /// An identifier or any keyword, as after `.` or in a specifier list.
    fn parse_identifier_name(&mut self) -> ParseResult<Identifier<'a>> {
        if !self.token().is_identifier_or_keyword() {
            return Err(self.error_here(&messages::IDENTIFIER_EXPECTED, &[]));
        }
        Ok(self.consume_identifier(SyntaxKind::Identifier))
    }

    fn consume_identifier(&mut self, kind: SyntaxKind) -> Identifier<'a> {
        let pos = self.token_pos();
        let text = self.token_text();
        self.next_token();
        Identifier {
            data: self.finish(kind, pos),
            text,
        }
    }

    // ========================================================================
    // Context
    // ========================================================================

    #[inline]
    fn in_context(&self, flags: NodeFlags) -> bool {
        self.context_flags.intersects(flags)
    }

    /// Run `f` with `set` added to and `clear` removed from the context.
    fn with_context<T>(&mut self, set: NodeFlags, clear: NodeFlags, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.context_flags;
        self.context_flags = (saved - clear) | set;
        let result = f(self);
        self.context_flags = saved;
        result
    }

    fn with_error_kind<T>(&mut self, kind: DiagnosticKind, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.error_kind, kind);
        let result = f(self);
        self.error_kind = saved;
        result
    }

    /// Run `f` one nesting level deeper, failing with `message` past the
    /// configured limit.
    fn with_depth_guard<T>(
        &mut self,
        message: &DiagnosticMessage,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.recursion_depth >= self.options.max_recursion_depth {
            return Err(self.error_here(message, &[]));
        }
        self.recursion_depth += 1;
        let result = f(self);
        self.recursion_depth -= 1;
        result
    }

    // ========================================================================
    // Speculation
    // ========================================================================

    fn checkpoint(&self) -> Checkpoint<'a> {
        Checkpoint {
            scanner: self.scanner.save_state(),
            prev_end: self.prev_end,
            context_flags: self.context_flags,
            error_kind: self.error_kind,
            recursion_depth: self.recursion_depth,
            infer_scopes: self.infer_scopes.clone(),
            diagnostics_len: self.diagnostics.len(),
        }
    }

    fn rewind(&mut self, checkpoint: Checkpoint<'a>) {
        self.scanner.restore_state(checkpoint.scanner);
        self.prev_end = checkpoint.prev_end;
        self.context_flags = checkpoint.context_flags;
        self.error_kind = checkpoint.error_kind;
        self.recursion_depth = checkpoint.recursion_depth;
        self.infer_scopes = checkpoint.infer_scopes;
        self.diagnostics.truncate(checkpoint.diagnostics_len);
    }

    /// Run `f` and rewind if it returns `None`. Nothing `f` reports
    /// survives a rewind.
    fn speculate<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let checkpoint = self.checkpoint();
        let pos = self.token_pos();
        let result = f(self);
        if result.is_none() {
            self.rewind(checkpoint);
            tracing::trace!(pos, "speculative parse backtracked");
        }
        result
    }

    /// Run `f`, then rewind unconditionally.
    fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let checkpoint = self.checkpoint();
        let result = f(self);
        self.rewind(checkpoint);
        result
    }

    /// Advance one token and test the next one.
    fn next_token_is(&mut self, test: impl FnOnce(&mut Self) -> bool) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            test(p)
        })
    }

    // ========================================================================
    // Errors
    // ========================================================================

    /// A diagnostic of the current error kind at the current token.
    fn error_here(&self, message: &DiagnosticMessage, args: &[&str]) -> Box<Diagnostic> {
        self.error_at(self.error_kind, message, args, self.token_pos(), self.token_end())
    }

    fn error_at(
        &self,
        kind: DiagnosticKind,
        message: &DiagnosticMessage,
        args: &[&str],
        pos: u32,
        end: u32,
    ) -> Box<Diagnostic> {
        Box::new(Diagnostic::new(
            kind,
            self.file_name,
            TextSpan::from_bounds(pos, end.max(pos)),
            message,
            args,
        ))
    }

    /// `'x' expected.` for a missing token.
    fn expected_error(&self, kind: SyntaxKind) -> Box<Diagnostic> {
        match kind.token_text() {
            Some(text) => self.error_here(&messages::_0_EXPECTED, &[text]),
            None => self.error_here(&messages::UNEXPECTED_TOKEN, &[]),
        }
    }

    /// A token that cannot appear at this grammar position.
    fn unexpected_token_error(&self, message: &DiagnosticMessage) -> Box<Diagnostic> {
        self.error_at(
            DiagnosticKind::UnexpectedTokenError,
            message,
            &[],
            self.token_pos(),
            self.token_end(),
        )
    }
}
