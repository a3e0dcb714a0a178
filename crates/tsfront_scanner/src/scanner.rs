//! The TypeScript scanner.
//!
//! Converts source text into the token stream the parser consumes. Errors
//! are collected as lexical diagnostics and never stop the scan.

use std::borrow::Cow;

use crate::char_codes::*;
use crate::keywords::KeywordTable;
use crate::token::TokenInfo;
use tsfront_ast::syntax_kind::SyntaxKind;
use tsfront_ast::types::TokenFlags;
use tsfront_core::text::{LineMap, TextSpan};
use tsfront_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticKind, DiagnosticMessage};

/// Saved scanner state for lookahead and speculative parsing.
#[derive(Debug, Clone)]
pub struct ScannerState<'s> {
    pos: usize,
    token_start: usize,
    token: SyntaxKind,
    token_value: Cow<'s, str>,
    token_flags: TokenFlags,
    template_stack: Vec<u32>,
    brace_depth: i32,
    diagnostics_len: usize,
}

impl ScannerState<'_> {
    pub fn token_start(&self) -> u32 {
        self.token_start as u32
    }

    pub fn brace_depth(&self) -> i32 {
        self.brace_depth
    }
}

/// The scanner converts TypeScript source text into tokens.
pub struct Scanner<'s> {
    text: &'s str,
    bytes: &'s [u8],
    /// Current position in the text.
    pos: usize,
    /// Start of the current token (after leading trivia).
    token_start: usize,
    token: SyntaxKind,
    token_value: Cow<'s, str>,
    token_flags: TokenFlags,
    keywords: &'s KeywordTable,
    /// One entry per open `${`: the number of `{` opened inside it.
    template_stack: Vec<u32>,
    brace_depth: i32,
    line_map: LineMap,
    file_name: String,
    diagnostics: DiagnosticCollection,
}

impl<'s> Scanner<'s> {
    /// Create a new scanner using the shared keyword table.
    pub fn new(text: &'s str) -> Self {
        Self::with_keywords(text, KeywordTable::shared())
    }

    pub fn with_keywords(text: &'s str, keywords: &'s KeywordTable) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_value: Cow::Borrowed(""),
            token_flags: TokenFlags::NONE,
            keywords,
            template_stack: Vec::new(),
            brace_depth: 0,
            line_map: LineMap::new(text),
            file_name: String::new(),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Name used as the file of every reported diagnostic.
    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.file_name = file_name.into();
    }

    /// Look ahead: run `f`, then restore the scanner to where it was.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let state = self.save_state();
        let result = f(self);
        self.restore_state(state);
        result
    }

    /// Try scanning: run `f` and restore the scanner if it returns `None`.
    pub fn try_scan<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let state = self.save_state();
        let result = f(self);
        if result.is_none() {
            self.restore_state(state);
        }
        result
    }

    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    /// The current token's text: identifier spelling, cooked string or
    /// template text, or the raw text of numbers and regexes.
    #[inline]
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// The current token's text, borrowed from the source when possible.
    #[inline]
    pub fn token_value_cow(&self) -> Cow<'s, str> {
        self.token_value.clone()
    }

    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// End of the current token.
    #[inline]
    pub fn token_end(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    /// Net count of `{` minus `}` scanned so far, template braces excluded.
    pub fn brace_depth(&self) -> i32 {
        self.brace_depth
    }

    pub fn line_map(&self) -> &LineMap {
        &self.line_map
    }

    pub fn source_text(&self) -> &'s str {
        self.text
    }

    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn token_info(&self) -> TokenInfo<'s> {
        let start = self.line_map.line_and_column_of(self.token_start as u32);
        TokenInfo {
            kind: self.token,
            pos: self.token_start as u32,
            end: self.pos as u32,
            line: start.line,
            column: start.character,
            text: self.token_value.clone(),
            flags: self.token_flags,
        }
    }

    pub fn save_state(&self) -> ScannerState<'s> {
        ScannerState {
            pos: self.pos,
            token_start: self.token_start,
            token: self.token,
            token_value: self.token_value.clone(),
            token_flags: self.token_flags,
            template_stack: self.template_stack.clone(),
            brace_depth: self.brace_depth,
            diagnostics_len: self.diagnostics.len(),
        }
    }

    /// Restore a saved state, dropping diagnostics reported since.
    pub fn restore_state(&mut self, state: ScannerState<'s>) {
        self.pos = state.pos;
        self.token_start = state.token_start;
        self.token = state.token;
        self.token_value = state.token_value;
        self.token_flags = state.token_flags;
        self.template_stack = state.template_stack;
        self.brace_depth = state.brace_depth;
        self.diagnostics.truncate(state.diagnostics_len);
    }

    /// Continue from a state saved earlier in this scan. Diagnostics are
    /// kept up to the end of the state's token; later ones are reported
    /// again as scanning passes them.
    pub fn resume_at(&mut self, state: ScannerState<'s>) {
        let end = state.pos as u32;
        self.restore_state(ScannerState {
            diagnostics_len: self.diagnostics.len(),
            ..state
        });
        self.diagnostics.retain_before(end);
    }

    /// Iterate over the remaining tokens, up to and including end of file.
    pub fn tokens(&mut self) -> Tokens<'_, 's> {
        Tokens { scanner: self, done: false }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    #[inline]
    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.bytes.get(pos).copied()
    }

    #[inline]
    fn peek(&self, offset: usize) -> Option<u8> {
        self.byte_at(self.pos + offset)
    }

    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..).and_then(|rest| rest.chars().next())
    }

    fn error(&mut self, message: &DiagnosticMessage, start: usize, length: usize) {
        let span = TextSpan::new(start as u32, length as u32);
        let diagnostic = Diagnostic::new(DiagnosticKind::LexError, self.file_name.clone(), span, message, &[])
            .with_start(&self.line_map);
        self.diagnostics.add(diagnostic);
    }

    /// Skip whitespace and comments, noting line breaks in the token flags.
    fn skip_trivia(&mut self) {
        while let Some(b) = self.byte_at(self.pos) {
            match b {
                b'\n' | b'\r' => {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    self.pos += 1;
                }
                b' ' | b'\t' | 0x0B | 0x0C => self.pos += 1,
                b'/' if self.peek(1) == Some(b'/') => {
                    let body = self.pos + 2;
                    self.pos = match memchr::memchr2(b'\n', b'\r', &self.bytes[body..]) {
                        Some(offset) => body + offset,
                        None => self.bytes.len(),
                    };
                }
                b'/' if self.peek(1) == Some(b'*') => {
                    let start = self.pos;
                    let body = self.pos + 2;
                    let close = memchr::memmem::find(&self.bytes[body..], b"*/");
                    let body_end = close.map_or(self.bytes.len(), |offset| body + offset);
                    if memchr::memchr2(b'\n', b'\r', &self.bytes[body..body_end]).is_some() {
                        self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    }
                    match close {
                        Some(_) => self.pos = body_end + 2,
                        None => {
                            self.pos = self.bytes.len();
                            self.error(&messages::ASTERISK_SLASH_EXPECTED, start, self.pos - start);
                        }
                    }
                }
                b'#' if self.pos == 0 && self.peek(1) == Some(b'!') => {
                    self.pos = memchr::memchr2(b'\n', b'\r', self.bytes).unwrap_or(self.bytes.len());
                }
                b if b >= 0x80 => {
                    let Some(ch) = self.char_at(self.pos) else { return };
                    if is_line_break(ch) {
                        self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    } else if !is_white_space_single_line(ch) {
                        return;
                    }
                    self.pos += ch.len_utf8();
                }
                _ => return,
            }
        }
    }

    /// Scan the next token and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.token_flags = TokenFlags::NONE;
        self.token_value = Cow::Borrowed("");

        self.skip_trivia();
        self.token_start = self.pos;

        let Some(b) = self.byte_at(self.pos) else {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        };

        self.token = match b {
            b'(' => self.single(SyntaxKind::OpenParenToken),
            b')' => self.single(SyntaxKind::CloseParenToken),
            b'[' => self.single(SyntaxKind::OpenBracketToken),
            b']' => self.single(SyntaxKind::CloseBracketToken),
            b';' => self.single(SyntaxKind::SemicolonToken),
            b',' => self.single(SyntaxKind::CommaToken),
            b'~' => self.single(SyntaxKind::TildeToken),
            b'@' => self.single(SyntaxKind::AtToken),
            b':' => self.single(SyntaxKind::ColonToken),
            b'{' => {
                if let Some(open) = self.template_stack.last_mut() {
                    *open += 1;
                }
                self.brace_depth += 1;
                self.single(SyntaxKind::OpenBraceToken)
            }
            b'}' if self.template_stack.last() == Some(&0) => {
                self.template_stack.pop();
                self.scan_template(false)
            }
            b'}' => {
                if let Some(open) = self.template_stack.last_mut() {
                    *open -= 1;
                }
                self.brace_depth -= 1;
                self.single(SyntaxKind::CloseBraceToken)
            }
            b'.' => self.scan_dot(),
            b'?' => self.scan_question(),
            b'<' => self.scan_operator(&[
                ("<<=", SyntaxKind::LessThanLessThanEqualsToken),
                ("<<", SyntaxKind::LessThanLessThanToken),
                ("<=", SyntaxKind::LessThanEqualsToken),
                ("<", SyntaxKind::LessThanToken),
            ]),
            // `>>`, `>=` and friends are formed by rescan_greater_than_token,
            // so type argument lists can close with a single `>`.
            b'>' => self.single(SyntaxKind::GreaterThanToken),
            b'=' => self.scan_operator(&[
                ("===", SyntaxKind::EqualsEqualsEqualsToken),
                ("==", SyntaxKind::EqualsEqualsToken),
                ("=>", SyntaxKind::EqualsGreaterThanToken),
                ("=", SyntaxKind::EqualsToken),
            ]),
            b'!' => self.scan_operator(&[
                ("!==", SyntaxKind::ExclamationEqualsEqualsToken),
                ("!=", SyntaxKind::ExclamationEqualsToken),
                ("!", SyntaxKind::ExclamationToken),
            ]),
            b'+' => self.scan_operator(&[
                ("++", SyntaxKind::PlusPlusToken),
                ("+=", SyntaxKind::PlusEqualsToken),
                ("+", SyntaxKind::PlusToken),
            ]),
            b'-' => self.scan_operator(&[
                ("--", SyntaxKind::MinusMinusToken),
                ("-=", SyntaxKind::MinusEqualsToken),
                ("-", SyntaxKind::MinusToken),
            ]),
            b'*' => self.scan_operator(&[
                ("**=", SyntaxKind::AsteriskAsteriskEqualsToken),
                ("**", SyntaxKind::AsteriskAsteriskToken),
                ("*=", SyntaxKind::AsteriskEqualsToken),
                ("*", SyntaxKind::AsteriskToken),
            ]),
            // Comments were consumed as trivia; this is division or the
            // start of a regex the parser will ask to rescan.
            b'/' => self.scan_operator(&[
                ("/=", SyntaxKind::SlashEqualsToken),
                ("/", SyntaxKind::SlashToken),
            ]),
            b'%' => self.scan_operator(&[
                ("%=", SyntaxKind::PercentEqualsToken),
                ("%", SyntaxKind::PercentToken),
            ]),
            b'&' => self.scan_operator(&[
                ("&&=", SyntaxKind::AmpersandAmpersandEqualsToken),
                ("&&", SyntaxKind::AmpersandAmpersandToken),
                ("&=", SyntaxKind::AmpersandEqualsToken),
                ("&", SyntaxKind::AmpersandToken),
            ]),
            b'|' => self.scan_operator(&[
                ("||=", SyntaxKind::BarBarEqualsToken),
                ("||", SyntaxKind::BarBarToken),
                ("|=", SyntaxKind::BarEqualsToken),
                ("|", SyntaxKind::BarToken),
            ]),
            b'^' => self.scan_operator(&[
                ("^=", SyntaxKind::CaretEqualsToken),
                ("^", SyntaxKind::CaretToken),
            ]),
            b'\'' | b'"' => self.scan_string_literal(b),
            b'`' => self.scan_template(true),
            b'0'..=b'9' => self.scan_number(),
            b'#' => self.scan_private_identifier(),
            b'\\' => self.scan_identifier(),
            _ => match self.char_at(self.pos) {
                Some(ch) if is_identifier_start(ch) => self.scan_identifier(),
                Some(ch) => {
                    let len = ch.len_utf8();
                    self.pos += len;
                    self.error(&messages::INVALID_CHARACTER, self.token_start, len);
                    self.token_value = Cow::Borrowed(&self.text[self.token_start..self.pos]);
                    SyntaxKind::Unknown
                }
                None => self.single(SyntaxKind::Unknown),
            },
        };

        self.token
    }

    #[inline]
    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        kind
    }

    /// Match the longest of `candidates`, which are ordered longest first.
    fn scan_operator(&mut self, candidates: &[(&str, SyntaxKind)]) -> SyntaxKind {
        let rest = &self.bytes[self.pos..];
        for &(text, kind) in candidates {
            if rest.starts_with(text.as_bytes()) {
                self.pos += text.len();
                return kind;
            }
        }
        self.single(SyntaxKind::Unknown)
    }

    fn scan_dot(&mut self) -> SyntaxKind {
        if self.peek(1) == Some(b'.') && self.peek(2) == Some(b'.') {
            self.pos += 3;
            SyntaxKind::DotDotDotToken
        } else if self.peek(1).is_some_and(|b| b.is_ascii_digit()) {
            self.scan_number()
        } else {
            self.single(SyntaxKind::DotToken)
        }
    }

    fn scan_question(&mut self) -> SyntaxKind {
        match (self.peek(1), self.peek(2)) {
            (Some(b'?'), Some(b'=')) => {
                self.pos += 3;
                SyntaxKind::QuestionQuestionEqualsToken
            }
            (Some(b'?'), _) => {
                self.pos += 2;
                SyntaxKind::QuestionQuestionToken
            }
            // `a?.5:b` is a conditional, not optional chaining.
            (Some(b'.'), next) if !next.is_some_and(|b| b.is_ascii_digit()) => {
                self.pos += 2;
                SyntaxKind::QuestionDotToken
            }
            _ => self.single(SyntaxKind::QuestionToken),
        }
    }

    // ========================================================================
    // Rescanning
    // ========================================================================

    /// Extend a `>` token into `>=`, `>>`, `>>=`, `>>>` or `>>>=`.
    pub fn rescan_greater_than_token(&mut self) -> SyntaxKind {
        if self.token == SyntaxKind::GreaterThanToken {
            self.token = self.scan_operator_from_token_start(&[
                (">>>=", SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken),
                (">>>", SyntaxKind::GreaterThanGreaterThanGreaterThanToken),
                (">>=", SyntaxKind::GreaterThanGreaterThanEqualsToken),
                (">>", SyntaxKind::GreaterThanGreaterThanToken),
                (">=", SyntaxKind::GreaterThanEqualsToken),
                (">", SyntaxKind::GreaterThanToken),
            ]);
        }
        self.token
    }

    fn scan_operator_from_token_start(&mut self, candidates: &[(&str, SyntaxKind)]) -> SyntaxKind {
        self.pos = self.token_start;
        self.scan_operator(candidates)
    }

    /// Reinterpret a `/` or `/=` token as a regular expression literal.
    pub fn rescan_slash_token(&mut self) -> SyntaxKind {
        if !matches!(self.token, SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken) {
            return self.token;
        }
        self.pos = self.token_start + 1;
        let mut in_escape = false;
        let mut in_class = false;
        loop {
            let Some(b) = self.byte_at(self.pos) else {
                self.token_flags |= TokenFlags::UNTERMINATED;
                break;
            };
            if b == b'\n' || b == b'\r' {
                self.token_flags |= TokenFlags::UNTERMINATED;
                break;
            }
            if in_escape {
                in_escape = false;
            } else if b == b'/' && !in_class {
                self.pos += 1;
                break;
            } else if b == b'[' {
                in_class = true;
            } else if b == b']' {
                in_class = false;
            } else if b == b'\\' {
                in_escape = true;
            }
            self.pos += 1;
        }

        if self.token_flags.contains(TokenFlags::UNTERMINATED) {
            self.error(
                &messages::UNTERMINATED_REGULAR_EXPRESSION_LITERAL,
                self.token_start,
                self.pos - self.token_start,
            );
        } else {
            // Flags.
            while let Some(ch) = self.char_at(self.pos) {
                if !is_identifier_part(ch) {
                    break;
                }
                self.pos += ch.len_utf8();
            }
        }

        self.token_value = Cow::Borrowed(&self.text[self.token_start..self.pos]);
        self.token = SyntaxKind::RegularExpressionLiteral;
        self.token
    }

    // ========================================================================
    // Strings and templates
    // ========================================================================

    fn scan_string_literal(&mut self, quote: u8) -> SyntaxKind {
        self.pos += 1;
        let content_start = self.pos;
        let mut cooked: Option<String> = None;
        let mut chunk_start = self.pos;
        let content_end;
        loop {
            match self.byte_at(self.pos) {
                Some(b) if b == quote => {
                    content_end = self.pos;
                    self.pos += 1;
                    break;
                }
                Some(b'\\') => {
                    let buf = cooked.get_or_insert_with(String::new);
                    buf.push_str(&self.text[chunk_start..self.pos]);
                    self.scan_escape(buf, false);
                    chunk_start = self.pos;
                }
                Some(b'\n' | b'\r') | None => {
                    content_end = self.pos;
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(
                        &messages::UNTERMINATED_STRING_LITERAL,
                        self.token_start,
                        self.pos - self.token_start,
                    );
                    break;
                }
                Some(_) => self.pos += 1,
            }
        }

        self.token_value = match cooked {
            Some(mut buf) => {
                buf.push_str(&self.text[chunk_start..content_end]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(&self.text[content_start..content_end]),
        };
        SyntaxKind::StringLiteral
    }

    /// Scan template text from a backtick or from the `}` closing a
    /// placeholder, up to the next `${` or closing backtick.
    fn scan_template(&mut self, starts_with_backtick: bool) -> SyntaxKind {
        self.pos += 1;
        let content_start = self.pos;
        let mut cooked: Option<String> = None;
        let mut chunk_start = self.pos;
        let content_end;
        let kind;
        loop {
            match self.byte_at(self.pos) {
                None => {
                    content_end = self.pos;
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(
                        &messages::UNTERMINATED_TEMPLATE_LITERAL,
                        self.token_start,
                        self.pos - self.token_start,
                    );
                    kind = if starts_with_backtick {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                    break;
                }
                Some(b'`') => {
                    content_end = self.pos;
                    self.pos += 1;
                    kind = if starts_with_backtick {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                    break;
                }
                Some(b'$') if self.peek(1) == Some(b'{') => {
                    content_end = self.pos;
                    self.pos += 2;
                    self.template_stack.push(0);
                    kind = if starts_with_backtick {
                        SyntaxKind::TemplateHead
                    } else {
                        SyntaxKind::TemplateMiddle
                    };
                    break;
                }
                Some(b'\\') => {
                    let buf = cooked.get_or_insert_with(String::new);
                    buf.push_str(&self.text[chunk_start..self.pos]);
                    self.scan_escape(buf, true);
                    chunk_start = self.pos;
                }
                // Template text normalizes `\r\n` and `\r` to `\n`.
                Some(b'\r') => {
                    let buf = cooked.get_or_insert_with(String::new);
                    buf.push_str(&self.text[chunk_start..self.pos]);
                    buf.push('\n');
                    self.pos += 1;
                    if self.byte_at(self.pos) == Some(b'\n') {
                        self.pos += 1;
                    }
                    chunk_start = self.pos;
                }
                Some(_) => self.pos += 1,
            }
        }

        self.token_value = match cooked {
            Some(mut buf) => {
                buf.push_str(&self.text[chunk_start..content_end]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(&self.text[content_start..content_end]),
        };
        kind
    }

    /// Cook the escape sequence at `self.pos` (a backslash) into `buf`.
    fn scan_escape(&mut self, buf: &mut String, in_template: bool) {
        let start = self.pos;
        self.pos += 1;
        let Some(ch) = self.char_at(self.pos) else {
            return;
        };
        self.pos += ch.len_utf8();
        match ch {
            'n' => buf.push('\n'),
            't' => buf.push('\t'),
            'r' => buf.push('\r'),
            'b' => buf.push('\u{0008}'),
            'f' => buf.push('\u{000C}'),
            'v' => buf.push('\u{000B}'),
            '0' if !self.peek(0).is_some_and(|b| b.is_ascii_digit()) => buf.push('\0'),
            '1'..='9' | '0' => {
                // Legacy octal escapes are only accepted outside templates.
                self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
                if !in_template {
                    buf.push(ch);
                }
            }
            'x' => match self.scan_hex_value(2, 2) {
                Some(c) => buf.push(c),
                None => self.invalid_escape(start, in_template),
            },
            'u' => {
                let value = if self.peek(0) == Some(b'{') {
                    self.pos += 1;
                    let value = self.scan_hex_value(1, 6);
                    if value.is_some() && self.peek(0) == Some(b'}') {
                        self.pos += 1;
                        value
                    } else {
                        None
                    }
                } else {
                    self.scan_hex_value(4, 4)
                };
                match value {
                    Some(c) => {
                        self.token_flags |= TokenFlags::UNICODE_ESCAPE;
                        buf.push(c);
                    }
                    None => self.invalid_escape(start, in_template),
                }
            }
            // Line continuation.
            '\r' => {
                if self.peek(0) == Some(b'\n') {
                    self.pos += 1;
                }
            }
            '\n' | LINE_SEPARATOR | PARAGRAPH_SEPARATOR => {}
            other => buf.push(other),
        }
    }

    fn invalid_escape(&mut self, start: usize, in_template: bool) {
        self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
        // Tagged templates may carry invalid escapes; the parser decides.
        if !in_template {
            self.error(&messages::HEXADECIMAL_DIGIT_EXPECTED, start, self.pos - start);
        }
    }

    /// Read between `min` and `max` hex digits as a code point.
    fn scan_hex_value(&mut self, min: usize, max: usize) -> Option<char> {
        let start = self.pos;
        let mut value: u32 = 0;
        while self.pos - start < max {
            let Some(digit) = self.peek(0).and_then(|b| (b as char).to_digit(16)) else {
                break;
            };
            value = value * 16 + digit;
            self.pos += 1;
        }
        if self.pos - start < min {
            return None;
        }
        char::from_u32(value)
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;
        let mut kind = SyntaxKind::NumericLiteral;

        let radix_prefix = match (self.peek(0), self.peek(1)) {
            (Some(b'0'), Some(b'x' | b'X')) => Some((TokenFlags::HEX_SPECIFIER, &messages::HEXADECIMAL_DIGIT_EXPECTED)),
            (Some(b'0'), Some(b'b' | b'B')) => Some((TokenFlags::BINARY_SPECIFIER, &messages::BINARY_DIGIT_EXPECTED)),
            (Some(b'0'), Some(b'o' | b'O')) => Some((TokenFlags::OCTAL_SPECIFIER, &messages::OCTAL_DIGIT_EXPECTED)),
            _ => None,
        };

        if let Some((flag, missing)) = radix_prefix {
            self.pos += 2;
            self.token_flags |= flag;
            let is_digit: fn(u8) -> bool = if flag == TokenFlags::HEX_SPECIFIER {
                |b| b.is_ascii_hexdigit()
            } else if flag == TokenFlags::BINARY_SPECIFIER {
                is_binary_digit
            } else {
                is_octal_digit
            };
            if !self.scan_digits(is_digit) {
                self.error(missing, self.pos, 0);
            }
            if self.peek(0) == Some(b'n') {
                self.pos += 1;
                kind = SyntaxKind::BigIntLiteral;
            }
        } else {
            if self.peek(0) == Some(b'0') && self.peek(1).is_some_and(|b| b.is_ascii_digit()) {
                self.token_flags |= TokenFlags::OCTAL;
            }
            let mut is_integer = true;
            if self.peek(0) != Some(b'.') {
                self.scan_digits(|b| b.is_ascii_digit());
            }
            if self.peek(0) == Some(b'.') {
                is_integer = false;
                self.pos += 1;
                self.scan_digits(|b| b.is_ascii_digit());
            }
            if matches!(self.peek(0), Some(b'e' | b'E')) {
                is_integer = false;
                self.pos += 1;
                self.token_flags |= TokenFlags::SCIENTIFIC;
                if matches!(self.peek(0), Some(b'+' | b'-')) {
                    self.pos += 1;
                }
                if !self.scan_digits(|b| b.is_ascii_digit()) {
                    self.error(&messages::DIGIT_EXPECTED, self.pos, 0);
                }
            }
            if is_integer && self.peek(0) == Some(b'n') {
                self.pos += 1;
                kind = SyntaxKind::BigIntLiteral;
            }
        }

        // `3in`, `1px`: the identifier is folded into an invalid token.
        if let Some(ch) = self.char_at(self.pos) {
            if is_identifier_start(ch) {
                let ident_start = self.pos;
                while let Some(ch) = self.char_at(self.pos) {
                    if !is_identifier_part(ch) {
                        break;
                    }
                    self.pos += ch.len_utf8();
                }
                self.token_flags |= TokenFlags::IS_INVALID;
                self.error(
                    &messages::AN_IDENTIFIER_OR_KEYWORD_CANNOT_IMMEDIATELY_FOLLOW_A_NUMERIC_LITERAL,
                    ident_start,
                    self.pos - ident_start,
                );
            }
        }

        self.token_value = Cow::Borrowed(&self.text[start..self.pos]);
        kind
    }

    /// Scan digits accepted by `is_digit`, allowing single `_` separators
    /// between them. Returns whether any digit was seen.
    fn scan_digits(&mut self, is_digit: fn(u8) -> bool) -> bool {
        let mut any_digit = false;
        let mut allow_separator = false;
        let mut previous_was_separator = false;
        while let Some(b) = self.peek(0) {
            if b == b'_' {
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
                if allow_separator {
                    allow_separator = false;
                    previous_was_separator = true;
                } else if previous_was_separator {
                    self.error(&messages::MULTIPLE_CONSECUTIVE_NUMERIC_SEPARATORS_ARE_NOT_PERMITTED, self.pos, 1);
                } else {
                    self.error(&messages::NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE, self.pos, 1);
                }
                self.pos += 1;
            } else if is_digit(b) {
                any_digit = true;
                allow_separator = true;
                previous_was_separator = false;
                self.pos += 1;
            } else {
                break;
            }
        }
        if previous_was_separator {
            self.error(&messages::NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE, self.pos - 1, 1);
        }
        any_digit
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        let Some(name) = self.scan_identifier_name() else {
            self.pos = start + 1;
            self.error(&messages::INVALID_CHARACTER, start, 1);
            self.token_value = Cow::Borrowed(&self.text[start..self.pos]);
            return SyntaxKind::Unknown;
        };
        let escaped = self.token_flags.contains(TokenFlags::UNICODE_ESCAPE);
        let kind = if escaped {
            SyntaxKind::Identifier
        } else {
            self.keywords.lookup(&name).unwrap_or(SyntaxKind::Identifier)
        };
        self.token_value = name;
        kind
    }

    fn scan_private_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        match self.scan_identifier_name() {
            Some(_) => {
                // The value keeps the `#`, which is part of the name.
                self.token_value = Cow::Borrowed(&self.text[start..self.pos]);
                SyntaxKind::PrivateIdentifier
            }
            None => {
                self.pos = start + 1;
                self.error(&messages::INVALID_CHARACTER, start, 1);
                self.token_value = Cow::Borrowed("#");
                SyntaxKind::Unknown
            }
        }
    }

    /// Scan an identifier name, cooking `\u` escapes. Returns `None` when
    /// no identifier starts at the current position.
    fn scan_identifier_name(&mut self) -> Option<Cow<'s, str>> {
        let start = self.pos;
        let mut cooked: Option<String> = None;
        let mut chunk_start = self.pos;
        loop {
            let at_start = self.pos == start;
            match self.peek(0) {
                Some(b) if b.is_ascii() && b != b'\\' => {
                    let ch = b as char;
                    let valid = if at_start { is_identifier_start(ch) } else { is_identifier_part(ch) };
                    if !valid {
                        break;
                    }
                    self.pos += 1;
                }
                Some(b'\\') => {
                    let escape_start = self.pos;
                    if self.peek(1) != Some(b'u') {
                        break;
                    }
                    self.pos += 2;
                    let value = if self.peek(0) == Some(b'{') {
                        self.pos += 1;
                        let value = self.scan_hex_value(1, 6);
                        if value.is_some() && self.peek(0) == Some(b'}') {
                            self.pos += 1;
                            value
                        } else {
                            None
                        }
                    } else {
                        self.scan_hex_value(4, 4)
                    };
                    let valid = value.filter(|&ch| {
                        if at_start { is_identifier_start(ch) } else { is_identifier_part(ch) }
                    });
                    let Some(ch) = valid else {
                        self.pos = escape_start;
                        break;
                    };
                    self.token_flags |= TokenFlags::UNICODE_ESCAPE;
                    let buf = cooked.get_or_insert_with(String::new);
                    buf.push_str(&self.text[chunk_start..escape_start]);
                    buf.push(ch);
                    chunk_start = self.pos;
                }
                Some(_) => {
                    let Some(ch) = self.char_at(self.pos) else { break };
                    let valid = if at_start { is_identifier_start(ch) } else { is_identifier_part(ch) };
                    if !valid {
                        break;
                    }
                    self.pos += ch.len_utf8();
                }
                None => break,
            }
        }

        if self.pos == start {
            return None;
        }
        Some(match cooked {
            Some(mut buf) => {
                buf.push_str(&self.text[chunk_start..self.pos]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(&self.text[start..self.pos]),
        })
    }
}

/// Iterator over the tokens of a [`Scanner`], ending with end of file.
pub struct Tokens<'a, 's> {
    scanner: &'a mut Scanner<'s>,
    done: bool,
}

impl<'a, 's> Iterator for Tokens<'a, 's> {
    type Item = TokenInfo<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let kind = self.scanner.scan();
        self.done = kind == SyntaxKind::EndOfFileToken;
        Some(self.scanner.token_info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<SyntaxKind> {
        let mut scanner = Scanner::new(text);
        scanner.tokens().map(|t| t.kind).collect()
    }

    #[test]
    fn test_scan_simple_tokens() {
        assert_eq!(
            kinds("( ) { } [ ] ; ,"),
            vec![
                SyntaxKind::OpenParenToken,
                SyntaxKind::CloseParenToken,
                SyntaxKind::OpenBraceToken,
                SyntaxKind::CloseBraceToken,
                SyntaxKind::OpenBracketToken,
                SyntaxKind::CloseBracketToken,
                SyntaxKind::SemicolonToken,
                SyntaxKind::CommaToken,
                SyntaxKind::EndOfFileToken,
            ]
        );
    }

    #[test]
    fn test_scan_greater_than_is_split() {
        assert_eq!(
            kinds("a >> b"),
            vec![
                SyntaxKind::Identifier,
                SyntaxKind::GreaterThanToken,
                SyntaxKind::GreaterThanToken,
                SyntaxKind::Identifier,
                SyntaxKind::EndOfFileToken,
            ]
        );
    }

    #[test]
    fn test_rescan_greater_than() {
        let mut scanner = Scanner::new(">>>= x");
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
        assert_eq!(
            scanner.rescan_greater_than_token(),
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
        );
        assert_eq!(scanner.token_end(), 4);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    }

    #[test]
    fn test_look_ahead_restores() {
        let mut scanner = Scanner::new("a b");
        scanner.scan();
        let next = scanner.look_ahead(|s| s.scan());
        assert_eq!(next, SyntaxKind::Identifier);
        assert_eq!(scanner.token_value(), "a");
        assert_eq!(scanner.token_end(), 1);
    }

    #[test]
    fn test_restore_drops_speculative_diagnostics() {
        let mut scanner = Scanner::new("a '");
        scanner.scan();
        scanner.look_ahead(|s| s.scan());
        assert!(scanner.diagnostics().is_empty());
    }

    #[test]
    fn test_resume_at_keeps_diagnostics_before_the_token() {
        let mut scanner = Scanner::new("a\n'b\nc");
        scanner.scan();
        let at_name = scanner.save_state();
        scanner.scan();
        let at_string = scanner.save_state();
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.diagnostics().len(), 1);

        scanner.resume_at(at_string);
        assert_eq!(scanner.diagnostics().len(), 1);
        scanner.resume_at(at_name);
        assert!(scanner.diagnostics().is_empty());

        assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
        assert_eq!(scanner.diagnostics().len(), 1);
    }

    #[test]
    fn test_shebang_is_trivia() {
        let mut scanner = Scanner::new("#!/usr/bin/env node\nlet");
        assert_eq!(scanner.scan(), SyntaxKind::LetKeyword);
        assert!(scanner.has_preceding_line_break());
    }
}
