//! tsfront_diagnostics: Diagnostic messages and error reporting.
//!
//! Every problem found while lexing or parsing is reported as a
//! [`Diagnostic`] with one of four kinds. Codes follow TypeScript's
//! `diagnosticMessages.json` where a matching message exists.

use std::fmt;

use miette::{GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, Severity, SourceSpan};
use tsfront_core::text::{LineAndColumn, LineMap, TextSpan};

/// The error taxonomy of the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Malformed input at the character level.
    LexError,
    /// A malformed type expression.
    TypeSyntaxError,
    /// A malformed declaration header, heritage clause or body.
    DeclarationSyntaxError,
    /// A token that cannot start or continue the current construct.
    UnexpectedTokenError,
}

impl DiagnosticKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::LexError => "LexError",
            DiagnosticKind::TypeSyntaxError => "TypeSyntaxError",
            DiagnosticKind::DeclarationSyntaxError => "DeclarationSyntaxError",
            DiagnosticKind::UnexpectedTokenError => "UnexpectedTokenError",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic message template with a code.
///
/// The kind is chosen where the diagnostic is raised: `'{0}' expected.` is a
/// type error inside a tuple and a declaration error after `class`.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticMessage {
    /// The diagnostic error code (e.g., 1005).
    pub code: u32,
    /// The message template. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: error TS{code}: {message_text}", display_location(.file, .start))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: u32,
    pub message_text: String,
    /// Name of the source unit.
    pub file: String,
    /// Byte span of the offending text.
    pub span: TextSpan,
    /// 0-based line and column of `span.start`, once resolved.
    pub start: Option<LineAndColumn>,
}

fn display_location(file: &str, start: &Option<LineAndColumn>) -> String {
    match start {
        Some(lc) => format!("{}({})", file, lc),
        None => file.to_string(),
    }
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        file: impl Into<String>,
        span: TextSpan,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            kind,
            code: message.code,
            message_text: format_message(message.message, args),
            file: file.into(),
            span,
            start: None,
        }
    }

    /// Fill in the line and column from a line map.
    pub fn resolve(&mut self, line_map: &LineMap) {
        self.start = Some(line_map.line_and_column_of(self.span.start));
    }

    pub fn with_start(mut self, line_map: &LineMap) -> Self {
        self.resolve(line_map);
        self
    }

    /// Bundle this diagnostic with its source text for graphical rendering.
    pub fn to_report(&self, source: &str) -> DiagnosticReport {
        let len = source.len();
        let start = (self.span.start as usize).min(len);
        let end = (self.span.end() as usize).min(len);
        DiagnosticReport {
            kind: self.kind,
            code: self.code,
            message: self.message_text.clone(),
            label: SourceSpan::from((start, end - start)),
            src: NamedSource::new(self.file.clone(), source.to_string()),
        }
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A diagnostic paired with its source, renderable through `miette`.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct DiagnosticReport {
    kind: DiagnosticKind,
    code: u32,
    message: String,
    label: SourceSpan,
    src: NamedSource<String>,
}

impl miette::Diagnostic for DiagnosticReport {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("TS{}", self.code)))
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some("here".to_string()),
            self.label,
        ))))
    }
}

/// Render diagnostics against their source as plain (uncolored) text.
pub fn render_diagnostics(source: &str, diagnostics: &[Diagnostic]) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    for diagnostic in diagnostics {
        let report = diagnostic.to_report(source);
        if handler.render_report(&mut out, &report).is_err() {
            out.push_str(&diagnostic.to_string());
            out.push('\n');
        }
    }
    out
}

/// A collection of diagnostics accumulated during one parse.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    /// Whether a diagnostic of `kind` starts within `[start, end)`.
    pub fn has_kind_in(&self, kind: DiagnosticKind, start: u32, end: u32) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.kind == kind && d.span.start >= start && d.span.start < end)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Drop everything recorded after the first `len` diagnostics.
    pub fn truncate(&mut self, len: usize) {
        self.diagnostics.truncate(len);
    }

    /// Drop diagnostics starting at or after `pos`.
    pub fn retain_before(&mut self, pos: u32) {
        self.diagnostics.retain(|d| d.span.start < pos);
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    /// Sort diagnostics by position. The sort is stable, so diagnostics at
    /// the same offset keep the order they were reported in.
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by(|a, b| a.file.cmp(&b.file).then(a.span.start.cmp(&b.span.start)));
    }

    pub fn resolve_all(&mut self, line_map: &LineMap) {
        for diagnostic in &mut self.diagnostics {
            diagnostic.resolve(line_map);
        }
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::DiagnosticMessage;

    macro_rules! diag {
        ($code:expr, $msg:expr) => {
            DiagnosticMessage { code: $code, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors
    // ========================================================================
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1002, "Unterminated string literal.");
    pub const ASTERISK_SLASH_EXPECTED: DiagnosticMessage = diag!(1010, "'*/' expected.");
    pub const DIGIT_EXPECTED: DiagnosticMessage = diag!(1124, "Digit expected.");
    pub const HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1125, "Hexadecimal digit expected.");
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1127, "Invalid character.");
    pub const UNTERMINATED_TEMPLATE_LITERAL: DiagnosticMessage = diag!(1160, "Unterminated template literal.");
    pub const UNTERMINATED_REGULAR_EXPRESSION_LITERAL: DiagnosticMessage = diag!(1161, "Unterminated regular expression literal.");
    pub const BINARY_DIGIT_EXPECTED: DiagnosticMessage = diag!(1177, "Binary digit expected.");
    pub const OCTAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1178, "Octal digit expected.");
    pub const AN_IDENTIFIER_OR_KEYWORD_CANNOT_IMMEDIATELY_FOLLOW_A_NUMERIC_LITERAL: DiagnosticMessage = diag!(1351, "An identifier or keyword cannot immediately follow a numeric literal.");
    pub const FILE_APPEARS_TO_BE_BINARY: DiagnosticMessage = diag!(1490, "File appears to be binary.");
    pub const NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE: DiagnosticMessage = diag!(6188, "Numeric separators are not allowed here.");
    pub const MULTIPLE_CONSECUTIVE_NUMERIC_SEPARATORS_ARE_NOT_PERMITTED: DiagnosticMessage = diag!(6189, "Multiple consecutive numeric separators are not permitted.");

    // ========================================================================
    // Parser errors
    // ========================================================================
    pub const IDENTIFIER_EXPECTED: DiagnosticMessage = diag!(1003, "Identifier expected.");
    pub const _0_EXPECTED: DiagnosticMessage = diag!(1005, "'{0}' expected.");
    pub const UNEXPECTED_TOKEN: DiagnosticMessage = diag!(1012, "Unexpected token.");
    pub const TYPE_PARAMETER_LIST_CANNOT_BE_EMPTY: DiagnosticMessage = diag!(1098, "Type parameter list cannot be empty.");
    pub const TYPE_ARGUMENT_LIST_CANNOT_BE_EMPTY: DiagnosticMessage = diag!(1099, "Type argument list cannot be empty.");
    pub const EXPRESSION_EXPECTED: DiagnosticMessage = diag!(1109, "Expression expected.");
    pub const TYPE_EXPECTED: DiagnosticMessage = diag!(1110, "Type expected.");
    pub const DECLARATION_OR_STATEMENT_EXPECTED: DiagnosticMessage = diag!(1128, "Declaration or statement expected.");
    pub const PROPERTY_ASSIGNMENT_EXPECTED: DiagnosticMessage = diag!(1136, "Property assignment expected.");
    pub const STRING_LITERAL_EXPECTED: DiagnosticMessage = diag!(1141, "String literal expected.");
    pub const ENUM_MEMBER_EXPECTED: DiagnosticMessage = diag!(1132, "Enum member expected.");
    pub const PROPERTY_OR_SIGNATURE_EXPECTED: DiagnosticMessage = diag!(1131, "Property or signature expected.");
    pub const UNEXPECTED_TOKEN_A_CONSTRUCTOR_METHOD_ACCESSOR_OR_PROPERTY_WAS_EXPECTED: DiagnosticMessage = diag!(1068, "Unexpected token. A constructor, method, accessor, or property was expected.");
    pub const INFER_DECLARATIONS_ARE_ONLY_PERMITTED_IN_THE_EXTENDS_CLAUSE_OF_A_CONDITIONAL_TYPE: DiagnosticMessage = diag!(1338, "'infer' declarations are only permitted in the 'extends' clause of a conditional type.");
    pub const CLASSES_CAN_ONLY_EXTEND_A_SINGLE_CLASS: DiagnosticMessage = diag!(1174, "Classes can only extend a single class.");
    pub const _0_CLAUSE_ALREADY_SEEN: DiagnosticMessage = diag!(1172, "'{0}' clause already seen.");
    pub const VARIABLE_DECLARATION_LIST_CANNOT_BE_EMPTY: DiagnosticMessage = diag!(1123, "Variable declaration list cannot be empty.");
    pub const CATCH_OR_FINALLY_EXPECTED: DiagnosticMessage = diag!(1472, "'catch' or 'finally' expected.");
    pub const FILE_IS_EMPTY: DiagnosticMessage = diag!(9901, "Source file contains no declarations or statements.");
    pub const TYPE_IS_TOO_DEEPLY_NESTED: DiagnosticMessage = diag!(9902, "Type is too deeply nested.");
    pub const EXPRESSION_IS_TOO_DEEPLY_NESTED: DiagnosticMessage = diag!(9903, "Expression is too deeply nested.");
    pub const STATEMENT_IS_TOO_DEEPLY_NESTED: DiagnosticMessage = diag!(9904, "Statement is too deeply nested.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(kind: DiagnosticKind, file: &str, start: u32, message: &DiagnosticMessage) -> Diagnostic {
        Diagnostic::new(kind, file, TextSpan::new(start, 1), message, &[])
    }

    #[test]
    fn test_format_message() {
        let msg = format_message("'{0}' expected.", &[";"]);
        assert_eq!(msg, "';' expected.");
    }

    #[test]
    fn test_format_message_no_args() {
        let msg = format_message("Unexpected token.", &[]);
        assert_eq!(msg, "Unexpected token.");
    }

    #[test]
    fn test_diagnostic_display() {
        let map = LineMap::new("let a = 1\nlet b 2");
        let diag = Diagnostic::new(
            DiagnosticKind::UnexpectedTokenError,
            "test.ts",
            TextSpan::new(16, 1),
            &messages::_0_EXPECTED,
            &[";"],
        )
        .with_start(&map);
        assert_eq!(diag.to_string(), "test.ts(2,7): error TS1005: ';' expected.");
    }

    #[test]
    fn test_diagnostic_display_unresolved() {
        let diag = at(DiagnosticKind::LexError, "a.ts", 3, &messages::INVALID_CHARACTER);
        assert_eq!(diag.to_string(), "a.ts: error TS1127: Invalid character.");
        assert_eq!(diag.kind.to_string(), "LexError");
    }

    #[test]
    fn test_diagnostic_collection() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);

        collection.add(at(DiagnosticKind::TypeSyntaxError, "a.ts", 4, &messages::TYPE_EXPECTED));
        collection.add(at(DiagnosticKind::LexError, "a.ts", 9, &messages::INVALID_CHARACTER));
        assert!(collection.has_errors());
        assert_eq!(collection.count_of(DiagnosticKind::LexError), 1);
        assert!(collection.has_kind_in(DiagnosticKind::LexError, 0, 10));
        assert!(!collection.has_kind_in(DiagnosticKind::LexError, 0, 9));

        collection.truncate(1);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.diagnostics()[0].code, 1110);

        collection.add(at(DiagnosticKind::LexError, "a.ts", 9, &messages::INVALID_CHARACTER));
        collection.retain_before(9);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_diagnostic_collection_sort() {
        let mut collection = DiagnosticCollection::new();
        collection.add(at(DiagnosticKind::UnexpectedTokenError, "a.ts", 10, &messages::UNEXPECTED_TOKEN));
        collection.add(at(DiagnosticKind::LexError, "a.ts", 5, &messages::INVALID_CHARACTER));
        collection.add(at(DiagnosticKind::TypeSyntaxError, "a.ts", 10, &messages::TYPE_EXPECTED));
        collection.sort();
        let codes: Vec<u32> = collection.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![1127, 1012, 1110]);
    }

    #[test]
    fn test_render_diagnostics() {
        let source = "type A = ;";
        let diag = Diagnostic::new(
            DiagnosticKind::TypeSyntaxError,
            "render.ts",
            TextSpan::new(9, 1),
            &messages::TYPE_EXPECTED,
            &[],
        );
        let rendered = render_diagnostics(source, &[diag]);
        assert!(rendered.contains("TS1110"));
        assert!(rendered.contains("Type expected."));
        assert!(rendered.contains("render.ts"));
    }

    #[test]
    fn test_report_clamps_span() {
        let diag = Diagnostic::new(
            DiagnosticKind::LexError,
            "eof.ts",
            TextSpan::new(40, 3),
            &messages::UNTERMINATED_STRING_LITERAL,
            &[],
        );
        let report = diag.to_report("'abc");
        assert_eq!(report.label.offset(), 4);
        assert_eq!(report.label.len(), 0);
    }
}
