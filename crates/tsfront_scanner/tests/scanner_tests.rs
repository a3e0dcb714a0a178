//! Scanner integration tests.

use tsfront_ast::syntax_kind::SyntaxKind;
use tsfront_ast::types::TokenFlags;
use tsfront_diagnostics::DiagnosticKind;
use tsfront_scanner::{KeywordTable, Scanner};

/// Helper: scan all tokens from source and return as (kind, value) pairs.
fn scan_all(source: &str) -> Vec<(SyntaxKind, String)> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        tokens.push((kind, scanner.token_value().to_string()));
    }
    tokens
}

fn scan_kinds(source: &str) -> Vec<SyntaxKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

/// Helper: the codes of every diagnostic produced while scanning.
fn scan_codes(source: &str) -> Vec<u32> {
    let mut scanner = Scanner::new(source);
    while scanner.scan() != SyntaxKind::EndOfFileToken {}
    scanner.diagnostics().diagnostics().iter().map(|d| d.code).collect()
}

#[test]
fn test_empty_source() {
    assert!(scan_all("").is_empty());
    assert!(scan_all("   \n\t  // only a comment").is_empty());
}

#[test]
fn test_numeric_literals() {
    let tokens = scan_all("42 3.14 .5 0xFF 0b1010 0o77 1e10 2.5E-3 1_000_000");
    assert!(tokens.iter().all(|(k, _)| *k == SyntaxKind::NumericLiteral));
    let values: Vec<&str> = tokens.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(values, ["42", "3.14", ".5", "0xFF", "0b1010", "0o77", "1e10", "2.5E-3", "1_000_000"]);
}

#[test]
fn test_bigint_literals() {
    let tokens = scan_all("100n 0xFFn 0b1n");
    assert!(tokens.iter().all(|(k, _)| *k == SyntaxKind::BigIntLiteral));
    assert_eq!(tokens[0].1, "100n");
}

#[test]
fn test_numeric_literal_flags() {
    let mut scanner = Scanner::new("0x1F 1_0 017 1e3");
    scanner.scan();
    assert!(scanner.token_flags().contains(TokenFlags::HEX_SPECIFIER));
    scanner.scan();
    assert!(scanner.token_flags().contains(TokenFlags::CONTAINS_SEPARATOR));
    scanner.scan();
    assert!(scanner.token_flags().contains(TokenFlags::OCTAL));
    scanner.scan();
    assert!(scanner.token_flags().contains(TokenFlags::SCIENTIFIC));
}

#[test]
fn test_bad_numeric_separators() {
    assert_eq!(scan_codes("1__0"), vec![6189]);
    assert_eq!(scan_codes("10_"), vec![6188]);
    assert_eq!(scan_codes("0x_1"), vec![6188]);
}

#[test]
fn test_missing_radix_digits() {
    assert_eq!(scan_codes("0x"), vec![1125]);
    assert_eq!(scan_codes("0b"), vec![1177]);
    assert_eq!(scan_codes("0o"), vec![1178]);
    assert_eq!(scan_codes("1e"), vec![1124]);
}

#[test]
fn test_identifier_after_number() {
    let mut scanner = Scanner::new("3px;");
    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    assert_eq!(scanner.token_value(), "3px");
    assert!(scanner.token_flags().contains(TokenFlags::IS_INVALID));
    assert_eq!(scanner.scan(), SyntaxKind::SemicolonToken);
    assert_eq!(scanner.diagnostics().diagnostics()[0].code, 1351);
}

#[test]
fn test_string_literals() {
    let tokens = scan_all(r#""hello" 'world' """#);
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::StringLiteral, "hello".to_string()),
            (SyntaxKind::StringLiteral, "world".to_string()),
            (SyntaxKind::StringLiteral, String::new()),
        ]
    );
}

#[test]
fn test_string_escape_sequences() {
    let tokens = scan_all(r#""a\nb\t\"q\" \x41B\u{1F600} \\""#);
    assert_eq!(tokens[0].1, "a\nb\t\"q\" AB\u{1F600} \\");
}

#[test]
fn test_string_line_continuation() {
    let tokens = scan_all("'a\\\nb'");
    assert_eq!(tokens[0].1, "ab");
}

#[test]
fn test_unescaped_string_borrows_source() {
    let source = "'plain'";
    let mut scanner = Scanner::new(source);
    scanner.scan();
    assert!(matches!(scanner.token_value_cow(), std::borrow::Cow::Borrowed("plain")));
}

#[test]
fn test_unterminated_string_produces_diagnostic() {
    let mut scanner = Scanner::new("let s = 'abc\nnext");
    scanner.set_file_name("bad.ts");
    let kinds: Vec<SyntaxKind> = scanner.tokens().map(|t| t.kind).collect();
    assert_eq!(kinds[3], SyntaxKind::StringLiteral);
    assert_eq!(kinds[4], SyntaxKind::Identifier);
    let diagnostics = scanner.diagnostics().diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, 1002);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::LexError);
    assert_eq!(diagnostics[0].to_string(), "bad.ts(1,9): error TS1002: Unterminated string literal.");
}

#[test]
fn test_template_literal() {
    let tokens = scan_all("`hello`");
    assert_eq!(tokens, vec![(SyntaxKind::NoSubstitutionTemplateLiteral, "hello".to_string())]);
}

#[test]
fn test_template_with_expressions() {
    let tokens = scan_all("`a${x}b${y}c`");
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::TemplateHead, "a".to_string()),
            (SyntaxKind::Identifier, "x".to_string()),
            (SyntaxKind::TemplateMiddle, "b".to_string()),
            (SyntaxKind::Identifier, "y".to_string()),
            (SyntaxKind::TemplateTail, "c".to_string()),
        ]
    );
}

#[test]
fn test_template_with_braces_inside_placeholder() {
    assert_eq!(
        scan_kinds("`${ {a: 1}.a }`"),
        vec![
            SyntaxKind::TemplateHead,
            SyntaxKind::OpenBraceToken,
            SyntaxKind::Identifier,
            SyntaxKind::ColonToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::CloseBraceToken,
            SyntaxKind::DotToken,
            SyntaxKind::Identifier,
            SyntaxKind::TemplateTail,
        ]
    );
}

#[test]
fn test_nested_templates() {
    assert_eq!(
        scan_kinds("`a${`b${c}`}d`"),
        vec![
            SyntaxKind::TemplateHead,
            SyntaxKind::TemplateHead,
            SyntaxKind::Identifier,
            SyntaxKind::TemplateTail,
            SyntaxKind::TemplateTail,
        ]
    );
}

#[test]
fn test_template_normalizes_crlf() {
    let tokens = scan_all("`a\r\nb`");
    assert_eq!(tokens[0].1, "a\nb");
}

#[test]
fn test_unterminated_template_produces_diagnostic() {
    assert_eq!(scan_codes("`abc"), vec![1160]);
    assert_eq!(scan_codes("`a${x}b"), vec![1160]);
}

#[test]
fn test_identifiers() {
    let tokens = scan_all("foo _bar $baz café \\u0061bc");
    assert!(tokens.iter().all(|(k, _)| *k == SyntaxKind::Identifier));
    assert_eq!(tokens[3].1, "café");
    assert_eq!(tokens[4].1, "abc");
}

#[test]
fn test_escaped_keyword_is_identifier() {
    assert_eq!(scan_kinds("\\u006Cet"), vec![SyntaxKind::Identifier]);
}

#[test]
fn test_private_identifier() {
    assert_eq!(
        scan_all("#count"),
        vec![(SyntaxKind::PrivateIdentifier, "#count".to_string())]
    );
}

#[test]
fn test_keywords() {
    assert_eq!(
        scan_kinds("interface type enum declare readonly keyof infer satisfies"),
        vec![
            SyntaxKind::InterfaceKeyword,
            SyntaxKind::TypeKeyword,
            SyntaxKind::EnumKeyword,
            SyntaxKind::DeclareKeyword,
            SyntaxKind::ReadonlyKeyword,
            SyntaxKind::KeyOfKeyword,
            SyntaxKind::InferKeyword,
            SyntaxKind::SatisfiesKeyword,
        ]
    );
}

#[test]
fn test_custom_keyword_table() {
    let table = KeywordTable::typescript();
    let mut scanner = Scanner::with_keywords("unique symbol", &table);
    assert_eq!(scanner.scan(), SyntaxKind::UniqueKeyword);
    assert_eq!(scanner.scan(), SyntaxKind::SymbolKeyword);
}

#[test]
fn test_operators() {
    assert_eq!(
        scan_kinds("=== !== => ?? ?. ... ** **= &&= ||= ??= <<="),
        vec![
            SyntaxKind::EqualsEqualsEqualsToken,
            SyntaxKind::ExclamationEqualsEqualsToken,
            SyntaxKind::EqualsGreaterThanToken,
            SyntaxKind::QuestionQuestionToken,
            SyntaxKind::QuestionDotToken,
            SyntaxKind::DotDotDotToken,
            SyntaxKind::AsteriskAsteriskToken,
            SyntaxKind::AsteriskAsteriskEqualsToken,
            SyntaxKind::AmpersandAmpersandEqualsToken,
            SyntaxKind::BarBarEqualsToken,
            SyntaxKind::QuestionQuestionEqualsToken,
            SyntaxKind::LessThanLessThanEqualsToken,
        ]
    );
}

#[test]
fn test_question_dot_before_digit_is_conditional() {
    assert_eq!(
        scan_kinds("a?.5:b"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::QuestionToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::ColonToken,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_generic_type_tokens() {
    assert_eq!(
        scan_kinds("Map<string, Array<number>>"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::LessThanToken,
            SyntaxKind::StringKeyword,
            SyntaxKind::CommaToken,
            SyntaxKind::Identifier,
            SyntaxKind::LessThanToken,
            SyntaxKind::NumberKeyword,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::GreaterThanToken,
        ]
    );
}

#[test]
fn test_rescan_right_shift() {
    let mut scanner = Scanner::new("a >> 2");
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
    assert_eq!(scanner.rescan_greater_than_token(), SyntaxKind::GreaterThanGreaterThanToken);
    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
}

#[test]
fn test_regex_literal() {
    let mut scanner = Scanner::new("/ab[/]c\\//gi;");
    assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
    assert_eq!(scanner.rescan_slash_token(), SyntaxKind::RegularExpressionLiteral);
    assert_eq!(scanner.token_value(), "/ab[/]c\\//gi");
    assert_eq!(scanner.scan(), SyntaxKind::SemicolonToken);
}

#[test]
fn test_unterminated_regex() {
    let mut scanner = Scanner::new("/abc\n");
    scanner.scan();
    scanner.rescan_slash_token();
    assert_eq!(scanner.diagnostics().diagnostics()[0].code, 1161);
}

#[test]
fn test_comments_skipped() {
    assert_eq!(
        scan_kinds("a // line\n/* block */ b /** doc\n */ c"),
        vec![SyntaxKind::Identifier, SyntaxKind::Identifier, SyntaxKind::Identifier]
    );
}

#[test]
fn test_unterminated_comment() {
    assert_eq!(scan_codes("a /* never closed"), vec![1010]);
}

#[test]
fn test_token_positions() {
    let mut scanner = Scanner::new("let x = 1;");
    let tokens: Vec<_> = scanner.tokens().collect();
    assert_eq!((tokens[1].pos, tokens[1].end), (4, 5));
    assert_eq!(tokens[1].column, 4);
    assert_eq!(tokens.last().map(|t| t.kind), Some(SyntaxKind::EndOfFileToken));
}

#[test]
fn test_line_break_tracking() {
    let mut scanner = Scanner::new("a\r\nb /*\n*/ c d");
    let tokens: Vec<_> = scanner.tokens().collect();
    assert!(!tokens[0].has_preceding_line_break());
    assert!(tokens[1].has_preceding_line_break());
    assert_eq!(tokens[1].line, 1);
    assert!(tokens[2].has_preceding_line_break());
    assert!(!tokens[3].has_preceding_line_break());
}

#[test]
fn test_invalid_character() {
    let mut scanner = Scanner::new("a § b");
    let kinds: Vec<SyntaxKind> = scanner.tokens().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![SyntaxKind::Identifier, SyntaxKind::Unknown, SyntaxKind::Identifier, SyntaxKind::EndOfFileToken]
    );
    let diagnostic = &scanner.diagnostics().diagnostics()[0];
    assert_eq!(diagnostic.code, 1127);
    assert_eq!(diagnostic.span.length, 2);
}

#[test]
fn test_unicode_whitespace_is_trivia() {
    assert_eq!(scan_kinds("\u{FEFF}a\u{00A0}b\u{2028}c"), vec![SyntaxKind::Identifier; 3]);
}

#[test]
fn test_brace_depth() {
    let mut scanner = Scanner::new("{ { } `${ {} }`");
    while scanner.scan() != SyntaxKind::EndOfFileToken {}
    assert_eq!(scanner.brace_depth(), 1);
}

#[test]
fn test_no_diagnostics_for_valid_source() {
    let source = "export interface A<T> extends B { readonly [k: string]: T; m?(): void }";
    assert!(scan_codes(source).is_empty());
}
