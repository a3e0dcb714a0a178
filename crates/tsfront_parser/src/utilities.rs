//! Token classification used by the parser.

use tsfront_ast::syntax_kind::SyntaxKind;

/// Check if a token kind can begin a left-hand-side expression.
pub fn is_start_of_left_hand_side_expression(kind: SyntaxKind) -> bool {
    kind.is_identifier_like()
        || matches!(
            kind,
            SyntaxKind::NumericLiteral
                | SyntaxKind::BigIntLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::NoSubstitutionTemplateLiteral
                | SyntaxKind::TemplateHead
                | SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::ClassKeyword
                | SyntaxKind::NewKeyword
                | SyntaxKind::SlashToken
                | SyntaxKind::SlashEqualsToken
                | SyntaxKind::ThisKeyword
                | SyntaxKind::SuperKeyword
                | SyntaxKind::TrueKeyword
                | SyntaxKind::FalseKeyword
                | SyntaxKind::NullKeyword
                | SyntaxKind::ImportKeyword
                | SyntaxKind::PrivateIdentifier
        )
}

/// Check if a token kind can begin any expression.
pub fn is_start_of_expression(kind: SyntaxKind) -> bool {
    is_start_of_left_hand_side_expression(kind)
        || matches!(
            kind,
            SyntaxKind::PlusToken
                | SyntaxKind::MinusToken
                | SyntaxKind::TildeToken
                | SyntaxKind::ExclamationToken
                | SyntaxKind::PlusPlusToken
                | SyntaxKind::MinusMinusToken
                | SyntaxKind::DeleteKeyword
                | SyntaxKind::TypeOfKeyword
                | SyntaxKind::VoidKeyword
                | SyntaxKind::AwaitKeyword
                | SyntaxKind::YieldKeyword
                | SyntaxKind::LessThanToken
        )
}

/// Tokens after which `f<T>` reads as an instantiation or a generic call
/// rather than a comparison.
pub fn can_follow_type_arguments_in_expression(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::OpenParenToken
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateHead
            | SyntaxKind::DotToken
            | SyntaxKind::QuestionDotToken
            | SyntaxKind::CloseParenToken
            | SyntaxKind::CloseBracketToken
            | SyntaxKind::ColonToken
            | SyntaxKind::SemicolonToken
            | SyntaxKind::CommaToken
            | SyntaxKind::QuestionToken
            | SyntaxKind::EqualsEqualsToken
            | SyntaxKind::EqualsEqualsEqualsToken
            | SyntaxKind::ExclamationEqualsToken
            | SyntaxKind::ExclamationEqualsEqualsToken
            | SyntaxKind::CloseBraceToken
            | SyntaxKind::EndOfFileToken
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_starts() {
        assert!(is_start_of_expression(SyntaxKind::Identifier));
        assert!(is_start_of_expression(SyntaxKind::TypeKeyword));
        assert!(is_start_of_expression(SyntaxKind::MinusToken));
        assert!(!is_start_of_expression(SyntaxKind::CloseBraceToken));
        assert!(!is_start_of_expression(SyntaxKind::AtToken));
        assert!(!is_start_of_left_hand_side_expression(SyntaxKind::PlusToken));
    }

    #[test]
    fn test_type_argument_followers() {
        assert!(can_follow_type_arguments_in_expression(SyntaxKind::OpenParenToken));
        assert!(can_follow_type_arguments_in_expression(SyntaxKind::SemicolonToken));
        assert!(!can_follow_type_arguments_in_expression(SyntaxKind::Identifier));
        assert!(!can_follow_type_arguments_in_expression(SyntaxKind::PlusToken));
    }
}
