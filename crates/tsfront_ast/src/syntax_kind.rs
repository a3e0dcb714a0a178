//! SyntaxKind enum - token and node kinds of the tsfront AST.

/// The kind of a syntax token or node in the AST.
///
/// Tokens come first, then reserved words, strict-mode reserved words and
/// contextual keywords, then node kinds. Range checks below rely on this
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================
    Unknown = 0,
    EndOfFileToken,

    // Literals
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,

    // Pseudo-literals (template)
    TemplateHead,
    TemplateMiddle,
    TemplateTail,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    QuestionDotToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    EqualsGreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionToken,
    ColonToken,
    AtToken,
    QuestionQuestionToken,
    BacktickToken,
    HashToken,

    // Assignments
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,
    BarBarEqualsToken,
    AmpersandAmpersandEqualsToken,
    QuestionQuestionEqualsToken,

    // Identifiers
    Identifier,
    PrivateIdentifier,

    // Reserved words
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,

    // Strict mode reserved words
    ImplementsKeyword,
    InterfaceKeyword,
    LetKeyword,
    PackageKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    StaticKeyword,
    YieldKeyword,

    // Contextual keywords
    AbstractKeyword,
    AccessorKeyword,
    AsKeyword,
    AssertsKeyword,
    AnyKeyword,
    AsyncKeyword,
    AwaitKeyword,
    BooleanKeyword,
    ConstructorKeyword,
    DeclareKeyword,
    GetKeyword,
    InferKeyword,
    IntrinsicKeyword,
    IsKeyword,
    KeyOfKeyword,
    ModuleKeyword,
    NamespaceKeyword,
    NeverKeyword,
    OutKeyword,
    ReadonlyKeyword,
    RequireKeyword,
    NumberKeyword,
    ObjectKeyword,
    SatisfiesKeyword,
    SetKeyword,
    StringKeyword,
    SymbolKeyword,
    TypeKeyword,
    UndefinedKeyword,
    UniqueKeyword,
    UnknownKeyword,
    UsingKeyword,
    FromKeyword,
    GlobalKeyword,
    BigIntKeyword,
    OverrideKeyword,
    OfKeyword,

    // ========================================================================
    // Nodes
    // ========================================================================

    // Names
    QualifiedName,
    ComputedPropertyName,

    // Signature elements
    TypeParameter,
    Parameter,

    // Type members
    PropertySignature,
    PropertyDeclaration,
    MethodSignature,
    MethodDeclaration,
    Constructor,
    GetAccessor,
    SetAccessor,
    CallSignature,
    ConstructSignature,
    IndexSignature,

    // Types
    TypePredicate,
    TypeReference,
    FunctionType,
    ConstructorType,
    TypeQuery,
    TypeLiteral,
    ArrayType,
    TupleType,
    NamedTupleMember,
    UnionType,
    IntersectionType,
    ConditionalType,
    InferType,
    ParenthesizedType,
    TypeOperator,
    IndexedAccessType,
    MappedType,
    LiteralType,
    TemplateLiteralType,

    // Binding patterns
    ObjectBindingPattern,
    ArrayBindingPattern,
    BindingElement,

    // Expressions
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    TaggedTemplateExpression,
    ParenthesizedExpression,
    FunctionExpression,
    ArrowFunction,
    DeleteExpression,
    TypeOfExpression,
    VoidExpression,
    AwaitExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    BinaryExpression,
    ConditionalExpression,
    TemplateExpression,
    YieldExpression,
    SpreadElement,
    ClassExpression,
    OmittedExpression,
    ExpressionWithTypeArguments,
    AsExpression,
    NonNullExpression,
    SatisfiesExpression,

    // Element
    TemplateSpan,

    // Statements
    Block,
    EmptyStatement,
    VariableStatement,
    ExpressionStatement,
    IfStatement,
    DoStatement,
    WhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    ContinueStatement,
    BreakStatement,
    ReturnStatement,
    SwitchStatement,
    LabeledStatement,
    ThrowStatement,
    TryStatement,
    DebuggerStatement,
    VariableDeclaration,
    FunctionDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    TypeAliasDeclaration,
    EnumDeclaration,
    ImportDeclaration,
    ImportSpecifier,
    ExportAssignment,
    ExportDeclaration,
    ExportSpecifier,

    // Clauses
    CaseClause,
    DefaultClause,
    CatchClause,

    // Property assignments
    PropertyAssignment,
    ShorthandPropertyAssignment,
    SpreadAssignment,

    // Enum member
    EnumMember,

    // Top-level
    SourceFile,
}

impl SyntaxKind {
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const FIRST_COMPOUND_ASSIGNMENT: SyntaxKind = SyntaxKind::PlusEqualsToken;
    pub const FIRST_RESERVED_WORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_RESERVED_WORD: SyntaxKind = SyntaxKind::WithKeyword;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::OfKeyword;
    pub const FIRST_CONTEXTUAL_KEYWORD: SyntaxKind = SyntaxKind::AbstractKeyword;
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const FIRST_TYPE_NODE: SyntaxKind = SyntaxKind::TypePredicate;
    pub const LAST_TYPE_NODE: SyntaxKind = SyntaxKind::TemplateLiteralType;

    /// Every keyword kind, in declaration order.
    pub const ALL_KEYWORDS: [SyntaxKind; 82] = [
        SyntaxKind::BreakKeyword,
        SyntaxKind::CaseKeyword,
        SyntaxKind::CatchKeyword,
        SyntaxKind::ClassKeyword,
        SyntaxKind::ConstKeyword,
        SyntaxKind::ContinueKeyword,
        SyntaxKind::DebuggerKeyword,
        SyntaxKind::DefaultKeyword,
        SyntaxKind::DeleteKeyword,
        SyntaxKind::DoKeyword,
        SyntaxKind::ElseKeyword,
        SyntaxKind::EnumKeyword,
        SyntaxKind::ExportKeyword,
        SyntaxKind::ExtendsKeyword,
        SyntaxKind::FalseKeyword,
        SyntaxKind::FinallyKeyword,
        SyntaxKind::ForKeyword,
        SyntaxKind::FunctionKeyword,
        SyntaxKind::IfKeyword,
        SyntaxKind::ImportKeyword,
        SyntaxKind::InKeyword,
        SyntaxKind::InstanceOfKeyword,
        SyntaxKind::NewKeyword,
        SyntaxKind::NullKeyword,
        SyntaxKind::ReturnKeyword,
        SyntaxKind::SuperKeyword,
        SyntaxKind::SwitchKeyword,
        SyntaxKind::ThisKeyword,
        SyntaxKind::ThrowKeyword,
        SyntaxKind::TrueKeyword,
        SyntaxKind::TryKeyword,
        SyntaxKind::TypeOfKeyword,
        SyntaxKind::VarKeyword,
        SyntaxKind::VoidKeyword,
        SyntaxKind::WhileKeyword,
        SyntaxKind::WithKeyword,
        SyntaxKind::ImplementsKeyword,
        SyntaxKind::InterfaceKeyword,
        SyntaxKind::LetKeyword,
        SyntaxKind::PackageKeyword,
        SyntaxKind::PrivateKeyword,
        SyntaxKind::ProtectedKeyword,
        SyntaxKind::PublicKeyword,
        SyntaxKind::StaticKeyword,
        SyntaxKind::YieldKeyword,
        SyntaxKind::AbstractKeyword,
        SyntaxKind::AccessorKeyword,
        SyntaxKind::AsKeyword,
        SyntaxKind::AssertsKeyword,
        SyntaxKind::AnyKeyword,
        SyntaxKind::AsyncKeyword,
        SyntaxKind::AwaitKeyword,
        SyntaxKind::BooleanKeyword,
        SyntaxKind::ConstructorKeyword,
        SyntaxKind::DeclareKeyword,
        SyntaxKind::GetKeyword,
        SyntaxKind::InferKeyword,
        SyntaxKind::IntrinsicKeyword,
        SyntaxKind::IsKeyword,
        SyntaxKind::KeyOfKeyword,
        SyntaxKind::ModuleKeyword,
        SyntaxKind::NamespaceKeyword,
        SyntaxKind::NeverKeyword,
        SyntaxKind::OutKeyword,
        SyntaxKind::ReadonlyKeyword,
        SyntaxKind::RequireKeyword,
        SyntaxKind::NumberKeyword,
        SyntaxKind::ObjectKeyword,
        SyntaxKind::SatisfiesKeyword,
        SyntaxKind::SetKeyword,
        SyntaxKind::StringKeyword,
        SyntaxKind::SymbolKeyword,
        SyntaxKind::TypeKeyword,
        SyntaxKind::UndefinedKeyword,
        SyntaxKind::UniqueKeyword,
        SyntaxKind::UnknownKeyword,
        SyntaxKind::UsingKeyword,
        SyntaxKind::FromKeyword,
        SyntaxKind::GlobalKeyword,
        SyntaxKind::BigIntKeyword,
        SyntaxKind::OverrideKeyword,
        SyntaxKind::OfKeyword,
    ];
}

impl SyntaxKind {
    #[inline]
    fn in_range(self, first: SyntaxKind, last: SyntaxKind) -> bool {
        let v = self as u16;
        v >= first as u16 && v <= last as u16
    }

    /// Whether this kind represents a keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.in_range(Self::FIRST_KEYWORD, Self::LAST_KEYWORD)
    }

    /// Whether this keyword can never be used as an identifier.
    #[inline]
    pub fn is_reserved_word(self) -> bool {
        self.in_range(Self::FIRST_RESERVED_WORD, Self::LAST_RESERVED_WORD)
    }

    #[inline]
    pub fn is_contextual_keyword(self) -> bool {
        self.in_range(Self::FIRST_CONTEXTUAL_KEYWORD, Self::LAST_KEYWORD)
    }

    /// Whether a token of this kind may be used as a binding identifier.
    #[inline]
    pub fn is_identifier_like(self) -> bool {
        self == SyntaxKind::Identifier
            || self.in_range(SyntaxKind::ImplementsKeyword, Self::LAST_KEYWORD)
    }

    /// Whether a token of this kind may be used as a property name after `.`
    /// or as an object member name.
    #[inline]
    pub fn is_identifier_or_keyword(self) -> bool {
        self == SyntaxKind::Identifier || self.is_keyword()
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        self.in_range(Self::FIRST_PUNCTUATION, Self::LAST_PUNCTUATION)
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        self.in_range(SyntaxKind::NumericLiteral, SyntaxKind::NoSubstitutionTemplateLiteral)
    }

    #[inline]
    pub fn is_template(self) -> bool {
        self.in_range(SyntaxKind::NoSubstitutionTemplateLiteral, SyntaxKind::TemplateTail)
    }

    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self.in_range(Self::FIRST_ASSIGNMENT, Self::LAST_ASSIGNMENT)
    }

    #[inline]
    pub fn is_compound_assignment(self) -> bool {
        self.in_range(Self::FIRST_COMPOUND_ASSIGNMENT, Self::LAST_ASSIGNMENT)
    }

    /// Whether this kind represents a modifier keyword.
    #[inline]
    pub fn is_modifier_kind(self) -> bool {
        matches!(
            self,
            SyntaxKind::AbstractKeyword
                | SyntaxKind::AccessorKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::DefaultKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::InKeyword
                | SyntaxKind::OutKeyword
                | SyntaxKind::OverrideKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::StaticKeyword
        )
    }

    /// Whether this keyword names a built-in type (`string`, `void`, ...).
    #[inline]
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::AnyKeyword
                | SyntaxKind::UnknownKeyword
                | SyntaxKind::NumberKeyword
                | SyntaxKind::BigIntKeyword
                | SyntaxKind::StringKeyword
                | SyntaxKind::BooleanKeyword
                | SyntaxKind::SymbolKeyword
                | SyntaxKind::ObjectKeyword
                | SyntaxKind::NeverKeyword
                | SyntaxKind::UndefinedKeyword
                | SyntaxKind::VoidKeyword
                | SyntaxKind::NullKeyword
                | SyntaxKind::IntrinsicKeyword
        )
    }

    #[inline]
    pub fn is_type_node(self) -> bool {
        self.in_range(Self::FIRST_TYPE_NODE, Self::LAST_TYPE_NODE)
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::BreakKeyword => Some("break"),
            SyntaxKind::CaseKeyword => Some("case"),
            SyntaxKind::CatchKeyword => Some("catch"),
            SyntaxKind::ClassKeyword => Some("class"),
            SyntaxKind::ConstKeyword => Some("const"),
            SyntaxKind::ContinueKeyword => Some("continue"),
            SyntaxKind::DebuggerKeyword => Some("debugger"),
            SyntaxKind::DefaultKeyword => Some("default"),
            SyntaxKind::DeleteKeyword => Some("delete"),
            SyntaxKind::DoKeyword => Some("do"),
            SyntaxKind::ElseKeyword => Some("else"),
            SyntaxKind::EnumKeyword => Some("enum"),
            SyntaxKind::ExportKeyword => Some("export"),
            SyntaxKind::ExtendsKeyword => Some("extends"),
            SyntaxKind::FalseKeyword => Some("false"),
            SyntaxKind::FinallyKeyword => Some("finally"),
            SyntaxKind::ForKeyword => Some("for"),
            SyntaxKind::FunctionKeyword => Some("function"),
            SyntaxKind::IfKeyword => Some("if"),
            SyntaxKind::ImportKeyword => Some("import"),
            SyntaxKind::InKeyword => Some("in"),
            SyntaxKind::InstanceOfKeyword => Some("instanceof"),
            SyntaxKind::NewKeyword => Some("new"),
            SyntaxKind::NullKeyword => Some("null"),
            SyntaxKind::ReturnKeyword => Some("return"),
            SyntaxKind::SuperKeyword => Some("super"),
            SyntaxKind::SwitchKeyword => Some("switch"),
            SyntaxKind::ThisKeyword => Some("this"),
            SyntaxKind::ThrowKeyword => Some("throw"),
            SyntaxKind::TrueKeyword => Some("true"),
            SyntaxKind::TryKeyword => Some("try"),
            SyntaxKind::TypeOfKeyword => Some("typeof"),
            SyntaxKind::VarKeyword => Some("var"),
            SyntaxKind::VoidKeyword => Some("void"),
            SyntaxKind::WhileKeyword => Some("while"),
            SyntaxKind::WithKeyword => Some("with"),
            SyntaxKind::ImplementsKeyword => Some("implements"),
            SyntaxKind::InterfaceKeyword => Some("interface"),
            SyntaxKind::LetKeyword => Some("let"),
            SyntaxKind::PackageKeyword => Some("package"),
            SyntaxKind::PrivateKeyword => Some("private"),
            SyntaxKind::ProtectedKeyword => Some("protected"),
            SyntaxKind::PublicKeyword => Some("public"),
            SyntaxKind::StaticKeyword => Some("static"),
            SyntaxKind::YieldKeyword => Some("yield"),
            SyntaxKind::AbstractKeyword => Some("abstract"),
            SyntaxKind::AccessorKeyword => Some("accessor"),
            SyntaxKind::AsKeyword => Some("as"),
            SyntaxKind::AssertsKeyword => Some("asserts"),
            SyntaxKind::AnyKeyword => Some("any"),
            SyntaxKind::AsyncKeyword => Some("async"),
            SyntaxKind::AwaitKeyword => Some("await"),
            SyntaxKind::BooleanKeyword => Some("boolean"),
            SyntaxKind::ConstructorKeyword => Some("constructor"),
            SyntaxKind::DeclareKeyword => Some("declare"),
            SyntaxKind::GetKeyword => Some("get"),
            SyntaxKind::InferKeyword => Some("infer"),
            SyntaxKind::IntrinsicKeyword => Some("intrinsic"),
            SyntaxKind::IsKeyword => Some("is"),
            SyntaxKind::KeyOfKeyword => Some("keyof"),
            SyntaxKind::ModuleKeyword => Some("module"),
            SyntaxKind::NamespaceKeyword => Some("namespace"),
            SyntaxKind::NeverKeyword => Some("never"),
            SyntaxKind::OutKeyword => Some("out"),
            SyntaxKind::ReadonlyKeyword => Some("readonly"),
            SyntaxKind::RequireKeyword => Some("require"),
            SyntaxKind::NumberKeyword => Some("number"),
            SyntaxKind::ObjectKeyword => Some("object"),
            SyntaxKind::SatisfiesKeyword => Some("satisfies"),
            SyntaxKind::SetKeyword => Some("set"),
            SyntaxKind::StringKeyword => Some("string"),
            SyntaxKind::SymbolKeyword => Some("symbol"),
            SyntaxKind::TypeKeyword => Some("type"),
            SyntaxKind::UndefinedKeyword => Some("undefined"),
            SyntaxKind::UniqueKeyword => Some("unique"),
            SyntaxKind::UnknownKeyword => Some("unknown"),
            SyntaxKind::UsingKeyword => Some("using"),
            SyntaxKind::FromKeyword => Some("from"),
            SyntaxKind::GlobalKeyword => Some("global"),
            SyntaxKind::BigIntKeyword => Some("bigint"),
            SyntaxKind::OverrideKeyword => Some("override"),
            SyntaxKind::OfKeyword => Some("of"),
            _ => None,
        }
    }

    /// Get the punctuation text for a punctuation kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::OpenParenToken => Some("("),
            SyntaxKind::CloseParenToken => Some(")"),
            SyntaxKind::OpenBracketToken => Some("["),
            SyntaxKind::CloseBracketToken => Some("]"),
            SyntaxKind::DotToken => Some("."),
            SyntaxKind::DotDotDotToken => Some("..."),
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::CommaToken => Some(","),
            SyntaxKind::QuestionDotToken => Some("?."),
            SyntaxKind::LessThanToken => Some("<"),
            SyntaxKind::GreaterThanToken => Some(">"),
            SyntaxKind::LessThanEqualsToken => Some("<="),
            SyntaxKind::GreaterThanEqualsToken => Some(">="),
            SyntaxKind::EqualsEqualsToken => Some("=="),
            SyntaxKind::ExclamationEqualsToken => Some("!="),
            SyntaxKind::EqualsEqualsEqualsToken => Some("==="),
            SyntaxKind::ExclamationEqualsEqualsToken => Some("!=="),
            SyntaxKind::EqualsGreaterThanToken => Some("=>"),
            SyntaxKind::PlusToken => Some("+"),
            SyntaxKind::MinusToken => Some("-"),
            SyntaxKind::AsteriskToken => Some("*"),
            SyntaxKind::AsteriskAsteriskToken => Some("**"),
            SyntaxKind::SlashToken => Some("/"),
            SyntaxKind::PercentToken => Some("%"),
            SyntaxKind::PlusPlusToken => Some("++"),
            SyntaxKind::MinusMinusToken => Some("--"),
            SyntaxKind::LessThanLessThanToken => Some("<<"),
            SyntaxKind::GreaterThanGreaterThanToken => Some(">>"),
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => Some(">>>"),
            SyntaxKind::AmpersandToken => Some("&"),
            SyntaxKind::BarToken => Some("|"),
            SyntaxKind::CaretToken => Some("^"),
            SyntaxKind::ExclamationToken => Some("!"),
            SyntaxKind::TildeToken => Some("~"),
            SyntaxKind::AmpersandAmpersandToken => Some("&&"),
            SyntaxKind::BarBarToken => Some("||"),
            SyntaxKind::QuestionToken => Some("?"),
            SyntaxKind::ColonToken => Some(":"),
            SyntaxKind::AtToken => Some("@"),
            SyntaxKind::QuestionQuestionToken => Some("??"),
            SyntaxKind::BacktickToken => Some("`"),
            SyntaxKind::HashToken => Some("#"),
            SyntaxKind::EqualsToken => Some("="),
            SyntaxKind::PlusEqualsToken => Some("+="),
            SyntaxKind::MinusEqualsToken => Some("-="),
            SyntaxKind::AsteriskEqualsToken => Some("*="),
            SyntaxKind::AsteriskAsteriskEqualsToken => Some("**="),
            SyntaxKind::SlashEqualsToken => Some("/="),
            SyntaxKind::PercentEqualsToken => Some("%="),
            SyntaxKind::LessThanLessThanEqualsToken => Some("<<="),
            SyntaxKind::GreaterThanGreaterThanEqualsToken => Some(">>="),
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => Some(">>>="),
            SyntaxKind::AmpersandEqualsToken => Some("&="),
            SyntaxKind::BarEqualsToken => Some("|="),
            SyntaxKind::CaretEqualsToken => Some("^="),
            SyntaxKind::BarBarEqualsToken => Some("||="),
            SyntaxKind::AmpersandAmpersandEqualsToken => Some("&&="),
            SyntaxKind::QuestionQuestionEqualsToken => Some("??="),
            _ => None,
        }
    }

    /// Source text of a fixed-spelling token (keyword or punctuation).
    pub fn token_text(self) -> Option<&'static str> {
        self.keyword_text().or_else(|| self.punctuation_text())
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_ranges() {
        assert!(SyntaxKind::ClassKeyword.is_reserved_word());
        assert!(!SyntaxKind::TypeKeyword.is_reserved_word());
        assert!(SyntaxKind::TypeKeyword.is_contextual_keyword());
        assert!(SyntaxKind::InferKeyword.is_identifier_like());
        assert!(SyntaxKind::LetKeyword.is_identifier_like());
        assert!(!SyntaxKind::ClassKeyword.is_identifier_like());
        assert!(SyntaxKind::ClassKeyword.is_identifier_or_keyword());
    }

    #[test]
    fn test_all_keywords_have_text() {
        for kind in SyntaxKind::ALL_KEYWORDS {
            assert!(kind.is_keyword(), "{kind}");
            assert!(kind.keyword_text().is_some(), "{kind}");
        }
    }

    #[test]
    fn test_token_text() {
        assert_eq!(SyntaxKind::KeyOfKeyword.token_text(), Some("keyof"));
        assert_eq!(SyntaxKind::QuestionDotToken.token_text(), Some("?."));
        assert_eq!(SyntaxKind::Identifier.token_text(), None);
        assert!(SyntaxKind::PlusEqualsToken.is_compound_assignment());
        assert!(!SyntaxKind::EqualsToken.is_compound_assignment());
    }
}
