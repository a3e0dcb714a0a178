//! AST node definitions.
//!
//! Nodes live in a per-parse `bumpalo::Bump` and refer to their children
//! through arena references and slices. Every node is `Copy`: copying one
//! copies a handful of references, never a subtree.

use crate::syntax_kind::SyntaxKind;
use crate::types::*;
use tsfront_core::text::TextRange;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all AST nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeData {
    /// The kind of this node.
    pub kind: SyntaxKind,
    /// Source position range.
    pub range: TextRange,
    pub flags: NodeFlags,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            range: TextRange::new(pos, end),
            flags: NodeFlags::NONE,
        }
    }

    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags |= flags;
        self
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

// ============================================================================
// Names
// ============================================================================

/// An identifier, a keyword used as a name, or a `#private` name.
#[derive(Debug, Clone, Copy)]
pub struct Identifier<'a> {
    pub data: NodeData,
    pub text: &'a str,
}

/// `A` or `A.B.C`, as used by type references and heritage clauses.
#[derive(Debug, Clone, Copy)]
pub enum EntityName<'a> {
    Identifier(Identifier<'a>),
    Qualified(&'a QualifiedName<'a>),
}

#[derive(Debug, Clone, Copy)]
pub struct QualifiedName<'a> {
    pub data: NodeData,
    pub left: EntityName<'a>,
    pub right: Identifier<'a>,
}

impl<'a> EntityName<'a> {
    pub fn range(&self) -> TextRange {
        match self {
            EntityName::Identifier(id) => id.data.range,
            EntityName::Qualified(q) => q.data.range,
        }
    }

    /// The last segment of the name.
    pub fn rightmost(&self) -> &'a str {
        match self {
            EntityName::Identifier(id) => id.text,
            EntityName::Qualified(q) => q.right.text,
        }
    }

    /// Append the dotted spelling of this name to `out`.
    pub fn write_to(&self, out: &mut String) {
        match self {
            EntityName::Identifier(id) => out.push_str(id.text),
            EntityName::Qualified(q) => {
                q.left.write_to(out);
                out.push('.');
                out.push_str(q.right.text);
            }
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

/// A string, numeric or other literal token carried by a node.
///
/// For string-like literals `text` holds the cooked value (quotes removed,
/// escapes resolved). For numeric and bigint literals it holds the source
/// spelling.
#[derive(Debug, Clone, Copy)]
pub struct LiteralNode<'a> {
    pub data: NodeData,
    pub text: &'a str,
}

/// The name of a member, property assignment or enum member.
#[derive(Debug, Clone, Copy)]
pub enum PropertyName<'a> {
    Identifier(Identifier<'a>),
    PrivateIdentifier(Identifier<'a>),
    StringLiteral(LiteralNode<'a>),
    NumericLiteral(LiteralNode<'a>),
    Computed(&'a ComputedPropertyName<'a>),
}

#[derive(Debug, Clone, Copy)]
pub struct ComputedPropertyName<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

impl<'a> PropertyName<'a> {
    /// The static text of the name, or `None` for computed names.
    pub fn text(&self) -> Option<&'a str> {
        match self {
            PropertyName::Identifier(id) | PropertyName::PrivateIdentifier(id) => Some(id.text),
            PropertyName::StringLiteral(lit) | PropertyName::NumericLiteral(lit) => Some(lit.text),
            PropertyName::Computed(_) => None,
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            PropertyName::Identifier(id) | PropertyName::PrivateIdentifier(id) => id.data.range,
            PropertyName::StringLiteral(lit) | PropertyName::NumericLiteral(lit) => lit.data.range,
            PropertyName::Computed(c) => c.data.range,
        }
    }
}

// ============================================================================
// Type Nodes
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub enum TypeNode<'a> {
    /// A built-in type keyword: `string`, `void`, `null`, `this`, ...
    Keyword(KeywordType),
    Reference(TypeReference<'a>),
    Union(UnionType<'a>),
    Intersection(IntersectionType<'a>),
    Conditional(ConditionalType<'a>),
    Infer(InferType<'a>),
    Mapped(MappedType<'a>),
    TemplateLiteral(TemplateLiteralType<'a>),
    Tuple(TupleType<'a>),
    Function(FunctionType<'a>),
    Array(ArrayType<'a>),
    IndexedAccess(IndexedAccessType<'a>),
    TypeOperator(TypeOperatorType<'a>),
    Literal(LiteralType<'a>),
    TypeLiteral(TypeLiteral<'a>),
    Parenthesized(ParenthesizedType<'a>),
    TypeQuery(TypeQuery<'a>),
    TypePredicate(TypePredicate<'a>),
}

/// `data.kind` is the keyword's own kind (`StringKeyword`, `ThisKeyword`, ...).
#[derive(Debug, Clone, Copy)]
pub struct KeywordType {
    pub data: NodeData,
}

#[derive(Debug, Clone, Copy)]
pub struct TypeReference<'a> {
    pub data: NodeData,
    pub type_name: EntityName<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
}

#[derive(Debug, Clone, Copy)]
pub struct UnionType<'a> {
    pub data: NodeData,
    pub types: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct IntersectionType<'a> {
    pub data: NodeData,
    pub types: NodeList<'a, TypeNode<'a>>,
}

/// `Check extends Extends ? True : False`
#[derive(Debug, Clone, Copy)]
pub struct ConditionalType<'a> {
    pub data: NodeData,
    pub check_type: &'a TypeNode<'a>,
    pub extends_type: &'a TypeNode<'a>,
    pub true_type: &'a TypeNode<'a>,
    pub false_type: &'a TypeNode<'a>,
    /// Names introduced by `infer` in `extends_type`, in source order.
    pub infer_names: NodeList<'a, &'a str>,
}

#[derive(Debug, Clone, Copy)]
pub struct InferType<'a> {
    pub data: NodeData,
    pub name: Identifier<'a>,
    pub constraint: Option<&'a TypeNode<'a>>,
}

/// A `readonly` or `?` modifier on a mapped type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappedModifier {
    /// Written without a sign.
    Present,
    Plus,
    Minus,
}

/// `{ readonly [K in C as N]?: V }`
#[derive(Debug, Clone, Copy)]
pub struct MappedType<'a> {
    pub data: NodeData,
    pub readonly_modifier: Option<MappedModifier>,
    pub key_name: Identifier<'a>,
    pub constraint: &'a TypeNode<'a>,
    pub name_type: Option<&'a TypeNode<'a>>,
    pub question_modifier: Option<MappedModifier>,
    pub type_node: Option<&'a TypeNode<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub enum TemplateSegment<'a> {
    /// Cooked literal text between placeholders. Never empty.
    Literal(&'a str),
    Placeholder(&'a TypeNode<'a>),
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateLiteralType<'a> {
    pub data: NodeData,
    pub segments: NodeList<'a, TemplateSegment<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct TupleElement<'a> {
    pub data: NodeData,
    /// Label of a named member (`[first: string]`).
    pub name: Option<Identifier<'a>>,
    pub optional: bool,
    pub rest: bool,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct TupleType<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, TupleElement<'a>>,
}

/// `<T>(a: T) => R`, or `new (...) => R` when `is_constructor` is set.
#[derive(Debug, Clone, Copy)]
pub struct FunctionType<'a> {
    pub data: NodeData,
    pub is_constructor: bool,
    pub is_abstract: bool,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub parameters: NodeList<'a, Parameter<'a>>,
    pub return_type: &'a TypeNode<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ArrayType<'a> {
    pub data: NodeData,
    pub element_type: &'a TypeNode<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct IndexedAccessType<'a> {
    pub data: NodeData,
    pub object_type: &'a TypeNode<'a>,
    pub index_type: &'a TypeNode<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeOperatorKind {
    Keyof,
    Readonly,
    Unique,
}

impl TypeOperatorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeOperatorKind::Keyof => "keyof",
            TypeOperatorKind::Readonly => "readonly",
            TypeOperatorKind::Unique => "unique",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TypeOperatorType<'a> {
    pub data: NodeData,
    pub operator: TypeOperatorKind,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue<'a> {
    /// Cooked string value.
    String(&'a str),
    /// Source spelling, including a leading `-` for negative literals.
    Number(&'a str),
    BigInt(&'a str),
    Boolean(bool),
}

#[derive(Debug, Clone, Copy)]
pub struct LiteralType<'a> {
    pub data: NodeData,
    pub value: LiteralValue<'a>,
}

/// An object type: `{ a: string; (x: number): void }`.
#[derive(Debug, Clone, Copy)]
pub struct TypeLiteral<'a> {
    pub data: NodeData,
    pub members: NodeList<'a, Member<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ParenthesizedType<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
}

/// `typeof a.b<T>`
#[derive(Debug, Clone, Copy)]
pub struct TypeQuery<'a> {
    pub data: NodeData,
    pub expr_name: EntityName<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
}

/// `x is T`, `asserts x`, `asserts this is T`
#[derive(Debug, Clone, Copy)]
pub struct TypePredicate<'a> {
    pub data: NodeData,
    pub asserts: bool,
    pub parameter_name: Identifier<'a>,
    pub type_node: Option<&'a TypeNode<'a>>,
}

// ============================================================================
// Signature Elements
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct TypeParameter<'a> {
    pub data: NodeData,
    /// `in`, `out` and `const` modifiers.
    pub modifiers: ModifierFlags,
    pub name: Identifier<'a>,
    pub constraint: Option<&'a TypeNode<'a>>,
    pub default: Option<&'a TypeNode<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct Parameter<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub dot_dot_dot: bool,
    pub name: BindingName<'a>,
    pub question: bool,
    pub type_annotation: Option<&'a TypeNode<'a>>,
    pub initializer: Option<&'a Expression<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub enum BindingName<'a> {
    Identifier(Identifier<'a>),
    Object(&'a ObjectBindingPattern<'a>),
    Array(&'a ArrayBindingPattern<'a>),
}

impl<'a> BindingName<'a> {
    pub fn as_identifier(&self) -> Option<&'a str> {
        match self {
            BindingName::Identifier(id) => Some(id.text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ObjectBindingPattern<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, BindingElement<'a>>,
}

/// Holes (`[, b]`) are `None`.
#[derive(Debug, Clone, Copy)]
pub struct ArrayBindingPattern<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, Option<BindingElement<'a>>>,
}

#[derive(Debug, Clone, Copy)]
pub struct BindingElement<'a> {
    pub data: NodeData,
    pub dot_dot_dot: bool,
    /// `a` in `{ a: b }`.
    pub property_name: Option<PropertyName<'a>>,
    pub name: BindingName<'a>,
    pub initializer: Option<&'a Expression<'a>>,
}

// ============================================================================
// Members
// ============================================================================

/// A member of a class, interface or object type.
#[derive(Debug, Clone, Copy)]
pub enum Member<'a> {
    Field(FieldMember<'a>),
    Method(MethodMember<'a>),
    IndexSignature(IndexSignature<'a>),
    CallSignature(SignatureMember<'a>),
    ConstructSignature(SignatureMember<'a>),
}

/// A property: `readonly a?: T` in types, `private a: T = 1` in classes.
#[derive(Debug, Clone, Copy)]
pub struct FieldMember<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub name: PropertyName<'a>,
    pub optional: bool,
    /// Definite assignment assertion (`a!: T`).
    pub definite: bool,
    pub type_annotation: Option<&'a TypeNode<'a>>,
    pub initializer: Option<&'a Expression<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Method,
    Constructor,
    Getter,
    Setter,
}

#[derive(Debug, Clone, Copy)]
pub struct MethodMember<'a> {
    pub data: NodeData,
    pub kind: MethodKind,
    pub modifiers: ModifierFlags,
    pub name: PropertyName<'a>,
    pub optional: bool,
    /// Generator method (`*gen()`).
    pub asterisk: bool,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub parameters: NodeList<'a, Parameter<'a>>,
    pub return_type: Option<&'a TypeNode<'a>>,
    pub body: Option<&'a Block<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct IndexSignature<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub parameters: NodeList<'a, Parameter<'a>>,
    pub type_annotation: &'a TypeNode<'a>,
}

/// A call `(x): R` or construct `new (x): R` signature.
#[derive(Debug, Clone, Copy)]
pub struct SignatureMember<'a> {
    pub data: NodeData,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub parameters: NodeList<'a, Parameter<'a>>,
    pub return_type: Option<&'a TypeNode<'a>>,
}

// ============================================================================
// Declarations
// ============================================================================

/// A top-level item of a [`Program`](crate::Program).
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'a> {
    Class(&'a ClassDecl<'a>),
    Interface(&'a InterfaceDecl<'a>),
    Enum(&'a EnumDecl<'a>),
    Function(&'a FunctionDecl<'a>),
    TypeAlias(&'a TypeAliasDecl<'a>),
    Import(&'a ImportDecl<'a>),
    Export(&'a ExportDecl<'a>),
    Variable(&'a VariableDecl<'a>),
    /// An executable statement at the top level.
    Statement(&'a Statement<'a>),
}

/// `Name<Args>` in an `extends` or `implements` clause.
#[derive(Debug, Clone, Copy)]
pub struct HeritageRef<'a> {
    pub data: NodeData,
    pub expression: EntityName<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ClassDecl<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    /// `None` only for `export default class { }` and class expressions.
    pub name: Option<Identifier<'a>>,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub extends: Option<HeritageRef<'a>>,
    pub implements: NodeList<'a, HeritageRef<'a>>,
    pub members: NodeList<'a, Member<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct InterfaceDecl<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub name: Identifier<'a>,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub extends: NodeList<'a, HeritageRef<'a>>,
    pub members: NodeList<'a, Member<'a>>,
    /// Source range of every declaration merged into this one. A single
    /// entry unless merging happened.
    pub parts: NodeList<'a, TextRange>,
}

impl InterfaceDecl<'_> {
    pub fn is_merged(&self) -> bool {
        self.parts.len() > 1
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EnumDecl<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub is_const: bool,
    pub name: Identifier<'a>,
    pub members: NodeList<'a, EnumMember<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct EnumMember<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub initializer: Option<&'a Expression<'a>>,
}

/// The value of an enum member, as far as it can be known syntactically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnumValue<'a> {
    Number(f64),
    String(&'a str),
    /// Computed from an expression the parser does not evaluate.
    Unknown,
}

/// A function declaration or function expression.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDecl<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub asterisk: bool,
    pub name: Option<Identifier<'a>>,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub parameters: NodeList<'a, Parameter<'a>>,
    pub return_type: Option<&'a TypeNode<'a>>,
    /// `None` for overload signatures and ambient declarations.
    pub body: Option<&'a Block<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct TypeAliasDecl<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub name: Identifier<'a>,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ImportDecl<'a> {
    pub data: NodeData,
    pub is_type_only: bool,
    pub default_binding: Option<Identifier<'a>>,
    pub bindings: Option<ImportBindings<'a>>,
    pub module_specifier: LiteralNode<'a>,
}

impl ImportDecl<'_> {
    /// `import 'module';`
    pub fn is_side_effect_only(&self) -> bool {
        self.default_binding.is_none() && self.bindings.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ImportBindings<'a> {
    /// `* as ns`
    Namespace(Identifier<'a>),
    Named(NodeList<'a, ImportSpecifier<'a>>),
}

/// `name` or `property_name as name`.
#[derive(Debug, Clone, Copy)]
pub struct ImportSpecifier<'a> {
    pub data: NodeData,
    pub is_type_only: bool,
    pub property_name: Option<Identifier<'a>>,
    pub name: Identifier<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ExportDecl<'a> {
    pub data: NodeData,
    pub is_type_only: bool,
    pub kind: ExportKind<'a>,
}

#[derive(Debug, Clone, Copy)]
pub enum ExportKind<'a> {
    /// `export { a, b as c }` with an optional `from` clause.
    Named {
        specifiers: NodeList<'a, ExportSpecifier<'a>>,
        module_specifier: Option<LiteralNode<'a>>,
    },
    /// `export * from 'm'`
    All { module_specifier: LiteralNode<'a> },
    /// `export * as ns from 'm'`
    AllAsNamespace {
        name: Identifier<'a>,
        module_specifier: LiteralNode<'a>,
    },
    /// `export <declaration>` or `export default <declaration>`.
    Declaration {
        declaration: Declaration<'a>,
        is_default: bool,
    },
    /// `export default <expression>;`
    DefaultExpression(&'a Expression<'a>),
    /// `export = <expression>;`
    Assignment(&'a Expression<'a>),
}

/// `property_name as name` in an export list. `property_name` is the local.
#[derive(Debug, Clone, Copy)]
pub struct ExportSpecifier<'a> {
    pub data: NodeData,
    pub is_type_only: bool,
    pub property_name: Option<Identifier<'a>>,
    pub name: Identifier<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Var,
    Let,
    Const,
    Using,
}

impl VariableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
            VariableKind::Using => "using",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct VariableDecl<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub kind: VariableKind,
    pub declarations: NodeList<'a, VariableDeclarator<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct VariableDeclarator<'a> {
    pub data: NodeData,
    pub name: BindingName<'a>,
    pub definite: bool,
    pub type_annotation: Option<&'a TypeNode<'a>>,
    pub initializer: Option<&'a Expression<'a>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub enum Statement<'a> {
    /// A declaration nested in a block or function body.
    Declaration(Declaration<'a>),
    Block(&'a Block<'a>),
    Empty(NodeData),
    Expression(ExpressionStatement<'a>),
    If(IfStatement<'a>),
    Do(DoStatement<'a>),
    While(WhileStatement<'a>),
    For(ForStatement<'a>),
    ForIn(ForInOfStatement<'a>),
    ForOf(ForInOfStatement<'a>),
    Continue(JumpStatement<'a>),
    Break(JumpStatement<'a>),
    Return(ReturnStatement<'a>),
    Throw(ThrowStatement<'a>),
    Try(TryStatement<'a>),
    Switch(SwitchStatement<'a>),
    Labeled(LabeledStatement<'a>),
    Debugger(NodeData),
}

#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ExpressionStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct IfStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub then_statement: &'a Statement<'a>,
    pub else_statement: Option<&'a Statement<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct DoStatement<'a> {
    pub data: NodeData,
    pub statement: &'a Statement<'a>,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct WhileStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug, Clone, Copy)]
pub enum ForInitializer<'a> {
    Variable(&'a VariableDecl<'a>),
    Expression(&'a Expression<'a>),
}

#[derive(Debug, Clone, Copy)]
pub struct ForStatement<'a> {
    pub data: NodeData,
    pub initializer: Option<ForInitializer<'a>>,
    pub condition: Option<&'a Expression<'a>>,
    pub incrementor: Option<&'a Expression<'a>>,
    pub statement: &'a Statement<'a>,
}

/// `for (x in obj)` and `for (x of items)`; `is_await` only for `for await`.
#[derive(Debug, Clone, Copy)]
pub struct ForInOfStatement<'a> {
    pub data: NodeData,
    pub is_await: bool,
    pub initializer: ForInitializer<'a>,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

/// `break` or `continue`.
#[derive(Debug, Clone, Copy)]
pub struct JumpStatement<'a> {
    pub data: NodeData,
    pub label: Option<Identifier<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ReturnStatement<'a> {
    pub data: NodeData,
    pub expression: Option<&'a Expression<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ThrowStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct TryStatement<'a> {
    pub data: NodeData,
    pub try_block: &'a Block<'a>,
    pub catch_clause: Option<CatchClause<'a>>,
    pub finally_block: Option<&'a Block<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct CatchClause<'a> {
    pub data: NodeData,
    pub variable: Option<BindingName<'a>>,
    pub type_annotation: Option<&'a TypeNode<'a>>,
    pub block: &'a Block<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct SwitchStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub clauses: NodeList<'a, CaseClause<'a>>,
}

/// A `case` clause, or the `default` clause when `expression` is `None`.
#[derive(Debug, Clone, Copy)]
pub struct CaseClause<'a> {
    pub data: NodeData,
    pub expression: Option<&'a Expression<'a>>,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct LabeledStatement<'a> {
    pub data: NodeData,
    pub label: Identifier<'a>,
    pub statement: &'a Statement<'a>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub enum Expression<'a> {
    Identifier(Identifier<'a>),
    /// `data.kind` is the literal token kind, or `TrueKeyword`,
    /// `FalseKeyword`, `NullKeyword`.
    Literal(LiteralNode<'a>),
    This(NodeData),
    Super(NodeData),
    Template(TemplateExpression<'a>),
    Array(ArrayLiteral<'a>),
    Object(ObjectLiteral<'a>),
    Parenthesized(ParenthesizedExpression<'a>),
    Function(&'a FunctionDecl<'a>),
    Arrow(&'a ArrowFunction<'a>),
    Class(&'a ClassDecl<'a>),
    Call(CallExpression<'a>),
    New(NewExpression<'a>),
    PropertyAccess(PropertyAccessExpression<'a>),
    ElementAccess(ElementAccessExpression<'a>),
    TaggedTemplate(TaggedTemplateExpression<'a>),
    /// `f<T>` not followed by a call.
    Instantiation(InstantiationExpression<'a>),
    NonNull(UnaryExpression<'a>),
    PrefixUnary(OperatorExpression<'a>),
    PostfixUnary(OperatorExpression<'a>),
    Binary(BinaryExpression<'a>),
    Conditional(ConditionalExpression<'a>),
    As(TypeAssertion<'a>),
    Satisfies(TypeAssertion<'a>),
    TypeOf(UnaryExpression<'a>),
    Void(UnaryExpression<'a>),
    Delete(UnaryExpression<'a>),
    Await(UnaryExpression<'a>),
    Yield(YieldExpression<'a>),
    Spread(UnaryExpression<'a>),
    /// A hole in an array literal.
    Omitted(NodeData),
}

/// `` `head${a}middle${b}tail` ``
#[derive(Debug, Clone, Copy)]
pub struct TemplateExpression<'a> {
    pub data: NodeData,
    pub head: &'a str,
    pub spans: NodeList<'a, TemplateSpan<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateSpan<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    /// Cooked text following the placeholder.
    pub literal: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct ArrayLiteral<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, Expression<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ObjectLiteral<'a> {
    pub data: NodeData,
    pub properties: NodeList<'a, ObjectProperty<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub enum ObjectProperty<'a> {
    /// `name: value`
    Assignment {
        data: NodeData,
        name: PropertyName<'a>,
        initializer: &'a Expression<'a>,
    },
    /// `name`, or `name = default` in a destructuring target.
    Shorthand {
        data: NodeData,
        name: Identifier<'a>,
        initializer: Option<&'a Expression<'a>>,
    },
    Spread {
        data: NodeData,
        expression: &'a Expression<'a>,
    },
    /// Methods and accessors.
    Method(MethodMember<'a>),
}

#[derive(Debug, Clone, Copy)]
pub struct ParenthesizedExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy)]
pub enum ArrowBody<'a> {
    Block(&'a Block<'a>),
    Expression(&'a Expression<'a>),
}

#[derive(Debug, Clone, Copy)]
pub struct ArrowFunction<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub parameters: NodeList<'a, Parameter<'a>>,
    pub return_type: Option<&'a TypeNode<'a>>,
    pub body: ArrowBody<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct CallExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot: bool,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    pub arguments: NodeList<'a, Expression<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct NewExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    /// `None` for `new Foo` without parentheses.
    pub arguments: Option<NodeList<'a, Expression<'a>>>,
}

#[derive(Debug, Clone, Copy)]
pub struct PropertyAccessExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot: bool,
    pub name: Identifier<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ElementAccessExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot: bool,
    pub argument: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct TaggedTemplateExpression<'a> {
    pub data: NodeData,
    pub tag: &'a Expression<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    /// A template expression or a no-substitution template literal.
    pub template: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct InstantiationExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
}

/// An expression with a single operand and a kind-specific meaning
/// (`typeof`, `void`, `delete`, `await`, spread, non-null `!`).
#[derive(Debug, Clone, Copy)]
pub struct UnaryExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// `-x`, `!x`, `++x`, `x--`, ...
#[derive(Debug, Clone, Copy)]
pub struct OperatorExpression<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    pub operand: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct BinaryExpression<'a> {
    pub data: NodeData,
    pub left: &'a Expression<'a>,
    pub operator: SyntaxKind,
    pub right: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ConditionalExpression<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub when_true: &'a Expression<'a>,
    pub when_false: &'a Expression<'a>,
}

/// `expr as T` / `expr satisfies T`. `as const` has a `const` type reference.
#[derive(Debug, Clone, Copy)]
pub struct TypeAssertion<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct YieldExpression<'a> {
    pub data: NodeData,
    pub asterisk: bool,
    pub expression: Option<&'a Expression<'a>>,
}
