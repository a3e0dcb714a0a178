//! Declarations, class members, parameters and binding patterns.

use tsfront_ast::node::*;
use tsfront_ast::syntax_kind::SyntaxKind;
use tsfront_ast::types::*;
use tsfront_core::text::TextRange;
use tsfront_diagnostics::{messages, DiagnosticKind};

use super::{ParseResult, Parser};

/// Modifier flag for a modifier keyword.
fn modifier_flag(kind: SyntaxKind) -> Option<ModifierFlags> {
    Some(match kind {
        SyntaxKind::ExportKeyword => ModifierFlags::EXPORT,
        SyntaxKind::DefaultKeyword => ModifierFlags::DEFAULT,
        SyntaxKind::DeclareKeyword => ModifierFlags::AMBIENT,
        SyntaxKind::PublicKeyword => ModifierFlags::PUBLIC,
        SyntaxKind::PrivateKeyword => ModifierFlags::PRIVATE,
        SyntaxKind::ProtectedKeyword => ModifierFlags::PROTECTED,
        SyntaxKind::StaticKeyword => ModifierFlags::STATIC,
        SyntaxKind::OverrideKeyword => ModifierFlags::OVERRIDE,
        SyntaxKind::AbstractKeyword => ModifierFlags::ABSTRACT,
        SyntaxKind::AccessorKeyword => ModifierFlags::ACCESSOR,
        SyntaxKind::ReadonlyKeyword => ModifierFlags::READONLY,
        SyntaxKind::AsyncKeyword => ModifierFlags::ASYNC,
        SyntaxKind::ConstKeyword => ModifierFlags::CONST,
        _ => return None,
    })
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Declaration dispatch
    // ========================================================================

    /// Whether the current token begins a declaration rather than an
    /// expression statement.
    pub(super) fn is_start_of_declaration(&mut self) -> bool {
        self.look_ahead(Self::scan_start_of_declaration)
    }

    fn scan_start_of_declaration(&mut self) -> bool {
        loop {
            match self.token() {
                SyntaxKind::VarKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::ClassKeyword
                | SyntaxKind::EnumKeyword
                | SyntaxKind::InterfaceKeyword => return true,
                SyntaxKind::LetKeyword => return self.is_let_declaration(),
                SyntaxKind::UsingKeyword => {
                    self.next_token();
                    return !self.has_preceding_line_break() && self.is_identifier();
                }
                // `type {` and `type <` are malformed aliases, not expressions.
                SyntaxKind::TypeKeyword => {
                    self.next_token();
                    return !self.has_preceding_line_break()
                        && (self.is_identifier()
                            || matches!(self.token(), SyntaxKind::OpenBraceToken | SyntaxKind::LessThanToken));
                }
                SyntaxKind::AbstractKeyword | SyntaxKind::AsyncKeyword | SyntaxKind::DeclareKeyword => {
                    self.next_token();
                    if self.has_preceding_line_break() {
                        return false;
                    }
                }
                SyntaxKind::ImportKeyword => {
                    self.next_token();
                    return !matches!(self.token(), SyntaxKind::OpenParenToken | SyntaxKind::DotToken);
                }
                SyntaxKind::ExportKeyword => {
                    self.next_token();
                    if matches!(
                        self.token(),
                        SyntaxKind::EqualsToken
                            | SyntaxKind::AsteriskToken
                            | SyntaxKind::OpenBraceToken
                            | SyntaxKind::DefaultKeyword
                            | SyntaxKind::TypeKeyword
                    ) {
                        return true;
                    }
                }
                _ => return false,
            }
        }
    }

    /// `let` followed by a binding starts a declaration; otherwise `let` is
    /// an identifier.
    pub(super) fn is_let_declaration(&mut self) -> bool {
        self.next_token_is(|p| {
            p.is_identifier() || matches!(p.token(), SyntaxKind::OpenBraceToken | SyntaxKind::OpenBracketToken)
        })
    }

    pub(super) fn parse_declaration(&mut self) -> ParseResult<Declaration<'a>> {
        self.with_error_kind(DiagnosticKind::DeclarationSyntaxError, |p| {
            let pos = p.token_pos();
            match p.token() {
                SyntaxKind::ExportKeyword => p.parse_export_declaration(pos),
                SyntaxKind::ImportKeyword => p.parse_import_declaration(pos),
                _ => {
                    let modifiers = p.parse_declaration_modifiers();
                    p.parse_declaration_body(pos, modifiers, false)
                }
            }
        })
    }

    /// `declare`, `abstract` and `async` in front of a declaration keyword.
    fn parse_declaration_modifiers(&mut self) -> ModifierFlags {
        let mut modifiers = ModifierFlags::NONE;
        while matches!(
            self.token(),
            SyntaxKind::DeclareKeyword | SyntaxKind::AbstractKeyword | SyntaxKind::AsyncKeyword
        ) && self.next_token_is(|p| !p.has_preceding_line_break() && p.token().is_identifier_or_keyword())
        {
            if let Some(flag) = modifier_flag(self.token()) {
                modifiers |= flag;
            }
            self.next_token();
        }
        modifiers
    }

    fn parse_declaration_body(
        &mut self,
        pos: u32,
        modifiers: ModifierFlags,
        name_optional: bool,
    ) -> ParseResult<Declaration<'a>> {
        match self.token() {
            SyntaxKind::ConstKeyword if self.next_token_is(|p| p.token() == SyntaxKind::EnumKeyword) => {
                self.next_token();
                let declaration = self.parse_enum_declaration(pos, modifiers | ModifierFlags::CONST, true)?;
                Ok(Declaration::Enum(declaration))
            }
            SyntaxKind::VarKeyword | SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword | SyntaxKind::UsingKeyword => {
                let declaration = self.parse_variable_statement(pos, modifiers)?;
                Ok(Declaration::Variable(declaration))
            }
            SyntaxKind::FunctionKeyword => {
                let declaration =
                    self.parse_function_like(pos, modifiers, name_optional, SyntaxKind::FunctionDeclaration)?;
                Ok(Declaration::Function(declaration))
            }
            SyntaxKind::ClassKeyword => {
                let declaration = self.parse_class_like(pos, modifiers, name_optional, SyntaxKind::ClassDeclaration)?;
                Ok(Declaration::Class(declaration))
            }
            SyntaxKind::InterfaceKeyword => Ok(Declaration::Interface(self.parse_interface_declaration(pos, modifiers)?)),
            SyntaxKind::TypeKeyword => Ok(Declaration::TypeAlias(self.parse_type_alias_declaration(pos, modifiers)?)),
            SyntaxKind::EnumKeyword => Ok(Declaration::Enum(self.parse_enum_declaration(pos, modifiers, false)?)),
            _ => Err(self.unexpected_token_error(&messages::DECLARATION_OR_STATEMENT_EXPECTED)),
        }
    }

    // ========================================================================
    // Classes
    // ========================================================================

    /// A class declaration or class expression.
    pub(super) fn parse_class_like(
        &mut self,
        pos: u32,
        modifiers: ModifierFlags,
        name_optional: bool,
        kind: SyntaxKind,
    ) -> ParseResult<&'a ClassDecl<'a>> {
        self.parse_expected(SyntaxKind::ClassKeyword)?;
        // `class implements I {}` has no name.
        let has_name = self.is_identifier()
            && !(self.token() == SyntaxKind::ImplementsKeyword && self.next_token_is(|p| p.is_identifier()));
        let name = if has_name {
            Some(self.parse_identifier()?)
        } else if name_optional {
            None
        } else {
            return Err(self.error_here(&messages::IDENTIFIER_EXPECTED, &[]));
        };
        let type_parameters = self.parse_type_parameters()?;

        let mut extends = None;
        let mut implements = Vec::new();
        let mut seen_implements = false;
        loop {
            match self.token() {
                SyntaxKind::ExtendsKeyword => {
                    if extends.is_some() {
                        return Err(self.error_here(&messages::_0_CLAUSE_ALREADY_SEEN, &["extends"]));
                    }
                    self.next_token();
                    extends = Some(self.parse_heritage_ref()?);
                    if self.token() == SyntaxKind::CommaToken {
                        return Err(self.error_here(&messages::CLASSES_CAN_ONLY_EXTEND_A_SINGLE_CLASS, &[]));
                    }
                }
                SyntaxKind::ImplementsKeyword => {
                    if seen_implements {
                        return Err(self.error_here(&messages::_0_CLAUSE_ALREADY_SEEN, &["implements"]));
                    }
                    seen_implements = true;
                    self.next_token();
                    implements = self.parse_heritage_list()?;
                }
                _ => break,
            }
        }

        let members = self.parse_class_members()?;
        Ok(self.alloc(ClassDecl {
            data: self.finish(kind, pos),
            modifiers,
            name,
            type_parameters,
            extends,
            implements: self.alloc_slice(implements),
            members,
        }))
    }

    fn parse_heritage_list(&mut self) -> ParseResult<Vec<HeritageRef<'a>>> {
        let mut refs = vec![self.parse_heritage_ref()?];
        while self.parse_optional(SyntaxKind::CommaToken) {
            refs.push(self.parse_heritage_ref()?);
        }
        Ok(refs)
    }

    /// `Name<Args>` in a heritage clause.
    fn parse_heritage_ref(&mut self) -> ParseResult<HeritageRef<'a>> {
        let pos = self.token_pos();
        let expression = self.parse_entity_name()?;
        let type_arguments = if self.token() == SyntaxKind::LessThanToken {
            Some(self.parse_type_arguments()?)
        } else {
            None
        };
        Ok(HeritageRef {
            data: self.finish(SyntaxKind::ExpressionWithTypeArguments, pos),
            expression,
            type_arguments,
        })
    }

    fn parse_class_members(&mut self) -> ParseResult<NodeList<'a, Member<'a>>> {
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut members = Vec::new();
        while !matches!(self.token(), SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken) {
            if self.parse_optional(SyntaxKind::SemicolonToken) {
                continue;
            }
            members.push(self.parse_class_member()?);
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(self.alloc_slice(members))
    }

    /// The token after a modifier keyword continues a member, so the keyword
    /// is a modifier rather than the member's name.
    pub(super) fn can_follow_member_modifier(&self) -> bool {
        !self.has_preceding_line_break()
            && (self.is_property_name_start()
                || matches!(self.token(), SyntaxKind::AsteriskToken | SyntaxKind::DotDotDotToken))
    }

    fn parse_member_modifiers(&mut self) -> ModifierFlags {
        let mut modifiers = ModifierFlags::NONE;
        loop {
            let Some(flag) = modifier_flag(self.token()) else { break };
            if flag.intersects(ModifierFlags::EXPORT | ModifierFlags::DEFAULT | ModifierFlags::CONST)
                || !self.next_token_is(|p| p.can_follow_member_modifier())
            {
                break;
            }
            modifiers |= flag;
            self.next_token();
        }
        modifiers
    }

    /// `get`/`set` followed by a member name.
    pub(super) fn accessor_kind(&mut self) -> Option<MethodKind> {
        let kind = match self.token() {
            SyntaxKind::GetKeyword => MethodKind::Getter,
            SyntaxKind::SetKeyword => MethodKind::Setter,
            _ => return None,
        };
        self.next_token_is(|p| !p.has_preceding_line_break() && p.is_property_name_start())
            .then_some(kind)
    }

    fn parse_class_member(&mut self) -> ParseResult<Member<'a>> {
        let pos = self.token_pos();
        let modifiers = self.parse_member_modifiers();

        if self.token() == SyntaxKind::ConstructorKeyword
            && self.next_token_is(|p| matches!(p.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken))
        {
            let name = PropertyName::Identifier(self.consume_identifier(SyntaxKind::Identifier));
            let method = self.parse_method_rest(pos, MethodKind::Constructor, modifiers, name, false, false)?;
            return Ok(Member::Method(method));
        }
        if let Some(kind) = self.accessor_kind() {
            self.next_token();
            let name = self.parse_property_name()?;
            let method = self.parse_method_rest(pos, kind, modifiers, name, false, false)?;
            return Ok(Member::Method(method));
        }
        if self.token() == SyntaxKind::OpenBracketToken && self.look_ahead(Self::is_index_signature) {
            let signature = self.parse_index_signature(pos, modifiers)?;
            self.parse_semicolon()?;
            return Ok(signature);
        }

        let asterisk = self.parse_optional(SyntaxKind::AsteriskToken);
        if !self.is_property_name_start() {
            return Err(self.error_here(
                &messages::UNEXPECTED_TOKEN_A_CONSTRUCTOR_METHOD_ACCESSOR_OR_PROPERTY_WAS_EXPECTED,
                &[],
            ));
        }
        let name = self.parse_property_name()?;
        let optional = self.parse_optional(SyntaxKind::QuestionToken);
        if asterisk || matches!(self.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken) {
            let method = self.parse_method_rest(pos, MethodKind::Method, modifiers, name, optional, asterisk)?;
            return Ok(Member::Method(method));
        }

        let definite = !optional && self.parse_optional(SyntaxKind::ExclamationToken);
        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            Some(self.parse_type_ref()?)
        } else {
            None
        };
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            Some(self.parse_initializer()?)
        } else {
            None
        };
        self.parse_semicolon()?;
        Ok(Member::Field(FieldMember {
            data: self.finish(SyntaxKind::PropertyDeclaration, pos),
            modifiers,
            name,
            optional,
            definite,
            type_annotation,
            initializer,
        }))
    }

    /// Type parameters, parameters, return type and optional body of a
    /// method, constructor or accessor.
    pub(super) fn parse_method_rest(
        &mut self,
        pos: u32,
        kind: MethodKind,
        modifiers: ModifierFlags,
        name: PropertyName<'a>,
        optional: bool,
        asterisk: bool,
    ) -> ParseResult<MethodMember<'a>> {
        let is_async = modifiers.contains(ModifierFlags::ASYNC);
        let type_parameters = self.parse_type_parameters()?;
        let parameters = self.parse_parameters()?;
        let return_type = self.parse_return_type()?;
        let body = if self.token() == SyntaxKind::OpenBraceToken {
            Some(self.parse_function_body(asterisk, is_async)?)
        } else {
            self.parse_semicolon()?;
            None
        };
        let syntax_kind = match kind {
            MethodKind::Method => SyntaxKind::MethodDeclaration,
            MethodKind::Constructor => SyntaxKind::Constructor,
            MethodKind::Getter => SyntaxKind::GetAccessor,
            MethodKind::Setter => SyntaxKind::SetAccessor,
        };
        Ok(MethodMember {
            data: self.finish(syntax_kind, pos),
            kind,
            modifiers,
            name,
            optional,
            asterisk,
            type_parameters,
            parameters,
            return_type,
            body,
        })
    }

    // ========================================================================
    // Interfaces, type aliases and enums
    // ========================================================================

    fn parse_interface_declaration(&mut self, pos: u32, modifiers: ModifierFlags) -> ParseResult<&'a InterfaceDecl<'a>> {
        self.parse_expected(SyntaxKind::InterfaceKeyword)?;
        let name = self.parse_identifier()?;
        let type_parameters = self.parse_type_parameters()?;
        let extends = if self.parse_optional(SyntaxKind::ExtendsKeyword) {
            self.parse_heritage_list()?
        } else {
            Vec::new()
        };
        let members = self.parse_type_members()?;
        let data = self.finish(SyntaxKind::InterfaceDeclaration, pos);
        Ok(self.alloc(InterfaceDecl {
            data,
            modifiers,
            name,
            type_parameters,
            extends: self.alloc_slice(extends),
            members,
            parts: self.alloc_slice(vec![TextRange::new(data.range.pos, data.range.end)]),
        }))
    }

    fn parse_type_alias_declaration(&mut self, pos: u32, modifiers: ModifierFlags) -> ParseResult<&'a TypeAliasDecl<'a>> {
        self.parse_expected(SyntaxKind::TypeKeyword)?;
        let name = self.parse_identifier()?;
        let type_parameters = self.parse_type_parameters()?;
        self.parse_expected(SyntaxKind::EqualsToken)?;
        let type_node = self.parse_type_ref()?;
        self.parse_semicolon()?;
        Ok(self.alloc(TypeAliasDecl {
            data: self.finish(SyntaxKind::TypeAliasDeclaration, pos),
            modifiers,
            name,
            type_parameters,
            type_node,
        }))
    }

    fn parse_enum_declaration(
        &mut self,
        pos: u32,
        modifiers: ModifierFlags,
        is_const: bool,
    ) -> ParseResult<&'a EnumDecl<'a>> {
        self.parse_expected(SyntaxKind::EnumKeyword)?;
        let name = self.parse_identifier()?;
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut members = Vec::new();
        while self.token() != SyntaxKind::CloseBraceToken {
            if !self.is_property_name_start() || self.token() == SyntaxKind::PrivateIdentifier {
                return Err(self.error_here(&messages::ENUM_MEMBER_EXPECTED, &[]));
            }
            let member_pos = self.token_pos();
            let member_name = self.parse_property_name()?;
            let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
                Some(self.parse_initializer()?)
            } else {
                None
            };
            members.push(EnumMember {
                data: self.finish(SyntaxKind::EnumMember, member_pos),
                name: member_name,
                initializer,
            });
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(self.alloc(EnumDecl {
            data: self.finish(SyntaxKind::EnumDeclaration, pos),
            modifiers,
            is_const,
            name,
            members: self.alloc_slice(members),
        }))
    }

    // ========================================================================
    // Functions
    // ========================================================================

    /// A function declaration or function expression, starting at `function`.
    pub(super) fn parse_function_like(
        &mut self,
        pos: u32,
        modifiers: ModifierFlags,
        name_optional: bool,
        kind: SyntaxKind,
    ) -> ParseResult<&'a FunctionDecl<'a>> {
        self.parse_expected(SyntaxKind::FunctionKeyword)?;
        let asterisk = self.parse_optional(SyntaxKind::AsteriskToken);
        let name = if name_optional && !self.is_identifier() {
            None
        } else {
            Some(self.parse_identifier()?)
        };
        let is_async = modifiers.contains(ModifierFlags::ASYNC);
        let type_parameters = self.parse_type_parameters()?;
        let parameters = self.with_context(
            function_context(asterisk, is_async),
            NodeFlags::YIELD_CONTEXT | NodeFlags::AWAIT_CONTEXT,
            Self::parse_parameters,
        )?;
        let return_type = self.parse_return_type()?;
        let body = if self.token() == SyntaxKind::OpenBraceToken {
            Some(self.parse_function_body(asterisk, is_async)?)
        } else {
            self.parse_semicolon()?;
            None
        };
        Ok(self.alloc(FunctionDecl {
            data: self.finish(kind, pos),
            modifiers,
            asterisk,
            name,
            type_parameters,
            parameters,
            return_type,
            body,
        }))
    }

    /// A `{ ... }` body with `yield` and `await` set for the function kind.
    pub(super) fn parse_function_body(&mut self, is_generator: bool, is_async: bool) -> ParseResult<&'a Block<'a>> {
        self.with_context(
            function_context(is_generator, is_async),
            NodeFlags::YIELD_CONTEXT | NodeFlags::AWAIT_CONTEXT | NodeFlags::DISALLOW_IN_CONTEXT,
            Self::parse_block,
        )
    }

    // ========================================================================
    // Variables
    // ========================================================================

    /// A variable statement including its terminating semicolon.
    pub(super) fn parse_variable_statement(
        &mut self,
        pos: u32,
        modifiers: ModifierFlags,
    ) -> ParseResult<&'a VariableDecl<'a>> {
        let mut declaration = self.parse_variable_declaration_list(pos, modifiers)?;
        self.parse_semicolon()?;
        declaration.data = self.finish(SyntaxKind::VariableStatement, pos).with_flags(declaration.data.flags);
        Ok(self.alloc(declaration))
    }

    /// `var`/`let`/`const`/`using` and its declarators, without a semicolon.
    pub(super) fn parse_variable_declaration_list(
        &mut self,
        pos: u32,
        modifiers: ModifierFlags,
    ) -> ParseResult<VariableDecl<'a>> {
        let (kind, flags) = match self.token() {
            SyntaxKind::LetKeyword => (VariableKind::Let, NodeFlags::LET),
            SyntaxKind::ConstKeyword => (VariableKind::Const, NodeFlags::CONST),
            SyntaxKind::UsingKeyword => (VariableKind::Using, NodeFlags::USING),
            _ => (VariableKind::Var, NodeFlags::NONE),
        };
        self.next_token();
        if !self.is_binding_start() {
            return Err(self.error_here(&messages::VARIABLE_DECLARATION_LIST_CANNOT_BE_EMPTY, &[]));
        }
        let mut declarations = vec![self.parse_variable_declarator()?];
        while self.parse_optional(SyntaxKind::CommaToken) {
            declarations.push(self.parse_variable_declarator()?);
        }
        Ok(VariableDecl {
            data: self.finish(SyntaxKind::VariableStatement, pos).with_flags(flags),
            modifiers,
            kind,
            declarations: self.alloc_slice(declarations),
        })
    }

    fn parse_variable_declarator(&mut self) -> ParseResult<VariableDeclarator<'a>> {
        let pos = self.token_pos();
        let name = self.parse_binding_name()?;
        let definite = matches!(name, BindingName::Identifier(_))
            && !self.has_preceding_line_break()
            && self.parse_optional(SyntaxKind::ExclamationToken);
        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            Some(self.parse_type_ref()?)
        } else {
            None
        };
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            Some(self.parse_assignment_expression_ref()?)
        } else {
            None
        };
        Ok(VariableDeclarator {
            data: self.finish(SyntaxKind::VariableDeclaration, pos),
            name,
            definite,
            type_annotation,
            initializer,
        })
    }

    // ========================================================================
    // Imports and exports
    // ========================================================================

    fn parse_import_declaration(&mut self, pos: u32) -> ParseResult<Declaration<'a>> {
        self.parse_expected(SyntaxKind::ImportKeyword)?;
        if self.token() == SyntaxKind::StringLiteral {
            let module_specifier = self.parse_module_specifier()?;
            self.parse_semicolon()?;
            return Ok(Declaration::Import(self.alloc(ImportDecl {
                data: self.finish(SyntaxKind::ImportDeclaration, pos),
                is_type_only: false,
                default_binding: None,
                bindings: None,
                module_specifier,
            })));
        }

        let is_type_only = self.token() == SyntaxKind::TypeKeyword
            && self.next_token_is(|p| {
                matches!(p.token(), SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken)
                    || (p.is_identifier() && p.token() != SyntaxKind::FromKeyword)
            });
        if is_type_only {
            self.next_token();
        }

        let has_default = self.is_identifier()
            && !(self.token() == SyntaxKind::FromKeyword
                && self.next_token_is(|p| p.token() == SyntaxKind::StringLiteral));
        let default_binding = if has_default {
            Some(self.parse_identifier()?)
        } else {
            None
        };

        let mut bindings = None;
        if default_binding.is_none() || self.parse_optional(SyntaxKind::CommaToken) {
            bindings = Some(match self.token() {
                SyntaxKind::AsteriskToken => {
                    self.next_token();
                    self.parse_expected(SyntaxKind::AsKeyword)?;
                    ImportBindings::Namespace(self.parse_identifier()?)
                }
                SyntaxKind::OpenBraceToken => {
                    let specifiers = self.parse_specifier_list()?;
                    let specifiers = specifiers
                        .into_iter()
                        .map(|s| ImportSpecifier {
                            data: NodeData::new(SyntaxKind::ImportSpecifier, s.data.range.pos, s.data.range.end),
                            is_type_only: s.is_type_only,
                            property_name: s.property_name,
                            name: s.name,
                        })
                        .collect();
                    ImportBindings::Named(self.alloc_slice(specifiers))
                }
                _ => return Err(self.expected_error(SyntaxKind::OpenBraceToken)),
            });
        }

        self.parse_expected(SyntaxKind::FromKeyword)?;
        let module_specifier = self.parse_module_specifier()?;
        self.parse_semicolon()?;
        Ok(Declaration::Import(self.alloc(ImportDecl {
            data: self.finish(SyntaxKind::ImportDeclaration, pos),
            is_type_only,
            default_binding,
            bindings,
            module_specifier,
        })))
    }

    /// `{ a, b as c, type d }`, shared by imports and exports.
    fn parse_specifier_list(&mut self) -> ParseResult<Vec<ExportSpecifier<'a>>> {
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut specifiers = Vec::new();
        while self.token() != SyntaxKind::CloseBraceToken {
            specifiers.push(self.parse_specifier()?);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(specifiers)
    }

    fn parse_specifier(&mut self) -> ParseResult<ExportSpecifier<'a>> {
        let pos = self.token_pos();
        let is_type_only = self.token() == SyntaxKind::TypeKeyword
            && self.next_token_is(|p| p.token().is_identifier_or_keyword() && p.token() != SyntaxKind::AsKeyword);
        if is_type_only {
            self.next_token();
        }
        let first = self.parse_identifier_name()?;
        let (property_name, name) = if self.parse_optional(SyntaxKind::AsKeyword) {
            (Some(first), self.parse_identifier_name()?)
        } else {
            (None, first)
        };
        Ok(ExportSpecifier {
            data: self.finish(SyntaxKind::ExportSpecifier, pos),
            is_type_only,
            property_name,
            name,
        })
    }

    fn parse_module_specifier(&mut self) -> ParseResult<LiteralNode<'a>> {
        if self.token() != SyntaxKind::StringLiteral {
            return Err(self.error_here(&messages::STRING_LITERAL_EXPECTED, &[]));
        }
        let pos = self.token_pos();
        let text = self.token_text();
        let flags = self.literal_flags();
        self.next_token();
        Ok(LiteralNode {
            data: self.finish(SyntaxKind::StringLiteral, pos).with_flags(flags),
            text,
        })
    }

    fn parse_export_declaration(&mut self, pos: u32) -> ParseResult<Declaration<'a>> {
        self.parse_expected(SyntaxKind::ExportKeyword)?;

        if self.parse_optional(SyntaxKind::EqualsToken) {
            let expression = self.parse_assignment_expression_ref()?;
            self.parse_semicolon()?;
            return Ok(self.export(pos, SyntaxKind::ExportAssignment, false, ExportKind::Assignment(expression)));
        }

        let is_type_only = self.token() == SyntaxKind::TypeKeyword
            && self.next_token_is(|p| matches!(p.token(), SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken));
        if is_type_only {
            self.next_token();
        }

        let kind = match self.token() {
            SyntaxKind::AsteriskToken => {
                self.next_token();
                let name = if self.parse_optional(SyntaxKind::AsKeyword) {
                    Some(self.parse_identifier_name()?)
                } else {
                    None
                };
                self.parse_expected(SyntaxKind::FromKeyword)?;
                let module_specifier = self.parse_module_specifier()?;
                self.parse_semicolon()?;
                match name {
                    Some(name) => ExportKind::AllAsNamespace { name, module_specifier },
                    None => ExportKind::All { module_specifier },
                }
            }
            SyntaxKind::OpenBraceToken => {
                let specifiers = self.parse_specifier_list()?;
                let module_specifier = if self.parse_optional(SyntaxKind::FromKeyword) {
                    Some(self.parse_module_specifier()?)
                } else {
                    None
                };
                self.parse_semicolon()?;
                ExportKind::Named {
                    specifiers: self.alloc_slice(specifiers),
                    module_specifier,
                }
            }
            SyntaxKind::DefaultKeyword => {
                self.next_token();
                return self.parse_export_default(pos);
            }
            _ => {
                let inner_pos = self.token_pos();
                let modifiers = ModifierFlags::EXPORT | self.parse_declaration_modifiers();
                let declaration = self.parse_declaration_body(inner_pos, modifiers, false)?;
                ExportKind::Declaration {
                    declaration,
                    is_default: false,
                }
            }
        };
        Ok(self.export(pos, SyntaxKind::ExportDeclaration, is_type_only, kind))
    }

    fn parse_export_default(&mut self, pos: u32) -> ParseResult<Declaration<'a>> {
        let inner_pos = self.token_pos();
        let is_declaration = match self.token() {
            SyntaxKind::ClassKeyword | SyntaxKind::FunctionKeyword => true,
            SyntaxKind::InterfaceKeyword => self.next_token_is(|p| p.is_identifier()),
            SyntaxKind::AbstractKeyword => self.next_token_is(|p| p.token() == SyntaxKind::ClassKeyword),
            SyntaxKind::AsyncKeyword => self.next_token_is(|p| {
                p.token() == SyntaxKind::FunctionKeyword && !p.has_preceding_line_break()
            }),
            _ => false,
        };
        let kind = if is_declaration {
            let modifiers = ModifierFlags::EXPORT | ModifierFlags::DEFAULT | self.parse_declaration_modifiers();
            let declaration = self.parse_declaration_body(inner_pos, modifiers, true)?;
            ExportKind::Declaration {
                declaration,
                is_default: true,
            }
        } else {
            let expression = self.with_context(
                NodeFlags::NONE,
                NodeFlags::DISALLOW_IN_CONTEXT,
                Self::parse_assignment_expression_ref,
            )?;
            self.parse_semicolon()?;
            ExportKind::DefaultExpression(expression)
        };
        Ok(self.export(pos, SyntaxKind::ExportDeclaration, false, kind))
    }

    fn export(&self, pos: u32, syntax_kind: SyntaxKind, is_type_only: bool, kind: ExportKind<'a>) -> Declaration<'a> {
        Declaration::Export(self.alloc(ExportDecl {
            data: self.finish(syntax_kind, pos),
            is_type_only,
            kind,
        }))
    }

    // ========================================================================
    // Property names
    // ========================================================================

    pub(super) fn is_property_name_start(&self) -> bool {
        let token = self.token();
        token.is_identifier_or_keyword()
            || matches!(
                token,
                SyntaxKind::StringLiteral
                    | SyntaxKind::NumericLiteral
                    | SyntaxKind::BigIntLiteral
                    | SyntaxKind::PrivateIdentifier
                    | SyntaxKind::OpenBracketToken
            )
    }

    pub(super) fn parse_property_name(&mut self) -> ParseResult<PropertyName<'a>> {
        let pos = self.token_pos();
        match self.token() {
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => {
                let kind = self.token();
                let text = self.token_text();
                let flags = self.literal_flags();
                self.next_token();
                let literal = LiteralNode {
                    data: self.finish(kind, pos).with_flags(flags),
                    text,
                };
                Ok(if kind == SyntaxKind::StringLiteral {
                    PropertyName::StringLiteral(literal)
                } else {
                    PropertyName::NumericLiteral(literal)
                })
            }
            SyntaxKind::PrivateIdentifier => Ok(PropertyName::PrivateIdentifier(
                self.consume_identifier(SyntaxKind::PrivateIdentifier),
            )),
            SyntaxKind::OpenBracketToken => {
                self.next_token();
                let expression = self.with_context(
                    NodeFlags::NONE,
                    NodeFlags::DISALLOW_IN_CONTEXT,
                    Self::parse_assignment_expression_ref,
                )?;
                self.parse_expected(SyntaxKind::CloseBracketToken)?;
                Ok(PropertyName::Computed(self.alloc(ComputedPropertyName {
                    data: self.finish(SyntaxKind::ComputedPropertyName, pos),
                    expression,
                })))
            }
            _ => Ok(PropertyName::Identifier(self.parse_identifier_name()?)),
        }
    }

    // ========================================================================
    // Parameters and binding patterns
    // ========================================================================

    pub(super) fn parse_parameters(&mut self) -> ParseResult<NodeList<'a, Parameter<'a>>> {
        self.parse_parameter_list(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken)
    }

    pub(super) fn parse_parameter_list(
        &mut self,
        open: SyntaxKind,
        close: SyntaxKind,
    ) -> ParseResult<NodeList<'a, Parameter<'a>>> {
        self.parse_expected(open)?;
        let mut parameters = Vec::new();
        while self.token() != close {
            parameters.push(self.parse_parameter()?);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(close)?;
        Ok(self.alloc_slice(parameters))
    }

    fn parse_parameter(&mut self) -> ParseResult<Parameter<'a>> {
        let pos = self.token_pos();
        let mut modifiers = ModifierFlags::NONE;
        while let Some(flag) = modifier_flag(self.token()) {
            if !ModifierFlags::PARAMETER_PROPERTY_MODIFIER.contains(flag)
                || !self.next_token_is(|p| p.is_binding_start() || p.token().is_modifier_kind())
            {
                break;
            }
            modifiers |= flag;
            self.next_token();
        }
        let dot_dot_dot = self.parse_optional(SyntaxKind::DotDotDotToken);
        let name = if self.token() == SyntaxKind::ThisKeyword {
            BindingName::Identifier(self.consume_identifier(SyntaxKind::ThisKeyword))
        } else {
            self.parse_binding_name()?
        };
        let question = self.parse_optional(SyntaxKind::QuestionToken);
        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            Some(self.parse_type_ref()?)
        } else {
            None
        };
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            Some(self.parse_initializer()?)
        } else {
            None
        };
        Ok(Parameter {
            data: self.finish(SyntaxKind::Parameter, pos),
            modifiers,
            dot_dot_dot,
            name,
            question,
            type_annotation,
            initializer,
        })
    }

    fn is_binding_start(&self) -> bool {
        self.is_identifier()
            || matches!(self.token(), SyntaxKind::OpenBraceToken | SyntaxKind::OpenBracketToken)
    }

    pub(super) fn parse_binding_name(&mut self) -> ParseResult<BindingName<'a>> {
        match self.token() {
            SyntaxKind::OpenBraceToken => self.parse_object_binding_pattern(),
            SyntaxKind::OpenBracketToken => self.parse_array_binding_pattern(),
            _ => Ok(BindingName::Identifier(self.parse_identifier()?)),
        }
    }

    fn parse_object_binding_pattern(&mut self) -> ParseResult<BindingName<'a>> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut elements = Vec::new();
        while self.token() != SyntaxKind::CloseBraceToken {
            elements.push(self.parse_object_binding_element()?);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(BindingName::Object(self.alloc(ObjectBindingPattern {
            data: self.finish(SyntaxKind::ObjectBindingPattern, pos),
            elements: self.alloc_slice(elements),
        })))
    }

    fn parse_object_binding_element(&mut self) -> ParseResult<BindingElement<'a>> {
        let pos = self.token_pos();
        let dot_dot_dot = self.parse_optional(SyntaxKind::DotDotDotToken);
        let (property_name, name) = if dot_dot_dot {
            (None, BindingName::Identifier(self.parse_identifier()?))
        } else {
            let property_name = self.parse_property_name()?;
            if self.parse_optional(SyntaxKind::ColonToken) {
                (Some(property_name), self.parse_binding_name()?)
            } else {
                match property_name {
                    PropertyName::Identifier(id) => (None, BindingName::Identifier(id)),
                    _ => return Err(self.expected_error(SyntaxKind::ColonToken)),
                }
            }
        };
        let initializer = self.parse_binding_initializer()?;
        Ok(BindingElement {
            data: self.finish(SyntaxKind::BindingElement, pos),
            dot_dot_dot,
            property_name,
            name,
            initializer,
        })
    }

    fn parse_array_binding_pattern(&mut self) -> ParseResult<BindingName<'a>> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        let mut elements = Vec::new();
        while self.token() != SyntaxKind::CloseBracketToken {
            if self.parse_optional(SyntaxKind::CommaToken) {
                elements.push(None);
                continue;
            }
            let element_pos = self.token_pos();
            let dot_dot_dot = self.parse_optional(SyntaxKind::DotDotDotToken);
            let name = self.parse_binding_name()?;
            let initializer = self.parse_binding_initializer()?;
            elements.push(Some(BindingElement {
                data: self.finish(SyntaxKind::BindingElement, element_pos),
                dot_dot_dot,
                property_name: None,
                name,
                initializer,
            }));
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        Ok(BindingName::Array(self.alloc(ArrayBindingPattern {
            data: self.finish(SyntaxKind::ArrayBindingPattern, pos),
            elements: self.alloc_slice(elements),
        })))
    }

    fn parse_binding_initializer(&mut self) -> ParseResult<Option<&'a Expression<'a>>> {
        if self.parse_optional(SyntaxKind::EqualsToken) {
            Ok(Some(self.parse_initializer()?))
        } else {
            Ok(None)
        }
    }

    /// An initializer expression, with `in` allowed.
    pub(super) fn parse_initializer(&mut self) -> ParseResult<&'a Expression<'a>> {
        self.with_context(
            NodeFlags::NONE,
            NodeFlags::DISALLOW_IN_CONTEXT,
            Self::parse_assignment_expression_ref,
        )
    }
}

/// Context flags inside the parameters and body of a function.
pub(super) fn function_context(is_generator: bool, is_async: bool) -> NodeFlags {
    let mut flags = NodeFlags::NONE;
    if is_generator {
        flags |= NodeFlags::YIELD_CONTEXT;
    }
    if is_async {
        flags |= NodeFlags::AWAIT_CONTEXT;
    }
    flags
}
