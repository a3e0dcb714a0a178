//! Type expressions.
//!
//! Loosest first: function and constructor types, conditional types, union,
//! intersection, type operators, postfix `T[]` / `T[K]`, primary types.

use tsfront_ast::node::*;
use tsfront_ast::syntax_kind::SyntaxKind;
use tsfront_ast::types::*;
use tsfront_diagnostics::{messages, DiagnosticKind};

use super::{ParseResult, Parser};

impl<'a> Parser<'a> {
    pub(super) fn parse_type(&mut self) -> ParseResult<TypeNode<'a>> {
        self.with_error_kind(DiagnosticKind::TypeSyntaxError, |p| {
            p.with_depth_guard(&messages::TYPE_IS_TOO_DEEPLY_NESTED, Self::parse_type_worker)
        })
    }

    pub(super) fn parse_type_ref(&mut self) -> ParseResult<&'a TypeNode<'a>> {
        let node = self.parse_type()?;
        Ok(self.alloc(node))
    }

    /// A type with conditional types allowed regardless of the outer context.
    fn parse_nested_type(&mut self) -> ParseResult<&'a TypeNode<'a>> {
        self.with_context(
            NodeFlags::NONE,
            NodeFlags::DISALLOW_CONDITIONAL_TYPES_CONTEXT,
            Self::parse_type_ref,
        )
    }

    fn parse_type_worker(&mut self) -> ParseResult<TypeNode<'a>> {
        if self.is_start_of_function_or_constructor_type() {
            return self.parse_function_or_constructor_type();
        }
        let pos = self.token_pos();
        let check_type = self.parse_union_type_or_higher()?;
        if self.in_context(NodeFlags::DISALLOW_CONDITIONAL_TYPES_CONTEXT)
            || self.has_preceding_line_break()
            || self.token() != SyntaxKind::ExtendsKeyword
        {
            return Ok(check_type);
        }
        self.next_token();

        self.infer_scopes.push(Vec::new());
        let extends_type = self.with_context(
            NodeFlags::DISALLOW_CONDITIONAL_TYPES_CONTEXT | NodeFlags::CONDITIONAL_EXTENDS_CONTEXT,
            NodeFlags::NONE,
            Self::parse_type_ref,
        );
        let infer_names = self.infer_scopes.pop().unwrap_or_default();
        let extends_type = extends_type?;

        self.parse_expected(SyntaxKind::QuestionToken)?;
        let true_type = self.parse_nested_type()?;
        self.parse_expected(SyntaxKind::ColonToken)?;
        let false_type = self.parse_nested_type()?;
        Ok(TypeNode::Conditional(ConditionalType {
            data: self.finish(SyntaxKind::ConditionalType, pos),
            check_type: self.alloc(check_type),
            extends_type,
            true_type,
            false_type,
            infer_names: self.alloc_slice(infer_names),
        }))
    }

    // ========================================================================
    // Function and constructor types
    // ========================================================================

    fn is_start_of_function_or_constructor_type(&mut self) -> bool {
        match self.token() {
            SyntaxKind::LessThanToken | SyntaxKind::NewKeyword => true,
            SyntaxKind::OpenParenToken => self.look_ahead(Self::is_unambiguously_start_of_function_type),
            SyntaxKind::AbstractKeyword => self.next_token_is(|p| p.token() == SyntaxKind::NewKeyword),
            _ => false,
        }
    }

    fn is_unambiguously_start_of_function_type(&mut self) -> bool {
        self.next_token();
        if matches!(self.token(), SyntaxKind::CloseParenToken | SyntaxKind::DotDotDotToken) {
            return true;
        }
        if self.skip_parameter_start() {
            if matches!(
                self.token(),
                SyntaxKind::ColonToken | SyntaxKind::CommaToken | SyntaxKind::QuestionToken | SyntaxKind::EqualsToken
            ) {
                return true;
            }
            if self.token() == SyntaxKind::CloseParenToken {
                self.next_token();
                return self.token() == SyntaxKind::EqualsGreaterThanToken;
            }
        }
        false
    }

    fn skip_parameter_start(&mut self) -> bool {
        while self.token().is_modifier_kind() {
            self.next_token();
        }
        if self.is_identifier() || self.token() == SyntaxKind::ThisKeyword {
            self.next_token();
            return true;
        }
        if matches!(self.token(), SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken) {
            return self.parse_binding_name().is_ok();
        }
        false
    }

    fn parse_function_or_constructor_type(&mut self) -> ParseResult<TypeNode<'a>> {
        let pos = self.token_pos();
        let is_abstract = self.parse_optional(SyntaxKind::AbstractKeyword);
        let is_constructor = self.parse_optional(SyntaxKind::NewKeyword);
        let type_parameters = self.parse_type_parameters()?;
        let parameters = self.parse_parameters()?;
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken)?;
        let return_type = self.parse_type_or_type_predicate()?;
        let kind = if is_constructor {
            SyntaxKind::ConstructorType
        } else {
            SyntaxKind::FunctionType
        };
        Ok(TypeNode::Function(FunctionType {
            data: self.finish(kind, pos),
            is_constructor,
            is_abstract,
            type_parameters,
            parameters,
            return_type: self.alloc(return_type),
        }))
    }

    // ========================================================================
    // Union, intersection and operators
    // ========================================================================

    fn parse_union_type_or_higher(&mut self) -> ParseResult<TypeNode<'a>> {
        self.parse_union_or_intersection(SyntaxKind::BarToken, Self::parse_intersection_type_or_higher)
    }

    fn parse_intersection_type_or_higher(&mut self) -> ParseResult<TypeNode<'a>> {
        self.parse_union_or_intersection(SyntaxKind::AmpersandToken, Self::parse_type_operator_or_higher)
    }

    fn parse_union_or_intersection(
        &mut self,
        operator: SyntaxKind,
        parse_operand: fn(&mut Self) -> ParseResult<TypeNode<'a>>,
    ) -> ParseResult<TypeNode<'a>> {
        let pos = self.token_pos();
        let has_leading_operator = self.parse_optional(operator);
        let first = self.parse_constituent(has_leading_operator, parse_operand)?;
        if self.token() != operator {
            return Ok(first);
        }
        let mut types = vec![first];
        while self.parse_optional(operator) {
            types.push(self.parse_constituent(true, parse_operand)?);
        }
        let types = self.alloc_slice(types);
        Ok(if operator == SyntaxKind::BarToken {
            TypeNode::Union(UnionType {
                data: self.finish(SyntaxKind::UnionType, pos),
                types,
            })
        } else {
            TypeNode::Intersection(IntersectionType {
                data: self.finish(SyntaxKind::IntersectionType, pos),
                types,
            })
        })
    }

    /// A constituent after `|` or `&` may itself be a function type.
    fn parse_constituent(
        &mut self,
        after_operator: bool,
        parse_operand: fn(&mut Self) -> ParseResult<TypeNode<'a>>,
    ) -> ParseResult<TypeNode<'a>> {
        if after_operator && self.is_start_of_function_or_constructor_type() {
            self.parse_function_or_constructor_type()
        } else {
            parse_operand(self)
        }
    }

    fn parse_type_operator_or_higher(&mut self) -> ParseResult<TypeNode<'a>> {
        let operator = match self.token() {
            SyntaxKind::KeyOfKeyword => TypeOperatorKind::Keyof,
            SyntaxKind::UniqueKeyword => TypeOperatorKind::Unique,
            SyntaxKind::ReadonlyKeyword => TypeOperatorKind::Readonly,
            SyntaxKind::InferKeyword => return self.parse_infer_type(),
            _ => {
                return self.with_context(
                    NodeFlags::NONE,
                    NodeFlags::DISALLOW_CONDITIONAL_TYPES_CONTEXT,
                    Self::parse_postfix_type_or_higher,
                )
            }
        };
        self.with_depth_guard(&messages::TYPE_IS_TOO_DEEPLY_NESTED, |p| {
            let pos = p.token_pos();
            p.next_token();
            let type_node = p.parse_type_operator_or_higher()?;
            Ok(TypeNode::TypeOperator(TypeOperatorType {
                data: p.finish(SyntaxKind::TypeOperator, pos),
                operator,
                type_node: p.alloc(type_node),
            }))
        })
    }

    fn parse_infer_type(&mut self) -> ParseResult<TypeNode<'a>> {
        if !self.in_context(NodeFlags::CONDITIONAL_EXTENDS_CONTEXT) {
            return Err(self.error_here(
                &messages::INFER_DECLARATIONS_ARE_ONLY_PERMITTED_IN_THE_EXTENDS_CLAUSE_OF_A_CONDITIONAL_TYPE,
                &[],
            ));
        }
        let pos = self.token_pos();
        self.next_token();
        let name = self.parse_identifier()?;
        let constraint = self.try_parse_infer_constraint();
        if let Some(scope) = self.infer_scopes.last_mut() {
            scope.push(name.text);
        }
        Ok(TypeNode::Infer(InferType {
            data: self.finish(SyntaxKind::InferType, pos),
            name,
            constraint,
        }))
    }

    /// `infer U extends C`, unless the `extends` belongs to an enclosing
    /// conditional type.
    fn try_parse_infer_constraint(&mut self) -> Option<&'a TypeNode<'a>> {
        if self.token() != SyntaxKind::ExtendsKeyword {
            return None;
        }
        self.speculate(|p| {
            p.next_token();
            let constraint = p
                .with_context(
                    NodeFlags::DISALLOW_CONDITIONAL_TYPES_CONTEXT,
                    NodeFlags::NONE,
                    Self::parse_type_ref,
                )
                .ok()?;
            if p.in_context(NodeFlags::DISALLOW_CONDITIONAL_TYPES_CONTEXT) || p.token() != SyntaxKind::QuestionToken {
                Some(constraint)
            } else {
                None
            }
        })
    }

    fn parse_postfix_type_or_higher(&mut self) -> ParseResult<TypeNode<'a>> {
        let pos = self.token_pos();
        let mut type_node = self.parse_non_array_type()?;
        while !self.has_preceding_line_break() && self.token() == SyntaxKind::OpenBracketToken {
            self.next_token();
            if self.parse_optional(SyntaxKind::CloseBracketToken) {
                type_node = TypeNode::Array(ArrayType {
                    data: self.finish(SyntaxKind::ArrayType, pos),
                    element_type: self.alloc(type_node),
                });
            } else {
                let index_type = self.parse_type_ref()?;
                self.parse_expected(SyntaxKind::CloseBracketToken)?;
                type_node = TypeNode::IndexedAccess(IndexedAccessType {
                    data: self.finish(SyntaxKind::IndexedAccessType, pos),
                    object_type: self.alloc(type_node),
                    index_type,
                });
            }
        }
        Ok(type_node)
    }

    // ========================================================================
    // Primary types
    // ========================================================================

    fn parse_non_array_type(&mut self) -> ParseResult<TypeNode<'a>> {
        let pos = self.token_pos();
        match self.token() {
            kind if kind.is_type_keyword() => {
                if self.next_token_is(|p| p.token() == SyntaxKind::DotToken) {
                    return self.parse_type_reference();
                }
                self.next_token();
                Ok(TypeNode::Keyword(KeywordType {
                    data: self.finish(kind, pos),
                }))
            }
            SyntaxKind::ThisKeyword => {
                self.next_token();
                Ok(TypeNode::Keyword(KeywordType {
                    data: self.finish(SyntaxKind::ThisKeyword, pos),
                }))
            }
            SyntaxKind::TypeOfKeyword => self.parse_type_query(),
            SyntaxKind::OpenBraceToken => {
                if self.look_ahead(Self::is_start_of_mapped_type) {
                    self.parse_mapped_type()
                } else {
                    let members = self.parse_type_members()?;
                    Ok(TypeNode::TypeLiteral(TypeLiteral {
                        data: self.finish(SyntaxKind::TypeLiteral, pos),
                        members,
                    }))
                }
            }
            SyntaxKind::OpenBracketToken => self.parse_tuple_type(),
            SyntaxKind::OpenParenToken => {
                self.next_token();
                let type_node = self.parse_nested_type()?;
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                Ok(TypeNode::Parenthesized(ParenthesizedType {
                    data: self.finish(SyntaxKind::ParenthesizedType, pos),
                    type_node,
                }))
            }
            SyntaxKind::StringLiteral => {
                let value = LiteralValue::String(self.token_text());
                self.parse_literal_type(pos, value)
            }
            SyntaxKind::NumericLiteral => {
                let value = LiteralValue::Number(self.token_text());
                self.parse_literal_type(pos, value)
            }
            SyntaxKind::BigIntLiteral => {
                let value = LiteralValue::BigInt(self.token_text());
                self.parse_literal_type(pos, value)
            }
            SyntaxKind::TrueKeyword => self.parse_literal_type(pos, LiteralValue::Boolean(true)),
            SyntaxKind::FalseKeyword => self.parse_literal_type(pos, LiteralValue::Boolean(false)),
            SyntaxKind::MinusToken
                if self.next_token_is(|p| {
                    matches!(p.token(), SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral)
                }) =>
            {
                self.next_token();
                let text: &'a str = self.arena.alloc_str(&format!("-{}", self.token_text()));
                let value = if self.token() == SyntaxKind::BigIntLiteral {
                    LiteralValue::BigInt(text)
                } else {
                    LiteralValue::Number(text)
                };
                self.parse_literal_type(pos, value)
            }
            SyntaxKind::NoSubstitutionTemplateLiteral => {
                let text = self.token_text();
                self.next_token();
                let segments = if text.is_empty() {
                    Vec::new()
                } else {
                    vec![TemplateSegment::Literal(text)]
                };
                Ok(TypeNode::TemplateLiteral(TemplateLiteralType {
                    data: self.finish(SyntaxKind::TemplateLiteralType, pos),
                    segments: self.alloc_slice(segments),
                }))
            }
            SyntaxKind::TemplateHead => self.parse_template_literal_type(),
            _ if self.is_identifier() => self.parse_type_reference(),
            _ => Err(self.error_here(&messages::TYPE_EXPECTED, &[])),
        }
    }

    /// Consume the literal token at `pos` as a literal type.
    fn parse_literal_type(&mut self, pos: u32, value: LiteralValue<'a>) -> ParseResult<TypeNode<'a>> {
        let flags = self.literal_flags();
        self.next_token();
        Ok(TypeNode::Literal(LiteralType {
            data: self.finish(SyntaxKind::LiteralType, pos).with_flags(flags),
            value,
        }))
    }

    fn parse_type_reference(&mut self) -> ParseResult<TypeNode<'a>> {
        let pos = self.token_pos();
        let type_name = self.parse_entity_name()?;
        let type_arguments = self.parse_type_arguments_on_same_line()?;
        Ok(TypeNode::Reference(TypeReference {
            data: self.finish(SyntaxKind::TypeReference, pos),
            type_name,
            type_arguments,
        }))
    }

    fn parse_type_arguments_on_same_line(&mut self) -> ParseResult<Option<NodeList<'a, TypeNode<'a>>>> {
        if !self.has_preceding_line_break() && self.token() == SyntaxKind::LessThanToken {
            Ok(Some(self.parse_type_arguments()?))
        } else {
            Ok(None)
        }
    }

    /// `A` or `A.B.C`. Segments after a dot may be keywords.
    pub(super) fn parse_entity_name(&mut self) -> ParseResult<EntityName<'a>> {
        let pos = self.token_pos();
        let mut name = EntityName::Identifier(self.parse_identifier()?);
        while self.parse_optional(SyntaxKind::DotToken) {
            let right = self.parse_identifier_name()?;
            name = EntityName::Qualified(self.alloc(QualifiedName {
                data: self.finish(SyntaxKind::QualifiedName, pos),
                left: name,
                right,
            }));
        }
        Ok(name)
    }

    fn parse_type_query(&mut self) -> ParseResult<TypeNode<'a>> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::TypeOfKeyword)?;
        let expr_name = if self.token() == SyntaxKind::ThisKeyword {
            let start = self.token_pos();
            let mut name = EntityName::Identifier(self.consume_identifier(SyntaxKind::ThisKeyword));
            while self.parse_optional(SyntaxKind::DotToken) {
                let right = self.parse_identifier_name()?;
                name = EntityName::Qualified(self.alloc(QualifiedName {
                    data: self.finish(SyntaxKind::QualifiedName, start),
                    left: name,
                    right,
                }));
            }
            name
        } else {
            self.parse_entity_name()?
        };
        let type_arguments = self.parse_type_arguments_on_same_line()?;
        Ok(TypeNode::TypeQuery(TypeQuery {
            data: self.finish(SyntaxKind::TypeQuery, pos),
            expr_name,
            type_arguments,
        }))
    }

    // ========================================================================
    // Mapped types, tuples and template literal types
    // ========================================================================

    fn is_start_of_mapped_type(&mut self) -> bool {
        self.next_token();
        if matches!(self.token(), SyntaxKind::PlusToken | SyntaxKind::MinusToken) {
            self.next_token();
            return self.token() == SyntaxKind::ReadonlyKeyword;
        }
        if self.token() == SyntaxKind::ReadonlyKeyword {
            self.next_token();
        }
        if self.token() != SyntaxKind::OpenBracketToken {
            return false;
        }
        self.next_token();
        if !self.is_identifier() {
            return false;
        }
        self.next_token();
        self.token() == SyntaxKind::InKeyword
    }

    /// `+`, `-` or nothing in front of a mapped type modifier.
    fn parse_mapped_modifier(&mut self, modifier: SyntaxKind) -> ParseResult<Option<MappedModifier>> {
        let sign = match self.token() {
            SyntaxKind::PlusToken => MappedModifier::Plus,
            SyntaxKind::MinusToken => MappedModifier::Minus,
            kind if kind == modifier => {
                self.next_token();
                return Ok(Some(MappedModifier::Present));
            }
            _ => return Ok(None),
        };
        self.next_token();
        self.parse_expected(modifier)?;
        Ok(Some(sign))
    }

    fn parse_mapped_type(&mut self) -> ParseResult<TypeNode<'a>> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let readonly_modifier = self.parse_mapped_modifier(SyntaxKind::ReadonlyKeyword)?;
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        let key_name = self.parse_identifier()?;
        self.parse_expected(SyntaxKind::InKeyword)?;
        let constraint = self.parse_nested_type()?;
        let name_type = if self.parse_optional(SyntaxKind::AsKeyword) {
            Some(self.parse_nested_type()?)
        } else {
            None
        };
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        let question_modifier = self.parse_mapped_modifier(SyntaxKind::QuestionToken)?;
        let type_node = if self.parse_optional(SyntaxKind::ColonToken) {
            Some(self.parse_nested_type()?)
        } else {
            None
        };
        if !self.parse_optional(SyntaxKind::SemicolonToken) {
            self.parse_optional(SyntaxKind::CommaToken);
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(TypeNode::Mapped(MappedType {
            data: self.finish(SyntaxKind::MappedType, pos),
            readonly_modifier,
            key_name,
            constraint,
            name_type,
            question_modifier,
            type_node,
        }))
    }

    fn parse_tuple_type(&mut self) -> ParseResult<TypeNode<'a>> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        let mut elements = Vec::new();
        while self.token() != SyntaxKind::CloseBracketToken {
            elements.push(self.parse_tuple_element()?);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        Ok(TypeNode::Tuple(TupleType {
            data: self.finish(SyntaxKind::TupleType, pos),
            elements: self.alloc_slice(elements),
        }))
    }

    fn is_start_of_named_tuple_member(&mut self) -> bool {
        if self.token() == SyntaxKind::DotDotDotToken {
            self.next_token();
        }
        if !self.token().is_identifier_or_keyword() {
            return false;
        }
        self.next_token();
        match self.token() {
            SyntaxKind::ColonToken => true,
            SyntaxKind::QuestionToken => self.next_token_is(|p| p.token() == SyntaxKind::ColonToken),
            _ => false,
        }
    }

    fn parse_tuple_element(&mut self) -> ParseResult<TupleElement<'a>> {
        let pos = self.token_pos();
        if self.look_ahead(Self::is_start_of_named_tuple_member) {
            let rest = self.parse_optional(SyntaxKind::DotDotDotToken);
            let name = self.parse_identifier_name()?;
            let optional = self.parse_optional(SyntaxKind::QuestionToken);
            self.parse_expected(SyntaxKind::ColonToken)?;
            let type_node = self.parse_nested_type()?;
            return Ok(TupleElement {
                data: self.finish(SyntaxKind::NamedTupleMember, pos),
                name: Some(name),
                optional,
                rest,
                type_node,
            });
        }

        let rest = self.parse_optional(SyntaxKind::DotDotDotToken);
        let type_node = self.parse_nested_type()?;
        // `[string?]`: the `?` must close the element.
        let optional = !rest
            && self.token() == SyntaxKind::QuestionToken
            && self.next_token_is(|p| matches!(p.token(), SyntaxKind::CommaToken | SyntaxKind::CloseBracketToken));
        if optional {
            self.next_token();
        }
        Ok(TupleElement {
            data: self.finish(type_node.kind(), pos),
            name: None,
            optional,
            rest,
            type_node,
        })
    }

    /// `` `a${T}b` ``. Empty literal runs are left out of the segments.
    fn parse_template_literal_type(&mut self) -> ParseResult<TypeNode<'a>> {
        let pos = self.token_pos();
        let mut segments = Vec::new();
        let head = self.token_text();
        if !head.is_empty() {
            segments.push(TemplateSegment::Literal(head));
        }
        self.next_token();
        loop {
            let placeholder = self.parse_nested_type()?;
            segments.push(TemplateSegment::Placeholder(placeholder));
            match self.token() {
                SyntaxKind::TemplateMiddle | SyntaxKind::TemplateTail => {
                    let is_tail = self.token() == SyntaxKind::TemplateTail;
                    let text = self.token_text();
                    if !text.is_empty() {
                        segments.push(TemplateSegment::Literal(text));
                    }
                    self.next_token();
                    if is_tail {
                        break;
                    }
                }
                _ => return Err(self.expected_error(SyntaxKind::CloseBraceToken)),
            }
        }
        Ok(TypeNode::TemplateLiteral(TemplateLiteralType {
            data: self.finish(SyntaxKind::TemplateLiteralType, pos),
            segments: self.alloc_slice(segments),
        }))
    }

    // ========================================================================
    // Type parameters, arguments and predicates
    // ========================================================================

    /// `<T extends C = D, ...>` if present.
    pub(super) fn parse_type_parameters(&mut self) -> ParseResult<Option<NodeList<'a, TypeParameter<'a>>>> {
        if self.token() != SyntaxKind::LessThanToken {
            return Ok(None);
        }
        self.with_error_kind(DiagnosticKind::TypeSyntaxError, |p| {
            let open = p.token_pos();
            p.next_token();
            if p.token() == SyntaxKind::GreaterThanToken {
                return Err(p.error_at(
                    DiagnosticKind::TypeSyntaxError,
                    &messages::TYPE_PARAMETER_LIST_CANNOT_BE_EMPTY,
                    &[],
                    open,
                    p.token_end(),
                ));
            }
            let mut parameters = Vec::new();
            loop {
                parameters.push(p.parse_type_parameter()?);
                if !p.parse_optional(SyntaxKind::CommaToken) || p.token() == SyntaxKind::GreaterThanToken {
                    break;
                }
            }
            p.parse_expected(SyntaxKind::GreaterThanToken)?;
            Ok(Some(p.alloc_slice(parameters)))
        })
    }

    fn parse_type_parameter(&mut self) -> ParseResult<TypeParameter<'a>> {
        let pos = self.token_pos();
        let mut modifiers = ModifierFlags::NONE;
        loop {
            let flag = match self.token() {
                SyntaxKind::InKeyword => ModifierFlags::IN,
                SyntaxKind::OutKeyword => ModifierFlags::OUT,
                SyntaxKind::ConstKeyword => ModifierFlags::CONST,
                _ => break,
            };
            // `<out>` names a parameter `out`.
            if !self.next_token_is(|p| p.is_identifier()) {
                break;
            }
            modifiers |= flag;
            self.next_token();
        }
        let name = self.parse_identifier()?;
        let constraint = if self.parse_optional(SyntaxKind::ExtendsKeyword) {
            Some(self.parse_type_ref()?)
        } else {
            None
        };
        let default = if self.parse_optional(SyntaxKind::EqualsToken) {
            Some(self.parse_type_ref()?)
        } else {
            None
        };
        Ok(TypeParameter {
            data: self.finish(SyntaxKind::TypeParameter, pos),
            modifiers,
            name,
            constraint,
            default,
        })
    }

    /// `<A, B>`. The closing `>` is always a single token here.
    pub(super) fn parse_type_arguments(&mut self) -> ParseResult<NodeList<'a, TypeNode<'a>>> {
        self.with_error_kind(DiagnosticKind::TypeSyntaxError, |p| {
            let open = p.token_pos();
            p.parse_expected(SyntaxKind::LessThanToken)?;
            if p.token() == SyntaxKind::GreaterThanToken {
                return Err(p.error_at(
                    DiagnosticKind::TypeSyntaxError,
                    &messages::TYPE_ARGUMENT_LIST_CANNOT_BE_EMPTY,
                    &[],
                    open,
                    p.token_end(),
                ));
            }
            let mut arguments = Vec::new();
            loop {
                let argument = p.with_context(
                    NodeFlags::NONE,
                    NodeFlags::DISALLOW_CONDITIONAL_TYPES_CONTEXT,
                    Self::parse_type,
                )?;
                arguments.push(argument);
                if !p.parse_optional(SyntaxKind::CommaToken) || p.token() == SyntaxKind::GreaterThanToken {
                    break;
                }
            }
            p.parse_expected(SyntaxKind::GreaterThanToken)?;
            Ok(p.alloc_slice(arguments))
        })
    }

    /// `: T` on a function-like, if present.
    pub(super) fn parse_return_type(&mut self) -> ParseResult<Option<&'a TypeNode<'a>>> {
        if !self.parse_optional(SyntaxKind::ColonToken) {
            return Ok(None);
        }
        let type_node = self.parse_type_or_type_predicate()?;
        Ok(Some(self.alloc(type_node)))
    }

    /// A return type, which may be `x is T`, `asserts x` or `asserts x is T`.
    pub(super) fn parse_type_or_type_predicate(&mut self) -> ParseResult<TypeNode<'a>> {
        self.with_error_kind(DiagnosticKind::TypeSyntaxError, |p| {
            let pos = p.token_pos();
            let is_asserts = p.token() == SyntaxKind::AssertsKeyword
                && p.next_token_is(|p| {
                    !p.has_preceding_line_break() && (p.is_identifier() || p.token() == SyntaxKind::ThisKeyword)
                });
            if is_asserts {
                p.next_token();
                let parameter_name = p.parse_predicate_parameter()?;
                let type_node = if p.parse_optional(SyntaxKind::IsKeyword) {
                    Some(p.parse_type_ref()?)
                } else {
                    None
                };
                return Ok(TypeNode::TypePredicate(TypePredicate {
                    data: p.finish(SyntaxKind::TypePredicate, pos),
                    asserts: true,
                    parameter_name,
                    type_node,
                }));
            }

            let is_predicate = (p.is_identifier() || p.token() == SyntaxKind::ThisKeyword)
                && p.next_token_is(|p| p.token() == SyntaxKind::IsKeyword && !p.has_preceding_line_break());
            if is_predicate {
                let parameter_name = p.parse_predicate_parameter()?;
                p.next_token();
                let type_node = p.parse_type_ref()?;
                return Ok(TypeNode::TypePredicate(TypePredicate {
                    data: p.finish(SyntaxKind::TypePredicate, pos),
                    asserts: false,
                    parameter_name,
                    type_node: Some(type_node),
                }));
            }
            p.parse_type()
        })
    }

    fn parse_predicate_parameter(&mut self) -> ParseResult<Identifier<'a>> {
        if self.token() == SyntaxKind::ThisKeyword {
            Ok(self.consume_identifier(SyntaxKind::ThisKeyword))
        } else {
            self.parse_identifier()
        }
    }

    // ========================================================================
    // Type members
    // ========================================================================

    /// `{ member; member, member }` as used by interfaces and type literals.
    pub(super) fn parse_type_members(&mut self) -> ParseResult<NodeList<'a, Member<'a>>> {
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut members = Vec::new();
        while !matches!(self.token(), SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken) {
            members.push(self.parse_type_member()?);
            match self.token() {
                SyntaxKind::SemicolonToken | SyntaxKind::CommaToken => {
                    self.next_token();
                }
                SyntaxKind::CloseBraceToken => {}
                _ if self.has_preceding_line_break() => {}
                _ => return Err(self.expected_error(SyntaxKind::SemicolonToken)),
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(self.alloc_slice(members))
    }

    fn parse_type_member(&mut self) -> ParseResult<Member<'a>> {
        let pos = self.token_pos();
        match self.token() {
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => {
                let signature = self.parse_signature_member(pos, SyntaxKind::CallSignature)?;
                return Ok(Member::CallSignature(signature));
            }
            SyntaxKind::NewKeyword
                if self.next_token_is(|p| {
                    matches!(p.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken)
                }) =>
            {
                self.next_token();
                let signature = self.parse_signature_member(pos, SyntaxKind::ConstructSignature)?;
                return Ok(Member::ConstructSignature(signature));
            }
            _ => {}
        }

        let mut modifiers = ModifierFlags::NONE;
        if self.token() == SyntaxKind::ReadonlyKeyword && self.next_token_is(|p| p.can_follow_member_modifier()) {
            self.next_token();
            modifiers |= ModifierFlags::READONLY;
        }
        if self.token() == SyntaxKind::OpenBracketToken && self.look_ahead(Self::is_index_signature) {
            return self.parse_index_signature(pos, modifiers);
        }
        if let Some(kind) = self.accessor_kind() {
            self.next_token();
            let method = self.parse_method_signature(pos, kind, modifiers)?;
            return Ok(Member::Method(method));
        }
        if !self.is_property_name_start() {
            return Err(self.error_here(&messages::PROPERTY_OR_SIGNATURE_EXPECTED, &[]));
        }
        let name = self.parse_property_name()?;
        let optional = self.parse_optional(SyntaxKind::QuestionToken);
        if matches!(self.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken) {
            let type_parameters = self.parse_type_parameters()?;
            let parameters = self.parse_parameters()?;
            let return_type = self.parse_return_type()?;
            return Ok(Member::Method(MethodMember {
                data: self.finish(SyntaxKind::MethodSignature, pos),
                kind: MethodKind::Method,
                modifiers,
                name,
                optional,
                asterisk: false,
                type_parameters,
                parameters,
                return_type,
                body: None,
            }));
        }
        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            Some(self.parse_type_ref()?)
        } else {
            None
        };
        Ok(Member::Field(FieldMember {
            data: self.finish(SyntaxKind::PropertySignature, pos),
            modifiers,
            name,
            optional,
            definite: false,
            type_annotation,
            initializer: None,
        }))
    }

    fn parse_signature_member(&mut self, pos: u32, kind: SyntaxKind) -> ParseResult<SignatureMember<'a>> {
        let type_parameters = self.parse_type_parameters()?;
        let parameters = self.parse_parameters()?;
        let return_type = self.parse_return_type()?;
        Ok(SignatureMember {
            data: self.finish(kind, pos),
            type_parameters,
            parameters,
            return_type,
        })
    }

    /// `get name(): T` or `set name(v: T)` in a type.
    fn parse_method_signature(
        &mut self,
        pos: u32,
        kind: MethodKind,
        modifiers: ModifierFlags,
    ) -> ParseResult<MethodMember<'a>> {
        let name = self.parse_property_name()?;
        let type_parameters = self.parse_type_parameters()?;
        let parameters = self.parse_parameters()?;
        let return_type = self.parse_return_type()?;
        let syntax_kind = match kind {
            MethodKind::Getter => SyntaxKind::GetAccessor,
            MethodKind::Setter => SyntaxKind::SetAccessor,
            _ => SyntaxKind::MethodSignature,
        };
        Ok(MethodMember {
            data: self.finish(syntax_kind, pos),
            kind,
            modifiers,
            name,
            optional: false,
            asterisk: false,
            type_parameters,
            parameters,
            return_type,
            body: None,
        })
    }

    pub(super) fn is_index_signature(&mut self) -> bool {
        self.next_token();
        if matches!(self.token(), SyntaxKind::DotDotDotToken | SyntaxKind::CloseBracketToken) {
            return true;
        }
        if self.token().is_modifier_kind() {
            self.next_token();
        }
        if !self.is_identifier() {
            return false;
        }
        self.next_token();
        match self.token() {
            SyntaxKind::ColonToken | SyntaxKind::CommaToken => true,
            SyntaxKind::QuestionToken => self.next_token_is(|p| {
                matches!(
                    p.token(),
                    SyntaxKind::ColonToken | SyntaxKind::CommaToken | SyntaxKind::CloseBracketToken
                )
            }),
            _ => false,
        }
    }

    pub(super) fn parse_index_signature(&mut self, pos: u32, modifiers: ModifierFlags) -> ParseResult<Member<'a>> {
        let parameters = self.parse_parameter_list(SyntaxKind::OpenBracketToken, SyntaxKind::CloseBracketToken)?;
        self.parse_expected(SyntaxKind::ColonToken)?;
        let type_annotation = self.parse_type_ref()?;
        Ok(Member::IndexSignature(IndexSignature {
            data: self.finish(SyntaxKind::IndexSignature, pos),
            modifiers,
            parameters,
            type_annotation,
        }))
    }
}
