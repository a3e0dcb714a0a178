//! Expressions.
//!
//! Binary operators go through precedence climbing. Arrow functions and
//! generic calls are recognised by speculative parsing: the parser tries the
//! arrow or type-argument reading, and rewinds when it does not fit.

use tsfront_ast::node::*;
use tsfront_ast::syntax_kind::SyntaxKind;
use tsfront_ast::types::*;
use tsfront_diagnostics::messages;

use super::declarations::function_context;
use super::{ParseResult, Parser};
use crate::precedence::{binary_operator_precedence, OperatorPrecedence};
use crate::utilities::{can_follow_type_arguments_in_expression, is_start_of_expression};

/// Everything of an arrow function before its body.
struct ArrowHead<'a> {
    modifiers: ModifierFlags,
    type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    parameters: NodeList<'a, Parameter<'a>>,
    return_type: Option<&'a TypeNode<'a>>,
}

impl<'a> Parser<'a> {
    /// Comma-separated expression.
    pub(super) fn parse_expression(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        let mut expression = self.parse_assignment_expression()?;
        while self.token() == SyntaxKind::CommaToken {
            self.next_token();
            let right = self.parse_assignment_expression_ref()?;
            expression = Expression::Binary(BinaryExpression {
                data: self.finish(SyntaxKind::BinaryExpression, pos),
                left: self.alloc(expression),
                operator: SyntaxKind::CommaToken,
                right,
            });
        }
        Ok(expression)
    }

    pub(super) fn parse_expression_ref(&mut self) -> ParseResult<&'a Expression<'a>> {
        let expression = self.parse_expression()?;
        Ok(self.alloc(expression))
    }

    pub(super) fn parse_assignment_expression(&mut self) -> ParseResult<Expression<'a>> {
        self.with_depth_guard(
            &messages::EXPRESSION_IS_TOO_DEEPLY_NESTED,
            Self::parse_assignment_expression_worker,
        )
    }

    pub(super) fn parse_assignment_expression_ref(&mut self) -> ParseResult<&'a Expression<'a>> {
        let expression = self.parse_assignment_expression()?;
        Ok(self.alloc(expression))
    }

    fn parse_assignment_expression_worker(&mut self) -> ParseResult<Expression<'a>> {
        if self.token() == SyntaxKind::YieldKeyword && self.in_context(NodeFlags::YIELD_CONTEXT) {
            return self.parse_yield_expression();
        }
        if let Some(arrow) = self.try_parse_arrow_function()? {
            return Ok(arrow);
        }
        if let Some(arrow) = self.try_parse_simple_arrow_function()? {
            return Ok(arrow);
        }

        let pos = self.token_pos();
        let expression = self.parse_binary_expression_or_higher(OperatorPrecedence::Lowest)?;

        if self.rescan_greater_than().is_assignment_operator() {
            let operator = self.token();
            self.next_token();
            let right = self.parse_assignment_expression_ref()?;
            return Ok(Expression::Binary(BinaryExpression {
                data: self.finish(SyntaxKind::BinaryExpression, pos),
                left: self.alloc(expression),
                operator,
                right,
            }));
        }
        if self.token() == SyntaxKind::QuestionToken {
            self.next_token();
            let when_true = self.with_context(
                NodeFlags::NONE,
                NodeFlags::DISALLOW_IN_CONTEXT,
                Self::parse_assignment_expression_ref,
            )?;
            self.parse_expected(SyntaxKind::ColonToken)?;
            let when_false = self.parse_assignment_expression_ref()?;
            return Ok(Expression::Conditional(ConditionalExpression {
                data: self.finish(SyntaxKind::ConditionalExpression, pos),
                condition: self.alloc(expression),
                when_true,
                when_false,
            }));
        }
        Ok(expression)
    }

    fn parse_yield_expression(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        self.next_token();
        let mut asterisk = false;
        let mut expression = None;
        if !self.has_preceding_line_break() {
            asterisk = self.parse_optional(SyntaxKind::AsteriskToken);
            if asterisk || is_start_of_expression(self.token()) {
                expression = Some(self.parse_assignment_expression_ref()?);
            }
        }
        Ok(Expression::Yield(YieldExpression {
            data: self.finish(SyntaxKind::YieldExpression, pos),
            asterisk,
            expression,
        }))
    }

    // ========================================================================
    // Arrow functions
    // ========================================================================

    /// `(params) => body`, `<T>(params) => body` and their `async` forms.
    fn try_parse_arrow_function(&mut self) -> ParseResult<Option<Expression<'a>>> {
        let could_start = match self.token() {
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => true,
            SyntaxKind::AsyncKeyword => self.next_token_is(|p| {
                !p.has_preceding_line_break()
                    && matches!(p.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken)
            }),
            _ => false,
        };
        if !could_start {
            return Ok(None);
        }
        let pos = self.token_pos();
        let Some(head) = self.speculate(|p| p.parse_arrow_head().ok().flatten()) else {
            return Ok(None);
        };
        let body = self.parse_arrow_body(head.modifiers)?;
        Ok(Some(Expression::Arrow(self.alloc(ArrowFunction {
            data: self.finish(SyntaxKind::ArrowFunction, pos),
            modifiers: head.modifiers,
            type_parameters: head.type_parameters,
            parameters: head.parameters,
            return_type: head.return_type,
            body,
        }))))
    }

    /// Parses through `=>`. `None` when the tokens are not an arrow head.
    fn parse_arrow_head(&mut self) -> ParseResult<Option<ArrowHead<'a>>> {
        let modifiers = if self.parse_optional(SyntaxKind::AsyncKeyword) {
            ModifierFlags::ASYNC
        } else {
            ModifierFlags::NONE
        };
        let type_parameters = self.parse_type_parameters()?;
        if self.token() != SyntaxKind::OpenParenToken {
            return Ok(None);
        }
        let parameters = self.with_context(
            function_context(false, modifiers.contains(ModifierFlags::ASYNC)),
            NodeFlags::YIELD_CONTEXT | NodeFlags::AWAIT_CONTEXT,
            Self::parse_parameters,
        )?;
        let return_type = self.parse_return_type()?;
        if self.token() != SyntaxKind::EqualsGreaterThanToken || self.has_preceding_line_break() {
            return Ok(None);
        }
        self.next_token();
        Ok(Some(ArrowHead {
            modifiers,
            type_parameters,
            parameters,
            return_type,
        }))
    }

    /// `x => body` and `async x => body`.
    fn try_parse_simple_arrow_function(&mut self) -> ParseResult<Option<Expression<'a>>> {
        let is_async = self.token() == SyntaxKind::AsyncKeyword
            && self.look_ahead(|p| {
                p.next_token();
                if p.has_preceding_line_break() || !p.is_identifier() {
                    return false;
                }
                p.next_token();
                p.token() == SyntaxKind::EqualsGreaterThanToken && !p.has_preceding_line_break()
            });
        let is_plain = !is_async
            && self.is_identifier()
            && self.next_token_is(|p| p.token() == SyntaxKind::EqualsGreaterThanToken && !p.has_preceding_line_break());
        if !is_async && !is_plain {
            return Ok(None);
        }

        let pos = self.token_pos();
        let modifiers = if is_async {
            self.next_token();
            ModifierFlags::ASYNC
        } else {
            ModifierFlags::NONE
        };
        let parameter_pos = self.token_pos();
        let name = self.parse_identifier()?;
        let parameter = Parameter {
            data: self.finish(SyntaxKind::Parameter, parameter_pos),
            modifiers: ModifierFlags::NONE,
            dot_dot_dot: false,
            name: BindingName::Identifier(name),
            question: false,
            type_annotation: None,
            initializer: None,
        };
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken)?;
        let body = self.parse_arrow_body(modifiers)?;
        Ok(Some(Expression::Arrow(self.alloc(ArrowFunction {
            data: self.finish(SyntaxKind::ArrowFunction, pos),
            modifiers,
            type_parameters: None,
            parameters: self.alloc_slice(vec![parameter]),
            return_type: None,
            body,
        }))))
    }

    fn parse_arrow_body(&mut self, modifiers: ModifierFlags) -> ParseResult<ArrowBody<'a>> {
        let is_async = modifiers.contains(ModifierFlags::ASYNC);
        if self.token() == SyntaxKind::OpenBraceToken {
            return Ok(ArrowBody::Block(self.parse_function_body(false, is_async)?));
        }
        let expression = self.with_context(
            function_context(false, is_async),
            NodeFlags::YIELD_CONTEXT | NodeFlags::AWAIT_CONTEXT,
            Self::parse_assignment_expression_ref,
        )?;
        Ok(ArrowBody::Expression(expression))
    }

    // ========================================================================
    // Binary and unary expressions
    // ========================================================================

    /// Rescan `>` so that `>>`, `>=` and friends become single operators.
    fn rescan_greater_than(&mut self) -> SyntaxKind {
        if self.token() == SyntaxKind::GreaterThanToken {
            self.scanner.rescan_greater_than_token()
        } else {
            self.token()
        }
    }

    fn parse_binary_expression_or_higher(&mut self, precedence: OperatorPrecedence) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        let left = self.parse_unary_expression_or_higher()?;
        self.parse_binary_expression_rest(precedence, left, pos)
    }

    fn parse_binary_expression_rest(
        &mut self,
        precedence: OperatorPrecedence,
        mut left: Expression<'a>,
        pos: u32,
    ) -> ParseResult<Expression<'a>> {
        loop {
            let operator = self.rescan_greater_than();
            let new_precedence = binary_operator_precedence(operator);
            if new_precedence == OperatorPrecedence::Invalid {
                break;
            }
            // `**` is right-associative.
            let consume = if operator == SyntaxKind::AsteriskAsteriskToken {
                new_precedence >= precedence
            } else {
                new_precedence > precedence
            };
            if !consume || (operator == SyntaxKind::InKeyword && self.in_context(NodeFlags::DISALLOW_IN_CONTEXT)) {
                break;
            }

            if matches!(operator, SyntaxKind::AsKeyword | SyntaxKind::SatisfiesKeyword) {
                if self.has_preceding_line_break() {
                    break;
                }
                self.next_token();
                let type_node = if operator == SyntaxKind::AsKeyword && self.token() == SyntaxKind::ConstKeyword {
                    self.parse_const_type_reference()
                } else {
                    self.parse_type_ref()?
                };
                let assertion = TypeAssertion {
                    data: self.finish(
                        if operator == SyntaxKind::AsKeyword {
                            SyntaxKind::AsExpression
                        } else {
                            SyntaxKind::SatisfiesExpression
                        },
                        pos,
                    ),
                    expression: self.alloc(left),
                    type_node,
                };
                left = if operator == SyntaxKind::AsKeyword {
                    Expression::As(assertion)
                } else {
                    Expression::Satisfies(assertion)
                };
                continue;
            }

            self.next_token();
            let right = self.parse_binary_expression_or_higher(new_precedence)?;
            left = Expression::Binary(BinaryExpression {
                data: self.finish(SyntaxKind::BinaryExpression, pos),
                left: self.alloc(left),
                operator,
                right: self.alloc(right),
            });
        }
        Ok(left)
    }

    /// The `const` in `as const`, as a type reference named `const`.
    fn parse_const_type_reference(&mut self) -> &'a TypeNode<'a> {
        let pos = self.token_pos();
        let name = self.consume_identifier(SyntaxKind::Identifier);
        self.alloc(TypeNode::Reference(TypeReference {
            data: self.finish(SyntaxKind::TypeReference, pos),
            type_name: EntityName::Identifier(name),
            type_arguments: None,
        }))
    }

    fn parse_unary_expression_or_higher(&mut self) -> ParseResult<Expression<'a>> {
        self.with_depth_guard(&messages::EXPRESSION_IS_TOO_DEEPLY_NESTED, Self::parse_unary_worker)
    }

    fn parse_unary_ref(&mut self) -> ParseResult<&'a Expression<'a>> {
        let expression = self.parse_unary_expression_or_higher()?;
        Ok(self.alloc(expression))
    }

    fn parse_unary_worker(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        let operator = self.token();
        match operator {
            SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken => {
                self.next_token();
                let operand = self.parse_unary_ref()?;
                Ok(Expression::PrefixUnary(OperatorExpression {
                    data: self.finish(SyntaxKind::PrefixUnaryExpression, pos),
                    operator,
                    operand,
                }))
            }
            SyntaxKind::TypeOfKeyword | SyntaxKind::VoidKeyword | SyntaxKind::DeleteKeyword => {
                self.next_token();
                let expression = self.parse_unary_ref()?;
                Ok(match operator {
                    SyntaxKind::TypeOfKeyword => Expression::TypeOf(UnaryExpression {
                        data: self.finish(SyntaxKind::TypeOfExpression, pos),
                        expression,
                    }),
                    SyntaxKind::VoidKeyword => Expression::Void(UnaryExpression {
                        data: self.finish(SyntaxKind::VoidExpression, pos),
                        expression,
                    }),
                    _ => Expression::Delete(UnaryExpression {
                        data: self.finish(SyntaxKind::DeleteExpression, pos),
                        expression,
                    }),
                })
            }
            SyntaxKind::AwaitKeyword if self.in_context(NodeFlags::AWAIT_CONTEXT) => {
                self.next_token();
                let expression = self.parse_unary_ref()?;
                Ok(Expression::Await(UnaryExpression {
                    data: self.finish(SyntaxKind::AwaitExpression, pos),
                    expression,
                }))
            }
            _ => {
                let expression = self.parse_left_hand_side_expression_or_higher()?;
                if matches!(self.token(), SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken)
                    && !self.has_preceding_line_break()
                {
                    let operator = self.token();
                    self.next_token();
                    return Ok(Expression::PostfixUnary(OperatorExpression {
                        data: self.finish(SyntaxKind::PostfixUnaryExpression, pos),
                        operator,
                        operand: self.alloc(expression),
                    }));
                }
                Ok(expression)
            }
        }
    }

    // ========================================================================
    // Member, call and new expressions
    // ========================================================================

    fn parse_left_hand_side_expression_or_higher(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        let expression = if self.token() == SyntaxKind::NewKeyword {
            self.parse_new_expression()?
        } else {
            self.parse_primary_expression()?
        };
        self.parse_member_expression_rest(pos, expression, true)
    }

    /// Property access, element access, non-null assertions, tagged
    /// templates and, when `allow_calls` is set, calls.
    fn parse_member_expression_rest(
        &mut self,
        pos: u32,
        mut expression: Expression<'a>,
        allow_calls: bool,
    ) -> ParseResult<Expression<'a>> {
        loop {
            expression = match self.token() {
                SyntaxKind::DotToken => {
                    self.next_token();
                    let name = self.parse_member_name()?;
                    self.property_access(pos, expression, false, name)
                }
                SyntaxKind::QuestionDotToken => {
                    self.next_token();
                    match self.token() {
                        SyntaxKind::OpenBracketToken => self.parse_element_access(pos, expression, true)?,
                        SyntaxKind::OpenParenToken if allow_calls => self.parse_call(pos, expression, true, None)?,
                        SyntaxKind::LessThanToken if allow_calls => {
                            let type_arguments = self.parse_type_arguments()?;
                            self.parse_call(pos, expression, true, Some(type_arguments))?
                        }
                        _ => {
                            let name = self.parse_member_name()?;
                            self.property_access(pos, expression, true, name)
                        }
                    }
                }
                SyntaxKind::OpenBracketToken => self.parse_element_access(pos, expression, false)?,
                SyntaxKind::ExclamationToken if !self.has_preceding_line_break() => {
                    self.next_token();
                    Expression::NonNull(UnaryExpression {
                        data: self.finish(SyntaxKind::NonNullExpression, pos),
                        expression: self.alloc(expression),
                    })
                }
                SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                    self.parse_tagged_template(pos, expression, None)?
                }
                SyntaxKind::LessThanToken => {
                    let Some(type_arguments) = self.try_parse_type_arguments_in_expression() else {
                        break;
                    };
                    match self.token() {
                        SyntaxKind::OpenParenToken if allow_calls => {
                            self.parse_call(pos, expression, false, Some(type_arguments))?
                        }
                        SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                            self.parse_tagged_template(pos, expression, Some(type_arguments))?
                        }
                        _ => Expression::Instantiation(InstantiationExpression {
                            data: self.finish(SyntaxKind::ExpressionWithTypeArguments, pos),
                            expression: self.alloc(expression),
                            type_arguments,
                        }),
                    }
                }
                SyntaxKind::OpenParenToken if allow_calls => self.parse_call(pos, expression, false, None)?,
                _ => break,
            };
        }
        Ok(expression)
    }

    /// The name after `.` or `?.`.
    fn parse_member_name(&mut self) -> ParseResult<Identifier<'a>> {
        if self.token() == SyntaxKind::PrivateIdentifier {
            return Ok(self.consume_identifier(SyntaxKind::PrivateIdentifier));
        }
        self.parse_identifier_name()
    }

    fn property_access(
        &self,
        pos: u32,
        expression: Expression<'a>,
        question_dot: bool,
        name: Identifier<'a>,
    ) -> Expression<'a> {
        let flags = if question_dot {
            NodeFlags::OPTIONAL_CHAIN
        } else {
            NodeFlags::NONE
        };
        Expression::PropertyAccess(PropertyAccessExpression {
            data: self.finish(SyntaxKind::PropertyAccessExpression, pos).with_flags(flags),
            expression: self.alloc(expression),
            question_dot,
            name,
        })
    }

    fn parse_element_access(
        &mut self,
        pos: u32,
        expression: Expression<'a>,
        question_dot: bool,
    ) -> ParseResult<Expression<'a>> {
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        let argument = self.with_context(NodeFlags::NONE, NodeFlags::DISALLOW_IN_CONTEXT, Self::parse_expression_ref)?;
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        let flags = if question_dot {
            NodeFlags::OPTIONAL_CHAIN
        } else {
            NodeFlags::NONE
        };
        Ok(Expression::ElementAccess(ElementAccessExpression {
            data: self.finish(SyntaxKind::ElementAccessExpression, pos).with_flags(flags),
            expression: self.alloc(expression),
            question_dot,
            argument,
        }))
    }

    fn parse_call(
        &mut self,
        pos: u32,
        expression: Expression<'a>,
        question_dot: bool,
        type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    ) -> ParseResult<Expression<'a>> {
        let arguments = self.parse_arguments()?;
        let flags = if question_dot {
            NodeFlags::OPTIONAL_CHAIN
        } else {
            NodeFlags::NONE
        };
        Ok(Expression::Call(CallExpression {
            data: self.finish(SyntaxKind::CallExpression, pos).with_flags(flags),
            expression: self.alloc(expression),
            question_dot,
            type_arguments,
            arguments,
        }))
    }

    fn parse_tagged_template(
        &mut self,
        pos: u32,
        tag: Expression<'a>,
        type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    ) -> ParseResult<Expression<'a>> {
        let template = if self.token() == SyntaxKind::TemplateHead {
            self.parse_template_expression()?
        } else {
            self.parse_literal()
        };
        Ok(Expression::TaggedTemplate(TaggedTemplateExpression {
            data: self.finish(SyntaxKind::TaggedTemplateExpression, pos),
            tag: self.alloc(tag),
            type_arguments,
            template: self.alloc(template),
        }))
    }

    /// `<...>` after an expression, kept only when it cannot be a comparison.
    fn try_parse_type_arguments_in_expression(&mut self) -> Option<NodeList<'a, TypeNode<'a>>> {
        if !self.look_ahead(Self::scan_balanced_type_argument_list) {
            return None;
        }
        self.speculate(|p| {
            let type_arguments = p.parse_type_arguments().ok()?;
            (can_follow_type_arguments_in_expression(p.token()) || p.has_preceding_line_break())
                .then_some(type_arguments)
        })
    }

    /// Cheap pre-check: does the `<` at the current token close with a
    /// matching `>` before anything that only an expression could contain?
    fn scan_balanced_type_argument_list(&mut self) -> bool {
        let mut angles = 1u32;
        let mut brackets: Vec<SyntaxKind> = Vec::new();
        self.next_token();
        for _ in 0..self.options.max_speculation_tokens {
            match self.token() {
                SyntaxKind::LessThanToken => angles += 1,
                SyntaxKind::GreaterThanToken => {
                    angles -= 1;
                    if angles == 0 {
                        return brackets.is_empty();
                    }
                }
                SyntaxKind::OpenParenToken => brackets.push(SyntaxKind::CloseParenToken),
                SyntaxKind::OpenBracketToken => brackets.push(SyntaxKind::CloseBracketToken),
                SyntaxKind::OpenBraceToken => brackets.push(SyntaxKind::CloseBraceToken),
                SyntaxKind::CloseParenToken | SyntaxKind::CloseBracketToken | SyntaxKind::CloseBraceToken => {
                    if brackets.pop() != Some(self.token()) {
                        return false;
                    }
                }
                SyntaxKind::EndOfFileToken => return false,
                SyntaxKind::SemicolonToken
                | SyntaxKind::AmpersandAmpersandToken
                | SyntaxKind::BarBarToken
                | SyntaxKind::EqualsToken
                | SyntaxKind::LessThanEqualsToken
                | SyntaxKind::GreaterThanEqualsToken
                | SyntaxKind::EqualsEqualsToken
                | SyntaxKind::EqualsEqualsEqualsToken
                | SyntaxKind::ExclamationEqualsToken
                | SyntaxKind::ExclamationEqualsEqualsToken
                    if brackets.is_empty() =>
                {
                    return false;
                }
                _ => {}
            }
            self.next_token();
        }
        false
    }

    fn parse_arguments(&mut self) -> ParseResult<NodeList<'a, Expression<'a>>> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let mut arguments = Vec::new();
        while self.token() != SyntaxKind::CloseParenToken {
            arguments.push(self.parse_element()?);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        Ok(self.alloc_slice(arguments))
    }

    /// An argument or array element, possibly spread.
    fn parse_element(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        if self.parse_optional(SyntaxKind::DotDotDotToken) {
            let expression = self.parse_initializer()?;
            return Ok(Expression::Spread(UnaryExpression {
                data: self.finish(SyntaxKind::SpreadElement, pos),
                expression,
            }));
        }
        self.with_context(
            NodeFlags::NONE,
            NodeFlags::DISALLOW_IN_CONTEXT,
            Self::parse_assignment_expression,
        )
    }

    fn parse_new_expression(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        let new_keyword = self.consume_identifier(SyntaxKind::Identifier);
        if self.token() == SyntaxKind::DotToken {
            // `new.target`
            self.next_token();
            let name = self.parse_identifier_name()?;
            return Ok(self.property_access(pos, Expression::Identifier(new_keyword), false, name));
        }

        let callee_pos = self.token_pos();
        let callee = if self.token() == SyntaxKind::NewKeyword {
            self.parse_new_expression()?
        } else {
            self.parse_primary_expression()?
        };
        let callee = self.parse_member_expression_rest(callee_pos, callee, false)?;
        let (expression, type_arguments) = match callee {
            Expression::Instantiation(instantiation) => {
                (instantiation.expression, Some(instantiation.type_arguments))
            }
            other => (self.alloc(other), None),
        };
        let arguments = if self.token() == SyntaxKind::OpenParenToken {
            Some(self.parse_arguments()?)
        } else {
            None
        };
        Ok(Expression::New(NewExpression {
            data: self.finish(SyntaxKind::NewExpression, pos),
            expression,
            type_arguments,
            arguments,
        }))
    }

    // ========================================================================
    // Primary expressions
    // ========================================================================

    fn parse_primary_expression(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        match self.token() {
            SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword => Ok(self.parse_literal()),
            SyntaxKind::ThisKeyword => {
                self.next_token();
                Ok(Expression::This(self.finish(SyntaxKind::ThisKeyword, pos)))
            }
            SyntaxKind::SuperKeyword => {
                self.next_token();
                Ok(Expression::Super(self.finish(SyntaxKind::SuperKeyword, pos)))
            }
            SyntaxKind::TemplateHead => self.parse_template_expression(),
            SyntaxKind::OpenParenToken => {
                self.next_token();
                let expression =
                    self.with_context(NodeFlags::NONE, NodeFlags::DISALLOW_IN_CONTEXT, Self::parse_expression_ref)?;
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                Ok(Expression::Parenthesized(ParenthesizedExpression {
                    data: self.finish(SyntaxKind::ParenthesizedExpression, pos),
                    expression,
                }))
            }
            SyntaxKind::OpenBracketToken => self.parse_array_literal(),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(),
            SyntaxKind::FunctionKeyword => {
                let function = self.parse_function_like(pos, ModifierFlags::NONE, true, SyntaxKind::FunctionExpression)?;
                Ok(Expression::Function(function))
            }
            SyntaxKind::AsyncKeyword
                if self.next_token_is(|p| {
                    p.token() == SyntaxKind::FunctionKeyword && !p.has_preceding_line_break()
                }) =>
            {
                self.next_token();
                let function =
                    self.parse_function_like(pos, ModifierFlags::ASYNC, true, SyntaxKind::FunctionExpression)?;
                Ok(Expression::Function(function))
            }
            SyntaxKind::ClassKeyword => {
                let class = self.parse_class_like(pos, ModifierFlags::NONE, true, SyntaxKind::ClassExpression)?;
                Ok(Expression::Class(class))
            }
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => {
                self.scanner.rescan_slash_token();
                Ok(self.parse_literal())
            }
            SyntaxKind::PrivateIdentifier => Ok(Expression::Identifier(
                self.consume_identifier(SyntaxKind::PrivateIdentifier),
            )),
            // `import(...)` and `import.meta`
            SyntaxKind::ImportKeyword => Ok(Expression::Identifier(self.consume_identifier(SyntaxKind::Identifier))),
            _ if self.is_identifier() => Ok(Expression::Identifier(self.consume_identifier(SyntaxKind::Identifier))),
            _ => Err(self.unexpected_token_error(&messages::EXPRESSION_EXPECTED)),
        }
    }

    /// The current literal token as an expression.
    fn parse_literal(&mut self) -> Expression<'a> {
        let pos = self.token_pos();
        let kind = self.token();
        let text = self.token_text();
        let flags = self.literal_flags();
        self.next_token();
        Expression::Literal(LiteralNode {
            data: self.finish(kind, pos).with_flags(flags),
            text,
        })
    }

    fn parse_template_expression(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        let head = self.token_text();
        self.next_token();
        let mut spans = Vec::new();
        loop {
            let span_pos = self.token_pos();
            let expression =
                self.with_context(NodeFlags::NONE, NodeFlags::DISALLOW_IN_CONTEXT, Self::parse_expression_ref)?;
            let is_tail = match self.token() {
                SyntaxKind::TemplateMiddle => false,
                SyntaxKind::TemplateTail => true,
                _ => return Err(self.expected_error(SyntaxKind::CloseBraceToken)),
            };
            let literal = self.token_text();
            self.next_token();
            spans.push(TemplateSpan {
                data: self.finish(SyntaxKind::TemplateSpan, span_pos),
                expression,
                literal,
            });
            if is_tail {
                break;
            }
        }
        Ok(Expression::Template(TemplateExpression {
            data: self.finish(SyntaxKind::TemplateExpression, pos),
            head,
            spans: self.alloc_slice(spans),
        }))
    }

    fn parse_array_literal(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        let mut elements = Vec::new();
        while self.token() != SyntaxKind::CloseBracketToken {
            if self.token() == SyntaxKind::CommaToken {
                let hole = self.token_pos();
                self.next_token();
                elements.push(Expression::Omitted(NodeData::new(SyntaxKind::OmittedExpression, hole, hole)));
                continue;
            }
            elements.push(self.parse_element()?);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        Ok(Expression::Array(ArrayLiteral {
            data: self.finish(SyntaxKind::ArrayLiteralExpression, pos),
            elements: self.alloc_slice(elements),
        }))
    }

    fn parse_object_literal(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut properties = Vec::new();
        while self.token() != SyntaxKind::CloseBraceToken {
            properties.push(self.parse_object_property()?);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(Expression::Object(ObjectLiteral {
            data: self.finish(SyntaxKind::ObjectLiteralExpression, pos),
            properties: self.alloc_slice(properties),
        }))
    }

    fn parse_object_property(&mut self) -> ParseResult<ObjectProperty<'a>> {
        let pos = self.token_pos();
        if self.parse_optional(SyntaxKind::DotDotDotToken) {
            let expression = self.parse_initializer()?;
            return Ok(ObjectProperty::Spread {
                data: self.finish(SyntaxKind::SpreadAssignment, pos),
                expression,
            });
        }

        let modifiers = if self.token() == SyntaxKind::AsyncKeyword
            && self.next_token_is(|p| p.can_follow_member_modifier())
        {
            self.next_token();
            ModifierFlags::ASYNC
        } else {
            ModifierFlags::NONE
        };
        if let Some(kind) = self.accessor_kind() {
            self.next_token();
            let name = self.parse_property_name()?;
            let method = self.parse_method_rest(pos, kind, modifiers, name, false, false)?;
            return Ok(ObjectProperty::Method(method));
        }

        let asterisk = self.parse_optional(SyntaxKind::AsteriskToken);
        if !self.is_property_name_start() {
            return Err(self.error_here(&messages::PROPERTY_ASSIGNMENT_EXPECTED, &[]));
        }
        let name = self.parse_property_name()?;
        if asterisk
            || !modifiers.is_empty()
            || matches!(self.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken)
        {
            let method = self.parse_method_rest(pos, MethodKind::Method, modifiers, name, false, asterisk)?;
            return Ok(ObjectProperty::Method(method));
        }

        if self.parse_optional(SyntaxKind::ColonToken) {
            let initializer = self.parse_initializer()?;
            return Ok(ObjectProperty::Assignment {
                data: self.finish(SyntaxKind::PropertyAssignment, pos),
                name,
                initializer,
            });
        }
        match name {
            PropertyName::Identifier(name) => {
                let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
                    Some(self.parse_initializer()?)
                } else {
                    None
                };
                Ok(ObjectProperty::Shorthand {
                    data: self.finish(SyntaxKind::ShorthandPropertyAssignment, pos),
                    name,
                    initializer,
                })
            }
            _ => Err(self.expected_error(SyntaxKind::ColonToken)),
        }
    }
}
