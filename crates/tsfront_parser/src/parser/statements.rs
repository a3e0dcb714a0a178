//! Statements.

use tsfront_ast::node::*;
use tsfront_ast::syntax_kind::SyntaxKind;
use tsfront_ast::types::*;
use tsfront_diagnostics::messages;

use super::{ParseResult, Parser};
use crate::utilities::is_start_of_expression;

impl<'a> Parser<'a> {
    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement<'a>> {
        self.with_depth_guard(&messages::STATEMENT_IS_TOO_DEEPLY_NESTED, Self::parse_statement_worker)
    }

    fn parse_statement_ref(&mut self) -> ParseResult<&'a Statement<'a>> {
        let statement = self.parse_statement()?;
        Ok(self.alloc(statement))
    }

    fn parse_statement_worker(&mut self) -> ParseResult<Statement<'a>> {
        let pos = self.token_pos();
        match self.token() {
            SyntaxKind::OpenBraceToken => return Ok(Statement::Block(self.parse_block()?)),
            SyntaxKind::SemicolonToken => {
                self.next_token();
                return Ok(Statement::Empty(self.finish(SyntaxKind::EmptyStatement, pos)));
            }
            SyntaxKind::IfKeyword => return self.parse_if_statement(pos),
            SyntaxKind::DoKeyword => return self.parse_do_statement(pos),
            SyntaxKind::WhileKeyword => return self.parse_while_statement(pos),
            SyntaxKind::ForKeyword => return self.parse_for_statement(pos),
            SyntaxKind::ContinueKeyword | SyntaxKind::BreakKeyword => return self.parse_jump_statement(pos),
            SyntaxKind::ReturnKeyword => return self.parse_return_statement(pos),
            SyntaxKind::ThrowKeyword => return self.parse_throw_statement(pos),
            SyntaxKind::TryKeyword => return self.parse_try_statement(pos),
            SyntaxKind::SwitchKeyword => return self.parse_switch_statement(pos),
            SyntaxKind::DebuggerKeyword => {
                self.next_token();
                self.parse_semicolon()?;
                return Ok(Statement::Debugger(self.finish(SyntaxKind::DebuggerStatement, pos)));
            }
            _ => {}
        }

        if self.is_start_of_declaration() {
            return Ok(Statement::Declaration(self.parse_declaration()?));
        }
        if self.is_identifier() && self.next_token_is(|p| p.token() == SyntaxKind::ColonToken) {
            let label = self.parse_identifier()?;
            self.next_token();
            let statement = self.parse_statement_ref()?;
            return Ok(Statement::Labeled(LabeledStatement {
                data: self.finish(SyntaxKind::LabeledStatement, pos),
                label,
                statement,
            }));
        }
        if !is_start_of_expression(self.token()) {
            return Err(self.unexpected_token_error(&messages::DECLARATION_OR_STATEMENT_EXPECTED));
        }

        let expression = self.parse_expression_ref()?;
        self.parse_semicolon()?;
        Ok(Statement::Expression(ExpressionStatement {
            data: self.finish(SyntaxKind::ExpressionStatement, pos),
            expression,
        }))
    }

    pub(super) fn parse_block(&mut self) -> ParseResult<&'a Block<'a>> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut statements = Vec::new();
        while !matches!(self.token(), SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken) {
            statements.push(self.parse_statement()?);
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(self.alloc(Block {
            data: self.finish(SyntaxKind::Block, pos),
            statements: self.alloc_slice(statements),
        }))
    }

    /// `( expression )` after `if`, `while` and `switch`.
    fn parse_parenthesized_condition(&mut self) -> ParseResult<&'a Expression<'a>> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let expression = self.with_context(NodeFlags::NONE, NodeFlags::DISALLOW_IN_CONTEXT, Self::parse_expression_ref)?;
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        Ok(expression)
    }

    fn parse_if_statement(&mut self, pos: u32) -> ParseResult<Statement<'a>> {
        self.parse_expected(SyntaxKind::IfKeyword)?;
        let expression = self.parse_parenthesized_condition()?;
        let then_statement = self.parse_statement_ref()?;
        let else_statement = if self.parse_optional(SyntaxKind::ElseKeyword) {
            Some(self.parse_statement_ref()?)
        } else {
            None
        };
        Ok(Statement::If(IfStatement {
            data: self.finish(SyntaxKind::IfStatement, pos),
            expression,
            then_statement,
            else_statement,
        }))
    }

    fn parse_do_statement(&mut self, pos: u32) -> ParseResult<Statement<'a>> {
        self.parse_expected(SyntaxKind::DoKeyword)?;
        let statement = self.parse_statement_ref()?;
        self.parse_expected(SyntaxKind::WhileKeyword)?;
        let expression = self.parse_parenthesized_condition()?;
        // A `;` after `do ... while (x)` is optional even on the same line.
        self.parse_optional(SyntaxKind::SemicolonToken);
        Ok(Statement::Do(DoStatement {
            data: self.finish(SyntaxKind::DoStatement, pos),
            statement,
            expression,
        }))
    }

    fn parse_while_statement(&mut self, pos: u32) -> ParseResult<Statement<'a>> {
        self.parse_expected(SyntaxKind::WhileKeyword)?;
        let expression = self.parse_parenthesized_condition()?;
        let statement = self.parse_statement_ref()?;
        Ok(Statement::While(WhileStatement {
            data: self.finish(SyntaxKind::WhileStatement, pos),
            expression,
            statement,
        }))
    }

    fn parse_for_statement(&mut self, pos: u32) -> ParseResult<Statement<'a>> {
        self.parse_expected(SyntaxKind::ForKeyword)?;
        let is_await = self.parse_optional(SyntaxKind::AwaitKeyword);
        self.parse_expected(SyntaxKind::OpenParenToken)?;

        let initializer = if self.token() == SyntaxKind::SemicolonToken {
            None
        } else {
            Some(self.with_context(
                NodeFlags::DISALLOW_IN_CONTEXT,
                NodeFlags::NONE,
                Self::parse_for_initializer,
            )?)
        };

        if let Some(initializer) = initializer {
            let in_or_of = match self.token() {
                SyntaxKind::InKeyword if !is_await => Some(SyntaxKind::ForInStatement),
                SyntaxKind::OfKeyword => Some(SyntaxKind::ForOfStatement),
                _ => None,
            };
            if let Some(kind) = in_or_of {
                self.next_token();
                let expression = if kind == SyntaxKind::ForOfStatement {
                    self.with_context(NodeFlags::NONE, NodeFlags::DISALLOW_IN_CONTEXT, Self::parse_assignment_expression_ref)?
                } else {
                    self.with_context(NodeFlags::NONE, NodeFlags::DISALLOW_IN_CONTEXT, Self::parse_expression_ref)?
                };
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                let statement = self.parse_statement_ref()?;
                let node = ForInOfStatement {
                    data: self.finish(kind, pos),
                    is_await,
                    initializer,
                    expression,
                    statement,
                };
                return Ok(if kind == SyntaxKind::ForOfStatement {
                    Statement::ForOf(node)
                } else {
                    Statement::ForIn(node)
                });
            }
        }
        if is_await {
            return Err(self.expected_error(SyntaxKind::OfKeyword));
        }

        self.parse_expected(SyntaxKind::SemicolonToken)?;
        let condition = if self.token() == SyntaxKind::SemicolonToken {
            None
        } else {
            Some(self.with_context(NodeFlags::NONE, NodeFlags::DISALLOW_IN_CONTEXT, Self::parse_expression_ref)?)
        };
        self.parse_expected(SyntaxKind::SemicolonToken)?;
        let incrementor = if self.token() == SyntaxKind::CloseParenToken {
            None
        } else {
            Some(self.with_context(NodeFlags::NONE, NodeFlags::DISALLOW_IN_CONTEXT, Self::parse_expression_ref)?)
        };
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        let statement = self.parse_statement_ref()?;
        Ok(Statement::For(ForStatement {
            data: self.finish(SyntaxKind::ForStatement, pos),
            initializer,
            condition,
            incrementor,
            statement,
        }))
    }

    fn parse_for_initializer(&mut self) -> ParseResult<ForInitializer<'a>> {
        let is_declaration = match self.token() {
            SyntaxKind::VarKeyword | SyntaxKind::ConstKeyword => true,
            SyntaxKind::LetKeyword => self.is_let_declaration(),
            SyntaxKind::UsingKeyword => self.next_token_is(|p| p.is_identifier() && p.token() != SyntaxKind::OfKeyword),
            _ => false,
        };
        if is_declaration {
            let pos = self.token_pos();
            let declaration = self.parse_variable_declaration_list(pos, ModifierFlags::NONE)?;
            return Ok(ForInitializer::Variable(self.alloc(declaration)));
        }
        Ok(ForInitializer::Expression(self.parse_expression_ref()?))
    }

    fn parse_jump_statement(&mut self, pos: u32) -> ParseResult<Statement<'a>> {
        let is_break = self.token() == SyntaxKind::BreakKeyword;
        self.next_token();
        let label = if !self.can_parse_semicolon() && self.is_identifier() {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        self.parse_semicolon()?;
        Ok(if is_break {
            Statement::Break(JumpStatement {
                data: self.finish(SyntaxKind::BreakStatement, pos),
                label,
            })
        } else {
            Statement::Continue(JumpStatement {
                data: self.finish(SyntaxKind::ContinueStatement, pos),
                label,
            })
        })
    }

    fn parse_return_statement(&mut self, pos: u32) -> ParseResult<Statement<'a>> {
        self.parse_expected(SyntaxKind::ReturnKeyword)?;
        let expression = if self.can_parse_semicolon() {
            None
        } else {
            Some(self.parse_expression_ref()?)
        };
        self.parse_semicolon()?;
        Ok(Statement::Return(ReturnStatement {
            data: self.finish(SyntaxKind::ReturnStatement, pos),
            expression,
        }))
    }

    fn parse_throw_statement(&mut self, pos: u32) -> ParseResult<Statement<'a>> {
        self.parse_expected(SyntaxKind::ThrowKeyword)?;
        if self.has_preceding_line_break() {
            return Err(self.error_here(&messages::EXPRESSION_EXPECTED, &[]));
        }
        let expression = self.parse_expression_ref()?;
        self.parse_semicolon()?;
        Ok(Statement::Throw(ThrowStatement {
            data: self.finish(SyntaxKind::ThrowStatement, pos),
            expression,
        }))
    }

    fn parse_try_statement(&mut self, pos: u32) -> ParseResult<Statement<'a>> {
        self.parse_expected(SyntaxKind::TryKeyword)?;
        let try_block = self.parse_block()?;

        let catch_clause = if self.token() == SyntaxKind::CatchKeyword {
            let catch_pos = self.token_pos();
            self.next_token();
            let (variable, type_annotation) = if self.parse_optional(SyntaxKind::OpenParenToken) {
                let variable = self.parse_binding_name()?;
                let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
                    Some(self.parse_type_ref()?)
                } else {
                    None
                };
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                (Some(variable), type_annotation)
            } else {
                (None, None)
            };
            let block = self.parse_block()?;
            Some(CatchClause {
                data: self.finish(SyntaxKind::CatchClause, catch_pos),
                variable,
                type_annotation,
                block,
            })
        } else {
            None
        };

        let finally_block = if catch_clause.is_none() || self.token() == SyntaxKind::FinallyKeyword {
            if self.token() != SyntaxKind::FinallyKeyword {
                return Err(self.error_here(&messages::CATCH_OR_FINALLY_EXPECTED, &[]));
            }
            self.next_token();
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Statement::Try(TryStatement {
            data: self.finish(SyntaxKind::TryStatement, pos),
            try_block,
            catch_clause,
            finally_block,
        }))
    }

    fn parse_switch_statement(&mut self, pos: u32) -> ParseResult<Statement<'a>> {
        self.parse_expected(SyntaxKind::SwitchKeyword)?;
        let expression = self.parse_parenthesized_condition()?;
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut clauses = Vec::new();
        while !matches!(self.token(), SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken) {
            let clause_pos = self.token_pos();
            let (kind, expression) = match self.token() {
                SyntaxKind::CaseKeyword => {
                    self.next_token();
                    let expression = self.with_context(
                        NodeFlags::NONE,
                        NodeFlags::DISALLOW_IN_CONTEXT,
                        Self::parse_expression_ref,
                    )?;
                    (SyntaxKind::CaseClause, Some(expression))
                }
                SyntaxKind::DefaultKeyword => {
                    self.next_token();
                    (SyntaxKind::DefaultClause, None)
                }
                _ => return Err(self.expected_error(SyntaxKind::CaseKeyword)),
            };
            self.parse_expected(SyntaxKind::ColonToken)?;
            let mut statements = Vec::new();
            while !matches!(
                self.token(),
                SyntaxKind::CaseKeyword
                    | SyntaxKind::DefaultKeyword
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::EndOfFileToken
            ) {
                statements.push(self.parse_statement()?);
            }
            clauses.push(CaseClause {
                data: self.finish(kind, clause_pos),
                expression,
                statements: self.alloc_slice(statements),
            });
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(Statement::Switch(SwitchStatement {
            data: self.finish(SyntaxKind::SwitchStatement, pos),
            expression,
            clauses: self.alloc_slice(clauses),
        }))
    }
}
