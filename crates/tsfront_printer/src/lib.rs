//! tsfront_printer: AST to text output.
//!
//! Converts a parsed [`Program`] back into TypeScript text. Parentheses are
//! kept as explicit nodes by the parser, so printing the tree as-is yields
//! source that parses to the same structure.

pub mod shape;

use tsfront_ast::*;

/// Options for the printer.
#[derive(Debug, Clone)]
pub struct PrinterOptions {
    /// Indentation string.
    pub indent_str: String,
    /// Newline string.
    pub new_line: String,
    /// Whether to emit a trailing newline.
    pub trailing_newline: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent_str: "    ".to_string(),
            new_line: "\n".to_string(),
            trailing_newline: true,
        }
    }
}

/// The printer converts AST nodes to text.
pub struct Printer {
    output: String,
    indent_level: u32,
    options: PrinterOptions,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::with_options(PrinterOptions::default())
    }

    pub fn with_options(options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(4096),
            indent_level: 0,
            options,
        }
    }

    /// Print a whole program, one top-level item per line.
    pub fn print_program(&mut self, program: &Program<'_>) -> String {
        self.output.clear();
        self.indent_level = 0;
        for (i, declaration) in program.declarations.iter().enumerate() {
            if i > 0 {
                self.write_newline();
            }
            self.write_indent();
            self.print_declaration(declaration);
        }
        if self.options.trailing_newline && !self.output.is_empty() {
            self.write_newline();
        }
        std::mem::take(&mut self.output)
    }

    /// Print a single type node.
    pub fn print_type(&mut self, type_node: &TypeNode<'_>) -> String {
        self.output.clear();
        self.print_type_node(type_node);
        std::mem::take(&mut self.output)
    }

    /// Print a single expression.
    pub fn print_expression_text(&mut self, expression: &Expression<'_>) -> String {
        self.output.clear();
        self.print_expression(expression);
        std::mem::take(&mut self.output)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn print_declaration(&mut self, declaration: &Declaration<'_>) {
        match *declaration {
            Declaration::Class(n) => self.print_class(n),
            Declaration::Interface(n) => self.print_interface(n),
            Declaration::Enum(n) => self.print_enum(n),
            Declaration::Function(n) => self.print_function(n),
            Declaration::TypeAlias(n) => self.print_type_alias(n),
            Declaration::Import(n) => self.print_import(n),
            Declaration::Export(n) => self.print_export(n),
            Declaration::Variable(n) => {
                self.print_variable_list(n);
                self.write(";");
            }
            Declaration::Statement(n) => self.print_statement(n),
        }
    }

    fn print_variable_list(&mut self, node: &VariableDecl<'_>) {
        self.print_modifiers(node.modifiers);
        self.write(node.kind.as_str());
        self.write(" ");
        for (i, declarator) in node.declarations.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_binding_name(&declarator.name);
            if declarator.definite {
                self.write("!");
            }
            self.print_type_annotation(declarator.type_annotation);
            self.print_initializer(declarator.initializer);
        }
    }

    fn print_function(&mut self, node: &FunctionDecl<'_>) {
        self.print_modifiers(node.modifiers);
        self.write("function");
        if node.asterisk {
            self.write("*");
        }
        if let Some(name) = node.name {
            self.write(" ");
            self.write(name.text);
        }
        self.print_signature(node.type_parameters, node.parameters, node.return_type);
        match node.body {
            Some(body) => {
                self.write(" ");
                self.print_block(body);
            }
            None => self.write(";"),
        }
    }

    fn print_class(&mut self, node: &ClassDecl<'_>) {
        self.print_modifiers(node.modifiers);
        self.write("class");
        if let Some(name) = node.name {
            self.write(" ");
            self.write(name.text);
        }
        self.print_type_parameters(node.type_parameters);
        if let Some(extends) = node.extends {
            self.write(" extends ");
            self.print_heritage(&extends);
        }
        if !node.implements.is_empty() {
            self.write(" implements ");
            self.print_heritage_list(node.implements);
        }
        self.write(" ");
        self.print_member_block(node.members);
    }

    fn print_interface(&mut self, node: &InterfaceDecl<'_>) {
        self.print_modifiers(node.modifiers);
        self.write("interface ");
        self.write(node.name.text);
        self.print_type_parameters(node.type_parameters);
        if !node.extends.is_empty() {
            self.write(" extends ");
            self.print_heritage_list(node.extends);
        }
        self.write(" ");
        self.print_member_block(node.members);
    }

    fn print_heritage_list(&mut self, list: &[HeritageRef<'_>]) {
        for (i, heritage) in list.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_heritage(heritage);
        }
    }

    fn print_heritage(&mut self, heritage: &HeritageRef<'_>) {
        self.print_entity_name(&heritage.expression);
        self.print_type_arguments(heritage.type_arguments);
    }

    fn print_member_block(&mut self, members: &[Member<'_>]) {
        self.write("{");
        if !members.is_empty() {
            self.increase_indent();
            for member in members {
                self.write_newline();
                self.write_indent();
                self.print_member(member);
            }
            self.decrease_indent();
            self.write_newline();
            self.write_indent();
        }
        self.write("}");
    }

    fn print_member(&mut self, member: &Member<'_>) {
        match member {
            Member::Field(f) => {
                self.print_modifiers(f.modifiers);
                self.print_property_name(&f.name);
                if f.optional {
                    self.write("?");
                }
                if f.definite {
                    self.write("!");
                }
                self.print_type_annotation(f.type_annotation);
                self.print_initializer(f.initializer);
                self.write(";");
            }
            Member::Method(m) => self.print_method(m),
            Member::IndexSignature(s) => {
                self.print_modifiers(s.modifiers);
                self.write("[");
                self.print_parameters(s.parameters);
                self.write("]: ");
                self.print_type_node(s.type_annotation);
                self.write(";");
            }
            Member::CallSignature(s) => {
                self.print_signature(s.type_parameters, s.parameters, s.return_type);
                self.write(";");
            }
            Member::ConstructSignature(s) => {
                self.write("new ");
                self.print_signature(s.type_parameters, s.parameters, s.return_type);
                self.write(";");
            }
        }
    }

    fn print_method(&mut self, method: &MethodMember<'_>) {
        self.print_modifiers(method.modifiers);
        match method.kind {
            MethodKind::Getter => self.write("get "),
            MethodKind::Setter => self.write("set "),
            MethodKind::Method | MethodKind::Constructor => {}
        }
        if method.asterisk {
            self.write("*");
        }
        self.print_property_name(&method.name);
        if method.optional {
            self.write("?");
        }
        self.print_signature(method.type_parameters, method.parameters, method.return_type);
        match method.body {
            Some(body) => {
                self.write(" ");
                self.print_block(body);
            }
            None => self.write(";"),
        }
    }

    fn print_enum(&mut self, node: &EnumDecl<'_>) {
        // `const` is part of the modifier set for const enums.
        self.print_modifiers(node.modifiers);
        self.write("enum ");
        self.write(node.name.text);
        self.write(" {");
        if !node.members.is_empty() {
            self.increase_indent();
            for member in node.members {
                self.write_newline();
                self.write_indent();
                self.print_property_name(&member.name);
                self.print_initializer(member.initializer);
                self.write(",");
            }
            self.decrease_indent();
            self.write_newline();
            self.write_indent();
        }
        self.write("}");
    }

    fn print_type_alias(&mut self, node: &TypeAliasDecl<'_>) {
        self.print_modifiers(node.modifiers);
        self.write("type ");
        self.write(node.name.text);
        self.print_type_parameters(node.type_parameters);
        self.write(" = ");
        self.print_type_node(node.type_node);
        self.write(";");
    }

    fn print_import(&mut self, node: &ImportDecl<'_>) {
        self.write("import ");
        if node.is_type_only {
            self.write("type ");
        }
        if node.is_side_effect_only() {
            self.print_string_literal(node.module_specifier.text);
            self.write(";");
            return;
        }
        if let Some(default) = node.default_binding {
            self.write(default.text);
            if node.bindings.is_some() {
                self.write(", ");
            }
        }
        match node.bindings {
            Some(ImportBindings::Namespace(name)) => {
                self.write("* as ");
                self.write(name.text);
            }
            Some(ImportBindings::Named(specifiers)) => {
                self.write("{ ");
                for (i, s) in specifiers.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.print_specifier(s.is_type_only, s.property_name, s.name);
                }
                self.write(" }");
            }
            None => {}
        }
        self.write(" from ");
        self.print_string_literal(node.module_specifier.text);
        self.write(";");
    }

    fn print_specifier(&mut self, is_type_only: bool, property_name: Option<Identifier<'_>>, name: Identifier<'_>) {
        if is_type_only {
            self.write("type ");
        }
        if let Some(property_name) = property_name {
            self.write(property_name.text);
            self.write(" as ");
        }
        self.write(name.text);
    }

    fn print_export(&mut self, node: &ExportDecl<'_>) {
        match node.kind {
            // The wrapped declaration carries the `export` modifier itself.
            ExportKind::Declaration { declaration, .. } => self.print_declaration(&declaration),
            ExportKind::Named {
                specifiers,
                module_specifier,
            } => {
                self.write("export ");
                if node.is_type_only {
                    self.write("type ");
                }
                self.write("{");
                for (i, s) in specifiers.iter().enumerate() {
                    self.write(if i > 0 { ", " } else { " " });
                    self.print_specifier(s.is_type_only, s.property_name, s.name);
                }
                self.write(if specifiers.is_empty() { "}" } else { " }" });
                if let Some(module) = module_specifier {
                    self.write(" from ");
                    self.print_string_literal(module.text);
                }
                self.write(";");
            }
            ExportKind::All { module_specifier } => {
                self.write(if node.is_type_only { "export type * from " } else { "export * from " });
                self.print_string_literal(module_specifier.text);
                self.write(";");
            }
            ExportKind::AllAsNamespace { name, module_specifier } => {
                self.write(if node.is_type_only { "export type * as " } else { "export * as " });
                self.write(name.text);
                self.write(" from ");
                self.print_string_literal(module_specifier.text);
                self.write(";");
            }
            ExportKind::DefaultExpression(expression) => {
                self.write("export default ");
                self.print_expression(expression);
                self.write(";");
            }
            ExportKind::Assignment(expression) => {
                self.write("export = ");
                self.print_expression(expression);
                self.write(";");
            }
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn print_statement(&mut self, stmt: &Statement<'_>) {
        match stmt {
            Statement::Declaration(d) => self.print_declaration(d),
            Statement::Block(b) => self.print_block(b),
            Statement::Empty(_) => self.write(";"),
            Statement::Debugger(_) => self.write("debugger;"),
            Statement::Expression(s) => {
                self.print_expression(s.expression);
                self.write(";");
            }
            Statement::If(s) => {
                self.write("if (");
                self.print_expression(s.expression);
                self.write(") ");
                self.print_statement(s.then_statement);
                if let Some(else_statement) = s.else_statement {
                    self.write(" else ");
                    self.print_statement(else_statement);
                }
            }
            Statement::Do(s) => {
                self.write("do ");
                self.print_statement(s.statement);
                self.write(" while (");
                self.print_expression(s.expression);
                self.write(");");
            }
            Statement::While(s) => {
                self.write("while (");
                self.print_expression(s.expression);
                self.write(") ");
                self.print_statement(s.statement);
            }
            Statement::For(s) => {
                self.write("for (");
                if let Some(initializer) = &s.initializer {
                    self.print_for_initializer(initializer);
                }
                self.write(";");
                if let Some(condition) = s.condition {
                    self.write(" ");
                    self.print_expression(condition);
                }
                self.write(";");
                if let Some(incrementor) = s.incrementor {
                    self.write(" ");
                    self.print_expression(incrementor);
                }
                self.write(") ");
                self.print_statement(s.statement);
            }
            Statement::ForIn(s) | Statement::ForOf(s) => {
                self.write("for ");
                if s.is_await {
                    self.write("await ");
                }
                self.write("(");
                self.print_for_initializer(&s.initializer);
                self.write(if matches!(stmt, Statement::ForIn(_)) { " in " } else { " of " });
                self.print_expression(s.expression);
                self.write(") ");
                self.print_statement(s.statement);
            }
            Statement::Continue(s) | Statement::Break(s) => {
                self.write(if matches!(stmt, Statement::Break(_)) { "break" } else { "continue" });
                if let Some(label) = s.label {
                    self.write(" ");
                    self.write(label.text);
                }
                self.write(";");
            }
            Statement::Return(s) => {
                self.write("return");
                if let Some(expression) = s.expression {
                    self.write(" ");
                    self.print_expression(expression);
                }
                self.write(";");
            }
            Statement::Throw(s) => {
                self.write("throw ");
                self.print_expression(s.expression);
                self.write(";");
            }
            Statement::Try(s) => self.print_try_statement(s),
            Statement::Switch(s) => self.print_switch_statement(s),
            Statement::Labeled(s) => {
                self.write(s.label.text);
                self.write(": ");
                self.print_statement(s.statement);
            }
        }
    }

    fn print_for_initializer(&mut self, initializer: &ForInitializer<'_>) {
        match initializer {
            ForInitializer::Variable(v) => self.print_variable_list(v),
            ForInitializer::Expression(e) => self.print_expression(e),
        }
    }

    fn print_block(&mut self, node: &Block<'_>) {
        self.write("{");
        if !node.statements.is_empty() {
            self.increase_indent();
            for stmt in node.statements {
                self.write_newline();
                self.write_indent();
                self.print_statement(stmt);
            }
            self.decrease_indent();
            self.write_newline();
            self.write_indent();
        }
        self.write("}");
    }

    fn print_try_statement(&mut self, node: &TryStatement<'_>) {
        self.write("try ");
        self.print_block(node.try_block);
        if let Some(catch) = &node.catch_clause {
            self.write(" catch ");
            if let Some(variable) = &catch.variable {
                self.write("(");
                self.print_binding_name(variable);
                self.print_type_annotation(catch.type_annotation);
                self.write(") ");
            }
            self.print_block(catch.block);
        }
        if let Some(finally) = node.finally_block {
            self.write(" finally ");
            self.print_block(finally);
        }
    }

    fn print_switch_statement(&mut self, node: &SwitchStatement<'_>) {
        self.write("switch (");
        self.print_expression(node.expression);
        self.write(") {");
        self.increase_indent();
        for clause in node.clauses {
            self.write_newline();
            self.write_indent();
            match clause.expression {
                Some(expression) => {
                    self.write("case ");
                    self.print_expression(expression);
                    self.write(":");
                }
                None => self.write("default:"),
            }
            self.increase_indent();
            for stmt in clause.statements {
                self.write_newline();
                self.write_indent();
                self.print_statement(stmt);
            }
            self.decrease_indent();
        }
        self.decrease_indent();
        self.write_newline();
        self.write_indent();
        self.write("}");
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn print_expression(&mut self, expr: &Expression<'_>) {
        match expr {
            Expression::Identifier(id) => self.write(id.text),
            Expression::Literal(lit) => self.print_literal(lit),
            Expression::This(_) => self.write("this"),
            Expression::Super(_) => self.write("super"),
            Expression::Omitted(_) => {}
            Expression::Template(t) => {
                self.write("`");
                self.write_template_text(t.head);
                for span in t.spans {
                    self.write("${");
                    self.print_expression(span.expression);
                    self.write("}");
                    self.write_template_text(span.literal);
                }
                self.write("`");
            }
            Expression::Array(a) => {
                self.write("[");
                for (i, element) in a.elements.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.print_expression(element);
                }
                // A trailing hole needs its own comma to survive reparsing.
                if matches!(a.elements.last(), Some(Expression::Omitted(_))) {
                    self.write(",");
                }
                self.write("]");
            }
            Expression::Object(o) => self.print_object_literal(o),
            Expression::Parenthesized(p) => {
                self.write("(");
                self.print_expression(p.expression);
                self.write(")");
            }
            Expression::Function(f) => self.print_function(f),
            Expression::Arrow(a) => self.print_arrow_function(a),
            Expression::Class(c) => self.print_class(c),
            Expression::Call(c) => {
                self.print_expression(c.expression);
                if c.question_dot {
                    self.write("?.");
                }
                self.print_type_arguments(c.type_arguments);
                self.print_arguments(c.arguments);
            }
            Expression::New(n) => {
                self.write("new ");
                self.print_expression(n.expression);
                self.print_type_arguments(n.type_arguments);
                if let Some(arguments) = n.arguments {
                    self.print_arguments(arguments);
                }
            }
            Expression::PropertyAccess(p) => {
                self.print_expression(p.expression);
                self.write(if p.question_dot { "?." } else { "." });
                self.write(p.name.text);
            }
            Expression::ElementAccess(e) => {
                self.print_expression(e.expression);
                if e.question_dot {
                    self.write("?.");
                }
                self.write("[");
                self.print_expression(e.argument);
                self.write("]");
            }
            Expression::TaggedTemplate(t) => {
                self.print_expression(t.tag);
                self.print_type_arguments(t.type_arguments);
                self.print_expression(t.template);
            }
            Expression::Instantiation(i) => {
                self.print_expression(i.expression);
                self.print_type_arguments(Some(i.type_arguments));
            }
            Expression::NonNull(n) => {
                self.print_expression(n.expression);
                self.write("!");
            }
            Expression::PrefixUnary(u) => {
                let operator = operator_to_string(u.operator);
                self.write(operator);
                // `- -x` must not fuse into `--x`.
                if let Expression::PrefixUnary(inner) = u.operand {
                    if operator_to_string(inner.operator).starts_with(&operator[..1]) {
                        self.write(" ");
                    }
                }
                self.print_expression(u.operand);
            }
            Expression::PostfixUnary(u) => {
                self.print_expression(u.operand);
                self.write(operator_to_string(u.operator));
            }
            Expression::Binary(b) => {
                self.print_expression(b.left);
                if b.operator != SyntaxKind::CommaToken {
                    self.write(" ");
                }
                self.write(operator_to_string(b.operator));
                self.write(" ");
                self.print_expression(b.right);
            }
            Expression::Conditional(c) => {
                self.print_expression(c.condition);
                self.write(" ? ");
                self.print_expression(c.when_true);
                self.write(" : ");
                self.print_expression(c.when_false);
            }
            Expression::As(a) => {
                self.print_expression(a.expression);
                self.write(" as ");
                self.print_type_node(a.type_node);
            }
            Expression::Satisfies(s) => {
                self.print_expression(s.expression);
                self.write(" satisfies ");
                self.print_type_node(s.type_node);
            }
            Expression::TypeOf(u) => self.print_keyword_unary("typeof ", u),
            Expression::Void(u) => self.print_keyword_unary("void ", u),
            Expression::Delete(u) => self.print_keyword_unary("delete ", u),
            Expression::Await(u) => self.print_keyword_unary("await ", u),
            Expression::Spread(u) => self.print_keyword_unary("...", u),
            Expression::Yield(y) => {
                self.write("yield");
                if y.asterisk {
                    self.write("*");
                }
                if let Some(expression) = y.expression {
                    self.write(" ");
                    self.print_expression(expression);
                }
            }
        }
    }

    fn print_keyword_unary(&mut self, keyword: &str, node: &UnaryExpression<'_>) {
        self.write(keyword);
        self.print_expression(node.expression);
    }

    fn print_literal(&mut self, literal: &LiteralNode<'_>) {
        match literal.data.kind {
            SyntaxKind::StringLiteral => self.print_string_literal(literal.text),
            SyntaxKind::NoSubstitutionTemplateLiteral => {
                self.write("`");
                self.write_template_text(literal.text);
                self.write("`");
            }
            SyntaxKind::TrueKeyword => self.write("true"),
            SyntaxKind::FalseKeyword => self.write("false"),
            SyntaxKind::NullKeyword => self.write("null"),
            _ => self.write(literal.text),
        }
    }

    fn print_arguments(&mut self, arguments: &[Expression<'_>]) {
        self.write("(");
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_expression(argument);
        }
        self.write(")");
    }

    fn print_arrow_function(&mut self, node: &ArrowFunction<'_>) {
        self.print_modifiers(node.modifiers);
        self.print_signature(node.type_parameters, node.parameters, node.return_type);
        self.write(" => ");
        match node.body {
            ArrowBody::Block(block) => self.print_block(block),
            ArrowBody::Expression(expression) => self.print_expression(expression),
        }
    }

    fn print_object_literal(&mut self, node: &ObjectLiteral<'_>) {
        if node.properties.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{ ");
        for (i, property) in node.properties.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            match property {
                ObjectProperty::Assignment { name, initializer, .. } => {
                    self.print_property_name(name);
                    self.write(": ");
                    self.print_expression(initializer);
                }
                ObjectProperty::Shorthand { name, initializer, .. } => {
                    self.write(name.text);
                    self.print_initializer(*initializer);
                }
                ObjectProperty::Spread { expression, .. } => {
                    self.write("...");
                    self.print_expression(expression);
                }
                ObjectProperty::Method(method) => self.print_method(method),
            }
        }
        self.write(" }");
    }

    // ========================================================================
    // Types
    // ========================================================================

    fn print_type_node(&mut self, ty: &TypeNode<'_>) {
        match ty {
            TypeNode::Keyword(k) => self.write(k.data.kind.token_text().unwrap_or("unknown")),
            TypeNode::Reference(r) => {
                self.print_entity_name(&r.type_name);
                self.print_type_arguments(r.type_arguments);
            }
            TypeNode::Union(u) => self.print_type_list(u.types, " | "),
            TypeNode::Intersection(i) => self.print_type_list(i.types, " & "),
            TypeNode::Conditional(c) => {
                self.print_type_node(c.check_type);
                self.write(" extends ");
                self.print_type_node(c.extends_type);
                self.write(" ? ");
                self.print_type_node(c.true_type);
                self.write(" : ");
                self.print_type_node(c.false_type);
            }
            TypeNode::Infer(i) => {
                self.write("infer ");
                self.write(i.name.text);
                if let Some(constraint) = i.constraint {
                    self.write(" extends ");
                    self.print_type_node(constraint);
                }
            }
            TypeNode::Mapped(m) => self.print_mapped_type(m),
            TypeNode::TemplateLiteral(t) => {
                self.write("`");
                for segment in t.segments {
                    match segment {
                        TemplateSegment::Literal(text) => self.write_template_text(text),
                        TemplateSegment::Placeholder(type_node) => {
                            self.write("${");
                            self.print_type_node(type_node);
                            self.write("}");
                        }
                    }
                }
                self.write("`");
            }
            TypeNode::Tuple(t) => {
                self.write("[");
                for (i, element) in t.elements.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    if element.rest {
                        self.write("...");
                    }
                    match element.name {
                        Some(name) => {
                            self.write(name.text);
                            if element.optional {
                                self.write("?");
                            }
                            self.write(": ");
                            self.print_type_node(element.type_node);
                        }
                        None => {
                            self.print_type_node(element.type_node);
                            if element.optional {
                                self.write("?");
                            }
                        }
                    }
                }
                self.write("]");
            }
            TypeNode::Function(f) => {
                if f.is_abstract {
                    self.write("abstract ");
                }
                if f.is_constructor {
                    self.write("new ");
                }
                self.print_type_parameters(f.type_parameters);
                self.write("(");
                self.print_parameters(f.parameters);
                self.write(") => ");
                self.print_type_node(f.return_type);
            }
            TypeNode::Array(a) => {
                self.print_type_node(a.element_type);
                self.write("[]");
            }
            TypeNode::IndexedAccess(i) => {
                self.print_type_node(i.object_type);
                self.write("[");
                self.print_type_node(i.index_type);
                self.write("]");
            }
            TypeNode::TypeOperator(o) => {
                self.write(o.operator.as_str());
                self.write(" ");
                self.print_type_node(o.type_node);
            }
            TypeNode::Literal(l) => match l.value {
                LiteralValue::String(text) => self.print_string_literal(text),
                LiteralValue::Number(text) | LiteralValue::BigInt(text) => self.write(text),
                LiteralValue::Boolean(value) => self.write(if value { "true" } else { "false" }),
            },
            TypeNode::TypeLiteral(t) => {
                if t.members.is_empty() {
                    self.write("{}");
                    return;
                }
                self.write("{ ");
                for (i, member) in t.members.iter().enumerate() {
                    if i > 0 {
                        self.write(" ");
                    }
                    self.print_member(member);
                }
                self.write(" }");
            }
            TypeNode::Parenthesized(p) => {
                self.write("(");
                self.print_type_node(p.type_node);
                self.write(")");
            }
            TypeNode::TypeQuery(q) => {
                self.write("typeof ");
                self.print_entity_name(&q.expr_name);
                self.print_type_arguments(q.type_arguments);
            }
            TypeNode::TypePredicate(p) => {
                if p.asserts {
                    self.write("asserts ");
                }
                self.write(p.parameter_name.text);
                if let Some(type_node) = p.type_node {
                    self.write(" is ");
                    self.print_type_node(type_node);
                }
            }
        }
    }

    fn print_type_list(&mut self, types: &[TypeNode<'_>], separator: &str) {
        for (i, t) in types.iter().enumerate() {
            if i > 0 {
                self.write(separator);
            }
            self.print_type_node(t);
        }
    }

    fn print_mapped_type(&mut self, node: &MappedType<'_>) {
        self.write("{ ");
        if let Some(modifier) = node.readonly_modifier {
            self.write(mapped_modifier_prefix(modifier));
            self.write("readonly ");
        }
        self.write("[");
        self.write(node.key_name.text);
        self.write(" in ");
        self.print_type_node(node.constraint);
        if let Some(name_type) = node.name_type {
            self.write(" as ");
            self.print_type_node(name_type);
        }
        self.write("]");
        if let Some(modifier) = node.question_modifier {
            self.write(mapped_modifier_prefix(modifier));
            self.write("?");
        }
        if let Some(type_node) = node.type_node {
            self.write(": ");
            self.print_type_node(type_node);
        }
        self.write(" }");
    }

    // ========================================================================
    // Helper printing functions
    // ========================================================================

    fn print_entity_name(&mut self, name: &EntityName<'_>) {
        match name {
            EntityName::Identifier(id) => self.write(id.text),
            EntityName::Qualified(q) => {
                self.print_entity_name(&q.left);
                self.write(".");
                self.write(q.right.text);
            }
        }
    }

    fn print_property_name(&mut self, name: &PropertyName<'_>) {
        match name {
            PropertyName::Identifier(id) | PropertyName::PrivateIdentifier(id) => self.write(id.text),
            PropertyName::StringLiteral(lit) => self.print_string_literal(lit.text),
            PropertyName::NumericLiteral(lit) => self.write(lit.text),
            PropertyName::Computed(c) => {
                self.write("[");
                self.print_expression(c.expression);
                self.write("]");
            }
        }
    }

    fn print_binding_name(&mut self, name: &BindingName<'_>) {
        match name {
            BindingName::Identifier(id) => self.write(id.text),
            BindingName::Object(pattern) => {
                if pattern.elements.is_empty() {
                    self.write("{}");
                    return;
                }
                self.write("{ ");
                for (i, element) in pattern.elements.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.print_binding_element(element);
                }
                self.write(" }");
            }
            BindingName::Array(pattern) => {
                self.write("[");
                for (i, element) in pattern.elements.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    if let Some(element) = element {
                        self.print_binding_element(element);
                    }
                }
                if matches!(pattern.elements.last(), Some(None)) {
                    self.write(",");
                }
                self.write("]");
            }
        }
    }

    fn print_binding_element(&mut self, element: &BindingElement<'_>) {
        if element.dot_dot_dot {
            self.write("...");
        }
        if let Some(property_name) = &element.property_name {
            self.print_property_name(property_name);
            self.write(": ");
        }
        self.print_binding_name(&element.name);
        self.print_initializer(element.initializer);
    }

    /// `<T>(params): R`, shared by functions, methods, signatures and arrows.
    fn print_signature(
        &mut self,
        type_parameters: Option<&[TypeParameter<'_>]>,
        parameters: &[Parameter<'_>],
        return_type: Option<&TypeNode<'_>>,
    ) {
        self.print_type_parameters(type_parameters);
        self.write("(");
        self.print_parameters(parameters);
        self.write(")");
        self.print_type_annotation(return_type);
    }

    fn print_parameters(&mut self, params: &[Parameter<'_>]) {
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_modifiers(param.modifiers);
            if param.dot_dot_dot {
                self.write("...");
            }
            self.print_binding_name(&param.name);
            if param.question {
                self.write("?");
            }
            self.print_type_annotation(param.type_annotation);
            self.print_initializer(param.initializer);
        }
    }

    fn print_type_parameters(&mut self, type_params: Option<&[TypeParameter<'_>]>) {
        let Some(params) = type_params else { return };
        if params.is_empty() {
            return;
        }
        self.write("<");
        for (i, tp) in params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_modifiers(tp.modifiers);
            self.write(tp.name.text);
            if let Some(constraint) = tp.constraint {
                self.write(" extends ");
                self.print_type_node(constraint);
            }
            if let Some(default) = tp.default {
                self.write(" = ");
                self.print_type_node(default);
            }
        }
        self.write(">");
    }

    fn print_type_arguments(&mut self, type_args: Option<&[TypeNode<'_>]>) {
        if let Some(args) = type_args {
            self.write("<");
            self.print_type_list(args, ", ");
            self.write(">");
        }
    }

    fn print_type_annotation(&mut self, type_node: Option<&TypeNode<'_>>) {
        if let Some(type_node) = type_node {
            self.write(": ");
            self.print_type_node(type_node);
        }
    }

    fn print_initializer(&mut self, initializer: Option<&Expression<'_>>) {
        if let Some(initializer) = initializer {
            self.write(" = ");
            self.print_expression(initializer);
        }
    }

    fn print_modifiers(&mut self, flags: ModifierFlags) {
        if flags.is_empty() {
            return;
        }
        for (flag, keyword) in ModifierFlags::KEYWORDS {
            if flags.contains(flag) {
                self.write(keyword);
                self.write(" ");
            }
        }
    }

    fn print_string_literal(&mut self, value: &str) {
        self.write("\"");
        for c in value.chars() {
            match c {
                '"' => self.write("\\\""),
                '\\' => self.write("\\\\"),
                '\n' => self.write("\\n"),
                '\r' => self.write("\\r"),
                '\t' => self.write("\\t"),
                '\u{2028}' => self.write("\\u2028"),
                '\u{2029}' => self.write("\\u2029"),
                c if c.is_control() => self.write_owned(format!("\\u{:04x}", c as u32)),
                c => self.output.push(c),
            }
        }
        self.write("\"");
    }

    fn write_template_text(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '`' => self.write("\\`"),
                '\\' => self.write("\\\\"),
                '$' if chars.peek() == Some(&'{') => self.write("\\$"),
                c => self.output.push(c),
            }
        }
    }

    // ========================================================================
    // Core write helpers
    // ========================================================================

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_owned(&mut self, s: String) {
        self.output.push_str(&s);
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.new_line);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.options.indent_str);
        }
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}

/// Print a program with default options.
pub fn print_program(program: &Program<'_>) -> String {
    Printer::new().print_program(program)
}

fn mapped_modifier_prefix(modifier: MappedModifier) -> &'static str {
    match modifier {
        MappedModifier::Present => "",
        MappedModifier::Plus => "+",
        MappedModifier::Minus => "-",
    }
}

fn operator_to_string(kind: SyntaxKind) -> &'static str {
    kind.token_text().unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_to_string() {
        assert_eq!(operator_to_string(SyntaxKind::PlusToken), "+");
        assert_eq!(operator_to_string(SyntaxKind::AsteriskAsteriskToken), "**");
        assert_eq!(operator_to_string(SyntaxKind::QuestionQuestionToken), "??");
        assert_eq!(operator_to_string(SyntaxKind::InstanceOfKeyword), "instanceof");
    }

    #[test]
    fn test_string_escaping() {
        let mut printer = Printer::new();
        printer.print_string_literal("say \"hi\"\n\\");
        assert_eq!(printer.output, r#""say \"hi\"\n\\""#);
    }

    #[test]
    fn test_template_escaping() {
        let mut printer = Printer::new();
        printer.write_template_text("`${x}` costs $5");
        assert_eq!(printer.output, r"\`\${x}\` costs $5");
    }

    #[test]
    fn test_mapped_modifier_prefix() {
        assert_eq!(mapped_modifier_prefix(MappedModifier::Minus), "-");
        assert_eq!(mapped_modifier_prefix(MappedModifier::Present), "");
    }
}
