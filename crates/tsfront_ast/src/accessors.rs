//! Uniform accessors over the AST enums.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use tsfront_core::text::TextRange;

impl<'a> TypeNode<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            TypeNode::Keyword(n) => &n.data,
            TypeNode::Reference(n) => &n.data,
            TypeNode::Union(n) => &n.data,
            TypeNode::Intersection(n) => &n.data,
            TypeNode::Conditional(n) => &n.data,
            TypeNode::Infer(n) => &n.data,
            TypeNode::Mapped(n) => &n.data,
            TypeNode::TemplateLiteral(n) => &n.data,
            TypeNode::Tuple(n) => &n.data,
            TypeNode::Function(n) => &n.data,
            TypeNode::Array(n) => &n.data,
            TypeNode::IndexedAccess(n) => &n.data,
            TypeNode::TypeOperator(n) => &n.data,
            TypeNode::Literal(n) => &n.data,
            TypeNode::TypeLiteral(n) => &n.data,
            TypeNode::Parenthesized(n) => &n.data,
            TypeNode::TypeQuery(n) => &n.data,
            TypeNode::TypePredicate(n) => &n.data,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    pub fn range(&self) -> TextRange {
        self.data().range
    }

    /// The referenced name when this is a plain type reference.
    pub fn reference_name(&self) -> Option<&'a str> {
        match self {
            TypeNode::Reference(r) => match r.type_name {
                EntityName::Identifier(id) => Some(id.text),
                EntityName::Qualified(_) => None,
            },
            _ => None,
        }
    }
}

impl<'a> Member<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Member::Field(m) => &m.data,
            Member::Method(m) => &m.data,
            Member::IndexSignature(m) => &m.data,
            Member::CallSignature(m) | Member::ConstructSignature(m) => &m.data,
        }
    }

    pub fn range(&self) -> TextRange {
        self.data().range
    }

    pub fn name(&self) -> Option<&PropertyName<'a>> {
        match self {
            Member::Field(m) => Some(&m.name),
            Member::Method(m) => Some(&m.name),
            _ => None,
        }
    }

    /// Static name text of a field or method.
    pub fn name_text(&self) -> Option<&'a str> {
        match self {
            Member::Field(m) => m.name.text(),
            Member::Method(m) => m.name.text(),
            _ => None,
        }
    }
}

impl<'a> Declaration<'a> {
    pub fn data(&self) -> &'a NodeData {
        match *self {
            Declaration::Class(d) => &d.data,
            Declaration::Interface(d) => &d.data,
            Declaration::Enum(d) => &d.data,
            Declaration::Function(d) => &d.data,
            Declaration::TypeAlias(d) => &d.data,
            Declaration::Import(d) => &d.data,
            Declaration::Export(d) => &d.data,
            Declaration::Variable(d) => &d.data,
            Declaration::Statement(s) => s.data(),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    pub fn range(&self) -> TextRange {
        self.data().range
    }

    /// The declared name, looking through `export`. Variables report their
    /// first simple binding.
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Declaration::Class(d) => d.name.map(|n| n.text),
            Declaration::Interface(d) => Some(d.name.text),
            Declaration::Enum(d) => Some(d.name.text),
            Declaration::Function(d) => d.name.map(|n| n.text),
            Declaration::TypeAlias(d) => Some(d.name.text),
            Declaration::Variable(d) => d.declarations.first().and_then(|v| v.name.as_identifier()),
            Declaration::Export(e) => match e.kind {
                ExportKind::Declaration { declaration, .. } => declaration.name(),
                ExportKind::AllAsNamespace { name, .. } => Some(name.text),
                _ => None,
            },
            Declaration::Import(_) | Declaration::Statement(_) => None,
        }
    }

    /// The declaration itself, or the one wrapped by `export`.
    pub fn unwrap_export(&self) -> Declaration<'a> {
        match *self {
            Declaration::Export(ExportDecl {
                kind: ExportKind::Declaration { declaration, .. },
                ..
            }) => *declaration,
            other => other,
        }
    }

    pub fn as_interface(&self) -> Option<&'a InterfaceDecl<'a>> {
        match self.unwrap_export() {
            Declaration::Interface(i) => Some(i),
            _ => None,
        }
    }
}

impl<'a> Statement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Statement::Declaration(d) => d.data(),
            Statement::Block(b) => &b.data,
            Statement::Empty(d) | Statement::Debugger(d) => d,
            Statement::Expression(s) => &s.data,
            Statement::If(s) => &s.data,
            Statement::Do(s) => &s.data,
            Statement::While(s) => &s.data,
            Statement::For(s) => &s.data,
            Statement::ForIn(s) | Statement::ForOf(s) => &s.data,
            Statement::Continue(s) | Statement::Break(s) => &s.data,
            Statement::Return(s) => &s.data,
            Statement::Throw(s) => &s.data,
            Statement::Try(s) => &s.data,
            Statement::Switch(s) => &s.data,
            Statement::Labeled(s) => &s.data,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }
}

impl<'a> Expression<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Expression::Identifier(n) => &n.data,
            Expression::Literal(n) => &n.data,
            Expression::This(d) | Expression::Super(d) | Expression::Omitted(d) => d,
            Expression::Template(n) => &n.data,
            Expression::Array(n) => &n.data,
            Expression::Object(n) => &n.data,
            Expression::Parenthesized(n) => &n.data,
            Expression::Function(n) => &n.data,
            Expression::Arrow(n) => &n.data,
            Expression::Class(n) => &n.data,
            Expression::Call(n) => &n.data,
            Expression::New(n) => &n.data,
            Expression::PropertyAccess(n) => &n.data,
            Expression::ElementAccess(n) => &n.data,
            Expression::TaggedTemplate(n) => &n.data,
            Expression::Instantiation(n) => &n.data,
            Expression::PrefixUnary(n) | Expression::PostfixUnary(n) => &n.data,
            Expression::Binary(n) => &n.data,
            Expression::Conditional(n) => &n.data,
            Expression::As(n) | Expression::Satisfies(n) => &n.data,
            Expression::NonNull(n)
            | Expression::TypeOf(n)
            | Expression::Void(n)
            | Expression::Delete(n)
            | Expression::Await(n)
            | Expression::Spread(n) => &n.data,
            Expression::Yield(n) => &n.data,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    pub fn range(&self) -> TextRange {
        self.data().range
    }
}

impl<'a> EnumDecl<'a> {
    /// Values of each member under the auto-increment rule: an uninitialized
    /// member is the previous numeric value plus one (0 for the first).
    /// After a string or computed initializer the following uninitialized
    /// members are [`EnumValue::Unknown`].
    pub fn member_values(&self) -> Vec<EnumValue<'a>> {
        let mut values = Vec::with_capacity(self.members.len());
        let mut next = Some(0.0);
        for member in self.members {
            let value = match member.initializer {
                Some(init) => constant_value(init),
                None => next.map_or(EnumValue::Unknown, EnumValue::Number),
            };
            next = match value {
                EnumValue::Number(n) => Some(n + 1.0),
                _ => None,
            };
            values.push(value);
        }
        values
    }
}

fn constant_value<'a>(expr: &Expression<'a>) -> EnumValue<'a> {
    match expr {
        Expression::Literal(lit) => match lit.data.kind {
            SyntaxKind::NumericLiteral => {
                parse_numeric_literal(lit.text).map_or(EnumValue::Unknown, EnumValue::Number)
            }
            SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral => {
                EnumValue::String(lit.text)
            }
            _ => EnumValue::Unknown,
        },
        Expression::Parenthesized(p) => constant_value(p.expression),
        Expression::PrefixUnary(u) => match (u.operator, constant_value(u.operand)) {
            (SyntaxKind::MinusToken, EnumValue::Number(n)) => EnumValue::Number(-n),
            (SyntaxKind::PlusToken, EnumValue::Number(n)) => EnumValue::Number(n),
            _ => EnumValue::Unknown,
        },
        _ => EnumValue::Unknown,
    }
}

/// Evaluate the source spelling of a numeric literal.
pub fn parse_numeric_literal(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();
    let radix_value = |digits: &str, radix: u32| u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
    if let Some(hex) = lower.strip_prefix("0x") {
        radix_value(hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        radix_value(bin, 2)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        radix_value(oct, 8)
    } else if lower.len() > 1 && lower.starts_with('0') && lower.bytes().all(|b| b.is_ascii_digit()) {
        // Legacy octal (`017`) unless a digit rules it out.
        if lower.bytes().all(|b| b < b'8') {
            radix_value(&lower[1..], 8)
        } else {
            lower.parse().ok()
        }
    } else {
        lower.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_literal() {
        assert_eq!(parse_numeric_literal("42"), Some(42.0));
        assert_eq!(parse_numeric_literal("1_000"), Some(1000.0));
        assert_eq!(parse_numeric_literal("0x1F"), Some(31.0));
        assert_eq!(parse_numeric_literal("0b101"), Some(5.0));
        assert_eq!(parse_numeric_literal("0o17"), Some(15.0));
        assert_eq!(parse_numeric_literal("017"), Some(15.0));
        assert_eq!(parse_numeric_literal("019"), Some(19.0));
        assert_eq!(parse_numeric_literal("1.5e2"), Some(150.0));
        assert_eq!(parse_numeric_literal(".5"), Some(0.5));
        assert_eq!(parse_numeric_literal("0x"), None);
    }
}
