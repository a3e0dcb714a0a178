//! Structural summaries of top-level declarations.
//!
//! A shape ignores positions and formatting, so two programs that differ only
//! in layout (for example a program and its printed form) have equal shapes.

use tsfront_ast::*;

/// Kind, names and member names of one top-level item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclShape {
    /// Kind of the declaration, looking through `export`.
    pub kind: SyntaxKind,
    pub exported: bool,
    pub name: Option<String>,
    /// Member names in order. Unnamed members are written as `[index]`,
    /// `()` and `new()`.
    pub members: Vec<String>,
    pub type_parameters: Vec<String>,
    /// `extends` then `implements` targets, as dotted names.
    pub extends: Vec<String>,
}

impl DeclShape {
    fn new(kind: SyntaxKind, exported: bool, name: Option<&str>) -> Self {
        Self {
            kind,
            exported,
            name: name.map(str::to_string),
            members: Vec::new(),
            type_parameters: Vec::new(),
            extends: Vec::new(),
        }
    }
}

/// Shapes of every top-level item of `program`, in order.
pub fn program_shape(program: &Program<'_>) -> Vec<DeclShape> {
    program.declarations.iter().map(declaration_shape).collect()
}

pub fn declaration_shape(declaration: &Declaration<'_>) -> DeclShape {
    let exported = matches!(declaration, Declaration::Export(_));
    let inner = declaration.unwrap_export();
    let mut shape = DeclShape::new(inner.kind(), exported, declaration.name());
    match inner {
        Declaration::Class(class) => {
            shape.members = member_names(class.members);
            shape.type_parameters = type_parameter_names(class.type_parameters);
            shape.extends = class
                .extends
                .iter()
                .chain(class.implements)
                .map(|h| h.expression.to_text())
                .collect();
        }
        Declaration::Interface(interface) => {
            shape.members = member_names(interface.members);
            shape.type_parameters = type_parameter_names(interface.type_parameters);
            shape.extends = interface.extends.iter().map(|h| h.expression.to_text()).collect();
        }
        Declaration::Enum(e) => {
            shape.members = e
                .members
                .iter()
                .map(|m| m.name.text().unwrap_or("[computed]").to_string())
                .collect();
        }
        Declaration::Function(function) => {
            shape.type_parameters = type_parameter_names(function.type_parameters);
            shape.members = function
                .parameters
                .iter()
                .map(|p| p.name.as_identifier().unwrap_or("[pattern]").to_string())
                .collect();
        }
        Declaration::TypeAlias(alias) => {
            shape.type_parameters = type_parameter_names(alias.type_parameters);
            if let TypeNode::TypeLiteral(literal) = alias.type_node {
                shape.members = member_names(literal.members);
            }
        }
        Declaration::Variable(variable) => {
            shape.members = variable
                .declarations
                .iter()
                .map(|d| d.name.as_identifier().unwrap_or("[pattern]").to_string())
                .collect();
        }
        Declaration::Import(import) => {
            shape.name = Some(import.module_specifier.text.to_string());
            shape.members = import.default_binding.iter().map(|id| id.text.to_string()).collect();
            match import.bindings {
                Some(ImportBindings::Named(specifiers)) => {
                    shape.members.extend(specifiers.iter().map(|s| s.name.text.to_string()));
                }
                Some(ImportBindings::Namespace(name)) => shape.members.push(format!("* as {}", name.text)),
                None => {}
            }
        }
        Declaration::Export(export) => {
            if let ExportKind::Named { specifiers, .. } = export.kind {
                shape.members = specifiers.iter().map(|s| s.name.text.to_string()).collect();
            }
        }
        Declaration::Statement(_) => {}
    }
    shape
}

fn member_names(members: &[Member<'_>]) -> Vec<String> {
    members
        .iter()
        .map(|member| match member {
            Member::IndexSignature(_) => "[index]".to_string(),
            Member::CallSignature(_) => "()".to_string(),
            Member::ConstructSignature(_) => "new()".to_string(),
            _ => member.name_text().unwrap_or("[computed]").to_string(),
        })
        .collect()
}

fn type_parameter_names(parameters: Option<&[TypeParameter<'_>]>) -> Vec<String> {
    parameters
        .unwrap_or_default()
        .iter()
        .map(|p| p.name.text.to_string())
        .collect()
}
