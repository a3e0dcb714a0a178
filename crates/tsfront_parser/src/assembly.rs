//! Program assembly: interface merging and the interface lookup map.

use bumpalo::Bump;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tsfront_ast::node::*;
use tsfront_ast::program::InterfaceMap;

/// Merge same-named top-level interfaces and build the name lookup.
///
/// Interfaces are grouped by name, exported or not. Each group of two or
/// more becomes one declaration at the position of its first member, under
/// that member's `export` if it had one; the rest of the group is dropped.
pub(crate) fn assemble<'a>(
    arena: &'a Bump,
    declarations: Vec<Declaration<'a>>,
    merge: bool,
) -> (&'a [Declaration<'a>], InterfaceMap<'a>) {
    let declarations = if merge {
        merge_interfaces(arena, declarations)
    } else {
        declarations
    };

    let mut interfaces = InterfaceMap::default();
    for declaration in &declarations {
        if let Some(interface) = declaration.as_interface() {
            interfaces.entry(interface.name.text).or_insert(interface);
        }
    }
    (tsfront_core::alloc_slice(arena, declarations), interfaces)
}

fn merge_interfaces<'a>(arena: &'a Bump, declarations: Vec<Declaration<'a>>) -> Vec<Declaration<'a>> {
    let mut groups: IndexMap<&'a str, Vec<usize>, FxBuildHasher> = IndexMap::default();
    for (index, declaration) in declarations.iter().enumerate() {
        if let Some(interface) = declaration.as_interface() {
            groups.entry(interface.name.text).or_default().push(index);
        }
    }

    let mut replaced: Vec<Option<Declaration<'a>>> = declarations.into_iter().map(Some).collect();
    for (name, indices) in groups {
        if indices.len() < 2 {
            continue;
        }
        let parts: Vec<&InterfaceDecl<'a>> = indices
            .iter()
            .filter_map(|&i| replaced[i].as_ref().and_then(Declaration::as_interface))
            .collect();
        let merged = merge_group(arena, &parts);
        tracing::debug!(interface = name, parts = parts.len(), "merged interface declarations");

        let first = indices[0];
        replaced[first] = replaced[first].map(|declaration| rewrap(arena, declaration, merged));
        for &index in &indices[1..] {
            replaced[index] = None;
        }
    }
    replaced.into_iter().flatten().collect()
}

/// One interface with the members and extends lists of every part, in
/// source order. Type parameters and modifiers come from the first part.
fn merge_group<'a>(arena: &'a Bump, parts: &[&'a InterfaceDecl<'a>]) -> &'a InterfaceDecl<'a> {
    let first = parts[0];
    let members: Vec<Member<'a>> = parts.iter().flat_map(|p| p.members.iter().copied()).collect();
    let extends: Vec<HeritageRef<'a>> = parts.iter().flat_map(|p| p.extends.iter().copied()).collect();
    let ranges = parts.iter().flat_map(|p| p.parts.iter().copied()).collect();
    arena.alloc(InterfaceDecl {
        members: tsfront_core::alloc_slice(arena, members),
        extends: tsfront_core::alloc_slice(arena, extends),
        parts: tsfront_core::alloc_slice(arena, ranges),
        ..*first
    })
}

/// Put `merged` in place of the interface inside `declaration`, keeping an
/// `export` wrapper.
fn rewrap<'a>(arena: &'a Bump, declaration: Declaration<'a>, merged: &'a InterfaceDecl<'a>) -> Declaration<'a> {
    match declaration {
        Declaration::Export(export) => match export.kind {
            ExportKind::Declaration { is_default, .. } => Declaration::Export(arena.alloc(ExportDecl {
                kind: ExportKind::Declaration {
                    declaration: Declaration::Interface(merged),
                    is_default,
                },
                ..*export
            })),
            _ => declaration,
        },
        _ => Declaration::Interface(merged),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParserOptions;
    use crate::parse_source;

    fn interface_count(declarations: &[Declaration<'_>]) -> usize {
        declarations.iter().filter(|d| d.as_interface().is_some()).count()
    }

    #[test]
    fn test_merges_same_named_interfaces() {
        let arena = Bump::new();
        let options = ParserOptions::default();
        let source = "interface A { x: number }\nclass B {}\ninterface A { y: string; z: boolean }";
        let output = parse_source(&arena, "merge.ts", source, &options);
        let program = &output.program;
        assert_eq!(program.declarations.len(), 2);
        assert_eq!(interface_count(program.declarations), 1);
        let merged = program.interface("A").unwrap();
        assert_eq!(merged.members.len(), 3);
        assert_eq!(merged.parts.len(), 2);
        assert!(merged.is_merged());
        let names: Vec<_> = merged.members.iter().filter_map(|m| m.name_text()).collect();
        assert_eq!(names, ["x", "y", "z"]);
    }

    #[test]
    fn test_exported_and_local_parts_merge() {
        let arena = Bump::new();
        let options = ParserOptions::default();
        let source = "export interface A { x: number }\ninterface A { y: number }";
        let output = parse_source(&arena, "merge.ts", source, &options);
        let declarations = output.program.declarations;
        assert_eq!(declarations.len(), 1);
        assert!(matches!(declarations[0], Declaration::Export(_)));
        let merged = declarations[0].as_interface().unwrap();
        assert_eq!(merged.members.len(), 2);
        assert_eq!(merged.parts.len(), 2);
        assert!(std::ptr::eq(merged, output.program.interface("A").unwrap()));
    }

    #[test]
    fn test_local_first_part_drops_export() {
        let arena = Bump::new();
        let options = ParserOptions::default();
        let source = "interface A { x: number }\nexport interface A { y: number }\nexport interface A { z: number }";
        let output = parse_source(&arena, "merge.ts", source, &options);
        let declarations = output.program.declarations;
        assert_eq!(declarations.len(), 1);
        assert!(matches!(declarations[0], Declaration::Interface(_)));
        assert_eq!(declarations[0].as_interface().unwrap().members.len(), 3);
    }

    #[test]
    fn test_merge_disabled_keeps_every_declaration() {
        let arena = Bump::new();
        let options = ParserOptions {
            merge_interfaces: false,
            ..ParserOptions::default()
        };
        let source = "interface A { x: number }\ninterface A { y: number }";
        let output = parse_source(&arena, "merge.ts", source, &options);
        assert_eq!(interface_count(output.program.declarations), 2);
        let first = output.program.interface("A").unwrap();
        assert_eq!(first.members.len(), 1);
        assert!(!first.is_merged());
    }

    #[test]
    fn test_merged_type_parameters_come_from_first() {
        let arena = Bump::new();
        let options = ParserOptions::default();
        let source = "interface Box<T> extends A { a: T }\ninterface Box<U, V> extends B, C { b: U }";
        let output = parse_source(&arena, "merge.ts", source, &options);
        let merged = output.program.interface("Box").unwrap();
        let params: Vec<_> = merged.type_parameters.unwrap().iter().map(|p| p.name.text).collect();
        assert_eq!(params, ["T"]);
        let extends: Vec<_> = merged.extends.iter().map(|h| h.expression.to_text()).collect();
        assert_eq!(extends, ["A", "B", "C"]);
    }
}
