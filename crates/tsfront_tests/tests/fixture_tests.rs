//! Fixture tests: each file of the corpus parsed end to end.

use bumpalo::Bump;
use tsfront_ast::*;
use tsfront_diagnostics::DiagnosticKind;
use tsfront_driver::Driver;
use tsfront_parser::{parse_source, ParserOptions};
use tsfront_printer::shape::program_shape;
use tsfront_printer::Printer;
use tsfront_tests::{clean_fixtures, fixture, Fixture, FIXTURES};

fn load(name: &str) -> &'static Fixture {
    fixture(name).unwrap_or_else(|| panic!("no fixture named {}", name))
}

fn names(program: &Program<'_>) -> Vec<Option<String>> {
    program.declarations.iter().map(|d| d.name().map(str::to_string)).collect()
}

fn enum_values<'a>(program: &Program<'a>, name: &str) -> Vec<EnumValue<'a>> {
    match program.declarations_named(name).next().map(|d| d.unwrap_export()) {
        Some(Declaration::Enum(e)) => e.member_values(),
        other => panic!("{} is not an enum: {:?}", name, other),
    }
}

// ============================================================================
// Whole corpus
// ============================================================================

#[test]
fn test_clean_fixtures_have_no_diagnostics() {
    for fixture in clean_fixtures() {
        fixture.with_parsed(&ParserOptions::default(), |output| {
            assert!(output.diagnostics.is_empty(), "{}: {:?}", fixture.name, output.diagnostics);
            assert!(!output.program.is_empty(), "{}", fixture.name);
        });
    }
}

#[test]
fn test_print_and_reparse_keeps_shapes() {
    for fixture in clean_fixtures() {
        let (shapes, printed) = fixture.with_parsed(&ParserOptions::default(), |output| {
            (program_shape(&output.program), Printer::new().print_program(&output.program))
        });
        let arena = Bump::new();
        let options = ParserOptions::default();
        let output = parse_source(&arena, fixture.name, &printed, &options);
        assert!(output.diagnostics.is_empty(), "{}:\n{}\n{:?}", fixture.name, printed, output.diagnostics);
        assert_eq!(shapes, program_shape(&output.program), "{}:\n{}", fixture.name, printed);
        assert_eq!(printed, Printer::new().print_program(&output.program), "{}", fixture.name);
    }
}

#[test]
fn test_driver_over_corpus() {
    let mut driver = Driver::new(ParserOptions::default()).with_num_threads(4);
    for fixture in FIXTURES {
        driver.add_source(fixture.name, fixture.source);
    }
    let reports = driver.check_all().unwrap();
    assert_eq!(reports.len(), FIXTURES.len());
    for (report, fixture) in reports.iter().zip(FIXTURES) {
        assert_eq!(report.file_name, fixture.name);
        assert_eq!(!report.has_errors(), fixture.clean, "{}: {:?}", fixture.name, report.diagnostics);
    }
}

// ============================================================================
// Per fixture
// ============================================================================

#[test]
fn test_classes_fixture() {
    load("classes.ts").with_parsed(&ParserOptions::default(), |output| {
        let program = &output.program;
        assert_eq!(
            names(program),
            [Some("Person"), Some("Callable"), Some("Employee"), Some("Manager")].map(|n| n.map(String::from))
        );
        let shapes = program_shape(program);
        assert_eq!(
            shapes[0].members,
            ["id", "name", "age", "population", "constructor", "displayName", "greet"]
        );
        assert_eq!(shapes[2].extends, ["Person", "Callable"]);
        assert_eq!(shapes[3].members, ["#reports", "review", "addReport"]);

        let Declaration::Class(employee) = program.declarations[2] else { panic!("expected a class") };
        let Member::Method(constructor) = employee.members[0] else { panic!("expected a constructor") };
        assert_eq!(constructor.kind, MethodKind::Constructor);
        assert!(constructor.parameters[2].modifiers.contains(ModifierFlags::PUBLIC));

        let Declaration::Class(manager) = program.declarations[3] else { panic!("expected a class") };
        assert!(manager.modifiers.contains(ModifierFlags::ABSTRACT));
        let Member::Method(review) = manager.members[1] else { panic!("expected a method") };
        assert!(review.body.is_none());
    });
}

#[test]
fn test_enums_fixture() {
    load("enums.ts").with_parsed(&ParserOptions::default(), |output| {
        let program = &output.program;
        assert_eq!(program.declarations.len(), 6);
        assert_eq!(
            enum_values(program, "Color"),
            [EnumValue::Number(0.0), EnumValue::Number(1.0), EnumValue::Number(2.0)]
        );
        assert_eq!(
            enum_values(program, "Direction"),
            [1.0, 2.0, 3.0, 4.0].map(EnumValue::Number)
        );
        assert_eq!(
            enum_values(program, "Status"),
            ["ACTIVE", "INACTIVE", "PENDING"].map(EnumValue::String)
        );
        assert_eq!(
            enum_values(program, "Mixed"),
            [
                EnumValue::Number(1.0),
                EnumValue::String("SECOND"),
                EnumValue::Number(3.0),
                EnumValue::Number(4.0),
            ]
        );
        assert_eq!(
            enum_values(program, "Bits"),
            [
                EnumValue::Number(0.0),
                EnumValue::Unknown,
                EnumValue::Unknown,
                EnumValue::Number(-4.0),
                EnumValue::Number(-3.0),
            ]
        );

        let Declaration::Enum(bits) = program.declarations[4] else { panic!("expected an enum") };
        assert!(bits.is_const);
        assert!(bits.modifiers.contains(ModifierFlags::CONST));

        let ambient = program.declarations[5];
        assert!(matches!(ambient, Declaration::Export(_)));
        let Declaration::Enum(inner) = ambient.unwrap_export() else { panic!("expected an enum") };
        assert!(inner.modifiers.contains(ModifierFlags::EXPORT | ModifierFlags::AMBIENT));
    });
}

#[test]
fn test_generics_fixture() {
    load("generics.ts").with_parsed(&ParserOptions::default(), |output| {
        let program = &output.program;
        assert_eq!(program.declarations.len(), 7);

        let dictionary = program.interface("Dictionary").unwrap();
        let parameters = dictionary.type_parameters.unwrap();
        assert_eq!(parameters.len(), 2);
        assert!(matches!(parameters[0].constraint, Some(TypeNode::Union(_))));
        assert!(parameters[1].default.is_some());

        let Some(Declaration::TypeAlias(pair)) = program.declarations_named("Pair").next() else {
            panic!("expected a type alias")
        };
        let TypeNode::Tuple(tuple) = pair.type_node else { panic!("expected a tuple") };
        assert_eq!(tuple.elements.len(), 2);
        assert!(tuple.elements.iter().all(|e| e.name.is_some()));

        let Some(Declaration::Variable(boxed)) = program.declarations_named("boxed").next() else {
            panic!("expected a variable")
        };
        let Some(Expression::Call(call)) = boxed.declarations[0].initializer else { panic!("expected a call") };
        let arguments = call.type_arguments.unwrap();
        assert_eq!(arguments[0].reference_name(), Some("Container"));
    });
}

#[test]
fn test_imports_exports_fixture() {
    load("imports_exports.ts").with_parsed(&ParserOptions::default(), |output| {
        let program = &output.program;
        assert_eq!(program.declarations.len(), 19);

        let imports: Vec<&ImportDecl<'_>> = program
            .declarations
            .iter()
            .filter_map(|d| match d {
                Declaration::Import(i) => Some(*i),
                _ => None,
            })
            .collect();
        assert_eq!(imports.len(), 6);
        assert_eq!(imports[0].default_binding.map(|id| id.text), Some("Default"));
        let Some(ImportBindings::Named(specifiers)) = imports[1].bindings else { panic!("expected named imports") };
        assert_eq!(specifiers[1].property_name.map(|id| id.text), Some("b"));
        assert_eq!(specifiers[1].name.text, "c");
        assert!(specifiers[2].is_type_only);
        assert!(matches!(imports[2].bindings, Some(ImportBindings::Namespace(ns)) if ns.text == "everything"));
        assert!(imports[4].is_type_only);
        assert!(imports[5].is_side_effect_only());
        assert_eq!(imports[5].module_specifier.text, "./side-effect");

        assert!(program.interface("PublicApi").is_some());
        let exported = program.declarations.iter().filter(|d| matches!(d, Declaration::Export(_))).count();
        assert_eq!(exported, 12);

        let Declaration::Export(default) = program.declarations[17] else { panic!("expected an export") };
        assert!(matches!(default.kind, ExportKind::Declaration { is_default: true, .. }));
        assert!(matches!(program.declarations[18], Declaration::Statement(Statement::Empty(_))));
    });
}

#[test]
fn test_interfaces_fixture_merges() {
    load("interfaces.ts").with_parsed(&ParserOptions::default(), |output| {
        let program = &output.program;
        assert_eq!(program.declarations.len(), 6);
        assert_eq!(
            program.interfaces.keys().copied().collect::<Vec<_>>(),
            ["Point", "Named", "StringDictionary", "Comparator", "Labeled", "Merged"]
        );

        let merged = program.interface("Merged").unwrap();
        assert!(merged.is_merged());
        assert_eq!(merged.parts.len(), 3);
        assert_eq!(merged.members.len(), 3);
        assert_eq!(merged.extends.len(), 1);
        assert!(!merged.modifiers.contains(ModifierFlags::EXPORT));

        // The exported part joins the group; the first part is not exported.
        let named: Vec<&Declaration<'_>> = program.declarations_named("Merged").collect();
        assert_eq!(named.len(), 1);
        assert!(matches!(named[0], Declaration::Interface(_)));

        let labeled = program.interface("Labeled").unwrap();
        let bases: Vec<String> = labeled.extends.iter().map(|h| h.expression.to_text()).collect();
        assert_eq!(bases, ["Point", "Named"]);

        let comparator = program.interface("Comparator").unwrap();
        assert!(matches!(comparator.members[0], Member::CallSignature(_)));
        assert!(matches!(comparator.members[1], Member::ConstructSignature(_)));
    });
}

#[test]
fn test_interfaces_fixture_without_merging() {
    let options = ParserOptions {
        merge_interfaces: false,
        ..ParserOptions::default()
    };
    load("interfaces.ts").with_parsed(&options, |output| {
        assert_eq!(output.program.declarations.len(), 8);
        let first = output.program.interface("Merged").unwrap();
        assert!(!first.is_merged());
        assert_eq!(first.members.len(), 1);
    });
}

#[test]
fn test_advanced_types_fixture() {
    load("advanced_types.ts").with_parsed(&ParserOptions::default(), |output| {
        let program = &output.program;
        assert_eq!(program.declarations.len(), 17);
        let alias = |name: &str| match program.declarations_named(name).next() {
            Some(Declaration::TypeAlias(alias)) => alias.type_node,
            other => panic!("{} is not a type alias: {:?}", name, other),
        };

        assert!(matches!(alias("IsString"), TypeNode::Conditional(_)));
        assert!(matches!(alias("EventName"), TypeNode::TemplateLiteral(_)));
        assert!(matches!(alias("Optional"), TypeNode::Intersection(_)));
        assert!(matches!(alias("DeepReadonly"), TypeNode::Mapped(_)));
        assert!(matches!(alias("Json"), TypeNode::Union(u) if u.types.len() == 6));
        assert!(matches!(alias("Ctor"), TypeNode::Function(_)));

        let TypeNode::Mapped(mutable) = alias("Mutable") else { panic!("expected a mapped type") };
        assert_eq!(mutable.readonly_modifier, Some(MappedModifier::Minus));
        assert_eq!(mutable.question_modifier, Some(MappedModifier::Minus));

        let TypeNode::Mapped(getters) = alias("Getters") else { panic!("expected a mapped type") };
        assert!(getters.name_type.is_some());

        let TypeNode::Conditional(route) = alias("RouteParams") else { panic!("expected a conditional type") };
        assert!(matches!(route.false_type, TypeNode::Conditional(_)));
    });
}

#[test]
fn test_recovery_fixture() {
    load("recovery.ts").with_parsed(&ParserOptions::default(), |output| {
        assert_eq!(
            names(&output.program),
            [Some("before"), Some("AlsoFine"), Some("after")].map(|n| n.map(String::from))
        );
        let diagnostics = &output.diagnostics;
        assert_eq!(diagnostics.len(), 2, "{:?}", diagnostics);

        assert_eq!(diagnostics[0].code, 1110);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::TypeSyntaxError);
        assert_eq!(diagnostics[0].start.map(|lc| lc.line), Some(2));
        assert!(diagnostics[0].to_string().starts_with("recovery.ts(3,"));

        assert_eq!(diagnostics[1].code, 1003);
        assert_eq!(diagnostics[1].start.map(|lc| lc.line), Some(8));
    });
}
