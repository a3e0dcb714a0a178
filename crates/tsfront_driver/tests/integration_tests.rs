//! Driver integration tests.
//!
//! End-to-end runs of the parallel driver: many units in, one report per
//! unit out, in insertion order.

use tsfront_ast::Declaration;
use tsfront_diagnostics::DiagnosticKind;
use tsfront_driver::{Driver, UnitReport};
use tsfront_parser::ParserOptions;

/// Helper: check a list of (name, source) units with default options.
fn check(units: &[(&str, &str)]) -> Vec<UnitReport> {
    let mut driver = Driver::new(ParserOptions::default());
    for (name, source) in units {
        driver.add_source(*name, *source);
    }
    driver.check_all().unwrap()
}

// ============================================================================
// Reports
// ============================================================================

#[test]
fn test_single_clean_unit() {
    let reports = check(&[("a.ts", "interface A { x: number }\nconst a: A = { x: 1 };")]);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].file_name, "a.ts");
    assert_eq!(reports[0].declaration_count, 2);
    assert!(!reports[0].has_errors());
}

#[test]
fn test_reports_keep_insertion_order() {
    let sources: Vec<(String, String)> = (0..64)
        .map(|i| {
            let body = (0..i % 7).map(|j| format!("const v{} = {};\n", j, j)).collect::<String>();
            (format!("unit{}.ts", i), body)
        })
        .collect();
    let units: Vec<(&str, &str)> = sources.iter().map(|(n, s)| (n.as_str(), s.as_str())).collect();
    let reports = check(&units);
    assert_eq!(reports.len(), 64);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.file_name, format!("unit{}.ts", i));
        assert_eq!(report.declaration_count, i % 7);
    }
}

#[test]
fn test_errors_stay_with_their_unit() {
    let reports = check(&[
        ("good.ts", "type A = string;"),
        ("bad.ts", "type B = ;\nconst ok = 1;"),
        ("empty.ts", ""),
    ]);
    assert!(!reports[0].has_errors());

    assert_eq!(reports[1].diagnostics.len(), 1);
    assert_eq!(reports[1].diagnostics[0].kind, DiagnosticKind::TypeSyntaxError);
    assert_eq!(reports[1].diagnostics[0].file, "bad.ts");
    assert_eq!(reports[1].declaration_count, 1);

    assert_eq!(reports[2].diagnostics[0].code, 9901);
    assert_eq!(reports[2].declaration_count, 0);
}

#[test]
fn test_deep_nesting_on_pool_threads() {
    let depth = 180;
    let source = format!("type T = {}x{};", "Array<".repeat(depth), ">".repeat(depth));
    let reports = check(&[("deep.ts", &source)]);
    assert!(!reports[0].has_errors(), "{:?}", reports[0].diagnostics);
}

// ============================================================================
// Custom mapping
// ============================================================================

#[test]
fn test_parse_all_maps_outputs() {
    let mut driver = Driver::new(ParserOptions::default()).with_num_threads(2);
    driver.add_source("a.ts", "interface A { x: number }\ninterface A { y: string }");
    driver.add_source("b.ts", "export interface B {}\nclass C {}");
    let names = driver
        .parse_all(|output| {
            output
                .program
                .declarations
                .iter()
                .filter_map(|d| match d.unwrap_export() {
                    Declaration::Interface(i) => Some((i.name.text.to_string(), i.members.len())),
                    _ => None,
                })
                .collect::<Vec<_>>()
        })
        .unwrap();
    assert_eq!(names, vec![vec![("A".to_string(), 2)], vec![("B".to_string(), 0)]]);
}

#[test]
fn test_options_apply_to_every_unit() {
    let options = ParserOptions {
        merge_interfaces: false,
        ..ParserOptions::default()
    };
    let mut driver = Driver::new(options);
    driver.add_source("a.ts", "interface A {}\ninterface A {}");
    driver.add_source("b.ts", "interface B {}\ninterface B {}\ninterface B {}");
    let counts: Vec<usize> = driver.check_all().unwrap().iter().map(|r| r.declaration_count).collect();
    assert_eq!(counts, [2, 3]);
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_add_file_reads_from_disk() {
    let dir = std::env::temp_dir().join(format!("tsfront_driver_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let text_path = dir.join("text.ts");
    let binary_path = dir.join("binary.ts");
    std::fs::write(&text_path, "enum E { A, B }").unwrap();
    std::fs::write(&binary_path, [0x63, 0x6f, 0xff, 0x00]).unwrap();

    let mut driver = Driver::new(ParserOptions::default());
    driver.add_file(&text_path).unwrap();
    driver.add_file(&binary_path).unwrap();
    let reports = driver.check_all().unwrap();
    std::fs::remove_dir_all(&dir).ok();

    assert_eq!(reports[0].declaration_count, 1);
    assert!(!reports[0].has_errors());
    assert_eq!(reports[1].diagnostics.len(), 1);
    assert_eq!(reports[1].diagnostics[0].code, 1490);
    assert_eq!(reports[1].diagnostics[0].span.start, 2);
}
