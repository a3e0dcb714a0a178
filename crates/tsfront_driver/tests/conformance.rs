//! TypeScript conformance harness.
//!
//! Runs the driver over TypeScript's own test cases and verifies that every
//! file parses without panicking and that every diagnostic lands inside its
//! file. Point `TS_TEST_SUITE_PATH` at a checkout's `tests/cases`:
//!   TS_TEST_SUITE_PATH=/path/to/TypeScript/tests/cases
//!
//! Without this variable, the suite test is skipped.

use std::path::{Path, PathBuf};

use tsfront_driver::{Driver, UnitReport};
use tsfront_parser::ParserOptions;

const MAX_FILES: usize = 2000;

fn get_ts_test_suite_path() -> Option<PathBuf> {
    std::env::var("TS_TEST_SUITE_PATH").ok().map(PathBuf::from)
}

/// Collect `.ts` files (not `.d.ts`) below `dir`, up to `max_files`.
fn collect_ts_files(dir: &Path, files: &mut Vec<PathBuf>, max_files: usize) {
    let Ok(entries) = std::fs::read_dir(dir) else { return };
    let mut paths: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
    paths.sort();
    for path in paths {
        if files.len() >= max_files {
            return;
        }
        if path.is_dir() {
            collect_ts_files(&path, files, max_files);
        } else if path.extension().is_some_and(|ext| ext == "ts") && !path.to_string_lossy().ends_with(".d.ts") {
            files.push(path);
        }
    }
}

/// Parse one file, turning a panic into an error message.
fn run_file(path: &Path) -> Result<UnitReport, String> {
    let mut driver = Driver::new(ParserOptions::default());
    driver.add_file(path).map_err(|e| e.to_string())?;
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| driver.check_all()));
    match result {
        Ok(Ok(mut reports)) => reports.pop().ok_or_else(|| "no report".to_string()),
        Ok(Err(e)) => Err(e.to_string()),
        Err(panic) => Err(panic
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
            .unwrap_or_else(|| "unknown panic".to_string())),
    }
}

#[test]
fn test_conformance_suite() {
    let Some(root) = get_ts_test_suite_path() else {
        eprintln!("TS_TEST_SUITE_PATH not set, skipping conformance suite");
        return;
    };
    let mut files = Vec::new();
    collect_ts_files(&root, &mut files, MAX_FILES);

    let mut panics = Vec::new();
    let mut clean = 0usize;
    for path in &files {
        match run_file(path) {
            Ok(report) => {
                let len = std::fs::metadata(path).map(|m| m.len() as u32).unwrap_or(u32::MAX);
                for diagnostic in &report.diagnostics {
                    assert!(diagnostic.span.start <= len, "{}: {}", report.file_name, diagnostic);
                }
                if !report.has_errors() {
                    clean += 1;
                }
            }
            Err(message) => panics.push(format!("{}: {}", path.display(), message)),
        }
    }
    eprintln!("conformance: {} files, {} without diagnostics", files.len(), clean);
    assert!(panics.is_empty(), "parser failures:\n{}", panics.join("\n"));
}

// ============================================================================
// Inline conformance samples
// ============================================================================

/// Check inline samples through the driver; each must parse cleanly.
fn assert_all_clean(samples: &[&str]) {
    let mut driver = Driver::new(ParserOptions::default());
    for (i, sample) in samples.iter().enumerate() {
        driver.add_source(format!("sample{}.ts", i), *sample);
    }
    for (report, sample) in driver.check_all().unwrap().iter().zip(samples) {
        assert!(!report.has_errors(), "{}\n{:?}", sample, report.diagnostics);
    }
}

#[test]
fn test_conformance_variable_declarations() {
    assert_all_clean(&[
        "var x;",
        "let y: number = 1, z = 'a';",
        "const { a, b: { c } = {}, ...rest } = obj;",
        "declare let ambient: string;",
        "let definite!: Map<string, number[]>;",
        "using handle = open();",
    ]);
}

#[test]
fn test_conformance_function_declarations() {
    assert_all_clean(&[
        "function f() {}",
        "function g(this: Window, a?: number, ...rest: string[]): void {}",
        "async function* h(): AsyncGenerator<number> { yield await 1; }",
        "export default function () {}",
        "function assertIsString(v: unknown): asserts v is string {}",
        "declare function overload(x: string): string;\ndeclare function overload(x: number): number;",
    ]);
}

#[test]
fn test_conformance_class_declarations() {
    assert_all_clean(&[
        "class A {}",
        "class B<T extends object = {}> extends A implements I, J<T> {}",
        "abstract class C { protected abstract readonly x: number; static override m?(): void; }",
        "class D { accessor value = 1; declare readonly brand: unique symbol; }",
        "class E { #p = 1; get #q() { return this.#p; } }",
        "class F { constructor(private readonly a: string, protected b = 2) {} }",
    ]);
}

#[test]
fn test_conformance_type_constructs() {
    assert_all_clean(&[
        "type A = keyof typeof obj;",
        "type B<T> = T extends [infer H, ...infer R] ? [H, ...B<R>] : [];",
        "type C = { readonly [K in 'a' | 'b']-?: K };",
        "type D = `${number}px` | `${Uppercase<'a'>}-${string}`;",
        "type E = new (...args: any[]) => object;",
        "type F = Parameters<typeof fn>[0]['key'];",
        "type G<in out T> = { value: T };",
    ]);
}

#[test]
fn test_conformance_expression_constructs() {
    assert_all_clean(&[
        "a ??= b ||= c &&= d;",
        "const r = x! as unknown as string;",
        "const s = obj satisfies Record<string, number>;",
        "label: while (true) { break label; }",
        "const t = tag<string>`x${1}y`;",
        "const u = <T,>(x: T) => x;",
        "new.target;",
        "import.meta.url;",
        "await import('./lazy');",
    ]);
}
