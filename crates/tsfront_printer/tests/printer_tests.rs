//! Printer integration tests: parse, print, reparse.

use bumpalo::Bump;
use tsfront_ast::SyntaxKind;
use tsfront_parser::{parse_source, ParserOptions};
use tsfront_printer::shape::{program_shape, DeclShape};
use tsfront_printer::{Printer, PrinterOptions};

fn print(source: &str) -> String {
    let arena = Bump::new();
    let options = ParserOptions::default();
    let output = parse_source(&arena, "input.ts", source, &options);
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    Printer::new().print_program(&output.program)
}

fn shapes(source: &str) -> Vec<DeclShape> {
    let arena = Bump::new();
    let options = ParserOptions::default();
    let output = parse_source(&arena, "input.ts", source, &options);
    assert!(output.diagnostics.is_empty(), "source:\n{}\n{:?}", source, output.diagnostics);
    program_shape(&output.program)
}

/// Printing and reparsing keeps the structure, and printing is stable.
fn assert_round_trip(source: &str) {
    let printed = print(source);
    assert_eq!(shapes(source), shapes(&printed), "printed:\n{}", printed);
    assert_eq!(printed, print(&printed));
}

#[test]
fn test_print_simple_declarations() {
    assert_eq!(print("const   x=1"), "const x = 1;\n");
    assert_eq!(print("type A=string|number"), "type A = string | number;\n");
    assert_eq!(
        print("function f<T>(a:T,...rest:T[]):T{return a}"),
        "function f<T>(a: T, ...rest: T[]): T {\n    return a;\n}\n"
    );
}

#[test]
fn test_print_class_layout() {
    let printed = print("export abstract class A<T> extends B<T> implements C { private readonly x: T; abstract m(): void; }");
    assert_eq!(
        printed,
        "export abstract class A<T> extends B<T> implements C {\n    private readonly x: T;\n    abstract m(): void;\n}\n"
    );
}

#[test]
fn test_custom_indent() {
    let arena = Bump::new();
    let parser_options = ParserOptions::default();
    let output = parse_source(&arena, "input.ts", "interface I { a: string }", &parser_options);
    let options = PrinterOptions {
        indent_str: "\t".to_string(),
        trailing_newline: false,
        ..PrinterOptions::default()
    };
    assert_eq!(Printer::with_options(options).print_program(&output.program), "interface I {\n\ta: string;\n}");
}

#[test]
fn test_print_escapes_strings() {
    assert_eq!(print(r#"const s = 'it\'s "q"';"#), "const s = \"it's \\\"q\\\"\";\n");
    assert_round_trip("const t = `a\\`b${c}\\${d}`;");
}

#[test]
fn test_round_trip_advanced_types() {
    assert_round_trip(
        r#"
        type Unwrap<T> = T extends Promise<infer U extends object> ? Unwrap<U> : T;
        type Getters<T> = { -readonly [K in keyof T as `get${Capitalize<K & string>}`]+?: () => T[K] };
        type Row = [name: string, age?: number, ...rest: boolean[]];
        type Fn = (<T>(x: T) => T) | (new () => object) | (abstract new () => void);
        type Q = typeof config.values[number];
        type N = -1 | 2n | 'a' | true | unique symbol | readonly string[];
        type L = { (x: number): string; new (x: number): L; [k: string]: unknown; readonly a?: number; m<T>(): T; get g(): number };
        "#,
    );
}

#[test]
fn test_round_trip_declarations() {
    assert_round_trip(
        r#"
        import Default, { a, b as c, type D } from './mod';
        import * as ns from "ns";
        import 'side-effect';
        export { a, c as e } from './m';
        export * as utils from 'utils';
        export type { D };
        declare const enum Flags { None = 0, A = 1 << 0, B = A | 2 }
        export default class<T> { static #count = 0; constructor(public x: T) {} get value() { return this.x; } }
        interface Manager extends Employee, Callable { reports: Employee[] }
        export function* ids(start = 0, { step = 1 }: Options = {}) { yield* range(start, step); }
        let [first, , third = 3, ...others] = list;
        export = Foo;
        "#,
    );
}

#[test]
fn test_round_trip_statements_and_expressions() {
    assert_round_trip(
        r#"
        outer: for (let i = 0, j = 10; i < j; i++, j--) { if (i % 2) continue outer; else break; }
        for await (const chunk of stream) process(chunk);
        for (const key in obj) delete obj[key];
        do x = - -x; while (x > 0)
        switch (kind) { case 'a': case 'b': f(); break; default: g(); }
        try { risky(); } catch { recover(); } finally { done(); }
        const value = obj?.a?.[0]?.(1)!.done ?? fallback;
        const typed = make<number, string>;
        const m = new Map<string, number>([[`k${i}`, 1]]);
        const arrow = async <T>(x: T): Promise<T> => ({ x, ...rest, [key]: 1, m() {} } as const);
        const regex = /ab+c/gi.test(s) ? void 0 : typeof s === 'string';
        const holes = [1, , 3, ,];
        throw new Error(`bad ${value} here`);
        "#,
    );
}

#[test]
fn test_shape_contents() {
    let shapes = shapes(
        "export interface Box<T, U> extends Base, ns.Other { value: T; (x: U): void; [k: string]: unknown }\n\
         class Stack<T> extends Array<T> implements Iterable<T> { push(item: T) {} }\n\
         enum Color { Red, Green }",
    );
    assert_eq!(shapes.len(), 3);

    let interface = &shapes[0];
    assert_eq!(interface.kind, SyntaxKind::InterfaceDeclaration);
    assert!(interface.exported);
    assert_eq!(interface.name.as_deref(), Some("Box"));
    assert_eq!(interface.type_parameters, ["T", "U"]);
    assert_eq!(interface.extends, ["Base", "ns.Other"]);
    assert_eq!(interface.members, ["value", "()", "[index]"]);

    let class = &shapes[1];
    assert_eq!(class.kind, SyntaxKind::ClassDeclaration);
    assert_eq!(class.extends, ["Array", "Iterable"]);
    assert_eq!(class.members, ["push"]);

    assert_eq!(shapes[2].members, ["Red", "Green"]);
}

#[test]
fn test_merged_interfaces_print_once() {
    let printed = print("interface A { x: number }\ninterface A { y: string }");
    assert_eq!(printed, "interface A {\n    x: number;\n    y: string;\n}\n");
}
