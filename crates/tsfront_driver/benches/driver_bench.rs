//! Benchmark harness for the parallel driver.
//!
//! Uses criterion for reliable benchmarking.
//! Run with: cargo bench -p tsfront_driver

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsfront_driver::Driver;
use tsfront_parser::ParserOptions;

/// Generate a unit with `num_classes` classes and matching interfaces.
fn generate_unit(index: usize, num_classes: usize) -> String {
    let mut source = String::new();
    for i in 0..num_classes {
        source.push_str(&format!(
            "export interface Model{i}<T> {{\n    id: number;\n    value: T;\n    tags?: readonly string[];\n}}\n\
             export class Store{i}<T extends Model{i}<unknown>> {{\n    private items = new Map<number, T>();\n    \
             get(id: number): T | undefined {{ return this.items.get(id); }}\n    \
             set(item: T): void {{ this.items.set(item.id, item); }}\n}}\n\
             export type Keys{i} = {{ [K in keyof Model{i}<string>]-?: `unit{index}_${{K}}` }};\n",
        ));
    }
    source
}

fn bench_check_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver_check_all");
    for units in [1usize, 8, 64] {
        let mut driver = Driver::new(ParserOptions::default());
        for index in 0..units {
            driver.add_source(format!("unit{}.ts", index), generate_unit(index, 20));
        }
        group.bench_with_input(BenchmarkId::from_parameter(units), &driver, |b, driver| {
            b.iter(|| black_box(driver.check_all().unwrap()))
        });
    }
    group.finish();
}

fn bench_thread_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver_threads");
    for threads in [1usize, 2, 4] {
        let mut driver = Driver::new(ParserOptions::default()).with_num_threads(threads);
        for index in 0..32 {
            driver.add_source(format!("unit{}.ts", index), generate_unit(index, 20));
        }
        group.bench_with_input(BenchmarkId::from_parameter(threads), &driver, |b, driver| {
            b.iter(|| black_box(driver.parse_all(|output| output.program.declarations.len()).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_check_all, bench_thread_scaling);
criterion_main!(benches);
