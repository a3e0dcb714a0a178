use bumpalo::Bump;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tsfront_parser::{parse_source, ParserOptions};

// Declarations, classes and statements.
const DECLARATION_SOURCE: &str = r#"
import { EventEmitter } from "./events";
import type { Logger } from "./logging";

export interface Order {
    readonly id: string;
    customer: Customer;
    lines: OrderLine[];
    placedAt?: Date;
}

interface Customer {
    id: string;
    name: string;
    tier: "basic" | "gold";
}

interface OrderLine {
    sku: string;
    quantity: number;
    unitPrice: number;
}

export enum OrderState {
    Draft,
    Placed,
    Shipped,
    Cancelled = 10,
}

export class OrderBook extends EventEmitter {
    private readonly orders = new Map<string, Order>();
    static instances = 0;

    constructor(private logger: Logger, public region: string = "eu") {
        super();
        OrderBook.instances++;
    }

    get size(): number {
        return this.orders.size;
    }

    add(order: Order): void {
        if (this.orders.has(order.id)) {
            throw new Error(`duplicate order ${order.id}`);
        }
        this.orders.set(order.id, order);
        this.emit("added", order);
    }

    total(id: string): number {
        const order = this.orders.get(id);
        let sum = 0;
        for (const line of order?.lines ?? []) {
            sum += line.quantity * line.unitPrice;
        }
        return order?.customer.tier === "gold" ? sum * 0.9 : sum;
    }

    async snapshot(filter: (o: Order) => boolean = () => true): Promise<Order[]> {
        const result: Order[] = [];
        for (const [, order] of this.orders) {
            if (filter(order)) result.push({ ...order });
        }
        this.logger.info("exported", { count: result.length });
        return result;
    }
}

function parseQuantity(raw: string): number {
    const value = Number.parseInt(raw, 10);
    switch (true) {
        case Number.isNaN(value):
            return 0;
        case value < 0:
            return -value;
        default:
            return value;
    }
}

export const book = new OrderBook(console as unknown as Logger);
"#;

// Generic and conditional types of the kind found in utility libraries.
const TYPE_SOURCE: &str = r#"
type DeepReadonly<T> = T extends (infer U)[]
    ? ReadonlyArray<DeepReadonly<U>>
    : T extends object
        ? { readonly [K in keyof T]: DeepReadonly<T[K]> }
        : T;

type EventName<T extends string> = `on${Capitalize<T>}`;
type Handlers<T> = { [K in keyof T as EventName<K & string>]?: (value: T[K]) => void };

type Head<T extends unknown[]> = T extends [infer H, ...unknown[]] ? H : never;
type Tail<T extends unknown[]> = T extends [unknown, ...infer R] ? R : [];
type Zip<A extends unknown[], B extends unknown[]> = A extends []
    ? []
    : [[Head<A>, Head<B>], ...Zip<Tail<A>, Tail<B>>];

interface Repository<T, K extends keyof T = keyof T> {
    [key: string]: unknown;
    (query: Partial<T>): Promise<T[]>;
    new (seed: readonly T[]): Repository<T, K>;
    find<R = T>(key: T[K]): R | undefined;
    readonly size: number;
}

enum Direction { Up = 1, Down, Left, Right }
const enum Flags { None = 0, A = 1 << 0, B = 1 << 1, AB = A | B }

declare function pipe<A, B, C>(ab: (a: A) => B, bc: (b: B) => C): (a: A) => C;
const compose = pipe<number, string, boolean>(n => `${n}`, s => s.length > 0);
"#;

fn bench_parse(c: &mut Criterion) {
    let options = ParserOptions::default();
    c.bench_function("parse_declarations", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let output = parse_source(&arena, "bench.ts", black_box(DECLARATION_SOURCE), &options);
            black_box(output.program.declarations.len());
        });
    });
    c.bench_function("parse_advanced_types", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let output = parse_source(&arena, "types.ts", black_box(TYPE_SOURCE), &options);
            black_box(output.program.declarations.len());
        });
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
