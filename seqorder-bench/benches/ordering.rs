//! Walk, resolve and render benchmarks.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqorder_bench::schemas::{chain_schema, wide_schema};
use seqorder_codegen::rust::OrderTableGenerator;
use seqorder_schema::{ResolverConfig, order_schema, resolve, walk_schema};
use std::hint::black_box;

fn benchmark_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    for types in [10, 100, 1000] {
        let xml = wide_schema(types, 10);
        group.bench_with_input(BenchmarkId::from_parameter(types), &xml, |b, xml| {
            b.iter(|| walk_schema(black_box(xml)))
        });
    }

    group.finish();
}

fn benchmark_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_chain");
    let config = ResolverConfig::default();

    for depth in [4, 16, 64] {
        let index = walk_schema(&chain_schema(depth, 5)).expect("walk");
        group.bench_with_input(BenchmarkId::from_parameter(depth), &index, |b, index| {
            b.iter(|| resolve(black_box(index.clone()), &config))
        });
    }

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let orders = order_schema(&wide_schema(500, 10), &ResolverConfig::default()).expect("order");

    c.bench_function("render_rust_table", |b| {
        b.iter(|| OrderTableGenerator::new(black_box(&orders), "BENCH").generate())
    });
}

criterion_group!(benches, benchmark_walk, benchmark_resolve, benchmark_render);
criterion_main!(benches);
