use blockdown_engine::{BlockRegistry, parse_document, serialize_blocks};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let registry = BlockRegistry::new();
    let tagged = common::generate_block_document(100);
    group.bench_function("parse_tagged_document", |b| {
        b.iter(|| {
            let blocks = parse_document(&registry, std::hint::black_box(&tagged));
            std::hint::black_box(blocks);
        });
    });

    let prose = common::generate_mixed_prose(400);
    group.bench_function("parse_mixed_prose", |b| {
        b.iter(|| {
            let blocks = parse_document(&registry, std::hint::black_box(&prose));
            std::hint::black_box(blocks);
        });
    });

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");
    group.sample_size(10);

    let registry = BlockRegistry::new();
    let blocks = parse_document(&registry, &common::generate_block_document(100));
    group.bench_function("serialize_blocks", |b| {
        b.iter(|| {
            let text = serialize_blocks(&registry, std::hint::black_box(&blocks));
            std::hint::black_box(text);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_serialization);
criterion_main!(benches);
