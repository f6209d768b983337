use criterion::{Criterion, criterion_group, criterion_main};
use markdown_sitegen_engine::{convert_document, segment};
use std::hint::black_box;
mod common;

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");
    group.sample_size(20);

    let content = common::generate_markdown_content(100);
    group.bench_function("segment_100", |b| {
        b.iter(|| {
            let blocks = segment(black_box(&content));
            black_box(blocks);
        });
    });

    group.finish();
}

fn bench_convert_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_document");
    group.sample_size(20);

    for size in [1, 10, 100] {
        let content = common::generate_markdown_content(size);
        group.bench_function(format!("convert_{size}"), |b| {
            b.iter(|| {
                let html = convert_document(black_box(&content)).unwrap();
                black_box(html);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_segment, bench_convert_document);
criterion_main!(benches);
