//! Benchmarks for the full-scan highlight and find paths.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use carve_buffer::TextBuffer;
use carve_syntax::{find, ColorOverrides, Highlighter};

/// Generates C-flavored source text for benchmarking.
fn generate_source(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("int value_{i} = {i} + 1; // line {i}\n"))
        .collect()
}

/// Benchmarks the full-document highlight re-scan at several sizes.
fn bench_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight");
    let highlighter = Highlighter::for_extension("c").unwrap();
    let overrides = ColorOverrides::new();

    for size in [100, 1000, 5000].iter() {
        let text = generate_source(*size);

        group.bench_with_input(BenchmarkId::new("full_scan", size), &text, |b, text| {
            b.iter(|| {
                let spans = highlighter.highlight(black_box(text), &overrides);
                black_box(spans)
            })
        });
    }

    group.finish();
}

/// Benchmarks the literal find scan.
fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    let text = generate_source(5000);

    group.bench_function("common_needle", |b| {
        b.iter(|| {
            let spans = find(black_box(&text), black_box("value"));
            black_box(spans)
        })
    });

    group.bench_function("absent_needle", |b| {
        b.iter(|| {
            let spans = find(black_box(&text), black_box("xyzzy"));
            black_box(spans)
        })
    });

    group.finish();
}

/// Benchmarks snapshot capture and undo on an editor-sized buffer.
fn bench_snapshot_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_history");
    let base_text = generate_source(1000);

    group.bench_function("insert_with_capture", |b| {
        b.iter_with_setup(
            || TextBuffer::from(base_text.as_str()),
            |mut buffer| {
                let mid = buffer.len_chars() / 2;
                buffer.insert(mid, black_box("edit")).unwrap();
                black_box(buffer)
            },
        )
    });

    group.bench_function("undo_single", |b| {
        b.iter_with_setup(
            || {
                let mut buffer = TextBuffer::from(base_text.as_str());
                buffer.insert(0, "edit").unwrap();
                buffer
            },
            |mut buffer| {
                buffer.undo();
                black_box(buffer)
            },
        )
    });

    group.finish();
}

criterion_group!(benches, bench_highlight, bench_find, bench_snapshot_history);
criterion_main!(benches);
