//! Scanner benchmarks.
//!
//! Measures the composed classify pass and the comment-stripping pass.
//! Run with: `cargo bench --package cscan-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use cscan_lex::{classify, strip_comments, DelimiterSet, TokenRecord};

fn record_count(source: &str) -> usize {
    let mut records: Vec<TokenRecord> = Vec::new();
    classify(source, &DelimiterSet::new(), &mut records);
    records.len()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let source = "int a = 42; unsigned long b = 0xFFul; long long c = 123ll;";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_decls", |b| {
        b.iter(|| record_count(black_box(source)))
    });

    group.bench_function("suffix_heavy", |b| {
        b.iter(|| {
            record_count(black_box(
                "1u 2U 3l 4L 5ll 6ul 7lu 8ull 9llu 10 0x1F 0777",
            ))
        })
    });

    group.bench_function("error_runs", |b| {
        b.iter(|| record_count(black_box("08 0x 12abc 123uu 0xG 1lll")))
    });

    group.finish();
}

fn bench_classify_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_large");

    // Repeated realistic C with comments and strings in the way.
    let unit = r#"
static unsigned long counter = 0ul;  /* running total */
int limits[] = { 0, 0x7FFF, 0777, 123456 };
const char *msg = "ignore 999 and /* this */";
// trailing note 42
"#;
    let source = unit.repeat(100);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mixed_unit_x100", |b| {
        b.iter(|| record_count(black_box(&source)))
    });

    group.finish();
}

fn bench_strip(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip");

    let line_heavy = "int a = 1; // one\nint b = 2; // two\n".repeat(50);
    let block_heavy = "f(); /* aa bb cc */ g(); /* dd */\n".repeat(50);
    let string_heavy = "s = \"// no /* comment */ here\"; t = '\\''; \n".repeat(50);

    group.throughput(Throughput::Bytes(line_heavy.len() as u64));

    group.bench_function("line_comments", |b| {
        b.iter(|| strip_comments(black_box(&line_heavy)))
    });

    group.bench_function("block_comments", |b| {
        b.iter(|| strip_comments(black_box(&block_heavy)))
    });

    group.bench_function("string_heavy", |b| {
        b.iter(|| strip_comments(black_box(&string_heavy)))
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_classify_large, bench_strip);
criterion_main!(benches);
