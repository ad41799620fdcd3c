//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package kdl-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kdl_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    let mut lexer = Lexer::new(source);
    let mut count = 0;
    loop {
        match lexer.next_token() {
            Ok((tok, _)) if tok.is_eof() => break,
            Ok(_) => count += 1,
            Err(_) => break,
        }
    }
    count
}

fn bench_lexer_nodes(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "building name=\"Tower\" floors=42 {\n  address street=\"Main St\" number=1\n}\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("single_node", |b| {
        b.iter(|| lexer_token_count(black_box("node arg1 prop=\"val\"\n")))
    });

    group.bench_function("node_with_children", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_document");

    let source = r#"
        building name="Tower" floors=42 {
            address street="Main St" number=1 city="Springfield"
            person name="Alice" age=30 {
                email "alice@example.com"
            }
            person name="Bob" age=25
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("full_document", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("node \"hello\"\n")))
    });

    group.bench_function("long_string", |b| {
        let source = "node \"This is a longer string used for benchmarking purposes.\"\n";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("block_string", |b| {
        let source = "node \"\"\"\n    line one\n    line two\n    \"\"\"\n";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("node 123456\n")))
    });

    group.bench_function("float", |b| {
        b.iter(|| lexer_token_count(black_box("node 3.14159\n")))
    });

    group.bench_function("hex", |b| {
        b.iter(|| lexer_token_count(black_box("node 0xDEADBEEF\n")))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| {
        b.iter(|| lexer_token_count(black_box("a b=1\n")))
    });

    group.bench_function("many_nodes", |b| {
        b.iter(|| {
            lexer_token_count(black_box(
                "a 1\nb 2\nc 3\nd 4\ne 5\n",
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_nodes,
    bench_lexer_document,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_identifiers
);
criterion_main!(benches);
