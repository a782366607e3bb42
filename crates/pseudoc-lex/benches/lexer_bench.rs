use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pseudoc_lex::Lexer;
use pseudoc_util::Handler;

const SAMPLE: &str = r#"
DECLARE Total : INTEGER
DECLARE Index : INTEGER
FOR Index <- 1 TO 100
    Total <- Total + Index
NEXT Index
OUTPUT Total
"#;

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_sample", |b| {
        b.iter(|| {
            let handler = Handler::new();
            let tokens = Lexer::new(black_box(SAMPLE), &handler).tokenize();
            black_box(tokens);
        })
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
