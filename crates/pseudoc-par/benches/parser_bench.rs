use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pseudoc_lex::Lexer;
use pseudoc_par::Parser;
use pseudoc_util::Handler;

const SAMPLE: &str = "\
DECLARE Total : INTEGER
DECLARE Index : INTEGER
Total <- 0
FOR Index <- 1 TO 100
    Total <- Total + Index
NEXT Index
IF Total > 1000 THEN
    OUTPUT \"Big\"
ELSE
    OUTPUT \"Small\"
ENDIF
OUTPUT Total
";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_sample_program", |b| {
        b.iter(|| {
            let handler = Handler::new();
            let tokens = Lexer::new(black_box(SAMPLE), &handler).tokenize();
            let program = Parser::new(tokens, &handler).parse();
            black_box(program);
        });
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
