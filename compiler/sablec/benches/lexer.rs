//! Throughput benchmark over the Sable lexer.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use sable_lexer::tokenize;

const SAMPLE: &str = "\
def fib(n):
    if n < 2:
        return n
    return fib(n - 1) + fib(n - 2)

def main():
    x = 0
    while x < 10:
        x = x + 1
    return fib(x)
";

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_sample", |b| {
        b.iter(|| tokenize(black_box(SAMPLE)).count());
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
