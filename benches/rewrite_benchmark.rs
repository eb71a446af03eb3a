use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tailrec::interpreter::{Interpreter, Value};
use tailrec::{rewrite, samples, unparse, validate};

fn bench_validate(c: &mut Criterion) {
    let func = samples::factorial_mod_k();
    c.bench_function("validate factorial_mod_k", |b| {
        b.iter(|| validate(black_box(&func)).is_ok())
    });
}

fn bench_rewrite(c: &mut Criterion) {
    let func = samples::factorial_mod_k();
    c.bench_function("rewrite factorial_mod_k", |b| {
        b.iter(|| rewrite(black_box(func.clone())))
    });
}

fn bench_unparse_rewritten(c: &mut Criterion) {
    let rewritten = rewrite(samples::factorial_mod_k());
    c.bench_function("unparse rewritten factorial_mod_k", |b| {
        b.iter(|| unparse(black_box(&rewritten)))
    });
}

fn bench_interpret_rewritten(c: &mut Criterion) {
    let rewritten = rewrite(samples::factorial_mod_k());
    c.bench_function("interpret rewritten factorial_mod_k(1, 10000, 79)", |b| {
        b.iter(|| {
            let mut interp = Interpreter::new();
            interp.define_function(rewritten.clone());
            interp
                .call(
                    "factorial_mod_k",
                    vec![Value::Int(1), Value::Int(10000), Value::Int(79)],
                )
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_validate,
    bench_rewrite,
    bench_unparse_rewritten,
    bench_interpret_rewritten
);
criterion_main!(benches);
