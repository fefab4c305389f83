use calcexpr::{calculate, parse, Evaluator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::*;

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let evaluator = Evaluator::default();

    let expr = "2 + 3";
    let parsed = parse(expr).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("calculate_arithmetic", |b| {
        b.iter(|| calculate(black_box(expr)))
    });

    group.bench_function("preparsed_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(&parsed)))
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0) + black_box(3.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let evaluator = Evaluator::default();

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";
    let parsed = parse(expr).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("calculate_complex_arithmetic", |b| {
        b.iter(|| calculate(black_box(expr)))
    });

    group.bench_function("preparsed_complex_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(&parsed)))
    });

    group.bench_function("native_rust_complex_arithmetic", |b| {
        b.iter(|| black_box((10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0))
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_complex_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_complex_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark builtin function calls and constants
fn benchmark_function_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("Function Call Evaluation");

    let evaluator = Evaluator::default();

    let expr = "sqrt(16) + max(sin(pi / 6), 0.25)";
    let parsed = parse(expr).unwrap();

    group.bench_function("calculate_function_call", |b| {
        b.iter(|| calculate(black_box(expr)))
    });

    group.bench_function("preparsed_function_call", |b| {
        b.iter(|| evaluator.evaluate(black_box(&parsed)))
    });

    group.bench_function("native_rust_function_call", |b| {
        b.iter(|| {
            black_box(16.0f64).sqrt() + (black_box(std::f64::consts::PI) / 6.0).sin().max(0.25)
        })
    });

    group.bench_function("meval_function_call", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });
}

/// Benchmark parallel batch evaluation
fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Evaluation");

    let expressions: Vec<String> = (0..1000)
        .map(|i| format!("({} + 1) * 2 ^ 3 % 7 | {}", i, i & 15))
        .collect();

    group.bench_function("calculate_all", |b| {
        b.iter(|| calcexpr::calculate_all(black_box(&expressions)))
    });

    group.bench_function("calculate_sequential", |b| {
        b.iter(|| {
            black_box(&expressions)
                .iter()
                .map(|expr| calculate(expr))
                .collect::<Vec<_>>()
        })
    });
}

/// Grouping benchmarks
criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_function_calls,
    benchmark_batch,
);
criterion_main!(benches);
