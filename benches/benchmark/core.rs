use crate::common::{configure_criterion, lookup_user, validate_email, DomainError};
use criterion::{criterion_group, BenchmarkId, Criterion};
use outcome_rail::{success, Outcome};
use std::hint::black_box;

pub fn bench_eager_chain(c: &mut Criterion) {
    c.bench_function("core/eager_chain", |b| {
        b.iter(|| {
            black_box(
                success::<i64, DomainError>(black_box(21))
                    .map(|x| x * 2)
                    .bind(|x| success(x + 1))
                    .map(|x| x.to_string()),
            )
        })
    });
}

pub fn bench_failure_short_circuit(c: &mut Criterion) {
    c.bench_function("core/failure_short_circuit", |b| {
        b.iter(|| {
            black_box(
                lookup_user(black_box(10))
                    .bind(|user| validate_email(&user))
                    .map(|email| email.len())
                    .unwrap_or(0),
            )
        })
    });
}

pub fn bench_result_interop(c: &mut Criterion) {
    c.bench_function("core/result_roundtrip", |b| {
        b.iter(|| {
            let out: Outcome<i32, &str> = Outcome::from(black_box(Ok::<i32, &str>(7)));
            black_box(out.map(|x| x + 1).into_result())
        })
    });
}

pub fn bench_chain_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/chain_depth");

    for depth in [5, 10, 20, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut out = success::<u64, DomainError>(0);
                for _ in 0..depth {
                    out = out.bind(|x| success(x + 1));
                }
                black_box(out.unwrap_or(0))
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets =
        bench_eager_chain,
        bench_failure_short_circuit,
        bench_result_interop,
        bench_chain_depth,
}
