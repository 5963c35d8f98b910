//! Factory Benchmarks
//!
//! Cost of the configuration path (describe, store, build) next to the cost
//! of the modules it produces.
//!
//! Run with: cargo bench -p fec-factory --bench factory_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use fec_factory::prelude::*;

fn bch_args(k: usize, n: usize) -> (BchEncoderParams, ArgumentMap) {
    let params = BchEncoderParams::default();
    let mut args = ArgumentMap::new();
    params.get_description(&mut args);
    args.set("K", k.to_string());
    args.set("N", n.to_string());
    (params, args)
}

// ============================================================================
// Configuration path
// ============================================================================

fn bench_describe_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("configuration");

    group.bench_function("describe", |b| {
        let params = BchEncoderParams::default();
        b.iter(|| {
            let mut args = ArgumentMap::new();
            black_box(&params).get_description(&mut args);
            args
        })
    });

    group.bench_function("store", |b| {
        let (params, args) = bch_args(120, 127);
        b.iter(|| {
            let mut p = params.clone();
            p.store(black_box(&args)).map(|_| p)
        })
    });

    group.bench_function("headers", |b| {
        let (mut params, args) = bch_args(120, 127);
        let _ = params.store(&args);
        b.iter(|| {
            let mut headers = Headers::new();
            black_box(&params).get_headers(&mut headers, true);
            headers
        })
    });

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for (n, t) in [(127usize, 1usize), (255, 4), (1023, 8)] {
        let Ok(gf) = BchPolynomialGenerator::new(n, t) else {
            continue;
        };
        let (mut params, args) = bch_args(gf.k(), n);
        if params.store(&args).is_err() {
            continue;
        }
        group.bench_with_input(BenchmarkId::new("bch", n), &gf, |b, gf| {
            b.iter(|| params.build::<B>(black_box(gf)))
        });
        group.bench_with_input(BenchmarkId::new("polynomial", n), &(n, t), |b, &(n, t)| {
            b.iter(|| BchPolynomialGenerator::new(black_box(n), t))
        });
    }

    group.finish();
}

// ============================================================================
// Built modules
// ============================================================================

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("bch_encode");

    for (n, t) in [(127usize, 1usize), (255, 4), (1023, 8)] {
        let Ok(gf) = BchPolynomialGenerator::new(n, t) else {
            continue;
        };
        let (mut params, args) = bch_args(gf.k(), n);
        if params.store(&args).is_err() {
            continue;
        }
        let Ok(mut encoder) = params.build::<B>(&gf) else {
            continue;
        };
        let u_k: Vec<B> = (0..gf.k()).map(|i| B::from_bool(i % 3 == 1)).collect();
        let mut x_n = vec![B::ZERO; n];

        group.throughput(Throughput::Elements(gf.k() as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| encoder.encode(black_box(&u_k), &mut x_n))
        });
    }

    group.finish();
}

fn bench_frozen_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("frozen_bits_bec");

    for m in [6u32, 10, 14] {
        let mut params = FrozenbitsMkParams::default();
        params.n_cw = 1 << m;
        params.k = params.n_cw / 2;
        params.sigma = Some(0.8);
        params.kind = "BEC".to_string();
        let Ok(generator) = params.build() else {
            continue;
        };
        group.bench_function(BenchmarkId::from_parameter(params.n_cw), |b| {
            b.iter(|| generator.frozen_bits())
        });
    }

    group.finish();
}

criterion_group!(config_benches, bench_describe_store, bench_build);
criterion_group!(module_benches, bench_encode, bench_frozen_bits);
criterion_main!(config_benches, module_benches);
