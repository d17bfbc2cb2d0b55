//! Benchmark for the sum-type algebra: map, bind, fold, and perform.
//!
//! The interesting comparison is matching-channel work against the
//! pass-through path, which should be a plain move.

use criterion::{Criterion, criterion_group, criterion_main};
use polysum::union::{Sum2, Sum8};
use std::hint::black_box;

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    group.bench_function("matching_channel", |bencher| {
        bencher.iter(|| {
            let value: Sum2<i64, u8> = Sum2::First(black_box(5));
            black_box(value.map_first(|x| x.wrapping_mul(2)))
        });
    });

    group.bench_function("pass_through", |bencher| {
        bencher.iter(|| {
            let value: Sum2<i64, u8> = Sum2::Last(black_box(1));
            black_box(value.map_first(|x| x.wrapping_mul(2)))
        });
    });

    group.finish();
}

fn benchmark_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipeline");

    group.bench_function("map_bind_fold", |bencher| {
        bencher.iter(|| {
            let value: Sum2<i64, u8> = Sum2::First(black_box(5));
            value
                .map_first(|x| x.wrapping_add(1))
                .bind_first(|x| {
                    if x > 0 {
                        Sum2::First(x)
                    } else {
                        Sum2::Last(0)
                    }
                })
                .fold(|x| x, |b| i64::from(b))
        });
    });

    group.bench_function("widest_arity_fold", |bencher| {
        bencher.iter(|| {
            let value: Sum8<u8, u16, u32, u64, i8, i16, i32, i64> = Sum8::Fifth(black_box(-5));
            value.fold(
                |x| i64::from(x),
                |x| i64::from(x),
                |x| i64::from(x),
                |x| i64::try_from(x).unwrap_or(i64::MAX),
                |x| i64::from(x),
                |x| i64::from(x),
                |x| i64::from(x),
                |x| x,
            )
        });
    });

    group.finish();
}

fn benchmark_perform(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("perform");

    group.bench_function("matching_action", |bencher| {
        bencher.iter(|| {
            let value: Sum2<i64, u8> = Sum2::First(black_box(5));
            black_box(value.perform(Some(|x: &i64| {
                black_box(*x);
            }), None::<fn(&u8)>))
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_map, benchmark_pipeline, benchmark_perform);
criterion_main!(benches);
