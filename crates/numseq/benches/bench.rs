use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use numseq::{Progression, Sequence, dup_f64, dup_i64, range_by_count_i64, range_f64, range_i64};

// Number of elements produced per benchmark iteration.
const TOTAL_ELEMS: i64 = 4096;

/// Benchmarks a single sequence producer at a fixed output size.
fn bench_producer<T>(c: &mut Criterion, group_name: &str, produce: impl Fn() -> Vec<T>) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_ELEMS as u64));

    group.bench_function(format!("elems/{TOTAL_ELEMS}"), |b| {
        b.iter(|| black_box(produce()));
    });

    group.finish();
}

/// Benchmarks the generic entry points so the trait dispatch is measured
/// against the concrete functions.
fn bench_generic<T: Sequence>(c: &mut Criterion, group_name: &str, progression: Progression<T>) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(progression.len() as u64));

    group.bench_function(format!("elems/{}", progression.len()), |b| {
        b.iter(|| black_box(black_box(progression).to_vec()));
    });

    group.finish();
}

fn benchmarks(c: &mut Criterion) {
    bench_producer(c, "range/i64/ascending", || {
        range_i64(black_box(0), black_box(TOTAL_ELEMS - 1), black_box(1))
    });
    bench_producer(c, "range/i64/descending", || {
        range_i64(black_box(TOTAL_ELEMS - 1), black_box(0), black_box(1))
    });
    bench_producer(c, "range/f64", || {
        range_f64(black_box(0.0), black_box(1.0), black_box(1.0 / (TOTAL_ELEMS - 1) as f64))
    });
    bench_producer(c, "range_by_count/i64", || {
        range_by_count_i64(black_box(1), black_box(3), black_box(TOTAL_ELEMS))
    });
    bench_producer(c, "dup/i64", || dup_i64(black_box(42), black_box(TOTAL_ELEMS)));
    bench_producer(c, "dup/f64", || dup_f64(black_box(0.5), black_box(TOTAL_ELEMS)));

    bench_generic(
        c,
        "progression/step/i64",
        Progression::Step {
            first: 0_i64,
            last: TOTAL_ELEMS - 1,
            step: 1,
        },
    );
    bench_generic(
        c,
        "progression/count/f64",
        Progression::Count {
            first: 0.0_f64,
            last: 1.0,
            count: TOTAL_ELEMS,
        },
    );
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
