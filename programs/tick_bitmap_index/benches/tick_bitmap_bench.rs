use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use primitive_types::U256;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::{BTreeMap, HashMap};
use std::hint::black_box;
use tick_bitmap_index::bit_math::*;
use tick_bitmap_index::constants::{MAX_TICK, MIN_TICK};
use tick_bitmap_index::*;

/// Builds a store with `count` random spaced ticks initialized
fn populated<S: WordStore + Default>(rng: &mut StdRng, count: usize, tick_spacing: i32) -> S {
    let mut store = S::default();
    for _ in 0..count {
        let tick = compress_tick(rng.random_range(MIN_TICK..=MAX_TICK), tick_spacing) * tick_spacing;
        let _ = set_tick_initialized(&mut store, tick.max(MIN_TICK), tick_spacing, true);
    }
    store
}

// ========== Bit Scan Benchmarks ==========

fn bench_bit_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_math");
    group.throughput(Throughput::Elements(1));

    let mut rng = StdRng::seed_from_u64(7);
    let words: Vec<U256> = (0..64)
        .map(|_| U256([rng.random(), rng.random(), rng.random(), rng.random()]))
        .collect();

    group.bench_function("msb_intrinsic", |b| {
        b.iter(|| {
            for w in &words {
                black_box(most_significant_bit(black_box(*w)));
            }
        })
    });
    group.bench_function("msb_by_ranges", |b| {
        b.iter(|| {
            for w in &words {
                black_box(most_significant_bit_by_ranges(black_box(*w)));
            }
        })
    });
    group.bench_function("lsb_intrinsic", |b| {
        b.iter(|| {
            for w in &words {
                black_box(least_significant_bit(black_box(*w)));
            }
        })
    });
    group.bench_function("lsb_by_ranges", |b| {
        b.iter(|| {
            for w in &words {
                black_box(least_significant_bit_by_ranges(black_box(*w)));
            }
        })
    });

    group.finish();
}

// ========== Index Benchmarks ==========

fn bench_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("flip_tick");
    group.throughput(Throughput::Elements(1));

    let mut rng = StdRng::seed_from_u64(11);
    let store: BTreeMap<i16, U256> = populated(&mut rng, 2_000, 60);

    group.bench_function("btree_store", |b| {
        b.iter_batched(
            || store.clone(),
            |mut s| {
                flip_tick(&mut s, black_box(180), 60).unwrap();
                s
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_next_initialized(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_initialized_tick");
    group.throughput(Throughput::Elements(1));

    let mut rng = StdRng::seed_from_u64(42);
    let queries: Vec<i32> = (0..256)
        .map(|_| rng.random_range(MIN_TICK..=MAX_TICK))
        .collect();

    for density in [16usize, 1_024, 16_384] {
        let btree: BTreeMap<i16, U256> = populated(&mut rng, density, 10);
        let hash: HashMap<i16, U256> = populated(&mut rng, density, 10);

        group.bench_with_input(BenchmarkId::new("one_word_btree", density), &btree, |b, s| {
            b.iter(|| {
                for &tick in &queries {
                    let _ = black_box(next_initialized_tick_within_one_word(s, tick, 10, tick & 1 == 0));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("one_word_hash", density), &hash, |b, s| {
            b.iter(|| {
                for &tick in &queries {
                    let _ = black_box(next_initialized_tick_within_one_word(s, tick, 10, tick & 1 == 0));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("multi_word_btree", density), &btree, |b, s| {
            b.iter(|| {
                for &tick in &queries {
                    let _ = black_box(next_initialized_tick(s, tick, 10, tick & 1 == 0));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bit_math, bench_flip, bench_next_initialized);
criterion_main!(benches);
