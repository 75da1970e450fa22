use core::num::NonZeroUsize;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tiercache_rs::{EvictionPolicy, LfuTier, LruTier, Tier, TieredCache};

fn make_lru<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> LruTier<K, V> {
    LruTier::new(NonZeroUsize::new(cap).unwrap())
}

fn make_lfu<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> LfuTier<K, V> {
    LfuTier::new(NonZeroUsize::new(cap).unwrap())
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const TIER_SIZE: usize = 1000;
    let mut group = c.benchmark_group("Tier Operations");

    // LRU tier benchmarks
    {
        let tier = make_lru(TIER_SIZE);
        for i in 0..TIER_SIZE {
            tier.put(i, i);
        }

        group.bench_function("LRU get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(tier.get(&(i % TIER_SIZE)));
                }
            });
        });

        group.bench_function("LRU get miss", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(tier.get(&(i + TIER_SIZE)));
                }
            });
        });

        group.bench_function("LRU put evicting", |b| {
            let mut next = TIER_SIZE;
            b.iter(|| {
                for _ in 0..100 {
                    black_box(tier.put(next, next));
                    next += 1;
                }
            });
        });
    }

    // LFU tier benchmarks
    {
        let tier = make_lfu(TIER_SIZE);
        for i in 0..TIER_SIZE {
            tier.put(i, i);
        }

        group.bench_function("LFU get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(tier.get(&(i % TIER_SIZE)));
                }
            });
        });

        group.bench_function("LFU put evicting", |b| {
            let mut next = TIER_SIZE;
            b.iter(|| {
                for _ in 0..100 {
                    black_box(tier.put(next, next));
                    next += 1;
                }
            });
        });
    }

    group.finish();

    let mut group = c.benchmark_group("Hierarchy Operations");

    {
        let cache: TieredCache<usize, usize> = TieredCache::new();
        cache.add_tier(TIER_SIZE, EvictionPolicy::Lru).unwrap();
        cache.add_tier(TIER_SIZE / 2, EvictionPolicy::Lfu).unwrap();
        for i in 0..TIER_SIZE {
            cache.put(i, i).unwrap();
        }

        group.bench_function("tiered get tier-0 hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % TIER_SIZE)));
                }
            });
        });

        group.bench_function("tiered get total miss", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i + 2 * TIER_SIZE)));
                }
            });
        });

        group.bench_function("tiered put", |b| {
            let mut next = TIER_SIZE;
            b.iter(|| {
                for _ in 0..100 {
                    black_box(cache.put(next, next).unwrap());
                    next += 1;
                }
            });
        });

        group.bench_function("tiered snapshot", |b| {
            b.iter(|| {
                black_box(cache.snapshot());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
