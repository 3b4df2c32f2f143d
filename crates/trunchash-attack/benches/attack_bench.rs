//! Searcher benchmarks over a 16-bit truncated domain
//!
//! Both strategies get the same domain width and a fixed seed, so runs
//! are comparable across changes to the hash plumbing.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use trunchash_attack::AttackConfig;
use trunchash_attack::app::{bigspace, smallspace};

fn bench_bigspace(c: &mut Criterion) {
    let config = AttackConfig::new(16, 1 << 20, 10).unwrap();

    c.bench_function("bigspace_16bit", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(7);
            bigspace::search(&config, &mut rng)
        })
    });
}

fn bench_smallspace(c: &mut Criterion) {
    let config = AttackConfig::new(16, 1 << 20, 10).unwrap();

    c.bench_function("smallspace_16bit", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(7);
            smallspace::search(&config, &mut rng)
        })
    });
}

criterion_group!(benches, bench_bigspace, bench_smallspace);
criterion_main!(benches);
