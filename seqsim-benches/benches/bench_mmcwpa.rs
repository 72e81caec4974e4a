use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use seqsim::distance::mmcwpa;

/// Sequences over a small alphabet, so they share plenty of runs
fn generate(len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(b'a'..=b'f')).collect()
}

fn benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("MMCWPA");

    for i in (2..64).step_by(4) {
        let s1 = generate(i);
        let s2 = generate(i);

        group.bench_with_input(BenchmarkId::new("seqsim", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(mmcwpa::distance(val.0.iter(), val.1.iter()));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
