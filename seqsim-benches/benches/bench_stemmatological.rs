use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{distributions::Alphanumeric, Rng};

use seqsim::distance::{bulk_delete, fragile_ends, stemmatological};

fn generate(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stemmatological");

    let wide_ends = stemmatological::Args::wide_ends();
    for i in (2..64).step_by(2) {
        let s1 = generate(i);
        let s2 = generate(i);

        group.bench_with_input(BenchmarkId::new("bulk_delete", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(bulk_delete::distance(val.0.bytes(), val.1.bytes()));
            })
        });
        group.bench_with_input(BenchmarkId::new("fragile_ends", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(fragile_ends::distance(val.0.bytes(), val.1.bytes()));
            })
        });
        group.bench_with_input(BenchmarkId::new("stemmatological", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(stemmatological::distance_with_args(
                    val.0.bytes(),
                    val.1.bytes(),
                    &wide_ends,
                ));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
