use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use natal::{angles, planets};

const J2000_MS: f64 = 946_728_000_000.0;
/// About fifty years either side of J2000.0
const SPAN_MS: f64 = 50.0 * 365.25 * 86_400_000.0;

fn bench_planets(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    c.bench_function("planets/j2000", |b| {
        b.iter(|| black_box(planets(black_box(J2000_MS)).unwrap()))
    });

    c.bench_function("planets/random_instants", |b| {
        b.iter_batched(
            || {
                (0..1_000)
                    .map(|_| J2000_MS + rng.random_range(-SPAN_MS..SPAN_MS))
                    .collect::<Vec<_>>()
            },
            |instants| {
                for ms in instants {
                    black_box(planets(black_box(ms)).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_angles(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xA5C);

    c.bench_function("angles/random_observers", |b| {
        b.iter_batched(
            || {
                (0..1_000)
                    .map(|_| {
                        (
                            J2000_MS + rng.random_range(-SPAN_MS..SPAN_MS),
                            rng.random_range(-66.0..66.0),
                            rng.random_range(-180.0..180.0),
                        )
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (ms, lat, lon) in cases {
                    black_box(angles(black_box(ms), lat, lon).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_planets, bench_angles);
criterion_main!(benches);
