use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use natal::kepler::solve_kepler_equation;

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

/// Pre-generate `(M, e)` pairs so the RNG stays out of the timed section.
fn make_cases(rng: &mut StdRng, samples: usize, e_range: (f64, f64)) -> Vec<(f64, f64)> {
    (0..samples)
        .map(|_| (rand_angle(rng), rng.random_range(e_range.0..e_range.1)))
        .collect()
}

/// Planetary regime: e ∈ [0.0, 0.25)
fn bench_planetary(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    c.bench_function("solve_kepler_equation/planetary_e<0.25", |b| {
        b.iter_batched(
            || make_cases(&mut rng, 10_000, (0.0, 0.25)),
            |cases| {
                for (m, e) in cases {
                    let sol = solve_kepler_equation(black_box(m), black_box(e)).unwrap();
                    black_box(sol);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// High-eccentricity (still elliptic): e ∈ [0.7, 0.95)
fn bench_high_e(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);

    c.bench_function("solve_kepler_equation/high_e_0.7..0.95", |b| {
        b.iter_batched(
            || make_cases(&mut rng, 10_000, (0.7, 0.95)),
            |cases| {
                for (m, e) in cases {
                    let _ = black_box(solve_kepler_equation(black_box(m), black_box(e)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Circular orbit: a single Newton step
fn bench_circular(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);

    c.bench_function("solve_kepler_equation/circular_e=0", |b| {
        b.iter_batched(
            || (0..10_000).map(|_| rand_angle(&mut rng)).collect::<Vec<_>>(),
            |cases| {
                for m in cases {
                    let sol = solve_kepler_equation(black_box(m), black_box(0.0)).unwrap();
                    black_box(sol);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Mercury at J2000.0
fn bench_fixed_mercury(c: &mut Criterion) {
    let e = 0.20563593_f64;
    let m = (252.25032350_f64 - 77.45779628).to_radians();

    c.bench_function("solve_kepler_equation/fixed_mercury_j2000", |b| {
        b.iter(|| black_box(solve_kepler_equation(black_box(m), black_box(e)).ok()))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_planetary, bench_high_e, bench_circular, bench_fixed_mercury
);
criterion_main!(benches);
