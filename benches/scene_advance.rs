use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use orrery::{belt, CircularOrbit};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Orbit radii and per-frame speeds matching the viewer's planet table.
const PLANETS: [(f32, f32); 8] = [
    (3.0, 0.01),
    (4.0, 0.008),
    (5.0, 0.005),
    (6.0, 0.004),
    (8.0, 0.002),
    (10.0, 0.001),
    (13.0, 0.003),
    (15.0, 0.0005),
];

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut asteroids = belt::generate(&mut rng);
    let mut planets: Vec<CircularOrbit> = PLANETS
        .iter()
        .map(|&(radius, speed)| CircularOrbit::new(radius, 0.0, speed))
        .collect();

    let bodies = (asteroids.len() + planets.len()) as u64;
    let mut group = c.benchmark_group("frame_advance");
    group.throughput(Throughput::Elements(bodies));

    group.bench_function("advance_and_position", |b| {
        b.iter(|| {
            for orbit in planets
                .iter_mut()
                .chain(asteroids.iter_mut().map(|seed| &mut seed.orbit))
            {
                orbit.advance();
                black_box(orbit.position(0.0));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
