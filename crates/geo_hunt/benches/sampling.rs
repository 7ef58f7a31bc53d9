use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use geo_hunt::geo::{haversine_distance_m, GeoPoint};
use geo_hunt::sampling::{DiscSampling, UniformDiscSampling};
use rand::rngs::StdRng;
use rand::SeedableRng;

const CENTER: GeoPoint = GeoPoint {
    lat: 52.52,
    lng: 13.405,
};

const RADII: [f64; 4] = [50.0, 250.0, 1_000.0, 5_000.0];

fn disc_sampling_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/uniform_disc");
    group.throughput(Throughput::Elements(1));

    for &radius in &RADII {
        let strategy = UniformDiscSampling::new();
        let mut rng = StdRng::seed_from_u64(0xD15C_u64 ^ (radius as u64));

        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &r| {
            b.iter(|| {
                let p = strategy.sample(CENTER, r, &mut rng);
                black_box(p.lat);
            });
        });
    }

    group.finish();
}

fn haversine_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("geo/haversine");
    group.throughput(Throughput::Elements(1));

    let strategy = UniformDiscSampling::new();
    let mut rng = StdRng::seed_from_u64(0x6E0);
    let points: Vec<GeoPoint> = (0..1_024)
        .map(|_| strategy.sample(CENTER, 5_000.0, &mut rng))
        .collect();

    group.bench_function("distance_to_center", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let p = points[i % points.len()];
            i += 1;
            black_box(haversine_distance_m(CENTER, p));
        });
    });

    group.finish();
}

criterion_group!(benches, disc_sampling_benches, haversine_benches);
criterion_main!(benches);
