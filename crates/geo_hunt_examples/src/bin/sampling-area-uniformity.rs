use geo_hunt::geo::GeoPoint;
use geo_hunt::sampling::{DiscSampling, UniformDiscSampling};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Empirical check that disc sampling is uniform per unit area: split the
/// disc into four equal-area annuli and count samples per band. Each band
/// should hold ~25% of the samples; uniform-in-radius sampling would put
/// half of them in the innermost band instead.
fn main() -> anyhow::Result<()> {
    let center = GeoPoint::new(52.52, 13.405);
    let radius_m = 500.0;
    let n = 10_000;

    let sampling = UniformDiscSampling::new();
    let mut rng = StdRng::seed_from_u64(2025);

    // Equal-area band boundaries: R*sqrt(1/4), R*sqrt(2/4), R*sqrt(3/4), R.
    let bounds: Vec<f64> = (1..=4).map(|i| radius_m * (i as f64 / 4.0).sqrt()).collect();
    let mut counts = [0usize; 4];
    let mut max_distance: f64 = 0.0;

    for _ in 0..n {
        let p = sampling.sample(center, radius_m, &mut rng);
        let d = center.distance_m(&p);
        max_distance = max_distance.max(d);
        let band = bounds.iter().position(|&b| d <= b).unwrap_or(3);
        counts[band] += 1;
    }

    println!("{n} samples over a {radius_m} m disc");
    for (i, count) in counts.iter().enumerate() {
        let share = 100.0 * *count as f64 / n as f64;
        println!(
            "band {} (r <= {:>6.1} m): {:>5} samples ({:.1}%)",
            i + 1,
            bounds[i],
            count,
            share
        );
    }
    println!("max distance from center: {max_distance:.1} m");

    Ok(())
}
