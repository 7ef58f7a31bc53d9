//! Sampling strategies for placing reward pickup points within a hunt disc.
//!
//! This module defines the trait used by the spawn pipeline to propose a
//! pickup location for each reward unit, and the area-uniform default
//! implementation.
use rand::RngCore;

use crate::geo::GeoPoint;

pub mod uniform_disc;

pub use uniform_disc::UniformDiscSampling;

/// Trait for sampling a pickup point within a disc on the Earth's surface.
///
/// Implementations must be pure apart from the RNG: the same RNG stream
/// yields the same point, which keeps spawning deterministic under a seeded
/// generator and mockable in tests.
pub trait DiscSampling: Send + Sync {
    fn sample(&self, center: GeoPoint, radius_m: f64, rng: &mut dyn RngCore) -> GeoPoint;
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    // 53 high bits of the u64, the full significand of an f64.
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}
