//! Reward spawning and idempotent spawn coordination.
//!
//! [`spawn_rewards_for_hunt`] partitions one hunt's pool into located units;
//! [`SpawnCoordinator`] runs that for every hunt that does not have rewards
//! yet and persists the result, so it is safe to call on every request.
use std::collections::HashSet;

use rand::RngCore;
use tracing::{info, warn};

use crate::error::Result;
use crate::hunt::{generate_id, Hunt, SpawnedReward};
use crate::sampling::DiscSampling;
use crate::store::Store;

/// Hard upper bound on the number of units spawned per hunt. A hunt may
/// declare a higher `max_claims`; spawning clamps without altering the
/// stored value.
pub const MAX_CLAIMS_CAP: u32 = 50;

/// Partitions `hunt`'s reward pool into located, claimable units.
///
/// Produces `min(max_claims, MAX_CLAIMS_CAP)` units, each holding an even
/// share of the pool and a pickup point sampled from `sampling` within the
/// hunt disc. The division is not reconciled against the pool, so the unit
/// amounts sum to it only up to floating-point error.
pub fn spawn_rewards_for_hunt(
    hunt: &Hunt,
    sampling: &dyn DiscSampling,
    rng: &mut dyn RngCore,
) -> Result<Vec<SpawnedReward>> {
    hunt.validate()?;

    let unit_count = hunt.max_claims.min(MAX_CLAIMS_CAP);
    if unit_count < hunt.max_claims {
        warn!(
            "Hunt '{}' max_claims ({}) exceeds cap ({}); clamping.",
            hunt.hunt_id, hunt.max_claims, MAX_CLAIMS_CAP
        );
    }

    let per_unit_amount = hunt.reward_amount / f64::from(unit_count);
    info!(
        "Spawning {} rewards for hunt '{}' ({:.4} {} each).",
        unit_count, hunt.hunt_id, per_unit_amount, hunt.reward_token
    );

    let mut rewards = Vec::with_capacity(unit_count as usize);
    for _ in 0..unit_count {
        let point = sampling.sample(hunt.center(), f64::from(hunt.radius_meters), rng);
        rewards.push(SpawnedReward::new(
            generate_id(rng),
            hunt.hunt_id.clone(),
            point,
            per_unit_amount,
        ));
    }

    Ok(rewards)
}

/// Result of one [`SpawnCoordinator::ensure_rewards_spawned`] pass.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    /// Hunts that had no rewards and were spawned in this pass.
    pub hunts_spawned: usize,
    /// Reward units created in this pass.
    pub rewards_spawned: usize,
}

/// Idempotency layer over [`spawn_rewards_for_hunt`].
///
/// A hunt is considered spawned as soon as the store holds at least one
/// reward for it, regardless of later `max_claims` edits. The check and the
/// insert are separate store calls, so two concurrent passes over the same
/// unspawned hunt can both spawn; callers that need stronger guarantees must
/// serialize their passes.
pub struct SpawnCoordinator<'a> {
    store: &'a dyn Store,
    sampling: &'a dyn DiscSampling,
}

impl<'a> SpawnCoordinator<'a> {
    pub fn new(store: &'a dyn Store, sampling: &'a dyn DiscSampling) -> Self {
        Self { store, sampling }
    }

    /// Spawns rewards for every hunt in `hunts` that has none persisted,
    /// then writes the merged reward set back in a single batch.
    ///
    /// Safe to call repeatedly: the second pass for the same hunts is a
    /// no-op. A failed pass writes nothing and can be retried wholesale.
    pub fn ensure_rewards_spawned(
        &self,
        hunts: &[Hunt],
        rng: &mut dyn RngCore,
    ) -> Result<SpawnReport> {
        let existing = self.store.list_rewards()?;
        let spawned_hunt_ids: HashSet<&str> =
            existing.iter().map(|r| r.hunt_id.as_str()).collect();

        let needing_spawn: Vec<&Hunt> = hunts
            .iter()
            .filter(|h| !spawned_hunt_ids.contains(h.hunt_id.as_str()))
            .collect();

        if needing_spawn.is_empty() {
            info!("All hunts already have spawned rewards.");
            return Ok(SpawnReport::default());
        }

        info!("Spawning rewards for {} new hunt(s).", needing_spawn.len());

        let mut new_rewards = Vec::new();
        for hunt in &needing_spawn {
            new_rewards.extend(spawn_rewards_for_hunt(hunt, self.sampling, rng)?);
        }

        let report = SpawnReport {
            hunts_spawned: needing_spawn.len(),
            rewards_spawned: new_rewards.len(),
        };

        // Union of existing and new; the batch insert skips duplicate ids.
        let mut merged = existing;
        merged.extend(new_rewards);
        self.store.insert_rewards_batch(merged)?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::geo::GeoPoint;
    use crate::sampling::UniformDiscSampling;
    use crate::store::MemoryStore;

    fn hunt(id: &str, max_claims: u32, reward_amount: f64) -> Hunt {
        Hunt::new(
            id,
            GeoPoint::new(52.52, 13.405),
            300,
            "WLD",
            reward_amount,
            max_claims,
            "Test campaign",
            "0xsponsor",
        )
    }

    #[test]
    fn spawns_exactly_max_claims_units() {
        let mut rng = StdRng::seed_from_u64(1);
        let rewards =
            spawn_rewards_for_hunt(&hunt("h1", 10, 100.0), &UniformDiscSampling, &mut rng)
                .expect("spawn succeeds");

        assert_eq!(rewards.len(), 10);
        for r in &rewards {
            assert_eq!(r.hunt_id, "h1");
            assert!(!r.claimed);
            assert!((r.amount - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn clamps_unit_count_to_the_cap() {
        let mut rng = StdRng::seed_from_u64(2);
        let rewards =
            spawn_rewards_for_hunt(&hunt("h1", 1000, 100.0), &UniformDiscSampling, &mut rng)
                .expect("spawn succeeds");

        assert_eq!(rewards.len(), MAX_CLAIMS_CAP as usize);
        for r in &rewards {
            assert!((r.amount - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn unit_amounts_sum_to_the_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let rewards =
            spawn_rewards_for_hunt(&hunt("h1", 7, 100.0), &UniformDiscSampling, &mut rng)
                .expect("spawn succeeds");

        let total: f64 = rewards.iter().map(|r| r.amount).sum();
        assert!((total - 100.0).abs() < 1e-6);
    }

    #[test]
    fn spawned_points_lie_within_the_hunt_disc() {
        let mut rng = StdRng::seed_from_u64(4);
        let h = hunt("h1", 50, 100.0);
        let rewards = spawn_rewards_for_hunt(&h, &UniformDiscSampling, &mut rng)
            .expect("spawn succeeds");

        for r in &rewards {
            let d = h.center().distance_m(&r.position());
            assert!(d <= f64::from(h.radius_meters) * 1.001, "unit {d} m out");
        }
    }

    #[test]
    fn spawned_ids_are_unique() {
        let mut rng = StdRng::seed_from_u64(5);
        let rewards =
            spawn_rewards_for_hunt(&hunt("h1", 50, 100.0), &UniformDiscSampling, &mut rng)
                .expect("spawn succeeds");

        let ids: HashSet<&str> = rewards.iter().map(|r| r.reward_id.as_str()).collect();
        assert_eq!(ids.len(), rewards.len());
    }

    #[test]
    fn invalid_hunt_spawns_nothing() {
        let mut rng = StdRng::seed_from_u64(6);
        let result =
            spawn_rewards_for_hunt(&hunt("h1", 0, 100.0), &UniformDiscSampling, &mut rng);
        assert!(result.is_err());

        let result =
            spawn_rewards_for_hunt(&hunt("h1", 10, 0.0), &UniformDiscSampling, &mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn ensure_spawned_is_idempotent() {
        let store = MemoryStore::new();
        let sampling = UniformDiscSampling::new();
        let coordinator = SpawnCoordinator::new(&store, &sampling);
        let hunts = vec![hunt("h1", 1000, 100.0)];
        let mut rng = StdRng::seed_from_u64(7);

        let first = coordinator
            .ensure_rewards_spawned(&hunts, &mut rng)
            .expect("first pass succeeds");
        assert_eq!(first.hunts_spawned, 1);
        assert_eq!(first.rewards_spawned, MAX_CLAIMS_CAP as usize);

        let second = coordinator
            .ensure_rewards_spawned(&hunts, &mut rng)
            .expect("second pass succeeds");
        assert_eq!(second, SpawnReport::default());

        let rewards = store.list_rewards().expect("list succeeds");
        assert_eq!(rewards.len(), MAX_CLAIMS_CAP as usize);
    }

    #[test]
    fn ensure_spawned_only_fills_missing_hunts() {
        let store = MemoryStore::new();
        let sampling = UniformDiscSampling::new();
        let coordinator = SpawnCoordinator::new(&store, &sampling);
        let mut rng = StdRng::seed_from_u64(8);

        coordinator
            .ensure_rewards_spawned(&[hunt("h1", 5, 50.0)], &mut rng)
            .expect("first pass succeeds");

        let report = coordinator
            .ensure_rewards_spawned(&[hunt("h1", 5, 50.0), hunt("h2", 3, 30.0)], &mut rng)
            .expect("second pass succeeds");
        assert_eq!(report.hunts_spawned, 1);
        assert_eq!(report.rewards_spawned, 3);

        let rewards = store.list_rewards().expect("list succeeds");
        assert_eq!(rewards.len(), 8);
        assert_eq!(rewards.iter().filter(|r| r.hunt_id == "h2").count(), 3);
    }
}
