//! Proximity-gated claim processing.
//!
//! Claiming flips a reward's `claimed` flag from false to true, once,
//! for a claimant standing close enough to the sampled pickup point. The
//! flip itself is delegated to the store's conditional update, which is the
//! only place the transition is decided; the checks here exist to hand the
//! caller a precise failure before any write is attempted.
use tracing::info;

use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::hunt::SpawnedReward;
use crate::store::Store;

/// Distance within which a participant may claim a specific unit. Much
/// tighter than a hunt radius: entering the hunt disc is not enough, the
/// claimant has to walk to the sampled point itself.
pub const DEFAULT_CLAIMABLE_DISTANCE_M: f64 = 10.0;

/// Processes claim attempts against a store.
pub struct ClaimProcessor<'a> {
    store: &'a dyn Store,
    claimable_distance_m: f64,
}

impl<'a> ClaimProcessor<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self {
            store,
            claimable_distance_m: DEFAULT_CLAIMABLE_DISTANCE_M,
        }
    }

    /// Overrides the per-reward pickup distance.
    pub fn with_claimable_distance(mut self, meters: f64) -> Self {
        self.claimable_distance_m = meters;
        self
    }

    /// Attempts to claim `reward_id` for a claimant at `claimant`.
    ///
    /// Fails with [`Error::RewardNotFound`], [`Error::AlreadyClaimed`], or
    /// [`Error::OutOfRange`]; on success returns the updated reward and
    /// increments the owning hunt's claimed count. Two concurrent attempts
    /// on the same reward resolve to exactly one success: the store's
    /// conditional update is atomic, and the loser observes
    /// [`Error::AlreadyClaimed`].
    pub fn claim(&self, reward_id: &str, claimant: GeoPoint) -> Result<SpawnedReward> {
        let rewards = self.store.list_rewards()?;
        let reward = rewards
            .iter()
            .find(|r| r.reward_id == reward_id)
            .ok_or_else(|| Error::RewardNotFound {
                id: reward_id.to_owned(),
            })?;

        if reward.claimed {
            return Err(Error::AlreadyClaimed {
                id: reward_id.to_owned(),
            });
        }

        let distance_m = claimant.distance_m(&reward.position());
        if distance_m > self.claimable_distance_m {
            return Err(Error::OutOfRange {
                distance_m,
                max_m: self.claimable_distance_m,
            });
        }

        // Authoritative check-and-set; the read above may already be stale.
        let claimed = self.store.set_reward_claimed(reward_id)?;
        self.store.increment_claimed_count(&claimed.hunt_id)?;

        info!(
            "Reward '{}' of hunt '{}' claimed (amount {:.4}, {:.1} m away).",
            claimed.reward_id, claimed.hunt_id, claimed.amount, distance_m
        );

        Ok(claimed)
    }
}
