//! Persistence interface for hunts, rewards, and pending references.
//!
//! The engine never talks to a concrete backend: spawning and claiming take
//! a [`Store`] trait object, so swapping the in-memory backend for the JSON
//! file backend (or a database) changes no engine code.
//!
//! Two operations carry the correctness weight:
//! - [`Store::set_reward_claimed`] must be an atomic conditional update
//!   (claimed = true only where it was false), so that two racing claimants
//!   cannot both succeed.
//! - [`Store::insert_rewards_batch`] must write a hunt's whole unit batch in
//!   one call and skip duplicate reward ids, which makes the spawn pass
//!   retry-safe.
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::hunt::{Hunt, SpawnedReward};
use crate::pending::PendingReference;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Counts returned by the cascading bulk clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeCount {
    pub hunts: usize,
    pub rewards: usize,
}

/// Abstract persistence for the reward engine.
pub trait Store: Send + Sync {
    fn list_hunts(&self) -> Result<Vec<Hunt>>;

    /// Persists a new hunt. Rejects invalid definitions and duplicate
    /// `hunt_id`s.
    fn create_hunt(&self, hunt: Hunt) -> Result<()>;

    /// Bumps a hunt's claimed count by one, saturating at `max_claims`.
    fn increment_claimed_count(&self, hunt_id: &str) -> Result<()>;

    /// Deletes every hunt and, by cascade, every reward.
    fn delete_all_hunts(&self) -> Result<PurgeCount>;

    fn list_rewards(&self) -> Result<Vec<SpawnedReward>>;

    /// Inserts rewards in one batch. Ids already present are silently
    /// skipped, never overwritten.
    fn insert_rewards_batch(&self, rewards: Vec<SpawnedReward>) -> Result<()>;

    /// Atomically flips a reward from unclaimed to claimed and returns the
    /// updated record. Fails with `RewardNotFound` or `AlreadyClaimed`.
    fn set_reward_claimed(&self, reward_id: &str) -> Result<SpawnedReward>;

    fn delete_all_rewards(&self) -> Result<()>;

    fn create_pending_reference(&self, reference: PendingReference) -> Result<()>;

    /// Removes and returns the reference with the given id, if it exists
    /// and has not expired as of `now`. Expired records are dropped.
    fn take_pending_reference(
        &self,
        reference_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<PendingReference>>;

    /// Drops every reference expired as of `now`, returning the count.
    fn purge_expired_references(&self, now: DateTime<Utc>) -> Result<usize>;
}
