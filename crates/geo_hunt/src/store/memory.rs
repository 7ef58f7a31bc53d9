//! In-memory store backend.
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::hunt::{Hunt, SpawnedReward};
use crate::pending::PendingReference;
use crate::store::{PurgeCount, Store};

/// Mutex-guarded in-memory backend.
///
/// Every operation holds the lock for its whole read-modify-write cycle, so
/// the conditional update in [`Store::set_reward_claimed`] is atomic with
/// respect to concurrent claimants.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    hunts: Vec<Hunt>,
    rewards: Vec<SpawnedReward>,
    references: Vec<PendingReference>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| Error::Store("store mutex poisoned".into()))
    }
}

impl Store for MemoryStore {
    fn list_hunts(&self) -> Result<Vec<Hunt>> {
        Ok(self.lock()?.hunts.clone())
    }

    fn create_hunt(&self, hunt: Hunt) -> Result<()> {
        hunt.validate()?;
        let mut inner = self.lock()?;
        if inner.hunts.iter().any(|h| h.hunt_id == hunt.hunt_id) {
            return Err(Error::InvalidHunt(format!(
                "hunt '{}' already exists",
                hunt.hunt_id
            )));
        }
        inner.hunts.push(hunt);
        Ok(())
    }

    fn increment_claimed_count(&self, hunt_id: &str) -> Result<()> {
        let mut inner = self.lock()?;
        let hunt = inner
            .hunts
            .iter_mut()
            .find(|h| h.hunt_id == hunt_id)
            .ok_or_else(|| Error::HuntNotFound {
                id: hunt_id.to_owned(),
            })?;
        hunt.claimed_count = (hunt.claimed_count + 1).min(hunt.max_claims);
        Ok(())
    }

    fn delete_all_hunts(&self) -> Result<PurgeCount> {
        let mut inner = self.lock()?;
        let count = PurgeCount {
            hunts: inner.hunts.len(),
            rewards: inner.rewards.len(),
        };
        inner.hunts.clear();
        inner.rewards.clear();
        Ok(count)
    }

    fn list_rewards(&self) -> Result<Vec<SpawnedReward>> {
        Ok(self.lock()?.rewards.clone())
    }

    fn insert_rewards_batch(&self, rewards: Vec<SpawnedReward>) -> Result<()> {
        let mut inner = self.lock()?;
        for reward in rewards {
            if inner
                .rewards
                .iter()
                .any(|r| r.reward_id == reward.reward_id)
            {
                continue;
            }
            inner.rewards.push(reward);
        }
        Ok(())
    }

    fn set_reward_claimed(&self, reward_id: &str) -> Result<SpawnedReward> {
        let mut inner = self.lock()?;
        let reward = inner
            .rewards
            .iter_mut()
            .find(|r| r.reward_id == reward_id)
            .ok_or_else(|| Error::RewardNotFound {
                id: reward_id.to_owned(),
            })?;
        if reward.claimed {
            return Err(Error::AlreadyClaimed {
                id: reward_id.to_owned(),
            });
        }
        reward.claimed = true;
        Ok(reward.clone())
    }

    fn delete_all_rewards(&self) -> Result<()> {
        self.lock()?.rewards.clear();
        Ok(())
    }

    fn create_pending_reference(&self, reference: PendingReference) -> Result<()> {
        self.lock()?.references.push(reference);
        Ok(())
    }

    fn take_pending_reference(
        &self,
        reference_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<PendingReference>> {
        let mut inner = self.lock()?;
        let Some(index) = inner
            .references
            .iter()
            .position(|r| r.reference_id == reference_id)
        else {
            return Ok(None);
        };
        let reference = inner.references.remove(index);
        if reference.is_expired(now) {
            return Ok(None);
        }
        Ok(Some(reference))
    }

    fn purge_expired_references(&self, now: DateTime<Utc>) -> Result<usize> {
        let mut inner = self.lock()?;
        let before = inner.references.len();
        inner.references.retain(|r| !r.is_expired(now));
        Ok(before - inner.references.len())
    }
}
