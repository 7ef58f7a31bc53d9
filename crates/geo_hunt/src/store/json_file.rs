//! JSON file store backend.
//!
//! Persists hunts, rewards, and pending references as three pretty-printed
//! JSON documents under a data directory. Documents are read whole and
//! written whole; a missing file reads as an empty collection, so a fresh
//! directory is a valid empty store.
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::hunt::{Hunt, SpawnedReward};
use crate::pending::PendingReference;
use crate::store::{PurgeCount, Store};

const HUNTS_FILE: &str = "hunts.json";
const REWARDS_FILE: &str = "rewards.json";
const REFERENCES_FILE: &str = "references.json";

/// File-backed store keeping one JSON document per collection.
///
/// A process-wide mutex serializes every read-modify-write cycle, which
/// gives [`Store::set_reward_claimed`] its required atomicity within one
/// process. Multiple processes over the same directory are not coordinated.
pub struct JsonFileStore {
    data_dir: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| Error::Store("store mutex poisoned".into()))
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.data_dir.join(file);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write<T: Serialize>(&self, file: &str, items: &[T]) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        let bytes = serde_json::to_vec_pretty(items)?;
        fs::write(self.data_dir.join(file), bytes)?;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn list_hunts(&self) -> Result<Vec<Hunt>> {
        let _guard = self.guard()?;
        self.read(HUNTS_FILE)
    }

    fn create_hunt(&self, hunt: Hunt) -> Result<()> {
        hunt.validate()?;
        let _guard = self.guard()?;
        let mut hunts: Vec<Hunt> = self.read(HUNTS_FILE)?;
        if hunts.iter().any(|h| h.hunt_id == hunt.hunt_id) {
            return Err(Error::InvalidHunt(format!(
                "hunt '{}' already exists",
                hunt.hunt_id
            )));
        }
        hunts.push(hunt);
        self.write(HUNTS_FILE, &hunts)
    }

    fn increment_claimed_count(&self, hunt_id: &str) -> Result<()> {
        let _guard = self.guard()?;
        let mut hunts: Vec<Hunt> = self.read(HUNTS_FILE)?;
        let hunt = hunts
            .iter_mut()
            .find(|h| h.hunt_id == hunt_id)
            .ok_or_else(|| Error::HuntNotFound {
                id: hunt_id.to_owned(),
            })?;
        hunt.claimed_count = (hunt.claimed_count + 1).min(hunt.max_claims);
        self.write(HUNTS_FILE, &hunts)
    }

    fn delete_all_hunts(&self) -> Result<PurgeCount> {
        let _guard = self.guard()?;
        let hunts: Vec<Hunt> = self.read(HUNTS_FILE)?;
        let rewards: Vec<SpawnedReward> = self.read(REWARDS_FILE)?;
        let count = PurgeCount {
            hunts: hunts.len(),
            rewards: rewards.len(),
        };
        self.write::<Hunt>(HUNTS_FILE, &[])?;
        self.write::<SpawnedReward>(REWARDS_FILE, &[])?;
        Ok(count)
    }

    fn list_rewards(&self) -> Result<Vec<SpawnedReward>> {
        let _guard = self.guard()?;
        self.read(REWARDS_FILE)
    }

    fn insert_rewards_batch(&self, rewards: Vec<SpawnedReward>) -> Result<()> {
        let _guard = self.guard()?;
        let mut persisted: Vec<SpawnedReward> = self.read(REWARDS_FILE)?;
        for reward in rewards {
            if persisted.iter().any(|r| r.reward_id == reward.reward_id) {
                continue;
            }
            persisted.push(reward);
        }
        self.write(REWARDS_FILE, &persisted)
    }

    fn set_reward_claimed(&self, reward_id: &str) -> Result<SpawnedReward> {
        let _guard = self.guard()?;
        let mut rewards: Vec<SpawnedReward> = self.read(REWARDS_FILE)?;
        let reward = rewards
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
        let claimed = reward.clone();
        self.write(REWARDS_FILE, &rewards)?;
        Ok(claimed)
    }

    fn delete_all_rewards(&self) -> Result<()> {
        let _guard = self.guard()?;
        self.write::<SpawnedReward>(REWARDS_FILE, &[])
    }

    fn create_pending_reference(&self, reference: PendingReference) -> Result<()> {
        let _guard = self.guard()?;
        let mut references: Vec<PendingReference> = self.read(REFERENCES_FILE)?;
        references.push(reference);
        self.write(REFERENCES_FILE, &references)
    }

    fn take_pending_reference(
        &self,
        reference_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<PendingReference>> {
        let _guard = self.guard()?;
        let mut references: Vec<PendingReference> = self.read(REFERENCES_FILE)?;
        let Some(index) = references
            .iter()
            .position(|r| r.reference_id == reference_id)
        else {
            return Ok(None);
        };
        let reference = references.remove(index);
        self.write(REFERENCES_FILE, &references)?;
        if reference.is_expired(now) {
            return Ok(None);
        }
        Ok(Some(reference))
    }

    fn purge_expired_references(&self, now: DateTime<Utc>) -> Result<usize> {
        let _guard = self.guard()?;
        let mut references: Vec<PendingReference> = self.read(REFERENCES_FILE)?;
        let before = references.len();
        references.retain(|r| !r.is_expired(now));
        let purged = before - references.len();
        if purged > 0 {
            self.write(REFERENCES_FILE, &references)?;
        }
        Ok(purged)
    }
}
