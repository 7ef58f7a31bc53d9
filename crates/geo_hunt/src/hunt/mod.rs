//! Hunt and spawned-reward data model.
//!
//! A [`Hunt`] is a sponsor-created campaign: a geofenced disc with a reward
//! pool and a claim cap. A [`SpawnedReward`] is one claimable unit of that
//! pool, placed at a sampled point inside the disc. Rewards belong to exactly
//! one hunt and are deleted with it.
//!
//! Serialized field names are camelCase to match the persisted document
//! shape (`huntId`, `radiusMeters`, ...).
use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geo::GeoPoint;

pub type HuntId = String;
pub type RewardId = String;

/// A sponsor-defined geofenced campaign with a reward pool and claim cap.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hunt {
    pub hunt_id: HuntId,
    pub lat: f64,
    pub lng: f64,
    pub radius_meters: u32,
    pub reward_token: String,
    pub reward_amount: f64,
    pub max_claims: u32,
    pub campaign_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sponsor_wallet: String,
    pub claimed_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Hunt {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        hunt_id: impl Into<HuntId>,
        center: GeoPoint,
        radius_meters: u32,
        reward_token: impl Into<String>,
        reward_amount: f64,
        max_claims: u32,
        campaign_name: impl Into<String>,
        sponsor_wallet: impl Into<String>,
    ) -> Self {
        Self {
            hunt_id: hunt_id.into(),
            lat: center.lat,
            lng: center.lng,
            radius_meters,
            reward_token: reward_token.into(),
            reward_amount,
            max_claims,
            campaign_name: campaign_name.into(),
            description: None,
            sponsor_wallet: sponsor_wallet.into(),
            claimed_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Sets the optional campaign description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Center of the hunt disc.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// Whether `point` lies within the hunt's footprint (its claim radius).
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.center()
            .is_within_range(&point, f64::from(self.radius_meters))
    }

    /// A hunt is active while it has unclaimed capacity.
    pub fn is_active(&self) -> bool {
        self.claimed_count < self.max_claims
    }

    /// Validates the hunt definition, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.hunt_id.is_empty() {
            return Err(Error::InvalidHunt("hunt_id must not be empty".into()));
        }
        if self.campaign_name.is_empty() {
            return Err(Error::InvalidHunt("campaign_name must not be empty".into()));
        }
        if self.sponsor_wallet.is_empty() {
            return Err(Error::InvalidHunt(
                "sponsor_wallet must not be empty".into(),
            ));
        }
        if self.radius_meters == 0 {
            return Err(Error::InvalidHunt("radius_meters must be > 0".into()));
        }
        if !self.reward_amount.is_finite() || self.reward_amount <= 0.0 {
            return Err(Error::InvalidHunt("reward_amount must be > 0".into()));
        }
        if self.max_claims == 0 {
            return Err(Error::InvalidHunt("max_claims must be > 0".into()));
        }

        Ok(())
    }
}

/// One claimable unit of a hunt's reward pool.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnedReward {
    pub reward_id: RewardId,
    pub hunt_id: HuntId,
    pub lat: f64,
    pub lng: f64,
    pub amount: f64,
    pub claimed: bool,
    pub created_at: DateTime<Utc>,
}

impl SpawnedReward {
    pub fn new(
        reward_id: impl Into<RewardId>,
        hunt_id: impl Into<HuntId>,
        position: GeoPoint,
        amount: f64,
    ) -> Self {
        Self {
            reward_id: reward_id.into(),
            hunt_id: hunt_id.into(),
            lat: position.lat,
            lng: position.lng,
            amount,
            claimed: false,
            created_at: Utc::now(),
        }
    }

    /// Pickup location of this unit.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Generates a UUIDv4-shaped identifier from the given RNG.
///
/// Drawing the bits from the injected RNG rather than an ambient source
/// keeps id assignment deterministic under a seeded generator.
pub fn generate_id(rng: &mut dyn RngCore) -> String {
    let a = rng.next_u64();
    let b = rng.next_u64();
    format!(
        "{:08x}-{:04x}-4{:03x}-{:04x}-{:012x}",
        a >> 32,
        (a >> 16) & 0xFFFF,
        a & 0x0FFF,
        ((b >> 48) & 0x3FFF) | 0x8000,
        b & 0xFFFF_FFFF_FFFF
    )
}
