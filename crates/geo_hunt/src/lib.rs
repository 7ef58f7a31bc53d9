#![forbid(unsafe_code)]
//! geo_hunt: location-based reward spawning and proximity-gated claiming.
//!
//! Modules:
//! - geo: geographic points and great-circle distance (Haversine)
//! - sampling: area-uniform random point generation within a hunt disc
//! - hunt: hunt and spawned-reward data model
//! - spawn: reward spawning and idempotent spawn coordination
//! - claim: proximity-gated claim processing
//! - pending: store-backed correlation records for in-flight operations
//! - store: persistence interface with in-memory and JSON file backends
pub mod claim;
pub mod error;
pub mod geo;
pub mod hunt;
pub mod pending;
pub mod sampling;
pub mod spawn;
pub mod store;

/// Convenient re-exports for common types. Import with `use geo_hunt::prelude::*;`.
pub mod prelude {
    pub use crate::claim::{ClaimProcessor, DEFAULT_CLAIMABLE_DISTANCE_M};
    pub use crate::error::{Error, Result};
    pub use crate::geo::{haversine_distance_m, GeoPoint, EARTH_RADIUS_M};
    pub use crate::hunt::{generate_id, Hunt, HuntId, RewardId, SpawnedReward};
    pub use crate::pending::{PendingReference, DEFAULT_REFERENCE_TTL};
    pub use crate::sampling::{DiscSampling, UniformDiscSampling};
    pub use crate::spawn::{
        spawn_rewards_for_hunt, SpawnCoordinator, SpawnReport, MAX_CLAIMS_CAP,
    };
    pub use crate::store::{JsonFileStore, MemoryStore, PurgeCount, Store};
}
