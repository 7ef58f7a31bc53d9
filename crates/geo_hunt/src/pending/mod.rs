//! Store-backed correlation records for in-flight operations.
//!
//! A [`PendingReference`] correlates a request/response pair that spans two
//! calls, such as a sponsor payment that is initiated and later confirmed.
//! The record lives in the store rather than in process memory, so an open
//! reference survives a restart, and it carries an explicit expiry instead
//! of relying on process lifetime.
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// How long a reference stays consumable after creation.
pub const DEFAULT_REFERENCE_TTL: Duration = Duration::minutes(10);

/// A consumable, expiring correlation record.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingReference {
    pub reference_id: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl PendingReference {
    /// Creates a reference expiring `ttl` from now, with an RNG-derived id.
    /// The id is hyphenless so it can travel through systems that reject
    /// separator characters.
    pub fn new(amount: f64, ttl: Duration, rng: &mut dyn RngCore) -> Self {
        let created_at = Utc::now();
        Self {
            reference_id: format!("{:016x}{:016x}", rng.next_u64(), rng.next_u64()),
            amount,
            created_at,
            expires_at: created_at + ttl,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
