//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid hunt definitions, missing hunts/rewards, terminal claim outcomes,
//! proximity failures, store failures, IO, and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid hunt: {0}")]
    InvalidHunt(String),

    #[error("hunt '{id}' not found")]
    HuntNotFound { id: String },

    #[error("reward '{id}' not found")]
    RewardNotFound { id: String },

    #[error("reward '{id}' already claimed")]
    AlreadyClaimed { id: String },

    #[error("claimant is {distance_m:.1} m from the reward; must be within {max_m:.1} m")]
    OutOfRange { distance_m: f64, max_m: f64 },

    #[error("store unavailable: {0}")]
    Store(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether retrying the failed operation can succeed without the caller
    /// changing anything. Only transient store failures qualify; claim
    /// outcomes and validation failures are final.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Store(_) | Error::Io(_) | Error::Serde(_))
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
