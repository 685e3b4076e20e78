use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Not a valid guess: {0:?}")]
    InvalidGuess(String),

    #[error("Unknown difficulty tier: {0}")]
    UnknownTier(String),

    #[error("Tier {name} has an empty range: low {low} is greater than high {high}")]
    InvalidTierRange { name: String, low: u64, high: u64 },

    #[error("Duplicate difficulty tier: {0}")]
    DuplicateTier(String),

    #[error("No difficulty tiers configured")]
    NoTiers,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
