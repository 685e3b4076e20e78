/// Difficulty tiers: named, inclusive ranges the secret is drawn from
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTier {
    pub name: String,
    pub low: u64,
    pub high: u64,
}

impl DifficultyTier {
    pub fn new(name: impl Into<String>, low: u64, high: u64) -> Self {
        Self { name: name.into(), low, high }
    }

    pub fn contains(&self, value: u64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// Ordered, validated set of tiers. Order is the cycling order in the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierSet {
    tiers: Vec<DifficultyTier>,
}

impl TierSet {
    pub fn new(tiers: Vec<DifficultyTier>) -> Result<Self> {
        if tiers.is_empty() {
            return Err(Error::NoTiers);
        }
        for (i, tier) in tiers.iter().enumerate() {
            if tier.low > tier.high {
                return Err(Error::InvalidTierRange {
                    name: tier.name.clone(),
                    low: tier.low,
                    high: tier.high,
                });
            }
            if tiers[..i].iter().any(|t| t.name == tier.name) {
                return Err(Error::DuplicateTier(tier.name.clone()));
            }
        }
        Ok(Self { tiers })
    }

    pub fn get(&self, name: &str) -> Option<&DifficultyTier> {
        self.tiers.iter().find(|t| t.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.tiers.iter().position(|t| t.name == name)
    }

    /// Index-based access; wraps around so the UI can cycle freely.
    pub fn nth(&self, index: usize) -> &DifficultyTier {
        &self.tiers[index % self.tiers.len()]
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DifficultyTier> {
        self.tiers.iter()
    }
}

impl Default for TierSet {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
        }
    }
}

pub fn default_tiers() -> Vec<DifficultyTier> {
    vec![
        DifficultyTier::new("Easy", 1, 20),
        DifficultyTier::new("Medium", 1, 100),
        DifficultyTier::new("Hard", 1, 1000),
    ]
}
