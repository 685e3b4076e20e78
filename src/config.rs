/// Startup settings: defaults, an optional JSON file, then command-line overrides
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::core::tier::{default_tiers, DifficultyTier, TierSet};

pub const DEFAULT_SCORES_FILE: &str = "best_scores.json";
pub const DEFAULT_LOG_FILE: &str = "guessterm.log";
pub const DEFAULT_TIER: &str = "Medium";
pub const DEFAULT_REFRESH_MS: u64 = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scores_file: PathBuf,
    pub log_file: PathBuf,
    pub default_tier: String,
    /// Timer refresh interval while a round is running.
    pub refresh_ms: u64,
    pub tiers: Vec<DifficultyTier>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scores_file: PathBuf::from(DEFAULT_SCORES_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            default_tier: DEFAULT_TIER.to_string(),
            refresh_ms: DEFAULT_REFRESH_MS,
            tiers: default_tiers(),
        }
    }
}

impl Settings {
    /// Load and validate a settings file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        settings.tier_set()?;
        Ok(settings)
    }

    /// Validated tiers; the default tier must be one of them.
    pub fn tier_set(&self) -> Result<TierSet> {
        let set = TierSet::new(self.tiers.clone())?;
        if set.get(&self.default_tier).is_none() {
            return Err(Error::UnknownTier(self.default_tier.clone()));
        }
        Ok(set)
    }

    pub fn refresh(&self) -> Duration {
        Duration::from_millis(self.refresh_ms.max(1))
    }
}
