/// Best-score persistence, written through to JSON on every improvement
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::controller::format_elapsed;
use crate::core::error::{Error, Result};

/// Best completed round for one tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestRecord {
    pub attempts: u32,
    /// Formatted `HH:MM:SS`, for display only. Recomputed on load.
    #[serde(default)]
    pub time: String,
    /// Elapsed seconds; authoritative for tie-breaks.
    pub elapsed: f64,
}

impl BestRecord {
    pub fn new(attempts: u32, elapsed: f64) -> Self {
        Self {
            attempts,
            time: format_elapsed(elapsed),
            elapsed,
        }
    }

    /// Fewer attempts wins; equal attempts fall back to lower elapsed time.
    pub fn is_beaten_by(&self, attempts: u32, elapsed: f64) -> bool {
        attempts < self.attempts || (attempts == self.attempts && elapsed < self.elapsed)
    }
}

#[derive(Debug, Default)]
pub struct ScoreStore {
    path: Option<PathBuf>,
    records: BTreeMap<String, BestRecord>,
}

impl ScoreStore {
    /// Load records from `path`. Any failure yields an empty store that
    /// still writes back to `path` on the next improvement.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match read_records(&path) {
            Ok(records) => {
                info!(path = %path.display(), count = records.len(), "loaded best scores");
                records
            }
            Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no best score file yet");
                BTreeMap::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable best score file");
                BTreeMap::new()
            }
        };
        Self {
            path: Some(path),
            records,
        }
    }

    /// A store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn best_for(&self, tier: &str) -> Option<&BestRecord> {
        self.records.get(tier)
    }

    pub fn records(&self) -> impl Iterator<Item = (&str, &BestRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Record a finished round. Returns `true` if it became the new best.
    ///
    /// The in-memory record is updated even when the write fails.
    pub fn record_result(&mut self, tier: &str, attempts: u32, elapsed: f64) -> bool {
        let improved = self
            .records
            .get(tier)
            .map_or(true, |prior| prior.is_beaten_by(attempts, elapsed));
        if !improved {
            debug!(tier, attempts, elapsed, "result does not beat the stored best");
            return false;
        }

        self.records
            .insert(tier.to_string(), BestRecord::new(attempts, elapsed));
        info!(tier, attempts, elapsed, "new best score");

        if let Err(e) = self.save() {
            warn!(tier, error = %e, "failed to persist best scores; keeping in memory only");
        }
        true
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.records)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Entries that don't fit the schema are skipped so the rest survive the
/// next rewrite.
fn read_records(path: &Path) -> Result<BTreeMap<String, BestRecord>> {
    let contents = fs::read_to_string(path)?;
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(&contents)?;

    let mut records = BTreeMap::new();
    for (tier, value) in raw {
        match serde_json::from_value::<BestRecord>(value) {
            Ok(record) => {
                records.insert(tier, BestRecord::new(record.attempts, record.elapsed));
            }
            Err(e) => warn!(tier = %tier, error = %e, "skipping malformed best score entry"),
        }
    }
    Ok(records)
}
