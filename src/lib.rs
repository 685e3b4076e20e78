pub mod cli;
pub mod config;
pub mod core;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::core::controller::{Feedback, GameController, Phase, Win};
pub use crate::core::error::{Error, Result};
pub use crate::core::game::{Flow, Game};
pub use crate::core::scores::{BestRecord, ScoreStore};
pub use crate::core::tier::{DifficultyTier, TierSet};
