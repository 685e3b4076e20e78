/// Round state machine (Idle -> Running -> Won) with `_at` variants for explicit time
use std::time::{Duration, Instant};

use rand::rngs::ThreadRng;
use rand::Rng;
use rand_core::RngCore;
use tracing::{debug, info};

use crate::core::error::{Error, Result};
use crate::core::scores::ScoreStore;
use crate::core::tier::{DifficultyTier, TierSet};

/// Where secrets come from. Implementations must return a value in
/// `low..=high`.
pub trait SecretSource {
    fn draw(&mut self, low: u64, high: u64) -> u64;
}

/// Uniform draws from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSecret<R>(R);

impl<R: RngCore> RandomSecret<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RandomSecret<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl<R: RngCore> SecretSource for RandomSecret<R> {
    fn draw(&mut self, low: u64, high: u64) -> u64 {
        self.0.random_range(low..=high)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Won,
}

#[derive(Debug, Clone, Copy)]
enum Clock {
    Stopped,
    Ticking(Instant),
    Frozen(Duration),
}

/// A winning guess.
#[derive(Debug, Clone, PartialEq)]
pub struct Win {
    pub tier: String,
    pub guess: u64,
    pub attempts: u32,
    pub elapsed: Duration,
    pub new_best: bool,
}

impl Win {
    pub fn time(&self) -> String {
        format_elapsed(self.elapsed.as_secs_f64())
    }
}

/// Result of a submission that passed validation (or was ignored).
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    /// No round is running.
    Ignored,
    TooLow,
    TooHigh,
    Correct(Win),
}

pub struct GameController<S = RandomSecret<ThreadRng>> {
    tiers: TierSet,
    scores: ScoreStore,
    source: S,
    tier: Option<DifficultyTier>,
    secret: u64,
    attempts: u32,
    phase: Phase,
    clock: Clock,
}

impl GameController {
    pub fn new(tiers: TierSet, scores: ScoreStore) -> Self {
        Self::with_source(tiers, scores, RandomSecret::thread())
    }
}

impl<S: SecretSource> GameController<S> {
    pub fn with_source(tiers: TierSet, scores: ScoreStore, source: S) -> Self {
        Self {
            tiers,
            scores,
            source,
            tier: None,
            secret: 0,
            attempts: 0,
            phase: Phase::Idle,
            clock: Clock::Stopped,
        }
    }

    pub fn start(&mut self, tier: &str) -> Result<&DifficultyTier> {
        self.start_at(tier, Instant::now())
    }

    /// Begin a new round on `tier`, discarding any round in progress.
    pub fn start_at(&mut self, tier: &str, now: Instant) -> Result<&DifficultyTier> {
        let tier = self
            .tiers
            .get(tier)
            .cloned()
            .ok_or_else(|| Error::UnknownTier(tier.to_string()))?;

        self.secret = self.source.draw(tier.low, tier.high);
        debug_assert!(tier.contains(self.secret));
        self.attempts = 0;
        self.phase = Phase::Running;
        self.clock = Clock::Ticking(now);
        info!(tier = %tier.name, low = tier.low, high = tier.high, "round started");

        Ok(&*self.tier.insert(tier))
    }

    pub fn submit_guess(&mut self, text: &str) -> Result<Feedback> {
        self.submit_guess_at(text, Instant::now())
    }

    pub fn submit_guess_at(&mut self, text: &str, now: Instant) -> Result<Feedback> {
        if self.phase != Phase::Running {
            return Ok(Feedback::Ignored);
        }
        let guess = parse_guess(text)?;
        self.attempts = self.attempts.saturating_add(1);

        let Some(guess) = guess else {
            debug!(attempts = self.attempts, "guess overflows u64");
            return Ok(Feedback::TooHigh);
        };

        if guess < self.secret {
            return Ok(Feedback::TooLow);
        }
        if guess > self.secret {
            return Ok(Feedback::TooHigh);
        }

        let elapsed = self.elapsed_at(now).unwrap_or_default();
        self.phase = Phase::Won;
        self.clock = Clock::Frozen(elapsed);

        let tier = self.tier.as_ref().map(|t| t.name.clone()).unwrap_or_default();
        let new_best = self
            .scores
            .record_result(&tier, self.attempts, elapsed.as_secs_f64());
        info!(tier = %tier, attempts = self.attempts, elapsed = ?elapsed, new_best, "round won");

        Ok(Feedback::Correct(Win {
            tier,
            guess,
            attempts: self.attempts,
            elapsed,
            new_best,
        }))
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.attempts = 0;
        self.clock = Clock::Stopped;
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed_at(Instant::now())
    }

    /// Time since the round started, frozen once won. `None` while idle.
    pub fn elapsed_at(&self, now: Instant) -> Option<Duration> {
        match self.clock {
            Clock::Stopped => None,
            Clock::Ticking(started) => Some(now.saturating_duration_since(started)),
            Clock::Frozen(elapsed) => Some(elapsed),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Tier of the current or last round.
    pub fn tier(&self) -> Option<&DifficultyTier> {
        self.tier.as_ref()
    }

    pub fn tiers(&self) -> &TierSet {
        &self.tiers
    }

    pub fn scores(&self) -> &ScoreStore {
        &self.scores
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> u64 {
        self.secret
    }
}

/// `Ok(None)` means a digit string too large for `u64`: still a valid guess,
/// just above every secret.
fn parse_guess(text: &str) -> Result<Option<u64>> {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidGuess(text.to_string()));
    }
    Ok(digits.parse().ok())
}

/// `HH:MM:SS`, truncated to whole seconds. Hours do not wrap.
pub fn format_elapsed(seconds: f64) -> String {
    let s = seconds.max(0.0) as u64;
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}
