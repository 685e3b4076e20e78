//! End-to-end round tests against a real best-score file.

use std::time::{Duration, Instant};

use guessterm::core::controller::SecretSource;
use guessterm::{Error, Feedback, GameController, Phase, ScoreStore, TierSet};
use tempfile::TempDir;

/// Always draws the same secret, like a seeded generator pinned to one value.
struct Fixed(u64);

impl SecretSource for Fixed {
    fn draw(&mut self, low: u64, high: u64) -> u64 {
        assert!((low..=high).contains(&self.0));
        self.0
    }
}

#[test]
fn easy_round_with_secret_seven() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("best_scores.json");
    let mut game =
        GameController::with_source(TierSet::default(), ScoreStore::load(&path), Fixed(7));

    let t0 = Instant::now();
    let tier = game.start_at("Easy", t0).unwrap();
    assert_eq!((tier.low, tier.high), (1, 20));

    assert_eq!(game.submit_guess_at("3", t0).unwrap(), Feedback::TooLow);
    assert_eq!(game.attempts(), 1);
    assert_eq!(game.submit_guess_at("15", t0).unwrap(), Feedback::TooHigh);
    assert_eq!(game.attempts(), 2);

    let feedback = game
        .submit_guess_at("7", t0 + Duration::from_millis(2500))
        .unwrap();
    assert!(matches!(feedback, Feedback::Correct(ref win) if win.attempts == 3));
    assert_eq!(game.phase(), Phase::Won);

    let best = game.scores().best_for("Easy").unwrap();
    assert_eq!(best.attempts, 3);
    assert!(best.elapsed >= 0.0);
    assert_eq!(best.time, "00:00:02");
}

#[test]
fn best_record_survives_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("best_scores.json");

    let mut game =
        GameController::with_source(TierSet::default(), ScoreStore::load(&path), Fixed(42));
    let t0 = Instant::now();
    game.start_at("Medium", t0).unwrap();
    game.submit_guess_at("50", t0).unwrap();
    game.submit_guess_at("42", t0 + Duration::from_nanos(3_141_592_653))
        .unwrap();
    let written = game.scores().best_for("Medium").cloned().unwrap();

    let reloaded = ScoreStore::load(&path);
    assert_eq!(reloaded.best_for("Medium"), Some(&written));
    assert_eq!(reloaded.records().count(), 1);
}

#[test]
fn reloaded_best_still_blocks_worse_results() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("best_scores.json");

    let mut first = ScoreStore::load(&path);
    first.record_result("Hard", 8, 50.0);

    let mut second = ScoreStore::load(&path);
    assert!(!second.record_result("Hard", 9, 10.0));
    assert!(second.record_result("Hard", 8, 49.5));

    let third = ScoreStore::load(&path);
    assert_eq!(third.best_for("Hard").unwrap().elapsed, 49.5);
}

#[test]
fn broken_storage_never_blocks_play() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("best_scores.json");
    std::fs::write(&path, "\u{0}\u{1}garbage").unwrap();

    // Point the store at a directory so every write fails too.
    let mut game =
        GameController::with_source(TierSet::default(), ScoreStore::load(temp.path()), Fixed(1));
    game.start("Easy").unwrap();
    assert!(matches!(game.submit_guess("1"), Ok(Feedback::Correct(_))));
    assert_eq!(game.scores().best_for("Easy").unwrap().attempts, 1);

    assert_eq!(ScoreStore::load(&path).records().count(), 0);
}

#[test]
fn negative_and_non_numeric_input_is_invalid() {
    let mut game =
        GameController::with_source(TierSet::default(), ScoreStore::in_memory(), Fixed(10));
    game.start("Easy").unwrap();

    for text in ["-1", "ten", "", "0x0A"] {
        assert!(matches!(game.submit_guess(text), Err(Error::InvalidGuess(_))));
    }
    assert_eq!(game.attempts(), 0);
}
