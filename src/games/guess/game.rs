use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::ThreadRng;
use tracing::warn;

use crate::core::controller::{Feedback, GameController, Phase, RandomSecret, SecretSource};
use crate::core::error::Error;
use crate::core::game::{Flow, Game, Renderer};
use crate::core::scores::BestRecord;
use crate::core::tier::DifficultyTier;
use crate::games::guess::renderer::GuessRenderer;

pub const IDLE_MESSAGE: &str = "Press F2 to begin";
const MAX_INPUT_LEN: usize = 24;

/// Terminal front end: tier picker, input line and status around a controller.
pub struct GuessGame<S = RandomSecret<ThreadRng>> {
    controller: GameController<S>,
    selected: usize,
    input: String,
    message: String,
    refresh: Duration,
}

impl<S: SecretSource> GuessGame<S> {
    /// `tier` preselects a tier by name; unknown names fall back to the first.
    pub fn new(controller: GameController<S>, tier: &str, refresh: Duration) -> Self {
        let selected = controller.tiers().position(tier).unwrap_or(0);
        Self {
            controller,
            selected,
            input: String::new(),
            message: IDLE_MESSAGE.to_string(),
            refresh,
        }
    }

    pub fn controller(&self) -> &GameController<S> {
        &self.controller
    }

    pub fn selected_tier(&self) -> &DifficultyTier {
        self.controller.tiers().nth(self.selected)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn best(&self) -> Option<&BestRecord> {
        self.controller.scores().best_for(&self.selected_tier().name)
    }

    fn cycle_tier(&mut self, forward: bool) {
        let len = self.controller.tiers().len();
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }

    fn start(&mut self) {
        let name = self.selected_tier().name.clone();
        self.message = match self.controller.start(&name) {
            Ok(tier) => format!(
                "I've chosen a number between {} and {}. Good luck!",
                tier.low, tier.high
            ),
            Err(e) => {
                warn!(error = %e, "could not start round");
                e.to_string()
            }
        };
        self.input.clear();
    }

    fn check(&mut self) {
        match self.controller.submit_guess(&self.input) {
            Ok(Feedback::Ignored) => return,
            Ok(Feedback::TooLow) => self.message = "Too low".to_string(),
            Ok(Feedback::TooHigh) => self.message = "Too high".to_string(),
            Ok(Feedback::Correct(win)) => {
                self.message = format!(
                    "Correct! {} in {} attempts and {}",
                    win.guess,
                    win.attempts,
                    win.time()
                );
                if win.new_best {
                    self.message.push_str(". New best!");
                }
            }
            Err(Error::InvalidGuess(_)) => {
                self.message = "Enter a valid number.".to_string();
                return;
            }
            Err(e) => {
                warn!(error = %e, "unexpected error while checking guess");
                self.message = e.to_string();
                return;
            }
        }
        self.input.clear();
    }

    fn reset(&mut self) {
        self.controller.reset();
        self.message = IDLE_MESSAGE.to_string();
        self.input.clear();
    }
}

impl<S: SecretSource> Game for GuessGame<S> {
    fn tick_rate(&self) -> Option<Duration> {
        (self.controller.phase() == Phase::Running).then_some(self.refresh)
    }

    fn handle_input(&mut self, event: KeyEvent) -> Flow {
        match event.code {
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Quit;
            }
            KeyCode::F(2) => self.start(),
            KeyCode::Enter | KeyCode::F(3) => self.check(),
            KeyCode::F(4) => self.reset(),
            KeyCode::Tab => self.cycle_tier(true),
            KeyCode::BackTab => self.cycle_tier(false),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                if self.input.chars().count() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        GuessRenderer::render(frame, self);
    }
}
