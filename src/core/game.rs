/// Front-end interface driven by the engine loop
use std::time::Duration;

use crossterm::event::KeyEvent;

/// What the engine should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main game trait that interactive front ends implement
pub trait Game {
    /// Refresh interval while something on screen changes on its own.
    /// `None` means the screen only changes on input.
    fn tick_rate(&self) -> Option<Duration>;

    /// Called on every refresh. Must not change game state.
    fn on_tick(&mut self) {}

    fn handle_input(&mut self, event: KeyEvent) -> Flow;

    fn render(&self, frame: &mut ratatui::Frame);
}

/// Renderer trait for drawing a view using Ratatui
pub trait Renderer<V: ?Sized> {
    fn render(frame: &mut ratatui::Frame, view: &V);
}
