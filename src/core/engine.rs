use crate::core::game::{Flow, Game};
use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tracing::debug;

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Draw, then wait for either a key press or the game's refresh tick.
    /// Returns the game so callers can inspect its final state.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        let mut events = EventStream::new();

        loop {
            terminal.draw(|f| self.game.render(f))?;

            let tick_rate = self.game.tick_rate();
            let tick = async {
                match tick_rate {
                    Some(rate) => tokio::time::sleep(rate).await,
                    None => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if key.code == KeyCode::Esc {
                            break;
                        }
                        if self.game.handle_input(key) == Flow::Quit {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        debug!("terminal event stream closed");
                        break;
                    }
                },

                _ = tick => self.game.on_tick(),
            }
        }

        Ok(self.game)
    }
}
