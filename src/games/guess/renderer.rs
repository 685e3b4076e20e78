/// Guess-the-number renderer
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::core::controller::{format_elapsed, SecretSource};
use crate::core::game::Renderer;
use crate::games::guess::game::GuessGame;

pub struct GuessRenderer;

impl<S: SecretSource> Renderer<GuessGame<S>> for GuessRenderer {
    fn render(f: &mut Frame, game: &GuessGame<S>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(f.area());

        f.render_widget(
            Paragraph::new("GUESS THE NUMBER")
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let tiers = game.controller().tiers();
        let titles: Vec<Line> = tiers
            .iter()
            .map(|t| Line::from(format!("{} ({}-{})", t.name, t.low, t.high)))
            .collect();
        f.render_widget(
            Tabs::new(titles)
                .select(game.selected_index())
                .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .block(Block::default().title(" DIFFICULTY ").borders(Borders::ALL)),
            chunks[1],
        );

        let time = game
            .controller()
            .elapsed()
            .map(|d| format_elapsed(d.as_secs_f64()))
            .unwrap_or_else(|| format_elapsed(0.0));
        let best = match game.best() {
            Some(record) => format!(
                "Best: {} attempts, {}",
                record.attempts,
                format_elapsed(record.elapsed)
            ),
            None => "Best: —".to_string(),
        };
        let status = Line::from(format!(
            "Time: {}   Attempts: {}   {}",
            time,
            game.controller().attempts(),
            best
        ));
        f.render_widget(
            Paragraph::new(status)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[2],
        );

        f.render_widget(
            Paragraph::new(game.message())
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[3],
        );

        f.render_widget(
            Paragraph::new(format!("> {}", game.input()))
                .block(Block::default().title(" GUESS ").borders(Borders::ALL)),
            chunks[4],
        );

        f.render_widget(
            Paragraph::new("[F2] Start  [Enter/F3] Check  [F4] Reset  [Tab] Difficulty  [Esc] Quit")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            chunks[5],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::GameController;
    use crate::core::game::Game;
    use crate::core::scores::ScoreStore;
    use crate::core::tier::TierSet;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    struct Fixed(u64);

    impl SecretSource for Fixed {
        fn draw(&mut self, _low: u64, _high: u64) -> u64 {
            self.0
        }
    }

    fn screen(game: &GuessGame<Fixed>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| game.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn game() -> GuessGame<Fixed> {
        let controller =
            GameController::with_source(TierSet::default(), ScoreStore::in_memory(), Fixed(5));
        GuessGame::new(controller, "Medium", Duration::from_millis(200))
    }

    #[test]
    fn idle_screen_shows_defaults() {
        let text = screen(&game());
        assert!(text.contains("GUESS THE NUMBER"));
        assert!(text.contains("Medium (1-100)"));
        assert!(text.contains("Time: 00:00:00"));
        assert!(text.contains("Attempts: 0"));
        assert!(text.contains("Best: —"));
        assert!(text.contains("Press F2 to begin"));
    }

    #[test]
    fn shows_input_and_best_after_win() {
        let mut g = game();
        g.handle_input(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE));
        g.handle_input(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE));
        g.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        g.handle_input(KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE));
        g.handle_input(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE));

        let text = screen(&g);
        assert!(text.contains("> 42"));
        assert!(text.contains("Attempts: 1"));
        assert!(text.contains("Best: 1 attempts, 00:00:00"));
        assert!(text.contains("Correct! 5 in 1 attempts"));
    }

    #[test]
    fn best_time_comes_from_elapsed_seconds() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("best_scores.json");
        std::fs::write(
            &path,
            r#"{ "Medium": { "attempts": 2, "time": "12:34:56", "elapsed": 75.0 } }"#,
        )
        .unwrap();

        let controller =
            GameController::with_source(TierSet::default(), ScoreStore::load(&path), Fixed(5));
        let g = GuessGame::new(controller, "Medium", Duration::from_millis(200));

        let text = screen(&g);
        assert!(text.contains("Best: 2 attempts, 00:01:15"));
        assert!(!text.contains("12:34:56"));
    }
}
