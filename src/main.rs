use anyhow::{Context, Result};
use clap::Parser;
use guessterm::cli::{Cli, Command};
use guessterm::config::Settings;
use guessterm::core::controller::format_elapsed;
use guessterm::core::engine::Engine;
use guessterm::games::guess::GuessGame;
use guessterm::logging;
use guessterm::{GameController, ScoreStore};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings().context("failed to load settings")?;
    let command = cli.command();
    match command {
        Command::Play { .. } => logging::init_for_play(&settings.log_file),
        Command::Scores | Command::Tiers => logging::init_for_console(),
    }

    match command {
        Command::Play { difficulty } => play(settings, difficulty).await,
        Command::Scores => {
            print_scores(&settings)?;
            Ok(())
        }
        Command::Tiers => {
            let tiers = settings.tier_set()?;
            for tier in tiers.iter() {
                let marker = if tier.name == settings.default_tier { "*" } else { " " };
                println!("{} {:<10} {}-{}", marker, tier.name, tier.low, tier.high);
            }
            Ok(())
        }
    }
}

async fn play(settings: Settings, difficulty: Option<String>) -> Result<()> {
    let tiers = settings.tier_set()?;
    let tier = match difficulty {
        Some(name) => {
            anyhow::ensure!(tiers.get(&name).is_some(), "unknown difficulty tier: {name}");
            name
        }
        None => settings.default_tier.clone(),
    };

    let scores = ScoreStore::load(&settings.scores_file);
    let controller = GameController::new(tiers, scores);
    let game = GuessGame::new(controller, &tier, settings.refresh());
    info!(tier = %tier, scores = %settings.scores_file.display(), "starting game");

    let terminal = ratatui::init();
    let result = Engine::new(game).run(terminal).await;
    ratatui::restore();

    let game = result?;
    info!(attempts = game.controller().attempts(), "game closed");
    Ok(())
}

fn print_scores(settings: &Settings) -> Result<()> {
    let tiers = settings.tier_set()?;
    let scores = ScoreStore::load(&settings.scores_file);
    println!("Best scores ({}):", settings.scores_file.display());
    for tier in tiers.iter() {
        match scores.best_for(&tier.name) {
            Some(best) => println!(
                "  {:<10} {} attempts, {}",
                tier.name,
                best.attempts,
                format_elapsed(best.elapsed)
            ),
            None => println!("  {:<10} —", tier.name),
        }
    }
    Ok(())
}
