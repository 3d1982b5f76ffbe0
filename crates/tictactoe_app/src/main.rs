//! Tic-tac-toe - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_app::{Cli, Command, GameConfig, LogTarget, logging, render_text, run_script, tui};
use tictactoe_core::GameController;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or_default() {
        Command::Tui {
            player_one,
            player_two,
        } => {
            let config = config.with_names(player_one, player_two);
            logging::init(config.log_filter(), LogTarget::File(config.log_file().clone()))?;
            tui::run_tui(GameController::new(config.player_one(), config.player_two()))
        }
        Command::Script {
            json,
            player_one,
            player_two,
            moves,
        } => {
            let config = config.with_names(player_one, player_two);
            logging::init(config.log_filter(), LogTarget::Stderr)?;
            info!(moves = moves.len(), "Running scripted game");

            let mut game = GameController::new(config.player_one(), config.player_two());
            let report = run_script(&mut game, moves.as_slice());
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("Failed to encode report")?
                );
            } else {
                print!("{}", render_text(&report));
            }
            Ok(())
        }
    }
}
