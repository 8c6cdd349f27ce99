//! Tic-tac-toe GUI
//!
//! A graphical two-player game with a selectable move history.

mod cli;

use clap::Parser;
use cli::Cli;
use tictactoe::ui::TicTacToeApp;
use tictactoe::{AppConfig, ListOrder};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> tictactoe::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(filter) = cli.log_filter {
        config.log.filter = filter;
    }
    if cli.descending {
        config.game.list_order = ListOrder::Descending;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .init();

    info!(order = ?config.game.list_order, "Starting tic-tac-toe");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([480.0, 360.0])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "tictactoe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &config)))),
    )?;

    Ok(())
}
