//! Gridmark - terminal game
//!
//! Reads positions from stdin, renders to stdout, logs to stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use gridmark::{GameConfig, GameReport, Session, Ui};
use gridmark_core::Board;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_overrides(cli.size, cli.marks.clone(), cli.no_color);
    debug!(?config, "Effective configuration");

    let board = Board::with_roster(config.roster()?, *config.side())?;
    let ui = Ui::new(*config.color());
    let mut session = Session::new(board, ui, io::stdin().lock(), io::stdout());

    let outcome = session.run()?;
    info!(%outcome, "Game finished");

    if cli.json {
        let board = session.into_board();
        println!("{}", GameReport::new(&board, &outcome).to_json()?);
    }

    Ok(())
}
