//! Command-line interface for gridmark.

use clap::Parser;
use gridmark_core::Mark;

/// Gridmark - fill a row, a column or a diagonal to win
#[derive(Parser, Debug)]
#[command(name = "gridmark")]
#[command(about = "Turn-based N×N grid game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Cells along one edge of the board (overrides the config file)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Player marks in turn order, e.g. classic-x,classic-o
    #[arg(short, long, value_delimiter = ',')]
    pub marks: Option<Vec<Mark>>,

    /// Do not dim position placeholders
    #[arg(long)]
    pub no_color: bool,

    /// Print the final board and outcome as JSON
    #[arg(long)]
    pub json: bool,
}
