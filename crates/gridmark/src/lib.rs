//! Gridmark - terminal front end for the gridmark board engine
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Ui**: glyphs, placeholders and messages
//! - **Driver**: the turn loop, reading positions line by line
//! - **Report**: JSON summary of a finished game
//!
//! # Example
//!
//! ```
//! use gridmark::{GameConfig, Session, Ui};
//! use gridmark_core::{Board, Mark};
//! use std::io::Cursor;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let board = Board::with_roster(config.roster()?, *config.side())?;
//! let input = Cursor::new("1\n4\n2\n5\n3\n");
//! let mut session = Session::new(board, Ui::new(false), input, Vec::new());
//!
//! let outcome = session.run()?;
//! assert_eq!(outcome.winner().map(|p| p.mark()), Some(Mark::ClassicX));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod driver;
mod report;
mod ui;

pub use config::{ConfigError, GameConfig};
pub use driver::{Session, SessionError};
pub use report::{Decision, GameReport};
pub use ui::{Ui, superscript, symbol};
