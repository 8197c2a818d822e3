//! Gridmark core - board logic for N×N mark-placement games
//!
//! Players take turns placing their marks on a square grid; a player who
//! fills a row, a column or a full diagonal wins, and a full board with no
//! such line is a tie.
//!
//! # Architecture
//!
//! - **Lines**: pure row / column / diagonal extraction over a flat slice
//! - **Rules**: win and tie detection built on the line extractor
//! - **Board**: cell storage, roster, move validation and evaluation
//! - **Contracts / invariants**: pre- and postconditions of a placement
//!
//! # Example
//!
//! ```
//! use gridmark_core::{Board, GameOutcome, Mark, Player};
//!
//! # fn example() -> Result<(), gridmark_core::GridError> {
//! let x = Player::shared(Mark::ClassicX);
//! let o = Player::shared(Mark::ClassicO);
//! let mut board = Board::new([x.clone(), o.clone()], 3)?;
//!
//! board.place_mark(&x, 5)?;
//! board.place_mark(&o, 1)?;
//! assert_eq!(board.evaluate(), GameOutcome::Continue);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod roster;
mod types;

pub mod contracts;
pub mod invariants;
pub mod lines;
pub mod rules;

pub use action::Placement;
pub use board::Board;
pub use error::GridError;
pub use roster::Roster;
pub use types::{Cell, GameOutcome, Mark, Player};
