//! Core domain types for grid games.

use derive_new::new;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Symbol a player places on the board.
///
/// Marks are compared by value and are usable as map keys. The textual
/// form (`classic-x`, `modern-o`, ...) is a name, not the glyph drawn on
/// screen; glyphs belong to the presentation layer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mark {
    /// Classic `x`.
    ClassicX,
    /// Classic `o`.
    ClassicO,
    /// Heavy ballot `x`.
    ModernX,
    /// Bold mathematical `o`.
    ModernO,
}

/// A participant, identified by its mark.
///
/// Players are immutable and shared as `Arc<Player>`. Boards recognise a
/// player by the identity of that `Arc`, so two separately created players
/// with the same mark are still different players.
#[derive(Debug, PartialEq, Eq, Hash, new)]
pub struct Player {
    mark: Mark,
}

impl Player {
    /// Creates a player ready to be registered on a board.
    pub fn shared(mark: Mark) -> Arc<Self> {
        Arc::new(Self::new(mark))
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cell {
    /// Nobody has marked this cell yet.
    #[default]
    Empty,
    /// Cell carries a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns true if the cell holds no mark.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(*mark),
        }
    }
}

/// Result of evaluating a board.
///
/// Only `Win` carries a player. Two outcomes are equal when their tags
/// match and, for `Win`, the winners hold the same mark.
#[derive(Debug, Clone, derive_more::Display)]
pub enum GameOutcome {
    /// The game goes on.
    #[display("continue")]
    Continue,
    /// Board is full and nobody completed a line.
    #[display("tie")]
    Tie,
    /// A player completed a line.
    #[display("win by {}", _0.mark())]
    Win(Arc<Player>),
}

impl GameOutcome {
    /// Returns true for `Tie` and `Win`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Continue)
    }

    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<&Arc<Player>> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Continue | GameOutcome::Tie => None,
        }
    }
}

impl PartialEq for GameOutcome {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (GameOutcome::Continue, GameOutcome::Continue) => true,
            (GameOutcome::Tie, GameOutcome::Tie) => true,
            (GameOutcome::Win(a), GameOutcome::Win(b)) => a.mark() == b.mark(),
            _ => false,
        }
    }
}

impl Eq for GameOutcome {}
