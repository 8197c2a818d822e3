//! Machine-readable summary of a finished game.

use gridmark_core::{Board, Cell, GameOutcome, Mark};
use serde::{Deserialize, Serialize};

/// How a game stands, without the winner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Decision {
    /// The game is still open.
    Continue,
    /// The board filled up without a line.
    Tie,
    /// A player completed a line.
    Win,
}

impl From<&GameOutcome> for Decision {
    fn from(outcome: &GameOutcome) -> Self {
        match outcome {
            GameOutcome::Continue => Self::Continue,
            GameOutcome::Tie => Self::Tie,
            GameOutcome::Win(_) => Self::Win,
        }
    }
}

/// Final state of a game, for `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// Whether the game continues, tied or was won.
    pub decision: Decision,
    /// Winner's mark, for wins.
    pub winner: Option<Mark>,
    /// Cells along one edge.
    pub side: usize,
    /// Cells in row-major order.
    pub cells: Vec<Cell>,
}

impl GameReport {
    /// Captures the board and its outcome.
    pub fn new(board: &Board, outcome: &GameOutcome) -> Self {
        Self {
            decision: Decision::from(outcome),
            winner: outcome.winner().map(|p| p.mark()),
            side: board.side(),
            cells: board.snapshot().to_vec(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
