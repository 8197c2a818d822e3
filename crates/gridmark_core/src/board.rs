//! The board state machine.

use super::action::Placement;
use super::contracts::{Contract, PlaceMarkContract};
use super::{Cell, GameOutcome, GridError, Player, Roster, rules};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// N×N board with a fixed roster.
///
/// Cells are stored in row-major order. A cell goes from empty to occupied
/// exactly once and is never overwritten. The board does not enforce turn
/// order; that is the driver's job.
#[derive(Debug, Clone)]
pub struct Board {
    side: usize,
    pub(crate) cells: Vec<Cell>,
    roster: Roster,
}

impl Board {
    /// Largest accepted side length.
    pub const MAX_SIDE: usize = 1024;

    /// Creates an empty `side` × `side` board for the given players.
    ///
    /// Fails if two players share a mark, if no players are given, or if
    /// `side` is outside `1..=Board::MAX_SIDE`.
    #[instrument(skip(players))]
    pub fn new(
        players: impl IntoIterator<Item = Arc<Player>>,
        side: usize,
    ) -> Result<Self, GridError> {
        let roster = Roster::new(players.into_iter().collect())?;
        Self::with_roster(roster, side)
    }

    /// Creates an empty board for an already validated roster.
    #[instrument(skip(roster), fields(players = roster.len()))]
    pub fn with_roster(roster: Roster, side: usize) -> Result<Self, GridError> {
        let cells = match side.checked_mul(side) {
            Some(cells) if (1..=Self::MAX_SIDE).contains(&side) => cells,
            _ => {
                warn!(side, "Rejected board size");
                return Err(GridError::InvalidSize(side));
            }
        };

        debug!(side, "Board created");
        Ok(Self {
            side,
            cells: vec![Cell::Empty; cells],
            roster,
        })
    }

    /// Cells along one edge.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Registered players in turn order.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Read-only view of all cells in row-major order.
    pub fn snapshot(&self) -> &[Cell] {
        &self.cells
    }

    /// 1-based positions that are still empty.
    pub fn open_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index + 1)
            .collect()
    }

    /// Places `player`'s mark at the 1-based `position`.
    ///
    /// The player must be the same registered instance, not merely one with
    /// an equal mark.
    #[instrument(skip(self, player), fields(mark = %player.mark()))]
    pub fn place_mark(
        &mut self,
        player: &Arc<Player>,
        position: usize,
    ) -> Result<(), GridError> {
        let placement = Placement::new(Arc::clone(player), position);

        if let Err(e) = PlaceMarkContract::pre(self, &placement) {
            warn!(error = %e, "Placement rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.cells[placement.index()] = Cell::Occupied(player.mark());

        #[cfg(debug_assertions)]
        {
            let post = PlaceMarkContract::post(&before, self, &placement);
            debug_assert!(post.is_ok(), "placement postcondition failed: {post:?}");
        }

        debug!(%placement, "Mark placed");
        Ok(())
    }

    /// Decides whether the game continues, is tied, or has been won.
    ///
    /// Pure function of the current cells; repeated calls on an unchanged
    /// board return equal outcomes.
    #[instrument(skip(self), fields(side = self.side))]
    pub fn evaluate(&self) -> GameOutcome {
        if let Some(mark) = rules::winning_mark(&self.cells, self.side) {
            match self.roster.find_by_mark(mark) {
                Some(player) => {
                    debug!(%mark, "Line completed");
                    return GameOutcome::Win(Arc::clone(player));
                }
                None => warn!(%mark, "Completed line belongs to no registered player"),
            }
        }

        if rules::is_full(&self.cells) {
            debug!("Board full without a winner");
            GameOutcome::Tie
        } else {
            GameOutcome::Continue
        }
    }
}
