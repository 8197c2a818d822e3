//! Turn loop that drives a board from line-based input.

use crate::ui::Ui;
use derive_more::{Display, Error};
use gridmark_core::{Board, GameOutcome, GridError, Player};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Error that ends a session before the game is decided.
#[derive(Debug, Display, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),

    /// Input reached end of file mid-game.
    #[display("Input closed before the game ended")]
    InputClosed,

    /// The board refused an operation the session cannot recover from.
    #[display("Board error: {}", _0)]
    Board(GridError),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<GridError> for SessionError {
    fn from(err: GridError) -> Self {
        Self::Board(err)
    }
}

/// One game played over a reader and a writer.
///
/// Players move in roster order, wrapping around. A rejected position
/// re-prompts the same player. The session returns the outcome once the
/// board reports a tie or a win.
#[derive(Debug)]
pub struct Session<R, W> {
    board: Board,
    ui: Ui,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around a freshly built board.
    pub fn new(board: Board, ui: Ui, input: R, output: W) -> Self {
        Self {
            board,
            ui,
            input,
            output,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the session, returning the board.
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Plays until the board is decided.
    #[instrument(skip(self), fields(side = self.board.side()))]
    pub fn run(&mut self) -> Result<GameOutcome, SessionError> {
        let players: Vec<Arc<Player>> = self.board.roster().players().to_vec();
        let marks: Vec<_> = players.iter().map(|p| p.mark()).collect();

        info!(players = players.len(), "Game started");
        self.ui.show_title(&mut self.output)?;
        self.ui
            .show_how_to_play(&mut self.output, self.board.side(), &marks)?;
        self.show_board()?;

        for player in players.iter().cycle() {
            self.take_turn(player)?;
            self.show_board()?;

            match self.board.evaluate() {
                GameOutcome::Continue => continue,
                GameOutcome::Tie => {
                    info!("Game tied");
                    self.ui.show_tie_result(&mut self.output)?;
                    return Ok(GameOutcome::Tie);
                }
                GameOutcome::Win(winner) => {
                    info!(mark = %winner.mark(), "Game won");
                    self.ui.show_win_result(&mut self.output, winner.mark())?;
                    return Ok(GameOutcome::Win(winner));
                }
            }
        }

        Err(SessionError::Board(GridError::EmptyRoster))
    }

    /// Prompts `player` until the board accepts a position.
    #[instrument(skip(self, player), fields(mark = %player.mark()))]
    fn take_turn(&mut self, player: &Arc<Player>) -> Result<(), SessionError> {
        loop {
            self.ui.show_prompt(&mut self.output, player.mark())?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SessionError::InputClosed);
            }

            let Some(position) = parse_position(&line) else {
                debug!(input = line.trim_end(), "Not a position");
                self.ui.show_position_is_invalid(&mut self.output)?;
                continue;
            };

            match self.board.place_mark(player, position) {
                Ok(()) => return Ok(()),
                Err(
                    e @ (GridError::PositionOutOfRange { .. }
                    | GridError::PositionOccupied(_)
                    | GridError::UnknownPlayer(_)),
                ) => {
                    debug!(error = %e, "Re-prompting");
                    self.ui.show_position_is_invalid(&mut self.output)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn show_board(&mut self) -> Result<(), SessionError> {
        self.ui
            .show_board(&mut self.output, self.board.snapshot(), self.board.side())?;
        Ok(())
    }
}

/// Reads a position from one input line.
///
/// Only the line ending is stripped. Anything but a non-empty run of ASCII
/// digits is rejected, so signs and padding never reach the board.
fn parse_position(line: &str) -> Option<usize> {
    let digits = line.trim_end_matches(['\r', '\n']);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
