//! Terminal presentation for a game.
//!
//! Everything the player reads lives here: glyphs for marks, the position
//! placeholders shown in empty cells, and the messages. The board itself
//! only ever hands out semantic cells.

use crossterm::style::Stylize;
use gridmark_core::{Cell, Mark};
use std::io::{self, Write};

const BREAK: &str = "────────────────────────────────────────────────────────────────";

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Glyph drawn for a mark.
pub fn symbol(mark: Mark) -> &'static str {
    match mark {
        Mark::ClassicX => "x",
        Mark::ClassicO => "o",
        Mark::ModernX => "✘",
        Mark::ModernO => "𝐎",
    }
}

/// Writes `n` with superscript digits.
pub fn superscript(n: usize) -> String {
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| SUPERSCRIPT_DIGITS[d as usize])
        .collect()
}

/// Renders boards and messages to any writer.
#[derive(Debug, Clone, Copy)]
pub struct Ui {
    color: bool,
}

impl Ui {
    /// Creates a renderer; `color` dims the position placeholders.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Title banner.
    pub fn show_title(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "    G R I D M A R K")?;
        writeln!(out, "    mark a line, win the grid")?;
        writeln!(out)?;
        writeln!(out, "{BREAK}")
    }

    /// Rules for a `side` × `side` grid and the players in turn order.
    pub fn show_how_to_play(
        &self,
        out: &mut impl Write,
        side: usize,
        marks: &[Mark],
    ) -> io::Result<()> {
        let players = marks
            .iter()
            .map(|m| format!("«{}»", symbol(*m)))
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(out)?;
        writeln!(
            out,
            "    1. The game is played on a grid that's {side} squares by {side} squares."
        )?;
        writeln!(
            out,
            "    2. Players {players} take turns putting their marks in empty squares."
        )?;
        writeln!(
            out,
            "    3. The first player to fill a row, a column or a diagonal with {side} of their marks wins."
        )?;
        writeln!(
            out,
            "    4. When all {} squares are full and nobody has a line, the game is a tie.",
            side.saturating_mul(side)
        )?;
        writeln!(out)?;
        writeln!(out, "{BREAK}")
    }

    /// Grid with marks, or position numbers in empty cells.
    pub fn show_board(
        &self,
        out: &mut impl Write,
        cells: &[Cell],
        side: usize,
    ) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.render_board(cells, side))
    }

    /// Board as text, rows separated by rule lines.
    pub fn render_board(&self, cells: &[Cell], side: usize) -> String {
        if side == 0 {
            return String::new();
        }

        let width = cells.len().to_string().len();
        let separator = vec!["—".repeat(width + 2); side].join("+");

        cells
            .chunks(side)
            .enumerate()
            .map(|(row, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| {
                        let position = row * side + col + 1;
                        format!(" {} ", self.render_cell(*cell, position, width))
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{separator}\n"))
    }

    fn render_cell(&self, cell: Cell, position: usize, width: usize) -> String {
        match cell {
            Cell::Occupied(mark) => format!("{:<width$}", symbol(mark)),
            Cell::Empty => {
                let placeholder = format!("{:<width$}", superscript(position));
                if self.color {
                    placeholder.dark_grey().to_string()
                } else {
                    placeholder
                }
            }
        }
    }

    /// Asks a player for a position.
    pub fn show_prompt(&self, out: &mut impl Write, mark: Mark) -> io::Result<()> {
        write!(out, "Player {}, enter a position: ", symbol(mark))?;
        out.flush()
    }

    /// Tie message.
    pub fn show_tie_result(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "The game has ended. The result of the game is a tie.")?;
        writeln!(out)
    }

    /// Win message.
    pub fn show_win_result(&self, out: &mut impl Write, mark: Mark) -> io::Result<()> {
        writeln!(
            out,
            "The game has ended. The result of the game is a win by player {}.",
            symbol(mark)
        )?;
        writeln!(out)
    }

    /// Rejected position message.
    pub fn show_position_is_invalid(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "Position the player enters is not valid. It should be one of the numbers you see on the board."
        )?;
        writeln!(out)
    }
}
