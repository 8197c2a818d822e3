//! Unique marks invariant: no two registered players share a mark.

use super::super::Board;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: roster marks are pairwise distinct.
pub struct UniqueMarksInvariant;

impl Invariant<Board> for UniqueMarksInvariant {
    fn holds(board: &Board) -> bool {
        let mut seen = HashSet::new();
        board.roster().iter().all(|p| seen.insert(p.mark()))
    }

    fn description() -> &'static str {
        "Every registered player holds a distinct mark"
    }
}
