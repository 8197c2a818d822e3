//! Registered players of a single game.

use super::{GridError, Mark, Player};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Ordered, mark-unique list of players.
///
/// Membership and attribution are separate questions: [`Roster::contains`]
/// asks whether this exact player was registered, [`Roster::find_by_mark`]
/// asks who owns a mark.
#[derive(Debug, Clone)]
pub struct Roster {
    players: Vec<Arc<Player>>,
}

impl Roster {
    /// Validates and stores the players in turn order.
    #[instrument(skip(players), fields(count = players.len()))]
    pub fn new(players: Vec<Arc<Player>>) -> Result<Self, GridError> {
        if players.is_empty() {
            warn!("Rejected empty roster");
            return Err(GridError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = players.iter().map(|p| p.mark()).find(|m| !seen.insert(*m)) {
            warn!(%duplicate, "Rejected roster with duplicate marks");
            return Err(GridError::DuplicateMarks(duplicate));
        }

        Ok(Self { players })
    }

    /// Creates one fresh player per mark.
    pub fn from_marks(marks: impl IntoIterator<Item = Mark>) -> Result<Self, GridError> {
        Self::new(marks.into_iter().map(Player::shared).collect())
    }

    /// Returns true if this exact player instance is registered.
    pub fn contains(&self, player: &Arc<Player>) -> bool {
        self.players.iter().any(|p| Arc::ptr_eq(p, player))
    }

    /// Returns the first registered player holding `mark`.
    pub fn find_by_mark(&self, mark: Mark) -> Option<&Arc<Player>> {
        self.players.iter().find(|p| p.mark() == mark)
    }

    /// Returns the players in turn order.
    pub fn players(&self) -> &[Arc<Player>] {
        &self.players
    }

    /// Returns an iterator over the players.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Player>> {
        self.players.iter()
    }

    /// Number of registered players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false for a validated roster.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Arc<Player>;
    type IntoIter = std::slice::Iter<'a, Arc<Player>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
