//! First-class placement action.

use super::Player;
use derive_new::new;
use std::sync::Arc;

/// A player placing their mark at a 1-based position.
///
/// Placements can be validated against a board before being applied.
#[derive(Debug, Clone, new)]
pub struct Placement {
    /// The player placing the mark.
    pub player: Arc<Player>,
    /// 1-based position in row-major order.
    pub position: usize,
}

impl Placement {
    /// Zero-based cell index.
    ///
    /// Only meaningful once the position has passed range validation.
    pub fn index(&self) -> usize {
        self.position.saturating_sub(1)
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player.mark(), self.position)
    }
}
