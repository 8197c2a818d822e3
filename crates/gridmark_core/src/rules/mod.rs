//! Game rules for grid games.
//!
//! Pure functions that judge a cell sequence. Rules are separated from
//! board storage so they can be checked without a roster.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_mark;
