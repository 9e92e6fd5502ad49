//! Game rules.
//!
//! - `movement`: which slides are legal and how a slide produces the next
//!   snapshot
//! - `victory`: line detection with the starting-row exclusion
//!
//! Rules are pure functions over pieces and snapshots. Turn order and the
//! selected piece are the session's concern, not checked here.

pub mod movement;
pub mod victory;

pub use movement::{apply_move, is_valid_move, legal_moves, legal_targets, Targets};
pub use victory::{check_winner, winning_line};
