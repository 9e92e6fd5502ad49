//! Error types.
//!
//! Only the setup boundary (and decoding a cell index) can fail. Once a
//! session exists, every illegal intent is a silent no-op rather than an
//! error.

use thiserror::Error;

use crate::core::Player;

/// Why a [`MatchSetup`](crate::core::MatchSetup) cannot start a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SetupError {
    #[error("{player} has no name")]
    MissingName { player: Player },

    #[error("{player} has no color")]
    MissingColor { player: Player },

    #[error("both players chose the color '{color}'")]
    DuplicateColor { color: String },
}

/// A cell index outside 0-8.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("position {0} is off the board")]
pub struct PositionOutOfRange(pub u8);
