//! # shift-three
//!
//! Game engine for a movement variant of tic-tac-toe.
//!
//! Each player starts with three pieces on their home row of a 3×3 board.
//! Nothing is ever placed: on your turn you slide one of your pieces along
//! a link to an empty neighboring cell. Fill a row, column or diagonal that
//! is not your home row and you win.
//!
//! ## Architecture
//!
//! - **Immutable snapshots**: every move produces a new `GameState`; the old
//!   one is never edited.
//! - **History arena**: snapshots are kept in a persistent vector with a
//!   cursor, which gives undo/redo for free and truncates the redo branch on
//!   a new move.
//! - **Silent no-ops**: illegal intents from the UI leave everything
//!   unchanged instead of erroring. Only setup validation returns errors.
//!
//! ## Modules
//!
//! - `core`: players, board topology, pieces, snapshots, match setup
//! - `rules`: move validation, move application, win detection
//! - `session`: the per-match object the presentation layer drives
//! - `error`: setup errors
//!
//! ## Example
//!
//! ```
//! use shift_three::{Player, Position, Session};
//!
//! let mut session = Session::new("Ana", "red", "Rui", "blue");
//! let cell = |i| Position::new(i).unwrap();
//!
//! session.select(cell(2));
//! let state = session.commit(cell(5));
//!
//! assert_eq!(state.current_player(), Player::Two);
//! assert_eq!(state.winner(), None);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameState, Line, MatchSetup, Move, Piece, Player, PlayerMap, Position, Profile,
};

pub use crate::error::{PositionOutOfRange, SetupError};

pub use crate::rules::{check_winner, is_valid_move, legal_moves, legal_targets};

pub use crate::session::{ElapsedClock, History, Session};
