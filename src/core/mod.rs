//! Core types: players, board topology, pieces, state snapshots, setup.
//!
//! Everything here is plain data. The rules that move pieces live in
//! `rules`; the history and selection that drive a match live in `session`.

pub mod player;
pub mod board;
pub mod piece;
pub mod state;
pub mod config;

pub use player::{Player, PlayerMap, Profile};
pub use board::{Line, Position, ADJACENCY, LINES};
pub use piece::{initial_pieces, starting_line, Move, Piece, PIECE_COUNT};
pub use state::GameState;
pub use config::MatchSetup;
