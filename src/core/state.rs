//! Game state snapshots.
//!
//! A `GameState` is a complete, immutable picture of the match at one point:
//! piece layout, side to move, winner, and per-player move counters.
//! Transitions never edit a snapshot in place; `rules::apply_move` builds the
//! next one.

use serde::Serialize;

use super::board::Position;
use super::piece::{initial_pieces, Piece, PIECE_COUNT};
use super::player::{Player, PlayerMap};

/// Serialize-only: snapshots are built by `initial` and `rules::apply_move`,
/// never read back from outside.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    pieces: [Piece; PIECE_COUNT],
    current_player: Player,
    winner: Option<Player>,
    moves: PlayerMap<u32>,
}

impl GameState {
    /// The opening position: both rows filled, player 1 to move.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            pieces: initial_pieces(),
            current_player: Player::One,
            winner: None,
            moves: PlayerMap::with_default(),
        }
    }

    pub(crate) fn from_parts(
        pieces: [Piece; PIECE_COUNT],
        current_player: Player,
        winner: Option<Player>,
        moves: PlayerMap<u32>,
    ) -> Self {
        Self {
            pieces,
            current_player,
            winner,
            moves,
        }
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece; PIECE_COUNT] {
        &self.pieces
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Whether a winner has been recorded.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Number of moves a player has made so far.
    #[must_use]
    pub fn moves(&self, player: Player) -> u32 {
        self.moves[player]
    }

    #[must_use]
    pub fn move_counts(&self) -> &PlayerMap<u32> {
        &self.moves
    }

    /// The piece on `position`, if any.
    #[must_use]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.pieces.iter().copied().find(|p| p.position == position)
    }

    /// Slot of the piece on `position` within [`GameState::pieces`].
    #[must_use]
    pub fn piece_index_at(&self, position: Position) -> Option<usize> {
        self.pieces.iter().position(|p| p.position == position)
    }

    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.piece_at(position).is_some()
    }

    /// Cells held by `player`, in piece order.
    pub fn positions_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        self.pieces
            .iter()
            .filter(move |p| p.owner == player)
            .map(|p| p.position)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
