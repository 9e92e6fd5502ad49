//! Move validation and application.

use smallvec::SmallVec;

use super::victory::check_winner;
use crate::core::{GameState, Move, Piece, Position};

/// Legal destinations of one piece. At most 8 (a piece on the center).
pub type Targets = SmallVec<[Position; 8]>;

/// Whether `piece` may slide to `target`.
///
/// The target must be linked to the piece's cell and must be empty. Whose
/// turn it is does not matter here.
#[must_use]
pub fn is_valid_move(piece: &Piece, target: Position, all_pieces: &[Piece]) -> bool {
    piece.position.is_adjacent(target) && !all_pieces.iter().any(|p| p.position == target)
}

/// Every cell `piece` could move to right now.
#[must_use]
pub fn legal_targets(piece: &Piece, all_pieces: &[Piece]) -> Targets {
    piece
        .position
        .neighbors()
        .iter()
        .copied()
        .filter(|&target| is_valid_move(piece, target, all_pieces))
        .collect()
}

/// Every legal move for the side to move. Empty once the game is decided.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    if state.is_over() {
        return Vec::new();
    }

    let pieces = state.pieces();
    pieces
        .iter()
        .filter(|p| p.owner == state.current_player())
        .flat_map(|piece| {
            legal_targets(piece, pieces)
                .into_iter()
                .map(move |to| Move::new(piece.position, to))
        })
        .collect()
}

/// Build the snapshot that follows sliding the piece in slot `piece_index`
/// to `target`.
///
/// The mover is `state.current_player()`: their counter goes up by one, the
/// turn passes, and the winner is evaluated on the new layout. Returns
/// `None` (and builds nothing) if the game is already decided, the slot is
/// out of range, or the slide is illegal.
#[must_use]
pub fn apply_move(state: &GameState, piece_index: usize, target: Position) -> Option<GameState> {
    if state.is_over() {
        return None;
    }

    let mut pieces = *state.pieces();
    let piece = *pieces.get(piece_index)?;
    if !is_valid_move(&piece, target, &pieces) {
        return None;
    }
    pieces[piece_index] = piece.moved_to(target);

    let mover = state.current_player();
    let mut moves = *state.move_counts();
    moves[mover] += 1;

    let winner = check_winner(&pieces);
    Some(GameState::from_parts(pieces, mover.opponent(), winner, moves))
}
