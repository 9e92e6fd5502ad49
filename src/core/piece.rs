//! Pieces and moves.
//!
//! The six pieces are laid out once at setup and only ever slide afterwards:
//! player 1 holds the top row, player 2 the bottom row.

use serde::{Deserialize, Serialize};

use super::board::{Line, Position, LINES};
use super::player::Player;

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "player")]
    pub owner: Player,
    pub position: Position,
}

impl Piece {
    #[must_use]
    pub const fn new(owner: Player, position: Position) -> Self {
        Self { owner, position }
    }

    /// This piece relocated to `target`.
    #[must_use]
    pub const fn moved_to(self, target: Position) -> Self {
        Self {
            owner: self.owner,
            position: target,
        }
    }
}

/// Number of pieces on the board, fixed for the whole match.
pub const PIECE_COUNT: usize = 6;

/// The row each player starts on.
#[must_use]
pub const fn starting_line(player: Player) -> Line {
    match player {
        Player::One => LINES[0],
        Player::Two => LINES[2],
    }
}

/// Initial layout: player 1 on cells 0-2, player 2 on cells 6-8.
#[must_use]
pub fn initial_pieces() -> [Piece; PIECE_COUNT] {
    let [a, b, c] = starting_line(Player::One);
    let [d, e, f] = starting_line(Player::Two);
    [
        Piece::new(Player::One, a),
        Piece::new(Player::One, b),
        Piece::new(Player::One, c),
        Piece::new(Player::Two, d),
        Piece::new(Player::Two, e),
        Piece::new(Player::Two, f),
    ]
}

/// One slide of a piece along a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let pieces = initial_pieces();
        let cells = |player| -> Vec<usize> {
            pieces
                .iter()
                .filter(|p| p.owner == player)
                .map(|p| p.position.index())
                .collect()
        };

        assert_eq!(cells(Player::One), vec![0, 1, 2]);
        assert_eq!(cells(Player::Two), vec![6, 7, 8]);
    }

    #[test]
    fn test_moved_to_keeps_owner() {
        let piece = Piece::new(Player::Two, Position::CENTER);
        let target = Position::new(3).unwrap();
        let moved = piece.moved_to(target);

        assert_eq!(moved.owner, Player::Two);
        assert_eq!(moved.position, target);
    }

    #[test]
    fn test_piece_serialization() {
        let piece = Piece::new(Player::One, Position::new(2).unwrap());
        let json = serde_json::to_string(&piece).unwrap();
        assert_eq!(json, r#"{"player":"player1","position":2}"#);
        assert_eq!(serde_json::from_str::<Piece>(&json).unwrap(), piece);
    }
}
