//! Win detection.
//!
//! A player wins by filling a line with their own three pieces, as long as
//! that line is not the row they started on.

use smallvec::SmallVec;

use crate::core::{starting_line, Line, Piece, Player, LINES};

/// The first winning line on the board and who holds it.
///
/// Lines are scanned rows, then columns, then diagonals. Only one player
/// moves per turn, so at most one line can newly qualify after a move.
#[must_use]
pub fn winning_line(pieces: &[Piece]) -> Option<(Player, Line)> {
    LINES.iter().find_map(|line| {
        let on_line: SmallVec<[&Piece; 3]> = pieces
            .iter()
            .filter(|p| line.contains(&p.position))
            .collect();

        if on_line.len() != 3 {
            return None;
        }
        let owner = on_line[0].owner;
        if !on_line.iter().all(|p| p.owner == owner) {
            return None;
        }
        if *line == starting_line(owner) {
            return None;
        }
        Some((owner, *line))
    })
}

/// The winner for this layout, if any.
#[must_use]
pub fn check_winner(pieces: &[Piece]) -> Option<Player> {
    winning_line(pieces).map(|(player, _)| player)
}
