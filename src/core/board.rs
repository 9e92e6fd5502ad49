//! Board topology: cells, adjacency links, and winning lines.
//!
//! The board is a 3×3 grid numbered row-major:
//!
//! ```text
//! 0 - 1 - 2
//! | \ | / |
//! 3 - 4 - 5
//! | / | \ |
//! 6 - 7 - 8
//! ```
//!
//! Pieces slide one link at a time. The center is a hub linked to every
//! other cell; every outer cell reaches its two neighbors on the rim plus
//! the center.

use serde::{Deserialize, Serialize};

use crate::error::PositionOutOfRange;

/// A board cell, 0-8.
///
/// Only constructible through [`Position::new`] (or the [`Position::ALL`]
/// table), so every value in circulation is on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

const fn pos(index: u8) -> Position {
    Position(index)
}

impl Position {
    /// Number of cells on the board.
    pub const COUNT: usize = 9;

    pub const CENTER: Position = pos(4);

    /// Every cell in index order.
    pub const ALL: [Position; 9] = [
        pos(0),
        pos(1),
        pos(2),
        pos(3),
        pos(4),
        pos(5),
        pos(6),
        pos(7),
        pos(8),
    ];

    /// Create a position, or `None` if `index` is off the board.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    #[must_use]
    pub const fn column(self) -> usize {
        self.index() % 3
    }

    /// Cells reachable from here in one step.
    #[must_use]
    pub fn neighbors(self) -> &'static [Position] {
        ADJACENCY[self.index()]
    }

    /// Whether `other` is one link away.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.neighbors().contains(&other)
    }
}

impl TryFrom<u8> for Position {
    type Error = PositionOutOfRange;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Position::new(index).ok_or(PositionOutOfRange(index))
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Adjacency table, indexed by cell.
pub const ADJACENCY: [&[Position]; 9] = [
    &[pos(1), pos(3), pos(4)],
    &[pos(0), pos(2), pos(4)],
    &[pos(1), pos(4), pos(5)],
    &[pos(0), pos(4), pos(6)],
    &[pos(0), pos(1), pos(2), pos(3), pos(5), pos(6), pos(7), pos(8)],
    &[pos(2), pos(4), pos(8)],
    &[pos(3), pos(4), pos(7)],
    &[pos(4), pos(6), pos(8)],
    &[pos(4), pos(5), pos(7)],
];

/// Three cells in a straight line.
pub type Line = [Position; 3];

/// Lines checked for a win: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    [pos(0), pos(1), pos(2)],
    [pos(3), pos(4), pos(5)],
    [pos(6), pos(7), pos(8)],
    [pos(0), pos(3), pos(6)],
    [pos(1), pos(4), pos(7)],
    [pos(2), pos(5), pos(8)],
    [pos(0), pos(4), pos(8)],
    [pos(2), pos(4), pos(6)],
];
