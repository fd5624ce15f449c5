//! Entity definitions for the game board.

mod hero;

pub use hero::*;

use serde::{Deserialize, Serialize};

/// Identifier the server assigns to each hero (1 through 4 in a normal game).
pub type HeroId = u32;

/// A cell coordinate on the board.
///
/// `x` is the column and `y` is the row, both zero-based. Signed so that
/// neighbor offsets off the board edge are still representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a position from a column and a row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by the given deltas. Wraps at the `i32` limits.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// The four diagonal neighbors, in column-major delta order:
    /// (-1,-1), (-1,+1), (+1,-1), (+1,+1).
    ///
    /// Board adjacency is diagonal, not orthogonal.
    pub fn diagonals(self) -> [Position; 4] {
        [
            self.offset(-1, -1),
            self.offset(-1, 1),
            self.offset(1, -1),
            self.offset(1, 1),
        ]
    }

    /// Check whether this position lies on a square board of the given size.
    pub fn is_within(self, size: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < size && (self.y as usize) < size
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
