//! Cell, mine, and pub definitions.

use std::sync::Arc;

use game_state::{Hero, HeroId, Position};

/// A vertex of the board graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub(crate) position: Position,
    pub(crate) neighbors: Vec<Position>,
}

impl Cell {
    /// Position of this cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Positions reachable in one move from this cell.
    pub fn neighbors(&self) -> &[Position] {
        &self.neighbors
    }

    /// Check if `other` is reachable in one move from this cell.
    pub fn is_adjacent_to(&self, other: Position) -> bool {
        self.neighbors.contains(&other)
    }
}

/// A mine and its current owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mine {
    pub position: Position,
    /// None = unclaimed.
    pub owner: Option<Arc<Hero>>,
}

impl Mine {
    /// Create a mine at `position`.
    pub fn new(position: Position, owner: Option<Arc<Hero>>) -> Self {
        Self { position, owner }
    }

    /// Id of the owning hero, if any.
    pub fn owner_id(&self) -> Option<HeroId> {
        self.owner.as_ref().map(|hero| hero.id)
    }

    /// Check if the mine belongs to the given hero.
    pub fn is_owned_by(&self, id: HeroId) -> bool {
        self.owner_id() == Some(id)
    }

    /// Check if nobody owns the mine.
    pub fn is_unclaimed(&self) -> bool {
        self.owner.is_none()
    }
}

/// A pub, where heroes buy back life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pub {
    pub position: Position,
}

impl Pub {
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}
