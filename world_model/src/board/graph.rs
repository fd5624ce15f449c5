//! Board graph - the walkable cells and their diagonal adjacency.

use std::collections::{HashMap, HashSet};

use game_state::Position;

use super::{Cell, DecodedBoard};

/// The adjacency graph of the board.
///
/// Holds one [`Cell`] per non-barrier tile. Edges run between diagonal
/// neighbors (both coordinates differ by one) and only between plain walkable
/// cells: a mine or pub cell has no outgoing edges and no cell lists it as a
/// neighbor. Heroes are not part of the graph since they move every turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardGraph {
    cells: HashMap<Position, Cell>,
}

impl BoardGraph {
    /// Build the graph from a decoded board.
    pub(crate) fn build(decoded: &DecodedBoard) -> Self {
        let present: HashSet<Position> = decoded.walkable.iter().copied().collect();
        let mut cells = HashMap::with_capacity(decoded.walkable.len());

        for &position in &decoded.walkable {
            let neighbors = if decoded.is_destination(&position) {
                Vec::new()
            } else {
                position
                    .diagonals()
                    .into_iter()
                    .filter(|n| present.contains(n) && !decoded.is_destination(n))
                    .collect()
            };
            cells.insert(position, Cell { position, neighbors });
        }

        Self { cells }
    }

    /// Get the cell at a position.
    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.cells.get(&position)
    }

    /// Check if a cell exists at a position (i.e. the tile is not a barrier).
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains_key(&position)
    }

    /// Neighbors of a position; empty for barriers, destinations, and off-board positions.
    pub fn neighbors(&self, position: Position) -> &[Position] {
        self.cells
            .get(&position)
            .map(|cell| cell.neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over all cells.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Iterate over all cell positions.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.cells.keys()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the graph has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.cells.values().map(|cell| cell.neighbors.len()).sum()
    }
}
