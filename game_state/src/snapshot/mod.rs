//! Snapshot types - the document the server sends every turn.

use serde::{Deserialize, Serialize};

use crate::entities::{Hero, Position};
use crate::tiles::TILE_WIDTH;

/// Errors from decoding a snapshot document.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The square board: its side length and the packed tile string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub size: usize,
    /// Row-major, two characters per cell.
    pub tiles: String,
}

impl Board {
    /// Create a board from its size and raw tile string.
    pub fn new(size: usize, tiles: impl Into<String>) -> Self {
        Self {
            size,
            tiles: tiles.into(),
        }
    }

    /// Create a board from one string per row. The size is the row count.
    pub fn from_rows(rows: &[&str]) -> Self {
        Self {
            size: rows.len(),
            tiles: rows.concat(),
        }
    }

    /// Number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.size.saturating_mul(self.size)
    }

    /// Length in bytes the tile string must have for this board size.
    pub fn expected_len(&self) -> usize {
        self.cell_count().saturating_mul(TILE_WIDTH)
    }

    /// Byte offset of the code for `pos`, or `None` if `pos` is off the board.
    pub fn offset(&self, pos: Position) -> Option<usize> {
        if !pos.is_within(self.size) {
            return None;
        }
        Some((pos.y as usize * self.size + pos.x as usize) * TILE_WIDTH)
    }

    /// Position of the cell with the given row-major index.
    pub fn position_of(&self, index: usize) -> Position {
        if self.size == 0 {
            return Position::default();
        }
        Position::new((index % self.size) as i32, (index / self.size) as i32)
    }

    /// Raw two-byte code at `pos`, if the position and string allow it.
    pub fn code_at(&self, pos: Position) -> Option<[u8; TILE_WIDTH]> {
        let start = self.offset(pos)?;
        match self.tiles.as_bytes().get(start..start + TILE_WIDTH)? {
            [first, second] => Some([*first, *second]),
            _ => None,
        }
    }
}

/// One game as seen at a given turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub turn: u32,
    #[serde(default)]
    pub max_turns: u32,
    pub heroes: Vec<Hero>,
    pub board: Board,
    #[serde(default)]
    pub finished: bool,
}

/// The full per-turn document: the game plus which hero we control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub game: Game,
    /// The controlling hero.
    pub hero: Hero,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub view_url: Option<String>,
    #[serde(default)]
    pub play_url: Option<String>,
}

impl GameState {
    /// Create a snapshot at turn 0 from a board, a roster, and the controlling hero.
    pub fn new(board: Board, heroes: Vec<Hero>, hero: Hero) -> Self {
        Self {
            game: Game {
                id: String::new(),
                turn: 0,
                max_turns: 0,
                heroes,
                board,
                finished: false,
            },
            hero,
            token: None,
            view_url: None,
            play_url: None,
        }
    }

    /// Set the turn counters.
    pub fn with_turn(mut self, turn: u32, max_turns: u32) -> Self {
        self.game.turn = turn;
        self.game.max_turns = max_turns;
        self
    }

    /// Decode a snapshot from the server's JSON document.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the snapshot back to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// The board of this snapshot.
    pub fn board(&self) -> &Board {
        &self.game.board
    }

    /// The hero roster of this snapshot.
    pub fn heroes(&self) -> &[Hero] {
        &self.game.heroes
    }
}
