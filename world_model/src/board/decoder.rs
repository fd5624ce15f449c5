//! Tile decoding - from the packed tile string to typed per-cell facts.

use std::collections::HashMap;
use std::sync::Arc;

use game_state::{Board, Hero, HeroId, Position, TileCode, TILE_WIDTH};

use super::{Mine, Pub};
use crate::config::UnknownOwnerPolicy;
use crate::error::{Result, WorldModelError};
use crate::model::HeroIndex;

/// Everything the full build learns from the tile string.
#[derive(Debug, Default)]
pub(crate) struct DecodedBoard {
    /// Every non-barrier position, in row-major order.
    pub walkable: Vec<Position>,
    pub mines: HashMap<Position, Mine>,
    pub pubs: HashMap<Position, Pub>,
}

impl DecodedBoard {
    /// Mines and pubs get no edges in either direction.
    pub fn is_destination(&self, position: &Position) -> bool {
        self.mines.contains_key(position) || self.pubs.contains_key(position)
    }
}

/// Fail unless the tile string is exactly `size * size * 2` bytes.
pub(crate) fn check_tile_length(board: &Board) -> Result<()> {
    let expected = board.expected_len();
    if board.tiles.len() != expected {
        return Err(WorldModelError::TileLength {
            size: board.size,
            expected,
            actual: board.tiles.len(),
        });
    }
    Ok(())
}

/// Decode every cell of the board.
///
/// `heroes` must already hold the snapshot's roster; mine owners are resolved
/// through it.
pub(crate) fn decode_board(
    board: &Board,
    heroes: &HeroIndex,
    policy: UnknownOwnerPolicy,
) -> Result<DecodedBoard> {
    check_tile_length(board)?;

    let mut decoded = DecodedBoard {
        walkable: Vec::with_capacity(board.cell_count()),
        ..DecodedBoard::default()
    };

    for (index, code) in board.tiles.as_bytes().chunks_exact(TILE_WIDTH).enumerate() {
        let position = board.position_of(index);
        let tile = TileCode::from_bytes([code[0], code[1]])
            .ok_or_else(|| WorldModelError::malformed(position, code))?;

        match tile {
            TileCode::Barrier => continue,
            TileCode::Mine(owner_id) => {
                let owner = resolve_owner(position, owner_id, heroes, policy)?;
                decoded.mines.insert(position, Mine::new(position, owner));
            }
            TileCode::Pub => {
                decoded.pubs.insert(position, Pub::new(position));
            }
            TileCode::Floor | TileCode::HeroOnFloor(_) => {}
        }
        decoded.walkable.push(position);
    }

    Ok(decoded)
}

/// Read only the ownership character of the mine at `position`.
pub(crate) fn read_mine_owner(board: &Board, position: Position) -> Result<Option<HeroId>> {
    let code = board
        .code_at(position)
        .ok_or_else(|| WorldModelError::malformed(position, b""))?;
    TileCode::parse_owner(code[1]).ok_or_else(|| WorldModelError::malformed(position, &code))
}

/// Look up the owning hero of a mine, applying `policy` to ids missing from the roster.
pub(crate) fn resolve_owner(
    position: Position,
    owner_id: Option<HeroId>,
    heroes: &HeroIndex,
    policy: UnknownOwnerPolicy,
) -> Result<Option<Arc<Hero>>> {
    let Some(owner_id) = owner_id else {
        return Ok(None);
    };

    match heroes.by_id(owner_id) {
        Some(hero) => Ok(Some(Arc::clone(hero))),
        None => match policy {
            UnknownOwnerPolicy::Unclaimed => {
                tracing::warn!(%position, owner_id, "mine owner not in roster, treating as unclaimed");
                Ok(None)
            }
            UnknownOwnerPolicy::Reject => Err(WorldModelError::UnknownOwner { position, owner_id }),
        },
    }
}
