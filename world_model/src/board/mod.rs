//! Board module - the static layout of the map.
//!
//! The board consists of:
//! - **Cells**: one per non-barrier tile, keyed by position
//! - **Edges**: diagonal links between plain walkable cells
//! - **Destinations**: mines and pubs, present as cells but never walked through

mod cell;
mod decoder;
mod graph;

pub use cell::*;
pub use graph::*;

pub(crate) use decoder::{check_tile_length, decode_board, read_mine_owner, resolve_owner, DecodedBoard};
