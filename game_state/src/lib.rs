//! # Game State
//!
//! The raw snapshot crate - everything the game server reports once per turn.
//! This crate only describes and decodes the snapshot; it holds no derived
//! structure. Graph building and indexing live in `world_model`.

pub mod entities;
pub mod snapshot;
pub mod tiles;

pub use entities::*;
pub use snapshot::*;
pub use tiles::*;
