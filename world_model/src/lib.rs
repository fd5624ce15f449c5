//! # World Model
//!
//! Turns the per-turn board snapshot from `game_state` into a queryable model
//! for a move-selection layer.
//!
//! ## Core Components
//!
//! - **board**: tile decoding and the diagonal adjacency graph of walkable cells
//! - **model**: the [`WorldModel`] aggregate, its full build, the incremental
//!   `advance` step, and the read-only query surface
//! - **config**: policies for unknown mine owners and the controlling hero
//!
//! ## Design Philosophy
//!
//! - **Immutable values**: a model is never edited in place; `advance` returns a new one
//! - **Shared topology**: the graph and the pub index never change mid-game, so
//!   successive models share them instead of rebuilding
//! - **Fail whole**: malformed input fails the call; there is no partial model

pub mod board;
pub mod config;
pub mod error;
pub mod model;

pub use board::*;
pub use config::*;
pub use error::{Result, WorldModelError};
pub use model::*;
