//! Error types for building and advancing a world model.

use game_state::{HeroId, Position};

/// Errors from decoding a snapshot into a world model.
#[derive(Debug, thiserror::Error)]
pub enum WorldModelError {
    #[error("tile string for a {size}x{size} board must be {expected} bytes, got {actual}")]
    TileLength {
        size: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unrecognized tile code {code:?} at {position}")]
    MalformedTile { position: Position, code: String },
    #[error("mine at {position} is owned by hero {owner_id}, who is not in the roster")]
    UnknownOwner { position: Position, owner_id: HeroId },
    #[error("board size changed from {expected} to {actual}")]
    BoardSizeChanged { expected: usize, actual: usize },
    #[error("invalid model configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl WorldModelError {
    pub(crate) fn malformed(position: Position, code: &[u8]) -> Self {
        WorldModelError::MalformedTile {
            position,
            code: String::from_utf8_lossy(code).into_owned(),
        }
    }
}

/// Result type for world model operations.
pub type Result<T> = std::result::Result<T, WorldModelError>;
