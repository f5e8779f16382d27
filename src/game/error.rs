//! Error types for the game core and the word list loader

use super::board::Coordinate;
use super::tiles::TileId;
use thiserror::Error;

/// Failures of a game operation. Every variant leaves game state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Drop target already holds a tile; the dropped tile stays where it was
    #[error("cell {0} is already occupied")]
    OccupiedCell(Coordinate),

    #[error("cell {0} is outside the board")]
    OutOfBounds(Coordinate),

    /// The placement intent names no tile (empty cell or stale rack index)
    #[error("no tile at the requested source")]
    EmptySource,

    /// Spin needs more tiles in the reserve pool than remain
    #[error("Not enough tiles left in the pool! ({available} left, {required} needed)")]
    InsufficientPool { available: usize, required: usize },

    /// A tile with this id is already in the rack
    #[error("{0} is already in the rack")]
    DuplicateTile(TileId),

    #[error("the game is already won")]
    GameOver,
}

/// Failures while loading the bulk word list.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list")]
    Io(#[from] std::io::Error),

    #[error("word list is not a JSON array of strings")]
    Json(#[from] serde_json::Error),

    #[error("word list contains no words")]
    Empty,

    #[error("word list is already loaded")]
    AlreadyLoaded,
}
