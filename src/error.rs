use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::Difficulty;
use crate::grid::Cell;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("a {width}x{height} grid cannot hold the starting snake")]
    GridTooSmall { width: i32, height: i32 },
    #[error("a {width}x{height} grid exceeds the {max}x{max} limit")]
    GridTooLarge { width: i32, height: i32, max: i32 },
    #[error("tick interval for {0} must be positive")]
    ZeroInterval(Difficulty),
}

/// Reasons a hand-built layout is refused by [`crate::game::Game::with_layout`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("snake needs at least one segment")]
    EmptySnake,
    #[error("segment {0:?} lies outside the grid")]
    OutOfBounds(Cell),
    #[error("segment {0:?} appears twice")]
    Repeated(Cell),
    #[error("segments {0:?} and {1:?} are not adjacent")]
    Disconnected(Cell, Cell),
    #[error("food {0:?} is not a free cell")]
    BadFood(Cell),
}
