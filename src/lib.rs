//! Grid snake: the game model, its clock and controls, independent of any
//! window or canvas. The `snake_canvas` binary draws it with macroquad.

pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod session;

pub use config::{Difficulty, GameConfig};
pub use error::{ConfigError, GameError};
pub use game::{Game, OverReason, Phase, Rules, TickOutcome};
pub use grid::{Cell, Direction, Grid};
pub use input::Command;
pub use session::{GameOverNotice, Session};
