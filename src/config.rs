//! Game settings, loaded from an optional JSON file.
//!
//! Every field has a default, so a file only needs the keys it overrides:
//!
//! ```json
//! { "difficulty": "hard", "speeds": { "hard": 80 } }
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::{Rules, SPAWN};
use crate::grid::Grid;

pub const CONFIG_ENV: &str = "SNAKE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "snake.json";

/// Largest accepted grid side, in cells.
pub const MAX_GRID_SIDE: i32 = 200;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tick interval per difficulty, in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedTable {
    pub easy: u64,
    pub medium: u64,
    pub hard: u64,
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self { easy: 200, medium: 150, hard: 100 }
    }
}

impl SpeedTable {
    pub fn interval(&self, difficulty: Difficulty) -> Duration {
        let ms = match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        };
        Duration::from_millis(ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Canvas size in pixels; the grid is the canvas divided by `cell_size`.
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub cell_size: u32,
    pub score_per_food: u32,
    pub difficulty: Difficulty,
    pub speeds: SpeedTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400,
            canvas_height: 400,
            cell_size: 20,
            score_per_food: 10,
            difficulty: Difficulty::Medium,
            speeds: SpeedTable::default(),
        }
    }
}

impl GameConfig {
    pub fn grid(&self) -> Grid {
        let cell = self.cell_size.max(1);
        Grid::new((self.canvas_width / cell) as i32, (self.canvas_height / cell) as i32)
    }

    pub fn rules(&self) -> Rules {
        Rules { grid: self.grid(), score_per_food: self.score_per_food }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        let grid = self.grid();
        if !SPAWN.iter().all(|c| grid.contains(*c)) {
            return Err(ConfigError::GridTooSmall { width: grid.width, height: grid.height });
        }
        if grid.width > MAX_GRID_SIDE || grid.height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                width: grid.width,
                height: grid.height,
                max: MAX_GRID_SIDE,
            });
        }
        for difficulty in Difficulty::ALL {
            if self.speeds.interval(difficulty).is_zero() {
                return Err(ConfigError::ZeroInterval(difficulty));
            }
        }
        Ok(())
    }

    /// Native builds look for `$SNAKE_CONFIG`, then `snake.json`. Any failure
    /// is logged and the defaults are used instead.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default() -> Self {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(p) => PathBuf::from(p),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    return Self::default();
                }
                p
            }
        };
        match Self::load(&path) {
            Ok(config) => {
                info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{e}, using default config");
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load_or_default() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.grid(), Grid::new(20, 20));
        assert_eq!(config.speeds.interval(Difficulty::Easy), Duration::from_millis(200));
        assert_eq!(config.speeds.interval(Difficulty::Medium), Duration::from_millis(150));
        assert_eq!(config.speeds.interval(Difficulty::Hard), Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = GameConfig::from_json(r#"{ "difficulty": "hard", "speeds": { "hard": 80 } }"#).unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.speeds.hard, 80);
        assert_eq!(config.speeds.easy, 200);
        assert_eq!(config.cell_size, 20);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "cell_size": 0 }"#),
            Err(ConfigError::ZeroCellSize)
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "canvas_width": 100, "canvas_height": 100 }"#),
            Err(ConfigError::GridTooSmall { width: 5, height: 5 })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "speeds": { "easy": 0 } }"#),
            Err(ConfigError::ZeroInterval(Difficulty::Easy))
        ));
        assert!(matches!(GameConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_oversized_grids() {
        let huge = r#"{ "canvas_width": 100000, "canvas_height": 100000, "cell_size": 1 }"#;
        assert!(matches!(
            GameConfig::from_json(huge),
            Err(ConfigError::GridTooLarge { width: 100000, height: 100000, max: MAX_GRID_SIDE })
        ));
        let edge = r#"{ "canvas_width": 200, "canvas_height": 200, "cell_size": 1 }"#;
        assert_eq!(GameConfig::from_json(edge).unwrap().grid(), Grid::new(200, 200));
    }

    #[test]
    fn written_config_reads_back() {
        let config = GameConfig {
            cell_size: 10,
            difficulty: Difficulty::Easy,
            speeds: SpeedTable { easy: 250, medium: 160, hard: 90 },
            ..GameConfig::default()
        };
        let text = serde_json::to_string_pretty(&config).unwrap();
        assert!(text.contains(r#""difficulty": "easy""#));
        assert_eq!(GameConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = GameConfig::load(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
