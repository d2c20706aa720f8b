use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Where food may land when it is (re)spawned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPlacement {
    /// Any board cell, snake body included
    #[default]
    Uniform,
    /// Any cell not covered by the snake
    AvoidSnake,
}

/// Configuration for the game
///
/// All lengths are in board units. The board is `board_width / grid_size`
/// columns by `board_height / grid_size` rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of one cell
    pub grid_size: u32,
    /// Width of the board
    pub board_width: u32,
    /// Height of the board
    pub board_height: u32,
    /// Period between two ticks, in milliseconds
    pub tick_period_ms: u64,
    /// Food spawn policy
    pub food_placement: FoodPlacement,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            board_width: 400,
            board_height: 400,
            tick_period_ms: 120,
            food_placement: FoodPlacement::Uniform,
        }
    }
}

/// Largest board side, in board units; cells are addressed with `i32`
pub const MAX_BOARD_LENGTH: u32 = i32::MAX as u32;

/// Largest number of cells a board may have
pub const MAX_CELLS: u64 = 1 << 20;

/// Reasons a configuration is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroGridSize,
    BoardNotMultipleOfGrid { length: u32, grid_size: u32 },
    EmptyBoard,
    BoardTooLong { length: u32 },
    TooManyCells { cells: u64 },
    ZeroTickPeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroGridSize => write!(f, "grid size must be greater than zero"),
            ConfigError::BoardNotMultipleOfGrid { length, grid_size } => write!(
                f,
                "board length {length} is not a multiple of grid size {grid_size}"
            ),
            ConfigError::EmptyBoard => write!(f, "board must be at least one cell wide and tall"),
            ConfigError::BoardTooLong { length } => write!(
                f,
                "board length {length} exceeds the maximum of {MAX_BOARD_LENGTH}"
            ),
            ConfigError::TooManyCells { cells } => {
                write!(f, "board has {cells} cells, the maximum is {MAX_CELLS}")
            }
            ConfigError::ZeroTickPeriod => write!(f, "tick period must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Create a configuration with a custom board size (board units)
    pub fn new(board_width: u32, board_height: u32) -> Self {
        Self {
            board_width,
            board_height,
            ..Default::default()
        }
    }

    /// Create a board with `cols` x `rows` cells of the default grid size
    pub fn with_cells(cols: u32, rows: u32) -> Self {
        let grid_size = Self::default().grid_size;
        Self::new(cols * grid_size, rows * grid_size)
    }

    /// Load a configuration from a JSON file; missing fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        for length in [self.board_width, self.board_height] {
            if length > MAX_BOARD_LENGTH {
                return Err(ConfigError::BoardTooLong { length });
            }
            if length % self.grid_size != 0 {
                return Err(ConfigError::BoardNotMultipleOfGrid {
                    length,
                    grid_size: self.grid_size,
                });
            }
        }
        if self.columns() == 0 || self.rows() == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        let cells = u64::from(self.columns()) * u64::from(self.rows());
        if cells > MAX_CELLS {
            return Err(ConfigError::TooManyCells { cells });
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(())
    }

    /// Number of cells per row
    pub fn columns(&self) -> u32 {
        self.board_width / self.grid_size.max(1)
    }

    /// Number of cells per column
    pub fn rows(&self) -> u32 {
        self.board_height / self.grid_size.max(1)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }
}
