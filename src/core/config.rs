//! Game configuration.
//!
//! A game is configured by two values: the board edge length and the number
//! of players. Both are validated on construction; changing either one
//! discards the running game (see [`crate::engine::GameEngine::reconfigure`]).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Board edge lengths the game supports.
pub const SUPPORTED_GRID_SIZES: [usize; 3] = [3, 5, 7];

/// Fewest players in a game.
pub const MIN_PLAYERS: usize = 2;

/// Most players in a game.
pub const MAX_PLAYERS: usize = 4;

/// Longest line needed to win, regardless of board size.
pub const MAX_LINE_LENGTH: usize = 5;

/// Complete game configuration.
///
/// Deserialization goes through [`GameConfig::new`], so a config read from
/// JSON is always valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig", into = "RawGameConfig")]
pub struct GameConfig {
    grid_size: usize,
    player_count: usize,
}

/// Unvalidated wire form of [`GameConfig`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RawGameConfig {
    grid_size: usize,
    player_count: usize,
}

impl GameConfig {
    /// Create a validated configuration.
    pub fn new(grid_size: usize, player_count: usize) -> Result<Self, ConfigError> {
        if !SUPPORTED_GRID_SIZES.contains(&grid_size) {
            return Err(ConfigError::UnsupportedGridSize(grid_size));
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(ConfigError::UnsupportedPlayerCount(player_count));
        }
        Ok(Self {
            grid_size,
            player_count,
        })
    }

    /// Same configuration with a different grid size.
    pub fn with_grid_size(self, grid_size: usize) -> Result<Self, ConfigError> {
        Self::new(grid_size, self.player_count)
    }

    /// Same configuration with a different player count.
    pub fn with_player_count(self, player_count: usize) -> Result<Self, ConfigError> {
        Self::new(self.grid_size, player_count)
    }

    /// Board edge length N.
    #[must_use]
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of players P.
    #[must_use]
    pub const fn player_count(&self) -> usize {
        self.player_count
    }

    /// Number of cells on the board, N².
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Marks in a row needed to win: `min(5, N)`.
    #[must_use]
    pub fn line_length(&self) -> usize {
        line_length_for(self.grid_size)
    }
}

/// Marks in a row needed to win on a board of edge `grid_size`.
#[must_use]
pub fn line_length_for(grid_size: usize) -> usize {
    grid_size.min(MAX_LINE_LENGTH)
}

impl Default for GameConfig {
    /// Classic 3×3 with two players.
    fn default() -> Self {
        Self {
            grid_size: 3,
            player_count: 2,
        }
    }
}

impl std::fmt::Display for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{n}x{n}, {} players, {} in a row",
            self.player_count,
            self.line_length(),
            n = self.grid_size
        )
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::new(raw.grid_size, raw.player_count)
    }
}

impl From<GameConfig> for RawGameConfig {
    fn from(config: GameConfig) -> Self {
        Self {
            grid_size: config.grid_size,
            player_count: config.player_count,
        }
    }
}
