use std::path::PathBuf;

use crate::core::PlayerId;
use crate::rules::GameResult;

/// Errors that can occur when building a configuration or board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported grid size {0} (expected 3, 5 or 7)")]
    UnsupportedGridSize(usize),

    #[error("unsupported player count {0} (expected 2 to 4)")]
    UnsupportedPlayerCount(usize),

    #[error("board needs {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },
}

/// Rejected engine intents. The game state is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("cell {index} is outside the {cells}-cell board")]
    CellOutOfRange { index: usize, cells: usize },

    #[error("cell {index} is already marked by {owner}")]
    CellOccupied { index: usize, owner: PlayerId },

    #[error("game is over ({result}); reset or jump back to keep playing")]
    GameOver { result: GameResult },

    #[error("history index {index} out of range (history holds {len} positions)")]
    InvalidHistoryIndex { index: usize, len: usize },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// True for the two "invalid cell" rejections: off the board or already marked.
    #[must_use]
    pub fn is_invalid_cell(&self) -> bool {
        matches!(
            self,
            EngineError::CellOutOfRange { .. } | EngineError::CellOccupied { .. }
        )
    }
}

/// Errors from reading or writing stored preferences.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("failed to access preference file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse preference file {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::UnsupportedGridSize(4).to_string(),
            "unsupported grid size 4 (expected 3, 5 or 7)"
        );
        assert_eq!(
            ConfigError::CellCount { expected: 9, actual: 8 }.to_string(),
            "board needs 9 cells, got 8"
        );
    }

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::CellOccupied {
            index: 4,
            owner: PlayerId::new(1),
        };
        assert_eq!(err.to_string(), "cell 4 is already marked by Player 1");

        let err = EngineError::InvalidHistoryIndex { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "history index 7 out of range (history holds 3 positions)"
        );

        let err = EngineError::GameOver {
            result: GameResult::Draw,
        };
        assert_eq!(
            err.to_string(),
            "game is over (draw); reset or jump back to keep playing"
        );
    }

    #[test]
    fn test_invalid_cell_grouping() {
        assert!(EngineError::CellOutOfRange { index: 9, cells: 9 }.is_invalid_cell());
        assert!(EngineError::CellOccupied {
            index: 0,
            owner: PlayerId::new(0)
        }
        .is_invalid_cell());
        assert!(!EngineError::InvalidHistoryIndex { index: 1, len: 1 }.is_invalid_cell());
    }

    #[test]
    fn test_config_error_converts() {
        let err: EngineError = ConfigError::UnsupportedPlayerCount(9).into();
        assert_eq!(
            err.to_string(),
            "invalid configuration: unsupported player count 9 (expected 2 to 4)"
        );
    }
}
