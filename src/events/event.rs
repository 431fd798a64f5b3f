//! Outbound game events.

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;
use crate::rules::GameResult;

/// Something the presentation layer should be told about.
///
/// Only two things are ever announced: a fresh game (after a reset or a
/// reconfigure) and the end of a game. Ordinary moves and history jumps
/// are visible through the state itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game started with this configuration.
    Reset { config: GameConfig },

    /// A move ended the game.
    GameEnded { result: GameResult },
}

impl GameEvent {
    /// Check if this event ends a game.
    #[must_use]
    pub fn is_game_end(&self) -> bool {
        matches!(self, GameEvent::GameEnded { .. })
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Reset { config } => write!(f, "reset ({config})"),
            GameEvent::GameEnded { result } => write!(f, "game ended: {result}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_event_display() {
        let reset = GameEvent::Reset {
            config: GameConfig::default(),
        };
        assert_eq!(reset.to_string(), "reset (3x3, 2 players, 3 in a row)");

        let ended = GameEvent::GameEnded {
            result: GameResult::Winner(PlayerId::new(1)),
        };
        assert_eq!(ended.to_string(), "game ended: Player 1 wins");
        assert!(ended.is_game_end());
        assert!(!reset.is_game_end());
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::GameEnded {
            result: GameResult::Draw,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
