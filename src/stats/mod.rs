//! Session scoreboard fed by game-end notifications.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, PlayerId, PlayerMap};
use crate::events::GameObserver;
use crate::rules::GameResult;

/// Session milestones worth a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Milestone {
    /// The fifth game of the session finished.
    FiveGames,

    /// The tenth game of the session finished.
    TenGames,
}

impl Milestone {
    /// Games played when this milestone is reached.
    #[must_use]
    pub const fn games(self) -> u32 {
        match self {
            Milestone::FiveGames => 5,
            Milestone::TenGames => 10,
        }
    }

    fn reached_at(games_played: u32) -> Option<Self> {
        match games_played {
            5 => Some(Milestone::FiveGames),
            10 => Some(Milestone::TenGames),
            _ => None,
        }
    }
}

/// Wins, draws and games played over a session.
///
/// Counts survive resets and reconfigures. Raising the player count adds
/// counters for the new players; lowering it keeps the old ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Completed games.
    pub games_played: u32,

    /// Wins per player.
    pub wins: PlayerMap<u32>,

    /// Drawn games.
    pub draws: u32,

    #[serde(skip)]
    pending: Option<Milestone>,
}

impl Scoreboard {
    /// Create an empty scoreboard for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        Self {
            games_played: 0,
            wins: PlayerMap::with_default(player_count),
            draws: 0,
            pending: None,
        }
    }

    /// Count a finished game. Returns the milestone it reached, if any.
    pub fn record(&mut self, result: GameResult) -> Option<Milestone> {
        self.games_played += 1;
        match result {
            GameResult::Winner(player) => {
                self.wins.grow_to(player.index() + 1);
                self.wins[player] += 1;
            }
            GameResult::Draw => self.draws += 1,
        }
        Milestone::reached_at(self.games_played)
    }

    /// Wins recorded for `player`.
    #[must_use]
    pub fn wins_for(&self, player: PlayerId) -> u32 {
        self.wins.get(player).copied().unwrap_or(0)
    }

    /// Take the milestone reached by the last observed game end.
    pub fn take_milestone(&mut self) -> Option<Milestone> {
        self.pending.take()
    }

    /// Zero every counter, keeping the number of tracked players.
    pub fn clear(&mut self) {
        *self = Self::new(self.wins.player_count());
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(GameConfig::default().player_count())
    }
}

impl GameObserver for Scoreboard {
    fn on_reset(&mut self, config: &GameConfig) {
        self.wins.grow_to(config.player_count());
    }

    fn on_game_end(&mut self, result: &GameResult) {
        self.pending = self.record(*result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts() {
        let mut board = Scoreboard::new(2);
        board.record(GameResult::Winner(PlayerId::new(0)));
        board.record(GameResult::Winner(PlayerId::new(0)));
        board.record(GameResult::Draw);

        assert_eq!(board.games_played, 3);
        assert_eq!(board.wins_for(PlayerId::new(0)), 2);
        assert_eq!(board.wins_for(PlayerId::new(1)), 0);
        assert_eq!(board.draws, 1);
    }

    #[test]
    fn test_milestones() {
        let mut board = Scoreboard::new(2);
        let reached: Vec<_> = (0..12)
            .filter_map(|_| board.record(GameResult::Draw))
            .collect();
        assert_eq!(reached, vec![Milestone::FiveGames, Milestone::TenGames]);
        assert_eq!(Milestone::TenGames.games(), 10);
    }

    #[test]
    fn test_observer_grows_and_keeps_counts() {
        let mut board = Scoreboard::default();
        board.on_game_end(&GameResult::Winner(PlayerId::new(1)));
        board.on_reset(&GameConfig::new(5, 4).unwrap());

        assert_eq!(board.wins.player_count(), 4);
        assert_eq!(board.wins_for(PlayerId::new(1)), 1);

        board.on_reset(&GameConfig::new(3, 2).unwrap());
        assert_eq!(board.wins.player_count(), 4);
        assert_eq!(board.games_played, 1);
    }

    #[test]
    fn test_observer_holds_milestone() {
        let mut board = Scoreboard::default();
        for _ in 0..4 {
            board.on_game_end(&GameResult::Draw);
            assert_eq!(board.take_milestone(), None);
        }
        board.on_game_end(&GameResult::Draw);
        assert_eq!(board.take_milestone(), Some(Milestone::FiveGames));
        assert_eq!(board.take_milestone(), None);
    }

    #[test]
    fn test_win_by_untracked_player_grows() {
        let mut board = Scoreboard::new(2);
        board.record(GameResult::Winner(PlayerId::new(3)));
        assert_eq!(board.wins.player_count(), 4);
        assert_eq!(board.wins_for(PlayerId::new(3)), 1);
    }

    #[test]
    fn test_clear() {
        let mut board = Scoreboard::new(3);
        board.record(GameResult::Draw);
        board.clear();
        assert_eq!(board, Scoreboard::new(3));
    }

    #[test]
    fn test_serialization_skips_pending() {
        let mut board = Scoreboard::new(2);
        board.on_game_end(&GameResult::Winner(PlayerId::new(0)));
        let json = serde_json::to_string(&board).unwrap();
        let restored: Scoreboard = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.games_played, 1);
        assert_eq!(restored.wins_for(PlayerId::new(0)), 1);
    }
}
