//! Game state and its transitions.
//!
//! ## GameState
//!
//! Everything a presentation layer needs to render one game:
//! - Configuration and the current board
//! - Player to move
//! - Outcome (in progress, won with a winning line, drawn)
//! - Move history and the position currently shown
//!
//! Transitions are all-or-nothing: every precondition is checked before
//! anything is written, so a rejected transition leaves the state exactly
//! as it was. Cloning is cheap (persistent board and history, shared lines).

use std::sync::Arc;

use super::board::Board;
use super::config::GameConfig;
use super::history::{History, Move};
use super::player::PlayerId;
use crate::error::EngineError;
use crate::rules::{GameResult, LineSet, Outcome};

/// State of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    lines: Arc<LineSet>,
    board: Board,
    current_player: PlayerId,
    outcome: Outcome,
    history: History,
    cursor: usize,
}

impl GameState {
    /// Create a fresh game: empty board, player 0 to move, history at the start.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let lines = Arc::new(LineSet::for_grid(config.grid_size()));
        let board = Board::new(config.grid_size());

        Self {
            config,
            lines,
            history: History::new(board.clone()),
            board,
            current_player: PlayerId::new(0),
            outcome: Outcome::InProgress,
            cursor: 0,
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the board currently shown.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Get the outcome of the current board.
    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Winner or draw, `None` while the game is in progress.
    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        self.outcome.result()
    }

    /// Cells of the winning line; empty unless someone won.
    #[must_use]
    pub fn winning_line(&self) -> &[usize] {
        self.outcome.winning_line()
    }

    /// Check if the game is over (won or drawn).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Get the move history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the history position currently shown.
    #[must_use]
    pub fn current_history_index(&self) -> usize {
        self.cursor
    }

    /// Candidate lines for this board size.
    #[must_use]
    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    /// Check a move without applying it.
    pub fn validate_move(&self, cell: usize) -> Result<(), EngineError> {
        if let Some(result) = self.outcome.result() {
            return Err(EngineError::GameOver { result });
        }
        match self.board.get(cell) {
            None => Err(EngineError::CellOutOfRange {
                index: cell,
                cells: self.board.len(),
            }),
            Some(Some(owner)) => Err(EngineError::CellOccupied { index: cell, owner }),
            Some(None) => Ok(()),
        }
    }

    /// Place the current player's mark on `cell`.
    ///
    /// Drops any history after the shown position, records the move, passes
    /// the turn and re-evaluates the board. Returns the result when the move
    /// ends the game.
    pub fn apply_move(&mut self, cell: usize) -> Result<Option<GameResult>, EngineError> {
        self.validate_move(cell)?;

        let player = self.current_player;
        let board = self.board.with_mark(cell, player);

        self.history.truncate_after(self.cursor);
        self.history.push(Move::new(board.clone(), cell, player));
        self.cursor = self.history.len() - 1;

        self.outcome = self.lines.evaluate_move(&board, cell);
        self.board = board;
        self.current_player = player.next(self.config.player_count());

        Ok(self.outcome.result())
    }

    /// Show history position `index` (0 is the empty board).
    ///
    /// The player to move becomes `index mod P` and the outcome is
    /// recomputed for the restored board. History is kept intact.
    pub fn jump_to(&mut self, index: usize) -> Result<(), EngineError> {
        let board = self
            .history
            .board_at(index)
            .ok_or(EngineError::InvalidHistoryIndex {
                index,
                len: self.history.len(),
            })?
            .clone();

        self.outcome = self.lines.evaluate(&board);
        self.board = board;
        self.cursor = index;
        self.current_player = PlayerId::for_turn(index, self.config.player_count());
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(state: &mut GameState, cells: &[usize]) {
        for &cell in cells {
            state.apply_move(cell).unwrap();
        }
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::new(5, 3).unwrap());
        assert_eq!(state.board().len(), 25);
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert_eq!(state.winner(), None);
        assert!(state.winning_line().is_empty());
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_history_index(), 0);
    }

    #[test]
    fn test_apply_move_advances_turn() {
        let mut state = GameState::new(GameConfig::new(3, 3).unwrap());
        state.apply_move(0).unwrap();
        assert_eq!(state.current_player(), PlayerId::new(1));
        state.apply_move(1).unwrap();
        state.apply_move(2).unwrap();
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert_eq!(state.board().get(2), Some(Some(PlayerId::new(2))));
        assert_eq!(state.current_history_index(), 3);
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = GameState::default();
        // X: 0, 1, 2  O: 3, 4
        state.apply_move(0).unwrap();
        state.apply_move(3).unwrap();
        state.apply_move(1).unwrap();
        state.apply_move(4).unwrap();
        let result = state.apply_move(2).unwrap();

        assert_eq!(result, Some(GameResult::Winner(PlayerId::new(0))));
        assert!(state.is_terminal());
        assert_eq!(state.winning_line(), &[0, 1, 2]);
    }

    #[test]
    fn test_rejected_moves_leave_state_unchanged() {
        let mut state = GameState::default();
        state.apply_move(4).unwrap();
        let before = state.clone();

        assert_eq!(
            state.apply_move(4),
            Err(EngineError::CellOccupied {
                index: 4,
                owner: PlayerId::new(0)
            })
        );
        assert_eq!(
            state.apply_move(9),
            Err(EngineError::CellOutOfRange { index: 9, cells: 9 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_terminal_state_rejects_moves() {
        let mut state = GameState::default();
        play_all(&mut state, &[0, 3, 1, 4, 2]);
        let before = state.clone();

        let err = state.apply_move(8).unwrap_err();
        assert_eq!(
            err,
            EngineError::GameOver {
                result: GameResult::Winner(PlayerId::new(0))
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::default();
        // Final board: X O X / X O O / O X X
        let result = {
            play_all(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6]);
            state.apply_move(8).unwrap()
        };
        assert_eq!(result, Some(GameResult::Draw));
        assert!(state.winning_line().is_empty());
    }

    #[test]
    fn test_jump_restores_board_and_turn() {
        let mut state = GameState::new(GameConfig::new(3, 2).unwrap());
        play_all(&mut state, &[0, 1, 2, 3]);

        state.jump_to(1).unwrap();
        assert_eq!(state.board().marked_count(), 1);
        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(state.history().len(), 5);

        state.jump_to(0).unwrap();
        assert_eq!(state.board(), &Board::new(3));
        assert_eq!(state.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_jump_recomputes_outcome() {
        let mut state = GameState::default();
        play_all(&mut state, &[0, 3, 1, 4, 2]);
        assert!(state.is_terminal());

        state.jump_to(4).unwrap();
        assert!(!state.is_terminal());
        assert!(state.winning_line().is_empty());

        state.jump_to(5).unwrap();
        assert_eq!(state.winner(), Some(GameResult::Winner(PlayerId::new(0))));
        assert_eq!(state.winning_line(), &[0, 1, 2]);
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut state = GameState::default();
        play_all(&mut state, &[0, 1]);
        let before = state.clone();

        assert_eq!(
            state.jump_to(3),
            Err(EngineError::InvalidHistoryIndex { index: 3, len: 3 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_after_jump_discards_future() {
        let mut state = GameState::default();
        play_all(&mut state, &[0, 1, 2, 3, 4]);
        assert_eq!(state.history().len(), 6);

        state.jump_to(2).unwrap();
        state.apply_move(8).unwrap();

        assert_eq!(state.history().len(), 4);
        assert_eq!(state.current_history_index(), 3);
        assert_eq!(state.history().last_move().unwrap().cell, 8);
        assert_eq!(state.board().marked_count(), 3);
        assert_eq!(state.board().get(2), Some(None));
    }
}
