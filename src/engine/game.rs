//! The game engine: state plus notifications.

use tracing::{debug, info, instrument};

use crate::core::{GameConfig, GameState, PlayerId};
use crate::error::EngineError;
use crate::events::GameObserver;
use crate::rules::GameResult;

/// What an accepted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The player whose mark was placed.
    pub player: PlayerId,

    /// The cell that was marked.
    pub cell: usize,

    /// Set when the move ended the game.
    pub result: Option<GameResult>,
}

/// Owns one game and reports resets and game ends to an observer.
///
/// Every operation runs to completion before returning, and `&mut self`
/// serializes calls per engine. A rejected intent returns an error and
/// leaves the state untouched; callers that want silent no-ops can ignore
/// the error.
#[derive(Clone, Debug)]
pub struct GameEngine<O: GameObserver = ()> {
    state: GameState,
    observer: O,
}

impl GameEngine<()> {
    /// Engine with no observer.
    #[must_use]
    pub fn headless(config: GameConfig) -> Self {
        Self::new(config, ())
    }
}

impl<O: GameObserver> GameEngine<O> {
    /// Create an engine with a fresh game.
    ///
    /// Construction does not notify the observer; only `reset_game` and
    /// `reconfigure` do.
    pub fn new(config: GameConfig, observer: O) -> Self {
        Self {
            state: GameState::new(config),
            observer,
        }
    }

    /// Get the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.state.config()
    }

    /// Get the observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Get the observer mutably (e.g. to drain an event log).
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Split into state and observer.
    pub fn into_parts(self) -> (GameState, O) {
        (self.state, self.observer)
    }

    /// Place the current player's mark on `cell`.
    ///
    /// Rejected when the cell is off the board or already marked, or when
    /// the game is over. On a move that ends the game the observer's
    /// `on_game_end` fires exactly once.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_move(&mut self, cell: usize) -> Result<MoveOutcome, EngineError> {
        let player = self.state.current_player();

        let result = self.state.apply_move(cell).map_err(|err| {
            debug!(%err, "move rejected");
            err
        })?;

        debug!(%player, cell, move_number = self.state.current_history_index(), "move applied");

        if let Some(result) = result {
            info!(%result, moves = self.state.current_history_index(), "game over");
            self.observer.on_game_end(&result);
        }

        Ok(MoveOutcome {
            player,
            cell,
            result,
        })
    }

    /// Start a fresh game with the current configuration.
    #[instrument(level = "debug", skip(self))]
    pub fn reset_game(&mut self) {
        let config = *self.state.config();
        self.start(config);
    }

    /// Show history position `index`; 0 is the empty board.
    ///
    /// Out-of-range indices are rejected. Jumping never notifies, even when
    /// the restored position is won or drawn.
    #[instrument(level = "debug", skip(self))]
    pub fn jump_to_history(&mut self, index: usize) -> Result<(), EngineError> {
        self.state.jump_to(index).map_err(|err| {
            debug!(%err, "jump rejected");
            err
        })?;

        debug!(
            index,
            player = %self.state.current_player(),
            terminal = self.state.is_terminal(),
            "jumped to history"
        );
        Ok(())
    }

    /// Replace the configuration and start a fresh game.
    ///
    /// Invalid values are rejected and the running game is kept.
    #[instrument(level = "debug", skip(self))]
    pub fn reconfigure(&mut self, grid_size: usize, player_count: usize) -> Result<(), EngineError> {
        let config = GameConfig::new(grid_size, player_count).map_err(|err| {
            debug!(%err, "reconfigure rejected");
            EngineError::from(err)
        })?;
        self.start(config);
        Ok(())
    }

    fn start(&mut self, config: GameConfig) {
        self.state = GameState::new(config);
        info!(%config, "new game");
        self.observer.on_reset(&config);
    }
}
