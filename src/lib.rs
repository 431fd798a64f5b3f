//! # tictactoe-pro
//!
//! Engine for NxN line games: tic-tac-toe on 3x3, 5x5 or 7x7 boards for
//! 2 to 4 players, with full move history.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: turn order, win detection and statistics work for
//!    any supported player count. Nothing assumes X and O.
//!
//! 2. **Engine Is Headless**: the engine reports resets and game ends to a
//!    [`GameObserver`]; symbols, status text and toasts live in [`render`].
//!
//! 3. **All-or-Nothing Transitions**: a rejected intent returns an error and
//!    leaves the game untouched.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: boards and history use `im` vectors,
//!   so every history snapshot shares structure with its neighbours.
//!
//! - **Line Tables**: candidate lines are generated once per board size and
//!   scanned in a fixed order (rows, columns, diagonals, anti-diagonals).
//!
//! ## Modules
//!
//! - `core`: players, configuration, board, history, game state
//! - `rules`: line generation and board evaluation
//! - `engine`: the intent-driven facade
//! - `events`: observer hooks and event log
//! - `stats`: session scoreboard and milestones
//! - `prefs`: persisted dark-mode preference
//! - `render`: text for boards, status lines and toasts

pub mod core;
pub mod engine;
pub mod error;
pub mod events;
pub mod prefs;
pub mod render;
pub mod rules;
pub mod stats;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, GameConfig, GameState, History, Move, PlayerId, PlayerMap,
};

pub use crate::engine::{GameEngine, MoveOutcome};

pub use crate::error::{ConfigError, EngineError, PreferenceError};

pub use crate::events::{EventLog, GameEvent, GameObserver};

pub use crate::prefs::{DarkMode, JsonFileStore, MemoryStore, PreferenceStore, Theme};

pub use crate::render::MarkTable;

pub use crate::rules::{evaluate_board, GameResult, Line, LineSet, Outcome};

pub use crate::stats::{Milestone, Scoreboard};
