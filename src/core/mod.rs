//! Core game types: players, configuration, board, history, state.
//!
//! Nothing in here knows how a mark is drawn or how a move is requested;
//! the engine and the presentation layers build on these types.

pub mod board;
pub mod config;
pub mod history;
pub mod player;
pub mod state;

pub use board::{Board, Cell};
pub use config::{
    line_length_for, GameConfig, MAX_LINE_LENGTH, MAX_PLAYERS, MIN_PLAYERS, SUPPORTED_GRID_SIZES,
};
pub use history::{History, Move};
pub use player::{PlayerId, PlayerMap};
pub use state::GameState;
