//! Win detection for NxN line games.
//!
//! - [`LineSet`]: every candidate line for a board size, in scan order
//! - [`evaluate_board`]: winner, draw or in progress for one board
//!
//! The rules are pure functions of the board. The player count does not
//! matter: any mark filling a line wins.

pub mod evaluate;
pub mod lines;

pub use evaluate::{evaluate_board, GameResult, Outcome};
pub use lines::{expected_line_count, Direction, Line, LineSet};
