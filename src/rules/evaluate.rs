//! Board evaluation: winner, draw, or still in progress.

use serde::{Deserialize, Serialize};

use super::lines::{Line, LineSet};
use crate::core::{Board, PlayerId};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A player completed a line.
    Winner(PlayerId),
    /// The board filled up without a line.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Evaluation of one board position.
///
/// A winning line exists exactly when the outcome is `Won`; a draw never
/// carries a line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// No line and at least one free cell.
    #[default]
    InProgress,
    /// `winner` owns every cell of `line`.
    Won {
        /// The player who completed the line.
        winner: PlayerId,
        /// The winning cells, in scan order.
        line: Line,
    },
    /// Board full, no line.
    Drawn,
}

impl Outcome {
    /// Check if no more moves are accepted.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The game result, `None` while in progress.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            Outcome::InProgress => None,
            Outcome::Won { winner, .. } => Some(GameResult::Winner(*winner)),
            Outcome::Drawn => Some(GameResult::Draw),
        }
    }

    /// Winning cells; empty unless won.
    #[must_use]
    pub fn winning_line(&self) -> &[usize] {
        match self {
            Outcome::Won { line, .. } => line.as_slice(),
            _ => &[],
        }
    }
}

impl LineSet {
    /// Evaluate `board` against these lines.
    ///
    /// The first fully-marked line in scan order wins. Without one, a full
    /// board is a draw.
    #[must_use]
    pub fn evaluate(&self, board: &Board) -> Outcome {
        debug_assert_eq!(board.size(), self.grid_size());

        for line in self.iter() {
            if let Some(winner) = line_owner(board, line) {
                return Outcome::Won {
                    winner,
                    line: line.clone(),
                };
            }
        }

        if board.is_full() {
            Outcome::Drawn
        } else {
            Outcome::InProgress
        }
    }
}

impl LineSet {
    /// Evaluate `board` after a mark was placed on `cell`.
    ///
    /// Only lines through `cell` are scanned, so the board before the move
    /// must have been in progress. Every line completed by the move passes
    /// through `cell`, and [`LineSet::through`] keeps scan order, so the
    /// result matches [`LineSet::evaluate`].
    #[must_use]
    pub fn evaluate_move(&self, board: &Board, cell: usize) -> Outcome {
        debug_assert_eq!(board.size(), self.grid_size());

        for line in self.through(cell) {
            if let Some(winner) = line_owner(board, line) {
                return Outcome::Won {
                    winner,
                    line: line.clone(),
                };
            }
        }

        if board.is_full() {
            Outcome::Drawn
        } else {
            Outcome::InProgress
        }
    }
}

/// The player owning every cell of `line`, if one does.
fn line_owner(board: &Board, line: &Line) -> Option<PlayerId> {
    let (&first, rest) = line.split_first()?;
    let owner = board.get(first)??;
    rest.iter()
        .all(|&cell| board.get(cell) == Some(Some(owner)))
        .then_some(owner)
}

/// Evaluate a board of any supported size.
///
/// Generates the candidate lines on the fly; hold a [`LineSet`] to evaluate
/// many boards of one size.
#[must_use]
pub fn evaluate_board(board: &Board) -> Outcome {
    LineSet::for_grid(board.size()).evaluate(board)
}
