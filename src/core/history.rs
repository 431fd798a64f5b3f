//! Move history: board snapshots for time travel.
//!
//! Position 0 is always the empty starting board. Position `i > 0` is the
//! board after the `i`-th move. The history only grows at the end, except
//! that playing a new move after jumping backwards first drops every
//! position after the jump target (branch-and-discard, no history tree).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::PlayerId;

/// A recorded move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Board after the move was played.
    pub board: Board,

    /// Cell index the mark was placed on.
    pub cell: usize,

    /// The player whose mark was placed.
    pub player: PlayerId,
}

impl Move {
    /// Create a new move record.
    #[must_use]
    pub fn new(board: Board, cell: usize, player: PlayerId) -> Self {
        Self {
            board,
            cell,
            player,
        }
    }
}

/// Ordered board positions of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    start: Board,
    moves: Vector<Move>,
}

impl History {
    /// Start a history at the given (empty) board.
    #[must_use]
    pub fn new(start: Board) -> Self {
        Self {
            start,
            moves: Vector::new(),
        }
    }

    /// Number of positions, including the starting board. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len() + 1
    }

    /// Always false: the starting position is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Board at position `index`.
    #[must_use]
    pub fn board_at(&self, index: usize) -> Option<&Board> {
        match index {
            0 => Some(&self.start),
            i => self.moves.get(i - 1).map(|m| &m.board),
        }
    }

    /// Move that produced position `index`; `None` for the start and past the end.
    #[must_use]
    pub fn move_at(&self, index: usize) -> Option<&Move> {
        index.checked_sub(1).and_then(|i| self.moves.get(i))
    }

    /// The most recent move.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Keep positions `0..=index` and drop everything after.
    pub fn truncate_after(&mut self, index: usize) {
        self.moves.truncate(index.min(self.moves.len()));
    }

    /// Append a move as the new last position.
    pub fn push(&mut self, mv: Move) {
        self.moves.push_back(mv);
    }

    /// Iterate over recorded moves in play order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(history: &mut History, cell: usize, player: u8) {
        let board = history
            .board_at(history.len() - 1)
            .unwrap()
            .with_mark(cell, PlayerId(player));
        history.push(Move::new(board, cell, PlayerId(player)));
    }

    #[test]
    fn test_new_history_has_start_position() {
        let history = History::new(Board::new(3));
        assert_eq!(history.len(), 1);
        assert_eq!(history.move_count(), 0);
        assert_eq!(history.board_at(0), Some(&Board::new(3)));
        assert!(history.move_at(0).is_none());
        assert!(history.last_move().is_none());
    }

    #[test]
    fn test_positions_follow_moves() {
        let mut history = History::new(Board::new(3));
        play(&mut history, 4, 0);
        play(&mut history, 0, 1);

        assert_eq!(history.len(), 3);
        assert_eq!(history.board_at(1).unwrap().marked_count(), 1);
        assert_eq!(history.board_at(2).unwrap().marked_count(), 2);
        assert_eq!(history.move_at(2).unwrap().cell, 0);
        assert_eq!(history.move_at(2).unwrap().player, PlayerId(1));
        assert!(history.board_at(3).is_none());
    }

    #[test]
    fn test_truncate_after() {
        let mut history = History::new(Board::new(3));
        for (cell, player) in [(0, 0), (1, 1), (2, 0), (3, 1), (4, 0)] {
            play(&mut history, cell, player);
        }
        assert_eq!(history.len(), 6);

        history.truncate_after(2);
        assert_eq!(history.len(), 3);
        assert_eq!(history.last_move().unwrap().cell, 1);

        history.truncate_after(10);
        assert_eq!(history.len(), 3);

        history.truncate_after(0);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_history_serialization() {
        let mut history = History::new(Board::new(3));
        play(&mut history, 8, 0);
        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}
