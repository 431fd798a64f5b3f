//! Text the presentation layer shows for a game.
//!
//! The engine only knows player ids. This module maps them to symbols and
//! produces the status line, toasts, history labels and a plain board grid.

use std::borrow::Cow;

use crate::core::{GameState, PlayerId};
use crate::rules::GameResult;
use crate::stats::Milestone;

/// Toast shown after a reset.
pub const RESET_MESSAGE: &str = "Game has been reset!";

/// Symbols used to draw each player's marks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkTable {
    symbols: Vec<String>,
}

impl MarkTable {
    /// Table with custom symbols, one per player in turn order.
    pub fn new<I, T>(symbols: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Symbol for `player`. Players without a symbol are shown by number.
    #[must_use]
    pub fn symbol(&self, player: PlayerId) -> Cow<'_, str> {
        match self.symbols.get(player.index()) {
            Some(symbol) => Cow::Borrowed(symbol.as_str()),
            None => Cow::Owned((player.index() + 1).to_string()),
        }
    }
}

impl Default for MarkTable {
    fn default() -> Self {
        Self::new(["X", "O", "△", "□"])
    }
}

/// "Next player: X", "Winner: Player X" or "Game ended in a draw!".
#[must_use]
pub fn status_line(state: &GameState, marks: &MarkTable) -> String {
    match state.winner() {
        Some(GameResult::Winner(player)) => format!("Winner: Player {}", marks.symbol(player)),
        Some(GameResult::Draw) => "Game ended in a draw!".to_owned(),
        None => format!("Next player: {}", marks.symbol(state.current_player())),
    }
}

/// Toast for a finished game.
#[must_use]
pub fn game_end_message(result: &GameResult, marks: &MarkTable) -> String {
    match result {
        GameResult::Winner(player) => format!("Player {} wins the game!", marks.symbol(*player)),
        GameResult::Draw => "It's a draw! The game ended in a tie.".to_owned(),
    }
}

#[must_use]
pub fn milestone_message(milestone: Milestone) -> &'static str {
    match milestone {
        Milestone::FiveGames => "You've played 5 games! Getting competitive!",
        Milestone::TenGames => "10 games completed! You're a TicTacToePro master!",
    }
}

/// Label of history position `index`.
#[must_use]
pub fn history_label(index: usize) -> String {
    if index == 0 {
        "Game Start".to_owned()
    } else {
        format!("Move #{index}")
    }
}

/// One row of the history list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub index: usize,
    pub label: String,
    pub current: bool,
}

/// Every history position, oldest first, with the shown one flagged.
#[must_use]
pub fn history_entries(state: &GameState) -> Vec<HistoryEntry> {
    let current = state.current_history_index();
    (0..state.history().len())
        .map(|index| HistoryEntry {
            index,
            label: history_label(index),
            current: index == current,
        })
        .collect()
}

/// Board as text, one line per row.
///
/// Marked cells show their symbol, free cells their index. Cells of the
/// winning line are wrapped in brackets.
#[must_use]
pub fn board_text(state: &GameState, marks: &MarkTable) -> String {
    let board = state.board();
    let width = (board.len() - 1).to_string().len();
    let winning = state.winning_line();

    let mut out = String::new();
    for row in 0..board.size() {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..board.size() {
            let index = row * board.size() + col;
            let text = match board.at(row, col).flatten() {
                Some(player) => marks.symbol(player),
                None => Cow::Owned(index.to_string()),
            };
            let (open, close) = if winning.contains(&index) {
                ('[', ']')
            } else {
                (' ', ' ')
            };
            out.push_str(&format!("{open}{text:>width$}{close}"));
        }
    }
    out
}
