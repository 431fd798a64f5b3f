//! Engine bindings for Python.

use pyo3::prelude::*;

use crate::core::{Board, GameConfig, PlayerId};
use crate::engine::GameEngine;
use crate::events::EventLog;
use crate::render::{self, MarkTable};
use crate::rules;

use super::py_core::{value_error, PyGameResult, PyPlayerId};

/// Python wrapper for GameEngine.
///
/// Board cells are returned row-major as player indices, `None` for free
/// cells. Rejected moves and jumps raise `ValueError` and change nothing.
#[pyclass(name = "GameEngine")]
pub struct PyGameEngine {
    engine: GameEngine<EventLog>,
    marks: MarkTable,
}

#[pymethods]
impl PyGameEngine {
    #[new]
    #[pyo3(signature = (grid_size = 3, player_count = 2))]
    fn new(grid_size: usize, player_count: usize) -> PyResult<Self> {
        let config = GameConfig::new(grid_size, player_count).map_err(value_error)?;
        Ok(Self {
            engine: GameEngine::new(config, EventLog::new()),
            marks: MarkTable::default(),
        })
    }

    /// Place the current player's mark. Returns the result if the move ended the game.
    fn apply_move(&mut self, cell: usize) -> PyResult<Option<PyGameResult>> {
        let outcome = self.engine.apply_move(cell).map_err(value_error)?;
        Ok(outcome.result.map(PyGameResult))
    }

    fn reset_game(&mut self) {
        self.engine.reset_game();
    }

    fn jump_to_history(&mut self, index: usize) -> PyResult<()> {
        self.engine.jump_to_history(index).map_err(value_error)
    }

    fn reconfigure(&mut self, grid_size: usize, player_count: usize) -> PyResult<()> {
        self.engine
            .reconfigure(grid_size, player_count)
            .map_err(value_error)
    }

    /// Notifications since the last call, as display strings.
    fn drain_events(&mut self) -> Vec<String> {
        self.engine
            .observer_mut()
            .drain()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Free cells the current player may mark; empty once the game is over.
    fn legal_moves(&self) -> Vec<usize> {
        let state = self.engine.state();
        if state.is_terminal() {
            return Vec::new();
        }
        state.board().free_cells().collect()
    }

    #[getter]
    fn board(&self) -> Vec<Option<u8>> {
        cells_of(self.engine.state().board())
    }

    #[getter]
    fn grid_size(&self) -> usize {
        self.engine.config().grid_size()
    }

    #[getter]
    fn player_count(&self) -> usize {
        self.engine.config().player_count()
    }

    #[getter]
    fn current_player(&self) -> PyPlayerId {
        PyPlayerId(self.engine.state().current_player())
    }

    #[getter]
    fn winner(&self) -> Option<PyGameResult> {
        self.engine.state().winner().map(PyGameResult)
    }

    #[getter]
    fn winning_line(&self) -> Vec<usize> {
        self.engine.state().winning_line().to_vec()
    }

    #[getter]
    fn history_len(&self) -> usize {
        self.engine.state().history().len()
    }

    #[getter]
    fn current_history_index(&self) -> usize {
        self.engine.state().current_history_index()
    }

    /// Board at history position `index`.
    fn history_board(&self, index: usize) -> PyResult<Vec<Option<u8>>> {
        let history = self.engine.state().history();
        history.board_at(index).map(cells_of).ok_or_else(|| {
            value_error(format!(
                "history index {index} out of range (history holds {} positions)",
                history.len()
            ))
        })
    }

    fn status(&self) -> String {
        render::status_line(self.engine.state(), &self.marks)
    }

    fn __repr__(&self) -> String {
        format!(
            "GameEngine({}, move={})",
            self.engine.config(),
            self.engine.state().current_history_index()
        )
    }

    fn __str__(&self) -> String {
        render::board_text(self.engine.state(), &self.marks)
    }
}

/// Evaluate a row-major board of player indices (`None` for free cells).
///
/// Returns the result, or None while the game is undecided, and the winning line.
#[pyfunction]
pub fn evaluate_board(
    grid_size: usize,
    cells: Vec<Option<u8>>,
) -> PyResult<(Option<PyGameResult>, Vec<usize>)> {
    let board = Board::from_cells(grid_size, cells.into_iter().map(|c| c.map(PlayerId::new)))
        .map_err(value_error)?;
    let outcome = rules::evaluate_board(&board);
    Ok((
        outcome.result().map(PyGameResult),
        outcome.winning_line().to_vec(),
    ))
}

fn cells_of(board: &Board) -> Vec<Option<u8>> {
    board.iter().map(|cell| cell.map(|p| p.0)).collect()
}
