//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::PlayerId;
use crate::rules::GameResult;

/// Map any engine error to a Python `ValueError`.
pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    #[new]
    fn new(id: u8) -> Self {
        Self(PlayerId::new(id))
    }

    /// Get the player index (0-based, turn order).
    #[getter]
    fn index(&self) -> usize {
        self.0.index()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 .0 as u64
    }
}

/// Python wrapper for a finished game's result.
#[pyclass(name = "GameResult")]
#[derive(Clone, Debug)]
pub struct PyGameResult(pub GameResult);

#[pymethods]
impl PyGameResult {
    /// Winning player, None for a draw.
    #[getter]
    fn winner(&self) -> Option<PyPlayerId> {
        self.0.winner().map(PyPlayerId)
    }

    #[getter]
    fn is_draw(&self) -> bool {
        self.0 == GameResult::Draw
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __repr__(&self) -> String {
        match self.0 {
            GameResult::Winner(p) => format!("GameResult(winner={})", p.0),
            GameResult::Draw => "GameResult(draw)".to_owned(),
        }
    }
}
