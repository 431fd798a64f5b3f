//! The NxN board.
//!
//! Cells are stored row-major in an `im::Vector`, so placing a mark returns
//! a new board that shares all untouched structure with the old one. History
//! keeps one board per move without copying N² cells each time.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::SUPPORTED_GRID_SIZES;
use super::player::PlayerId;
use crate::error::ConfigError;

/// A single board cell: empty, or the mark of the player who claimed it.
pub type Cell = Option<PlayerId>;

/// Square board of `size * size` cells, indexed row-major from 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Create an empty board with edge length `size`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: std::iter::repeat(None).take(size * size).collect(),
        }
    }

    /// Build a board from row-major cells.
    ///
    /// Fails for unsupported sizes and unless `cells.len() == size * size`.
    pub fn from_cells(
        size: usize,
        cells: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, ConfigError> {
        if !SUPPORTED_GRID_SIZES.contains(&size) {
            return Err(ConfigError::UnsupportedGridSize(size));
        }
        let cells: Vector<Cell> = cells.into_iter().collect();
        if cells.len() != size * size {
            return Err(ConfigError::CellCount {
                expected: size * size,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Edge length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, N².
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-sized board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a cell, `None` when `index` is off the board.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Get the cell at (`row`, `col`).
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.get(row * self.size + col)
    }

    /// Check whether `index` is on the board and unclaimed.
    #[must_use]
    pub fn is_free(&self, index: usize) -> bool {
        matches!(self.get(index), Some(None))
    }

    /// Return a new board with `player`'s mark at `index`.
    ///
    /// The caller is responsible for checking that the cell is free; the
    /// engine never overwrites a mark.
    #[must_use]
    pub fn with_mark(&self, index: usize, player: PlayerId) -> Self {
        Self {
            size: self.size,
            cells: self.cells.update(index, Some(player)),
        }
    }

    /// Check if every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of marked cells.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indices of all unclaimed cells, ascending.
    pub fn free_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    /// Iterate cells row-major.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}
