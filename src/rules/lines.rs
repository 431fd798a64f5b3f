//! Candidate winning lines.
//!
//! For a board of edge N the winning length is `L = min(5, N)`. A line is
//! any run of exactly L consecutive cells along one of four directions.
//! Lines are generated in a fixed order: all rows, then all columns, then
//! ↘ diagonals, then ↙ diagonals, each group by ascending start cell. The
//! evaluator relies on this order to break ties between lines completed by
//! the same position.

use smallvec::SmallVec;

use crate::core::line_length_for;

/// Cell indices of one line, ordered from its start cell.
///
/// Lines never exceed five cells, so they stay inline.
pub type Line = SmallVec<[usize; 5]>;

/// Scan direction of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right (↘).
    Diagonal,
    /// Top-right to bottom-left (↙).
    AntiDiagonal,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Row-major index offset between consecutive cells.
    fn stride(self, size: usize) -> usize {
        match self {
            Direction::Horizontal => 1,
            Direction::Vertical => size,
            Direction::Diagonal => size + 1,
            Direction::AntiDiagonal => size - 1,
        }
    }

    /// Valid (row, column) start ranges for a line of `len` on an edge of `size`.
    fn starts(self, size: usize, len: usize) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let span = size - len + 1;
        match self {
            Direction::Horizontal => (0..size, 0..span),
            Direction::Vertical => (0..span, 0..size),
            Direction::Diagonal => (0..span, 0..span),
            Direction::AntiDiagonal => (0..span, len - 1..size),
        }
    }
}

/// Every candidate line for one board size, in scan order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSet {
    grid_size: usize,
    line_length: usize,
    lines: Vec<Line>,
}

impl LineSet {
    /// Generate the lines for a board of edge `grid_size`.
    #[must_use]
    pub fn for_grid(grid_size: usize) -> Self {
        let line_length = line_length_for(grid_size);
        let mut lines: Vec<Line> = Vec::with_capacity(expected_line_count(grid_size));

        if line_length > 0 {
            for direction in Direction::ALL {
                let stride = direction.stride(grid_size);
                let (rows, cols) = direction.starts(grid_size, line_length);
                // Row-major nesting keeps start indices ascending.
                for row in rows {
                    for col in cols.clone() {
                        let start = row * grid_size + col;
                        lines.push((0..line_length).map(|k| start + k * stride).collect());
                    }
                }
            }
        }

        Self {
            grid_size,
            line_length,
            lines,
        }
    }

    /// Board edge these lines were generated for.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Cells per line.
    #[must_use]
    pub fn line_length(&self) -> usize {
        self.line_length
    }

    /// Number of candidate lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the board is too small to hold a line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate lines in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Lines passing through `cell`, in scan order.
    pub fn through(&self, cell: usize) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |line| line.contains(&cell))
    }
}

/// Candidate line count for edge N: `2·N·(N−L+1) + 2·(N−L+1)²`.
#[must_use]
pub fn expected_line_count(grid_size: usize) -> usize {
    let len = line_length_for(grid_size);
    if len == 0 {
        return 0;
    }
    let span = grid_size - len + 1;
    2 * grid_size * span + 2 * span * span
}
