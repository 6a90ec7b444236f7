//! Immutable bit grid and cell addressing.

use serde::Serialize;

use crate::error::ParseError;

/// Cell address, 0-indexed. Ordering is row-major scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position `rows` down and `cols` right of `self`.
    pub const fn offset(self, rows: usize, cols: usize) -> Self {
        Self {
            row: self.row + rows,
            col: self.col + cols,
        }
    }
}

/// Direction a run is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Rightward within one row.
    Horizontal,
    /// Downward within one column.
    Vertical,
}

/// Rectangular, fully populated bitmap stored row-major.
///
/// Dimensions are at least 1x1. Whether any cell is set is derived once at
/// construction so callers can skip searching blank bitmaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    empty: bool,
}

impl Grid {
    /// Build a grid from row-major cells.
    ///
    /// Rejects zero dimensions and any cell count other than `rows * cols`.
    pub fn new(rows: usize, cols: usize, cells: Vec<bool>) -> Result<Self, ParseError> {
        if rows == 0 || cols == 0 {
            return Err(ParseError::MalformedHeader("dimensions must be at least 1"));
        }
        let expected = rows.checked_mul(cols).ok_or(ParseError::GridTooLarge {
            rows,
            cols,
            limit: usize::MAX,
        })?;
        if cells.len() < expected {
            return Err(ParseError::TooFewCells {
                expected,
                found: cells.len(),
            });
        }
        if cells.len() > expected {
            return Err(ParseError::TrailingData { expected });
        }
        let empty = !cells.iter().any(|&cell| cell);
        Ok(Self {
            rows,
            cols,
            cells,
            empty,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True iff no cell is set.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Cell value, `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<bool> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.cells[pos.row * self.cols + pos.col])
    }

    /// True if `pos` is inside the grid and set.
    pub fn is_set(&self, pos: Position) -> bool {
        self.get(pos) == Some(true)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Next position along `orientation`, `None` at the border.
    pub fn step(&self, pos: Position, orientation: Orientation) -> Option<Position> {
        let next = match orientation {
            Orientation::Horizontal => pos.offset(0, 1),
            Orientation::Vertical => pos.offset(1, 0),
        };
        self.contains(next).then_some(next)
    }

    /// Previous position along `orientation`, `None` at the border.
    pub fn step_back(&self, pos: Position, orientation: Orientation) -> Option<Position> {
        match orientation {
            Orientation::Horizontal => {
                pos.col.checked_sub(1).map(|col| Position::new(pos.row, col))
            }
            Orientation::Vertical => pos.row.checked_sub(1).map(|row| Position::new(row, pos.col)),
        }
    }

    /// Positions from `start` to the border along `orientation`, `start` included.
    pub fn walk(
        &self,
        start: Position,
        orientation: Orientation,
    ) -> impl Iterator<Item = Position> + '_ {
        let first = self.contains(start).then_some(start);
        std::iter::successors(first, move |&pos| self.step(pos, orientation))
    }
}
