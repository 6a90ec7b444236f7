//! Largest filled and outlined squares.
//!
//! Both searches visit anchors (top-left cells) in scan order and keep the
//! first anchor reaching the best side. An anchor's candidate side is capped
//! by the runs leaving it rightward and downward, then descended until the
//! remaining sides check out. Runs come from a table built once per search,
//! so each anchor costs O(side).

use crate::core::grid::{Grid, Orientation, Position};
use crate::core::types::Figure;

/// Square occupying `side` rows and columns from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub start: Position,
    pub side: usize,
}

impl From<Square> for Figure {
    fn from(square: Square) -> Self {
        Figure {
            start: square.start,
            size: square.side,
        }
    }
}

/// Largest square whose every cell is set.
pub fn largest_square(grid: &Grid) -> Option<Square> {
    let runs = RunTable::new(grid);
    best_anchor(grid, |anchor| runs.filled_side(anchor))
}

/// Largest square whose four sides are set; the interior is not inspected.
pub fn largest_frame(grid: &Grid) -> Option<Square> {
    let runs = RunTable::new(grid);
    best_anchor(grid, |anchor| runs.frame_side(anchor))
}

fn best_anchor(grid: &Grid, side_at: impl Fn(Position) -> usize) -> Option<Square> {
    let mut best: Option<Square> = None;
    for start in grid.positions() {
        if !grid.is_set(start) {
            continue;
        }
        let side = side_at(start);
        if side > 0 && best.is_none_or(|square| side > square.side) {
            best = Some(Square { start, side });
        }
    }
    best
}

/// [`run_length`](crate::core::runs::run_length) of every cell in both
/// orientations, filled in one pass from the bottom-right corner.
struct RunTable {
    cols: usize,
    across: Vec<usize>,
    down: Vec<usize>,
}

impl RunTable {
    fn new(grid: &Grid) -> Self {
        let (rows, cols) = (grid.rows(), grid.cols());
        let mut across = vec![0; rows * cols];
        let mut down = vec![0; rows * cols];
        for row in (0..rows).rev() {
            for col in (0..cols).rev() {
                if !grid.is_set(Position::new(row, col)) {
                    continue;
                }
                let index = row * cols + col;
                across[index] = 1 + if col + 1 < cols { across[index + 1] } else { 0 };
                down[index] = 1 + if row + 1 < rows { down[index + cols] } else { 0 };
            }
        }
        Self { cols, across, down }
    }

    /// Run from `pos`, which must lie inside the grid.
    fn run(&self, pos: Position, orientation: Orientation) -> usize {
        let index = pos.row * self.cols + pos.col;
        match orientation {
            Orientation::Horizontal => self.across[index],
            Orientation::Vertical => self.down[index],
        }
    }

    /// Upper bound on any square anchored at `anchor`.
    fn reach(&self, anchor: Position) -> usize {
        let across = self.run(anchor, Orientation::Horizontal);
        let down = self.run(anchor, Orientation::Vertical);
        across.min(down)
    }

    /// Side of the largest filled square anchored at `anchor`, 0 if unset.
    fn filled_side(&self, anchor: Position) -> usize {
        let limit = self.reach(anchor);
        // narrowest[i]: shortest row run among rows anchor.row..=anchor.row + i.
        let mut narrowest = Vec::with_capacity(limit);
        let mut width = usize::MAX;
        for i in 0..limit {
            width = width.min(self.run(anchor.offset(i, 0), Orientation::Horizontal));
            if width <= i {
                break;
            }
            narrowest.push(width);
        }
        (1..=narrowest.len())
            .rev()
            .find(|&side| narrowest[side - 1] >= side)
            .unwrap_or(0)
    }

    /// Side of the largest outlined square anchored at `anchor`, 0 if unset.
    fn frame_side(&self, anchor: Position) -> usize {
        (1..=self.reach(anchor))
            .rev()
            .find(|&side| {
                let bottom = self.run(anchor.offset(side - 1, 0), Orientation::Horizontal);
                let right = self.run(anchor.offset(0, side - 1), Orientation::Vertical);
                bottom >= side && right >= side
            })
            .unwrap_or(0)
    }
}
