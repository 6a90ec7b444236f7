//! Longest horizontal/vertical runs of set cells.

use crate::core::grid::{Grid, Orientation, Position};
use crate::core::types::Figure;

/// Contiguous set cells starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub start: Position,
    pub len: usize,
}

impl From<Run> for Figure {
    fn from(run: Run) -> Self {
        Figure {
            start: run.start,
            size: run.len,
        }
    }
}

/// Length of the run starting at `start`; 0 if `start` is unset or outside the grid.
pub fn run_length(grid: &Grid, start: Position, orientation: Orientation) -> usize {
    grid.walk(start, orientation)
        .take_while(|&pos| grid.is_set(pos))
        .count()
}

/// Longest run along `orientation`, earliest start in scan order on ties.
///
/// Returns `None` when no cell is set.
pub fn longest_run(grid: &Grid, orientation: Orientation) -> Option<Run> {
    let mut best: Option<Run> = None;
    for start in grid.positions() {
        if !grid.is_set(start) || continues_run(grid, start, orientation) {
            continue;
        }
        let len = run_length(grid, start, orientation);
        if best.is_none_or(|run| len > run.len) {
            best = Some(Run { start, len });
        }
    }
    best
}

/// A cell preceded by a set cell sits inside a longer run found earlier in scan order.
fn continues_run(grid: &Grid, pos: Position, orientation: Orientation) -> bool {
    grid.step_back(pos, orientation)
        .is_some_and(|prev| grid.is_set(prev))
}
