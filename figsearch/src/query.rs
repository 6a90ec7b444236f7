//! Query orchestration for `figsearch test|hline|vline|square|frame`.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::grid::{Grid, Orientation};
use crate::core::runs::longest_run;
use crate::core::square::{largest_frame, largest_square};
use crate::core::types::{Figure, Mode};
use crate::error::ParseError;
use crate::format::{OutputFormat, render};
use crate::io::loader::load_file;

/// Run the search matching `mode`.
pub fn search(grid: &Grid, mode: Mode) -> Option<Figure> {
    match mode {
        Mode::HLine => longest_run(grid, Orientation::Horizontal).map(Figure::from),
        Mode::VLine => longest_run(grid, Orientation::Vertical).map(Figure::from),
        Mode::Square => largest_square(grid).map(Figure::from),
        Mode::Frame => largest_frame(grid).map(Figure::from),
    }
}

/// Completed query: the grid searched and what was found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub grid: Grid,
    pub mode: Mode,
    pub figure: Option<Figure>,
}

impl Answer {
    pub fn render(&self, output: OutputFormat) -> Result<String> {
        render(&self.grid, self.figure, self.mode, output)
    }
}

/// Answer `mode` over an in-memory grid, skipping the search for blank grids.
pub fn answer(grid: Grid, mode: Mode) -> Answer {
    let figure = if grid.is_empty() {
        debug!(mode = mode.name(), "bitmap has no set cell");
        None
    } else {
        search(&grid, mode)
    };
    info!(mode = mode.name(), ?figure, "search finished");
    Answer { grid, mode, figure }
}

/// Load `path` and answer `mode` over it.
pub fn answer_file(path: &Path, mode: Mode, max_cells: usize) -> Result<Answer, ParseError> {
    let grid = load_file(path, max_cells)?;
    Ok(answer(grid, mode))
}

/// Validate `path` without searching.
pub fn check_file(path: &Path, max_cells: usize) -> Result<(), ParseError> {
    load_file(path, max_cells).map(|_| ())
}
