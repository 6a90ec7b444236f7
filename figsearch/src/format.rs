//! Rendering of search results.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::grid::{Grid, Position};
use crate::core::types::{Figure, Mode};

/// Printed when the bitmap holds no set cell.
pub const NOT_FOUND: &str = "Not found";

/// How search results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `r1 c1 r2 c2`, or `Not found`.
    Text,
    /// One JSON object per result.
    Json,
}

/// Start and end cells of `figure` under `mode`; a zero-size figure has none.
fn corners(grid: &Grid, figure: Figure, mode: Mode) -> Option<(Position, Position)> {
    let end = mode.end(figure.start, figure.size)?;
    debug_assert!(grid.contains(figure.start) && grid.contains(end));
    Some((figure.start, end))
}

/// `"r1 c1 r2 c2"` for a found figure, [`NOT_FOUND`] otherwise.
pub fn format(grid: &Grid, result: Option<Figure>, mode: Mode) -> String {
    match result.and_then(|figure| corners(grid, figure, mode)) {
        Some((start, end)) => format!("{} {} {} {}", start.row, start.col, end.row, end.col),
        None => NOT_FOUND.to_string(),
    }
}

#[derive(Serialize)]
struct JsonReport {
    mode: Mode,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<usize>,
}

/// Single-line JSON object describing the result.
pub fn format_json(grid: &Grid, result: Option<Figure>, mode: Mode) -> Result<String> {
    let found = result.and_then(|figure| Some((figure, corners(grid, figure, mode)?)));
    let report = match found {
        Some((figure, (start, end))) => JsonReport {
            mode,
            found: true,
            start: Some(start),
            end: Some(end),
            size: Some(figure.size),
        },
        None => JsonReport {
            mode,
            found: false,
            start: None,
            end: None,
            size: None,
        },
    };
    serde_json::to_string(&report).context("serialize result json")
}

pub fn render(
    grid: &Grid,
    result: Option<Figure>,
    mode: Mode,
    output: OutputFormat,
) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(format(grid, result, mode)),
        OutputFormat::Json => format_json(grid, result, mode),
    }
}
