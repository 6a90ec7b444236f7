//! Bitmap description parsing.
//!
//! Input is `rows cols` followed by `rows * cols` cells, each `0` or `1`.
//! Cells may be separated by whitespace or written contiguously. Only
//! whitespace may follow the last cell.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::grid::Grid;
use crate::error::ParseError;

/// Default upper bound on `rows * cols`.
pub const DEFAULT_MAX_CELLS: usize = 100_000_000;

/// Parse a bitmap description with the default cell limit.
pub fn load(source: &[u8]) -> Result<Grid, ParseError> {
    load_bounded(source, DEFAULT_MAX_CELLS)
}

/// Parse a bitmap description, rejecting grids larger than `max_cells`.
pub fn load_bounded(source: &[u8], max_cells: usize) -> Result<Grid, ParseError> {
    let mut scanner = Scanner::new(source);

    let rows = scanner
        .dimension()
        .ok_or(ParseError::MalformedHeader("missing or non-numeric row count"))??;
    let cols = scanner
        .dimension()
        .ok_or(ParseError::MalformedHeader("missing or non-numeric column count"))??;
    if rows < 1 || cols < 1 {
        return Err(ParseError::MalformedHeader("dimensions must be at least 1"));
    }
    let expected = rows
        .checked_mul(cols)
        .filter(|&area| area <= max_cells)
        .ok_or(ParseError::GridTooLarge {
            rows,
            cols,
            limit: max_cells,
        })?;
    debug!(rows, cols, "header parsed");

    let mut cells = Vec::new();
    cells
        .try_reserve_exact(expected)
        .map_err(|_| ParseError::GridTooLarge {
            rows,
            cols,
            limit: max_cells,
        })?;
    while let Some(byte) = scanner.next_non_space() {
        if cells.len() == expected {
            return Err(ParseError::TrailingData { expected });
        }
        match byte {
            b'0' => cells.push(false),
            b'1' => cells.push(true),
            other => {
                return Err(ParseError::InvalidCell {
                    index: cells.len(),
                    found: char::from(other),
                });
            }
        }
    }
    if cells.len() < expected {
        return Err(ParseError::TooFewCells {
            expected,
            found: cells.len(),
        });
    }

    Grid::new(rows, cols, cells)
}

/// Read and parse a bitmap file.
pub fn load_file(path: &Path, max_cells: usize) -> Result<Grid, ParseError> {
    let source = fs::read(path).map_err(|source| ParseError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = load_bounded(&source, max_cells)?;
    debug!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        empty = grid.is_empty(),
        "bitmap loaded"
    );
    Ok(grid)
}

/// Byte cursor with C `isspace` whitespace rules.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_space(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.pos += 1;
        }
    }

    fn next_non_space(&mut self) -> Option<u8> {
        self.skip_space();
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    /// Signed decimal integer, digits read greedily.
    ///
    /// `None` if no digits follow the optional sign. Negative values come
    /// back as 0 so the caller's lower-bound check rejects them.
    fn dimension(&mut self) -> Option<Result<usize, ParseError>> {
        self.skip_space();
        let negative = match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                true
            }
            Some(b'+') => {
                self.pos += 1;
                false
            }
            _ => false,
        };
        let digits_start = self.pos;
        while self.peek().is_some_and(|byte| byte.is_ascii_digit()) {
            self.pos += 1;
        }
        let digits = &self.bytes[digits_start..self.pos];
        if digits.is_empty() {
            return None;
        }
        let value = digits.iter().try_fold(0usize, |acc, &digit| {
            acc.checked_mul(10)?.checked_add(usize::from(digit - b'0'))
        });
        Some(match value {
            Some(_) if negative => Ok(0),
            Some(value) => Ok(value),
            None => Err(ParseError::MalformedHeader("dimension out of range")),
        })
    }
}

fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}
