//! Bitmap input errors.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a bitmap description is rejected.
///
/// Every variant is reported to the user as `Invalid`; the detail is only
/// surfaced through tracing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed header: {0}")]
    MalformedHeader(&'static str),

    #[error("invalid cell #{index}: expected '0' or '1', found {found:?}")]
    InvalidCell { index: usize, found: char },

    #[error("too few cells: expected {expected}, found {found}")]
    TooFewCells { expected: usize, found: usize },

    #[error("unexpected data after {expected} cells")]
    TrailingData { expected: usize },

    #[error("{rows}x{cols} grid exceeds the limit of {limit} cells")]
    GridTooLarge {
        rows: usize,
        cols: usize,
        limit: usize,
    },

    #[error("read {}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
