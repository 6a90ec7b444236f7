//! Bitmap figure search.
//!
//! Parses a textual bitmap (`rows cols` followed by `0`/`1` cells) and finds
//! the longest horizontal or vertical line of set cells, the largest filled
//! square, or the largest outlined square.
//!
//! - **[`core`]**: Pure grid model and search algorithms. No I/O.
//! - **[`io`]**: Bitmap loading and configuration files.
//!
//! [`query`] ties loading and searching together for the CLI, and [`format`]
//! renders what was found.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod io;
pub mod logging;
pub mod query;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
