//! Pure bitmap model and search algorithms.
//!
//! Nothing here performs I/O. Every search takes the grid by reference and
//! returns a value, so repeated calls on the same grid agree.

pub mod grid;
pub mod runs;
pub mod square;
pub mod types;
