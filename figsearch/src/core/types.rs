//! Search modes and the figures they report.

use serde::Serialize;

use crate::core::grid::Position;

/// Query a bitmap can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Longest horizontal run.
    HLine,
    /// Longest vertical run.
    VLine,
    /// Largest square with every cell set.
    Square,
    /// Largest square with every border cell set.
    Frame,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Mode::HLine => "hline",
            Mode::VLine => "vline",
            Mode::Square => "square",
            Mode::Frame => "frame",
        }
    }

    /// Last cell of a figure of `size` anchored at `start`, `None` for size 0.
    pub const fn end(self, start: Position, size: usize) -> Option<Position> {
        let reach = match size.checked_sub(1) {
            Some(reach) => reach,
            None => return None,
        };
        Some(match self {
            Mode::HLine => start.offset(0, reach),
            Mode::VLine => start.offset(reach, 0),
            Mode::Square | Mode::Frame => start.offset(reach, reach),
        })
    }
}

/// A found run or square: anchor cell plus length or side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Figure {
    pub start: Position,
    pub size: usize,
}
