//! Test-only helpers for building bitmaps and input files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::grid::Grid;

/// Build a grid from rows of `'0'`/`'1'` characters.
///
/// Panics on ragged or non-binary rows; intended for literals in tests.
pub fn grid(rows: &[&str]) -> Grid {
    let cols = rows.first().map_or(0, |row| row.len());
    let cells = rows
        .iter()
        .flat_map(|row| row.chars())
        .map(|cell| match cell {
            '0' => false,
            '1' => true,
            other => panic!("non-binary cell {other:?} in test grid"),
        })
        .collect();
    Grid::new(rows.len(), cols, cells).expect("rectangular test grid")
}

/// Every `rows` x `cols` grid, enumerated by bit pattern.
pub fn all_grids(rows: usize, cols: usize) -> impl Iterator<Item = Grid> {
    let area = rows * cols;
    assert!(area < 20, "too many grids to enumerate");
    (0u32..1 << area).map(move |bits| {
        let cells = (0..area).map(|i| bits & (1 << i) != 0).collect();
        Grid::new(rows, cols, cells).expect("enumerated grid")
    })
}

/// Bitmap description written to a temporary file, removed on drop.
pub struct InputFile {
    _dir: TempDir,
    path: PathBuf,
}

impl InputFile {
    pub fn new(contents: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        let path = dir.path().join("bitmap.txt");
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(Self { _dir: dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
