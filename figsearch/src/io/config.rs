//! Optional TOML configuration passed with `--config`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::io::loader::DEFAULT_MAX_CELLS;

/// figsearch configuration (TOML).
///
/// Missing fields fall back to the defaults used without a config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FigsearchConfig {
    /// Output rendering for search results; `--format` overrides it.
    pub format: OutputFormat,

    /// Largest accepted `rows * cols`. Bigger bitmaps are reported `Invalid`.
    pub max_cells: usize,
}

impl Default for FigsearchConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl FigsearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_cells == 0 {
            return Err(anyhow!("max_cells must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// The file must exist; without `--config` callers use
/// `FigsearchConfig::default()` instead.
pub fn load_config(path: &Path) -> Result<FigsearchConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FigsearchConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &FigsearchConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
