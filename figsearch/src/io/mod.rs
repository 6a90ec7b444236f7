//! I/O helpers for figsearch commands.

pub mod config;
pub mod loader;
