//! Stable exit codes for figsearch CLI commands.

/// Command succeeded, including searches that found nothing.
pub const OK: i32 = 0;
/// Bitmap was rejected, unreadable, or the config could not be loaded.
pub const INVALID: i32 = 1;
/// Arguments did not match any command.
pub const USAGE: i32 = 1;
