//! Unix (macOS, Linux) platform defaults.

use std::path::PathBuf;

use crate::format::LineEnding;

pub const LINE_ENDING: LineEnding = LineEnding::Unix;

pub fn hosts_path() -> PathBuf {
    PathBuf::from("/etc/hosts")
}
