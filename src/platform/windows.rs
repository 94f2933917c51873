//! Windows platform defaults.

use std::path::PathBuf;

use crate::format::LineEnding;

pub const LINE_ENDING: LineEnding = LineEnding::Windows;

/// `%SystemRoot%\System32\drivers\etc\hosts`, falling back to `C:\Windows`.
pub fn hosts_path() -> PathBuf {
    let root = std::env::var_os("SystemRoot").unwrap_or_else(|| r"C:\Windows".into());
    PathBuf::from(root)
        .join("System32")
        .join("drivers")
        .join("etc")
        .join("hosts")
}
