//! Platform defaults for the hosts file location and syntax.

use std::path::PathBuf;

use crate::format::LineEnding;

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

/// Default hosts file path for the running platform.
pub fn default_hosts_path() -> PathBuf {
    #[cfg(unix)]
    return unix::hosts_path();

    #[cfg(windows)]
    return windows::hosts_path();
}

/// Default line ending for the running platform.
pub fn default_line_ending() -> LineEnding {
    #[cfg(unix)]
    return unix::LINE_ENDING;

    #[cfg(windows)]
    return windows::LINE_ENDING;
}
