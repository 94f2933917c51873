//! Shared test helpers.

use std::fs;
use std::path::{Path, PathBuf};

use hostess::commands::Options;
use hostess::config::Config;
use tempfile::TempDir;

/// Create a temp directory to hold a hosts file.
/// Uses current dir (workspace) so sandbox allows full access.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("hostess_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| Path::new(".").into()))
        .expect("temp dir")
}

/// Write `content` to `<dir>/hosts` and return its path.
pub fn hosts_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("hosts");
    fs::write(&path, content).unwrap();
    path
}

/// Options targeting `path` with unix line endings.
pub fn options(path: &Path, preview: bool) -> Options {
    Options::new(Config::for_test(path), preview)
}
