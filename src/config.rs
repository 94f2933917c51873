//! Configuration loading and path resolution.
//!
//! Supports HOSTESS_PATH and HOSTESS_FMT env var overrides, read once per run.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::format::{Formatter, LineEnding};
use crate::platform;

pub const PATH_VAR: &str = "HOSTESS_PATH";
pub const FORMAT_VAR: &str = "HOSTESS_FMT";

/// Where the hosts file lives and how it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub hosts_path: PathBuf,
    pub line_ending: LineEnding,
}

impl Config {
    pub fn new(hosts_path: impl Into<PathBuf>, line_ending: LineEnding) -> Self {
        Self {
            hosts_path: hosts_path.into(),
            line_ending,
        }
    }

    /// Config for testing: a hosts file at `path` with unix line endings.
    pub fn for_test(path: impl AsRef<Path>) -> Self {
        Self::new(path.as_ref(), LineEnding::Unix)
    }

    /// Resolve from optional overrides, falling back to platform defaults.
    pub fn from_overrides(path: Option<OsString>, format: Option<String>) -> Result<Self> {
        let hosts_path = resolve_hosts_path(path);
        let line_ending = match format {
            Some(f) if !f.trim().is_empty() => f.parse()?,
            _ => platform::default_line_ending(),
        };
        Ok(Self {
            hosts_path,
            line_ending,
        })
    }

    /// Resolve from HOSTESS_PATH and HOSTESS_FMT.
    pub fn from_env() -> Result<Self> {
        Self::from_overrides(
            std::env::var_os(PATH_VAR),
            std::env::var(FORMAT_VAR).ok(),
        )
    }

    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.line_ending)
    }
}

/// The override path if set and non-empty, else the platform default.
pub fn resolve_hosts_path(path: Option<OsString>) -> PathBuf {
    match path {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => platform::default_hosts_path(),
    }
}
