//! Atomic hosts file replacement.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{HostsError, Result};

/// Write `contents` to `path` so the file is either entirely old or entirely new.
///
/// The temp file lives in the target's directory (same filesystem) and is
/// removed by its guard on any early return. A symlinked `path` is resolved
/// first so the link survives and its target gets the new content.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let target = match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            let target = fs::canonicalize(path).map_err(|e| HostsError::write(path, e))?;
            debug!(path = %path.display(), target = %target.display(), "resolved hosts file link");
            target
        }
        _ => path.to_path_buf(),
    };
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(HostsError::write(
            path,
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("parent directory {} is not accessible", parent.display()),
            ),
        ));
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| HostsError::write(path, e))?;
    temp.write_all(contents.as_bytes())
        .map_err(|e| HostsError::write(path, e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| HostsError::write(path, e))?;

    if let Ok(meta) = fs::metadata(&target) {
        fs::set_permissions(temp.path(), meta.permissions())
            .map_err(|e| HostsError::write(path, e))?;
    }

    temp.persist(&target).map_err(|e| HostsError::write(path, e.error))?;
    debug!(path = %path.display(), bytes = contents.len(), "hosts file replaced");
    Ok(())
}
