//! Command implementations: read, parse, mutate, serialize, then write or preview.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::diff::Diff;
use crate::entry::Entry;
use crate::error::{HostsError, Result};
use crate::format::{from_json, to_json};
use crate::hosts::HostsModel;
use crate::parser::{self, Line};

/// Per-invocation options.
#[derive(Debug, Clone)]
pub struct Options {
    pub config: Config,
    /// Compute changes but never write.
    pub preview: bool,
}

impl Options {
    pub fn new(config: Config, preview: bool) -> Self {
        Self { config, preview }
    }
}

/// Result of a state-changing command.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Changes between the file on disk and the rendered result.
    pub diff: Diff,
    /// Changes between the parsed and the final lines, both rendered
    /// canonically. Empty when only whitespace or line endings moved.
    pub entry_changes: Diff,
    pub written: bool,
}

/// Current file content, its parsed lines, and the model built from them.
struct Loaded {
    original: String,
    baseline: Vec<Line>,
    model: HostsModel,
}

fn load(config: &Config) -> Result<Loaded> {
    let path = &config.hosts_path;
    let original = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "hosts file not found; starting empty");
            String::new()
        }
        Err(source) => {
            return Err(HostsError::ReadFailed {
                path: path.clone(),
                source,
            })
        }
    };
    let baseline = parser::parse(&original);
    let model = HostsModel::from_lines(baseline.clone());
    Ok(Loaded {
        original,
        baseline,
        model,
    })
}

/// Reformat, render, diff, and write unless previewing or unchanged.
fn commit(opts: &Options, loaded: Loaded) -> Result<Outcome> {
    let Loaded {
        original,
        baseline,
        mut model,
    } = loaded;
    model.reformat();

    let formatter = opts.config.formatter();
    let rendered = formatter.render(&model);
    let diff = Diff::of_text(&original, &rendered);
    let entry_changes = Diff::between(&baseline, model.lines(), &formatter);
    debug!(
        lines = diff.changes.len(),
        entries = entry_changes.changes.len(),
        preview = opts.preview,
        "computed changes"
    );

    if opts.preview || rendered == original {
        return Ok(Outcome {
            diff,
            entry_changes,
            written: false,
        });
    }

    crate::writer::write_atomic(&opts.config.hosts_path, &rendered)?;
    info!(
        path = %opts.config.hosts_path.display(),
        changes = diff.changes.len(),
        "hosts file updated"
    );
    Ok(Outcome {
        diff,
        entry_changes,
        written: true,
    })
}

/// Reformat the hosts file.
pub fn format(opts: &Options) -> Result<Outcome> {
    commit(opts, load(&opts.config)?)
}

/// Add or overwrite `hostname` -> `address`.
pub fn add(opts: &Options, hostname: &str, address: &str) -> Result<Outcome> {
    let mut loaded = load(&opts.config)?;
    loaded.model.add(hostname, address)?;
    commit(opts, loaded)
}

/// Remove all entries for `hostname`; absent hosts are not an error.
pub fn remove(opts: &Options, hostname: &str) -> Result<Outcome> {
    let mut loaded = load(&opts.config)?;
    loaded.model.remove(hostname);
    commit(opts, loaded)
}

pub fn enable(opts: &Options, hostname: &str) -> Result<Outcome> {
    let mut loaded = load(&opts.config)?;
    loaded.model.enable(hostname)?;
    commit(opts, loaded)
}

pub fn disable(opts: &Options, hostname: &str) -> Result<Outcome> {
    let mut loaded = load(&opts.config)?;
    loaded.model.disable(hostname)?;
    commit(opts, loaded)
}

/// Entries in file order, disabled ones included, optionally only those
/// for one hostname.
pub fn list(opts: &Options, hostname: Option<&str>) -> Result<Vec<Entry>> {
    let model = load(&opts.config)?.model;
    Ok(match hostname {
        Some(h) => model.get(h).into_iter().cloned().collect(),
        None => model.list().cloned().collect(),
    })
}

pub fn has(opts: &Options, hostname: &str) -> Result<bool> {
    Ok(load(&opts.config)?.model.has(hostname))
}

/// Export entries as JSON.
pub fn dump(opts: &Options) -> Result<String> {
    to_json(&load(&opts.config)?.model)
}

/// Import entries from a JSON file and merge them into the hosts file.
/// The import is validated in full before the hosts file is touched.
pub fn apply(opts: &Options, json_path: &Path) -> Result<Outcome> {
    let json = fs::read_to_string(json_path).map_err(|source| HostsError::ReadFailed {
        path: json_path.to_path_buf(),
        source,
    })?;
    let imported = from_json(&json)?;

    let mut loaded = load(&opts.config)?;
    for entry in imported.list() {
        loaded.model.put(entry.clone());
    }
    commit(opts, loaded)
}
