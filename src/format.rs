//! Text and JSON serialization of the hosts model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::{HostsError, Result};
use crate::hosts::HostsModel;
use crate::parser::{EntryLine, Line};

/// Line terminator convention for rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Unix,
    Windows,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Unix => "\n",
            LineEnding::Windows => "\r\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = HostsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unix" => Ok(LineEnding::Unix),
            "windows" => Ok(LineEnding::Windows),
            other => Err(HostsError::InvalidConfig(format!(
                "unknown hosts format {other:?}; expected unix or windows"
            ))),
        }
    }
}

/// Renders lines to hosts file text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    pub line_ending: LineEnding,
}

impl Formatter {
    pub fn new(line_ending: LineEnding) -> Self {
        Self { line_ending }
    }

    /// Render a whole model, terminating every line.
    pub fn render(&self, model: &HostsModel) -> String {
        self.render_lines(model.lines())
    }

    pub fn render_lines(&self, lines: &[Line]) -> String {
        let eol = self.line_ending.as_str();
        let mut out = String::new();
        for line in physical(lines) {
            out.push_str(&line);
            out.push_str(eol);
        }
        out
    }

    /// Render to physical lines without terminators.
    pub fn physical_lines(&self, lines: &[Line]) -> Vec<String> {
        physical(lines)
    }
}

/// Group consecutive entry lines that came from one source line and still
/// agree on address, state and comment, then render each group.
fn physical(lines: &[Line]) -> Vec<String> {
    let mut out = Vec::new();
    let mut group: Vec<&EntryLine> = Vec::new();
    for line in lines {
        match line {
            Line::Passthrough(text) => {
                flush(&mut group, &mut out);
                out.push(text.clone());
            }
            Line::Entry(el) => {
                if let Some(first) = group.first() {
                    if !same_group(first, el) {
                        flush(&mut group, &mut out);
                    }
                }
                group.push(el);
            }
        }
    }
    flush(&mut group, &mut out);
    out
}

fn same_group(a: &EntryLine, b: &EntryLine) -> bool {
    a.source_line.is_some()
        && a.source_line == b.source_line
        && a.entry.address == b.entry.address
        && a.entry.enabled == b.entry.enabled
        && a.comment == b.comment
}

fn flush(group: &mut Vec<&EntryLine>, out: &mut Vec<String>) {
    let Some(first) = group.first() else {
        return;
    };
    let hostnames: Vec<&str> = group.iter().map(|el| el.entry.hostname.as_str()).collect();
    let mut text = String::new();
    if !first.entry.enabled {
        text.push_str("# ");
    }
    text.push_str(&first.entry.address.to_string());
    text.push('\t');
    text.push_str(&hostnames.join(" "));
    if let Some(comment) = &first.comment {
        text.push_str(" # ");
        text.push_str(comment);
    }
    out.push(text);
    group.clear();
}

/// JSON export record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub hostname: String,
    pub address: String,
    pub enabled: bool,
}

impl From<&Entry> for EntryRecord {
    fn from(e: &Entry) -> Self {
        Self {
            hostname: e.hostname.clone(),
            address: e.address.to_string(),
            enabled: e.enabled,
        }
    }
}

/// Export entries (not comments or blank lines) as a pretty JSON array.
pub fn to_json(model: &HostsModel) -> Result<String> {
    let records: Vec<EntryRecord> = model.list().map(EntryRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Build a fresh model from a JSON array. All-or-nothing: any bad record
/// fails the whole import. Enabled records for one key collapse to the last
/// one; disabled records are kept unless repeated exactly.
pub fn from_json(json: &str) -> Result<HostsModel> {
    let records: Vec<EntryRecord> =
        serde_json::from_str(json).map_err(|e| HostsError::MalformedImport(e.to_string()))?;

    let entries = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Entry::new(&r.hostname, &r.address)
                .map(|e| e.with_enabled(r.enabled))
                .map_err(|e| HostsError::MalformedImport(format!("record {i}: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut model = HostsModel::new();
    for entry in entries {
        model.put(entry);
    }
    Ok(model)
}
