//! Hosts file parser: raw text into an ordered list of lines.
//!
//! Parsing never fails. Anything that is not a well-formed
//! `<address> <hostname>...` line (optionally commented out) is kept verbatim
//! as a passthrough line.

use tracing::debug;

use crate::entry::{parse_address, validate_hostname, Entry};

/// A structured entry line. Several of these share a `source_line` when the
/// physical line listed more than one hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine {
    pub entry: Entry,
    /// 0-based physical line in the parsed file; `None` once appended at runtime.
    pub source_line: Option<usize>,
    /// Inline comment text, without the leading `#`.
    pub comment: Option<String>,
}

impl EntryLine {
    pub fn appended(entry: Entry) -> Self {
        Self {
            entry,
            source_line: None,
            comment: None,
        }
    }
}

/// One element of the file representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Entry(EntryLine),
    /// Comment, blank or unparseable line, without its terminator.
    Passthrough(String),
}

impl Line {
    pub fn as_entry(&self) -> Option<&EntryLine> {
        match self {
            Line::Entry(e) => Some(e),
            Line::Passthrough(_) => None,
        }
    }
}

/// Parse hosts file content. Accepts `\n` and `\r\n` terminators.
pub fn parse(content: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut entries = 0usize;
    for (number, raw) in physical_lines(content).enumerate() {
        match parse_line(raw, number) {
            Some(parsed) => {
                entries += parsed.len();
                lines.extend(parsed.into_iter().map(Line::Entry));
            }
            None => lines.push(Line::Passthrough(raw.to_string())),
        }
    }
    debug!(lines = lines.len(), entries, "parsed hosts content");
    lines
}

/// Split on `\n`, dropping one trailing `\r` per line and the empty tail
/// after a final terminator.
fn physical_lines(content: &str) -> impl Iterator<Item = &str> {
    let body = content.strip_suffix('\n').unwrap_or(content);
    let empty = content.is_empty();
    body.split('\n')
        .filter(move |_| !empty)
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
}

/// Parse one physical line into entry lines, or `None` for passthrough.
fn parse_line(raw: &str, number: usize) -> Option<Vec<EntryLine>> {
    let trimmed = raw.trim_start();
    let (enabled, body) = match trimmed.strip_prefix('#') {
        Some(rest) => (false, rest),
        None => (true, trimmed),
    };

    let (body, comment) = match body.split_once('#') {
        Some((before, after)) => {
            let c = after.trim();
            (before, (!c.is_empty()).then(|| c.to_string()))
        }
        None => (body, None),
    };

    let mut tokens = body.split_whitespace();
    let address = parse_address(tokens.next()?).ok()?;
    let hostnames: Vec<&str> = tokens.collect();
    if hostnames.is_empty() || hostnames.iter().any(|h| validate_hostname(h).is_err()) {
        return None;
    }

    Some(
        hostnames
            .into_iter()
            .map(|hostname| EntryLine {
                entry: Entry {
                    hostname: hostname.to_string(),
                    address,
                    enabled,
                },
                source_line: Some(number),
                comment: comment.clone(),
            })
            .collect(),
    )
}
