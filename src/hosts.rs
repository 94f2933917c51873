//! In-memory hosts model: ordered lines plus a (hostname, family) index.
//!
//! Every public mutation validates before touching `lines`, then rebuilds the
//! index before returning, so the two never disagree between calls.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::entry::{Entry, EntryKey, Family};
use crate::error::{HostsError, Result};
use crate::parser::{self, EntryLine, Line};

#[derive(Debug, Clone, Default)]
pub struct HostsModel {
    lines: Vec<Line>,
    /// Positions of entry lines per key, in file order.
    index: HashMap<EntryKey, Vec<usize>>,
}

impl HostsModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse hosts content into a model.
    pub fn parse(content: &str) -> Self {
        Self::from_lines(parser::parse(content))
    }

    /// Build a model from parsed lines. A later enabled entry that collides
    /// with an earlier enabled one for the same key is disabled.
    pub fn from_lines(mut lines: Vec<Line>) -> Self {
        let mut active: HashSet<EntryKey> = HashSet::new();
        for line in lines.iter_mut() {
            if let Line::Entry(el) = line {
                if !el.entry.enabled {
                    continue;
                }
                if !active.insert(el.entry.key()) {
                    warn!(
                        hostname = %el.entry.hostname,
                        address = %el.entry.address,
                        "duplicate enabled entry; disabling"
                    );
                    el.entry.enabled = false;
                }
            }
        }
        let mut model = Self {
            lines,
            index: HashMap::new(),
        };
        model.rebuild_index();
        model
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Entries in file order, disabled ones included. Cloning restarts it.
    pub fn list(&self) -> impl Iterator<Item = &Entry> + Clone + '_ {
        self.lines.iter().filter_map(|l| l.as_entry()).map(|el| &el.entry)
    }

    /// All entries for `hostname` (any family, any state), in file order.
    pub fn get(&self, hostname: &str) -> Vec<&Entry> {
        self.list().filter(|e| e.matches(hostname)).collect()
    }

    /// Whether any entry, enabled or not, exists for `hostname`.
    pub fn has(&self, hostname: &str) -> bool {
        let key = hostname.to_ascii_lowercase();
        [Family::V4, Family::V6]
            .into_iter()
            .any(|f| self.index.contains_key(&(key.clone(), f)))
    }

    /// Add or overwrite the enabled entry for (hostname, family).
    pub fn add(&mut self, hostname: &str, address: &str) -> Result<()> {
        let entry = Entry::new(hostname, address)?;
        match self.enabled_position(&entry.key()) {
            Some(pos) => {
                if let Line::Entry(el) = &mut self.lines[pos] {
                    debug!(hostname, from = %el.entry.address, to = %entry.address, "overwriting entry");
                    el.entry.address = entry.address;
                    el.entry.enabled = true;
                }
            }
            None => {
                debug!(hostname, address = %entry.address, "appending entry");
                self.lines.push(Line::Entry(EntryLine::appended(entry)));
            }
        }
        self.rebuild_index();
        Ok(())
    }

    /// Upsert an entry with its own enabled state. An enabled entry behaves
    /// like `add`: it overwrites the enabled line for the key or appends. A
    /// disabled entry is dropped when an identical disabled line exists and
    /// appended otherwise, so it never displaces another address.
    pub fn put(&mut self, entry: Entry) {
        let key = entry.key();
        let target = if entry.enabled {
            self.enabled_position(&key)
        } else {
            self.index.get(&key).and_then(|p| {
                p.iter().copied().find(|&pos| {
                    matches!(&self.lines[pos], Line::Entry(el)
                        if !el.entry.enabled
                            && el.entry.address == entry.address
                            && el.entry.hostname == entry.hostname)
                })
            })
        };
        match target {
            Some(pos) => {
                if let Line::Entry(el) = &mut self.lines[pos] {
                    el.entry.address = entry.address;
                }
            }
            None => self.lines.push(Line::Entry(EntryLine::appended(entry))),
        }
        self.rebuild_index();
    }

    /// Remove every entry for `hostname`. Returns how many were removed.
    pub fn remove(&mut self, hostname: &str) -> usize {
        let before = self.lines.len();
        self.lines.retain(|l| match l {
            Line::Entry(el) => !el.entry.matches(hostname),
            Line::Passthrough(_) => true,
        });
        let removed = before - self.lines.len();
        if removed > 0 {
            debug!(hostname, removed, "removed entries");
            self.rebuild_index();
        }
        removed
    }

    /// Enable `hostname`: at most one line per family ends up enabled.
    pub fn enable(&mut self, hostname: &str) -> Result<()> {
        let key = hostname.to_ascii_lowercase();
        if !self.has(hostname) {
            return Err(HostsError::NotFound(hostname.to_string()));
        }
        for family in [Family::V4, Family::V6] {
            let slot = (key.clone(), family);
            if self.enabled_position(&slot).is_some() {
                continue;
            }
            let last = self.index.get(&slot).and_then(|p| p.last().copied());
            if let Some(pos) = last {
                self.set_enabled(pos, true);
            }
        }
        self.rebuild_index();
        Ok(())
    }

    /// Disable every line for `hostname`.
    pub fn disable(&mut self, hostname: &str) -> Result<()> {
        if !self.has(hostname) {
            return Err(HostsError::NotFound(hostname.to_string()));
        }
        for line in self.lines.iter_mut() {
            if let Line::Entry(el) = line {
                if el.entry.matches(hostname) {
                    el.entry.enabled = false;
                }
            }
        }
        self.rebuild_index();
        Ok(())
    }

    /// Drop exact duplicate entries and rebuild the index. Idempotent.
    /// Lines whose comments differ are not duplicates.
    pub fn reformat(&mut self) {
        let mut seen = HashSet::new();
        let before = self.lines.len();
        self.lines.retain(|l| match l {
            Line::Entry(el) => seen.insert((
                el.entry.key(),
                el.entry.address,
                el.entry.enabled,
                el.comment.clone(),
            )),
            Line::Passthrough(_) => true,
        });
        if self.lines.len() != before {
            debug!(dropped = before - self.lines.len(), "dropped duplicate entries");
        }
        self.rebuild_index();
    }

    fn enabled_position(&self, key: &EntryKey) -> Option<usize> {
        self.index.get(key)?.iter().copied().find(|&pos| {
            matches!(&self.lines[pos], Line::Entry(el) if el.entry.enabled)
        })
    }

    fn set_enabled(&mut self, pos: usize, enabled: bool) {
        if let Line::Entry(el) = &mut self.lines[pos] {
            el.entry.enabled = enabled;
        }
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (pos, line) in self.lines.iter().enumerate() {
            if let Line::Entry(el) = line {
                self.index.entry(el.entry.key()).or_default().push(pos);
            }
        }
    }
}
