//! Line-level change reports for preview mode.

use std::fmt;

use similar::{capture_diff_slices, Algorithm, DiffOp};

use crate::format::Formatter;
use crate::parser::Line;

/// One changed line, by content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineChange {
    Removed(String),
    Added(String),
    Changed { old: String, new: String },
}

/// Ordered list of line changes between two versions of the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    pub changes: Vec<LineChange>,
}

impl Diff {
    /// Compare two line sequences as the formatter would render them.
    pub fn between(old: &[Line], new: &[Line], formatter: &Formatter) -> Self {
        Self::compute(&formatter.physical_lines(old), &formatter.physical_lines(new))
    }

    /// Compare raw texts. Line endings are ignored.
    pub fn of_text(old: &str, new: &str) -> Self {
        Self::compute(&split_lines(old), &split_lines(new))
    }

    /// Myers diff over whole lines; replaced runs pair up as `Changed`.
    pub fn compute(old: &[String], new: &[String]) -> Self {
        let mut changes = Vec::new();
        for op in capture_diff_slices(Algorithm::Myers, old, new) {
            match op {
                DiffOp::Equal { .. } => {}
                DiffOp::Delete {
                    old_index, old_len, ..
                } => {
                    changes.extend(
                        old[old_index..old_index + old_len]
                            .iter()
                            .cloned()
                            .map(LineChange::Removed),
                    );
                }
                DiffOp::Insert {
                    new_index, new_len, ..
                } => {
                    changes.extend(
                        new[new_index..new_index + new_len]
                            .iter()
                            .cloned()
                            .map(LineChange::Added),
                    );
                }
                DiffOp::Replace {
                    old_index,
                    old_len,
                    new_index,
                    new_len,
                } => {
                    let olds = &old[old_index..old_index + old_len];
                    let news = &new[new_index..new_index + new_len];
                    let paired = old_len.min(new_len);
                    for (o, n) in olds.iter().zip(news).take(paired) {
                        changes.push(LineChange::Changed {
                            old: o.clone(),
                            new: n.clone(),
                        });
                    }
                    changes.extend(olds[paired..].iter().cloned().map(LineChange::Removed));
                    changes.extend(news[paired..].iter().cloned().map(LineChange::Added));
                }
            }
        }
        Self { changes }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for change in &self.changes {
            match change {
                LineChange::Removed(line) => writeln!(f, "- {line}")?,
                LineChange::Added(line) => writeln!(f, "+ {line}")?,
                LineChange::Changed { old, new } => {
                    writeln!(f, "- {old}")?;
                    writeln!(f, "+ {new}")?;
                }
            }
        }
        Ok(())
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(String::from).collect()
}
