//! Positional line diff between two content snapshots.
//!
//! This is deliberately a naive index-for-index aligner, not an LCS/Myers
//! diff: line `i` of the old content is compared with line `i` of the new
//! content, so an insertion at the top reports every following line as
//! changed. The version history view accepts that trade-off — snapshots are
//! full-content anyway, and the aligner's output is stable and cheap.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Added,
    Removed,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub kind: DiffKind,
    pub content: String,
}

impl DiffLine {
    fn added(content: &str) -> Self {
        Self {
            kind: DiffKind::Added,
            content: content.to_string(),
        }
    }

    fn removed(content: &str) -> Self {
        Self {
            kind: DiffKind::Removed,
            content: content.to_string(),
        }
    }

    fn unchanged(content: &str) -> Self {
        Self {
            kind: DiffKind::Unchanged,
            content: content.to_string(),
        }
    }
}

/// Compare two snapshots line by line, by position.
///
/// For each index up to the longer side's length: a line present on only
/// one side is wholly added/removed; a differing pair emits the removed old
/// line followed by the added new line; an equal pair is unchanged.
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffLine> {
    if old == new {
        return new.lines().map(DiffLine::unchanged).collect();
    }

    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();
    let mut out = Vec::new();

    for i in 0..old_lines.len().max(new_lines.len()) {
        match (old_lines.get(i), new_lines.get(i)) {
            (None, Some(added)) => out.push(DiffLine::added(added)),
            (Some(removed), None) => out.push(DiffLine::removed(removed)),
            (Some(a), Some(b)) if a != b => {
                out.push(DiffLine::removed(a));
                out.push(DiffLine::added(b));
            }
            (Some(same), Some(_)) => out.push(DiffLine::unchanged(same)),
            (None, None) => unreachable!(),
        }
    }

    out
}
