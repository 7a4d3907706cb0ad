//! # Domain Model: Files, Versions, and Comments
//!
//! This module defines the core data structures: [`FileEntry`], [`Version`],
//! [`Comment`], and [`Author`]. It also handles path normalization, which is
//! crucial for identity integrity.
//!
//! ## Paths Are Identity
//!
//! A file's path is both its unique key and its location in the tree.
//! Directories are not first-class entities — they exist only as the
//! non-final segments of file paths. Because the path doubles as identity,
//! every path entering the store goes through one normalization pipeline:
//!
//! 1. Surrounding whitespace is trimmed.
//! 2. Leading/trailing slashes are stripped and empty segments collapsed
//!    (`"/src//App.tsx/"` → `"src/App.tsx"`).
//! 3. A path that normalizes to nothing is rejected as invalid.
//!
//! The file name is always derived from the last path segment, never stored
//! separately, so the two cannot drift apart.
//!
//! ## Version Policy
//!
//! Versions are append-only full-content snapshots, oldest first. A version
//! is recorded only when a write actually changes the content; writing the
//! identical content is a no-op that leaves `modified_at` untouched.
//! Creating a file seeds no version — the first snapshot appears on the
//! first real change. After any completed write, the newest version's
//! content equals the file's current content.
//!
//! ## Comments
//!
//! Comments anchor to a 1-based line number and are independent of
//! versioning. They are not shifted or invalidated when edits move lines;
//! that is an accepted limitation of line-anchored comments, not a bug.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, WorkspaceError};
use crate::language;

/// The acting identity attached to versions and comments.
///
/// There is exactly one local identity per process; multi-actor
/// attribution would require a backend that does not exist here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Default for Author {
    fn default() -> Self {
        Self {
            id: "local-user".to_string(),
            name: "Local User".to_string(),
        }
    }
}

/// An immutable full-content snapshot of a file at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub author_id: String,
    pub author_name: String,
    pub changes_summary: String,
    pub content: String,
}

/// A comment anchored to a 1-based line of a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author_id: String,
    pub author_name: String,
    pub line: usize,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved: bool,
}

impl Comment {
    pub fn new(line: usize, content: impl Into<String>, author: &Author) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            line,
            content: content.into(),
            created_at: Utc::now(),
            resolved: false,
        }
    }
}

/// One file in the workspace, keyed by its normalized path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub content: String,
    pub language: String,
    pub modified_at: DateTime<Utc>,
    // Older snapshots predate versions/comments; default both to empty.
    #[serde(default)]
    pub versions: Vec<Version>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl FileEntry {
    /// Build a fresh entry. The path must already be normalized
    /// (see [`normalize_path`]); the language is derived from it.
    pub fn new(path: String, content: String) -> Self {
        let language = language::language_for_path(&path).to_string();
        Self {
            path,
            content,
            language,
            modified_at: Utc::now(),
            versions: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// The file name: the last path segment.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Apply a content edit. Returns `true` if the content actually changed,
    /// in which case `modified_at` is bumped and a version snapshot of the
    /// new content is appended. Writing identical content changes nothing.
    pub fn apply_edit(&mut self, new_content: &str, author: &Author) -> bool {
        if new_content == self.content {
            return false;
        }

        let now = Utc::now();
        self.content = new_content.to_string();
        self.modified_at = now;
        self.versions.push(Version {
            id: Uuid::new_v4(),
            timestamp: now,
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            changes_summary: format!("Updated {}", self.name()),
            content: new_content.to_string(),
        });
        true
    }

    pub fn latest_version(&self) -> Option<&Version> {
        self.versions.last()
    }
}

/// Normalizes a raw path into its canonical form.
///
/// Trims whitespace, strips leading/trailing slashes, and collapses empty
/// segments. Rejects paths that normalize to nothing.
pub fn normalize_path(raw: &str) -> Result<String> {
    let normalized: Vec<&str> = raw
        .trim()
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();

    if normalized.is_empty() {
        return Err(WorkspaceError::InvalidPath(raw.to_string()));
    }

    Ok(normalized.join("/"))
}
