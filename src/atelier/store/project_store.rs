use super::backend::StorageBackend;
use super::Session;
use crate::error::{Result, WorkspaceError};
use crate::model::{normalize_path, Author, Comment, FileEntry, Version};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Result of a content write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Content changed; a version snapshot was recorded.
    Written,
    /// New content equals current content; nothing changed.
    Unchanged,
    /// No file at that path; nothing changed.
    Missing,
}

/// The workspace aggregate: a path-keyed file map plus tab/selection state.
///
/// Every operation leaves the aggregate consistent in one synchronous step.
/// Operations driven from hot UI paths (typing, tab clicks, panel races)
/// report a missing target through their return value instead of an error —
/// a file deleted in one panel while another panel's debounced write fires
/// is an expected race, not a failure. `Err` is reserved for invalid input
/// on explicit actions and for backend I/O.
pub struct ProjectStore<B: StorageBackend> {
    backend: B,
    author: Author,
}

impl<B: StorageBackend> ProjectStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            author: Author::default(),
        }
    }

    /// Replace the acting identity recorded on versions and comments.
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    // --- Queries ---

    pub fn entry_map(&self) -> Result<HashMap<String, FileEntry>> {
        self.backend.load_entries()
    }

    /// All entries, sorted by path for stable iteration.
    pub fn list_files(&self) -> Result<Vec<FileEntry>> {
        let mut entries: Vec<FileEntry> = self.backend.load_entries()?.into_values().collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    pub fn get_file(&self, path: &str) -> Result<FileEntry> {
        let path = normalize_path(path)?;
        self.backend
            .load_entries()?
            .remove(&path)
            .ok_or(WorkspaceError::FileNotFound(path))
    }

    pub fn contains(&self, path: &str) -> Result<bool> {
        match normalize_path(path) {
            Ok(path) => Ok(self.backend.load_entries()?.contains_key(&path)),
            Err(_) => Ok(false),
        }
    }

    pub fn session(&self) -> Result<Session> {
        self.backend.load_session()
    }

    pub fn versions(&self, path: &str) -> Result<Vec<Version>> {
        Ok(self.get_file(path)?.versions)
    }

    pub fn comments(&self, path: &str) -> Result<Vec<Comment>> {
        Ok(self.get_file(path)?.comments)
    }

    // --- Commands ---

    /// Create a file, select it, and open its tab.
    ///
    /// The new entry starts with an empty version history; the first
    /// snapshot is recorded on the first real content change. An existing
    /// path is a caller error (`PathCollision`) — callers that want
    /// create-or-update semantics check first.
    pub fn create_file(&mut self, path: &str, content: &str) -> Result<FileEntry> {
        let path = normalize_path(path)?;

        let mut entries = self.backend.load_entries()?;
        if entries.contains_key(&path) {
            return Err(WorkspaceError::PathCollision(path));
        }

        let entry = FileEntry::new(path.clone(), content.to_string());
        entries.insert(path.clone(), entry.clone());
        self.backend.save_entries(&entries)?;

        let mut session = self.backend.load_session()?;
        session.open_tab(&path);
        session.active_file = Some(path.clone());
        self.backend.save_session(&session)?;

        debug!(path = %path, language = %entry.language, "file created");
        Ok(entry)
    }

    /// Write new content to a file.
    ///
    /// Never fails for a missing path — this runs on every debounced
    /// keystroke and must not take the input loop down. Identical content
    /// is a full no-op: no version, no `modified_at` bump.
    pub fn update_file(&mut self, path: &str, new_content: &str) -> Result<WriteOutcome> {
        let Ok(path) = normalize_path(path) else {
            return Ok(WriteOutcome::Missing);
        };

        let mut entries = self.backend.load_entries()?;
        let Some(entry) = entries.get_mut(&path) else {
            return Ok(WriteOutcome::Missing);
        };

        if !entry.apply_edit(new_content, &self.author) {
            return Ok(WriteOutcome::Unchanged);
        }

        self.backend.save_entries(&entries)?;
        debug!(path = %path, "file updated");
        Ok(WriteOutcome::Written)
    }

    /// Remove a file and scrub it from the session in one step.
    ///
    /// Returns `false` for a missing path.
    pub fn delete_file(&mut self, path: &str) -> Result<bool> {
        let Ok(path) = normalize_path(path) else {
            return Ok(false);
        };

        let mut entries = self.backend.load_entries()?;
        if entries.remove(&path).is_none() {
            return Ok(false);
        }
        self.backend.save_entries(&entries)?;

        let mut session = self.backend.load_session()?;
        session.remove(&path);
        self.backend.save_session(&session)?;

        debug!(path = %path, "file deleted");
        Ok(true)
    }

    /// Rename (or move) a file: create at the new path, delete the old one,
    /// inside a single call so no observer sees the half-moved state.
    ///
    /// The new entry is seeded from the current content only — version
    /// history does not migrate across a rename.
    pub fn rename_file(&mut self, old_path: &str, new_path: &str) -> Result<FileEntry> {
        let old_path = normalize_path(old_path)?;
        let new_path = normalize_path(new_path)?;

        let mut entries = self.backend.load_entries()?;
        let Some(old_entry) = entries.get(&old_path) else {
            return Err(WorkspaceError::FileNotFound(old_path));
        };
        if entries.contains_key(&new_path) {
            return Err(WorkspaceError::PathCollision(new_path));
        }

        let entry = FileEntry::new(new_path.clone(), old_entry.content.clone());
        entries.insert(new_path.clone(), entry.clone());
        entries.remove(&old_path);
        self.backend.save_entries(&entries)?;

        // Same session effects as create followed by delete: the new tab
        // is appended and activated, then the old tab drops out.
        let mut session = self.backend.load_session()?;
        session.open_tab(&new_path);
        session.active_file = Some(new_path.clone());
        session.remove(&old_path);
        self.backend.save_session(&session)?;

        debug!(from = %old_path, to = %new_path, "file renamed");
        Ok(entry)
    }

    /// Make `path` the active file, opening a tab for it if none is open.
    ///
    /// Returns `false` (and changes nothing) for a missing path, so the
    /// active file always references an existing entry and is always a
    /// member of the open tabs.
    pub fn set_active_file(&mut self, path: &str) -> Result<bool> {
        let Ok(path) = normalize_path(path) else {
            return Ok(false);
        };

        if !self.backend.load_entries()?.contains_key(&path) {
            return Ok(false);
        }

        let mut session = self.backend.load_session()?;
        session.open_tab(&path);
        session.active_file = Some(path);
        self.backend.save_session(&session)?;
        Ok(true)
    }

    /// Close a tab. The file entry persists; only the session changes.
    ///
    /// If the closed tab was active, the neighbor after it in open order is
    /// promoted, else the one before, else nothing. Returns `false` if no
    /// such tab is open.
    pub fn close_tab(&mut self, path: &str) -> Result<bool> {
        let Ok(path) = normalize_path(path) else {
            return Ok(false);
        };

        let mut session = self.backend.load_session()?;
        if !session.is_open(&path) {
            return Ok(false);
        }
        session.remove(&path);
        self.backend.save_session(&session)?;
        Ok(true)
    }

    /// Anchor a comment to a 1-based line of a file.
    ///
    /// Returns `None` for a missing path. Comments are not versioned and
    /// are not shifted by later edits.
    pub fn add_comment(&mut self, path: &str, line: usize, content: &str) -> Result<Option<Comment>> {
        let Ok(path) = normalize_path(path) else {
            return Ok(None);
        };

        let mut entries = self.backend.load_entries()?;
        let Some(entry) = entries.get_mut(&path) else {
            return Ok(None);
        };

        let comment = Comment::new(line, content, &self.author);
        entry.comments.push(comment.clone());
        self.backend.save_entries(&entries)?;

        debug!(path = %path, line, "comment added");
        Ok(Some(comment))
    }

    /// Toggle a comment's resolved flag. Returns `false` if the path or
    /// the comment id is unknown.
    pub fn resolve_comment(&mut self, path: &str, comment_id: Uuid) -> Result<bool> {
        let Ok(path) = normalize_path(path) else {
            return Ok(false);
        };

        let mut entries = self.backend.load_entries()?;
        let Some(entry) = entries.get_mut(&path) else {
            return Ok(false);
        };
        let Some(comment) = entry.comments.iter_mut().find(|c| c.id == comment_id) else {
            return Ok(false);
        };

        comment.resolved = !comment.resolved;
        self.backend.save_entries(&entries)?;
        Ok(true)
    }
}
