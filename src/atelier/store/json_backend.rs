use super::backend::StorageBackend;
use super::Session;
use crate::error::{Result, WorkspaceError};
use crate::model::FileEntry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const ENTRIES_FILE: &str = "workspace.json";
const SESSION_FILE: &str = "session.json";

/// JSON snapshot backend.
///
/// Persists the entry map to `workspace.json` (keyed by path, each entry
/// carrying content, language, ISO-8601 timestamps, versions, and comments)
/// and the tab/selection state to `session.json`, both inside one root
/// directory. Missing files read back as empty state, so a fresh directory
/// needs no initialization step.
pub struct JsonBackend {
    root: PathBuf,
}

impl JsonBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(WorkspaceError::Io)?;
        }
        Ok(())
    }

    fn read_json<T: serde::de::DeserializeOwned + Default>(&self, file: &str) -> Result<T> {
        let path = self.root.join(file);
        if !path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(path).map_err(WorkspaceError::Io)?;
        serde_json::from_str(&content).map_err(WorkspaceError::Serialization)
    }

    fn write_json<T: serde::Serialize>(&self, file: &str, value: &T) -> Result<()> {
        self.ensure_root()?;
        let content = serde_json::to_string_pretty(value).map_err(WorkspaceError::Serialization)?;
        fs::write(self.root.join(file), content).map_err(WorkspaceError::Io)
    }
}

impl StorageBackend for JsonBackend {
    fn load_entries(&self) -> Result<HashMap<String, FileEntry>> {
        self.read_json(ENTRIES_FILE)
    }

    fn save_entries(&self, entries: &HashMap<String, FileEntry>) -> Result<()> {
        self.write_json(ENTRIES_FILE, entries)
    }

    fn load_session(&self) -> Result<Session> {
        self.read_json(SESSION_FILE)
    }

    fn save_session(&self, session: &Session) -> Result<()> {
        self.write_json(SESSION_FILE, session)
    }
}
