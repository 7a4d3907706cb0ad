use super::backend::StorageBackend;
use super::Session;
use crate::error::{Result, WorkspaceError};
use crate::model::FileEntry;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend.
///
/// Uses `RefCell` for interior mutability since the store is
/// single-threaded. This avoids the overhead of `RwLock` while still
/// letting the `StorageBackend` trait use `&self` for all methods.
pub struct MemBackend {
    entries: RefCell<HashMap<String, FileEntry>>,
    session: RefCell<Session>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            session: RefCell::new(Session::default()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load_entries(&self) -> Result<HashMap<String, FileEntry>> {
        Ok(self.entries.borrow().clone())
    }

    fn save_entries(&self, entries: &HashMap<String, FileEntry>) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(WorkspaceError::Store("Simulated write error".to_string()));
        }
        *self.entries.borrow_mut() = entries.clone();
        Ok(())
    }

    fn load_session(&self) -> Result<Session> {
        Ok(self.session.borrow().clone())
    }

    fn save_session(&self, session: &Session) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(WorkspaceError::Store("Simulated write error".to_string()));
        }
        *self.session.borrow_mut() = session.clone();
        Ok(())
    }
}
