//! # Storage Layer
//!
//! This module defines the storage abstraction for the workspace. The
//! [`ProjectStore`] owns every invariant-keeping operation; the
//! [`StorageBackend`] trait underneath it decides where state actually
//! lives.
//!
//! ## Split of Responsibilities
//!
//! - **`ProjectStore`** is the "what": path validation, collision checks,
//!   version policy, tab bookkeeping, comment anchoring. Operations load
//!   the current state, apply one whole-state mutation, and save — readers
//!   always observe a fully consistent prior or next snapshot, never a
//!   partial one.
//! - **`StorageBackend`** is the "how": an in-memory map for tests and
//!   embedders ([`mem_backend::MemBackend`]), or JSON snapshots on disk for
//!   the CLI ([`json_backend::JsonBackend`]).
//!
//! ## Session State
//!
//! Besides the file map, the workspace carries a [`Session`]: the ordered,
//! duplicate-free list of open tabs and the single active file. The session
//! only ever references existing paths; deleting a file scrubs it from the
//! session in the same operation.
//!
//! ## Persistence Is Not Correctness
//!
//! The store is process-lifetime state. Backends that persist (JSON
//! snapshots) do so after the in-memory mutation is complete; a host that
//! never persists loses nothing but history across restarts.

use serde::{Deserialize, Serialize};

pub mod backend;
pub mod json_backend;
pub mod mem_backend;
pub mod memory;
pub mod project_store;

pub use backend::StorageBackend;
pub use json_backend::JsonBackend;
pub use mem_backend::MemBackend;
pub use memory::InMemoryStore;
pub use project_store::{ProjectStore, WriteOutcome};

/// Open-tab and selection state.
///
/// `open_tabs` is ordered (tab-bar order) and duplicate-free; `active_file`
/// is at most one path. Both only reference paths that exist in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub active_file: Option<String>,
    pub open_tabs: Vec<String>,
}

impl Session {
    /// Append a tab for `path` unless one is already open.
    pub fn open_tab(&mut self, path: &str) {
        if !self.is_open(path) {
            self.open_tabs.push(path.to_string());
        }
    }

    pub fn is_open(&self, path: &str) -> bool {
        self.open_tabs.iter().any(|tab| tab == path)
    }

    /// Drop `path` from the tabs and, if it was active, promote a
    /// neighbor: the tab after it in open order, else the one before,
    /// else none.
    pub fn remove(&mut self, path: &str) {
        let Some(pos) = self.open_tabs.iter().position(|tab| tab == path) else {
            if self.active_file.as_deref() == Some(path) {
                self.active_file = None;
            }
            return;
        };

        self.open_tabs.remove(pos);

        if self.active_file.as_deref() == Some(path) {
            self.active_file = self
                .open_tabs
                .get(pos)
                .or_else(|| self.open_tabs.last())
                .cloned();
        }
    }
}
