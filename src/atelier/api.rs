//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for every workspace operation, regardless of the UI driving
//! it.
//!
//! It dispatches to the right command function, normalizes textual inputs
//! (sort keys, comment ids) into typed values, and returns structured
//! `Result<CmdResult>` values. It contains no business logic, performs no
//! terminal I/O, and never formats output — that split is what lets the
//! same core serve a CLI today and any other host tomorrow.

use std::path::PathBuf;
use std::str::FromStr;
use uuid::Uuid;

use crate::commands;
use crate::error::{Result, WorkspaceError};
use crate::store::{ProjectStore, StorageBackend};
use crate::tree::SortKey;

/// The main facade for workspace operations.
///
/// Generic over the storage backend: production hosts inject a
/// `JsonBackend`, tests an in-memory one.
pub struct WorkspaceApi<B: StorageBackend> {
    store: ProjectStore<B>,
}

impl<B: StorageBackend> WorkspaceApi<B> {
    pub fn new(store: ProjectStore<B>) -> Self {
        Self { store }
    }

    pub fn create_file(&mut self, path: &str, content: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, path, content)
    }

    pub fn write_file(&mut self, path: &str, content: &str) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, path, content)
    }

    pub fn delete_file(&mut self, path: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, path)
    }

    pub fn rename_file(&mut self, old_path: &str, new_path: &str) -> Result<commands::CmdResult> {
        commands::rename::run(&mut self.store, old_path, new_path)
    }

    pub fn open_file(&mut self, path: &str) -> Result<commands::CmdResult> {
        commands::tabs::open(&mut self.store, path)
    }

    pub fn close_tab(&mut self, path: &str) -> Result<commands::CmdResult> {
        commands::tabs::close(&mut self.store, path)
    }

    pub fn tabs(&self) -> Result<commands::CmdResult> {
        commands::tabs::status(&self.store)
    }

    /// List the derived tree. `sort` accepts `name`, `modified`, or `type`.
    pub fn list_tree(&self, filter: Option<&str>, sort: &str) -> Result<commands::CmdResult> {
        let sort = SortKey::from_str(sort).map_err(WorkspaceError::Api)?;
        commands::list::run(&self.store, filter, sort)
    }

    pub fn view_file(&self, path: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, path)
    }

    pub fn history(&self, path: &str) -> Result<commands::CmdResult> {
        commands::history::run(&self.store, path)
    }

    pub fn diff(
        &self,
        path: &str,
        older: Option<usize>,
        newer: Option<usize>,
    ) -> Result<commands::CmdResult> {
        commands::history::diff(&self.store, path, older, newer)
    }

    pub fn add_comment(&mut self, path: &str, line: usize, content: &str) -> Result<commands::CmdResult> {
        commands::comment::add(&mut self.store, path, line, content)
    }

    /// Toggle a comment's resolved state. `comment_id` is the UUID printed
    /// when the comment was added.
    pub fn resolve_comment(&mut self, path: &str, comment_id: &str) -> Result<commands::CmdResult> {
        let id = Uuid::parse_str(comment_id)
            .map_err(|_| WorkspaceError::Api(format!("Invalid comment id: {}", comment_id)))?;
        commands::comment::resolve(&mut self.store, path, id)
    }

    pub fn comments(&self, path: &str) -> Result<commands::CmdResult> {
        commands::comment::list(&self.store, path)
    }

    pub fn export(&self, output: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, output)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn api() -> WorkspaceApi<crate::store::MemBackend> {
        WorkspaceApi::new(InMemoryStore::new())
    }

    #[test]
    fn test_create_dispatches() {
        let mut api = api();
        let result = api.create_file("a.ts", "x").unwrap();
        assert_eq!(result.affected_files.len(), 1);
    }

    #[test]
    fn test_list_rejects_unknown_sort_key() {
        let api = api();
        match api.list_tree(None, "size") {
            Err(WorkspaceError::Api(msg)) => assert!(msg.contains("size")),
            other => panic!("Expected Api error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_list_accepts_all_sort_keys() {
        let api = api();
        for key in ["name", "modified", "type"] {
            assert!(api.list_tree(None, key).is_ok());
        }
    }

    #[test]
    fn test_resolve_rejects_malformed_id() {
        let mut api = api();
        api.create_file("a.ts", "x").unwrap();

        assert!(matches!(
            api.resolve_comment("a.ts", "not-a-uuid"),
            Err(WorkspaceError::Api(_))
        ));
    }

    #[test]
    fn test_resolve_roundtrip_through_printed_id() {
        let mut api = api();
        api.create_file("a.ts", "x").unwrap();
        let added = api.add_comment("a.ts", 1, "note").unwrap();
        let id = added.comments[0].id.to_string();

        let result = api.resolve_comment("a.ts", &id).unwrap();
        assert!(result.messages[0].content.contains("toggled"));
    }
}
