//! # Command Layer
//!
//! The core business logic lives here. Each operation is its own submodule
//! of pure functions over the store and domain types.
//!
//! ## What Commands Do
//!
//! - Implement the actual logic for each operation
//! - Operate on `FileEntry`, `Session`, and the other domain types
//! - Return a structured [`CmdResult`] with affected entries and messages
//! - Stay completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr, or formatting concerns
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//! - **Prompts/confirmations**: destructive-action confirmation is a UI
//!   responsibility; by the time a command runs, the decision is made
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. The UI layer (CLI here,
//! anything else elsewhere) decides how to render it. Missing-target
//! no-ops surface as warning messages rather than errors, matching the
//! store's propagation policy.
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests use
//! `InMemoryStore`, cover the logic branches and edge cases, and verify
//! `CmdResult` contents.

use serde::Serialize;
use std::path::PathBuf;

use crate::diff::DiffLine;
use crate::model::{Comment, FileEntry, Version};
use crate::tree::TreeNode;

pub mod comment;
pub mod create;
pub mod delete;
pub mod export;
pub mod history;
pub mod list;
pub mod rename;
pub mod tabs;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_files: Vec<FileEntry>,
    pub listed_files: Vec<FileEntry>,
    pub tree: Vec<TreeNode>,
    pub versions: Vec<Version>,
    pub comments: Vec<Comment>,
    pub diff: Vec<DiffLine>,
    pub open_tabs: Vec<String>,
    pub active_file: Option<String>,
    pub export_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_files(mut self, files: Vec<FileEntry>) -> Self {
        self.affected_files = files;
        self
    }

    pub fn with_listed_files(mut self, files: Vec<FileEntry>) -> Self {
        self.listed_files = files;
        self
    }

    pub fn with_tree(mut self, tree: Vec<TreeNode>) -> Self {
        self.tree = tree;
        self
    }
}
