use crate::commands::{CmdMessage, CmdResult};
use crate::diff::diff_lines;
use crate::error::{Result, WorkspaceError};
use crate::store::{ProjectStore, StorageBackend};

/// List a file's version history, oldest first.
pub fn run<B: StorageBackend>(store: &ProjectStore<B>, path: &str) -> Result<CmdResult> {
    let versions = store.versions(path)?;

    let mut result = CmdResult::default();
    if versions.is_empty() {
        result.add_message(CmdMessage::info("No versions yet."));
    }
    result.versions = versions;
    Ok(result)
}

/// Diff two versions of a file, identified by 1-based history position.
///
/// `newer` defaults to the latest version; `older` defaults to the one
/// before it. Position 0 for `older` means the empty pre-creation baseline,
/// so the first version of a file diffs as all-added.
pub fn diff<B: StorageBackend>(
    store: &ProjectStore<B>,
    path: &str,
    older: Option<usize>,
    newer: Option<usize>,
) -> Result<CmdResult> {
    let versions = store.versions(path)?;
    if versions.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No versions yet."));
        return Ok(result);
    }

    let newer_pos = newer.unwrap_or(versions.len());
    if newer_pos == 0 || newer_pos > versions.len() {
        return Err(WorkspaceError::Api(format!(
            "No version {} (history has {})",
            newer_pos,
            versions.len()
        )));
    }

    let older_pos = older.unwrap_or(newer_pos - 1);
    if older_pos >= newer_pos {
        return Err(WorkspaceError::Api(format!(
            "Older version {} must come before newer version {}",
            older_pos, newer_pos
        )));
    }

    let old_content = if older_pos == 0 {
        ""
    } else {
        versions[older_pos - 1].content.as_str()
    };
    let new_content = &versions[newer_pos - 1].content;

    let mut result = CmdResult::default();
    result.diff = diff_lines(old_content, new_content);
    result.versions = versions;
    Ok(result)
}
