use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ProjectStore, StorageBackend};

/// Make `path` the active file (opening a tab for it if needed).
pub fn open<B: StorageBackend>(store: &mut ProjectStore<B>, path: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.set_active_file(path)? {
        let session = store.session()?;
        result.add_message(CmdMessage::success(format!("Now editing {}", path.trim())));
        result.open_tabs = session.open_tabs;
        result.active_file = session.active_file;
    } else {
        result.add_message(CmdMessage::warning(format!("No file at {}", path.trim())));
    }

    Ok(result)
}

/// Close a tab; the file itself persists.
pub fn close<B: StorageBackend>(store: &mut ProjectStore<B>, path: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.close_tab(path)? {
        let session = store.session()?;
        result.add_message(CmdMessage::success(format!("Closed {}", path.trim())));
        if let Some(active) = &session.active_file {
            result.add_message(CmdMessage::info(format!("Now editing {}", active)));
        }
        result.open_tabs = session.open_tabs;
        result.active_file = session.active_file;
    } else {
        result.add_message(CmdMessage::warning(format!(
            "No open tab for {}",
            path.trim()
        )));
    }

    Ok(result)
}

/// Report the current tab bar and selection.
pub fn status<B: StorageBackend>(store: &ProjectStore<B>) -> Result<CmdResult> {
    let session = store.session()?;

    let mut result = CmdResult::default();
    if session.open_tabs.is_empty() {
        result.add_message(CmdMessage::info("No open tabs."));
    }
    result.open_tabs = session.open_tabs;
    result.active_file = session.active_file;
    Ok(result)
}
