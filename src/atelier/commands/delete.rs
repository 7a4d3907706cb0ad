use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ProjectStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut ProjectStore<B>, path: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.delete_file(path)? {
        result.add_message(CmdMessage::success(format!("File deleted: {}", path.trim())));
        if let Some(active) = store.session()?.active_file {
            result.add_message(CmdMessage::info(format!("Now editing {}", active)));
            result.active_file = Some(active);
        }
    } else {
        result.add_message(CmdMessage::warning(format!("No file at {}", path.trim())));
    }

    Ok(result)
}
