use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ProjectStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut ProjectStore<B>,
    path: &str,
    content: &str,
) -> Result<CmdResult> {
    let entry = store.create_file(path, content)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "File created: {} ({})",
        entry.path, entry.language
    )));
    result.affected_files.push(entry);
    Ok(result)
}
