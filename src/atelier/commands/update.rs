use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ProjectStore, StorageBackend, WriteOutcome};

pub fn run<B: StorageBackend>(
    store: &mut ProjectStore<B>,
    path: &str,
    content: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.update_file(path, content)? {
        WriteOutcome::Written => {
            let entry = store.get_file(path)?;
            result.add_message(CmdMessage::success(format!("File updated: {}", entry.path)));
            result.affected_files.push(entry);
        }
        WriteOutcome::Unchanged => {
            result.add_message(CmdMessage::info(format!("No changes to {}", path.trim())));
        }
        WriteOutcome::Missing => {
            result.add_message(CmdMessage::warning(format!(
                "No file at {}; nothing written",
                path.trim()
            )));
        }
    }

    Ok(result)
}
