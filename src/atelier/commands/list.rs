use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ProjectStore, StorageBackend};
use crate::tree::{build_tree, SortKey};

pub fn run<B: StorageBackend>(
    store: &ProjectStore<B>,
    filter: Option<&str>,
    sort: SortKey,
) -> Result<CmdResult> {
    let entries = store.list_files()?;
    let filter = filter.unwrap_or("");
    let tree = build_tree(&entries, filter, sort);

    let mut result = CmdResult::default();
    if tree.is_empty() {
        let message = if filter.is_empty() {
            "No files found.".to_string()
        } else {
            format!("No files match \"{}\"", filter)
        };
        result.add_message(CmdMessage::info(message));
    }
    result.active_file = store.session()?.active_file;
    Ok(result.with_listed_files(entries).with_tree(tree))
}
