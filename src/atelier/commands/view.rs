use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{ProjectStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &ProjectStore<B>, path: &str) -> Result<CmdResult> {
    let entry = store.get_file(path)?;
    Ok(CmdResult::default().with_listed_files(vec![entry]))
}
