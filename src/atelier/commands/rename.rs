use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ProjectStore, StorageBackend};

/// Rename or move a file. Implemented by the store as create-at-new-path
/// plus delete-old-path in one step, which deliberately starts a fresh
/// version history at the destination.
pub fn run<B: StorageBackend>(
    store: &mut ProjectStore<B>,
    old_path: &str,
    new_path: &str,
) -> Result<CmdResult> {
    let entry = store.rename_file(old_path, new_path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Renamed {} to {}",
        old_path.trim(),
        entry.path
    )));
    result.affected_files.push(entry);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkspaceError;
    use crate::store::InMemoryStore;

    #[test]
    fn rename_moves_content() {
        let mut store = InMemoryStore::new();
        store.create_file("old.ts", "X").unwrap();

        let result = run(&mut store, "old.ts", "new.ts").unwrap();

        assert_eq!(result.affected_files[0].path, "new.ts");
        assert!(!store.contains("old.ts").unwrap());
        assert_eq!(store.get_file("new.ts").unwrap().content, "X");
    }

    #[test]
    fn rename_starts_fresh_history() {
        let mut store = InMemoryStore::new();
        store.create_file("old.ts", "X").unwrap();
        store.update_file("old.ts", "Y").unwrap();
        store.update_file("old.ts", "Z").unwrap();

        run(&mut store, "old.ts", "new.ts").unwrap();

        assert!(store.versions("new.ts").unwrap().is_empty());
        assert_eq!(store.get_file("new.ts").unwrap().content, "Z");
    }

    #[test]
    fn move_into_directory_is_just_a_rename() {
        let mut store = InMemoryStore::new();
        store.create_file("util.ts", "x").unwrap();

        run(&mut store, "util.ts", "src/lib/util.ts").unwrap();
        assert!(store.contains("src/lib/util.ts").unwrap());
    }

    #[test]
    fn rename_missing_source_errors() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, "ghost.ts", "new.ts"),
            Err(WorkspaceError::FileNotFound(_))
        ));
    }
}
