use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ProjectStore, StorageBackend};
use uuid::Uuid;

pub fn add<B: StorageBackend>(
    store: &mut ProjectStore<B>,
    path: &str,
    line: usize,
    content: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.add_comment(path, line, content)? {
        Some(comment) => {
            result.add_message(CmdMessage::success(format!(
                "Comment added on {}:{} ({})",
                path.trim(),
                line,
                comment.id
            )));
            result.comments.push(comment);
        }
        None => {
            result.add_message(CmdMessage::warning(format!("No file at {}", path.trim())));
        }
    }

    Ok(result)
}

pub fn resolve<B: StorageBackend>(
    store: &mut ProjectStore<B>,
    path: &str,
    comment_id: Uuid,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.resolve_comment(path, comment_id)? {
        result.add_message(CmdMessage::success(format!(
            "Comment {} toggled",
            comment_id
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "No comment {} on {}",
            comment_id,
            path.trim()
        )));
    }

    Ok(result)
}

pub fn list<B: StorageBackend>(store: &ProjectStore<B>, path: &str) -> Result<CmdResult> {
    let comments = store.comments(path)?;

    let mut result = CmdResult::default();
    if comments.is_empty() {
        result.add_message(CmdMessage::info("No comments."));
    }
    result.comments = comments;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn add_then_list() {
        let mut store = InMemoryStore::new();
        store.create_file("a.ts", "one\ntwo").unwrap();

        add(&mut store, "a.ts", 2, "why two?").unwrap();

        let result = list(&store, "a.ts").unwrap();
        assert_eq!(result.comments.len(), 1);
        assert_eq!(result.comments[0].line, 2);
        assert!(!result.comments[0].resolved);
    }

    #[test]
    fn add_to_missing_file_warns() {
        let mut store = InMemoryStore::new();
        let result = add(&mut store, "ghost.ts", 1, "hm").unwrap();
        assert!(result.comments.is_empty());
        assert!(result.messages[0].content.contains("No file at"));
    }

    #[test]
    fn resolve_toggles() {
        let mut store = InMemoryStore::new();
        store.create_file("a.ts", "x").unwrap();
        let comment = store.add_comment("a.ts", 1, "note").unwrap().unwrap();

        resolve(&mut store, "a.ts", comment.id).unwrap();
        assert!(store.comments("a.ts").unwrap()[0].resolved);

        resolve(&mut store, "a.ts", comment.id).unwrap();
        assert!(!store.comments("a.ts").unwrap()[0].resolved);
    }

    #[test]
    fn resolve_unknown_comment_warns() {
        let mut store = InMemoryStore::new();
        store.create_file("a.ts", "x").unwrap();

        let result = resolve(&mut store, "a.ts", Uuid::new_v4()).unwrap();
        assert!(result.messages[0].content.contains("No comment"));
    }

    #[test]
    fn empty_comment_list_says_so() {
        let mut store = InMemoryStore::new();
        store.create_file("a.ts", "x").unwrap();

        let result = list(&store, "a.ts").unwrap();
        assert!(result.messages[0].content.contains("No comments"));
    }
}
