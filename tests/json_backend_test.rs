use atelier::store::backend::StorageBackend;
use atelier::store::{JsonBackend, ProjectStore, Session};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, JsonBackend) {
    let dir = TempDir::new().unwrap();
    let backend = JsonBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fresh_directory_reads_back_empty() {
    let (_dir, backend) = setup();

    assert!(backend.load_entries().unwrap().is_empty());
    assert_eq!(backend.load_session().unwrap(), Session::default());
}

#[test]
fn test_snapshot_files_land_on_disk() {
    let (dir, backend) = setup();
    let mut store = ProjectStore::with_backend(backend);

    store.create_file("src/App.tsx", "export {}").unwrap();

    assert!(dir.path().join("workspace.json").exists());
    assert!(dir.path().join("session.json").exists());

    // The snapshot is keyed by path with ISO-8601 timestamps
    let raw = fs::read_to_string(dir.path().join("workspace.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &json["src/App.tsx"];
    assert_eq!(entry["language"], "typescript");
    assert!(entry["modified_at"].as_str().unwrap().contains('T'));
}

#[test]
fn test_state_survives_reopening() {
    let dir = TempDir::new().unwrap();

    {
        let backend = JsonBackend::new(dir.path().to_path_buf());
        let mut store = ProjectStore::with_backend(backend);
        store.create_file("a.ts", "one").unwrap();
        store.create_file("b.ts", "two").unwrap();
        store.update_file("a.ts", "one more").unwrap();
        store.set_active_file("a.ts").unwrap();
        store.add_comment("b.ts", 1, "check this").unwrap();
    }

    // A new store over the same directory sees everything
    let backend = JsonBackend::new(dir.path().to_path_buf());
    let store = ProjectStore::with_backend(backend);

    let entry = store.get_file("a.ts").unwrap();
    assert_eq!(entry.content, "one more");
    assert_eq!(entry.versions.len(), 1);

    let session = store.session().unwrap();
    assert_eq!(session.open_tabs, vec!["a.ts", "b.ts"]);
    assert_eq!(session.active_file.as_deref(), Some("a.ts"));

    assert_eq!(store.comments("b.ts").unwrap().len(), 1);
}

#[test]
fn test_delete_is_persisted() {
    let dir = TempDir::new().unwrap();

    {
        let backend = JsonBackend::new(dir.path().to_path_buf());
        let mut store = ProjectStore::with_backend(backend);
        store.create_file("x.ts", "").unwrap();
        store.delete_file("x.ts").unwrap();
    }

    let backend = JsonBackend::new(dir.path().to_path_buf());
    let store = ProjectStore::with_backend(backend);
    assert!(!store.contains("x.ts").unwrap());
    assert!(store.session().unwrap().open_tabs.is_empty());
}

#[test]
fn test_corrupt_snapshot_is_an_error_not_a_panic() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("workspace.json"), "{ not json").unwrap();

    assert!(backend.load_entries().is_err());
}
