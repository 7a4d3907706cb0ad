use super::mem_backend::MemBackend;
use super::project_store::ProjectStore;

pub type InMemoryStore = ProjectStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ProjectStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_files(mut self, paths: &[&str]) -> Self {
            for path in paths {
                self.store
                    .create_file(path, &format!("// {}", path))
                    .unwrap();
            }
            self
        }

        pub fn with_edited_file(mut self, path: &str, revisions: &[&str]) -> Self {
            self.store.create_file(path, "").unwrap();
            for revision in revisions {
                self.store.update_file(path, revision).unwrap();
            }
            self
        }

        pub fn with_active(mut self, path: &str) -> Self {
            self.store.set_active_file(path).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn test_fixture_builds_expected_state() {
        let fixture = StoreFixture::default()
            .with_files(&["src/a.ts", "src/b.ts"])
            .with_edited_file("notes.md", &["draft", "final"])
            .with_active("src/a.ts");

        let files = fixture.store.list_files().unwrap();
        assert_eq!(files.len(), 3);

        let notes = fixture.store.get_file("notes.md").unwrap();
        assert_eq!(notes.content, "final");
        assert_eq!(notes.versions.len(), 2);

        let session = fixture.store.session().unwrap();
        assert_eq!(session.active_file.as_deref(), Some("src/a.ts"));
        assert_eq!(session.open_tabs.len(), 3);
    }

    #[test]
    fn test_list_files_is_sorted_by_path() {
        let fixture = StoreFixture::default().with_files(&["z.ts", "a.ts", "m/x.ts"]);
        let paths: Vec<String> = fixture
            .store
            .list_files()
            .unwrap()
            .into_iter()
            .map(|e| e.path)
            .collect();
        assert_eq!(paths, vec!["a.ts", "m/x.ts", "z.ts"]);
    }
}
