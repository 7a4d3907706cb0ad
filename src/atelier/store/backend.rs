use super::Session;
use crate::error::Result;
use crate::model::FileEntry;
use std::collections::HashMap;

/// Abstract interface for raw state I/O.
///
/// This trait handles the "how" of storage (memory vs JSON snapshots on
/// disk), while [`super::ProjectStore`] handles the "what" (validation,
/// version policy, tab bookkeeping). Methods take `&self`; backends manage
/// interior mutability themselves.
pub trait StorageBackend {
    /// Load the full path → entry map.
    fn load_entries(&self) -> Result<HashMap<String, FileEntry>>;

    /// Save the full path → entry map.
    fn save_entries(&self, entries: &HashMap<String, FileEntry>) -> Result<()>;

    /// Load the tab/selection state. A backend with no saved session
    /// returns the default (no tabs, nothing active).
    fn load_session(&self) -> Result<Session>;

    /// Save the tab/selection state.
    fn save_session(&self, session: &Session) -> Result<()>;
}
