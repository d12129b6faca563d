//! Flat-file JSON persistence for the whole application state.
//!
//! The store contract is deliberately narrow: `load` the entire document,
//! `save` the entire document. There is no partial update, no locking, and
//! no schema versioning. Handlers follow load → mutate → save per request.

pub mod models;

use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use models::Document;

/// Load/save contract for the persisted document. Injected into the managers
/// so tests (or a future real database) can substitute the backend without
/// touching handler logic.
pub trait DocumentStore: Send + Sync {
    /// Read the persisted document. Any read or parse failure yields the
    /// default empty document; failures are swallowed, not surfaced.
    fn load(&self) -> Document;

    /// Serialize the full document and overwrite the persisted file.
    fn save(&self, doc: &Document) -> Result<()>;
}

/// File-backed store writing pretty-printed JSON.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl DocumentStore for JsonStore {
    fn load(&self) -> Document {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(doc) => doc,
                Err(e) => {
                    tracing::debug!("Failed to parse {}: {}", self.path.display(), e);
                    Document::default()
                },
            },
            Err(e) => {
                tracing::debug!("Failed to read {}: {}", self.path.display(), e);
                Document::default()
            },
        }
    }

    fn save(&self, doc: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::models::Board;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("data.json"));
        let doc = store.load();
        assert!(doc.boards.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{not json at all").unwrap();

        let store = JsonStore::new(path);
        let doc = store.load();
        assert!(doc.boards.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("data.json"));

        let mut doc = Document::default();
        doc.boards.push(Board::with_default_categories("Sprint 1"));
        store.save(&doc).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.boards.len(), 1);
        assert_eq!(loaded.boards[0].name, "Sprint 1");
        assert_eq!(loaded.boards[0].categories.len(), 3);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("data.json"));

        let mut doc = Document::default();
        doc.boards.push(Board::with_default_categories("First"));
        doc.boards.push(Board::with_default_categories("Second"));
        store.save(&doc).unwrap();

        doc.boards.truncate(1);
        store.save(&doc).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.boards.len(), 1);
        assert_eq!(loaded.boards[0].name, "First");
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("nested").join("data.json"));
        store.save(&Document::default()).unwrap();
        assert!(store.path().exists());
    }
}
