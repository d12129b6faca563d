//! Shared helpers for unit tests.

use std::sync::Mutex;

use crate::error::Result;
use crate::store::models::{Board, Category, Document, Task};
use crate::store::DocumentStore;

/// In-memory store so manager tests run without touching the filesystem.
#[derive(Default)]
pub struct MemoryStore {
    doc: Mutex<Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: Document) -> Self {
        Self {
            doc: Mutex::new(doc),
        }
    }

    pub fn document(&self) -> Document {
        self.doc.lock().unwrap().clone()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Document {
        self.doc.lock().unwrap().clone()
    }

    fn save(&self, doc: &Document) -> Result<()> {
        *self.doc.lock().unwrap() = doc.clone();
        Ok(())
    }
}

/// A one-board document with known category and task ids.
pub fn seeded_document() -> Document {
    Document {
        boards: vec![Board {
            id: "board-1".to_string(),
            name: "Sprint 1".to_string(),
            categories: vec![
                Category {
                    id: "cat-todo".to_string(),
                    name: "Por hacer".to_string(),
                },
                Category {
                    id: "cat-doing".to_string(),
                    name: "En progreso".to_string(),
                },
            ],
            tasks: vec![
                Task {
                    id: "task-1".to_string(),
                    category_id: "cat-todo".to_string(),
                    title: "Fix bug".to_string(),
                    description: "Crash on save".to_string(),
                    due_date: "2026-09-01".to_string(),
                    status: "todo".to_string(),
                    created_at: "2026-08-01".to_string(),
                },
                Task {
                    id: "task-2".to_string(),
                    category_id: "cat-doing".to_string(),
                    title: "Write docs".to_string(),
                    description: String::new(),
                    due_date: String::new(),
                    status: "doing".to_string(),
                    created_at: "2026-08-02".to_string(),
                },
                Task {
                    id: "task-3".to_string(),
                    category_id: "cat-todo".to_string(),
                    title: "Review PR".to_string(),
                    description: String::new(),
                    due_date: String::new(),
                    status: "todo".to_string(),
                    created_at: "2026-08-03".to_string(),
                },
            ],
        }],
    }
}
