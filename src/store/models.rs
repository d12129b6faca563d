use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category names every new board starts with.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Por hacer", "En progreso", "Hecho"];

/// Default status for newly created tasks.
pub const DEFAULT_TASK_STATUS: &str = "todo";

/// The whole persisted application state. The document is the unit of
/// persistence: every mutation rewrites it wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub boards: Vec<Board>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub category_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: String,
    pub status: String,
    pub created_at: String,
}

impl Document {
    /// Select a board for the dashboard view. Falls back to the first board
    /// when the id is absent or unknown.
    pub fn select_board(&self, board_id: Option<&str>) -> Option<&Board> {
        match board_id {
            Some(id) => self
                .boards
                .iter()
                .find(|b| b.id == id)
                .or_else(|| self.boards.first()),
            None => self.boards.first(),
        }
    }

    /// The implicit target of every mutating operation.
    pub fn first_board_mut(&mut self) -> Option<&mut Board> {
        self.boards.first_mut()
    }
}

impl Board {
    /// Create a board with the three preset categories and no tasks.
    pub fn with_default_categories(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|name| Category::new(name))
                .collect(),
            tasks: Vec::new(),
        }
    }
}

impl Category {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        Board {
            id: "b1".to_string(),
            name: "Sprint".to_string(),
            categories: vec![Category {
                id: "c1".to_string(),
                name: "Por hacer".to_string(),
            }],
            tasks: vec![Task {
                id: "t1".to_string(),
                category_id: "c1".to_string(),
                title: "Fix bug".to_string(),
                description: String::new(),
                due_date: String::new(),
                status: "todo".to_string(),
                created_at: "2026-01-15".to_string(),
            }],
        }
    }

    #[test]
    fn test_task_serializes_with_camel_case_keys() {
        let task = &sample_board().tasks[0];
        let json = serde_json::to_string(task).unwrap();
        assert!(json.contains("\"categoryId\""));
        assert!(json.contains("\"dueDate\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("category_id"));
    }

    #[test]
    fn test_document_round_trips_wire_layout() {
        let json = r#"{
            "boards": [{
                "id": "b1",
                "name": "Sprint 1",
                "categories": [{"id": "c1", "name": "Por hacer"}],
                "tasks": [{
                    "id": "t1",
                    "categoryId": "c1",
                    "title": "Fix bug",
                    "description": "",
                    "dueDate": "",
                    "status": "todo",
                    "createdAt": "2026-01-15"
                }]
            }]
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.boards.len(), 1);
        assert_eq!(doc.boards[0].tasks[0].category_id, "c1");

        let out = serde_json::to_string(&doc).unwrap();
        let reparsed: Document = serde_json::from_str(&out).unwrap();
        assert_eq!(reparsed.boards[0].tasks[0].created_at, "2026-01-15");
    }

    #[test]
    fn test_empty_document_parses_to_no_boards() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.boards.is_empty());
    }

    #[test]
    fn test_with_default_categories() {
        let board = Board::with_default_categories("Sprint 1");
        assert_eq!(board.name, "Sprint 1");
        assert_eq!(board.categories.len(), 3);
        let names: Vec<&str> = board.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, DEFAULT_CATEGORIES);
        assert!(board.tasks.is_empty());
    }

    #[test]
    fn test_new_ids_are_unique() {
        let board = Board::with_default_categories("Sprint 1");
        let mut ids: Vec<&str> = board.categories.iter().map(|c| c.id.as_str()).collect();
        ids.push(&board.id);
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_select_board_falls_back_to_first() {
        let doc = Document {
            boards: vec![sample_board()],
        };
        assert_eq!(doc.select_board(None).unwrap().id, "b1");
        assert_eq!(doc.select_board(Some("b1")).unwrap().id, "b1");
        assert_eq!(doc.select_board(Some("missing")).unwrap().id, "b1");
    }

    #[test]
    fn test_select_board_on_empty_document() {
        let doc = Document::default();
        assert!(doc.select_board(Some("b1")).is_none());
    }
}
