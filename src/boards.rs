//! Board and category operations.
//!
//! Every mutation follows the same discipline: load the whole document,
//! mutate it in memory, save the whole document. Mutations always target the
//! first board; only the dashboard view honors an explicit board id.

use crate::error::{KanbanError, Result};
use crate::store::models::{Board, Category};
use crate::store::DocumentStore;

pub struct BoardManager<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> BoardManager<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Append a new board with the three preset categories and no tasks.
    pub fn create_board(&self, name: &str) -> Result<Board> {
        if name.is_empty() {
            return Err(KanbanError::InvalidInput("board name is empty".to_string()));
        }

        let mut doc = self.store.load();
        let board = Board::with_default_categories(name);
        doc.boards.push(board.clone());
        self.store.save(&doc)?;

        tracing::info!(board_id = %board.id, "Board created");
        Ok(board)
    }

    /// Append a category to the first board.
    pub fn create_category(&self, name: &str) -> Result<Category> {
        if name.is_empty() {
            return Err(KanbanError::InvalidInput(
                "category name is empty".to_string(),
            ));
        }

        let mut doc = self.store.load();
        let board = doc.first_board_mut().ok_or(KanbanError::NoBoard)?;

        let category = Category::new(name);
        board.categories.push(category.clone());
        self.store.save(&doc)?;

        Ok(category)
    }

    /// Rename a category on the first board. An unknown id is not an error:
    /// the document is rewritten unchanged.
    pub fn rename_category(&self, category_id: &str, name: &str) -> Result<()> {
        if category_id.is_empty() || name.is_empty() {
            return Err(KanbanError::InvalidInput(
                "category id and name are required".to_string(),
            ));
        }

        let mut doc = self.store.load();
        let board = doc.first_board_mut().ok_or(KanbanError::NoBoard)?;

        if let Some(category) = board.categories.iter_mut().find(|c| c.id == category_id) {
            category.name = name.to_string();
        }

        self.store.save(&doc)
    }

    /// Remove a category from the first board, cascading to every task that
    /// references it.
    pub fn delete_category(&self, category_id: &str) -> Result<()> {
        if category_id.is_empty() {
            return Err(KanbanError::InvalidInput(
                "category id is required".to_string(),
            ));
        }

        let mut doc = self.store.load();
        let board = doc.first_board_mut().ok_or(KanbanError::NoBoard)?;

        board.categories.retain(|c| c.id != category_id);
        board.tasks.retain(|t| t.category_id != category_id);

        self.store.save(&doc)
    }
}
