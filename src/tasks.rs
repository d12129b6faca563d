//! Task operations on the first board.

use chrono::Local;
use uuid::Uuid;

use crate::error::{KanbanError, Result};
use crate::store::models::{Task, DEFAULT_TASK_STATUS};
use crate::store::DocumentStore;

pub struct TaskManager<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> TaskManager<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Append a task to the first board. `description` and `due_date` default
    /// to empty strings, `status` to "todo". `created_at` is stamped with
    /// today's date and never updated afterwards.
    ///
    /// The category id is not verified against the board's categories; a task
    /// pointing at a deleted category simply never shows up in a column.
    pub fn create_task(
        &self,
        category_id: &str,
        title: &str,
        description: Option<&str>,
        due_date: Option<&str>,
        status: Option<&str>,
    ) -> Result<Task> {
        if category_id.is_empty() || title.is_empty() {
            return Err(KanbanError::InvalidInput(
                "category id and title are required".to_string(),
            ));
        }

        let mut doc = self.store.load();
        let board = doc.first_board_mut().ok_or(KanbanError::NoBoard)?;

        let task = Task {
            id: Uuid::new_v4().to_string(),
            category_id: category_id.to_string(),
            title: title.to_string(),
            description: description.unwrap_or_default().to_string(),
            due_date: due_date.unwrap_or_default().to_string(),
            status: status
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_TASK_STATUS)
                .to_string(),
            created_at: Local::now().format("%Y-%m-%d").to_string(),
        };

        board.tasks.push(task.clone());
        self.store.save(&doc)?;

        tracing::info!(task_id = %task.id, "Task created");
        Ok(task)
    }

    /// Edit a task in place. The title is only overwritten when explicitly
    /// supplied (an absent field is not the same as an empty one);
    /// `description` and `due_date` are always overwritten, defaulting to
    /// empty strings. An unknown task id rewrites the document unchanged.
    pub fn edit_task(
        &self,
        task_id: &str,
        title: Option<&str>,
        description: Option<&str>,
        due_date: Option<&str>,
    ) -> Result<()> {
        if task_id.is_empty() {
            return Err(KanbanError::InvalidInput("task id is required".to_string()));
        }

        let mut doc = self.store.load();
        let board = doc.first_board_mut().ok_or(KanbanError::NoBoard)?;

        if let Some(task) = board.tasks.iter_mut().find(|t| t.id == task_id) {
            if let Some(title) = title {
                task.title = title.to_string();
            }
            task.description = description.unwrap_or_default().to_string();
            task.due_date = due_date.unwrap_or_default().to_string();
        }

        self.store.save(&doc)
    }

    /// Remove a task from the first board.
    pub fn delete_task(&self, task_id: &str) -> Result<()> {
        if task_id.is_empty() {
            return Err(KanbanError::InvalidInput("task id is required".to_string()));
        }

        let mut doc = self.store.load();
        let board = doc.first_board_mut().ok_or(KanbanError::NoBoard)?;

        board.tasks.retain(|t| t.id != task_id);
        self.store.save(&doc)
    }

    /// Overwrite a task's status. The status field is independent of the
    /// task's column; `category_id` is untouched.
    pub fn change_status(&self, task_id: &str, status: &str) -> Result<()> {
        if task_id.is_empty() || status.is_empty() {
            return Err(KanbanError::InvalidInput(
                "task id and status are required".to_string(),
            ));
        }

        let mut doc = self.store.load();
        let board = doc.first_board_mut().ok_or(KanbanError::NoBoard)?;

        if let Some(task) = board.tasks.iter_mut().find(|t| t.id == task_id) {
            task.status = status.to_string();
        }

        self.store.save(&doc)
    }

    /// Move a task to a category and position (drag-and-drop). The task is
    /// removed from the sequence and reinserted at the requested index,
    /// clamped to the list length. A non-numeric or negative position appends
    /// at the end.
    pub fn reorder_task(&self, task_id: &str, category_id: &str, position: &str) -> Result<()> {
        let mut doc = self.store.load();
        let board = doc.first_board_mut().ok_or(KanbanError::NoBoard)?;

        let index = board
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| KanbanError::TaskNotFound(task_id.to_string()))?;

        let mut task = board.tasks.remove(index);
        task.category_id = category_id.to_string();

        let insert_at = match position.parse::<usize>() {
            Ok(pos) => pos.min(board.tasks.len()),
            Err(_) => board.tasks.len(),
        };
        board.tasks.insert(insert_at, task);

        self.store.save(&doc)
    }
}
