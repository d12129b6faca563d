use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanbanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("No board exists")]
    NoBoard,

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl KanbanError {
    pub fn to_error_code(&self) -> &'static str {
        match self {
            KanbanError::NoBoard => "NO_BOARD",
            KanbanError::TaskNotFound(_) => "TASK_NOT_FOUND",
            KanbanError::InvalidInput(_) => "INVALID_INPUT",
            _ => "INTERNAL_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, KanbanError>;
