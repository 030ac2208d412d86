use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task with ID {0} not found")]
    NotFound(u32),

    #[error("Task file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
