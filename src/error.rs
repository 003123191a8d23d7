//! Error type shared by the task store, the storage codec and the shell.

use std::io;

use thiserror::Error;

/// Everything that can go wrong outside of rendering.
#[derive(Debug, Error)]
pub enum TasklistError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed task file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid task file: {0}")]
    InvalidTaskFile(String),

    #[error("unknown task priority '{0}'")]
    UnknownPriority(String),

    #[error("invalid date-time '{0}'")]
    InvalidDateTime(String),

    #[error("the task is blank")]
    BlankTask,

    #[error("task {number} not found (have {count})")]
    TaskNotFound { number: usize, count: usize },

    /// The input stream ended while the shell was waiting for a line.
    #[error("input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, TasklistError>;
