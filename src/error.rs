use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Io,
}

impl ErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation error",
            ErrorKind::NotFound => "not found",
            ErrorKind::Io => "I/O error",
        }
    }
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("description is mandatory")]
    EmptyDescription,

    #[error("invalid status {0:?}, use \"pending\", \"in progress\" or \"completed\"")]
    InvalidStatus(String),

    #[error("invalid priority {0:?}, use \"low\", \"medium\" or \"high\"")]
    InvalidPriority(String),

    #[error("invalid due date {0:?}, expected YYYY-MM-DD")]
    InvalidDueDate(String),

    #[error("no task with id {0}")]
    NotFound(String),

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed task file {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, TaskError>;

impl TaskError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::EmptyDescription
            | TaskError::InvalidStatus(_)
            | TaskError::InvalidPriority(_)
            | TaskError::InvalidDueDate(_) => ErrorKind::Validation,
            TaskError::NotFound(_) => ErrorKind::NotFound,
            TaskError::Io { .. } | TaskError::Malformed { .. } => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(TaskError::EmptyDescription.kind(), ErrorKind::Validation);
        assert_eq!(
            TaskError::InvalidStatus("done".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(TaskError::NotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(
            TaskError::malformed("tasks.json", "eof").kind(),
            ErrorKind::Io
        );
        let io_err = TaskError::io("tasks.json", io::Error::other("denied"));
        assert_eq!(io_err.kind(), ErrorKind::Io);
        assert!(io_err.to_string().contains("tasks.json"));
    }
}
