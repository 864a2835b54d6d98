use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Error for Title validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("Invalid title: \"{0}\".")]
    Empty(String),
}

/// Top-level error for note operations
#[derive(Debug, Error)]
pub enum NoteError {
    // Value object validation errors (converted via #[from])
    #[error(transparent)]
    InvalidTitle(#[from] TitleError),

    // Business-rule errors
    #[error("Note with title \"{0}\" already exists for this user.")]
    ExistingTitle(String),

    #[error("Note not found: {0}.")]
    NotFound(String),

    #[error("User not found: {0}.")]
    OwnerNotFound(String),

    // A stored owner record failing re-validation means the store is
    // corrupt, not that the caller did anything wrong.
    #[error("Stored owner record is invalid: {0}")]
    CorruptOwner(UserError),

    // Infrastructure faults
    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for NoteError {
    fn from(err: anyhow::Error) -> Self {
        NoteError::Unknown(err.to_string())
    }
}
