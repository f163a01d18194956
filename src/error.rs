use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotaError {
    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Invalid note name: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NotaError>;
