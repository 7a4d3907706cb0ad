use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("No file at path: {0}")]
    FileNotFound(String),

    #[error("A file already exists at path: {0}")]
    PathCollision(String),

    #[error("Invalid path: {0:?}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, WorkspaceError>;
