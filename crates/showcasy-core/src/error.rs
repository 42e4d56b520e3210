use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate project slug: {0}")]
    DuplicateSlug(String),

    #[error("Invalid project slug: {0:?}")]
    InvalidSlug(String),

    #[error("Submission transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
