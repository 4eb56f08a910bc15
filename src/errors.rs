use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Contact file is not a valid JSON list of contacts: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not replace contact file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Validation failed: {0}")]
    Validation(String),
}
