use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to parse AI response as JSON: {0}")]
    MalformedJson(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Interaction store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Interaction store contains invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
