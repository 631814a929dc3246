use thiserror::Error;

/// Main error type for FinGraph
#[derive(Error, Debug)]
pub enum FingraphError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors, including a persisted document
    /// that is not valid JSON or lacks the `extractions` key
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Language model errors (network failure, bad status, unusable output)
    #[error("LLM error: {0}")]
    Llm(String),

    /// Visualization rendering errors
    #[error("Render error: {0}")]
    Render(String),
}

/// Convenient Result type using FingraphError
pub type Result<T> = std::result::Result<T, FingraphError>;
