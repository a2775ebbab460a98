use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Cannot save a document without a target path")]
    MissingDestination,

    #[error("{0} support is not available in this build")]
    DependencyUnavailable(&'static str),

    #[error("Paragraph index must be non-negative, got {0}")]
    InvalidParagraphIndex(i64),

    #[error("DOCX error: {0}")]
    Docx(String),

    #[error("No handler registered for object '{0}'")]
    UnknownObject(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
