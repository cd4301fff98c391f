//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// An employee with this identifier is already in the roster
    #[error("Employee with ID {0} already exists!")]
    DuplicateId(String),

    /// Record not found
    #[error("Employee with ID {0} not found!")]
    NotFound(String),

    /// Import payload parsed but was not a JSON array
    #[error("Invalid file format!")]
    InvalidImport,

    /// Import file could not be read or parsed
    #[error("Error reading file!")]
    ImportRead(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Excel export error
    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a duplicate identifier error
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    /// Create a not found error with message
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Wrap an error raised while reading an import file
    pub fn import_read(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::ImportRead(Box::new(err))
    }
}
