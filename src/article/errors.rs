//! # Article Errors

use thiserror::Error;

use super::codec::CodecError;

/// Result type for article operations
pub type ArticleResult<T> = Result<T, ArticleError>;

/// Errors surfaced by the article store and its boundary
#[derive(Debug, Clone, Error)]
pub enum ArticleError {
    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("Invalid article id: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid article body: {0}")]
    InvalidPayload(String),

    #[error("Corrupt data file: {0}")]
    CorruptData(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Forbidden")]
    Forbidden,
}

impl ArticleError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ArticleError::NotFound(_) => 404,
            ArticleError::InvalidIdentifier(_) => 400,
            ArticleError::InvalidPayload(_) => 400,
            ArticleError::CorruptData(_) => 500,
            ArticleError::StorageUnavailable(_) => 500,
            ArticleError::Forbidden => 403,
        }
    }

    /// Whether the error must be reported without its detail
    pub fn is_internal(&self) -> bool {
        self.status_code() >= 500
    }
}

impl From<CodecError> for ArticleError {
    fn from(e: CodecError) -> Self {
        match e {
            // A missing file is folded into an empty collection before it
            // reaches this point; seeing it here means the file vanished
            // between stat and read.
            CodecError::NotFound(path) => {
                ArticleError::StorageUnavailable(format!("data file missing: {}", path))
            }
            CodecError::Corrupt(msg) => ArticleError::CorruptData(msg),
            CodecError::Io(msg) => ArticleError::StorageUnavailable(msg),
        }
    }
}
