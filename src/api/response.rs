//! Response bodies shared by the HTTP routes

use serde::{Deserialize, Serialize};

use crate::article::ArticleError;

/// Error body: `{"error": ..., "code": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

impl From<&ArticleError> for ErrorResponse {
    fn from(err: &ArticleError) -> Self {
        let code = err.status_code();
        // Storage detail (paths, parser output) stays in the logs
        let error = if err.is_internal() {
            "Internal server error".to_string()
        } else {
            err.to_string()
        };
        Self { error, code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_errors_are_masked() {
        let err = ArticleError::CorruptData("/srv/data.json: expected value".into());
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, 500);
        assert!(!body.error.contains("data.json"));
    }

    #[test]
    fn test_client_errors_keep_message() {
        let err = ArticleError::NotFound("abc".into());
        let body = ErrorResponse::from(&err);
        assert_eq!(body, ErrorResponse::new("Article not found: abc", 404));
    }
}
