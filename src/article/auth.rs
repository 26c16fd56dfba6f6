//! # Writer Authorization
//!
//! Create and delete require the caller's token to match the configured
//! secret. An empty or unset secret turns the gate off.

use subtle::ConstantTimeEq;

use super::errors::{ArticleError, ArticleResult};

/// Token gate for mutating operations
#[derive(Debug, Clone, Default)]
pub struct WriterAuth {
    secret: Option<String>,
}

impl WriterAuth {
    /// Create a gate; an empty secret disables it
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    /// A gate that admits everyone
    pub fn disabled() -> Self {
        Self { secret: None }
    }

    /// Whether a secret is configured
    pub fn is_enabled(&self) -> bool {
        self.secret.is_some()
    }

    /// Check a caller-supplied token
    pub fn authorize(&self, token: Option<&str>) -> ArticleResult<()> {
        let Some(secret) = &self.secret else {
            return Ok(());
        };

        let token = token.unwrap_or("");
        if constant_time_eq(secret.as_bytes(), token.as_bytes()) {
            Ok(())
        } else {
            Err(ArticleError::Forbidden)
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_admits_everyone() {
        let auth = WriterAuth::disabled();
        assert!(!auth.is_enabled());
        assert!(auth.authorize(None).is_ok());
        assert!(auth.authorize(Some("anything")).is_ok());
    }

    #[test]
    fn test_empty_secret_disables() {
        let auth = WriterAuth::new(Some(String::new()));
        assert!(!auth.is_enabled());
        assert!(auth.authorize(None).is_ok());
    }

    #[test]
    fn test_token_must_match() {
        let auth = WriterAuth::new(Some("s3cret".to_string()));
        assert!(auth.is_enabled());
        assert!(auth.authorize(Some("s3cret")).is_ok());
        assert!(matches!(auth.authorize(Some("s3cre")), Err(ArticleError::Forbidden)));
        assert!(matches!(auth.authorize(Some("wrong!")), Err(ArticleError::Forbidden)));
        assert!(matches!(auth.authorize(None), Err(ArticleError::Forbidden)));
    }
}
