//! API Handler for sfhb
//!
//! Wraps the article store and the writer gate. A forbidden call never
//! reaches the store, so the collection is left untouched.

use crate::article::{
    Article, ArticleDraft, ArticleError, ArticleResult, ArticleStore, WriterAuth,
};
use crate::observability::{Event, Logger};

/// Entry point for article operations
#[derive(Debug)]
pub struct ApiHandler {
    store: ArticleStore,
    auth: WriterAuth,
}

impl ApiHandler {
    /// Create a new API handler
    pub fn new(store: ArticleStore, auth: WriterAuth) -> Self {
        Self { store, auth }
    }

    /// The underlying store
    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    /// The writer gate
    pub fn auth(&self) -> &WriterAuth {
        &self.auth
    }

    /// All articles, newest first
    pub fn list(&self) -> ArticleResult<Vec<Article>> {
        self.store.list()
    }

    /// One article by id
    pub fn get(&self, id: &str) -> ArticleResult<Article> {
        self.store.get(id)
    }

    /// Create an article on behalf of the token holder
    pub fn create(&self, draft: ArticleDraft, token: Option<&str>) -> ArticleResult<Article> {
        self.authorize("create", token)?;
        self.store.create(draft)
    }

    /// Create an article from a raw JSON request body.
    ///
    /// The token is checked before the body is decoded, so a rejected
    /// writer always sees `Forbidden`, whatever it sent.
    pub fn create_from_json(&self, body: &[u8], token: Option<&str>) -> ArticleResult<Article> {
        self.authorize("create", token)?;
        let draft: ArticleDraft = serde_json::from_slice(body)
            .map_err(|e| ArticleError::InvalidPayload(e.to_string()))?;
        self.store.create(draft)
    }

    /// Delete an article on behalf of the token holder
    pub fn delete(&self, id: &str, token: Option<&str>) -> ArticleResult<()> {
        self.authorize("delete", token)?;
        self.store.delete(id)
    }

    fn authorize(&self, operation: &str, token: Option<&str>) -> ArticleResult<()> {
        self.auth.authorize(token).inspect_err(|_| {
            Logger::emit(Event::WriteForbidden, &[("operation", operation)]);
        })
    }
}
