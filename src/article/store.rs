//! # Article Store
//!
//! Owns the authoritative article collection.
//!
//! Every operation runs as one critical section under a single mutex:
//! load (if needed), mutate, persist. Two concurrent creates therefore
//! always persist a collection that contains both.
//!
//! Writes are mutate-then-persist; a failed persist rolls the in-memory
//! change back so memory and disk agree.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::clock::{Clock, SystemClock};
use super::codec;
use super::errors::{ArticleError, ArticleResult};
use super::model::{Article, ArticleDraft};
use crate::observability::{Event, Logger};

/// When the store goes back to disk for the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefreshPolicy {
    /// Load on first use, then serve from memory
    #[default]
    Cached,
    /// Reload before every operation, picking up external edits
    ReadThrough,
}

#[derive(Debug, Default)]
struct Collection {
    articles: Vec<Article>,
    loaded: bool,
}

/// Concurrency-safe, file-backed article collection
#[derive(Debug)]
pub struct ArticleStore {
    path: PathBuf,
    policy: RefreshPolicy,
    clock: Arc<dyn Clock>,
    inner: Mutex<Collection>,
}

impl ArticleStore {
    /// Create a store backed by the file at `path`.
    ///
    /// Nothing is read until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: RefreshPolicy::default(),
            clock: Arc::new(SystemClock),
            inner: Mutex::new(Collection::default()),
        }
    }

    /// Use the given refresh policy
    pub fn with_policy(mut self, policy: RefreshPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use the given clock for `created` timestamps
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All articles, newest first.
    ///
    /// Articles sharing a timestamp keep their insertion order.
    pub fn list(&self) -> ArticleResult<Vec<Article>> {
        let mut collection = self.lock()?;
        self.ensure_loaded(&mut collection)?;

        let mut articles = collection.articles.clone();
        articles.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(articles)
    }

    /// The article with the given id
    pub fn get(&self, id: &str) -> ArticleResult<Article> {
        let id = parse_id(id)?;

        let mut collection = self.lock()?;
        self.ensure_loaded(&mut collection)?;

        collection
            .articles
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| ArticleError::NotFound(id.to_string()))
    }

    /// Append a new article with a fresh id and timestamp, then persist
    pub fn create(&self, draft: ArticleDraft) -> ArticleResult<Article> {
        let mut collection = self.lock()?;
        self.ensure_loaded(&mut collection)?;

        let id = loop {
            let candidate = Uuid::new_v4();
            if !collection.articles.iter().any(|a| a.id == candidate) {
                break candidate;
            }
        };
        let article = Article::from_draft(draft, id, self.clock.now());

        collection.articles.push(article.clone());
        if let Err(e) = codec::save(&self.path, &collection.articles) {
            collection.articles.pop();
            return Err(self.persist_failed(e.into()));
        }

        Logger::emit(Event::ArticleCreated, &[("id", id.to_string().as_str())]);
        Ok(article)
    }

    /// Remove the article with the given id, then persist.
    ///
    /// A miss is reported as `NotFound` and leaves the file untouched:
    /// only a removal that actually happened rewrites the data file.
    pub fn delete(&self, id: &str) -> ArticleResult<()> {
        let id = parse_id(id)?;

        let mut collection = self.lock()?;
        self.ensure_loaded(&mut collection)?;

        if !collection.articles.iter().any(|a| a.id == id) {
            return Err(ArticleError::NotFound(id.to_string()));
        }

        let snapshot = collection.articles.clone();
        collection.articles.retain(|a| a.id != id);
        if let Err(e) = codec::save(&self.path, &collection.articles) {
            collection.articles = snapshot;
            return Err(self.persist_failed(e.into()));
        }

        Logger::emit(Event::ArticleDeleted, &[("id", id.to_string().as_str())]);
        Ok(())
    }

    /// Number of articles
    pub fn len(&self) -> ArticleResult<usize> {
        let mut collection = self.lock()?;
        self.ensure_loaded(&mut collection)?;
        Ok(collection.articles.len())
    }

    pub fn is_empty(&self) -> ArticleResult<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> ArticleResult<MutexGuard<'_, Collection>> {
        self.inner
            .lock()
            .map_err(|_| ArticleError::StorageUnavailable("Lock poisoned".into()))
    }

    fn ensure_loaded(&self, collection: &mut Collection) -> ArticleResult<()> {
        if collection.loaded && self.policy == RefreshPolicy::Cached {
            return Ok(());
        }

        match codec::load_or_empty(&self.path) {
            Ok(articles) => {
                collection.articles = articles;
                collection.loaded = true;
                Logger::emit(
                    Event::StoreLoaded,
                    &[
                        ("count", collection.articles.len().to_string().as_str()),
                        ("path", self.path.display().to_string().as_str()),
                    ],
                );
                Ok(())
            }
            Err(e) => {
                let err = ArticleError::from(e);
                Logger::emit(
                    Event::LoadFailed,
                    &[
                        ("error", err.to_string().as_str()),
                        ("path", self.path.display().to_string().as_str()),
                    ],
                );
                Err(err)
            }
        }
    }

    fn persist_failed(&self, err: ArticleError) -> ArticleError {
        Logger::emit(
            Event::PersistFailed,
            &[
                ("error", err.to_string().as_str()),
                ("path", self.path.display().to_string().as_str()),
            ],
        );
        err
    }
}

fn parse_id(id: &str) -> ArticleResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ArticleError::InvalidIdentifier(id.to_string()))
}
