//! sfhb - a minimal article-publishing API
//!
//! An axum HTTP surface over a file-backed, concurrency-safe article store.

pub mod api;
pub mod article;
pub mod cli;
pub mod http_server;
pub mod observability;
