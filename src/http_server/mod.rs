//! # sfhb HTTP Server Module
//!
//! Axum server exposing the article API.
//!
//! # Endpoints
//!
//! - `/` - Service banner
//! - `/health` - Health check
//! - `/articles` - List articles, newest first
//! - `/article` - Create an article (token-gated)
//! - `/article/:id` - Get or delete an article (delete is token-gated)

pub mod article_routes;
pub mod config;
pub mod observability_routes;
pub mod server;

pub use article_routes::SESSION_TOKEN_HEADER;
pub use config::HttpServerConfig;
pub use server::HttpServer;
