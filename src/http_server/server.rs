//! # HTTP Server
//!
//! Article routes plus health, behind one CORS layer.

use std::io;
use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::Router;
use tokio::net::{lookup_host, TcpListener};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::article_routes::{article_routes, SESSION_TOKEN_HEADER};
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use crate::api::ApiHandler;
use crate::observability::{Event, Logger};

/// HTTP server for the article API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(api: Arc<ApiHandler>) -> Self {
        Self::with_config(HttpServerConfig::default(), api)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpServerConfig, api: Arc<ApiHandler>) -> Self {
        let router = Self::build_router(&config, api);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, api: Arc<ApiHandler>) -> Router {
        Router::new()
            .merge(health_routes())
            .merge(article_routes(api))
            .layer(cors_layer(&config.cors_origins))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Resolve the configured host and bind the first address it yields.
    ///
    /// Hostnames such as `localhost` go through the system resolver; a host
    /// that resolves to nothing is `InvalidInput`.
    pub async fn bind(&self) -> Result<TcpListener, io::Error> {
        let target = self.config.socket_addr();
        let invalid = |detail: String| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", target, detail),
            )
        };

        let mut addrs = lookup_host(target.as_str())
            .await
            .map_err(|e| invalid(e.to_string()))?;
        let addr = addrs
            .next()
            .ok_or_else(|| invalid("host resolved to no addresses".to_string()))?;

        TcpListener::bind(addr).await
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), io::Error> {
        let listener = self.bind().await?;
        Logger::emit(
            Event::ServerListening,
            &[("addr", listener.local_addr()?.to_string().as_str())],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Logger::emit(Event::ShutdownComplete, &[]);
        Ok(())
    }
}

/// CORS for browser clients.
///
/// With no configured origins the request origin is mirrored back.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|s| s.parse().ok()).collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::CONTENT_LENGTH,
            header::ACCEPT_ENCODING,
            HeaderName::from_static(SESSION_TOKEN_HEADER),
            HeaderName::from_static("x-csrf-token"),
            header::AUTHORIZATION,
        ])
}

async fn shutdown_signal() {
    // If the handler cannot be installed the server simply runs until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::{ArticleStore, WriterAuth};
    use tempfile::TempDir;

    fn api(temp: &TempDir) -> Arc<ApiHandler> {
        let store = ArticleStore::new(temp.path().join("data.json"));
        Arc::new(ApiHandler::new(store, WriterAuth::disabled()))
    }

    #[test]
    fn test_server_creation() {
        let temp = TempDir::new().unwrap();
        let server = HttpServer::new(api(&temp));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let temp = TempDir::new().unwrap();
        let server = HttpServer::with_config(HttpServerConfig::with_port(9090), api(&temp));
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[tokio::test]
    async fn test_invalid_address_is_an_error() {
        let temp = TempDir::new().unwrap();
        let config = HttpServerConfig {
            host: "not an address".to_string(),
            ..Default::default()
        };
        let server = HttpServer::with_config(config, api(&temp));

        let err = server.start().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn test_hostname_is_resolved() {
        let temp = TempDir::new().unwrap();
        let config = HttpServerConfig {
            host: "localhost".to_string(),
            port: 0,
            ..Default::default()
        };
        let server = HttpServer::with_config(config, api(&temp));

        let listener = server.bind().await.unwrap();
        let local = listener.local_addr().unwrap();
        assert!(local.ip().is_loopback());
        assert_ne!(local.port(), 0);
    }
}
