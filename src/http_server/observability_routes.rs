//! Observability HTTP Routes
//!
//! Liveness and the service banner.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

/// Banner served at `/`
pub const BANNER: &str = "sfhb api v.0.1";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Banner and health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/", get(banner_handler))
        .route("/health", get(health_handler))
}

async fn banner_handler() -> &'static str {
    BANNER
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
    }
}
