//! Article HTTP Routes
//!
//! Translates requests into `ApiHandler` calls. Store calls do blocking
//! file I/O, so each one runs on the blocking pool.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};

use crate::api::{ApiHandler, ErrorResponse};
use crate::article::{Article, ArticleError, ArticleResult};

/// Header carrying the writer token
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

type ApiFailure = (StatusCode, Json<ErrorResponse>);

/// Create article routes
pub fn article_routes(state: Arc<ApiHandler>) -> Router {
    Router::new()
        .route("/articles", get(list_articles_handler))
        .route("/article", post(create_article_handler))
        .route(
            "/article/:id",
            get(get_article_handler).delete(delete_article_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn error_response(err: ArticleError) -> ApiFailure {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(&err)))
}

async fn run_blocking<T, F>(state: Arc<ApiHandler>, op: F) -> Result<T, ApiFailure>
where
    T: Send + 'static,
    F: FnOnce(&ApiHandler) -> ArticleResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || op(&state))
        .await
        .map_err(|e| {
            error_response(ArticleError::StorageUnavailable(format!(
                "store worker failed: {}",
                e
            )))
        })?
        .map_err(error_response)
}

// ==================
// Handlers
// ==================

async fn list_articles_handler(
    State(state): State<Arc<ApiHandler>>,
) -> Result<Json<Vec<Article>>, ApiFailure> {
    let articles = run_blocking(state, |api| api.list()).await?;
    Ok(Json(articles))
}

async fn get_article_handler(
    State(state): State<Arc<ApiHandler>>,
    Path(id): Path<String>,
) -> Result<Json<Article>, ApiFailure> {
    let article = run_blocking(state, move |api| api.get(&id)).await?;
    Ok(Json(article))
}

async fn create_article_handler(
    State(state): State<Arc<ApiHandler>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Article>), ApiFailure> {
    // Raw body: the token gate runs before any decoding
    let token = session_token(&headers);
    let article =
        run_blocking(state, move |api| api.create_from_json(&body, token.as_deref())).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

async fn delete_article_handler(
    State(state): State<Arc<ApiHandler>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiFailure> {
    let token = session_token(&headers);
    run_blocking(state, move |api| api.delete(&id, token.as_deref())).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);

        headers.insert(SESSION_TOKEN_HEADER, "abc".parse().unwrap());
        assert_eq!(session_token(&headers).as_deref(), Some("abc"));
    }

    #[test]
    fn test_error_status_mapping() {
        let (status, body) = error_response(ArticleError::Forbidden);
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.0.code, 403);

        let (status, _) = error_response(ArticleError::InvalidIdentifier("x".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = error_response(ArticleError::StorageUnavailable("disk".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.error, "Internal server error");
    }
}
