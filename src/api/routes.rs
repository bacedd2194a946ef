//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{get_handler, insert_handler, status_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /cache/:key` - Retrieve a value as plain text
/// - `POST /cache/:key` - Store the request body as the value
/// - `GET /status` - Heartbeat
///
/// # Middleware
/// - Body limit: one byte over `max_value_size`, so oversized values reach
///   the handler and get 400; anything larger is cut off with 413
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_value_size.saturating_add(1));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cache/:key", get(get_handler).post(insert_handler))
        .route("/status", get(status_handler))
        .layer(body_limit)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ExpiringCache;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let cache = Arc::new(ExpiringCache::new(Duration::ZERO));
        create_router(AppState::from_config(&Config::default(), cache))
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/cache/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_values_above_two_megabytes_accepted_when_configured() {
        let cache = Arc::new(ExpiringCache::new(Duration::ZERO));
        let config = Config {
            max_value_size: 3 * 1024 * 1024,
            ..Config::default()
        };
        let app = create_router(AppState::from_config(&config, cache.clone()));
        let value = "x".repeat(config.max_value_size);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/cache/big")
                    .body(Body::from(value.clone()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(cache.get("big").await.unwrap().len(), value.len());
    }

    #[tokio::test]
    async fn test_one_byte_over_limit_is_bad_request() {
        let cache = Arc::new(ExpiringCache::new(Duration::ZERO));
        let config = Config {
            max_value_size: 3 * 1024 * 1024,
            ..Config::default()
        };
        let app = create_router(AppState::from_config(&config, cache));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/cache/big")
                    .body(Body::from("x".repeat(config.max_value_size + 1)))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_utf8_body_rejected() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/cache/bytes")
                    .body(Body::from(vec![0xff, 0xfe, 0xfd]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_method_not_allowed() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/cache/key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
