//! HTTP adapters - REST API implementations.
//!
//! Each module exposes its own router; [`app_router`] merges them and adds
//! the cross-cutting layers (tracing, timeout, CORS).

pub mod error;
pub mod reply;
pub mod templates;

use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use error::error_response;

pub use error::ErrorResponse;
pub use reply::{reply_routes, ReplyHandlers};
pub use templates::{template_routes, TemplateHandlers};

/// Builds the full application router.
pub fn app_router(
    templates: TemplateHandlers,
    reply: ReplyHandlers,
    server: &ServerConfig,
) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .merge(template_routes(templates))
        .merge(reply_routes(reply))
        .layer(middleware::from_fn_with_state(
            server.request_timeout(),
            enforce_timeout,
        ))
        .layer(TraceLayer::new_for_http());

    match cors_layer(&server.cors_origins_list()) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// Bounds the whole request. An elapsed request gets a 500 `{"error": ...}`.
async fn enforce_timeout(State(timeout): State<Duration>, request: Request, next: Next) -> Response {
    match tokio::time::timeout(timeout, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::error!(timeout_secs = timeout.as_secs_f64(), "Request timed out");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Request timed out after {}s", timeout.as_secs_f64()),
            )
        }
    }
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `None` when no origins are configured. `*` allows any origin.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.iter().any(|o| o == "*") {
        return Some(layer.allow_origin(Any));
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    Some(layer.allow_origin(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryTemplateRepository;
    use crate::application::handlers::reply::{GenerateReplyHandler, ReplySettings};
    use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(server: &ServerConfig) -> Router {
        let repo = Arc::new(InMemoryTemplateRepository::new());
        let reply = GenerateReplyHandler::new(None, repo.clone(), ReplySettings::default());
        app_router(
            TemplateHandlers::new(repo),
            ReplyHandlers::new(Arc::new(reply)),
            server,
        )
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn merged_router_serves_templates_and_replies() {
        let app = app(&ServerConfig::default());

        let tags = app
            .clone()
            .oneshot(Request::get("/api/tags").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(tags.status(), StatusCode::OK);

        let reply = app
            .oneshot(
                Request::post("/generate_response")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"customer_email":"Hi"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(reply.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn cors_headers_added_for_configured_origin() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:3000".to_string()),
            ..ServerConfig::default()
        };
        let response = app(&server)
            .oneshot(
                Request::get("/health")
                    .header("origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:3000")
        );
    }

    struct SlowProvider {
        delay: Duration,
    }

    #[async_trait::async_trait]
    impl AIProvider for SlowProvider {
        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> Result<CompletionResponse, AIError> {
            tokio::time::sleep(self.delay).await;
            Ok(CompletionResponse::new(request.model, "Draft"))
        }
    }

    #[tokio::test]
    async fn elapsed_request_returns_json_error() {
        let server = ServerConfig {
            request_timeout_secs: 1,
            ..ServerConfig::default()
        };
        let repo = Arc::new(InMemoryTemplateRepository::new());
        let provider: Arc<dyn AIProvider> = Arc::new(SlowProvider {
            delay: Duration::from_millis(700),
        });
        let reply = GenerateReplyHandler::new(Some(provider), repo.clone(), ReplySettings::default());
        let app = app_router(
            TemplateHandlers::new(repo),
            ReplyHandlers::new(Arc::new(reply)),
            &server,
        );

        // Two sequential 700ms calls outlast the 1s budget.
        let response = app
            .oneshot(
                Request::post("/generate_response")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"customer_email":"Hi","model":"technical"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().contains("timed out"));
    }

    #[test]
    fn no_origins_means_no_cors_layer() {
        assert!(cors_layer(&[]).is_none());
        assert!(cors_layer(&["*".to_string()]).is_some());
    }
}
