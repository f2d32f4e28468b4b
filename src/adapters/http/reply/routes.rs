//! Axum router configuration for reply generation.

use axum::{routing::post, Router};

use super::handlers::{generate_response, ReplyHandlers};

/// `POST /generate_response`
pub fn reply_routes(handlers: ReplyHandlers) -> Router {
    Router::new()
        .route("/generate_response", post(generate_response))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::storage::InMemoryTemplateRepository;
    use crate::application::handlers::reply::{GenerateReplyHandler, ReplySettings};
    use crate::domain::reply::MISSING_API_KEY_MESSAGE;
    use crate::ports::{AIError, AIProvider};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router(provider: Option<MockAIProvider>) -> Router {
        let provider = provider.map(|p| Arc::new(p) as Arc<dyn AIProvider>);
        let handler = GenerateReplyHandler::new(
            provider,
            Arc::new(InMemoryTemplateRepository::new()),
            ReplySettings::default(),
        );
        reply_routes(ReplyHandlers::new(Arc::new(handler)))
    }

    async fn post_json(app: Router, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/generate_response")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn returns_cleaned_response() {
        let mock = MockAIProvider::new()
            .with_response("Here's a draft response:\n\nThanks for writing in!");
        let (status, body) = post_json(
            router(Some(mock.clone())),
            json!({"customer_email": "Where is my order?"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"response": "Thanks for writing in!"}));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn missing_email_returns_400() {
        let (status, body) = post_json(router(Some(MockAIProvider::new())), json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Customer email is required");
    }

    #[tokio::test]
    async fn missing_credential_returns_500() {
        let (status, body) = post_json(router(None), json!({"customer_email": "Hi"})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], MISSING_API_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn provider_failure_returns_500() {
        let mock = MockAIProvider::new().with_error(AIError::provider(429, "Rate limit reached"));
        let (status, body) =
            post_json(router(Some(mock)), json!({"customer_email": "Hi"})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("Rate limit reached"));
    }

    #[tokio::test]
    async fn technical_mode_makes_two_calls() {
        let mock = MockAIProvider::new()
            .with_response("raw technical draft")
            .with_response("Polished reply");
        let (status, body) = post_json(
            router(Some(mock.clone())),
            json!({"customer_email": "Explain the API error", "model": "technical"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], "Polished reply");
        assert_eq!(mock.call_count(), 2);
    }
}
