//! HTTP handler for reply generation.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{GenerateResponseRequest, GenerateResponseResponse};
use crate::adapters::http::error::error_response;
use crate::application::handlers::reply::GenerateReplyHandler;
use crate::domain::reply::ReplyError;

/// Application state for the reply endpoint
#[derive(Clone)]
pub struct ReplyHandlers {
    pub generate_reply: Arc<GenerateReplyHandler>,
}

impl ReplyHandlers {
    pub fn new(generate_reply: Arc<GenerateReplyHandler>) -> Self {
        Self { generate_reply }
    }
}

/// POST /generate_response - Draft or revise a reply
pub async fn generate_response(
    State(handlers): State<ReplyHandlers>,
    Json(request): Json<GenerateResponseRequest>,
) -> Response {
    match handlers.generate_reply.handle(request.into()).await {
        Ok(response) => {
            (StatusCode::OK, Json(GenerateResponseResponse { response })).into_response()
        }
        Err(e) => handle_reply_error(e),
    }
}

fn handle_reply_error(error: ReplyError) -> Response {
    let status = match &error {
        ReplyError::Validation(_) => StatusCode::BAD_REQUEST,
        ReplyError::Configuration(_) | ReplyError::Provider(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reply::MISSING_API_KEY_MESSAGE;
    use crate::ports::AIError;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_maps_to_400() {
        let response = handle_reply_error(ReplyError::validation("Customer email is required"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await["error"], "Customer email is required");
    }

    #[tokio::test]
    async fn missing_credential_maps_to_500_with_distinct_message() {
        let response = handle_reply_error(ReplyError::missing_api_key());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await["error"], MISSING_API_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn provider_failure_maps_to_500() {
        let response = handle_reply_error(ReplyError::Provider(AIError::network("refused")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Error generating response:"));
    }
}
