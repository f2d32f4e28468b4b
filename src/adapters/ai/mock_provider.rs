//! Mock AI Provider for testing.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to run without calling real AI APIs.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("Dear customer, ...")
//!     .with_error(AIError::provider(500, "boom"));
//!
//! let response = provider.complete(request).await?;
//! assert_eq!(response.content, "Dear customer, ...");
//! assert_eq!(provider.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, TokenUsage};

/// Mock AI provider for testing.
///
/// Clones share the response queue and call history, so a test can keep a
/// handle while the code under test owns another.
#[derive(Debug, Clone, Default)]
pub struct MockAIProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion.
    Success { content: String },
    /// Return an error.
    Error(AIError),
}

impl MockAIProvider {
    /// Creates a new mock provider with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse::Success {
            content: content.into(),
        });
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: AIError) -> Self {
        self.push(MockResponse::Error(error));
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, response: MockResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Gets the next response or a default.
    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: "Mock response".to_string(),
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let model = request.model.clone();
        self.calls.lock().unwrap().push(request);

        match self.next_response() {
            MockResponse::Success { content } => {
                Ok(CompletionResponse::new(model, content).with_usage(TokenUsage::new(10, 20)))
            }
            MockResponse::Error(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Message;

    fn test_request() -> CompletionRequest {
        CompletionRequest::new("gpt-4o-mini", 100).with_messages(vec![Message::user("Hello")])
    }

    #[tokio::test]
    async fn mock_provider_returns_responses_in_order() {
        let provider = MockAIProvider::new()
            .with_response("First")
            .with_response("Second");

        let first = provider.complete(test_request()).await.unwrap();
        let second = provider.complete(test_request()).await.unwrap();

        assert_eq!(first.content, "First");
        assert_eq!(second.content, "Second");
        assert_eq!(first.model, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn mock_provider_returns_default_after_exhausted() {
        let provider = MockAIProvider::new();
        let response = provider.complete(test_request()).await.unwrap();
        assert_eq!(response.content, "Mock response");
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_error() {
        let provider = MockAIProvider::new().with_error(AIError::provider(429, "slow down"));
        let result = provider.complete(test_request()).await;
        assert_eq!(result, Err(AIError::provider(429, "slow down")));
    }

    #[tokio::test]
    async fn mock_provider_tracks_calls_across_clones() {
        let provider = MockAIProvider::new();
        let handle = provider.clone();

        provider.complete(test_request()).await.unwrap();
        provider
            .complete(CompletionRequest::new("o4-mini", 50))
            .await
            .unwrap();

        assert_eq!(handle.call_count(), 2);
        let calls = handle.get_calls();
        assert_eq!(calls[0].model, "gpt-4o-mini");
        assert_eq!(calls[1].model, "o4-mini");
    }
}
