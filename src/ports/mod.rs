//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Chat-completion provider used to draft replies
//! - `TemplateRepository` - Persistence for reply templates and tags

mod ai_provider;
mod template_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Message, MessageRole,
    ReasoningEffort, TokenUsage,
};
pub use template_repository::TemplateRepository;
