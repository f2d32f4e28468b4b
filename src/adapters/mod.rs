//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Completion providers (OpenAI, mock)
//! - `http` - REST endpoints (axum)
//! - `postgres` - Template store on PostgreSQL
//! - `storage` - In-memory template store

pub mod ai;
pub mod http;
pub mod postgres;
pub mod storage;

pub use ai::{MockAIProvider, OpenAIConfig, OpenAIProvider};
pub use postgres::PostgresTemplateRepository;
pub use storage::InMemoryTemplateRepository;
