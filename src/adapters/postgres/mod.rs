//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresTemplateRepository` - Templates, tags and their ordered association

mod template_repository;

pub use template_repository::PostgresTemplateRepository;
