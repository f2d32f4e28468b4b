//! Storage Adapters
//!
//! In-process implementations of repository ports.
//!
//! ## Available Adapters
//!
//! - **InMemoryTemplateRepository** - Templates and tags in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryTemplateRepository;
//!
//! let repo = Arc::new(InMemoryTemplateRepository::new());
//! ```

mod in_memory_template_repository;

pub use in_memory_template_repository::InMemoryTemplateRepository;
