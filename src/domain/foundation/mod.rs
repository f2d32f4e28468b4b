//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types that form the vocabulary
//! of the reply assistant domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{TagId, TemplateId};
pub use timestamp::Timestamp;
