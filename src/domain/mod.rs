//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `template` - Reply templates and shared tags
//! - `reply` - Request model, prompts, conversation assembly and output cleanup

pub mod foundation;
pub mod reply;
pub mod template;
