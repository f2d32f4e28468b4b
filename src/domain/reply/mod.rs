//! Reply module - drafting and revising customer-service replies.
//!
//! Pure pieces of the generation flow: request value objects, the prompt
//! policy, conversation assembly, the per-model parameter table and output
//! cleanup. Provider calls are orchestrated in the application layer.

pub mod conversation;
mod errors;
pub mod model_params;
pub mod post_processor;
pub mod prompts;
mod request;

pub use conversation::build_messages;
pub use errors::{ReplyError, MISSING_API_KEY_MESSAGE};
pub use model_params::{parameters_for, ModelParameters, MODEL_PARAMETERS};
pub use post_processor::clean;
pub use request::{
    non_empty, require_customer_email, GenerationRequest, ModelChoice, TokenBudget, TECHNICAL_DRAFT_MODEL, TECHNICAL_MODE,
    TECHNICAL_REFINE_MODEL, TECHNICAL_TOKEN_FLOOR,
};
