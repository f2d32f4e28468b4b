//! HTTP adapter for reply generation.

mod dto;
mod handlers;
mod routes;

pub use dto::{GenerateResponseRequest, GenerateResponseResponse};
pub use handlers::ReplyHandlers;
pub use routes::reply_routes;
