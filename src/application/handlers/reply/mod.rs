//! Reply generation handlers.

mod generate_reply;

pub use generate_reply::{GenerateReplyCommand, GenerateReplyHandler, ReplySettings};
