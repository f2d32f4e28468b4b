//! Conversation builder.
//!
//! Turns a [`GenerationRequest`] into the ordered message list sent to the
//! provider. The policy prompt always comes first.
//!
//! - Initial draft: one user message with the email, optional notes block,
//!   optional template block and a closing drafting instruction.
//! - Modification: email, previous draft (as the assistant), notes restated,
//!   then the change request. Templates are not re-injected here.

use super::prompts::SYSTEM_PROMPT;
use super::request::GenerationRequest;
use crate::ports::Message;

pub const TEMPLATE_START: &str = "---TEMPLATE START---";
pub const TEMPLATE_END: &str = "---TEMPLATE END---";

/// Builds the provider conversation for `request`.
///
/// `template_content` is the text of the resolved template, if any; it is
/// ignored on modification turns.
pub fn build_messages(request: &GenerationRequest, template_content: Option<&str>) -> Vec<Message> {
    let mut messages = vec![Message::system(SYSTEM_PROMPT)];

    match request.previous_response.as_deref() {
        None => messages.push(Message::user(initial_draft_prompt(request, template_content))),
        Some(previous) => {
            messages.push(Message::user(format!(
                "Original Customer Email:\n{}",
                request.customer_email
            )));
            messages.push(Message::assistant(previous));
            messages.push(Message::user(notes_reminder(request.customer_notes.as_deref())));
            messages.push(Message::user(format!(
                "Please modify the above response based on this request: {}",
                request.modification_request.as_deref().unwrap_or_default()
            )));
        }
    }

    messages
}

fn initial_draft_prompt(request: &GenerationRequest, template_content: Option<&str>) -> String {
    let mut content = format!("Customer Email:\n{}\n\n", request.customer_email);

    if let Some(notes) = request.customer_notes.as_deref() {
        content.push_str(&format!(
            "IMPORTANT NOTES (follow these when writing the response):\n{}\n\n",
            notes
        ));
    }

    if let Some(template) = template_content.filter(|t| !t.is_empty()) {
        content.push_str(&format!(
            "Please use the following template as a starting point for your response:\n\n{}\n{}\n{}\n\n",
            TEMPLATE_START, template, TEMPLATE_END
        ));
    }

    content.push_str("Draft a suitable response:");
    content
}

fn notes_reminder(notes: Option<&str>) -> String {
    match notes {
        Some(notes) => format!(
            "IMPORTANT NOTES (still apply to the revised response):\n{}",
            notes
        ),
        None => "There are no additional notes for this customer.".to_string(),
    }
}
