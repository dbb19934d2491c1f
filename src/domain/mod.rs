//! Domain layer: messages, the message store, and screen state.

pub mod chat_screen_state;
pub mod events;
pub mod message;
pub mod message_input_state;
pub mod message_list_state;
pub mod message_store;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
