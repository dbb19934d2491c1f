//! Use case layer: the send workflow and the chat screen controller.

pub mod bootstrap;
pub mod chat_screen;
pub mod context;
pub mod contracts;
pub mod send_message;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
