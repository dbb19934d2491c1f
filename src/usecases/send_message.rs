//! Send workflow: move the input buffer into the message store.
//!
//! Both the Send button and keyboard submit end up here, so the two paths
//! cannot drift apart.

use crate::domain::{chat_screen_state::ChatScreenState, message_store::RowInserted};

/// What started the send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendTrigger {
    Button,
    KeyboardSubmit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The message was appended; the list now shows `inserted.index`.
    Sent(RowInserted),
    /// The buffer was empty or whitespace-only. Nothing changed.
    IgnoredEmpty,
}

/// Appends the buffered text, clears the buffer, and scrolls the list to the new row.
///
/// Empty input is rejected silently and the buffer is left as typed.
pub fn send_message(state: &mut ChatScreenState, trigger: SendTrigger) -> SendOutcome {
    let (store, input) = state.store_and_input_mut();

    let Some(inserted) = store.append(input.text()) else {
        tracing::debug!(?trigger, "send ignored: input is empty");
        return SendOutcome::IgnoredEmpty;
    };

    input.clear();
    state.message_list_mut().scroll_to_row(inserted.index);

    tracing::debug!(
        ?trigger,
        index = inserted.index,
        count = state.store().count(),
        "message appended"
    );

    SendOutcome::Sent(inserted)
}
