use anyhow::Result;

use crate::domain::{chat_screen_state::ChatScreenState, events::AppEvent};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ChatScreenController {
    fn state(&self) -> &ChatScreenState;
    fn state_mut(&mut self) -> &mut ChatScreenState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}
