use anyhow::Result;

use crate::domain::{
    chat_screen_state::{ChatScreenOptions, ChatScreenState, FocusTarget},
    events::{AppEvent, KeyInput, MouseClick},
    message_list_state::PAGE_SCROLL_ROWS,
};

use super::{
    contracts::ChatScreenController,
    send_message::{send_message, SendTrigger},
};

pub struct DefaultChatScreenController {
    state: ChatScreenState,
}

impl DefaultChatScreenController {
    pub fn new(options: ChatScreenOptions) -> Self {
        Self {
            state: ChatScreenState::new(options),
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.ctrl {
            self.handle_ctrl_key(&key.key);
            return;
        }

        let row_count = self.state.store().count();

        match key.key.as_str() {
            "tab" => {
                let focus = self.state.focus().toggled();
                self.state.set_focus(focus);
            }
            "enter" => match self.state.focus() {
                FocusTarget::Input if self.state.options().submit_on_enter => {
                    send_message(&mut self.state, SendTrigger::KeyboardSubmit);
                }
                FocusTarget::Input => {}
                FocusTarget::SendButton => {
                    send_message(&mut self.state, SendTrigger::Button);
                }
            },
            " " if self.state.focus() == FocusTarget::SendButton => {
                send_message(&mut self.state, SendTrigger::Button);
            }
            "backspace" => self.state.input_mut().delete_char_before(),
            "delete" => self.state.input_mut().delete_char_at(),
            "left" => self.state.input_mut().move_cursor_left(),
            "right" => self.state.input_mut().move_cursor_right(),
            "home" => self.state.input_mut().move_cursor_home(),
            "end" => self.state.input_mut().move_cursor_end(),
            "up" => self.state.message_list_mut().scroll_up(1, row_count),
            "down" => self.state.message_list_mut().scroll_down(1, row_count),
            "pageup" => self
                .state
                .message_list_mut()
                .scroll_up(PAGE_SCROLL_ROWS, row_count),
            "pagedown" => self
                .state
                .message_list_mut()
                .scroll_down(PAGE_SCROLL_ROWS, row_count),
            other => {
                let mut chars = other.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    self.state.set_focus(FocusTarget::Input);
                    if !self.state.input_mut().insert_char(ch) {
                        tracing::debug!("input is full, keystroke dropped");
                    }
                }
            }
        }
    }

    fn handle_ctrl_key(&mut self, key: &str) {
        let row_count = self.state.store().count();

        match key {
            "c" => self.state.stop(),
            "s" => {
                send_message(&mut self.state, SendTrigger::Button);
            }
            "home" => self.state.message_list_mut().scroll_to_top(row_count),
            "end" => self.state.message_list_mut().scroll_to_end(row_count),
            _ => {}
        }
    }

    fn handle_click(&mut self, click: MouseClick) {
        let on_send = self
            .state
            .send_button_area()
            .is_some_and(|area| area.contains(click.column, click.row));

        if on_send {
            send_message(&mut self.state, SendTrigger::Button);
        }
    }
}

impl ChatScreenController for DefaultChatScreenController {
    fn state(&self) -> &ChatScreenState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ChatScreenState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::MouseClick(click) => self.handle_click(click),
        }

        Ok(())
    }
}
