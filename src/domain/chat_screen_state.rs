use super::{
    message_input_state::MessageInputState, message_list_state::MessageListState,
    message_store::MessageStore,
};

/// Default share of the list width a bubble may take.
pub const DEFAULT_BUBBLE_WIDTH_PERCENT: u16 = 70;

/// Optional behaviors of the chat screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatScreenOptions {
    /// Draw the placeholder avatar next to each bubble.
    pub show_avatars: bool,
    /// Treat Enter in the input field as a send.
    pub submit_on_enter: bool,
    pub bubble_width_percent: u16,
}

impl Default for ChatScreenOptions {
    fn default() -> Self {
        Self {
            show_avatars: true,
            submit_on_enter: true,
            bubble_width_percent: DEFAULT_BUBBLE_WIDTH_PERCENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Input,
    SendButton,
}

impl FocusTarget {
    pub fn toggled(self) -> Self {
        match self {
            FocusTarget::Input => FocusTarget::SendButton,
            FocusTarget::SendButton => FocusTarget::Input,
        }
    }
}

/// Screen rectangle in terminal cells, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl HitArea {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatScreenState {
    running: bool,
    options: ChatScreenOptions,
    focus: FocusTarget,
    store: MessageStore,
    input: MessageInputState,
    message_list: MessageListState,
    send_button_area: Option<HitArea>,
}

impl Default for ChatScreenState {
    fn default() -> Self {
        Self::new(ChatScreenOptions::default())
    }
}

impl ChatScreenState {
    pub fn new(options: ChatScreenOptions) -> Self {
        Self {
            running: true,
            options,
            focus: FocusTarget::default(),
            store: MessageStore::default(),
            input: MessageInputState::default(),
            message_list: MessageListState::default(),
            send_button_area: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn options(&self) -> ChatScreenOptions {
        self.options
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FocusTarget) {
        self.focus = focus;
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn input(&self) -> &MessageInputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut MessageInputState {
        &mut self.input
    }

    pub fn message_list(&self) -> &MessageListState {
        &self.message_list
    }

    pub fn message_list_mut(&mut self) -> &mut MessageListState {
        &mut self.message_list
    }

    /// Splits the borrow so a send can read the buffer and write the store together.
    pub fn store_and_input_mut(&mut self) -> (&mut MessageStore, &mut MessageInputState) {
        (&mut self.store, &mut self.input)
    }

    pub fn send_button_area(&self) -> Option<HitArea> {
        self.send_button_area
    }

    pub fn set_send_button_area(&mut self, area: HitArea) {
        self.send_button_area = Some(area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_running_with_input_focused() {
        let state = ChatScreenState::default();

        assert!(state.is_running());
        assert_eq!(state.focus(), FocusTarget::Input);
        assert!(state.store().is_empty());
        assert!(state.input().is_empty());
        assert_eq!(state.send_button_area(), None);
    }

    #[test]
    fn default_options_enable_avatars_and_enter_submit() {
        let options = ChatScreenOptions::default();

        assert!(options.show_avatars);
        assert!(options.submit_on_enter);
        assert_eq!(options.bubble_width_percent, DEFAULT_BUBBLE_WIDTH_PERCENT);
    }

    #[test]
    fn focus_toggles_between_input_and_button() {
        assert_eq!(FocusTarget::Input.toggled(), FocusTarget::SendButton);
        assert_eq!(FocusTarget::SendButton.toggled(), FocusTarget::Input);
    }

    #[test]
    fn hit_area_contains_only_its_cells() {
        let area = HitArea {
            x: 10,
            y: 5,
            width: 4,
            height: 3,
        };

        assert!(area.contains(10, 5));
        assert!(area.contains(13, 7));
        assert!(!area.contains(14, 7));
        assert!(!area.contains(13, 8));
        assert!(!area.contains(9, 6));
    }

    #[test]
    fn hit_area_at_screen_edge_does_not_overflow() {
        let area = HitArea {
            x: u16::MAX - 1,
            y: u16::MAX - 1,
            width: 2,
            height: 2,
        };

        assert!(area.contains(u16::MAX, u16::MAX));
    }
}
