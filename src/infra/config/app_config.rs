use serde::{Deserialize, Serialize};

use crate::domain::chat_screen_state::{ChatScreenOptions, DEFAULT_BUBBLE_WIDTH_PERCENT};

const MIN_BUBBLE_WIDTH_PERCENT: u16 = 20;
const MAX_BUBBLE_WIDTH_PERCENT: u16 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// File name inside the log directory.
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: "chatpad.log".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatConfig {
    pub show_avatars: bool,
    pub submit_on_enter: bool,
    pub bubble_width_percent: u16,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            show_avatars: true,
            submit_on_enter: true,
            bubble_width_percent: DEFAULT_BUBBLE_WIDTH_PERCENT,
        }
    }
}

impl ChatConfig {
    pub fn screen_options(&self) -> ChatScreenOptions {
        ChatScreenOptions {
            show_avatars: self.show_avatars,
            submit_on_enter: self.submit_on_enter,
            bubble_width_percent: self
                .bubble_width_percent
                .clamp(MIN_BUBBLE_WIDTH_PERCENT, MAX_BUBBLE_WIDTH_PERCENT),
        }
    }
}
