use serde::Deserialize;

use crate::infra::config::{AppConfig, ChatConfig, LogConfig};

/// On-disk shape of the config: every key optional, merged over defaults.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub chat: Option<FileChatConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(chat) = self.chat {
            chat.merge_into(&mut config.chat);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = file;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileChatConfig {
    pub show_avatars: Option<bool>,
    pub submit_on_enter: Option<bool>,
    pub bubble_width_percent: Option<u16>,
}

impl FileChatConfig {
    fn merge_into(self, config: &mut ChatConfig) {
        if let Some(show_avatars) = self.show_avatars {
            config.show_avatars = show_avatars;
        }

        if let Some(submit_on_enter) = self.submit_on_enter {
            config.submit_on_enter = submit_on_enter;
        }

        if let Some(percent) = self.bubble_width_percent {
            config.bubble_width_percent = percent;
        }
    }
}
