use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::infra::config::ChatConfig;

#[derive(Debug, Parser)]
#[command(name = "chatpad", about = "Single-screen terminal chat demo")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Hide the placeholder avatar next to each message
    #[arg(long, global = true)]
    pub no_avatars: bool,

    /// Do not send when Enter is pressed in the input field
    #[arg(long, global = true)]
    pub no_submit_on_enter: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the chat screen
    Run,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }

    /// Flags only switch behaviors off; config decides otherwise.
    pub fn apply_overrides(&self, chat: &mut ChatConfig) {
        if self.no_avatars {
            chat.show_avatars = false;
        }

        if self.no_submit_on_enter {
            chat.submit_on_enter = false;
        }
    }
}
