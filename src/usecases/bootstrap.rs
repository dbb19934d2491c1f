use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    domain::chat_screen_state::ChatScreenOptions,
    infra::{
        self,
        config::FileConfigAdapter,
        contracts::ConfigAdapter,
        storage_layout::StorageLayout,
    },
    ui::CrosstermEventSource,
    usecases::{
        chat_screen::DefaultChatScreenController, context::AppContext,
        contracts::{AppEventSource, ChatScreenController},
    },
};

pub struct ChatScreenComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub controller: Box<dyn ChatScreenController>,
}

/// Loads config, prepares the log directory, and installs logging.
///
/// The returned guard flushes the log file when dropped.
pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppContext, WorkerGuard)> {
    let adapter = FileConfigAdapter::new(config_path);
    let context = build_context(&adapter, StorageLayout::resolve()?)?;

    context.layout.ensure_dirs()?;
    let guard = infra::logging::init(&context.config.logging, &context.layout)?;

    Ok((context, guard))
}

pub fn compose_chat_screen(options: ChatScreenOptions) -> ChatScreenComposition {
    ChatScreenComposition {
        event_source: Box::new(CrosstermEventSource),
        controller: Box::new(DefaultChatScreenController::new(options)),
    }
}

fn build_context(adapter: &dyn ConfigAdapter, layout: StorageLayout) -> Result<AppContext> {
    let config = adapter.load()?;

    Ok(AppContext::new(config, layout))
}
