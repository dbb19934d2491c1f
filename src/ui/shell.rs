use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ChatScreenController},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    controller: &mut dyn ChatScreenController,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        show_avatars = context.config.chat.show_avatars,
        submit_on_enter = context.config.chat.submit_on_enter,
        "starting chat screen"
    );

    let mut terminal = TerminalSession::new()?;
    run_loop(event_source, controller, |controller| {
        terminal.draw(|frame| view::render(frame, controller.state_mut()))
    })?;

    tracing::info!(
        messages = controller.state().store().count(),
        "chat screen closed"
    );
    Ok(())
}

/// Draw, wait for one event, handle it; repeat until the screen stops.
fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    controller: &mut dyn ChatScreenController,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&mut dyn ChatScreenController) -> Result<()>,
{
    while controller.state().is_running() {
        draw(controller)?;

        if let Some(event) = event_source.next_event()? {
            controller.handle_event(event)?;
        }
    }

    Ok(())
}
