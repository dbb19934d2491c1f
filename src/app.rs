use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let (mut context, _log_guard) = bootstrap::bootstrap(cli.config.as_deref())?;
            cli.apply_overrides(&mut context.config.chat);

            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                log_file = %context.layout.log_file(&context.config.logging.file).display(),
                "module boundaries loaded"
            );

            let mut screen = bootstrap::compose_chat_screen(context.config.chat.screen_options());
            ui::shell::start(
                &context,
                screen.event_source.as_mut(),
                screen.controller.as_mut(),
            )?;
        }
    }

    Ok(())
}
