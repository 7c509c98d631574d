use anyhow::Result;
use ratatui::{backend::Backend, Terminal};

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        mouse = context.config.ui.mouse,
        event_poll_ms = context.config.ui.event_poll_ms,
        "starting TUI shell"
    );

    let mut session = TerminalSession::new(context.config.ui.mouse)?;
    drive(session.terminal_mut(), event_source, orchestrator)?;

    tracing::info!("TUI shell stopped");
    Ok(())
}

/// Draws, reads one event, dispatches it; repeats until the state stops running.
fn drive<B: Backend>(
    terminal: &mut Terminal<B>,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    while orchestrator.state().is_running() {
        let area = terminal
            .draw(|frame| view::render(frame, orchestrator.state()))?
            .area;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(view::resolve_pointer(event, area))?;
        }
    }

    Ok(())
}
