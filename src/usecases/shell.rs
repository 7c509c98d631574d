use anyhow::Result;

use crate::domain::{events::AppEvent, panel::Panel, shell_state::ShellState};

use super::contracts::ShellOrchestrator;

#[derive(Debug, Default)]
pub struct DefaultShellOrchestrator {
    state: ShellState,
}

impl DefaultShellOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    fn activate(&mut self, panel: Panel) {
        let previous = self.state.active_panel();
        self.state.select_panel(panel);

        if previous != panel {
            tracing::debug!(from = ?previous, to = ?panel, "active panel changed");
        }
    }
}

impl ShellOrchestrator for DefaultShellOrchestrator {
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => {
                if key.ctrl {
                    return Ok(());
                }

                match key.key.as_str() {
                    "1" | "c" => self.activate(Panel::Chat),
                    "2" | "s" => self.activate(Panel::Settings),
                    "tab" | "backtab" => self.activate(self.state.active_panel().other()),
                    _ => {}
                }
            }
            AppEvent::NavigationRequested(panel) => self.activate(panel),
            // Clicks that missed every navigation control.
            AppEvent::PointerClick { .. } => {}
        }

        Ok(())
    }
}
