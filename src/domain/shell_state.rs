use super::panel::Panel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    active_panel: Panel,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            active_panel: Panel::default(),
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn active_panel(&self) -> Panel {
        self.active_panel
    }

    /// Activates `panel` unconditionally. Re-selecting the active panel is a no-op.
    pub fn select_panel(&mut self, panel: Panel) {
        self.active_panel = panel;
    }

    pub fn is_selected(&self, panel: Panel) -> bool {
        self.active_panel == panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_on_chat_panel() {
        let state = ShellState::default();

        assert!(state.is_running());
        assert_eq!(state.active_panel(), Panel::Chat);
        assert!(state.is_selected(Panel::Chat));
        assert!(!state.is_selected(Panel::Settings));
    }

    #[test]
    fn select_panel_is_idempotent() {
        let mut state = ShellState::default();
        state.select_panel(Panel::Settings);
        let snapshot = state.clone();

        state.select_panel(Panel::Settings);

        assert_eq!(state, snapshot);
    }

    #[test]
    fn exactly_one_panel_is_selected_after_any_sequence() {
        let mut state = ShellState::default();
        let sequence = [
            Panel::Settings,
            Panel::Chat,
            Panel::Chat,
            Panel::Settings,
            Panel::Settings,
        ];

        for panel in sequence {
            state.select_panel(panel);
            assert_eq!(state.active_panel(), panel);

            let selected = Panel::ALL
                .iter()
                .filter(|candidate| state.is_selected(**candidate))
                .count();
            assert_eq!(selected, 1);
        }
    }

    #[test]
    fn stop_clears_running_flag_without_touching_panel() {
        let mut state = ShellState::default();
        state.select_panel(Panel::Settings);

        state.stop();

        assert!(!state.is_running());
        assert_eq!(state.active_panel(), Panel::Settings);
    }
}
