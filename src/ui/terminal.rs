use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// The mount point: owns raw mode and the alternate screen until dropped.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse_captured: bool,
}

impl TerminalSession {
    pub fn new(capture_mouse: bool) -> Result<Self> {
        enable_raw_mode()?;

        undo_on_error(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)?;
                if capture_mouse {
                    execute!(stdout, EnableMouseCapture)?;
                }

                let backend = CrosstermBackend::new(stdout);
                let terminal = Terminal::new(backend)?;

                Ok(Self {
                    terminal,
                    mouse_captured: capture_mouse,
                })
            },
            || {
                let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
                let _ = disable_raw_mode();
            },
        )
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        if self.mouse_captured {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Runs `setup`; if it fails, runs `undo` before handing the error back.
fn undo_on_error<T>(setup: impl FnOnce() -> Result<T>, undo: impl FnOnce()) -> Result<T> {
    let result = setup();
    if result.is_err() {
        undo();
    }
    result
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use anyhow::anyhow;

    use super::*;

    #[test]
    fn failed_setup_runs_undo() {
        let undone = Cell::new(false);

        let result: Result<()> =
            undo_on_error(|| Err(anyhow!("alternate screen refused")), || undone.set(true));

        assert!(result.is_err());
        assert!(undone.get());
    }

    #[test]
    fn successful_setup_skips_undo() {
        let undone = Cell::new(false);

        let value = undo_on_error(|| Ok(7), || undone.set(true)).expect("setup must succeed");

        assert_eq!(value, 7);
        assert!(!undone.get());
    }
}
