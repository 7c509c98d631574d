//! UI layer: terminal mount, event source, and rendering.

mod chat_panel;
mod event_source;
mod settings_panel;
pub mod shell;
mod styles;
mod terminal;
mod view;

pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
