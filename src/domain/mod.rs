//! Domain layer: the panel selector and shell state.

pub mod events;
pub mod panel;
pub mod shell_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
