use std::{io, panic};

use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

/// Leaves the alternate screen before reporting a panic, so the report lands
/// on the primary screen instead of being wiped with the UI.
pub fn install_terminal_restore_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

        let payload = panic_payload(panic_info.payload());

        if let Some(location) = panic_info.location() {
            tracing::error!(
                file = location.file(),
                line = location.line(),
                payload = %payload,
                "panic"
            );
            eprintln!(
                "metaclaw panic: {} at {}:{}:{}",
                payload,
                location.file(),
                location.line(),
                location.column()
            );
        } else {
            tracing::error!(payload = %payload, "panic");
            eprintln!("metaclaw panic: {}", payload);
        }
    }));
}

fn panic_payload(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic payload omitted".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_extracted_from_static_str() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");

        assert_eq!(panic_payload(payload.as_ref()), "boom");
    }

    #[test]
    fn payload_is_extracted_from_owned_string() {
        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("formatted boom"));

        assert_eq!(panic_payload(payload.as_ref()), "formatted boom");
    }

    #[test]
    fn unknown_payload_is_omitted() {
        let payload: Box<dyn std::any::Any + Send> = Box::new(42_u8);

        assert_eq!(panic_payload(payload.as_ref()), "panic payload omitted");
    }
}
