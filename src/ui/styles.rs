//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Navigation bar styles
// =============================================================================

/// Style for the "Metaclaw" brand label.
pub fn brand_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the navigation control matching the active panel.
pub fn nav_selected_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

/// Style for navigation controls that are not selected (outlined look).
pub fn nav_unselected_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn nav_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Panel styles
// =============================================================================

pub fn panel_border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Style for placeholder text like "No messages yet." (dimmed italic).
pub fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Style for inert controls (input field, send button).
pub fn disabled_control_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn disabled_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for panel headings.
pub fn heading_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for secondary descriptive text.
pub fn muted_text_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn status_line_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_and_unselected_nav_styles_differ() {
        assert_ne!(nav_selected_style(), nav_unselected_style());
        assert_eq!(nav_selected_style().bg, Some(Color::Blue));
        assert_eq!(nav_unselected_style().bg, None);
    }

    #[test]
    fn brand_style_is_bold_white() {
        let style = brand_style();
        assert_eq!(style.fg, Some(Color::White));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn placeholder_style_is_dim_italic() {
        let style = placeholder_style();
        assert_eq!(style.fg, Some(Color::DarkGray));
        assert!(style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn disabled_control_style_is_dark_gray() {
        assert_eq!(disabled_control_style().fg, Some(Color::DarkGray));
    }
}
