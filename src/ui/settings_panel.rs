use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use super::styles;

pub(super) const SETTINGS_HEADING: &str = "Settings";
pub(super) const SETTINGS_DESCRIPTION: &str = "System prompt, tools, and state will appear here.";

pub fn render_settings_panel(frame: &mut Frame<'_>, area: Rect) {
    let panel = Paragraph::new(settings_lines())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::panel_border_style())
                .padding(Padding::new(2, 2, 1, 1)),
        );
    frame.render_widget(panel, area);
}

fn settings_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(SETTINGS_HEADING, styles::heading_style())),
        Line::default(),
        Line::from(Span::styled(
            SETTINGS_DESCRIPTION,
            styles::muted_text_style(),
        )),
    ]
}
