//! Chat panel rendering. Every control here is inert.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use super::styles;

pub(super) const EMPTY_HISTORY_TEXT: &str = "No messages yet.";
pub(super) const INPUT_PLACEHOLDER: &str = "Send a message\u{2026}";
pub(super) const SEND_LABEL: &str = "Send";

/// Input row: 1 border + 1 text + 1 border.
const INPUT_ROW_HEIGHT: u16 = 3;
const SEND_BUTTON_WIDTH: u16 = 8;

pub fn render_chat_panel(frame: &mut Frame<'_>, area: Rect) {
    let [history_area, input_row_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(INPUT_ROW_HEIGHT)])
        .areas(area);

    let [input_area, send_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SEND_BUTTON_WIDTH)])
        .areas(input_row_area);

    let history = Paragraph::new(history_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::panel_border_style())
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(history, history_area);

    // No cursor is placed: the input never takes focus.
    let input = Paragraph::new(input_line()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::disabled_border_style()),
    );
    frame.render_widget(input, input_area);

    let send = Paragraph::new(Span::styled(SEND_LABEL, styles::disabled_control_style()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::disabled_border_style()),
        );
    frame.render_widget(send, send_area);
}

fn history_lines() -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        EMPTY_HISTORY_TEXT,
        styles::placeholder_style(),
    ))]
}

fn input_line() -> Line<'static> {
    Line::from(Span::styled(
        INPUT_PLACEHOLDER,
        styles::disabled_control_style(),
    ))
}

/// Cells of the send button caption: the rightmost "Send" on its row, which
/// skips the input placeholder ("Send a message…") to its left.
#[cfg(test)]
pub(super) fn send_button_caption(
    buffer: &ratatui::buffer::Buffer,
) -> Option<Vec<ratatui::layout::Position>> {
    use ratatui::layout::Position;

    let area = buffer.area;
    let label: Vec<String> = SEND_LABEL.chars().map(String::from).collect();
    let width = label.len() as u16;
    if area.width < width {
        return None;
    }

    for y in area.top()..area.bottom() {
        for x in (area.left()..=area.right() - width).rev() {
            let matches = label.iter().enumerate().all(|(offset, symbol)| {
                buffer[(x + offset as u16, y)].symbol() == symbol.as_str()
            });
            if matches {
                return Some((0..width).map(|offset| Position::new(x + offset, y)).collect());
            }
        }
    }

    None
}
