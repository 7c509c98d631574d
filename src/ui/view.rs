use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{events::AppEvent, panel::Panel, shell_state::ShellState};

use super::{chat_panel::render_chat_panel, settings_panel::render_settings_panel, styles};

const BRAND_LABEL: &str = " Metaclaw ";
const BRAND_GAP: &str = "   ";
const CONTROL_GAP: &str = " ";
/// Navigation bar: 1 border + 1 controls row + 1 border.
const NAV_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub nav: Rect,
    pub main: Rect,
    pub status: Rect,
}

pub fn shell_layout(area: Rect) -> ShellLayout {
    let [nav, main, status] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

    ShellLayout { nav, main, status }
}

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let layout = shell_layout(frame.area());

    render_nav_bar(frame, layout.nav, state);

    match state.active_panel() {
        Panel::Chat => render_chat_panel(frame, layout.main),
        Panel::Settings => render_settings_panel(frame, layout.main),
    }

    let status = Paragraph::new(Span::styled(
        status_line(state),
        styles::status_line_style(),
    ));
    frame.render_widget(status, layout.status);
}

fn render_nav_bar(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let nav = Paragraph::new(nav_line(state)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::nav_border_style()),
    );
    frame.render_widget(nav, area);
}

fn nav_line(state: &ShellState) -> Line<'static> {
    let mut spans = vec![
        Span::styled(BRAND_LABEL, styles::brand_style()),
        Span::raw(BRAND_GAP),
    ];

    for (index, panel) in Panel::ALL.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(CONTROL_GAP));
        }

        let style = if state.is_selected(panel) {
            styles::nav_selected_style()
        } else {
            styles::nav_unselected_style()
        };
        spans.push(Span::styled(control_caption(panel), style));
    }

    Line::from(spans)
}

fn control_caption(panel: Panel) -> String {
    format!(" {} ", panel.label())
}

/// Screen rectangles of the navigation controls inside the nav bar, clipped
/// to the bar's inner area. Mirrors the span layout of [`nav_line`].
fn nav_controls(nav_area: Rect) -> Vec<(Panel, Rect)> {
    let inner = Block::default().borders(Borders::ALL).inner(nav_area);
    let mut x = inner
        .x
        .saturating_add(BRAND_LABEL.width() as u16)
        .saturating_add(BRAND_GAP.width() as u16);

    let mut controls = Vec::with_capacity(Panel::ALL.len());
    for (index, panel) in Panel::ALL.into_iter().enumerate() {
        if index > 0 {
            x = x.saturating_add(CONTROL_GAP.width() as u16);
        }

        let width = control_caption(panel).width() as u16;
        let rect = Rect::new(x, inner.y, width, inner.height.min(1)).intersection(inner);
        if !rect.is_empty() {
            controls.push((panel, rect));
        }
        x = x.saturating_add(width);
    }

    controls
}

/// Returns the panel whose navigation control covers the given cell.
pub fn panel_at(area: Rect, column: u16, row: u16) -> Option<Panel> {
    let position = Position::new(column, row);

    nav_controls(shell_layout(area).nav)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(panel, _)| panel)
}

/// Turns clicks on navigation controls into navigation requests. Everything
/// else passes through unchanged.
pub fn resolve_pointer(event: AppEvent, area: Rect) -> AppEvent {
    match event {
        AppEvent::PointerClick { column, row } => match panel_at(area, column, row) {
            Some(panel) => AppEvent::NavigationRequested(panel),
            None => event,
        },
        other => other,
    }
}

fn status_line(state: &ShellState) -> String {
    let panel = state.active_panel().title().to_lowercase();
    format!("panel: {panel} | 1/c: chat | 2/s: settings | Tab: switch | q: quit")
}
