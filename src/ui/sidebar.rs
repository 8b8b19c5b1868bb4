//! Settings sidebar
//!
//! Username field, "Refresh Data" button, status line and keybind hints.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_HEADER};
use crate::app::{App, Focus};

/// Keybind hints shown at the bottom of the sidebar.
const KEY_HINTS: &[(&str, &str)] = &[
    ("enter", "load user"),
    ("tab", "switch focus"),
    ("f5", "refresh"),
    ("←/→", "select project"),
    ("o", "open project"),
    ("p", "open profile"),
    ("pgup/pgdn", "scroll"),
    ("esc", "quit"),
];

/// Render the sidebar into `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            " Dashboard Settings ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [label_area, input_area, _, button_area, _, status_area, hints_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new("GitHub Username:").style(Style::default().fg(COLOR_ACCENT)),
        label_area,
    );
    render_input(frame, input_area, app);
    render_button(frame, button_area, app.focus == Focus::Refresh);

    if let Some(status) = &app.status {
        frame.render_widget(
            Paragraph::new(status.as_str())
                .style(Style::default().fg(COLOR_DIM))
                .wrap(Wrap { trim: true }),
            status_area,
        );
    }

    frame.render_widget(Paragraph::new(hint_lines()), hints_area);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(COLOR_FOCUS)
    } else {
        Style::default().fg(COLOR_BORDER)
    }
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(app.focus == Focus::Username));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The text area scrolls long input itself and draws its own cursor
    frame.render_widget(app.input.textarea(), inner);
}

fn render_button(frame: &mut Frame, area: Rect, focused: bool) {
    let label_style = if focused {
        Style::default().fg(COLOR_FOCUS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };
    let button = Paragraph::new(Line::styled("Refresh Data", label_style).centered()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(focused)),
    );
    frame.render_widget(button, area);
}

fn hint_lines() -> Vec<Line<'static>> {
    KEY_HINTS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:>9} ", key), Style::default().fg(COLOR_ACCENT)),
                Span::styled(*action, Style::default().fg(COLOR_DIM)),
            ])
        })
        .collect()
}
