//! Special state rendering for the dashboard pane
//!
//! Prompt, loading and warning states. Each is a short message centered in
//! the pane.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{COLOR_DIM, COLOR_LINK, COLOR_WARNING};
use crate::view_state::PROMPT_MESSAGE;

/// Renders the prompt shown while no username is entered
pub fn render_prompt(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![Line::styled(
        format!("⚠ {}", PROMPT_MESSAGE),
        Style::default().fg(COLOR_WARNING),
    )]);
    render_centered(frame, area, text);
}

/// Renders the loading notice while a pass is in flight
pub fn render_loading(frame: &mut Frame, area: Rect, username: &str) {
    let text = Text::from(vec![
        Line::styled(
            "loading",
            Style::default()
                .fg(COLOR_LINK)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(
            format!("Fetching GitHub data for {}...", username),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    render_centered(frame, area, text);
}

/// Renders the inline warning of a failed profile fetch
pub fn render_warning(frame: &mut Frame, area: Rect, message: &str) {
    let text = Text::from(vec![Line::styled(
        format!("⚠ {}", message),
        Style::default()
            .fg(COLOR_WARNING)
            .add_modifier(Modifier::BOLD),
    )]);
    render_centered(frame, area, text);
}

fn render_centered(frame: &mut Frame, area: Rect, text: Text<'_>) {
    let text_height = (text.height() as u16).min(area.height);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    // Center vertically in the area
    let y_offset = area.height.saturating_sub(text_height) / 2;
    let centered_area = Rect::new(
        area.x,
        area.y + y_offset,
        area.width,
        area.height - y_offset,
    );

    frame.render_widget(paragraph, centered_area);
}

// ============================================================================
// Tests
// ============================================================================
