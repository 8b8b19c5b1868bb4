//! Footer with the time of the last render pass.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Widget,
};

use crate::ui::theme::COLOR_DIM;

pub const HEIGHT: u16 = 1;

/// Footer text for a pass rendered at `rendered_at`.
pub fn footer_text(rendered_at: &str) -> String {
    format!("Last updated: {}", rendered_at)
}

pub fn render(area: Rect, buf: &mut Buffer, rendered_at: &str) {
    Line::styled(footer_text(rendered_at), Style::default().fg(COLOR_DIM))
        .centered()
        .render(area, buf);
}
