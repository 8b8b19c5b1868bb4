//! "GitHub Statistics" row: one bordered box per metric.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_METRIC};
use crate::view_state::Metric;

/// Section title plus a three-row box.
pub const HEIGHT: u16 = 4;

pub fn render(area: Rect, buf: &mut Buffer, metrics: &[Metric]) {
    let [title_area, boxes_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(area);

    Line::styled(
        "📈 GitHub Statistics",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )
    .render(title_area, buf);

    if metrics.is_empty() {
        return;
    }

    let boxes = Layout::horizontal(
        metrics
            .iter()
            .map(|_| Constraint::Ratio(1, metrics.len() as u32)),
    )
    .split(boxes_area);

    for (metric, cell) in metrics.iter().zip(boxes.iter()) {
        Paragraph::new(Line::styled(
            metric.value.clone(),
            Style::default()
                .fg(COLOR_METRIC)
                .add_modifier(Modifier::BOLD),
        ))
        .centered()
        .block(
            Block::default()
                .title(Span::styled(metric.label, Style::default().fg(COLOR_DIM)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        )
        .render(*cell, buf);
    }
}
