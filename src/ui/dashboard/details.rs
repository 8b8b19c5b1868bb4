//! "Profile Information" section
//!
//! Two columns of labelled fields; the first three fields go left, the rest
//! right, followed by the hire line when it applies.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_SUCCESS};
use crate::view_state::{DetailField, ProfileDashboard, NOT_SPECIFIED};

/// Fields in the left column.
const LEFT_COLUMN: usize = 3;

/// Title, three field rows and one blank row.
pub const HEIGHT: u16 = 5;

pub fn render(area: Rect, buf: &mut Buffer, dashboard: &ProfileDashboard) {
    let [title_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    Line::styled(
        "👤 Profile Information",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )
    .render(title_area, buf);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(body_area);

    let split = LEFT_COLUMN.min(dashboard.details.len());
    let (left_fields, right_fields) = dashboard.details.split_at(split);

    Paragraph::new(left_fields.iter().map(field_line).collect::<Vec<_>>()).render(left, buf);

    let mut right_lines: Vec<Line> = right_fields.iter().map(field_line).collect();
    if dashboard.hireable {
        right_lines.push(Line::styled(
            "✅ Available for hire",
            Style::default()
                .fg(COLOR_SUCCESS)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Paragraph::new(right_lines).render(right, buf);
}

fn field_line(field: &DetailField) -> Line<'_> {
    let value_style = if field.value == NOT_SPECIFIED {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };
    Line::from(vec![
        Span::styled(
            format!("{}: ", field.label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(field.value.as_str(), value_style),
    ])
}
