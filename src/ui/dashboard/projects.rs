//! "Top Projects" section
//!
//! Cards are laid out in a fixed three-column wrap: card `i` goes to column
//! `i % 3` of row `i / 3`.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_HEADER, COLOR_LINK, COLOR_STAR,
};
use crate::view_state::ProjectCard;

/// Cards per row.
pub const COLUMNS: usize = 3;

/// Border, link, description, stats, border.
pub const CARD_HEIGHT: u16 = 5;

/// Message shown when there are no cards.
pub const EMPTY_MESSAGE: &str = "No public repositories to show";

/// Rows needed for `count` cards, including the title and a blank row.
pub fn height(count: usize) -> u16 {
    let body = if count == 0 {
        1
    } else {
        count.div_ceil(COLUMNS) as u16 * CARD_HEIGHT
    };
    body + 2
}

/// Grid cell of the `index`-th card as `(row, column)`.
pub fn grid_position(index: usize) -> (usize, usize) {
    (index / COLUMNS, index % COLUMNS)
}

pub fn render(area: Rect, buf: &mut Buffer, cards: &[ProjectCard], selected: Option<usize>) {
    let [title_area, body_area, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    Line::styled(
        "📁 Top Projects",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )
    .render(title_area, buf);

    if cards.is_empty() {
        Line::styled(EMPTY_MESSAGE, Style::default().fg(COLOR_DIM)).render(body_area, buf);
        return;
    }

    let rows = cards.len().div_ceil(COLUMNS);
    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(body_area);

    for (index, card) in cards.iter().enumerate() {
        let (row, column) = grid_position(index);
        let columns = Layout::horizontal([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(row_areas[row]);
        render_card(columns[column], buf, card, selected == Some(index));
    }
}

fn render_card(area: Rect, buf: &mut Buffer, card: &ProjectCard, is_selected: bool) {
    let border_style = if is_selected {
        Style::default().fg(COLOR_FOCUS)
    } else {
        Style::default().fg(COLOR_BORDER)
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", card.name),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let mut stats = vec![
        Span::styled(format!("⭐ {}", card.stars), Style::default().fg(COLOR_STAR)),
        Span::raw("  "),
        Span::raw(format!("🔀 {}", card.forks)),
    ];
    if let Some(language) = &card.language {
        stats.push(Span::raw("  "));
        stats.push(Span::styled(
            format!("🔤 {}", language),
            Style::default().fg(COLOR_DIM),
        ));
    }

    let lines = vec![
        Line::styled(card.url.as_str(), Style::default().fg(COLOR_LINK)),
        Line::styled(
            card.description.as_str(),
            Style::default().add_modifier(Modifier::ITALIC),
        ),
        Line::from(stats),
    ];

    Paragraph::new(lines).block(block).render(area, buf);
}
