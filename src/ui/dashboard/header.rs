//! Dashboard header component
//!
//! Title line, bio (only when the profile has one) and the profile and
//! avatar links.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::{COLOR_DIM, COLOR_HEADER, COLOR_LINK};
use crate::view_state::ProfileDashboard;

/// Title, bio, links and one blank row.
pub const HEIGHT: u16 = 4;

pub fn render(area: Rect, buf: &mut Buffer, dashboard: &ProfileDashboard) {
    let mut lines = vec![Line::styled(
        format!("👋 {}", dashboard.title),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(bio) = &dashboard.bio {
        lines.push(Line::styled(
            format!("📝 {}", bio),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ));
    }

    let mut links = Vec::new();
    if let Some(url) = &dashboard.profile_url {
        links.push(Span::styled(url.clone(), Style::default().fg(COLOR_LINK)));
    }
    if let Some(avatar) = &dashboard.avatar_url {
        if !links.is_empty() {
            links.push(Span::raw("  "));
        }
        links.push(Span::styled("avatar ", Style::default().fg(COLOR_DIM)));
        links.push(Span::styled(avatar.clone(), Style::default().fg(COLOR_LINK)));
    }
    if !links.is_empty() {
        lines.push(Line::from(links));
    }

    Paragraph::new(lines).render(area, buf);
}
