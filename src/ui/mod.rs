//! UI rendering for the GitHub dashboard
//!
//! Draws one frame from [`App`] state:
//! - Left: "Dashboard Settings" sidebar with the username field, the refresh
//!   button and keybind hints
//! - Right: the dashboard pane, which is one of the prompt, loading, warning
//!   or loaded states produced by the last render pass
//!
//! Rendering never touches the network; everything comes from
//! [`crate::view_state::DashboardView`].

pub mod dashboard;
pub mod sidebar;
pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use theme::COLOR_WARNING;

/// Sidebar width in columns.
pub const SIDEBAR_WIDTH: u16 = 32;

/// Smallest terminal the layout supports.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 12;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area);
        return;
    }

    let [sidebar_area, main_area] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(area);

    sidebar::render(frame, sidebar_area, app);
    dashboard::render(frame, main_area, app);
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new(vec![
        Line::styled(
            "⚠ terminal too small",
            Style::default()
                .fg(COLOR_WARNING)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(format!("need at least {}x{}", MIN_WIDTH, MIN_HEIGHT)),
    ])
    .alignment(Alignment::Center);

    let y_offset = area.height.saturating_sub(2) / 2;
    let centered = Rect::new(area.x, area.y + y_offset, area.width, 2.min(area.height));
    frame.render_widget(message, centered);
}
