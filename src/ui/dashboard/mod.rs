//! Dashboard pane
//!
//! Draws the view produced by the last render pass. The loaded dashboard is
//! laid out as a fixed stack of sections inside a vertical scroll view:
//!
//! ```text
//! +------------------------------------------+
//! | Welcome to {name}'s Dashboard            |
//! | bio / profile link / avatar              |
//! +------------------------------------------+
//! | GitHub Statistics (5 metric boxes)       |
//! +------------------------------------------+
//! | Profile Information (2 columns)          |
//! +------------------------------------------+
//! | Top Projects (3-column card grid)        |
//! +------------------------------------------+
//! | Programming Languages (bar | pie)        |
//! +------------------------------------------+
//! | Last updated: YYYY-MM-DD HH:MM:SS        |
//! +------------------------------------------+
//! ```

pub mod details;
pub mod footer;
pub mod header;
pub mod languages;
pub mod metrics;
pub mod projects;
pub mod states;

use ratatui::{
    layout::{Constraint, Layout, Position, Rect, Size},
    Frame,
};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::app::{App, Focus};
use crate::view_state::{DashboardView, ProfileDashboard};

// ============================================================================
// Main Dashboard Rendering
// ============================================================================

/// Render the dashboard pane for the current view.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match &app.view {
        DashboardView::Prompt => states::render_prompt(frame, area),
        DashboardView::Loading { username } => states::render_loading(frame, area, username),
        DashboardView::Warning { message, .. } => states::render_warning(frame, area, message),
        DashboardView::Loaded(dashboard) => {
            let selected = (app.focus == Focus::Projects).then_some(app.selected_project);
            render_loaded(frame, area, dashboard, selected, app.scroll);
        }
    }
}

/// Total rows the loaded dashboard needs, independent of width.
pub fn content_height(dashboard: &ProfileDashboard) -> u16 {
    section_heights(dashboard).iter().sum()
}

fn section_heights(dashboard: &ProfileDashboard) -> [u16; 6] {
    [
        header::HEIGHT,
        metrics::HEIGHT,
        details::HEIGHT,
        projects::height(dashboard.projects.len()),
        languages::height(dashboard.languages.is_some()),
        footer::HEIGHT,
    ]
}

fn render_loaded(
    frame: &mut Frame,
    area: Rect,
    dashboard: &ProfileDashboard,
    selected: Option<usize>,
    scroll: u16,
) {
    // One column is reserved for the vertical scrollbar
    let width = area.width.saturating_sub(1);
    let height = content_height(dashboard);

    let mut scroll_view = ScrollView::new(Size::new(width, height))
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    let content = Rect::new(0, 0, width, height);
    let [header_area, metrics_area, details_area, projects_area, languages_area, footer_area] =
        Layout::vertical(section_heights(dashboard).map(Constraint::Length)).areas(content);

    let buf = scroll_view.buf_mut();
    header::render(header_area, buf, dashboard);
    metrics::render(metrics_area, buf, &dashboard.metrics);
    details::render(details_area, buf, dashboard);
    projects::render(projects_area, buf, &dashboard.projects, selected);
    languages::render(languages_area, buf, dashboard.languages.as_ref());
    footer::render(footer_area, buf, &dashboard.rendered_at);

    let max_offset = height.saturating_sub(area.height);
    let mut state = ScrollViewState::default();
    state.set_offset(Position::new(0, scroll.min(max_offset)));
    frame.render_stateful_widget(scroll_view, area, &mut state);
}
