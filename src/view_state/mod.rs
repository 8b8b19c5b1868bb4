//! View state types.
//!
//! Render-ready descriptions of the screen, decoupled from both the network
//! and the terminal.

pub mod dashboard_view;

pub use dashboard_view::{
    render_pass, DashboardView, DetailField, LanguageCharts, LanguageSlice, Metric,
    ProfileDashboard, ProjectCard, NOT_SPECIFIED, NO_DESCRIPTION, PROMPT_MESSAGE,
};
