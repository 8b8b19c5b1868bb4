//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which UI component has focus
//! - [`AppEvent`] - Input events after key mapping
//! - [`EventOutcome`] - Follow-up work for the event loop

mod handlers;
mod input;
mod keybindings;
mod types;

pub use input::UsernameField;
pub use keybindings::map_key;
pub use types::{AppEvent, EventOutcome, Focus};

use std::sync::Arc;

use chrono::Local;
use tracing::info;

use crate::config::DashboardConfig;
use crate::github::GithubApi;
use crate::traits::HttpClient;
use crate::view_state::{render_pass, DashboardView};

/// Main application state
pub struct App {
    /// Settings the app was started with
    pub config: DashboardConfig,
    /// Data access layer, owns the fetch caches
    api: GithubApi,
    /// Editable username field
    pub input: UsernameField,
    /// Username of the last committed pass
    pub username: String,
    /// Current focus
    pub focus: Focus,
    /// Output of the last render pass
    pub view: DashboardView,
    /// Index into the project cards of the loaded view
    pub selected_project: usize,
    /// First visible row of the dashboard pane
    pub scroll: u16,
    /// One-line status shown in the sidebar
    pub status: Option<String>,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Terminal width in columns
    pub terminal_width: u16,
    /// Terminal height in rows
    pub terminal_height: u16,
}

impl App {
    /// Create an app whose username field holds the configured default.
    ///
    /// No request is made until [`App::run_pass`] is awaited.
    pub fn new(client: Arc<dyn HttpClient>, config: DashboardConfig) -> Self {
        let api = GithubApi::new(client, &config);
        let username = config.default_username.trim().to_string();

        Self {
            input: UsernameField::new(config.default_username.clone()),
            username,
            api,
            config,
            focus: Focus::default(),
            view: DashboardView::Prompt,
            selected_project: 0,
            scroll: 0,
            status: None,
            should_quit: false,
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// Switch to the loading state before a pass.
    ///
    /// Returns `false` when there is no username to load, in which case the
    /// prompt is shown directly.
    pub fn begin_pass(&mut self) -> bool {
        if self.username.is_empty() {
            self.view = DashboardView::Prompt;
            return false;
        }
        self.view = DashboardView::Loading {
            username: self.username.clone(),
        };
        true
    }

    /// Run one render pass for the committed username.
    pub async fn run_pass(&mut self) {
        let started = std::time::Instant::now();
        let view = render_pass(
            &mut self.api,
            &self.username,
            self.config.top_project_count,
            Local::now(),
        )
        .await;

        info!(
            username = %self.username,
            loaded = view.is_loaded(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "render pass finished"
        );

        self.view = view;
        self.clamp_selection();
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Number of project cards in the current view.
    pub fn project_count(&self) -> usize {
        self.view.dashboard().map_or(0, |d| d.projects.len())
    }

    /// URL of the selected project card.
    pub fn selected_project_url(&self) -> Option<&str> {
        self.view
            .dashboard()
            .and_then(|d| d.projects.get(self.selected_project))
            .map(|p| p.url.as_str())
    }

    /// Largest useful scroll offset for the current view and terminal size.
    pub fn max_scroll(&self) -> u16 {
        self.view.dashboard().map_or(0, |d| {
            crate::ui::dashboard::content_height(d).saturating_sub(self.terminal_height)
        })
    }

    /// Borrow the data access layer.
    pub fn api(&self) -> &GithubApi {
        &self.api
    }

    /// Update terminal dimensions
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
    }

    fn clamp_selection(&mut self) {
        let count = self.project_count();
        if self.selected_project >= count {
            self.selected_project = count.saturating_sub(1);
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("username", &self.username)
            .field("focus", &self.focus)
            .field("view_loaded", &self.view.is_loaded())
            .field("selected_project", &self.selected_project)
            .field("scroll", &self.scroll)
            .finish()
    }
}
