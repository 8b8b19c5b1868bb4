//! Event dispatch for the App.

use tracing::debug;

use super::types::{AppEvent, EventOutcome, Focus};
use super::App;

/// Rows moved per PageUp/PageDown.
const SCROLL_STEP: i32 = 5;

impl App {
    /// Apply one input event and report what the event loop must do next.
    pub fn handle_event(&mut self, event: AppEvent) -> EventOutcome {
        match event {
            AppEvent::Quit => {
                self.should_quit = true;
                EventOutcome::Quit
            }
            AppEvent::Resize(width, height) => {
                self.update_terminal_dimensions(width, height);
                self.scroll = self.scroll.min(self.max_scroll());
                EventOutcome::Redraw
            }
            AppEvent::FocusNext => self.set_focus(self.focus.next()),
            AppEvent::FocusPrev => self.set_focus(self.focus.prev()),
            AppEvent::Submit => self.commit_username(),
            AppEvent::Refresh => {
                // A typed but uncommitted value is committed by the button
                // press, the same way leaving the field would.
                if self.input.value().trim() != self.username {
                    return self.commit_username();
                }
                self.status = Some("Refreshing data".to_string());
                EventOutcome::RunPass
            }
            AppEvent::ScrollUp => self.scroll_by(-SCROLL_STEP),
            AppEvent::ScrollDown => self.scroll_by(SCROLL_STEP),
            AppEvent::SelectNext => self.move_selection(1),
            AppEvent::SelectPrev => self.move_selection(-1),
            AppEvent::OpenSelected => match self.selected_project_url() {
                Some(url) => self.open(url.to_string()),
                None => EventOutcome::None,
            },
            AppEvent::OpenProfile => match self.profile_url() {
                Some(url) => self.open(url),
                None => EventOutcome::None,
            },
            _ => self.edit_input(event),
        }
    }

    fn edit_input(&mut self, event: AppEvent) -> EventOutcome {
        if self.focus != Focus::Username {
            return EventOutcome::None;
        }
        let changed = match event {
            AppEvent::Input(c) => {
                self.input.insert(c);
                true
            }
            AppEvent::Backspace => self.input.backspace(),
            AppEvent::Delete => self.input.delete(),
            AppEvent::CursorLeft => {
                self.input.move_left();
                true
            }
            AppEvent::CursorRight => {
                self.input.move_right();
                true
            }
            AppEvent::Home => {
                self.input.home();
                true
            }
            AppEvent::End => {
                self.input.end();
                true
            }
            AppEvent::ClearInput => {
                self.input.clear();
                true
            }
            _ => false,
        };
        if changed {
            EventOutcome::Redraw
        } else {
            EventOutcome::None
        }
    }

    fn set_focus(&mut self, focus: Focus) -> EventOutcome {
        self.focus = focus;
        self.input.set_focused(focus == Focus::Username);
        EventOutcome::Redraw
    }

    fn commit_username(&mut self) -> EventOutcome {
        let username = self.input.value().trim().to_string();
        debug!(%username, "username committed");
        if username != self.username {
            self.selected_project = 0;
            self.scroll = 0;
        }
        self.username = username;
        self.status = None;
        EventOutcome::RunPass
    }

    fn scroll_by(&mut self, delta: i32) -> EventOutcome {
        let max = i32::from(self.max_scroll());
        let next = (i32::from(self.scroll) + delta).clamp(0, max) as u16;
        if next == self.scroll {
            return EventOutcome::None;
        }
        self.scroll = next;
        EventOutcome::Redraw
    }

    fn move_selection(&mut self, delta: isize) -> EventOutcome {
        let count = self.project_count();
        if count == 0 {
            return EventOutcome::None;
        }
        let next = (self.selected_project as isize + delta).rem_euclid(count as isize);
        self.selected_project = next as usize;
        EventOutcome::Redraw
    }

    fn profile_url(&self) -> Option<String> {
        let dashboard = self.view.dashboard()?;
        Some(
            dashboard
                .profile_url
                .clone()
                .unwrap_or_else(|| format!("https://github.com/{}", dashboard.username)),
        )
    }

    fn open(&mut self, url: String) -> EventOutcome {
        self.status = Some(format!("Opening {}", url));
        EventOutcome::OpenUrl(url)
    }
}
