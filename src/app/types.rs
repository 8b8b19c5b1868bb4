//! Type definitions for the application state.
//!
//! - [`Focus`] - Which UI component has focus
//! - [`AppEvent`] - Discrete input events fed to the dispatcher
//! - [`EventOutcome`] - What the event loop must do after dispatch

/// Represents which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The username text field
    #[default]
    Username,
    /// The "Refresh Data" button
    Refresh,
    /// The project card grid
    Projects,
}

impl Focus {
    /// Next component in Tab order.
    pub fn next(&self) -> Self {
        match self {
            Focus::Username => Focus::Refresh,
            Focus::Refresh => Focus::Projects,
            Focus::Projects => Focus::Username,
        }
    }

    /// Previous component in Tab order.
    pub fn prev(&self) -> Self {
        match self {
            Focus::Username => Focus::Projects,
            Focus::Refresh => Focus::Username,
            Focus::Projects => Focus::Refresh,
        }
    }
}

/// A discrete user input, already decoupled from the terminal key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Type a character into the username field
    Input(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    Home,
    End,
    ClearInput,
    /// Commit the username field
    Submit,
    /// Press "Refresh Data"
    Refresh,
    FocusNext,
    FocusPrev,
    SelectNext,
    SelectPrev,
    /// Scroll the dashboard pane
    ScrollUp,
    ScrollDown,
    /// Open the selected project card in the browser
    OpenSelected,
    /// Open the profile page in the browser
    OpenProfile,
    Quit,
    Resize(u16, u16),
}

/// Follow-up work requested by [`crate::app::App::handle_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing changed
    None,
    /// State changed, draw again
    Redraw,
    /// A render pass must run before the next draw
    RunPass,
    /// Open a URL in the system browser
    OpenUrl(String),
    Quit,
}
