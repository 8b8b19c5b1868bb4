//! Terminal management with an RAII guard for cleanup.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen and restores it when dropped, whether the event loop returns
//! normally or with an error. Panics are covered separately by
//! [`setup_panic_hook`].
//!
//! # Example
//!
//! ```no_run
//! use ghdash::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     // Terminal is restored when `manager` is dropped
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Size, Terminal};
use std::io::{self, Stdout};

/// Terminal type used by the binary.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal on drop. Cleanup runs at most once.
struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the UI.
pub struct TerminalManager {
    terminal: Tui,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and clear it.
    ///
    /// # Errors
    ///
    /// Returns an error if any terminal command fails. Whatever was already
    /// enabled is rolled back first.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(err) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(err.into());
        }

        // From here on the guard restores the terminal on any early return
        let guard = TerminalGuard { cleaned_up: false };
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    /// Get a mutable reference to the underlying terminal.
    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Current terminal size.
    pub fn size(&self) -> Result<Size> {
        Ok(self.terminal.size()?)
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
