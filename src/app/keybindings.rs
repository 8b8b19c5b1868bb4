//! Default keybindings.
//!
//! Maps terminal key events to [`AppEvent`]s depending on which component
//! has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::types::{AppEvent, Focus};

/// Translate a key press into an application event.
///
/// Returns `None` for keys with no binding in the current focus.
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<AppEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keybinds (always active)
    match key.code {
        KeyCode::Char('c') if ctrl => return Some(AppEvent::Quit),
        KeyCode::Char('r') if ctrl => return Some(AppEvent::Refresh),
        KeyCode::F(5) => return Some(AppEvent::Refresh),
        KeyCode::Esc => return Some(AppEvent::Quit),
        KeyCode::Tab => return Some(AppEvent::FocusNext),
        KeyCode::BackTab => return Some(AppEvent::FocusPrev),
        KeyCode::PageUp => return Some(AppEvent::ScrollUp),
        KeyCode::PageDown => return Some(AppEvent::ScrollDown),
        _ => {}
    }

    match focus {
        Focus::Username => match key.code {
            KeyCode::Char('u') if ctrl => Some(AppEvent::ClearInput),
            KeyCode::Char(c) if !ctrl => Some(AppEvent::Input(c)),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Delete => Some(AppEvent::Delete),
            KeyCode::Left => Some(AppEvent::CursorLeft),
            KeyCode::Right => Some(AppEvent::CursorRight),
            KeyCode::Home => Some(AppEvent::Home),
            KeyCode::End => Some(AppEvent::End),
            KeyCode::Enter => Some(AppEvent::Submit),
            _ => None,
        },
        Focus::Refresh => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(AppEvent::Refresh),
            KeyCode::Char('p') => Some(AppEvent::OpenProfile),
            KeyCode::Char('q') => Some(AppEvent::Quit),
            _ => None,
        },
        Focus::Projects => match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                Some(AppEvent::SelectNext)
            }
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                Some(AppEvent::SelectPrev)
            }
            KeyCode::Enter | KeyCode::Char('o') => Some(AppEvent::OpenSelected),
            KeyCode::Char('p') => Some(AppEvent::OpenProfile),
            KeyCode::Char('q') => Some(AppEvent::Quit),
            _ => None,
        },
    }
}
