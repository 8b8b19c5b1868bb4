//! Username field built on tui-textarea.
//!
//! [`UsernameField`] keeps a [`TextArea`] to a single line and exposes the
//! handful of edits the sidebar binds keys to. The text area scrolls
//! horizontally and draws its own cursor.

use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Single-line editable username.
#[derive(Debug, Clone)]
pub struct UsernameField {
    textarea: TextArea<'static>,
}

impl Default for UsernameField {
    fn default() -> Self {
        Self::new("")
    }
}

impl UsernameField {
    /// Create a field holding `value` with the cursor at the end.
    pub fn new(value: impl Into<String>) -> Self {
        let mut textarea = TextArea::new(vec![value.into()]);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("GitHub username");
        textarea.move_cursor(CursorMove::End);

        let mut field = Self { textarea };
        field.set_focused(true);
        field
    }

    /// Current text.
    pub fn value(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Cursor column in characters.
    pub fn cursor(&self) -> usize {
        self.textarea.cursor().1
    }

    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    /// Widget to render.
    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Show the cursor only while the field has focus.
    pub fn set_focused(&mut self, focused: bool) {
        let style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(style);
    }

    /// Insert a character at the cursor. Line breaks are ignored.
    pub fn insert(&mut self, c: char) {
        if c == '\n' || c == '\r' {
            return;
        }
        self.textarea.insert_char(c);
    }

    /// Remove the character left of the cursor.
    pub fn backspace(&mut self) -> bool {
        self.textarea.delete_char()
    }

    /// Remove the character under the cursor.
    pub fn delete(&mut self) -> bool {
        self.textarea.delete_next_char()
    }

    pub fn move_left(&mut self) {
        self.textarea.move_cursor(CursorMove::Back);
    }

    pub fn move_right(&mut self) {
        self.textarea.move_cursor(CursorMove::Forward);
    }

    pub fn home(&mut self) {
        self.textarea.move_cursor(CursorMove::Head);
    }

    pub fn end(&mut self) {
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn clear(&mut self) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
    }
}
