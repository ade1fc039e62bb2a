//! # TextInput Component
//!
//! Single-line text field used by the chatbot and the discover search box.
//!
//! The buffer and cursor are internal state. Title, placeholder, focus and
//! theme are props refreshed by the owning screen before each render.
//! When the text is wider than the field, the view scrolls horizontally
//! so the cursor stays visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// High-level events emitted by the TextInput
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Enter pressed on non-blank text; the buffer is cleared
    Submit(String),
    ContentChanged,
}

pub struct TextInput {
    pub buffer: String,
    /// Byte offset into `buffer`, always on a char boundary
    cursor: usize,
    pub title: String,
    pub placeholder: &'static str,
    pub focused: bool,
    pub theme: Theme,
}

impl TextInput {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            title: String::new(),
            placeholder,
            focused: true,
            theme: Theme::for_mode(false),
        }
    }

    /// Replace the contents and put the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .chars()
            .next_back()
            .map(|c| self.cursor - c.len_utf8())
    }

    fn next_boundary(&self) -> Option<usize> {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    /// Byte offset of the first visible char so the cursor fits in `width` columns.
    fn view_start(&self, width: usize) -> usize {
        if width == 0 {
            return self.cursor;
        }
        let mut start = 0;
        while self.buffer[start..self.cursor].width() >= width {
            match self.buffer[start..].chars().next() {
                Some(c) => start += c.len_utf8(),
                None => break,
            }
        }
        start
    }
}

impl Component for TextInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            ratatui::style::Style::default().fg(self.theme.accent)
        } else {
            self.theme.border()
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title.as_str());
        let inner = block.inner(area);

        let start = self.view_start(inner.width as usize);
        let line = if self.buffer.is_empty() {
            Line::from(Span::styled(
                self.placeholder,
                self.theme.muted().add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::raw(&self.buffer[start..]))
        };

        frame.render_widget(Paragraph::new(line).block(block), area);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let column = self.buffer[start..self.cursor].width() as u16;
            frame.set_cursor_position((inner.x + column.min(inner.width - 1), inner.y));
        }
    }
}

impl EventHandler for TextInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let flat = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                let prev = self.prev_boundary()?;
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                let next = self.next_boundary()?;
                self.buffer.drain(self.cursor..next);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary()?;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary()?;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if self.buffer.trim().is_empty() {
                    return None;
                }
                let text = std::mem::take(&mut self.buffer);
                self.cursor = 0;
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new("Ask me anything...");
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = typed("ab");
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("café");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "caé");
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "ca");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new("");
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_submit_clears_buffer() {
        let mut input = typed("hello");
        match input.handle_event(&TuiEvent::Submit) {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "hello"),
            other => panic!("Expected Submit event, got {:?}", other),
        }
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut input = typed("   ");
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.buffer, "   ");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = TextInput::new("");
        input.handle_event(&TuiEvent::Paste("one\ntwo".to_string()));
        assert_eq!(input.buffer, "one two");
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut input = TextInput::new("");
        input.set_text("Safety tips");
        input.handle_event(&TuiEvent::InputChar('?'));
        assert_eq!(input.buffer, "Safety tips?");
    }

    #[test]
    fn test_render_placeholder_and_scroll() {
        let mut input = TextInput::new("Ask me anything...");
        let text = render_to_string(30, 3, |f| input.render(f, f.area()));
        assert!(text.contains("Ask me anything..."));

        let mut input = typed("the quick brown fox jumps over the lazy dog");
        let text = render_to_string(20, 3, |f| input.render(f, f.area()));
        assert!(text.contains("lazy dog"));
        assert!(!text.contains("quick"));
    }
}
