use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::chat::{ChatMessage, Sender};
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// One transcript entry. Transient: built fresh each frame by the chatbot
/// screen, holds no state.
///
/// The [`calculate_height`](Self::calculate_height) method predicts rendered
/// height with `textwrap` options matching `Paragraph` wrapping, so the
/// parent can size its scroll canvas before rendering anything.
#[derive(Clone, Copy)]
pub struct ChatBubble<'a> {
    pub message: &'a ChatMessage,
    pub theme: Theme,
}

impl<'a> ChatBubble<'a> {
    pub fn new(message: &'a ChatMessage, theme: Theme) -> Self {
        Self { message, theme }
    }

    pub fn calculate_height(message: &ChatMessage, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let content = message.text.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }

    fn author(&self) -> &'static str {
        match self.message.sender {
            Sender::User => "You",
            Sender::Bot => "AI Guide",
        }
    }
}

impl Widget for ChatBubble<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (text_style, border_style) = match self.message.sender {
            Sender::User => (
                Style::default().fg(self.theme.text),
                Style::default().fg(self.theme.accent),
            ),
            Sender::Bot => (
                Style::default().fg(self.theme.text),
                Style::default().fg(self.theme.positive),
            ),
        };

        let time = self.message.sent_at.format("%H:%M").to_string();
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H))
            .title_bottom(
                Line::from(Span::styled(time, self.theme.muted().add_modifier(Modifier::DIM)))
                    .right_aligned(),
            );
        block = match self.message.sender {
            Sender::User => block.title(Line::from(self.author()).right_aligned()),
            Sender::Bot => block.title(self.author()),
        };

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.message.text.trim())
            .style(text_style)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

impl Component for ChatBubble<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
