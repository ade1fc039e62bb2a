//! # Chatbot Screen
//!
//! Greeting, transcript, quick questions and an input line.
//!
//! ```text
//! ┌ greeting ─────────────────────────┐
//! │ transcript (ScrollView)           │
//! │ quick questions (empty chat only) │
//! └ input ────────────────────────────┘
//! ```
//!
//! Quick questions only fill the input; Enter is what sends. The transcript
//! itself lives in core (`App::chat`); this state only holds the input,
//! the quick-question cursor and the scroll position.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::action::Action;
use crate::core::chat::{ChatTranscript, GREETING, QUICK_QUESTIONS};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::chat_bubble::ChatBubble;
use crate::tui::components::text_input::{InputEvent, TextInput};
use crate::tui::components::widgets::ListCursor;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

pub struct ChatbotState {
    pub input: TextInput,
    pub quick: ListCursor,
    pub scroll_state: ScrollViewState,
    /// Follow new messages until the user scrolls up
    pub stick_to_bottom: bool,
    /// Prop synced from `App::chat` each frame
    pub quick_questions_visible: bool,
}

impl Default for ChatbotState {
    fn default() -> Self {
        let mut input = TextInput::new("Ask me anything about Tangier...");
        input.title = " Message ".to_string();
        Self {
            input,
            quick: ListCursor::default(),
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true,
            quick_questions_visible: true,
        }
    }
}

impl ChatbotState {
    pub fn sync(&mut self, chat: &ChatTranscript) {
        self.quick_questions_visible = chat.shows_quick_questions();
    }
}

impl EventHandler for ChatbotState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Escape => return Some(Action::Back),
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
                return None;
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
                return None;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                return None;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                return None;
            }
            TuiEvent::CursorHome | TuiEvent::CursorEnd if self.input.buffer.is_empty() => {
                self.stick_to_bottom = matches!(event, TuiEvent::CursorEnd);
                if self.stick_to_bottom {
                    self.scroll_state.scroll_to_bottom();
                } else {
                    self.scroll_state.scroll_to_top();
                }
                return None;
            }
            _ => {}
        }

        if self.quick_questions_visible {
            match event {
                TuiEvent::CursorUp => {
                    self.quick.prev(QUICK_QUESTIONS.len());
                    return None;
                }
                TuiEvent::CursorDown => {
                    self.quick.next(QUICK_QUESTIONS.len());
                    return None;
                }
                TuiEvent::Tab => {
                    if let Some(question) = QUICK_QUESTIONS.get(self.quick.index) {
                        self.input.set_text(question);
                    }
                    return None;
                }
                _ => {}
            }
        }

        match self.input.handle_event(event)? {
            InputEvent::Submit(text) => {
                self.stick_to_bottom = true;
                Some(Action::SendChat(text))
            }
            InputEvent::ContentChanged => None,
        }
    }
}

pub struct Chatbot<'a> {
    state: &'a mut ChatbotState,
    chat: &'a ChatTranscript,
    theme: Theme,
}

impl<'a> Chatbot<'a> {
    pub fn new(state: &'a mut ChatbotState, chat: &'a ChatTranscript, theme: Theme) -> Self {
        Self { state, chat, theme }
    }

    fn render_transcript(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1);
        let heights: Vec<u16> = self
            .chat
            .messages
            .iter()
            .map(|m| ChatBubble::calculate_height(m, content_width))
            .collect();
        let total_height: u16 = heights.iter().sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y = 0;
        for (message, height) in self.chat.messages.iter().zip(heights) {
            scroll_view.render_widget(
                ChatBubble::new(message, self.theme),
                Rect::new(0, y, content_width, height),
            );
            y += height;
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        } else if total_height.saturating_sub(self.state.scroll_state.offset().y) <= area.height {
            self.state.stick_to_bottom = true;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }

    fn render_quick_questions(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            "Quick questions (↑/↓ choose, Tab to use):",
            self.theme.muted(),
        ))];
        for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("  › {question}"),
                self.theme.focus(self.state.quick.is(i)),
            )));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Component for Chatbot<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let quick_height = if self.state.quick_questions_visible {
            QUICK_QUESTIONS.len() as u16 + 1
        } else {
            0
        };
        let [greeting_area, transcript_area, quick_area, input_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(quick_height),
            Constraint::Length(3),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("🤖 AI Guide", self.theme.title())),
                Line::from(Span::styled(GREETING, self.theme.muted())),
            ])
            .wrap(Wrap { trim: true }),
            greeting_area,
        );

        self.render_transcript(frame, transcript_area);

        if self.state.quick_questions_visible {
            self.render_quick_questions(frame, quick_area);
        }

        self.state.input.theme = self.theme;
        self.state.input.render(frame, input_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;

    fn type_text(state: &mut ChatbotState, text: &str) {
        for c in text.chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_enter_sends_text() {
        let mut state = ChatbotState::default();
        type_text(&mut state, "Where to eat?");
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(Action::SendChat("Where to eat?".to_string()))
        );
        assert!(state.input.buffer.is_empty());
    }

    #[test]
    fn test_blank_enter_sends_nothing() {
        let mut state = ChatbotState::default();
        type_text(&mut state, "   ");
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_quick_question_fills_input_without_sending() {
        let mut state = ChatbotState::default();
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.handle_event(&TuiEvent::Tab), None);
        assert_eq!(state.input.buffer, "Safety tips");
    }

    #[test]
    fn test_quick_questions_hidden_once_chat_has_messages() {
        let mut chat = ChatTranscript::new();
        chat.send("hi");
        let mut state = ChatbotState::default();
        state.sync(&chat);
        state.handle_event(&TuiEvent::Tab);
        assert!(state.input.buffer.is_empty());
    }

    #[test]
    fn test_escape_goes_back() {
        let mut state = ChatbotState::default();
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(Action::Back));
    }

    #[test]
    fn test_render_empty_and_with_messages() {
        let chat = ChatTranscript::new();
        let mut state = ChatbotState::default();
        state.sync(&chat);
        let text = render_to_string(80, 24, |f| {
            Chatbot::new(&mut state, &chat, Theme::for_mode(false)).render(f, f.area())
        });
        assert!(text.contains("AI Guide"));
        assert!(text.contains("Best time to visit Tangier?"));

        let mut chat = ChatTranscript::new();
        chat.send("Where is the medina?");
        chat.append_bot_reply();
        state.sync(&chat);
        let text = render_to_string(80, 24, |f| {
            Chatbot::new(&mut state, &chat, Theme::for_mode(false)).render(f, f.area())
        });
        assert!(text.contains("Where is the medina?"));
        assert!(!text.contains("Quick questions"));
    }
}
