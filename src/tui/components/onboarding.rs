//! # Onboarding Screen
//!
//! Three slides. Next advances; on the last slide the button reads
//! "Start Exploring" and completes. Skip completes from any slide.
//! Completion is a plain navigation to home.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `OnboardingState` lives in `TuiState`
//! - `Onboarding` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::action::Action;
use crate::core::catalog::ONBOARDING_SLIDES;
use crate::core::navigation::NavigationIntent;
use crate::core::screen::ScreenId;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

#[derive(Debug, Default)]
pub struct OnboardingState {
    pub slide: usize,
}

impl OnboardingState {
    fn is_last(&self) -> bool {
        self.slide + 1 >= ONBOARDING_SLIDES.len()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_last() { "Start Exploring" } else { "Next" }
    }

    fn complete() -> Action {
        Action::Navigate(NavigationIntent::to(ScreenId::Home))
    }
}

impl EventHandler for OnboardingState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Submit | TuiEvent::CursorRight => {
                if self.is_last() {
                    Some(Self::complete())
                } else {
                    self.slide += 1;
                    None
                }
            }
            TuiEvent::CursorLeft => {
                self.slide = self.slide.saturating_sub(1);
                None
            }
            TuiEvent::InputChar('s') | TuiEvent::Tab => Some(Self::complete()),
            _ => None,
        }
    }
}

pub struct Onboarding<'a> {
    state: &'a OnboardingState,
    theme: Theme,
}

impl<'a> Onboarding<'a> {
    pub fn new(state: &'a OnboardingState, theme: Theme) -> Self {
        Self { state, theme }
    }

    fn dots(&self) -> Line<'static> {
        let spans: Vec<Span> = (0..ONBOARDING_SLIDES.len())
            .map(|i| {
                if i == self.state.slide {
                    Span::styled(" ━━ ", ratatui::style::Style::default().fg(self.theme.accent))
                } else {
                    Span::styled(" ─ ", self.theme.muted())
                }
            })
            .collect();
        Line::from(spans).centered()
    }
}

impl Component for Onboarding<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(slide) = ONBOARDING_SLIDES.get(self.state.slide) else {
            return;
        };

        let [skip_area, _, card_area, dots_area, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(7),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("Skip [s] ", self.theme.muted())).right_aligned()),
            skip_area,
        );

        let card = Paragraph::new(vec![
            Line::from(Span::styled(slide.title, self.theme.title())).centered(),
            Line::default(),
            Line::from(slide.description).centered(),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(ratatui::widgets::Padding::horizontal(2)));
        frame.render_widget(card, card_area);

        frame.render_widget(Paragraph::new(self.dots()), dots_area);

        let [button_rect] = Layout::horizontal([Constraint::Length(24)])
            .flex(Flex::Center)
            .areas(button_area);
        let button = Paragraph::new(Line::from(self.state.button_label()).centered())
            .style(self.theme.focus(true))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(ratatui::style::Style::default().fg(self.theme.accent)),
            );
        frame.render_widget(button, button_rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;

    #[test]
    fn test_next_walks_slides_then_completes() {
        let mut state = OnboardingState::default();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.slide, 2);
        assert_eq!(state.button_label(), "Start Exploring");
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(Action::Navigate(NavigationIntent::to(ScreenId::Home)))
        );
    }

    #[test]
    fn test_skip_completes_from_first_slide() {
        let mut state = OnboardingState::default();
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('s')),
            Some(Action::Navigate(NavigationIntent::to(ScreenId::Home)))
        );
    }

    #[test]
    fn test_left_stops_at_first_slide() {
        let mut state = OnboardingState::default();
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(state.slide, 0);
        assert_eq!(state.button_label(), "Next");
    }

    #[test]
    fn test_render_shows_slide() {
        let state = OnboardingState { slide: 1 };
        let text = render_to_string(80, 20, |f| {
            Onboarding::new(&state, Theme::for_mode(false)).render(f, f.area())
        });
        assert!(text.contains("Verified Local Guides"));
        assert!(text.contains("Next"));
        assert!(text.contains("Skip"));
    }
}
