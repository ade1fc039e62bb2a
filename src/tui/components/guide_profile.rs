//! # Guide Profile Screen
//!
//! Full profile of the guide picked on the guides screen. The caller
//! resolves the guide through `NavigationState::guide_profile_target`; when
//! that yields nothing this screen draws nothing at all.
//!
//! The booking bar is display-only.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::action::Action;
use crate::core::catalog::Guide;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::widgets::rating_span;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

#[derive(Debug, Default)]
pub struct GuideProfileState {
    pub scroll: u16,
}

impl EventHandler for GuideProfileState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            TuiEvent::ScrollPageUp => self.scroll = self.scroll.saturating_sub(10),
            TuiEvent::ScrollPageDown => self.scroll = self.scroll.saturating_add(10),
            TuiEvent::Submit => debug!("Booking is not available"),
            TuiEvent::Escape => return Some(Action::Back),
            _ => {}
        }
        None
    }
}

pub fn booking_label(guide: &Guide) -> String {
    format!("${}/hour — Book Securely", guide.price_per_hour)
}

pub struct GuideProfile<'a> {
    state: &'a mut GuideProfileState,
    guide: Option<&'static Guide>,
    theme: Theme,
}

impl<'a> GuideProfile<'a> {
    pub fn new(state: &'a mut GuideProfileState, guide: Option<&'static Guide>, theme: Theme) -> Self {
        Self { state, guide, theme }
    }

    fn section(&self, title: &'static str) -> [Line<'static>; 2] {
        [Line::default(), Line::from(Span::styled(title, self.theme.title()))]
    }

    fn body(&self, guide: &'static Guide) -> Vec<Line<'static>> {
        let theme = &self.theme;
        let mut header = vec![Span::styled(
            guide.name,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )];
        if guide.verified {
            header.push(Span::styled("  ✓ Verified", theme.badge(true)));
        }

        let mut lines = vec![
            Line::from(header),
            Line::from(vec![
                rating_span(guide.rating, theme),
                Span::styled(format!(" · {} reviews", guide.review_count), theme.muted()),
            ]),
            Line::from(Span::styled(
                format!("🗣 {}", guide.languages.join(", ")),
                theme.muted(),
            )),
        ];

        lines.extend(self.section("About"));
        lines.push(Line::from(guide.bio));

        lines.extend(self.section("Expertise"));
        lines.push(Line::from(
            guide
                .expertise
                .iter()
                .flat_map(|tag| [Span::styled(format!(" {tag} "), theme.chip(false, false)), Span::raw(" ")])
                .collect::<Vec<_>>(),
        ));

        lines.extend(self.section("Certifications"));
        for cert in guide.certifications {
            lines.push(Line::from(vec![
                Span::styled("✓ ", theme.badge(true)),
                Span::raw(*cert),
            ]));
        }

        lines.extend(self.section("Tours"));
        for tour in guide.tours {
            lines.push(Line::from(vec![
                Span::raw(tour.name),
                Span::styled(format!(" · {}", tour.duration), theme.muted()),
                Span::styled(format!(" · ${}", tour.price), theme.title()),
            ]));
        }

        lines.extend(self.section("Reviews"));
        for review in guide.reviews {
            lines.push(Line::from(vec![
                Span::styled(
                    "★".repeat(review.rating as usize),
                    Style::default().fg(theme.warning),
                ),
                Span::raw(format!(" {}", review.author)),
                Span::styled(format!(" · {}", review.date), theme.muted()),
            ]));
            lines.push(Line::from(Span::styled(
                review.comment,
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
        lines
    }
}

impl Component for GuideProfile<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(guide) = self.guide else {
            return;
        };

        let [body_area, booking_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

        let body = Paragraph::new(self.body(guide))
            .wrap(Wrap { trim: true })
            .scroll((self.state.scroll, 0));
        let max_scroll = (body.line_count(body_area.width) as u16).saturating_sub(body_area.height);
        self.state.scroll = self.state.scroll.min(max_scroll);
        frame.render_widget(body.scroll((self.state.scroll, 0)), body_area);

        let booking = Paragraph::new(Line::from(booking_label(guide)).centered())
            .style(self.theme.focus(true))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.accent)),
            );
        frame.render_widget(booking, booking_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::find_guide;
    use crate::core::navigation::GuideId;
    use crate::test_support::render_to_string;

    #[test]
    fn test_booking_does_nothing() {
        let mut state = GuideProfileState::default();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(Action::Back));
    }

    #[test]
    fn test_render_profile() {
        let guide = find_guide(&GuideId::new("1"));
        let mut state = GuideProfileState::default();
        let text = render_to_string(100, 40, |f| {
            GuideProfile::new(&mut state, guide, Theme::for_mode(false)).render(f, f.area())
        });
        assert!(text.contains("Ahmed El Mansouri"));
        assert!(text.contains("Tourism Board Certified"));
        assert!(text.contains("Historical Medina Walk"));
        assert!(text.contains("$45/hour — Book Securely"));
    }

    #[test]
    fn test_missing_guide_renders_nothing() {
        let mut state = GuideProfileState::default();
        let text = render_to_string(40, 10, |f| {
            GuideProfile::new(&mut state, None, Theme::for_mode(false)).render(f, f.area())
        });
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_scroll_is_clamped_on_render() {
        let guide = find_guide(&GuideId::new("1"));
        let mut state = GuideProfileState { scroll: 500 };
        render_to_string(100, 40, |f| {
            GuideProfile::new(&mut state, guide, Theme::for_mode(false)).render(f, f.area())
        });
        assert!(state.scroll < 500);
    }
}
