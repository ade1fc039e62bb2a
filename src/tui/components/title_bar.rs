//! # TitleBar Component
//!
//! One-line header above every screen except the splash.
//!
//! Purely presentational: all fields are props copied from `App` each frame.
//! The status message is dropped first when the terminal is too narrow for
//! everything.

use crate::core::language::{Label, Language};
use crate::tui::component::Component;
use crate::tui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub struct TitleBar {
    pub title: String,
    pub language: Language,
    pub status_message: String,
    /// Whether the current screen has somewhere to go back to
    pub can_go_back: bool,
    pub theme: Theme,
}

impl TitleBar {
    pub fn new(
        title: impl Into<String>,
        language: Language,
        status_message: impl Into<String>,
        can_go_back: bool,
        theme: Theme,
    ) -> Self {
        Self {
            title: title.into(),
            language,
            status_message: status_message.into(),
            can_go_back,
            theme,
        }
    }

    fn left(&self) -> Line<'static> {
        let mut spans = Vec::new();
        if self.can_go_back {
            spans.push(Span::styled(
                format!("← {} ", self.language.label(Label::Back)),
                self.theme.muted(),
            ));
        }
        spans.push(Span::styled(self.title.clone(), self.theme.title()));
        Line::from(spans)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let left = self.left();
        let badge = format!(" {} ", self.language.short_label());
        let status = if self.status_message.is_empty() {
            String::new()
        } else {
            format!("{} | ", self.status_message)
        };

        let fixed = left.width() + badge.width();
        let right = if fixed + status.width() <= area.width as usize {
            Line::from(vec![
                Span::styled(status, self.theme.muted()),
                Span::styled(badge, self.theme.chip(true, false)),
            ])
        } else {
            Line::from(Span::styled(badge, self.theme.chip(true, false)))
        };

        let [left_area, right_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(right.width() as u16),
        ])
        .areas(area);
        frame.render_widget(Paragraph::new(left), left_area);
        frame.render_widget(Paragraph::new(right).right_aligned(), right_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;

    fn draw(bar: &mut TitleBar, width: u16) -> String {
        render_to_string(width, 1, |f| bar.render(f, f.area()))
    }

    #[test]
    fn test_shows_title_status_and_language() {
        let mut bar = TitleBar::new(
            "Certified Guides",
            Language::En,
            "Dark mode on",
            true,
            Theme::for_mode(false),
        );
        let text = draw(&mut bar, 80);
        assert!(text.contains("← Back"));
        assert!(text.contains("Certified Guides"));
        assert!(text.contains("Dark mode on"));
        assert!(text.contains(" EN "));
    }

    #[test]
    fn test_back_hint_follows_language() {
        let mut bar = TitleBar::new("Guides", Language::Fr, "", true, Theme::for_mode(false));
        let text = draw(&mut bar, 60);
        assert!(text.contains("Retour"));
        assert!(text.contains(" FR "));
    }

    #[test]
    fn test_no_back_hint_on_home() {
        let mut bar = TitleBar::new("Tangier Live", Language::En, "", false, Theme::for_mode(true));
        assert!(!draw(&mut bar, 60).contains("Back"));
    }

    #[test]
    fn test_narrow_terminal_drops_status() {
        let mut bar = TitleBar::new(
            "Tangier Live",
            Language::En,
            "Welcome to Tangier!",
            false,
            Theme::for_mode(false),
        );
        let text = draw(&mut bar, 24);
        assert!(text.contains("Tangier Live"));
        assert!(!text.contains("Welcome"));
        assert!(text.contains("EN"));
    }
}
