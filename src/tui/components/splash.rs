//! # Splash Screen
//!
//! Brand title, tagline and a three-dot loader. The hand-off to onboarding
//! is driven by the session's splash timer, not by this component.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const TAGLINE: &str = "Discover Tangier, authentically and safely";

pub struct Splash {
    /// Animation frame counter from the event loop
    pub tick: usize,
    pub theme: Theme,
}

impl Splash {
    pub fn new(tick: usize, theme: Theme) -> Self {
        Self { tick, theme }
    }

    /// One dot is lit at a time, moving left to right.
    fn loader(&self) -> Line<'static> {
        let lit = (self.tick / 4) % 3;
        let spans: Vec<Span> = (0..3)
            .map(|i| {
                let style = if i == lit {
                    Style::default().fg(self.theme.accent)
                } else {
                    self.theme.muted().add_modifier(Modifier::DIM)
                };
                Span::styled(" ● ", style)
            })
            .collect();
        Line::from(spans).centered()
    }
}

impl Component for Splash {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, tagline_area, _, loader_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("Tangier Live", self.theme.title())).centered()),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(TAGLINE, self.theme.muted())).centered()),
            tagline_area,
        );
        frame.render_widget(Paragraph::new(self.loader()), loader_area);
    }
}
