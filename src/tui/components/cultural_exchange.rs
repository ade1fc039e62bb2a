//! # Cultural Exchange Screen
//!
//! Community Q&A. ←/→ picks a tag chip ("Trending" shows everything),
//! ↑/↓ moves between posts.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::action::Action;
use crate::core::catalog::{Post, all_tags, filter_posts};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::widgets::{ListCursor, chip_line};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

#[derive(Debug, Default)]
pub struct CulturalState {
    /// Index into `tag_options()`; 0 is "Trending"
    pub tag: ListCursor,
    pub post: ListCursor,
}

impl CulturalState {
    pub fn tag_options() -> Vec<Option<&'static str>> {
        std::iter::once(None)
            .chain(all_tags().into_iter().map(Some))
            .collect()
    }

    pub fn active_tag(&self) -> Option<&'static str> {
        Self::tag_options().get(self.tag.index).copied().flatten()
    }

    pub fn visible(&self) -> Vec<&'static Post> {
        filter_posts(self.active_tag())
    }
}

impl EventHandler for CulturalState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let tags = Self::tag_options().len();
        match event {
            TuiEvent::CursorRight | TuiEvent::Tab => {
                self.tag.next(tags);
                self.post = ListCursor::default();
            }
            TuiEvent::CursorLeft | TuiEvent::BackTab => {
                self.tag.prev(tags);
                self.post = ListCursor::default();
            }
            TuiEvent::CursorDown => self.post.next(self.visible().len()),
            TuiEvent::CursorUp => self.post.prev(self.visible().len()),
            TuiEvent::Escape => return Some(Action::Back),
            _ => {}
        }
        None
    }
}

pub struct CulturalExchange<'a> {
    state: &'a CulturalState,
    theme: Theme,
}

/// First post to draw so that the focused one fits whole, pulling in as many
/// earlier posts as there is room for.
fn first_visible(heights: &[u16], focused: usize, available: u16) -> usize {
    let mut first = focused.min(heights.len().saturating_sub(1));
    let mut used = heights.get(first).copied().unwrap_or(0);
    while first > 0 && used + heights[first - 1] <= available {
        first -= 1;
        used += heights[first];
    }
    first
}

impl<'a> CulturalExchange<'a> {
    pub fn new(state: &'a CulturalState, theme: Theme) -> Self {
        Self { state, theme }
    }

    fn post_lines(&self, post: &'static Post) -> Vec<Line<'static>> {
        let theme = &self.theme;
        let mut author = vec![Span::styled(
            post.author,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )];
        if post.is_guide {
            author.push(Span::styled(" [Local Guide]", theme.badge(true)));
        }
        author.push(Span::styled(format!(" · {}", post.timestamp), theme.muted()));

        let mut lines = vec![
            Line::from(author),
            Line::from(Span::styled(
                post.question,
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(answer) = post.answer {
            lines.push(Line::from(Span::styled(format!("↳ {answer}"), theme.muted())));
        }
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{t}")).collect();
        lines.push(Line::from(vec![
            Span::styled(tags.join(" "), Style::default().fg(theme.accent)),
            Span::styled(
                format!("   ♥ {}  💬 {}", post.likes, post.replies),
                theme.muted(),
            ),
        ]));
        lines
    }
}

impl Component for CulturalExchange<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [chips_area, posts_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let options = CulturalState::tag_options();
        let labels = options.iter().map(|o| o.unwrap_or("Trending"));
        frame.render_widget(
            Paragraph::new(chip_line(labels, self.state.tag.index, &self.theme))
                .wrap(Wrap { trim: false }),
            chips_area,
        );

        let width = posts_area.width.saturating_sub(2);
        let cards: Vec<(Paragraph, u16)> = self
            .state
            .visible()
            .into_iter()
            .enumerate()
            .map(|(i, post)| {
                let card = Paragraph::new(self.post_lines(post))
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::bordered()
                            .border_type(BorderType::Rounded)
                            .border_style(if self.state.post.is(i) {
                                Style::default().fg(self.theme.accent)
                            } else {
                                self.theme.border()
                            }),
                    );
                let height = card.line_count(width) as u16;
                (card, height)
            })
            .collect();

        let heights: Vec<u16> = cards.iter().map(|(_, h)| *h).collect();
        let first = first_visible(&heights, self.state.post.index, posts_area.height);

        let bottom = posts_area.y + posts_area.height;
        let mut y = posts_area.y;
        for (card, height) in cards.into_iter().skip(first) {
            if y >= bottom {
                break;
            }
            let rect = Rect::new(posts_area.x, y, posts_area.width, height.min(bottom - y));
            frame.render_widget(card, rect);
            y += height;
        }
    }
}
