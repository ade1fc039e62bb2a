//! # Guides Screen
//!
//! Certified guide list with an expertise filter panel. Enter on a guide
//! navigates to its profile carrying the guide's id.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, List, ListItem, ListState, Paragraph};

use crate::core::action::Action;
use crate::core::catalog::{Guide, all_expertise, filter_guides};
use crate::core::navigation::NavigationIntent;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::widgets::{ListCursor, rating_span};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

const CARD_HEIGHT: u16 = 5;

#[derive(Debug, Default)]
pub struct GuidesState {
    pub cursor: ListCursor,
    /// `None` is "All"
    pub filter: Option<&'static str>,
    pub filter_open: bool,
    /// Index into `filter_options()`
    pub filter_cursor: ListCursor,
}

impl GuidesState {
    /// "All" first, then every distinct expertise tag.
    pub fn filter_options() -> Vec<Option<&'static str>> {
        std::iter::once(None)
            .chain(all_expertise().into_iter().map(Some))
            .collect()
    }

    pub fn visible(&self) -> Vec<&'static Guide> {
        filter_guides(self.filter)
    }

    pub fn focused_guide(&self) -> Option<&'static Guide> {
        self.visible().get(self.cursor.index).copied()
    }

    fn handle_filter_panel(&mut self, event: &TuiEvent) {
        let options = Self::filter_options();
        match event {
            TuiEvent::CursorUp => self.filter_cursor.prev(options.len()),
            TuiEvent::CursorDown => self.filter_cursor.next(options.len()),
            TuiEvent::Submit => {
                if let Some(option) = options.get(self.filter_cursor.index) {
                    self.filter = *option;
                    self.cursor.clamp(self.visible().len());
                }
                self.filter_open = false;
            }
            TuiEvent::Escape | TuiEvent::InputChar('f') => self.filter_open = false,
            _ => {}
        }
    }
}

impl EventHandler for GuidesState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        if self.filter_open {
            self.handle_filter_panel(event);
            return None;
        }

        let count = self.visible().len();
        match event {
            TuiEvent::CursorUp => self.cursor.prev(count),
            TuiEvent::CursorDown => self.cursor.next(count),
            TuiEvent::InputChar('f') => {
                let current = Self::filter_options()
                    .iter()
                    .position(|o| *o == self.filter)
                    .unwrap_or(0);
                self.filter_cursor = ListCursor { index: current };
                self.filter_open = true;
            }
            TuiEvent::Submit => {
                return self
                    .focused_guide()
                    .map(|g| Action::Navigate(NavigationIntent::to_guide(g.guide_id())));
            }
            TuiEvent::Escape => return Some(Action::Back),
            _ => {}
        }
        None
    }
}

pub struct Guides<'a> {
    state: &'a GuidesState,
    theme: Theme,
}

impl<'a> Guides<'a> {
    pub fn new(state: &'a GuidesState, theme: Theme) -> Self {
        Self { state, theme }
    }

    fn card(&self, guide: &Guide, focused: bool) -> Paragraph<'static> {
        let theme = &self.theme;
        let mut header = vec![Span::styled(guide.name, theme.focus(focused))];
        if guide.verified {
            header.push(Span::styled(" ✓ Verified", theme.badge(true)));
        }
        header.push(Span::raw("  "));
        header.push(rating_span(guide.rating, theme));
        header.push(Span::styled(
            format!(" ({} reviews)", guide.review_count),
            theme.muted(),
        ));

        let expertise: Vec<&str> = guide.expertise.iter().take(2).copied().collect();
        let (availability, available) = if guide.available {
            ("● Available", true)
        } else {
            ("● Busy", false)
        };

        let lines = vec![
            Line::from(header),
            Line::from(Span::styled(
                format!("🗣 {}", guide.languages.join(", ")),
                theme.muted(),
            )),
            Line::from(vec![
                Span::raw(expertise.join(" · ")),
                Span::raw("   "),
                Span::styled(format!("${}/hour", guide.price_per_hour), theme.title()),
                Span::raw("   "),
                Span::styled(availability, theme.badge(available)),
            ]),
        ];

        let border = if focused {
            Style::default().fg(theme.accent)
        } else {
            theme.border()
        };
        Paragraph::new(lines).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border),
        )
    }

    fn render_filter_panel(&self, frame: &mut Frame, area: Rect) {
        let options = GuidesState::filter_options();
        let width = 26.min(area.width);
        let height = (options.len() as u16 + 2).min(area.height);
        let panel = Rect::new(area.x + area.width - width, area.y, width, height);
        frame.render_widget(Clear, panel);

        let items: Vec<ListItem> = options
            .iter()
            .map(|option| {
                let label = option.unwrap_or("All");
                let marker = if *option == self.state.filter { "● " } else { "  " };
                ListItem::new(format!("{marker}{label}"))
            })
            .collect();
        let mut list_state = ListState::default().with_selected(Some(self.state.filter_cursor.index));
        let list = List::new(items)
            .style(self.theme.base())
            .highlight_style(self.theme.focus(true))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.accent))
                    .title(" Expertise "),
            );
        frame.render_stateful_widget(list, panel, &mut list_state);
    }
}

impl Component for Guides<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, list_area, cta_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(area);

        let guides = self.state.visible();
        let header = Line::from(vec![
            Span::styled(
                format!("{} verified guides", guides.len()),
                self.theme.muted(),
            ),
            Span::raw("   "),
            Span::styled(
                format!("[f] Filter: {}", self.state.filter.unwrap_or("All")),
                self.theme.focus(self.state.filter_open),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), header_area);

        // Keep the focused card on screen
        let per_page = (list_area.height / CARD_HEIGHT).max(1) as usize;
        let first = self.state.cursor.index.saturating_sub(per_page - 1);
        let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); per_page]).split(list_area);
        for (slot, (i, guide)) in guides.iter().enumerate().skip(first).take(per_page).enumerate() {
            frame.render_widget(self.card(guide, self.state.cursor.is(i)), rows[slot]);
        }

        let cta = Paragraph::new(Line::from(vec![
            Span::styled("Are you a local guide? ", self.theme.muted()),
            Span::styled("Request Verification", self.theme.title()),
        ]))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(self.theme.border()),
        );
        frame.render_widget(cta, cta_area);

        if self.state.filter_open {
            self.render_filter_panel(frame, list_area);
        }
    }
}
