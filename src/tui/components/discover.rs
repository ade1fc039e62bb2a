//! # Discover Screen
//!
//! Nearby places as a list or a map. `/` focuses the search box (name
//! substring, case-insensitive), ←/→ picks a type chip, `m` flips between
//! list and map.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::action::Action;
use crate::core::catalog::{Place, PlaceType, filter_places, map_pin_position};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_input::{InputEvent, TextInput};
use crate::tui::components::widgets::{ListCursor, chip_line, rating_span};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

const CARD_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Map,
}

pub struct DiscoverState {
    pub mode: ViewMode,
    pub search: TextInput,
    pub editing: bool,
    /// Index into `type_options()`; 0 is "All"
    pub kind: ListCursor,
    pub place: ListCursor,
}

impl Default for DiscoverState {
    fn default() -> Self {
        let mut search = TextInput::new("Search places... (/)");
        search.focused = false;
        Self {
            mode: ViewMode::default(),
            search,
            editing: false,
            kind: ListCursor::default(),
            place: ListCursor::default(),
        }
    }
}

impl DiscoverState {
    pub fn type_options() -> Vec<Option<PlaceType>> {
        std::iter::once(None)
            .chain(PlaceType::ALL.into_iter().map(Some))
            .collect()
    }

    pub fn active_type(&self) -> Option<PlaceType> {
        Self::type_options().get(self.kind.index).copied().flatten()
    }

    pub fn visible(&self) -> Vec<&'static Place> {
        filter_places(&self.search.buffer, self.active_type())
    }

    fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
        self.search.focused = editing;
    }
}

impl EventHandler for DiscoverState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        if self.editing {
            match event {
                TuiEvent::Escape | TuiEvent::Submit => self.set_editing(false),
                _ => {
                    if let Some(InputEvent::ContentChanged) = self.search.handle_event(event) {
                        self.place.clamp(self.visible().len());
                    }
                }
            }
            return None;
        }

        match event {
            TuiEvent::InputChar('/') => self.set_editing(true),
            TuiEvent::InputChar('m') => {
                self.mode = match self.mode {
                    ViewMode::List => ViewMode::Map,
                    ViewMode::Map => ViewMode::List,
                };
            }
            TuiEvent::CursorRight | TuiEvent::Tab => {
                self.kind.next(Self::type_options().len());
                self.place.clamp(self.visible().len());
            }
            TuiEvent::CursorLeft | TuiEvent::BackTab => {
                self.kind.prev(Self::type_options().len());
                self.place.clamp(self.visible().len());
            }
            TuiEvent::CursorDown => self.place.next(self.visible().len()),
            TuiEvent::CursorUp => self.place.prev(self.visible().len()),
            TuiEvent::Escape => return Some(Action::Back),
            _ => {}
        }
        None
    }
}

fn pin_color(kind: PlaceType) -> Color {
    match kind {
        PlaceType::HiddenGem => Color::Rgb(0, 150, 90),
        PlaceType::Restaurant => Color::Rgb(230, 120, 30),
        PlaceType::Event => Color::Rgb(200, 40, 60),
        PlaceType::Bank => Color::Rgb(40, 110, 210),
    }
}

pub struct Discover<'a> {
    state: &'a mut DiscoverState,
    theme: Theme,
}

impl<'a> Discover<'a> {
    pub fn new(state: &'a mut DiscoverState, theme: Theme) -> Self {
        Self { state, theme }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, places: &[&'static Place]) {
        if places.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled("No places match", self.theme.muted())).centered()),
                area,
            );
            return;
        }

        // Page so the focused card is always whole
        let per_page = (area.height / CARD_HEIGHT).max(1) as usize;
        let first = self.state.place.index.saturating_sub(per_page - 1);
        let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); per_page]).split(area);
        for (slot, (i, place)) in places.iter().enumerate().skip(first).take(per_page).enumerate() {
            let focused = self.state.place.is(i);
            let mut badges = vec![Span::styled(place.distance, self.theme.muted())];
            if place.sustainable {
                badges.push(Span::styled("  🌿 Sustainable", self.theme.badge(true)));
            }
            if place.less_crowded() {
                badges.push(Span::styled("  Less Crowded", self.theme.badge(true)));
            }
            let lines = vec![
                Line::from(vec![
                    Span::styled(place.name, self.theme.focus(focused)),
                    Span::styled(format!("  {}  ", place.kind.label()), self.theme.muted()),
                    rating_span(place.rating, &self.theme),
                ]),
                Line::from(place.description),
                Line::from(badges),
            ];
            let card = Paragraph::new(lines).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(if focused {
                        Style::default().fg(self.theme.accent)
                    } else {
                        self.theme.border()
                    }),
            );
            frame.render_widget(card, rows[slot]);
        }
    }

    fn render_map(&self, frame: &mut Frame, area: Rect, places: &[&'static Place]) {
        let [map_area, legend_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(self.theme.border())
            .title(" Map ");
        let inner = block.inner(map_area);
        frame.render_widget(block, map_area);

        for (i, place) in places.iter().enumerate() {
            let (top, left) = map_pin_position(i);
            let label = format!("📍 {}", place.name);
            let width = (label.width() as u16).min(inner.width);
            let y = inner.y + inner.height.saturating_sub(1) * top.min(100) / 100;
            let x = inner.x + inner.width.saturating_sub(width) * left.min(100) / 100;
            let mut style = Style::default().fg(pin_color(place.kind));
            if self.state.place.is(i) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            frame.render_widget(
                Paragraph::new(Span::styled(label, style)),
                Rect::new(x, y, width, 1),
            );
        }

        let mut legend = Vec::new();
        for kind in PlaceType::ALL {
            legend.push(Span::styled("● ", Style::default().fg(pin_color(kind))));
            legend.push(Span::styled(format!("{}  ", kind.label()), self.theme.muted()));
        }
        frame.render_widget(Paragraph::new(Line::from(legend)), legend_area);
    }
}

impl Component for Discover<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [top_area, chips_area, content_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(area);

        let [search_area, toggle_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(18)]).areas(top_area);
        self.state.search.theme = self.theme;
        self.state.search.render(frame, search_area);

        let toggle = Line::from(vec![
            Span::styled(" List ", self.theme.chip(self.state.mode == ViewMode::List, false)),
            Span::raw(" "),
            Span::styled(" Map ", self.theme.chip(self.state.mode == ViewMode::Map, false)),
        ]);
        frame.render_widget(
            Paragraph::new(vec![Line::default(), toggle]).right_aligned(),
            toggle_area,
        );

        let options = DiscoverState::type_options();
        let labels = options.iter().map(|o| o.map(PlaceType::label).unwrap_or("All"));
        frame.render_widget(
            Paragraph::new(chip_line(labels, self.state.kind.index, &self.theme)),
            chips_area,
        );

        let places = self.state.visible();
        match self.state.mode {
            ViewMode::List => self.render_list(frame, content_area, &places),
            ViewMode::Map => self.render_map(frame, content_area, &places),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;

    fn search(state: &mut DiscoverState, text: &str) {
        state.handle_event(&TuiEvent::InputChar('/'));
        for c in text.chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
        state.handle_event(&TuiEvent::Submit);
    }

    #[test]
    fn test_search_filters_case_insensitively() {
        let mut state = DiscoverState::default();
        search(&mut state, "CAFÉ");
        assert!(!state.editing);
        let names: Vec<&str> = state.visible().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Café Hafa"]);
    }

    #[test]
    fn test_typing_m_in_search_does_not_toggle() {
        let mut state = DiscoverState::default();
        search(&mut state, "market");
        assert_eq!(state.mode, ViewMode::List);
        state.handle_event(&TuiEvent::InputChar('m'));
        assert_eq!(state.mode, ViewMode::Map);
    }

    #[test]
    fn test_type_chip_filters() {
        let mut state = DiscoverState::default();
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.active_type(), Some(PlaceType::HiddenGem));
        assert_eq!(state.visible().len(), 2);
    }

    #[test]
    fn test_escape_leaves_search_before_screen() {
        let mut state = DiscoverState::default();
        state.handle_event(&TuiEvent::InputChar('/'));
        assert_eq!(state.handle_event(&TuiEvent::Escape), None);
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(Action::Back));
    }

    #[test]
    fn test_render_list_badges() {
        let mut state = DiscoverState::default();
        let text = render_to_string(90, 30, |f| {
            Discover::new(&mut state, Theme::for_mode(false)).render(f, f.area())
        });
        assert!(text.contains("Hidden Kasbah Garden"));
        assert!(text.contains("Sustainable"));
        assert!(text.contains("Less Crowded"));
    }

    #[test]
    fn test_focused_last_place_is_fully_shown() {
        let mut state = DiscoverState::default();
        for _ in 0..3 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        let text = render_to_string(80, 24, |f| {
            Discover::new(&mut state, Theme::for_mode(false)).render(f, f.area())
        });
        assert!(text.contains("Local Artisan Market"));
        assert!(text.contains("Authentic crafts away from tourist crowds"));
        assert!(text.contains("0.5 km"));
        // Three cards fit, so the list has scrolled past the first
        assert!(!text.contains("Hidden Kasbah Garden"));
    }

    #[test]
    fn test_render_map_legend() {
        let mut state = DiscoverState::default();
        state.handle_event(&TuiEvent::InputChar('m'));
        let text = render_to_string(90, 30, |f| {
            Discover::new(&mut state, Theme::for_mode(false)).render(f, f.area())
        });
        assert!(text.contains("Map"));
        assert!(text.contains("Restaurants"));
        assert!(text.contains("Café Hafa"));
    }
}
