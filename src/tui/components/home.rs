//! # Home Screen
//!
//! Greeting, language selector, profile button, three primary actions and
//! three quick-access tiles. Every item is focusable; Enter activates.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::action::Action;
use crate::core::language::{Label, Language};
use crate::core::navigation::NavigationIntent;
use crate::core::screen::ScreenId;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::widgets::ListCursor;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeItem {
    Language,
    Profile,
    ScanPlace,
    AskTheGuide,
    NearbyExperiences,
    Guides,
    HiddenGems,
    Culture,
}

impl HomeItem {
    pub const ALL: [HomeItem; 8] = [
        HomeItem::Language,
        HomeItem::Profile,
        HomeItem::ScanPlace,
        HomeItem::AskTheGuide,
        HomeItem::NearbyExperiences,
        HomeItem::Guides,
        HomeItem::HiddenGems,
        HomeItem::Culture,
    ];

    pub fn action(self) -> Action {
        let go = |screen| Action::Navigate(NavigationIntent::to(screen));
        match self {
            HomeItem::Language => Action::CycleLanguage,
            HomeItem::Profile => go(ScreenId::Profile),
            HomeItem::ScanPlace => go(ScreenId::ArExperience),
            HomeItem::AskTheGuide => go(ScreenId::Chatbot),
            HomeItem::NearbyExperiences => go(ScreenId::Discover),
            HomeItem::Guides => go(ScreenId::Guides),
            HomeItem::HiddenGems => go(ScreenId::Discover),
            HomeItem::Culture => go(ScreenId::CulturalExchange),
        }
    }

    fn label(self, language: Language) -> &'static str {
        match self {
            HomeItem::Language => language.short_label(),
            HomeItem::Profile => "Profile",
            HomeItem::ScanPlace => language.label(Label::ScanPlace),
            HomeItem::AskTheGuide => language.label(Label::AskTheGuide),
            HomeItem::NearbyExperiences => language.label(Label::NearbyExperiences),
            HomeItem::Guides => language.label(Label::Guides),
            HomeItem::HiddenGems => language.label(Label::HiddenGems),
            HomeItem::Culture => language.label(Label::Culture),
        }
    }

    fn hint(self) -> &'static str {
        match self {
            HomeItem::ScanPlace => "Point your camera at a landmark",
            HomeItem::AskTheGuide => "Chat with your AI guide",
            HomeItem::NearbyExperiences => "Hidden gems, food and events around you",
            _ => "",
        }
    }
}

/// Focus starts on "Scan Place".
#[derive(Debug)]
pub struct HomeState {
    pub cursor: ListCursor,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            cursor: ListCursor { index: 2 },
        }
    }
}

impl HomeState {
    pub fn focused(&self) -> HomeItem {
        HomeItem::ALL[self.cursor.index % HomeItem::ALL.len()]
    }
}

impl EventHandler for HomeState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let len = HomeItem::ALL.len();
        match event {
            TuiEvent::CursorDown | TuiEvent::CursorRight | TuiEvent::Tab => {
                self.cursor.next(len);
                None
            }
            TuiEvent::CursorUp | TuiEvent::CursorLeft | TuiEvent::BackTab => {
                self.cursor.prev(len);
                None
            }
            TuiEvent::Submit => Some(self.focused().action()),
            TuiEvent::InputChar('l') => Some(Action::CycleLanguage),
            TuiEvent::Escape => Some(Action::Back),
            _ => None,
        }
    }
}

pub struct Home<'a> {
    state: &'a HomeState,
    language: Language,
    theme: Theme,
}

impl<'a> Home<'a> {
    pub fn new(state: &'a HomeState, language: Language, theme: Theme) -> Self {
        Self {
            state,
            language,
            theme,
        }
    }

    fn button(&self, item: HomeItem) -> Paragraph<'static> {
        let focused = self.state.focused() == item;
        let border = if focused {
            ratatui::style::Style::default().fg(self.theme.accent)
        } else {
            self.theme.border()
        };
        let mut lines = vec![Line::from(Span::styled(
            item.label(self.language),
            self.theme.focus(focused),
        ))];
        if !item.hint().is_empty() {
            lines.push(Line::from(Span::styled(item.hint(), self.theme.muted())));
        }
        Paragraph::new(lines).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border),
        )
    }
}

impl Component for Home<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, intro_area, actions_area, tiles_label, tiles_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(area);

        let [greeting_area, controls_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(20)]).areas(header_area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                self.language.label(Label::HelloExplorer),
                self.theme.title(),
            )),
            greeting_area,
        );
        let controls = Line::from(vec![
            Span::styled(
                format!("[{}]", HomeItem::Language.label(self.language)),
                self.theme.focus(self.state.focused() == HomeItem::Language),
            ),
            Span::raw(" "),
            Span::styled(
                "[Profile]",
                self.theme.focus(self.state.focused() == HomeItem::Profile),
            ),
        ])
        .right_aligned();
        frame.render_widget(Paragraph::new(controls), controls_area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                self.language.label(Label::GuideIntro),
                self.theme.muted(),
            )),
            intro_area,
        );

        let action_rows = Layout::vertical([Constraint::Length(4); 3]).split(actions_area);
        let primary = [
            HomeItem::ScanPlace,
            HomeItem::AskTheGuide,
            HomeItem::NearbyExperiences,
        ];
        for (item, row) in primary.into_iter().zip(action_rows.iter()) {
            frame.render_widget(self.button(item), *row);
        }

        frame.render_widget(
            Paragraph::new(Span::styled("Quick Access", self.theme.muted())),
            tiles_label,
        );
        let tile_cols = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(tiles_area);
        let tiles = [HomeItem::Guides, HomeItem::HiddenGems, HomeItem::Culture];
        for (item, col) in tiles.into_iter().zip(tile_cols.iter()) {
            frame.render_widget(self.button(item), *col);
        }
    }
}
