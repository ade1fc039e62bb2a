//! # AR Experience Screen
//!
//! Simulated camera view with landmark markers. Tab/arrows move between
//! markers, Enter opens the info card (Info / Culture / Tips). While no card
//! is open an instruction overlay is shown. Esc closes the card first, then
//! leaves the screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::action::Action;
use crate::core::catalog::{Landmark, landmarks};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::widgets::{ListCursor, chip_line};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LandmarkTab {
    #[default]
    Info,
    Culture,
    Tips,
}

impl LandmarkTab {
    pub const ALL: [LandmarkTab; 3] = [LandmarkTab::Info, LandmarkTab::Culture, LandmarkTab::Tips];

    pub fn label(self) -> &'static str {
        match self {
            LandmarkTab::Info => "Info",
            LandmarkTab::Culture => "Culture",
            LandmarkTab::Tips => "Tips",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn text(self, landmark: &Landmark) -> &'static str {
        match self {
            LandmarkTab::Info => landmark.info,
            LandmarkTab::Culture => landmark.culture,
            LandmarkTab::Tips => landmark.tip,
        }
    }
}

#[derive(Debug, Default)]
pub struct ArState {
    pub marker: ListCursor,
    /// Index of the landmark whose card is open
    pub open: Option<usize>,
    pub tab: LandmarkTab,
}

impl ArState {
    pub fn open_landmark(&self) -> Option<&'static Landmark> {
        self.open.and_then(|i| landmarks().get(i))
    }
}

impl EventHandler for ArState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let count = landmarks().len();
        if self.open.is_some() {
            match event {
                TuiEvent::Escape => self.open = None,
                TuiEvent::CursorRight | TuiEvent::Tab => {
                    let next = (self.tab.index() + 1) % LandmarkTab::ALL.len();
                    self.tab = LandmarkTab::ALL[next];
                }
                TuiEvent::CursorLeft | TuiEvent::BackTab => {
                    let len = LandmarkTab::ALL.len();
                    self.tab = LandmarkTab::ALL[(self.tab.index() + len - 1) % len];
                }
                _ => {}
            }
            return None;
        }

        match event {
            TuiEvent::Tab | TuiEvent::CursorRight | TuiEvent::CursorDown => self.marker.next(count),
            TuiEvent::BackTab | TuiEvent::CursorLeft | TuiEvent::CursorUp => self.marker.prev(count),
            TuiEvent::Submit if count > 0 => {
                self.open = Some(self.marker.index);
                self.tab = LandmarkTab::default();
            }
            TuiEvent::Escape | TuiEvent::InputChar('x') => return Some(Action::Back),
            _ => {}
        }
        None
    }
}

pub struct ArExperience<'a> {
    state: &'a ArState,
    theme: Theme,
}

impl<'a> ArExperience<'a> {
    pub fn new(state: &'a ArState, theme: Theme) -> Self {
        Self { state, theme }
    }

    /// Place a marker at (top %, left %) inside the viewport.
    fn marker_rect(viewport: Rect, position: (u16, u16), width: u16) -> Rect {
        let (top, left) = position;
        let y = viewport.y + viewport.height.saturating_sub(1) * top.min(100) / 100;
        let x = viewport.x + viewport.width.saturating_sub(width) * left.min(100) / 100;
        Rect::new(x, y, width.min(viewport.width), 1)
    }

    fn render_card(&self, frame: &mut Frame, viewport: Rect, landmark: &Landmark) {
        let height = 7.min(viewport.height);
        let card_area = Rect::new(
            viewport.x,
            viewport.y + viewport.height - height,
            viewport.width,
            height,
        );
        frame.render_widget(Clear, card_area);

        let labels = LandmarkTab::ALL.iter().map(|t| t.label());
        let lines = vec![
            chip_line(labels, self.state.tab.index(), &self.theme),
            Line::default(),
            Line::from(self.state.tab.text(landmark)),
        ];
        let card = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(self.theme.base())
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.accent))
                    .title(Span::styled(landmark.name, self.theme.title()))
                    .title_bottom(Line::from(" ←/→ tabs  Esc close ").centered()),
            );
        frame.render_widget(card, card_area);
    }
}

impl Component for ArExperience<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let camera = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(self.theme.border())
            .title(" ◉ Camera ")
            .title_bottom(Line::from(" [x] Close ").right_aligned());
        let viewport = camera.inner(area);
        frame.render_widget(camera, area);

        for (i, landmark) in landmarks().iter().enumerate() {
            let label = format!("📍 {}", landmark.name);
            let width = label.width() as u16 + 1;
            let rect = Self::marker_rect(viewport, landmark.position, width);
            let style = if self.state.marker.is(i) {
                self.theme.focus(true)
            } else {
                Style::default().fg(self.theme.accent)
            };
            frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
        }

        match self.state.open_landmark() {
            Some(landmark) => self.render_card(frame, viewport, landmark),
            None => {
                let [_, hint_area] =
                    Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(viewport);
                frame.render_widget(
                    Paragraph::new(
                        Line::from(Span::styled(
                            "Point your camera at a landmark · Tab to select, Enter for details",
                            self.theme.muted().add_modifier(Modifier::ITALIC),
                        ))
                        .centered(),
                    ),
                    hint_area,
                );
            }
        }
    }
}
