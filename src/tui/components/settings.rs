//! # Profile & Settings Screen
//!
//! Language and dark mode are the only live rows; they dispatch
//! `SetLanguage` / `ToggleDarkMode`. Account and support rows are inert.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::action::Action;
use crate::core::catalog::{INTERESTS, app_version_label};
use crate::core::language::{Label, Language};
use crate::core::navigation::NavigationState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::widgets::ListCursor;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Language,
    DarkMode,
    Biometric,
    Bookings,
    Notifications,
    Safety,
    Help,
    SignOut,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 8] = [
        SettingsRow::Language,
        SettingsRow::DarkMode,
        SettingsRow::Biometric,
        SettingsRow::Bookings,
        SettingsRow::Notifications,
        SettingsRow::Safety,
        SettingsRow::Help,
        SettingsRow::SignOut,
    ];

    fn title(self) -> (&'static str, &'static str) {
        match self {
            SettingsRow::Language | SettingsRow::DarkMode => ("", ""),
            SettingsRow::Biometric => ("Biometric Verification", "Secure your bookings"),
            SettingsRow::Bookings => ("My Bookings", "View your tours and events"),
            SettingsRow::Notifications => ("Notifications", "Manage your alerts"),
            SettingsRow::Safety => ("Safety Information", "Emergency contacts & tips"),
            SettingsRow::Help => ("Help & FAQ", "Get answers to common questions"),
            SettingsRow::SignOut => ("Sign Out", ""),
        }
    }
}

#[derive(Debug, Default)]
pub struct SettingsState {
    pub cursor: ListCursor,
    /// Props synced from `NavigationState` each frame
    pub language: Language,
    pub dark_mode: bool,
}

impl SettingsState {
    pub fn sync(&mut self, navigation: &NavigationState) {
        self.language = navigation.language;
        self.dark_mode = navigation.dark_mode;
    }

    pub fn focused(&self) -> SettingsRow {
        SettingsRow::ALL[self.cursor.index % SettingsRow::ALL.len()]
    }

    fn previous_language(&self) -> Language {
        // next() cycles through three, so two steps go back one
        self.language.next().next()
    }
}

impl EventHandler for SettingsState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match (event, self.focused()) {
            (TuiEvent::CursorDown | TuiEvent::Tab, _) => self.cursor.next(SettingsRow::ALL.len()),
            (TuiEvent::CursorUp | TuiEvent::BackTab, _) => self.cursor.prev(SettingsRow::ALL.len()),
            (TuiEvent::Submit | TuiEvent::CursorRight, SettingsRow::Language) => {
                return Some(Action::SetLanguage(self.language.next()));
            }
            (TuiEvent::CursorLeft, SettingsRow::Language) => {
                return Some(Action::SetLanguage(self.previous_language()));
            }
            (
                TuiEvent::Submit | TuiEvent::CursorLeft | TuiEvent::CursorRight | TuiEvent::InputChar(' '),
                SettingsRow::DarkMode,
            ) => return Some(Action::ToggleDarkMode),
            (TuiEvent::Submit, row) => debug!("{:?} is not available", row),
            (TuiEvent::Escape, _) => return Some(Action::Back),
            _ => {}
        }
        None
    }
}

pub struct Settings<'a> {
    state: &'a SettingsState,
    theme: Theme,
}

impl<'a> Settings<'a> {
    pub fn new(state: &'a SettingsState, theme: Theme) -> Self {
        Self { state, theme }
    }

    fn row(&self, row: SettingsRow) -> Line<'static> {
        let language = self.state.language;
        let focused = self.state.focused() == row;
        let marker = if focused { "› " } else { "  " };
        let (title, subtitle) = match row {
            SettingsRow::Language => (
                language.label(Label::Language),
                format!("◂ {} ▸", language.display_name()),
            ),
            SettingsRow::DarkMode => {
                let state = if self.state.dark_mode {
                    language.label(Label::Enabled)
                } else {
                    language.label(Label::Disabled)
                };
                (language.label(Label::DarkMode), state.to_string())
            }
            other => {
                let (title, subtitle) = other.title();
                (title, subtitle.to_string())
            }
        };
        Line::from(vec![
            Span::styled(format!("{marker}{title}"), self.theme.focus(focused)),
            Span::styled(format!("  {subtitle}"), self.theme.muted()),
        ])
    }

    fn section(&self, title: &str, rows: &[SettingsRow]) -> Paragraph<'static> {
        let lines: Vec<Line> = rows.iter().map(|r| self.row(*r)).collect();
        Paragraph::new(lines).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(self.theme.border())
                .title(Span::styled(format!(" {title} "), self.theme.title())),
        )
    }
}

impl Component for Settings<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let language = self.state.language;
        let [profile_area, prefs_area, account_area, support_area, interests_area, footer_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(2),
            ])
            .areas(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Traveler", self.theme.title())),
                Line::from(Span::styled("traveler@example.com", self.theme.muted())),
            ]),
            profile_area,
        );

        frame.render_widget(
            self.section(
                language.label(Label::Preferences),
                &[SettingsRow::Language, SettingsRow::DarkMode],
            ),
            prefs_area,
        );
        frame.render_widget(
            self.section(
                "Account",
                &[SettingsRow::Biometric, SettingsRow::Bookings, SettingsRow::Notifications],
            ),
            account_area,
        );
        frame.render_widget(
            self.section("Support", &[SettingsRow::Safety, SettingsRow::Help]),
            support_area,
        );

        let chips: Vec<Span> = INTERESTS
            .iter()
            .flat_map(|i| [Span::styled(format!(" {i} "), self.theme.chip(true, false)), Span::raw(" ")])
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(chips)).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.border())
                    .title(Span::styled(" My Interests ", self.theme.title())),
            ),
            interests_area,
        );

        frame.render_widget(
            Paragraph::new(vec![
                self.row(SettingsRow::SignOut),
                Line::from(Span::styled(app_version_label(), self.theme.muted())).centered(),
            ]),
            footer_area,
        );
    }
}
