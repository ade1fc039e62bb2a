//! Light and dark palettes. The active one follows `NavigationState::dark_mode`.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    /// Moroccan red, used for primary buttons and focus
    pub accent: Color,
    /// Moroccan green, used for "available", "verified", "sustainable"
    pub positive: Color,
    pub warning: Color,
    pub selection: Color,
}

const LIGHT: Theme = Theme {
    background: Color::Rgb(250, 247, 242),
    text: Color::Rgb(33, 33, 33),
    muted: Color::Rgb(110, 110, 110),
    border: Color::Rgb(200, 195, 185),
    accent: Color::Rgb(193, 39, 45),
    positive: Color::Rgb(0, 98, 51),
    warning: Color::Rgb(180, 120, 0),
    selection: Color::Rgb(245, 222, 210),
};

const DARK: Theme = Theme {
    background: Color::Rgb(18, 18, 22),
    text: Color::Rgb(235, 235, 235),
    muted: Color::Rgb(140, 140, 150),
    border: Color::Rgb(70, 70, 80),
    accent: Color::Rgb(235, 87, 87),
    positive: Color::Rgb(80, 200, 120),
    warning: Color::Rgb(240, 190, 70),
    selection: Color::Rgb(60, 40, 45),
};

impl Theme {
    pub fn for_mode(dark_mode: bool) -> Theme {
        if dark_mode { DARK } else { LIGHT }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for the focused item; plain text otherwise.
    pub fn focus(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.accent)
                .bg(self.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    pub fn badge(&self, positive: bool) -> Style {
        Style::default()
            .fg(if positive { self.positive } else { self.warning })
            .add_modifier(Modifier::BOLD)
    }

    /// Chip style: filled when active.
    pub fn chip(&self, active: bool, focused: bool) -> Style {
        let style = if active {
            Style::default().fg(self.background).bg(self.accent)
        } else {
            Style::default().fg(self.text)
        };
        if focused {
            style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
        } else {
            style
        }
    }
}
