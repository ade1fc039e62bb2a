use crate::core::catalog::find_guide;
use crate::core::screen::ScreenId;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ArExperience, Chatbot, CulturalExchange, Discover, GuideProfile, Guides, Home, Onboarding,
    Settings, Splash, TitleBar,
};
use crate::tui::theme::Theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

/// Draw the whole frame for the active screen.
///
/// Splash takes the full terminal; every other screen gets a title bar, a
/// body and a key-hint line.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, tick: usize) {
    let navigation = &app.navigation;
    let theme = Theme::for_mode(navigation.dark_mode);
    let area = frame.area();
    frame.render_widget(Block::new().style(theme.base()), area);

    let screen = navigation.active_screen;
    if screen == ScreenId::Splash {
        Splash::new(tick, theme).render(frame, area);
        return;
    }

    use Constraint::{Length, Min};
    let [title_area, body_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(area);

    TitleBar::new(
        screen.title(navigation.language),
        navigation.language,
        app.status_message.clone(),
        screen.back_target().is_some(),
        theme,
    )
    .render(frame, title_area);

    let body = body_area.inner(Margin::new(1, 0));
    match screen {
        ScreenId::Splash => {}
        ScreenId::Onboarding => Onboarding::new(&tui.onboarding, theme).render(frame, body),
        ScreenId::Home => Home::new(&tui.home, navigation.language, theme).render(frame, body),
        ScreenId::ArExperience => ArExperience::new(&tui.ar, theme).render(frame, body),
        ScreenId::Chatbot => Chatbot::new(&mut tui.chatbot, &app.chat, theme).render(frame, body),
        ScreenId::Guides => Guides::new(&tui.guides, theme).render(frame, body),
        ScreenId::GuideProfile => {
            let guide = navigation.guide_profile_target().and_then(find_guide);
            GuideProfile::new(&mut tui.guide_profile, guide, theme).render(frame, body)
        }
        ScreenId::CulturalExchange => CulturalExchange::new(&tui.cultural, theme).render(frame, body),
        ScreenId::Discover => Discover::new(&mut tui.discover, theme).render(frame, body),
        ScreenId::Profile => Settings::new(&tui.settings, theme).render(frame, body),
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(key_hints(screen), theme.muted()))),
        help_area,
    );
}

fn key_hints(screen: ScreenId) -> &'static str {
    match screen {
        ScreenId::Splash => "",
        ScreenId::Onboarding => " ←/→ slides · Enter next · s skip · Ctrl+C quit",
        ScreenId::Home => " ←/→ move · Enter open · l language · Ctrl+C quit",
        ScreenId::ArExperience => " Tab marker · Enter open card · ←/→ tabs · Esc close",
        ScreenId::Chatbot => " Enter send · ↑/↓ + Tab quick question · PgUp/PgDn scroll · Esc back",
        ScreenId::Guides => " ↑/↓ move · Enter profile · f filter · Esc back",
        ScreenId::GuideProfile => " ↑/↓ scroll · Esc back",
        ScreenId::CulturalExchange => " ←/→ tag · ↑/↓ posts · Esc back",
        ScreenId::Discover => " / search · ←/→ type · m map · Esc back",
        ScreenId::Profile => " ↑/↓ move · ←/→ change · Esc back",
    }
}
