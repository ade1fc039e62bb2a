//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates key presses into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (splash loader): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms and only redraws on input, resize or an
//!   action arriving from a timer.
//!
//! ## Screen state lifetime
//!
//! Each screen's presentation state is rebuilt when the screen is entered,
//! so cursors, filters and the chat input start fresh on every visit.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::screen::ScreenId;
use crate::core::session::Session;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ArState, ChatbotState, CulturalState, DiscoverState, GuideProfileState, GuidesState,
    HomeState, OnboardingState, SettingsState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Screen the states below were last synced for
    pub screen: ScreenId,
    pub onboarding: OnboardingState,
    pub home: HomeState,
    pub ar: ArState,
    pub chatbot: ChatbotState,
    pub guides: GuidesState,
    pub guide_profile: GuideProfileState,
    pub cultural: CulturalState,
    pub discover: DiscoverState,
    pub settings: SettingsState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            screen: ScreenId::Splash,
            onboarding: OnboardingState::default(),
            home: HomeState::default(),
            ar: ArState::default(),
            chatbot: ChatbotState::default(),
            guides: GuidesState::default(),
            guide_profile: GuideProfileState::default(),
            cultural: CulturalState::default(),
            discover: DiscoverState::default(),
            settings: SettingsState::default(),
        }
    }

    /// Follow the core state: reset the entered screen's state on a screen
    /// change, then copy props in.
    pub fn sync(&mut self, app: &App) {
        let screen = app.navigation.active_screen;
        if screen != self.screen {
            self.reset(screen);
            self.screen = screen;
        }
        self.chatbot.sync(&app.chat);
        self.settings.sync(&app.navigation);
    }

    fn reset(&mut self, screen: ScreenId) {
        match screen {
            ScreenId::Splash => {}
            ScreenId::Onboarding => self.onboarding = OnboardingState::default(),
            ScreenId::Home => self.home = HomeState::default(),
            ScreenId::ArExperience => self.ar = ArState::default(),
            ScreenId::Chatbot => self.chatbot = ChatbotState::default(),
            ScreenId::Guides => self.guides = GuidesState::default(),
            ScreenId::GuideProfile => self.guide_profile = GuideProfileState::default(),
            ScreenId::CulturalExchange => self.cultural = CulturalState::default(),
            ScreenId::Discover => self.discover = DiscoverState::default(),
            ScreenId::Profile => self.settings = SettingsState::default(),
        }
    }

    /// Route a key press to the active screen.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        if matches!(event, TuiEvent::ForceQuit) {
            return Some(Action::Quit);
        }
        match self.screen {
            // The splash only leaves on its timer
            ScreenId::Splash => None,
            ScreenId::Onboarding => self.onboarding.handle_event(event),
            ScreenId::Home => self.home.handle_event(event),
            ScreenId::ArExperience => self.ar.handle_event(event),
            ScreenId::Chatbot => self.chatbot.handle_event(event),
            ScreenId::Guides => self.guides.handle_event(event),
            ScreenId::GuideProfile => self.guide_profile.handle_event(event),
            ScreenId::CulturalExchange => self.cultural.handle_event(event),
            ScreenId::Discover => self.discover.handle_event(event),
            ScreenId::Profile => self.settings.handle_event(event),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Ignored by terminals without the kitty protocol
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse wheel, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

/// Run one session in the terminal until quit. Must be called inside a
/// tokio runtime, which drives the session timers.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Timers post their actions here
    let (tx, rx) = mpsc::channel();
    let mut session = Session::start(App::from_config(&config), tx);
    let mut tui = TuiState::new();

    let start_time = Instant::now();
    let mut needs_redraw = true;

    'event_loop: loop {
        tui.sync(&session.app);
        let animating = session.app.navigation.active_screen == ScreenId::Splash;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let tick = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &session.app, &mut tui, tick))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = tui.handle_event(&event)
                && !session.dispatch(action)
            {
                break 'event_loop;
            }
            // A screen change must reset state before the next key lands
            tui.sync(&session.app);
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if !session.dispatch(action) {
                break 'event_loop;
            }
        }
    }

    session.end();
    ratatui::restore();
    Ok(())
}
