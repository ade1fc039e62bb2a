//! # Actions
//!
//! Everything that can happen in Tangier Live becomes an `Action`.
//! User picks "Scan Place" on the home screen? That's
//! `Action::Navigate(NavigationIntent::to(ScreenId::ArExperience))`.
//! Splash timer fires? That's `Action::SplashElapsed`.
//!
//! `update()` takes the current state and an action, mutates the state and
//! returns the side effects the runtime must perform (start or cancel a
//! timer, quit). No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Vec<Effect>
//! ```

use log::debug;
use std::time::Duration;

use crate::core::chat::BOT_REPLY_DELAY;
use crate::core::language::Language;
use crate::core::navigation::NavigationIntent;
use crate::core::screen::ScreenId;
use crate::core::state::App;
use crate::core::timer::{SPLASH_DELAY, TimerKind};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(NavigationIntent),
    /// Follow the active screen's back edge.
    Back,
    SetLanguage(Language),
    CycleLanguage,
    ToggleDarkMode,
    SplashElapsed,
    SendChat(String),
    BotReplyReady { epoch: u64 },
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Schedule {
        kind: TimerKind,
        delay: Duration,
        action: Action,
    },
    Cancel(TimerKind),
    Quit,
}

/// Effects owed when a session begins.
pub fn on_session_start(app: &App) -> Vec<Effect> {
    if app.navigation.active_screen == ScreenId::Splash {
        vec![splash_timer()]
    } else {
        Vec::new()
    }
}

pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    match action {
        Action::Navigate(intent) => navigate(app, intent),
        Action::Back => match app.navigation.active_screen.back_target() {
            Some(target) => navigate(app, NavigationIntent::to(target)),
            None => Vec::new(),
        },
        Action::SetLanguage(language) => {
            app.navigation.set_language(language);
            app.status_message = format!("Language: {}", language.display_name());
            Vec::new()
        }
        Action::CycleLanguage => {
            let next = app.navigation.language.next();
            update(app, Action::SetLanguage(next))
        }
        Action::ToggleDarkMode => {
            app.navigation.toggle_dark_mode();
            app.status_message = if app.navigation.dark_mode {
                "Dark mode on".to_string()
            } else {
                "Dark mode off".to_string()
            };
            Vec::new()
        }
        Action::SplashElapsed => {
            if app.navigation.active_screen == ScreenId::Splash {
                navigate(app, NavigationIntent::to(ScreenId::Onboarding))
            } else {
                debug!("Ignoring splash timer: already on {}", app.navigation.active_screen);
                Vec::new()
            }
        }
        Action::SendChat(text) => {
            if app.navigation.active_screen != ScreenId::Chatbot {
                debug!("Ignoring chat message outside the chatbot screen");
                return Vec::new();
            }
            match app.chat.send(&text) {
                Some(_) => vec![Effect::Schedule {
                    kind: TimerKind::BotReply,
                    delay: BOT_REPLY_DELAY,
                    action: Action::BotReplyReady {
                        epoch: app.chat.epoch,
                    },
                }],
                None => Vec::new(),
            }
        }
        Action::BotReplyReady { epoch } => {
            if epoch == app.chat.epoch {
                app.chat.append_bot_reply();
            } else {
                debug!(
                    "Dropping reply for torn-down chat (epoch {} != {})",
                    epoch, app.chat.epoch
                );
            }
            Vec::new()
        }
        Action::Quit => vec![Effect::Quit],
    }
}

/// Apply an intent plus the mount/unmount consequences of changing screens.
fn navigate(app: &mut App, intent: NavigationIntent) -> Vec<Effect> {
    let previous = app.navigation.transition(intent);
    let current = app.navigation.active_screen;
    let mut effects = Vec::new();

    if previous == current {
        return effects;
    }

    match previous {
        ScreenId::Splash => effects.push(Effect::Cancel(TimerKind::Splash)),
        ScreenId::Chatbot => {
            app.chat.reset();
            effects.push(Effect::Cancel(TimerKind::BotReply));
        }
        _ => {}
    }

    if current == ScreenId::Splash {
        effects.push(splash_timer());
    }

    effects
}

fn splash_timer() -> Effect {
    Effect::Schedule {
        kind: TimerKind::Splash,
        delay: SPLASH_DELAY,
        action: Action::SplashElapsed,
    }
}
