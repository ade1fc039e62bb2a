//! # Session Runtime
//!
//! One app launch, from splash until quit. The session owns the `App` state
//! and the pending timers, and is the only place where `update()` effects
//! are carried out.
//!
//! ```text
//! Action ──► Session::dispatch ──► update(app, action)
//!                                      │
//!                                      ▼
//!                                 Vec<Effect> ──► Timers (schedule/cancel)
//! ```
//!
//! Ending the session cancels every pending timer, so nothing scheduled
//! before quit can touch the state afterwards.

use log::{debug, info, warn};
use std::sync::mpsc;
use uuid::Uuid;

use crate::core::action::{Action, Effect, on_session_start, update};
use crate::core::state::App;
use crate::core::timer::Timers;

pub struct Session {
    pub id: Uuid,
    pub app: App,
    timers: Timers,
    ended: bool,
}

impl Session {
    /// Begin a session and arm whatever the starting screen needs.
    /// Must be called inside a tokio runtime.
    pub fn start(app: App, tx: mpsc::Sender<Action>) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            app,
            timers: Timers::new(tx),
            ended: false,
        };
        info!(
            "Session {} started on {} ({}, dark_mode={})",
            session.id,
            session.app.navigation.active_screen,
            session.app.navigation.language.code(),
            session.app.navigation.dark_mode
        );
        let effects = on_session_start(&session.app);
        session.apply(effects);
        session
    }

    /// Feed one action through the reducer. Returns `false` once the session
    /// should stop.
    pub fn dispatch(&mut self, action: Action) -> bool {
        if self.ended {
            debug!("Session {} already ended, dropping {:?}", self.id, action);
            return false;
        }

        let before = self.app.navigation.active_screen;
        debug!("Dispatch: {:?}", action);
        let effects = update(&mut self.app, action);
        let after = self.app.navigation.active_screen;
        if before != after {
            info!("Transition {} -> {}", before, after);
        }
        self.log_snapshot();
        self.apply(effects)
    }

    /// Tear down: cancel every timer. Idempotent.
    pub fn end(&mut self) {
        if self.ended {
            return;
        }
        self.timers.cancel_all();
        self.ended = true;
        info!("Session {} ended on {}", self.id, self.app.navigation.active_screen);
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    fn apply(&mut self, effects: Vec<Effect>) -> bool {
        let mut keep_running = true;
        for effect in effects {
            match effect {
                Effect::Schedule { kind, delay, action } => {
                    self.timers.schedule(kind, delay, action);
                }
                Effect::Cancel(kind) => self.timers.cancel(kind),
                Effect::Quit => {
                    self.end();
                    keep_running = false;
                }
            }
        }
        keep_running
    }

    fn log_snapshot(&self) {
        match serde_json::to_string(&self.app.navigation) {
            Ok(json) => debug!("State: {} (chat messages: {})", json, self.app.chat.len()),
            Err(e) => warn!("Failed to serialize state snapshot: {}", e),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.end();
    }
}
