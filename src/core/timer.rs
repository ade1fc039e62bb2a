//! # Deferred Actions
//!
//! Single-shot timers that post an `Action` back to the event loop after a
//! delay. Two kinds exist: the splash hand-off and the canned chat reply.
//!
//! Each timer is a tokio task; its `AbortHandle` is kept so the owner can
//! cancel it. Dropping `Timers` cancels everything still pending, which is
//! how session teardown guarantees no late transition.

use log::{debug, warn};
use std::collections::HashMap;
use std::sync::mpsc;
use std::time::Duration;
use tokio::task::AbortHandle;

use crate::core::action::Action;

/// How long the splash screen stays up before onboarding.
pub const SPLASH_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Splash,
    BotReply,
}

pub struct Timers {
    tx: mpsc::Sender<Action>,
    pending: HashMap<TimerKind, Vec<AbortHandle>>,
}

impl Timers {
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self {
            tx,
            pending: HashMap::new(),
        }
    }

    /// Post `action` after `delay`. Must be called inside a tokio runtime.
    pub fn schedule(&mut self, kind: TimerKind, delay: Duration, action: Action) {
        debug!("Scheduling {:?} in {}ms", kind, delay.as_millis());
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(action).is_err() {
                warn!("Timer {:?} fired after receiver dropped", kind);
            }
        });
        let handles = self.pending.entry(kind).or_default();
        handles.retain(|h| !h.is_finished());
        handles.push(handle.abort_handle());
    }

    pub fn cancel(&mut self, kind: TimerKind) {
        if let Some(handles) = self.pending.remove(&kind) {
            let live = handles.iter().filter(|h| !h.is_finished()).count();
            if live > 0 {
                debug!("Cancelling {} pending {:?} timer(s)", live, kind);
            }
            for handle in handles {
                handle.abort();
            }
        }
    }

    pub fn cancel_all(&mut self) {
        let kinds: Vec<TimerKind> = self.pending.keys().copied().collect();
        for kind in kinds {
            self.cancel(kind);
        }
    }

    /// Timers of this kind that have neither fired nor been cancelled.
    pub fn pending(&self, kind: TimerKind) -> usize {
        self.pending
            .get(&kind)
            .map(|handles| handles.iter().filter(|h| !h.is_finished()).count())
            .unwrap_or(0)
    }
}

impl Drop for Timers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_delay() {
        let (tx, rx) = mpsc::channel();
        let mut timers = Timers::new(tx);
        timers.schedule(TimerKind::Splash, SPLASH_DELAY, Action::SplashElapsed);
        assert_eq!(timers.pending(TimerKind::Splash), 1);

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.try_recv(), Ok(Action::SplashElapsed));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let (tx, rx) = mpsc::channel();
        let mut timers = Timers::new(tx);
        timers.schedule(TimerKind::Splash, SPLASH_DELAY, Action::SplashElapsed);
        tokio::time::sleep(Duration::from_millis(1000)).await;
        timers.cancel(TimerKind::Splash);
        assert_eq!(timers.pending(TimerKind::Splash), 0);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_leaves_other_kinds_alone() {
        let (tx, rx) = mpsc::channel();
        let mut timers = Timers::new(tx);
        timers.schedule(TimerKind::Splash, SPLASH_DELAY, Action::SplashElapsed);
        timers.schedule(
            TimerKind::BotReply,
            Duration::from_millis(1000),
            Action::BotReplyReady { epoch: 0 },
        );
        timers.cancel(TimerKind::Splash);

        tokio::time::sleep(Duration::from_millis(4000)).await;
        assert_eq!(rx.try_recv(), Ok(Action::BotReplyReady { epoch: 0 }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_everything() {
        let (tx, rx) = mpsc::channel();
        {
            let mut timers = Timers::new(tx);
            timers.schedule(TimerKind::Splash, SPLASH_DELAY, Action::SplashElapsed);
        }
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }
}
