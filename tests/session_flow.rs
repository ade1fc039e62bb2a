use std::sync::mpsc;
use std::time::Duration;

use tangier_live::core::action::Action;
use tangier_live::core::catalog::find_guide;
use tangier_live::core::chat::{CANNED_REPLY, Sender};
use tangier_live::core::language::Language;
use tangier_live::core::navigation::{GuideId, NavigationIntent};
use tangier_live::core::screen::{HOME_DESTINATIONS, ScreenId};
use tangier_live::core::session::Session;
use tangier_live::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

fn start() -> (Session, mpsc::Receiver<Action>) {
    let (tx, rx) = mpsc::channel();
    (Session::start(App::default(), tx), rx)
}

/// Deliver everything the timers have posted so far.
fn pump(session: &mut Session, rx: &mpsc::Receiver<Action>) {
    while let Ok(action) = rx.try_recv() {
        session.dispatch(action);
    }
}

async fn advance(session: &mut Session, rx: &mpsc::Receiver<Action>, millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    pump(session, rx);
}

fn go(session: &mut Session, screen: ScreenId) {
    session.dispatch(Action::Navigate(NavigationIntent::to(screen)));
}

fn screen(session: &Session) -> ScreenId {
    session.app.navigation.active_screen
}

// ============================================================================
// Splash timer
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_splash_moves_to_onboarding_after_three_seconds() {
    let (mut session, rx) = start();
    assert_eq!(screen(&session), ScreenId::Splash);

    advance(&mut session, &rx, 2999).await;
    assert_eq!(screen(&session), ScreenId::Splash);

    advance(&mut session, &rx, 2).await;
    assert_eq!(screen(&session), ScreenId::Onboarding);
}

#[tokio::test(start_paused = true)]
async fn test_ending_session_before_splash_delay_prevents_transition() {
    let (mut session, rx) = start();
    advance(&mut session, &rx, 1500).await;
    session.end();

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(screen(&session), ScreenId::Splash);
}

#[tokio::test(start_paused = true)]
async fn test_splash_fires_once() {
    let (mut session, rx) = start();
    advance(&mut session, &rx, 3001).await;
    go(&mut session, ScreenId::Home);

    advance(&mut session, &rx, 10_000).await;
    assert_eq!(screen(&session), ScreenId::Home);
}

// ============================================================================
// Navigation
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_home_destinations_keep_selected_guide() {
    let (mut session, _rx) = start();
    session.dispatch(Action::Navigate(NavigationIntent::to_guide(GuideId::new("1"))));

    for target in HOME_DESTINATIONS {
        go(&mut session, ScreenId::Home);
        go(&mut session, target);
        assert_eq!(screen(&session), target);
        assert_eq!(
            session.app.navigation.selected_guide_id,
            Some(GuideId::new("1"))
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_guide_id_is_sticky() {
    let (mut session, _rx) = start();
    go(&mut session, ScreenId::Guides);
    session.dispatch(Action::Navigate(NavigationIntent::to_guide(GuideId::new("2"))));
    assert_eq!(screen(&session), ScreenId::GuideProfile);

    go(&mut session, ScreenId::Discover);
    let target = session.app.navigation.guide_profile_target();
    assert_eq!(target, None, "target is only reported on the profile screen");
    assert_eq!(
        session.app.navigation.selected_guide_id,
        Some(GuideId::new("2"))
    );
}

#[tokio::test(start_paused = true)]
async fn test_guide_profile_without_id_has_nothing_to_render() {
    let (mut session, _rx) = start();
    go(&mut session, ScreenId::GuideProfile);
    assert_eq!(screen(&session), ScreenId::GuideProfile);
    assert!(session.app.navigation.guide_profile_target().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_unknown_guide_id_resolves_to_nothing() {
    let (mut session, _rx) = start();
    session.dispatch(Action::Navigate(NavigationIntent::to_guide(GuideId::new("99"))));
    let guide = session
        .app
        .navigation
        .guide_profile_target()
        .and_then(find_guide);
    assert!(guide.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_back_edges() {
    let (mut session, _rx) = start();
    session.dispatch(Action::Navigate(NavigationIntent::to_guide(GuideId::new("3"))));
    session.dispatch(Action::Back);
    assert_eq!(screen(&session), ScreenId::Guides);
    session.dispatch(Action::Back);
    assert_eq!(screen(&session), ScreenId::Home);

    go(&mut session, ScreenId::Onboarding);
    session.dispatch(Action::Back);
    assert_eq!(screen(&session), ScreenId::Onboarding);
}

#[tokio::test(start_paused = true)]
async fn test_language_survives_navigation() {
    let (mut session, _rx) = start();
    session.dispatch(Action::SetLanguage(Language::Fr));
    for target in ScreenId::ALL {
        go(&mut session, target);
        assert_eq!(session.app.navigation.language, Language::Fr);
    }
}

#[tokio::test(start_paused = true)]
async fn test_dark_mode_toggles() {
    let (mut session, _rx) = start();
    session.dispatch(Action::ToggleDarkMode);
    assert!(session.app.navigation.dark_mode);
    session.dispatch(Action::ToggleDarkMode);
    assert!(!session.app.navigation.dark_mode);
}

// ============================================================================
// Chatbot
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_two_messages_yield_four_in_order() {
    let (mut session, rx) = start();
    go(&mut session, ScreenId::Chatbot);

    session.dispatch(Action::SendChat("Best time to visit?".to_string()));
    advance(&mut session, &rx, 1001).await;
    session.dispatch(Action::SendChat("Local events this week".to_string()));
    advance(&mut session, &rx, 1001).await;

    let messages = &session.app.chat.messages;
    let senders: Vec<Sender> = messages.iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::User, Sender::Bot, Sender::User, Sender::Bot]);
    assert_eq!(messages[0].text, "Best time to visit?");
    assert_eq!(messages[1].text, CANNED_REPLY);
    assert_eq!(messages[2].text, "Local events this week");
}

#[tokio::test(start_paused = true)]
async fn test_blank_message_is_ignored() {
    let (mut session, rx) = start();
    go(&mut session, ScreenId::Chatbot);
    session.dispatch(Action::SendChat("   ".to_string()));
    advance(&mut session, &rx, 2000).await;
    assert!(session.app.chat.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_leaving_chat_drops_pending_reply() {
    let (mut session, rx) = start();
    go(&mut session, ScreenId::Chatbot);
    session.dispatch(Action::SendChat("Hello".to_string()));
    advance(&mut session, &rx, 500).await;

    session.dispatch(Action::Back);
    go(&mut session, ScreenId::Chatbot);
    advance(&mut session, &rx, 2000).await;
    assert!(session.app.chat.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_quit_stops_the_session() {
    let (mut session, rx) = start();
    go(&mut session, ScreenId::Chatbot);
    session.dispatch(Action::SendChat("Hello".to_string()));

    assert!(!session.dispatch(Action::Quit));
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(session.app.chat.len(), 1);
}
