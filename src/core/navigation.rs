//! # Navigation
//!
//! The navigation controller's state and transition rules.
//!
//! ```text
//! NavigationState
//! ├── active_screen: ScreenId          // exactly one view mounted
//! ├── selected_guide_id: Option<GuideId>  // sticky, overwritten only by id-bearing intents
//! ├── language: Language               // label swap
//! └── dark_mode: bool                  // palette
//! ```
//!
//! Views never touch this directly. They emit a `NavigationIntent` and the
//! reducer in `action.rs` calls [`NavigationState::transition`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::language::Language;
use crate::core::screen::ScreenId;

/// Opaque guide identifier. The controller never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuideId(pub String);

impl GuideId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A request from a view to show another screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub screen: ScreenId,
    /// Only set when the guide list opens a guide's profile.
    pub entity_id: Option<GuideId>,
}

impl NavigationIntent {
    pub fn to(screen: ScreenId) -> Self {
        Self {
            screen,
            entity_id: None,
        }
    }

    pub fn to_guide(id: GuideId) -> Self {
        Self {
            screen: ScreenId::GuideProfile,
            entity_id: Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub active_screen: ScreenId,
    pub selected_guide_id: Option<GuideId>,
    pub language: Language,
    pub dark_mode: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(Language::default(), false)
    }
}

impl NavigationState {
    /// Every session starts on the splash screen.
    pub fn new(language: Language, dark_mode: bool) -> Self {
        Self {
            active_screen: ScreenId::Splash,
            selected_guide_id: None,
            language,
            dark_mode,
        }
    }

    /// Apply an intent and return the screen that was active before.
    ///
    /// There is no validation: a `guide-profile` intent without an id still
    /// switches screens, and [`guide_profile_target`](Self::guide_profile_target)
    /// then yields nothing to render. An empty id counts as no id.
    pub fn transition(&mut self, intent: NavigationIntent) -> ScreenId {
        let previous = self.active_screen;
        if let Some(id) = intent.entity_id.filter(|id| !id.as_str().is_empty()) {
            self.selected_guide_id = Some(id);
        }
        self.active_screen = intent.screen;
        previous
    }

    /// Follow the active screen's back edge. Returns false when there is none.
    pub fn back(&mut self) -> bool {
        match self.active_screen.back_target() {
            Some(target) => {
                self.transition(NavigationIntent::to(target));
                true
            }
            None => false,
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// The guide the profile view should show, if it should show anything.
    pub fn guide_profile_target(&self) -> Option<&GuideId> {
        if self.active_screen == ScreenId::GuideProfile {
            self.selected_guide_id.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::screen::HOME_DESTINATIONS;

    fn at_home() -> NavigationState {
        let mut nav = NavigationState::default();
        nav.transition(NavigationIntent::to(ScreenId::Home));
        nav
    }

    #[test]
    fn test_starts_on_splash() {
        let nav = NavigationState::default();
        assert_eq!(nav.active_screen, ScreenId::Splash);
        assert!(nav.selected_guide_id.is_none());
        assert_eq!(nav.language, Language::En);
        assert!(!nav.dark_mode);
    }

    #[test]
    fn test_home_destinations_leave_guide_untouched() {
        for target in HOME_DESTINATIONS {
            let mut nav = at_home();
            nav.selected_guide_id = Some(GuideId::new("3"));
            let previous = nav.transition(NavigationIntent::to(target));
            assert_eq!(previous, ScreenId::Home);
            assert_eq!(nav.active_screen, target);
            assert_eq!(nav.selected_guide_id, Some(GuideId::new("3")));
        }
    }

    #[test]
    fn test_guide_id_is_sticky() {
        let mut nav = at_home();
        nav.transition(NavigationIntent::to(ScreenId::Guides));
        nav.transition(NavigationIntent::to_guide(GuideId::new("2")));
        assert_eq!(nav.active_screen, ScreenId::GuideProfile);
        assert_eq!(nav.selected_guide_id, Some(GuideId::new("2")));

        nav.transition(NavigationIntent::to(ScreenId::Discover));
        assert_eq!(nav.selected_guide_id, Some(GuideId::new("2")));

        nav.transition(NavigationIntent::to_guide(GuideId::new("1")));
        assert_eq!(nav.selected_guide_id, Some(GuideId::new("1")));
    }

    #[test]
    fn test_empty_guide_id_keeps_previous_selection() {
        let mut nav = at_home();
        nav.transition(NavigationIntent::to_guide(GuideId::new("2")));
        nav.transition(NavigationIntent::to(ScreenId::Guides));

        nav.transition(NavigationIntent::to_guide(GuideId::new("")));
        assert_eq!(nav.active_screen, ScreenId::GuideProfile);
        assert_eq!(nav.selected_guide_id, Some(GuideId::new("2")));
        assert_eq!(nav.guide_profile_target(), Some(&GuideId::new("2")));
    }

    #[test]
    fn test_guide_profile_without_id_renders_nothing() {
        let mut nav = at_home();
        nav.transition(NavigationIntent::to(ScreenId::GuideProfile));
        assert_eq!(nav.active_screen, ScreenId::GuideProfile);
        assert!(nav.guide_profile_target().is_none());
    }

    #[test]
    fn test_guide_profile_target_requires_matching_screen() {
        let mut nav = at_home();
        nav.transition(NavigationIntent::to_guide(GuideId::new("1")));
        assert_eq!(nav.guide_profile_target(), Some(&GuideId::new("1")));
        nav.transition(NavigationIntent::to(ScreenId::Guides));
        assert!(nav.guide_profile_target().is_none());
    }

    #[test]
    fn test_back_edges() {
        let mut nav = NavigationState::default();
        assert!(!nav.back());
        assert_eq!(nav.active_screen, ScreenId::Splash);

        nav.transition(NavigationIntent::to_guide(GuideId::new("1")));
        assert!(nav.back());
        assert_eq!(nav.active_screen, ScreenId::Guides);
        assert!(nav.back());
        assert_eq!(nav.active_screen, ScreenId::Home);
    }

    #[test]
    fn test_language_survives_navigation() {
        let mut nav = at_home();
        nav.set_language(Language::Fr);
        for screen in ScreenId::ALL {
            nav.transition(NavigationIntent::to(screen));
            assert_eq!(nav.language, Language::Fr);
        }
    }

    #[test]
    fn test_toggle_dark_mode() {
        let mut nav = NavigationState::default();
        nav.toggle_dark_mode();
        assert!(nav.dark_mode);
        nav.toggle_dark_mode();
        assert!(!nav.dark_mode);
    }
}
