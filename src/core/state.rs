//! # Application State
//!
//! Core state for Tangier Live. Domain data only, no TUI-specific types.
//! Presentation state (cursor positions, filters, scroll) lives in the
//! `tui` module, next to the components that own it.
//!
//! ```text
//! App
//! ├── navigation: NavigationState   // active screen, guide id, language, theme
//! ├── chat: ChatTranscript          // chatbot conversation
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::chat::ChatTranscript;
use crate::core::config::ResolvedConfig;
use crate::core::language::Language;
use crate::core::navigation::NavigationState;

#[derive(Debug, Clone)]
pub struct App {
    pub navigation: NavigationState,
    pub chat: ChatTranscript,
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Language::default(), false)
    }
}

impl App {
    pub fn new(language: Language, dark_mode: bool) -> Self {
        Self {
            navigation: NavigationState::new(language, dark_mode),
            chat: ChatTranscript::new(),
            status_message: String::from("Welcome to Tangier!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.language, config.dark_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::screen::ScreenId;

    #[test]
    fn test_app_new_defaults() {
        let app = App::default();
        assert_eq!(app.status_message, "Welcome to Tangier!");
        assert_eq!(app.navigation.active_screen, ScreenId::Splash);
        assert!(app.chat.is_empty());
    }

    #[test]
    fn test_from_config_seeds_preferences() {
        let config = ResolvedConfig {
            language: Language::Ar,
            dark_mode: true,
            ..ResolvedConfig::default()
        };
        let app = App::from_config(&config);
        assert_eq!(app.navigation.language, Language::Ar);
        assert!(app.navigation.dark_mode);
        assert_eq!(app.navigation.active_screen, ScreenId::Splash);
    }
}
