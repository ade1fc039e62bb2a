//! # TUI Components
//!
//! Every screen lives in its own file, split the same way:
//!
//! - a persistent `XState` owned by `TuiState`, which implements
//!   `EventHandler<Event = Action>` and turns key presses into core actions;
//! - a short-lived `X<'a>` wrapper built each frame from that state plus
//!   props from `App`, which implements `Component`.
//!
//! Screen state is presentation only (cursors, open panels, scroll offsets).
//! Anything the rest of the app cares about goes through an `Action`.
//!
//! The smaller building blocks (`TextInput`, `ChatBubble`, `TitleBar`,
//! `widgets`) are shared between screens.
//!
//! ```text
//! components/
//! ├── widgets.rs           cursor + chip helpers
//! ├── text_input.rs        single-line input
//! ├── title_bar.rs
//! ├── chat_bubble.rs
//! ├── splash.rs
//! ├── onboarding.rs
//! ├── home.rs
//! ├── ar_experience.rs
//! ├── chatbot.rs
//! ├── guides.rs
//! ├── guide_profile.rs
//! ├── cultural_exchange.rs
//! ├── discover.rs
//! └── settings.rs
//! ```

pub mod ar_experience;
pub mod chat_bubble;
pub mod chatbot;
pub mod cultural_exchange;
pub mod discover;
pub mod guide_profile;
pub mod guides;
pub mod home;
pub mod onboarding;
pub mod settings;
pub mod splash;
pub mod text_input;
pub mod title_bar;
pub mod widgets;

pub use ar_experience::{ArExperience, ArState};
pub use chatbot::{Chatbot, ChatbotState};
pub use cultural_exchange::{CulturalExchange, CulturalState};
pub use discover::{Discover, DiscoverState};
pub use guide_profile::{GuideProfile, GuideProfileState};
pub use guides::{Guides, GuidesState};
pub use home::{Home, HomeState};
pub use onboarding::{Onboarding, OnboardingState};
pub use settings::{Settings, SettingsState};
pub use splash::Splash;
pub use title_bar::TitleBar;
