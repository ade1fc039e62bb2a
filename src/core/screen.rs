//! # Screens
//!
//! The ten views of the app, identified by a tag. Exactly one is active
//! at any time; which one is decided by `NavigationState`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::language::{Label, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenId {
    Splash,
    Onboarding,
    Home,
    ArExperience,
    Chatbot,
    Guides,
    GuideProfile,
    CulturalExchange,
    Discover,
    Profile,
}

/// Targets the home view can emit, in the order its actions are laid out.
pub const HOME_DESTINATIONS: [ScreenId; 6] = [
    ScreenId::ArExperience,
    ScreenId::Chatbot,
    ScreenId::Discover,
    ScreenId::Guides,
    ScreenId::CulturalExchange,
    ScreenId::Profile,
];

impl ScreenId {
    pub const ALL: [ScreenId; 10] = [
        ScreenId::Splash,
        ScreenId::Onboarding,
        ScreenId::Home,
        ScreenId::ArExperience,
        ScreenId::Chatbot,
        ScreenId::Guides,
        ScreenId::GuideProfile,
        ScreenId::CulturalExchange,
        ScreenId::Discover,
        ScreenId::Profile,
    ];

    /// Wire tag, identical to the serde representation.
    pub fn tag(self) -> &'static str {
        match self {
            ScreenId::Splash => "splash",
            ScreenId::Onboarding => "onboarding",
            ScreenId::Home => "home",
            ScreenId::ArExperience => "ar-experience",
            ScreenId::Chatbot => "chatbot",
            ScreenId::Guides => "guides",
            ScreenId::GuideProfile => "guide-profile",
            ScreenId::CulturalExchange => "cultural-exchange",
            ScreenId::Discover => "discover",
            ScreenId::Profile => "profile",
        }
    }

    /// Where "back" leads from this screen.
    ///
    /// Splash and onboarding have no back edge: they only move forward.
    pub fn back_target(self) -> Option<ScreenId> {
        match self {
            ScreenId::Splash | ScreenId::Onboarding => None,
            ScreenId::GuideProfile => Some(ScreenId::Guides),
            _ => Some(ScreenId::Home),
        }
    }

    pub fn title(self, language: Language) -> &'static str {
        match self {
            ScreenId::Splash | ScreenId::Onboarding | ScreenId::Home => "Tangier Live",
            ScreenId::ArExperience => language.label(Label::ScanPlace),
            ScreenId::Chatbot => "AI Guide",
            ScreenId::Guides => "Certified Guides",
            ScreenId::GuideProfile => "Guide Profile",
            ScreenId::CulturalExchange => "Cultural Exchange",
            ScreenId::Discover => "Discover",
            ScreenId::Profile => language.label(Label::Settings),
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
