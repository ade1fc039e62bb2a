//! # Language
//!
//! Display language preference and the label table swapped by it.
//! Only a handful of labels are translated; everything else stays English.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Ar,
}

/// UI strings that follow the language preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    HelloExplorer,
    GuideIntro,
    ScanPlace,
    AskTheGuide,
    NearbyExperiences,
    Guides,
    HiddenGems,
    Culture,
    Settings,
    Preferences,
    Language,
    DarkMode,
    Enabled,
    Disabled,
    Back,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    /// Compact selector label ("EN", "FR", "AR").
    pub fn short_label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Fr => "FR",
            Language::Ar => "AR",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
            Language::Ar => "العربية",
        }
    }

    /// en → fr → ar → en
    pub fn next(self) -> Language {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    pub fn label(self, label: Label) -> &'static str {
        match self {
            Language::En => english(label),
            Language::Fr => french(label),
            Language::Ar => arabic(label),
        }
    }
}

fn english(label: Label) -> &'static str {
    match label {
        Label::HelloExplorer => "Hello, Explorer!",
        Label::GuideIntro => "I'm your AI guide. How can I help?",
        Label::ScanPlace => "Scan Place",
        Label::AskTheGuide => "Ask the Guide",
        Label::NearbyExperiences => "Nearby Experiences",
        Label::Guides => "Guides",
        Label::HiddenGems => "Hidden Gems",
        Label::Culture => "Culture",
        Label::Settings => "Profile & Settings",
        Label::Preferences => "Preferences",
        Label::Language => "Language",
        Label::DarkMode => "Dark Mode",
        Label::Enabled => "Enabled",
        Label::Disabled => "Disabled",
        Label::Back => "Back",
    }
}

fn french(label: Label) -> &'static str {
    match label {
        Label::HelloExplorer => "Bonjour, explorateur !",
        Label::GuideIntro => "Je suis votre guide IA. Comment puis-je aider ?",
        Label::ScanPlace => "Scanner un lieu",
        Label::AskTheGuide => "Demander au guide",
        Label::NearbyExperiences => "Expériences à proximité",
        Label::Guides => "Guides",
        Label::HiddenGems => "Trésors cachés",
        Label::Culture => "Culture",
        Label::Settings => "Profil et réglages",
        Label::Preferences => "Préférences",
        Label::Language => "Langue",
        Label::DarkMode => "Mode sombre",
        Label::Enabled => "Activé",
        Label::Disabled => "Désactivé",
        Label::Back => "Retour",
    }
}

fn arabic(label: Label) -> &'static str {
    match label {
        Label::HelloExplorer => "مرحبا أيها المستكشف!",
        Label::GuideIntro => "أنا مرشدك الذكي. كيف يمكنني المساعدة؟",
        Label::ScanPlace => "امسح المكان",
        Label::AskTheGuide => "اسأل المرشد",
        Label::NearbyExperiences => "تجارب قريبة",
        Label::Guides => "المرشدون",
        Label::HiddenGems => "كنوز مخفية",
        Label::Culture => "الثقافة",
        Label::Settings => "الملف والإعدادات",
        Label::Preferences => "التفضيلات",
        Label::Language => "اللغة",
        Label::DarkMode => "الوضع الداكن",
        Label::Enabled => "مفعل",
        Label::Disabled => "معطل",
        Label::Back => "رجوع",
    }
}
