//! # Catalog
//!
//! Hard-coded content shown by the views: guides, Q&A posts, places, AR
//! landmarks and onboarding slides. The navigation controller never looks
//! at any of this; views read it and filter it locally.
//!
//! All filters are linear scans over small static slices.

use crate::core::navigation::GuideId;

// ============================================================================
// Guides
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub author: &'static str,
    pub rating: u8,
    pub comment: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub name: &'static str,
    pub duration: &'static str,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    pub id: &'static str,
    pub name: &'static str,
    pub languages: &'static [&'static str],
    pub price_per_hour: u32,
    pub rating: f32,
    pub verified: bool,
    pub expertise: &'static [&'static str],
    pub available: bool,
    pub bio: &'static str,
    pub certifications: &'static [&'static str],
    pub review_count: u32,
    pub reviews: &'static [Review],
    pub tours: &'static [Tour],
}

impl Guide {
    pub fn guide_id(&self) -> GuideId {
        GuideId::new(self.id)
    }
}

static GUIDES: [Guide; 3] = [
    Guide {
        id: "1",
        name: "Ahmed El Mansouri",
        languages: &["English", "French", "Arabic"],
        price_per_hour: 45,
        rating: 4.9,
        verified: true,
        expertise: &["History", "Culture", "Food Tours"],
        available: true,
        bio: "Licensed tour guide with 10+ years experience in Tangier. Passionate about sharing \
              the rich history and culture of Morocco with visitors from around the world.",
        certifications: &["NGO Verified", "Tourism Board Certified"],
        review_count: 156,
        reviews: &[
            Review {
                author: "Sarah M.",
                rating: 5,
                comment: "Ahmed was fantastic! Very knowledgeable about Tangier's history and took us to amazing hidden spots.",
                date: "2 weeks ago",
            },
            Review {
                author: "John D.",
                rating: 5,
                comment: "Best guide we've ever had. Professional, friendly, and went above and beyond.",
                date: "1 month ago",
            },
            Review {
                author: "Maria L.",
                rating: 4,
                comment: "Great tour of the medina. Ahmed knows all the best places for authentic food!",
                date: "2 months ago",
            },
        ],
        tours: &[
            Tour { name: "Historical Medina Walk", duration: "3 hours", price: 45 },
            Tour { name: "Food & Culture Experience", duration: "4 hours", price: 60 },
            Tour { name: "AFCON 2025 City Tour", duration: "5 hours", price: 75 },
        ],
    },
    Guide {
        id: "2",
        name: "Fatima Zahara",
        languages: &["English", "Spanish", "Arabic"],
        price_per_hour: 40,
        rating: 5.0,
        verified: true,
        expertise: &["Art", "Architecture", "Local Markets"],
        available: true,
        bio: "Art historian specializing in Moroccan heritage",
        certifications: &["NGO Verified", "Art History Degree"],
        review_count: 203,
        reviews: &[
            Review {
                author: "Elena R.",
                rating: 5,
                comment: "Fatima brought the Kasbah's architecture to life. Unforgettable afternoon.",
                date: "1 week ago",
            },
            Review {
                author: "Tom K.",
                rating: 5,
                comment: "Her market tour was the highlight of our trip.",
                date: "3 weeks ago",
            },
        ],
        tours: &[
            Tour { name: "Kasbah Architecture Walk", duration: "2 hours", price: 40 },
            Tour { name: "Artisan Markets Tour", duration: "3 hours", price: 55 },
        ],
    },
    Guide {
        id: "3",
        name: "Youssef Berrada",
        languages: &["English", "French", "German", "Arabic"],
        price_per_hour: 55,
        rating: 4.8,
        verified: true,
        expertise: &["AFCON Events", "Sports Tours", "Nightlife"],
        available: false,
        bio: "Specialized in sports events and modern Tangier",
        certifications: &["NGO Verified", "Events Specialist"],
        review_count: 89,
        reviews: &[Review {
            author: "Karim B.",
            rating: 5,
            comment: "Got us into the fan zone without any hassle. Great energy.",
            date: "1 month ago",
        }],
        tours: &[
            Tour { name: "AFCON 2025 Match Day", duration: "6 hours", price: 90 },
            Tour { name: "Modern Tangier by Night", duration: "4 hours", price: 65 },
        ],
    },
];

pub fn guides() -> &'static [Guide] {
    &GUIDES
}

pub fn find_guide(id: &GuideId) -> Option<&'static Guide> {
    GUIDES.iter().find(|g| g.id == id.as_str())
}

/// Every expertise tag across guides, deduplicated, in first-seen order.
pub fn all_expertise() -> Vec<&'static str> {
    distinct(GUIDES.iter().flat_map(|g| g.expertise.iter().copied()))
}

/// Guides carrying the given expertise; all guides when `None`.
pub fn filter_guides(expertise: Option<&str>) -> Vec<&'static Guide> {
    GUIDES
        .iter()
        .filter(|g| expertise.is_none_or(|e| g.expertise.contains(&e)))
        .collect()
}

// ============================================================================
// Cultural exchange posts
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: u32,
    pub author: &'static str,
    pub is_guide: bool,
    pub question: &'static str,
    pub answer: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub likes: u32,
    pub replies: u32,
    pub timestamp: &'static str,
}

static POSTS: [Post; 3] = [
    Post {
        id: 1,
        author: "Sarah M.",
        is_guide: false,
        question: "What's the proper etiquette when visiting a Moroccan home?",
        answer: Some(
            "Always remove your shoes at the entrance, bring a small gift (pastries or tea), and accept \
             any food or drink offered. It's polite to use your right hand when eating.",
        ),
        tags: &["culture", "traditions", "etiquette"],
        likes: 24,
        replies: 8,
        timestamp: "2 hours ago",
    },
    Post {
        id: 2,
        author: "Fatima Z.",
        is_guide: true,
        question: "Best places to try authentic Moroccan breakfast?",
        answer: Some(
            "Try Café Hafa for traditional breakfast with a view, or visit the local market early \
             morning for fresh msemen and mint tea.",
        ),
        tags: &["food", "breakfast", "recommendations"],
        likes: 45,
        replies: 12,
        timestamp: "5 hours ago",
    },
    Post {
        id: 3,
        author: "John D.",
        is_guide: false,
        question: "How to respectfully bargain in the medina markets?",
        answer: Some(
            "Start at 40-50% of asking price, be friendly and patient, walk away if needed (often \
             brings best price), and always negotiate with a smile.",
        ),
        tags: &["shopping", "culture", "markets"],
        likes: 38,
        replies: 15,
        timestamp: "1 day ago",
    },
];

pub fn posts() -> &'static [Post] {
    &POSTS
}

pub fn all_tags() -> Vec<&'static str> {
    distinct(POSTS.iter().flat_map(|p| p.tags.iter().copied()))
}

pub fn filter_posts(tag: Option<&str>) -> Vec<&'static Post> {
    POSTS
        .iter()
        .filter(|p| tag.is_none_or(|t| p.tags.contains(&t)))
        .collect()
}

// ============================================================================
// Places
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceType {
    HiddenGem,
    Restaurant,
    Event,
    Bank,
}

impl PlaceType {
    /// Filter chips, in display order.
    pub const ALL: [PlaceType; 4] = [
        PlaceType::HiddenGem,
        PlaceType::Restaurant,
        PlaceType::Event,
        PlaceType::Bank,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlaceType::HiddenGem => "Hidden Gems",
            PlaceType::Restaurant => "Restaurants",
            PlaceType::Event => "Events",
            PlaceType::Bank => "Services",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: u32,
    pub name: &'static str,
    pub kind: PlaceType,
    pub rating: f32,
    pub crowd: CrowdLevel,
    pub sustainable: bool,
    pub description: &'static str,
    pub distance: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub fn less_crowded(&self) -> bool {
        self.crowd == CrowdLevel::Low
    }
}

static PLACES: [Place; 4] = [
    Place {
        id: 1,
        name: "Hidden Kasbah Garden",
        kind: PlaceType::HiddenGem,
        rating: 4.8,
        crowd: CrowdLevel::Low,
        sustainable: true,
        description: "Secret garden with traditional Moroccan architecture",
        distance: "0.8 km",
        lat: 35.7595,
        lng: -5.8340,
    },
    Place {
        id: 2,
        name: "Café Hafa",
        kind: PlaceType::Restaurant,
        rating: 4.9,
        crowd: CrowdLevel::Medium,
        sustainable: false,
        description: "Historic café with stunning ocean views",
        distance: "1.2 km",
        lat: 35.7695,
        lng: -5.8240,
    },
    Place {
        id: 3,
        name: "AFCON 2025 Fan Zone",
        kind: PlaceType::Event,
        rating: 5.0,
        crowd: CrowdLevel::High,
        sustainable: false,
        description: "Official AFCON fan zone with live screenings",
        distance: "2.5 km",
        lat: 35.7500,
        lng: -5.8100,
    },
    Place {
        id: 4,
        name: "Local Artisan Market",
        kind: PlaceType::HiddenGem,
        rating: 4.7,
        crowd: CrowdLevel::Low,
        sustainable: true,
        description: "Authentic crafts away from tourist crowds",
        distance: "0.5 km",
        lat: 35.7550,
        lng: -5.8300,
    },
];

pub fn places() -> &'static [Place] {
    &PLACES
}

/// Case-insensitive name search combined with an optional type filter.
pub fn filter_places(query: &str, kind: Option<PlaceType>) -> Vec<&'static Place> {
    let needle = query.to_lowercase();
    PLACES
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .filter(|p| kind.is_none_or(|k| p.kind == k))
        .collect()
}

/// Map pin position for the i-th visible place, as (top %, left %).
pub fn map_pin_position(index: usize) -> (u16, u16) {
    let i = index as u16;
    (30 + i * 15, 25 + i * 20)
}

// ============================================================================
// AR landmarks
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    pub id: u32,
    pub name: &'static str,
    /// (top %, left %) in the camera view
    pub position: (u16, u16),
    pub info: &'static str,
    pub culture: &'static str,
    pub tip: &'static str,
}

static LANDMARKS: [Landmark; 2] = [
    Landmark {
        id: 1,
        name: "Kasbah Museum",
        position: (25, 30),
        info: "Former Sultan's palace, now showcasing Moroccan art and history",
        culture: "Built in the 17th century by Sultan Moulay Ismail",
        tip: "Best visited in morning for fewer crowds",
    },
    Landmark {
        id: 2,
        name: "Grand Socco",
        position: (60, 65),
        info: "Historic marketplace connecting old and new city",
        culture: "Traditional meeting point for locals since 1930s",
        tip: "Try fresh mint tea from street vendors",
    },
];

pub fn landmarks() -> &'static [Landmark] {
    &LANDMARKS
}

// ============================================================================
// Onboarding, settings
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnboardingSlide {
    pub title: &'static str,
    pub description: &'static str,
}

pub const ONBOARDING_SLIDES: [OnboardingSlide; 3] = [
    OnboardingSlide {
        title: "Meet Your AI Guide",
        description: "Experience Tangier through AR with your personal 3D virtual guide",
    },
    OnboardingSlide {
        title: "Verified Local Guides",
        description: "Connect with certified guides verified through NGO partnerships for safe tourism",
    },
    OnboardingSlide {
        title: "Hidden Gems & Culture",
        description: "Discover authentic local spots and immerse yourself in Moroccan culture",
    },
];

pub const INTERESTS: [&str; 6] = ["History", "Food", "Sports", "Art", "Nature", "Events"];

pub fn app_version_label() -> String {
    format!("Tangier Live v{}", env!("CARGO_PKG_VERSION"))
}

fn distinct(values: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}
