//! Core domain types for the FastFit advisor.
//!
//! This module defines the fundamental types used throughout the system:
//! - Status and fitness tiers
//! - Time windows and schedule slots
//! - Per-slot recommendation content
//! - The user profile

use serde::{Deserialize, Serialize};

// ============================================================================
// Tier Types
// ============================================================================

/// Advisory label on a time window, independent of the user's fitness tier
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusTier {
    Best,
    Good,
    Avoid,
}

impl StatusTier {
    /// Badge text rendered next to the recommendation
    pub fn badge_label(&self) -> &'static str {
        match self {
            StatusTier::Best => "✦ BEST TIME",
            StatusTier::Good => "✔ GOOD TIME",
            StatusTier::Avoid => "✕ AVOID",
        }
    }

    /// Badge background color as an (r, g, b) triple
    pub fn badge_color_rgb(&self) -> (u8, u8, u8) {
        match self {
            StatusTier::Best => (0x1B, 0x6B, 0x3A),  // deep green
            StatusTier::Good => (0x5C, 0x7A, 0x29),  // olive
            StatusTier::Avoid => (0x8B, 0x20, 0x20), // deep red
        }
    }
}

/// Coarse intensity classification derived from age and BMI.
///
/// Selects among pre-authored content variants; recomputed from the profile
/// on every load, never persisted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessTier {
    Light,
    Moderate,
    Standard,
}

impl FitnessTier {
    /// Display label used in the profile summary
    pub fn intensity_label(&self) -> &'static str {
        match self {
            FitnessTier::Light => "Light intensity",
            FitnessTier::Moderate => "Moderate intensity",
            FitnessTier::Standard => "Standard intensity",
        }
    }
}

/// Biological sex as used by the Mifflin-St Jeor equation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

// ============================================================================
// Schedule Types
// ============================================================================

/// Half-open interval of minutes-since-midnight.
///
/// `end_minutes` may exceed 1440 to express a window that wraps past
/// midnight; callers compare against wraparound-adjusted minutes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl TimeWindow {
    /// Membership test over the half-open range `[start, end)`
    pub fn contains(&self, adjusted_minutes: u32) -> bool {
        adjusted_minutes >= self.start_minutes && adjusted_minutes < self.end_minutes
    }
}

/// Displayable recommendation content for one (window, tier) pair
#[derive(Clone, Debug)]
pub struct SlotContent {
    pub time_range: String,
    pub activity: String,
    pub tip: String,
    pub status: StatusTier,
}

/// Content variants attached to a slot.
///
/// The `PerTier` form carries all three tiers by construction, so a missing
/// variant is unrepresentable rather than a runtime error.
#[derive(Clone, Debug)]
pub enum SlotVariants {
    /// Same content regardless of fitness tier
    Uniform(SlotContent),
    /// Distinct content per fitness tier
    PerTier {
        light: SlotContent,
        moderate: SlotContent,
        standard: SlotContent,
    },
}

/// One window of the daily schedule with its content variants
#[derive(Clone, Debug)]
pub struct ScheduleSlot {
    pub period: String,
    pub window: TimeWindow,
    pub variants: SlotVariants,
}

impl ScheduleSlot {
    /// Select the content variant for a fitness tier.
    ///
    /// Uniform slots return the same content for every tier.
    pub fn content_for(&self, tier: FitnessTier) -> &SlotContent {
        match &self.variants {
            SlotVariants::Uniform(content) => content,
            SlotVariants::PerTier {
                light,
                moderate,
                standard,
            } => match tier {
                FitnessTier::Light => light,
                FitnessTier::Moderate => moderate,
                FitnessTier::Standard => standard,
            },
        }
    }
}

/// The complete ordered daily schedule
#[derive(Clone, Debug)]
pub struct Schedule {
    pub slots: Vec<ScheduleSlot>,
}

// ============================================================================
// Profile Types
// ============================================================================

/// The user's personal details, loaded once per session.
///
/// Owned by the profile store; the setup form replaces it wholesale on save
/// (no partial updates).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub age_years: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: Sex,
    /// IANA zone id (e.g. "Asia/Riyadh"); `None` means the system zone
    pub timezone: Option<String>,
    #[serde(default)]
    pub setup_complete: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age_years: 30,
            weight_kg: 70.0,
            height_cm: 170.0,
            sex: Sex::Male,
            timezone: None,
            setup_complete: false,
        }
    }
}
