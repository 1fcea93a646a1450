#![forbid(unsafe_code)]

//! Core domain model and business logic for the FastFit schedule advisor.
//!
//! This crate provides:
//! - Domain types (tiers, time windows, schedule slots, the user profile)
//! - The built-in daily schedule catalog
//! - Time-of-day resolution and tier-aware content selection
//! - Biometric derivations (BMI, BMR, fitness tier)
//! - Profile and configuration persistence

pub mod types;
pub mod error;
pub mod schedule;
pub mod resolver;
pub mod biometrics;
pub mod clock;
pub mod config;
pub mod logging;
pub mod profile;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use schedule::{build_schedule, get_default_schedule};
pub use resolver::{recommend, resolve_slot, to_minutes, Recommendation};
pub use clock::{now_in, WallClock};
pub use config::Config;
