//! Time-of-day resolution against the daily schedule.
//!
//! Normalizes a wall-clock reading to minutes-since-midnight, applies the
//! midnight-wraparound adjustment and scans the schedule in order for the
//! first window containing the adjusted minute. Window membership is
//! half-open: the minute at a window's end belongs to the next window.

use crate::types::{FitnessTier, Schedule, ScheduleSlot, SlotContent};

/// Minutes in one day
pub const DAY_MINUTES: u32 = 1440;

/// Readings before this boundary (3:00 AM) belong to the previous schedule
/// day and are shifted forward by 24h before the lookup.
pub const WRAP_BOUNDARY_MINUTES: u32 = 180;

/// Convert a wall-clock hour and minute to minutes-since-midnight
pub fn to_minutes(hour: u32, minute: u32) -> u32 {
    hour * 60 + minute
}

/// A resolved recommendation: the matched slot plus tier-selected content
#[derive(Clone, Debug)]
pub struct Recommendation<'a> {
    pub slot: &'a ScheduleSlot,
    pub content: &'a SlotContent,
}

/// Find the schedule slot containing the given minute of the day.
///
/// `now_minutes` must be in `[0, 1440)`. Falls back to the first slot if no
/// window matches; exhaustive coverage is a construction invariant, so the
/// fallback guards a catalog defect, not a user-facing condition.
pub fn resolve_slot(schedule: &Schedule, now_minutes: u32) -> &ScheduleSlot {
    let adjusted = if now_minutes < WRAP_BOUNDARY_MINUTES {
        now_minutes + DAY_MINUTES
    } else {
        now_minutes
    };

    if let Some(slot) = schedule
        .slots
        .iter()
        .find(|s| s.window.contains(adjusted))
    {
        return slot;
    }

    tracing::warn!(
        "No schedule slot covers minute {} (adjusted {}); falling back to the first slot",
        now_minutes,
        adjusted
    );
    debug_assert!(
        false,
        "schedule does not cover minute {} (adjusted {})",
        now_minutes, adjusted
    );
    &schedule.slots[0]
}

/// Resolve the slot for the given minute and select content for the tier
pub fn recommend(schedule: &Schedule, now_minutes: u32, tier: FitnessTier) -> Recommendation<'_> {
    let slot = resolve_slot(schedule, now_minutes);
    Recommendation {
        slot,
        content: slot.content_for(tier),
    }
}
