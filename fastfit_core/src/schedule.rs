//! Built-in daily schedule catalog.
//!
//! Ten contiguous windows spanning a full fasting day, from Pre-Suhoor at
//! 3:00 AM around to Late Night ending 3:00 AM the next morning. The last
//! window's end exceeds 24h to express the wrap past midnight. Content text
//! is catalog data, not logic; tier-variant slots carry three authored
//! variants, AVOID windows carry a single shared one.

use crate::resolver::to_minutes;
use crate::types::*;
use once_cell::sync::Lazy;

/// Number of windows in the daily schedule
pub const SLOT_COUNT: usize = 10;

/// Cached default schedule - built once and reused across all lookups
static DEFAULT_SCHEDULE: Lazy<Schedule> = Lazy::new(build_schedule_internal);

/// Get a reference to the cached default schedule
///
/// This function returns a reference to the pre-built schedule, avoiding
/// the overhead of rebuilding the catalog on every refresh tick.
pub fn get_default_schedule() -> &'static Schedule {
    &DEFAULT_SCHEDULE
}

/// Builds the default ten-window schedule
///
/// Deterministic static data construction with no inputs and no failure
/// modes. For production use, prefer `get_default_schedule()` which returns
/// a cached reference; this function is retained for testing.
pub fn build_schedule() -> Schedule {
    build_schedule_internal()
}

fn content(time_range: &str, activity: &str, tip: &str, status: StatusTier) -> SlotContent {
    SlotContent {
        time_range: time_range.into(),
        activity: activity.into(),
        tip: tip.into(),
        status,
    }
}

fn slot(
    period: &str,
    start: (u32, u32),
    end: (u32, u32),
    variants: SlotVariants,
) -> ScheduleSlot {
    ScheduleSlot {
        period: period.into(),
        window: TimeWindow {
            start_minutes: to_minutes(start.0, start.1),
            end_minutes: to_minutes(end.0, end.1),
        },
        variants,
    }
}

/// Internal function that actually builds the schedule
fn build_schedule_internal() -> Schedule {
    let mut slots = Vec::with_capacity(SLOT_COUNT);

    // 3:00 AM - 4:00 AM
    slots.push(slot(
        "Pre-Suhoor",
        (3, 0),
        (4, 0),
        SlotVariants::PerTier {
            light: content(
                "3:00 AM – 4:00 AM",
                "Gentle Breathing & Stretching",
                "Deep breathing and seated stretches to wake the body slowly.",
                StatusTier::Good,
            ),
            moderate: content(
                "3:00 AM – 4:00 AM",
                "Yoga / Light Stretching",
                "A 15-min yoga flow is ideal before your pre-dawn meal.",
                StatusTier::Good,
            ),
            standard: content(
                "3:00 AM – 4:00 AM",
                "Yoga / Core Activation",
                "Core planks + yoga sun salutations to prime the body.",
                StatusTier::Good,
            ),
        },
    ));

    // 4:00 AM - 6:00 AM
    slots.push(slot(
        "Suhoor → Fajr",
        (4, 0),
        (6, 0),
        SlotVariants::PerTier {
            light: content(
                "4:00 AM – 6:00 AM",
                "Short Easy Walk",
                "5–10 min gentle stroll after eating; don't overexert.",
                StatusTier::Good,
            ),
            moderate: content(
                "4:00 AM – 6:00 AM",
                "Brisk Walk (20 min)",
                "Light cardio is fine just after Suhoor; keep heart rate low.",
                StatusTier::Good,
            ),
            standard: content(
                "4:00 AM – 6:00 AM",
                "Brisk Walk / Light Jog",
                "20–30 min brisk walk or easy jog while the body is fuelled.",
                StatusTier::Good,
            ),
        },
    ));

    // 6:00 AM - 1:00 PM: all tiers rest
    slots.push(slot(
        "Morning Fast",
        (6, 0),
        (13, 0),
        SlotVariants::Uniform(content(
            "6:00 AM – 1:00 PM",
            "Rest – Avoid Exercise",
            "Body needs energy for fasting. Stay mentally hydrated.",
            StatusTier::Avoid,
        )),
    ));

    // 1:00 PM - 4:00 PM: all tiers rest
    slots.push(slot(
        "Afternoon Fast",
        (13, 0),
        (16, 0),
        SlotVariants::Uniform(content(
            "1:00 PM – 4:00 PM",
            "Rest – Avoid Exercise",
            "Energy and hydration are at their lowest. Save it for later.",
            StatusTier::Avoid,
        )),
    ));

    // 4:00 PM - 5:30 PM: moderate and standard share one variant
    let late_afternoon_default = content(
        "4:00 PM – 5:30 PM",
        "Light Stretching Only",
        "Very gentle movement. No intense cardio – you're nearly at Iftar.",
        StatusTier::Good,
    );
    slots.push(slot(
        "Late Afternoon",
        (16, 0),
        (17, 30),
        SlotVariants::PerTier {
            light: content(
                "4:00 PM – 5:30 PM",
                "Seated / Supported Stretching",
                "Chair yoga or gentle limb stretches only. Sip water if allowed.",
                StatusTier::Good,
            ),
            moderate: late_afternoon_default.clone(),
            standard: late_afternoon_default,
        },
    ));

    // 5:30 PM - 6:30 PM: all tiers rest
    slots.push(slot(
        "Near Iftar",
        (17, 30),
        (18, 30),
        SlotVariants::Uniform(content(
            "5:30 PM – 6:30 PM",
            "Rest – Prepare for Iftar",
            "Relax and get ready to break your fast. No exercise.",
            StatusTier::Avoid,
        )),
    ));

    // 6:30 PM - 7:30 PM: moderate and standard share one variant
    let just_after_iftar_default = content(
        "6:30 PM – 7:30 PM",
        "Slow Walk / Stretching",
        "Give your body 30–60 min to digest before increasing intensity.",
        StatusTier::Good,
    );
    slots.push(slot(
        "Just After Iftar",
        (18, 30),
        (19, 30),
        SlotVariants::PerTier {
            light: content(
                "6:30 PM – 7:30 PM",
                "Slow Walk",
                "A gentle 10-min walk aids digestion. Don't rush.",
                StatusTier::Good,
            ),
            moderate: just_after_iftar_default.clone(),
            standard: just_after_iftar_default,
        },
    ));

    // 7:30 PM - 9:00 PM
    slots.push(slot(
        "After Iftar",
        (19, 30),
        (21, 0),
        SlotVariants::PerTier {
            light: content(
                "7:30 PM – 9:00 PM",
                "Walking / Gentle Cycling",
                "30 min easy-paced walk or stationary bike at low resistance.",
                StatusTier::Best,
            ),
            moderate: content(
                "7:30 PM – 9:00 PM",
                "Jogging / Moderate Cardio",
                "Great window for moderate cardio once digestion begins.",
                StatusTier::Best,
            ),
            standard: content(
                "7:30 PM – 9:00 PM",
                "Running / Moderate Cardio",
                "Excellent cardio window. Target 70–80% max heart rate.",
                StatusTier::Best,
            ),
        },
    ));

    // 9:00 PM - 11:00 PM
    slots.push(slot(
        "Evening",
        (21, 0),
        (23, 0),
        SlotVariants::PerTier {
            light: content(
                "9:00 PM – 11:00 PM",
                "Light Resistance / Chair Exercises",
                "Resistance bands or body-weight moves at a comfortable pace.",
                StatusTier::Best,
            ),
            moderate: content(
                "9:00 PM – 11:00 PM",
                "Strength Training (moderate weight)",
                "Compound lifts at 60–70% 1RM. Good hydration window.",
                StatusTier::Best,
            ),
            standard: content(
                "9:00 PM – 11:00 PM",
                "Strength Training / HIIT",
                "Peak time! Body is fuelled and hydrated. Push hard.",
                StatusTier::Best,
            ),
        },
    ));

    // 11:00 PM - 3:00 AM: wraps past midnight, end expressed as 27:00
    let late_night_default = content(
        "11:00 PM – 3:00 AM",
        "Yoga / Light Stretching",
        "Wind down with gentle movement before sleep.",
        StatusTier::Good,
    );
    slots.push(slot(
        "Late Night",
        (23, 0),
        (27, 0),
        SlotVariants::PerTier {
            light: content(
                "11:00 PM – 3:00 AM",
                "Gentle Stretching / Breathing",
                "Wind down with slow stretches and diaphragmatic breathing.",
                StatusTier::Good,
            ),
            moderate: late_night_default.clone(),
            standard: late_night_default,
        },
    ));

    Schedule { slots }
}

impl Schedule {
    /// Validate the schedule for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.slots.len() != SLOT_COUNT {
            errors.push(format!(
                "Expected {} slots, found {}",
                SLOT_COUNT,
                self.slots.len()
            ));
        }

        for (i, slot) in self.slots.iter().enumerate() {
            if slot.period.is_empty() {
                errors.push(format!("Slot {} has empty period name", i));
            }

            if slot.window.start_minutes >= slot.window.end_minutes {
                errors.push(format!(
                    "Slot {} ('{}') has start {} >= end {}",
                    i, slot.period, slot.window.start_minutes, slot.window.end_minutes
                ));
            }

            // Contiguity: each window must begin exactly where the previous ends
            if i > 0 {
                let prev = &self.slots[i - 1];
                if slot.window.start_minutes != prev.window.end_minutes {
                    errors.push(format!(
                        "Slot {} ('{}') starts at {} but previous ends at {}",
                        i, slot.period, slot.window.start_minutes, prev.window.end_minutes
                    ));
                }
            }

            let mut check_content = |label: &str, c: &SlotContent| {
                if c.time_range.is_empty() {
                    errors.push(format!("Slot {} ({}) has empty time range", i, label));
                }
                if c.activity.is_empty() {
                    errors.push(format!("Slot {} ({}) has empty activity", i, label));
                }
                if c.tip.is_empty() {
                    errors.push(format!("Slot {} ({}) has empty tip", i, label));
                }
            };

            match &slot.variants {
                SlotVariants::Uniform(c) => check_content("uniform", c),
                SlotVariants::PerTier {
                    light,
                    moderate,
                    standard,
                } => {
                    check_content("light", light);
                    check_content("moderate", moderate);
                    check_content("standard", standard);
                }
            }
        }

        // Exhaustiveness: the windows must cover exactly one 24-hour cycle
        if let (Some(first), Some(last)) = (self.slots.first(), self.slots.last()) {
            let span = last.window.end_minutes.saturating_sub(first.window.start_minutes);
            if span != 24 * 60 {
                errors.push(format!(
                    "Schedule spans {} minutes, expected {}",
                    span,
                    24 * 60
                ));
            }
        }

        errors
    }
}
