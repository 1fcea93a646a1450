//! Wall-clock input with optional named time-zone resolution.
//!
//! The resolution pipeline consumes a plain (hour, minute) reading; this
//! module produces one, either from the system zone or from the IANA zone
//! id stored in the profile.

use crate::{Error, Result};
use chrono::{Local, Timelike, Utc};
use chrono_tz::Tz;

/// A wall-clock reading already resolved to the user's zone
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallClock {
    pub hour: u32,
    pub minute: u32,
    /// Zone abbreviation shown next to the time (named zones only)
    pub tz_label: Option<String>,
}

impl WallClock {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self {
            hour,
            minute,
            tz_label: None,
        }
    }

    /// Minutes since midnight, in `[0, 1440)`
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// `H:MM AM/PM`, with the zone abbreviation appended when present
    pub fn format_12h(&self) -> String {
        let am_pm = if self.hour < 12 { "AM" } else { "PM" };
        let mut hour = self.hour % 12;
        if hour == 0 {
            hour = 12;
        }
        match &self.tz_label {
            Some(label) => format!("{}:{:02} {} {}", hour, self.minute, am_pm, label),
            None => format!("{}:{:02} {}", hour, self.minute, am_pm),
        }
    }
}

/// Parse a named IANA zone id (e.g. "Asia/Riyadh")
pub fn parse_zone(id: &str) -> Result<Tz> {
    id.parse::<Tz>()
        .map_err(|_| Error::Timezone(format!("Unknown time zone id '{}'", id)))
}

/// Current wall clock in the given named zone, or the system zone when `None`
pub fn now_in(timezone: Option<&str>) -> Result<WallClock> {
    match timezone {
        Some(id) => {
            let tz = parse_zone(id)?;
            let now = Utc::now().with_timezone(&tz);
            Ok(WallClock {
                hour: now.hour(),
                minute: now.minute(),
                tz_label: Some(now.format("%Z").to_string()),
            })
        }
        None => {
            let now = Local::now();
            Ok(WallClock {
                hour: now.hour(),
                minute: now.minute(),
                tz_label: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(WallClock::new(0, 0).minutes_since_midnight(), 0);
        assert_eq!(WallClock::new(14, 30).minutes_since_midnight(), 870);
        assert_eq!(WallClock::new(23, 59).minutes_since_midnight(), 1439);
    }

    #[test]
    fn test_format_12h() {
        assert_eq!(WallClock::new(0, 30).format_12h(), "12:30 AM");
        assert_eq!(WallClock::new(9, 5).format_12h(), "9:05 AM");
        assert_eq!(WallClock::new(12, 0).format_12h(), "12:00 PM");
        assert_eq!(WallClock::new(20, 0).format_12h(), "8:00 PM");
    }

    #[test]
    fn test_format_12h_with_zone_label() {
        let clock = WallClock {
            hour: 20,
            minute: 0,
            tz_label: Some("AST".into()),
        };
        assert_eq!(clock.format_12h(), "8:00 PM AST");
    }

    #[test]
    fn test_parse_zone_known() {
        assert!(parse_zone("Asia/Riyadh").is_ok());
        assert!(parse_zone("Europe/Rome").is_ok());
    }

    #[test]
    fn test_parse_zone_unknown() {
        let err = parse_zone("Nowhere/Null").unwrap_err();
        assert!(matches!(err, Error::Timezone(_)));
    }

    #[test]
    fn test_now_in_named_zone() {
        let clock = now_in(Some("Asia/Riyadh")).unwrap();
        assert!(clock.hour < 24);
        assert!(clock.minute < 60);
        assert!(clock.tz_label.is_some());
    }

    #[test]
    fn test_now_in_system_zone() {
        let clock = now_in(None).unwrap();
        assert!(clock.hour < 24);
        assert!(clock.minute < 60);
        assert!(clock.tz_label.is_none());
    }
}
