//! Fractional hours to clock times, strings, and calendar timestamps.
//!
//! Solver output is a bare `f64` hour count that may fall outside [0, 24)
//! once the timezone shift is applied. Rendering rounds to the nearest
//! minute by adding half a minute and truncating; the day rollover is taken
//! from the raw, unrounded value.
//!
//! The two are computed independently, so a value just under 24 h renders
//! as `00:00` on the same day.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::julian::HOURS_PER_DAY;

/// Placeholder rendered for an event that does not occur.
pub const INVALID_TIME: &str = "----";

/// Half a minute, in hours.
const HALF_MINUTE_H: f64 = 0.5 / 60.0;

/// Reduce an hour count to [0, 24).
pub fn fix_hour(hours: f64) -> f64 {
    let r = hours % HOURS_PER_DAY;
    let r = if r < 0.0 { r + HOURS_PER_DAY } else { r };
    // -1e-17 + 24.0 rounds to exactly 24.0
    if r >= HOURS_PER_DAY { 0.0 } else { r }
}

/// Output style for rendered times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeFormat {
    /// `HH:MM`, zero-padded 24-hour clock.
    #[default]
    Time24,
    /// `H:MM am` / `H:MM pm`.
    Time12,
    /// `H:MM` on a 12-hour clock, no suffix.
    Time12NoSuffix,
    /// The raw hour value, unrounded.
    Floating,
}

/// A minute-resolution wall-clock time plus the day it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockTime {
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Minute of hour, 0-59.
    pub minute: u32,
    /// Whole days relative to the reference date, `floor(hours / 24)` of the
    /// unrounded value.
    pub day_offset: i64,
}

impl ClockTime {
    /// Round a fractional hour count to the nearest minute.
    ///
    /// Returns `None` for non-finite input.
    pub fn from_hours(hours: f64) -> Option<Self> {
        if !hours.is_finite() {
            return None;
        }
        let rounded = fix_hour(hours + HALF_MINUTE_H);
        let hour = rounded.floor();
        let minute = ((rounded - hour) * 60.0).floor();
        Some(Self {
            hour: hour as u32,
            minute: minute as u32,
            day_offset: (hours / HOURS_PER_DAY).floor() as i64,
        })
    }

    /// Hour on a 12-hour dial, 1-12.
    pub fn hour12(&self) -> u32 {
        (self.hour + 11) % 12 + 1
    }

    /// Whether the time is at or after noon.
    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }

    /// Calendar timestamp on `date`, shifted by `day_offset`.
    pub fn on(&self, date: NaiveDate) -> Option<NaiveDateTime> {
        let local = date.and_hms_opt(self.hour, self.minute, 0)?;
        local.checked_add_signed(Duration::try_days(self.day_offset)?)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Render an optional hour count. `None` renders as [`INVALID_TIME`].
pub fn format_hours(hours: Option<f64>, format: TimeFormat) -> String {
    let Some(h) = hours else {
        return INVALID_TIME.to_string();
    };
    if format == TimeFormat::Floating {
        return if h.is_finite() {
            format!("{h}")
        } else {
            INVALID_TIME.to_string()
        };
    }
    let Some(clock) = ClockTime::from_hours(h) else {
        return INVALID_TIME.to_string();
    };
    match format {
        TimeFormat::Time24 | TimeFormat::Floating => clock.to_string(),
        TimeFormat::Time12 => {
            let suffix = if clock.is_pm() { "pm" } else { "am" };
            format!("{}:{:02} {suffix}", clock.hour12(), clock.minute)
        }
        TimeFormat::Time12NoSuffix => format!("{}:{:02}", clock.hour12(), clock.minute),
    }
}

/// Calendar timestamp for an hour count relative to 0h of `date`.
pub fn to_datetime(date: NaiveDate, hours: f64) -> Option<NaiveDateTime> {
    ClockTime::from_hours(hours)?.on(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fix_hour_wraps() {
        assert!((fix_hour(25.5) - 1.5).abs() < 1e-12);
        assert!((fix_hour(-1.0) - 23.0).abs() < 1e-12);
        assert!((fix_hour(48.0)).abs() < 1e-12);
        assert_eq!(fix_hour(-1e-17), 0.0);
    }

    #[test]
    fn rounds_half_minute_up() {
        // 5:29:36 -> 5:30
        let c = ClockTime::from_hours(5.0 + 29.6 / 60.0).unwrap();
        assert_eq!((c.hour, c.minute), (5, 30));
    }

    #[test]
    fn truncates_below_half_minute() {
        // 5:29:20 -> 5:29
        let c = ClockTime::from_hours(5.0 + 29.0 / 60.0 + 20.0 / 3600.0).unwrap();
        assert_eq!((c.hour, c.minute), (5, 29));
    }

    #[test]
    fn day_offset_from_raw_value() {
        assert_eq!(ClockTime::from_hours(25.0).unwrap().day_offset, 1);
        assert_eq!(ClockTime::from_hours(-0.5).unwrap().day_offset, -1);
        assert_eq!(ClockTime::from_hours(12.0).unwrap().day_offset, 0);
    }

    #[test]
    fn negative_hours_wrap_to_previous_evening() {
        let c = ClockTime::from_hours(-0.5).unwrap();
        assert_eq!((c.hour, c.minute), (23, 30));
    }

    #[test]
    fn rounding_and_rollover_disagree() {
        // 23:59:45 rounds to 00:00 but the raw value is still day 0.
        let h = 23.0 + 59.75 / 60.0;
        let c = ClockTime::from_hours(h).unwrap();
        assert_eq!((c.hour, c.minute, c.day_offset), (0, 0, 0));
        let dt = to_datetime(ymd(2024, 3, 20), h).unwrap();
        assert_eq!(dt, ymd(2024, 3, 20).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn non_finite_has_no_clock() {
        assert!(ClockTime::from_hours(f64::NAN).is_none());
        assert!(ClockTime::from_hours(f64::INFINITY).is_none());
    }

    #[test]
    fn format_24h() {
        assert_eq!(format_hours(Some(5.25), TimeFormat::Time24), "05:15");
        assert_eq!(format_hours(Some(18.5), TimeFormat::Time24), "18:30");
    }

    #[test]
    fn format_12h() {
        assert_eq!(format_hours(Some(5.25), TimeFormat::Time12), "5:15 am");
        assert_eq!(format_hours(Some(18.5), TimeFormat::Time12), "6:30 pm");
        assert_eq!(format_hours(Some(12.0), TimeFormat::Time12), "12:00 pm");
        assert_eq!(format_hours(Some(0.25), TimeFormat::Time12), "12:15 am");
    }

    #[test]
    fn format_12h_no_suffix() {
        assert_eq!(format_hours(Some(18.5), TimeFormat::Time12NoSuffix), "6:30");
        assert_eq!(format_hours(Some(0.0), TimeFormat::Time12NoSuffix), "12:00");
    }

    #[test]
    fn format_floating_is_raw() {
        assert_eq!(format_hours(Some(5.25), TimeFormat::Floating), "5.25");
        assert_eq!(format_hours(Some(25.5), TimeFormat::Floating), "25.5");
    }

    #[test]
    fn format_unreachable_placeholder() {
        for fmt in [
            TimeFormat::Time24,
            TimeFormat::Time12,
            TimeFormat::Time12NoSuffix,
            TimeFormat::Floating,
        ] {
            assert_eq!(format_hours(None, fmt), INVALID_TIME);
            assert_eq!(format_hours(Some(f64::NAN), fmt), INVALID_TIME);
        }
    }

    #[test]
    fn format_wraps_past_midnight() {
        assert_eq!(format_hours(Some(24.5), TimeFormat::Time24), "00:30");
    }

    #[test]
    fn datetime_rolls_forward() {
        let dt = to_datetime(ymd(2024, 12, 31), 24.5).unwrap();
        assert_eq!(dt, ymd(2025, 1, 1).and_hms_opt(0, 30, 0).unwrap());
    }

    #[test]
    fn datetime_rolls_back() {
        let dt = to_datetime(ymd(2024, 3, 1), -0.25).unwrap();
        assert_eq!(dt, ymd(2024, 2, 29).and_hms_opt(23, 45, 0).unwrap());
    }

    #[test]
    fn display_clock() {
        let c = ClockTime {
            hour: 7,
            minute: 5,
            day_offset: 0,
        };
        assert_eq!(c.to_string(), "07:05");
    }
}
