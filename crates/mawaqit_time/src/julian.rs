//! Julian Date from calendar dates.
//!
//! Uses the Meeus formulation (Astronomical Algorithms, ch. 7) with the
//! Gregorian century correction. Input dates are civil dates at 0h; the
//! result lands on the .5 boundary.

use chrono::NaiveDate;

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Hours per day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Convert a Gregorian calendar date to a Julian Date at 0h.
///
/// January and February are counted as months 13 and 14 of the previous
/// year. `A = floor(Y/100)`, `B = 2 - A + floor(A/4)`, and
///
/// `JD = floor(365.25 (Y + 4716)) + floor(30.6001 (M + 1)) + D + B - 1524.5`
///
/// No validation is performed; see [`checked_calendar_to_jd`].
pub fn calendar_to_jd(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
}

/// Like [`calendar_to_jd`], but rejects dates that do not exist.
pub fn checked_calendar_to_jd(year: i32, month: u32, day: u32) -> Result<f64, TimeError> {
    validate_date(year, month, day)?;
    Ok(calendar_to_jd(year, month, day))
}

/// Julian Date of a `chrono` calendar date at 0h.
pub fn date_to_jd(date: NaiveDate) -> f64 {
    use chrono::Datelike;
    calendar_to_jd(date.year(), date.month(), date.day())
}

/// Check that year/month/day name a real proleptic Gregorian date.
pub fn validate_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, TimeError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(TimeError::InvalidDate { year, month, day })
}

/// Shift a 0h Julian Date to local mean midnight at the given longitude.
///
/// `JD' = JD - longitude / (15 * 24)`, east positive. Applied once per
/// computation, before any solar position is evaluated.
pub fn longitude_corrected_jd(jd: f64, longitude_deg: f64) -> f64 {
    jd - longitude_deg / (15.0 * HOURS_PER_DAY)
}
