//! Daily prayer times from a date, a location, and a fixed timezone.
//!
//! This crate provides:
//! - Named calculation methods and per-field customization
//! - The seven-event solver (Fajr, Sunrise, Dhuhr, Asr, Sunset, Maghrib, Isha)
//! - Timezone normalization and interval rules
//! - High-latitude correction strategies
//! - Rendering of a day's times as strings or `chrono` timestamps
//!
//! ```rust
//! use mawaqit_prayer::{GeoLocation, PrayerConfig, prayer_times};
//! use mawaqit_time::TimeFormat;
//!
//! let mecca = GeoLocation::new(21.4225, 39.8262);
//! let times = prayer_times(&PrayerConfig::default(), 2024, 3, 20, &mecca, 3.0).unwrap();
//! let shown = times.format(TimeFormat::Time24);
//! assert_eq!(shown.len(), 7);
//! ```

pub mod adjust;
pub mod config;
pub mod error;
pub mod method;
pub mod solver;
pub mod types;

use chrono::NaiveDate;
use mawaqit_time::{checked_calendar_to_jd, date_to_jd, longitude_corrected_jd};

pub use adjust::{adjust_high_latitudes, night_duration, normalize_times};
pub use config::{AsrConvention, HighLatitudeStrategy, PrayerConfig};
pub use error::PrayerError;
pub use method::{CalculationMethod, EventRule, MethodOverrides, MethodParams, PRESETS};
pub use solver::{asr_time, compute_solar_times, mid_day, time_for_angle};
pub use types::{GeoLocation, Prayer, PrayerTimes};

/// Compute the seven event times for a calendar date.
///
/// `timezone_h` is a fixed offset from UT in hours; no daylight-saving
/// lookup is performed. Returned values are hours from local midnight of
/// the given date.
///
/// # Errors
/// Invalid date, location, timezone, or configuration. An event that does
/// not occur is not an error; it is `None` in the result.
pub fn prayer_times(
    config: &PrayerConfig,
    year: i32,
    month: u32,
    day: u32,
    location: &GeoLocation,
    timezone_h: f64,
) -> Result<PrayerTimes, PrayerError> {
    let jd = checked_calendar_to_jd(year, month, day)?;
    solve_day(config, jd, location, timezone_h)
}

/// [`prayer_times`] for a `chrono` date.
pub fn prayer_times_for_date(
    config: &PrayerConfig,
    date: NaiveDate,
    location: &GeoLocation,
    timezone_h: f64,
) -> Result<PrayerTimes, PrayerError> {
    solve_day(config, date_to_jd(date), location, timezone_h)
}

fn solve_day(
    config: &PrayerConfig,
    jd_midnight: f64,
    location: &GeoLocation,
    timezone_h: f64,
) -> Result<PrayerTimes, PrayerError> {
    location.validate()?;
    if !timezone_h.is_finite() {
        return Err(PrayerError::InvalidTimezone(timezone_h));
    }
    config.validate()?;

    let jd = longitude_corrected_jd(jd_midnight, location.longitude_deg);
    let solved = compute_solar_times(config, jd, location.latitude_deg);
    let local = normalize_times(solved, config, location, timezone_h);
    Ok(PrayerTimes::new(adjust_high_latitudes(local, config)))
}
