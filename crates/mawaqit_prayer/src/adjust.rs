//! Post-processing of solved times: timezone shift, interval rules, and
//! high-latitude capping.

use mawaqit_time::fix_hour;

use crate::config::{HighLatitudeStrategy, PrayerConfig};
use crate::types::{GeoLocation, Prayer};

/// Isha angle assumed for high-latitude capping when Isha is interval-based.
pub const FALLBACK_ISHA_ANGLE: f64 = 18.0;

/// Maghrib angle assumed for high-latitude capping when Maghrib is interval-based.
pub const FALLBACK_MAGHRIB_ANGLE: f64 = 4.0;

const FAJR: usize = Prayer::Fajr.index();
const SUNRISE: usize = Prayer::Sunrise.index();
const DHUHR: usize = Prayer::Dhuhr.index();
const SUNSET: usize = Prayer::Sunset.index();
const MAGHRIB: usize = Prayer::Maghrib.index();
const ISHA: usize = Prayer::Isha.index();

/// Convert solved times to the caller's fixed timezone and apply the
/// Dhuhr offset and interval rules.
///
/// Every value moves by `timezone - longitude / 15`. Interval-based Maghrib
/// is set relative to Sunset before interval-based Isha is set relative to
/// Maghrib.
pub fn normalize_times(
    times: [Option<f64>; 7],
    config: &PrayerConfig,
    location: &GeoLocation,
    timezone_h: f64,
) -> [Option<f64>; 7] {
    let shift = timezone_h - location.mean_time_offset_h();
    let mut out = times.map(|t| t.map(|h| h + shift));

    out[DHUHR] = out[DHUHR].map(|h| h + config.dhuhr_minutes / 60.0);

    let p = config.method.params();
    if let Some(m) = p.maghrib.minutes() {
        out[MAGHRIB] = out[SUNSET].map(|h| h + m / 60.0);
    }
    if let Some(m) = p.isha.minutes() {
        out[ISHA] = out[MAGHRIB].map(|h| h + m / 60.0);
    }
    out
}

/// Cap Fajr, Isha, and Maghrib to a share of the night.
///
/// The night runs from Sunset to the next Sunrise. An event further from
/// its horizon event than its share of the night, or one that does not
/// occur at all, is moved to exactly that share. Nothing changes for
/// [`HighLatitudeStrategy::None`] or when Sunrise or Sunset itself is
/// missing.
pub fn adjust_high_latitudes(times: [Option<f64>; 7], config: &PrayerConfig) -> [Option<f64>; 7] {
    let strategy = config.high_latitude;
    if strategy == HighLatitudeStrategy::None {
        return times;
    }
    let (Some(sunrise), Some(sunset)) = (times[SUNRISE], times[SUNSET]) else {
        return times;
    };

    let p = config.method.params();
    let night = night_duration(sunset, sunrise);
    let mut out = times;

    let fajr_limit = strategy.night_portion(p.fajr_angle) * night;
    if exceeds(out[FAJR].map(|fajr| fix_hour(sunrise - fajr)), fajr_limit) {
        out[FAJR] = Some(sunrise - fajr_limit);
    }

    let isha_angle = p.isha.angle().unwrap_or(FALLBACK_ISHA_ANGLE);
    let isha_limit = strategy.night_portion(isha_angle) * night;
    if exceeds(out[ISHA].map(|isha| fix_hour(isha - sunset)), isha_limit) {
        out[ISHA] = Some(sunset + isha_limit);
    }

    let maghrib_angle = p.maghrib.angle().unwrap_or(FALLBACK_MAGHRIB_ANGLE);
    let maghrib_limit = strategy.night_portion(maghrib_angle) * night;
    if exceeds(out[MAGHRIB].map(|maghrib| fix_hour(maghrib - sunset)), maghrib_limit) {
        out[MAGHRIB] = Some(sunset + maghrib_limit);
    }

    out
}

/// Hours from Sunset to the following Sunrise.
pub fn night_duration(sunset: f64, sunrise: f64) -> f64 {
    fix_hour(sunrise - sunset)
}

fn exceeds(gap: Option<f64>, limit: f64) -> bool {
    gap.is_none_or(|g| g > limit)
}
