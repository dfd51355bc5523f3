//! Angle- and shadow-based event times from the solar ephemeris.
//!
//! Every event is the moment the Sun's center reaches a target altitude on
//! one side of the meridian. With hour angle `H`, latitude `phi`, and
//! declination `d`:
//!
//! ```text
//! cos H = (-sin G - sin d sin phi) / (cos d cos phi)
//! ```
//!
//! where `G` is the depression below the horizon. Morning events pass
//! `180 - depression`, which has the same sine and selects the side before
//! noon. The Sun's position is evaluated at each event's own approximate
//! time, so one pass from a rough initial guess refines all seven values.
//!
//! All results here are in local apparent hours at longitude zero; the
//! timezone shift is applied by [`crate::adjust::normalize_times`].

use mawaqit_solar::{darccos, darccot, dcos, dsin, dtan, sun_position};
use mawaqit_time::{HOURS_PER_DAY, fix_hour};

use crate::config::PrayerConfig;

/// Sunrise/sunset depression: 34' refraction + 16' solar semidiameter,
/// rounded.
pub const SUNRISE_DEPRESSION_DEG: f64 = 0.833;

/// Initial guess for the seven events, in hours.
pub const INITIAL_GUESS_H: [f64; 7] = [5.0, 6.0, 12.0, 13.0, 18.0, 18.0, 18.0];

/// Local apparent noon for the day fraction `t`.
///
/// `Z = fix_hour(12 - EqT(jd + t))`
pub fn mid_day(jd: f64, t: f64) -> f64 {
    fix_hour(12.0 - sun_position(jd + t).equation_of_time_h)
}

/// Time at which the Sun reaches depression `angle_deg`.
///
/// `angle_deg > 90` selects the morning crossing. Returns `None` when the
/// Sun never gets there on this day.
pub fn time_for_angle(jd: f64, latitude_deg: f64, angle_deg: f64, t: f64) -> Option<f64> {
    let dec = sun_position(jd + t).declination_deg;
    let noon = mid_day(jd, t);
    let cos_h = (-dsin(angle_deg) - dsin(dec) * dsin(latitude_deg))
        / (dcos(dec) * dcos(latitude_deg));
    // Outside [-1, 1]: polar day or night. Non-finite: cos(lat) == 0 at a pole.
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    let h = darccos(cos_h) / 15.0;
    Some(if angle_deg > 90.0 { noon - h } else { noon + h })
}

/// Time at which an object's shadow reaches `factor` times its length plus
/// the noon shadow.
///
/// Target altitude `A = acot(factor + tan|phi - d|)`, passed on as a
/// negative depression.
pub fn asr_time(jd: f64, latitude_deg: f64, shadow_factor: f64, t: f64) -> Option<f64> {
    let dec = sun_position(jd + t).declination_deg;
    let altitude = darccot(shadow_factor + dtan((latitude_deg - dec).abs()));
    time_for_angle(jd, latitude_deg, -altitude, t)
}

/// One refinement pass over all seven events.
fn compute_pass(config: &PrayerConfig, jd: f64, latitude_deg: f64, guess: &[f64; 7]) -> [Option<f64>; 7] {
    let p = config.method.params();
    let t = guess.map(|h| h / HOURS_PER_DAY);
    [
        time_for_angle(jd, latitude_deg, 180.0 - p.fajr_angle, t[0]),
        time_for_angle(jd, latitude_deg, 180.0 - SUNRISE_DEPRESSION_DEG, t[1]),
        Some(mid_day(jd, t[2])),
        asr_time(jd, latitude_deg, config.asr.shadow_factor(), t[3]),
        time_for_angle(jd, latitude_deg, SUNRISE_DEPRESSION_DEG, t[4]),
        time_for_angle(jd, latitude_deg, p.maghrib.value(), t[5]),
        time_for_angle(jd, latitude_deg, p.isha.value(), t[6]),
    ]
}

/// Solve the seven events for a longitude-corrected Julian Date.
///
/// Interval-based Maghrib/Isha are still solved as angles here; the
/// normalizer overwrites them. An event that comes out unreachable restarts
/// from its initial guess on the next pass.
pub fn compute_solar_times(config: &PrayerConfig, jd: f64, latitude_deg: f64) -> [Option<f64>; 7] {
    let mut guess = INITIAL_GUESS_H;
    let mut times = INITIAL_GUESS_H.map(Some);
    for _ in 0..config.iterations {
        times = compute_pass(config, jd, latitude_deg, &guess);
        for (g, (&time, &init)) in guess.iter_mut().zip(times.iter().zip(INITIAL_GUESS_H.iter())) {
            *g = time.unwrap_or(init);
        }
    }
    times
}
