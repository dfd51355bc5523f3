//! Low-precision solar position: declination and equation of time.
//!
//! Mean-element series accurate to about 0.01 deg in declination and a few
//! seconds in the equation of time between 1950 and 2050 (USNO "Approximate
//! Solar Coordinates"). Good enough for minute-resolution rise, set, and
//! twilight times.
//!
//! ```text
//! D = JD - 2451545.0
//! g = 357.529 + 0.98560028 D          mean anomaly
//! q = 280.459 + 0.98564736 D          mean longitude
//! L = q + 1.915 sin g + 0.020 sin 2g  apparent ecliptic longitude
//! e = 23.439 - 0.00000036 D           obliquity
//! ```

use mawaqit_time::{J2000_JD, fix_hour};

use crate::angle::{darcsin, darctan2, dcos, dsin, fix_angle};

/// Sun declination and equation of time at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    /// Apparent declination in degrees, north positive.
    pub declination_deg: f64,
    /// Equation of time in hours (apparent minus mean solar time), in [-12, 12).
    pub equation_of_time_h: f64,
}

/// Compute the Sun's declination and the equation of time at a Julian Date.
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - J2000_JD;
    let g = fix_angle(357.529 + 0.985_600_28 * d);
    let q = fix_angle(280.459 + 0.985_647_36 * d);
    let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));
    let e = 23.439 - 0.000_000_36 * d;

    let declination_deg = darcsin(dsin(e) * dsin(l));
    let ra_h = fix_hour(darctan2(dcos(e) * dsin(l), dcos(l)) / 15.0);

    // q/15 and RA wrap independently near the equinox; fold into [-12, 12).
    let eqt = q / 15.0 - ra_h;
    let eqt = eqt - 24.0 * ((eqt + 12.0) / 24.0).floor();

    SunPosition {
        declination_deg,
        equation_of_time_h: eqt,
    }
}

/// Solar declination in degrees.
pub fn declination_deg(jd: f64) -> f64 {
    sun_position(jd).declination_deg
}

/// Equation of time in hours.
pub fn equation_of_time_h(jd: f64) -> f64 {
    sun_position(jd).equation_of_time_h
}
