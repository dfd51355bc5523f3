//! Low-precision solar ephemeris for the mawaqit solver.
//!
//! This crate provides:
//! - Degree-based trigonometry and angle range reduction
//! - Solar declination and equation of time from a Julian Date

pub mod angle;
pub mod sun;

pub use angle::{darccos, darccot, darcsin, darctan2, dcos, dsin, dtan, fix_angle};
pub use sun::{SunPosition, declination_deg, equation_of_time_h, sun_position};
