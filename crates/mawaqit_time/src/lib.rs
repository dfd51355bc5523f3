//! Calendar and clock primitives for the mawaqit solver.
//!
//! This crate provides:
//! - Julian Date from calendar dates, with the longitude shift used to
//!   anchor a day at local mean midnight
//! - Range reduction of fractional hours
//! - Minute-rounded clock times, display strings, and `chrono` timestamps

pub mod clock;
pub mod error;
pub mod julian;

pub use clock::{ClockTime, INVALID_TIME, TimeFormat, fix_hour, format_hours, to_datetime};
pub use error::TimeError;
pub use julian::{
    HOURS_PER_DAY, J2000_JD, calendar_to_jd, checked_calendar_to_jd, date_to_jd,
    longitude_corrected_jd, validate_date,
};
