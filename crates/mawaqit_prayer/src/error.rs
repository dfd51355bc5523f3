//! Error types for prayer-time computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use mawaqit_time::TimeError;

/// Errors from prayer-time inputs or method parameters.
///
/// An event that does not occur on a given day (polar day or night) is not
/// an error; it is reported as `None` in [`crate::PrayerTimes`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PrayerError {
    /// Calendar date validation failed.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Timezone offset is not a finite number of hours.
    InvalidTimezone(f64),
    /// Positional method record has the wrong number of fields.
    ParamCount { expected: usize, found: usize },
    /// A rule selector field is neither 0 (angle) nor 1 (minutes).
    InvalidRuleSelector { field: &'static str, value: f64 },
    /// A configuration value is out of its valid domain.
    InvalidConfig(&'static str),
}

impl Display for PrayerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidTimezone(tz) => write!(f, "invalid timezone offset: {tz}"),
            Self::ParamCount { expected, found } => {
                write!(f, "method record needs {expected} fields, got {found}")
            }
            Self::InvalidRuleSelector { field, value } => {
                write!(f, "{field} selector must be 0 or 1, got {value}")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl Error for PrayerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for PrayerError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
