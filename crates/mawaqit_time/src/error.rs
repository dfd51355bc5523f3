//! Error types for calendar and clock conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day do not name a proleptic Gregorian date.
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date {year:04}-{month:02}-{day:02}")
            }
        }
    }
}

impl Error for TimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_date() {
        let e = TimeError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30,
        };
        assert_eq!(e.to_string(), "invalid calendar date 2024-02-30");
    }
}
