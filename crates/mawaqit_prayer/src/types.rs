//! Location input and the seven-event result type.

use chrono::{NaiveDate, NaiveDateTime};
use mawaqit_time::{ClockTime, TimeFormat, format_hours, to_datetime};

use crate::error::PrayerError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Check that latitude and longitude are usable.
    pub fn validate(&self) -> Result<(), PrayerError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(PrayerError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() {
            return Err(PrayerError::InvalidLocation("longitude must be finite"));
        }
        Ok(())
    }

    /// Hours between local mean time and UT: `longitude / 15`.
    pub fn mean_time_offset_h(&self) -> f64 {
        self.longitude_deg / 15.0
    }
}

/// The seven daily events, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
}

impl Prayer {
    /// All events in chronological (array) order.
    pub const ALL: [Prayer; 7] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Sunset,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// The five prayers, without the two horizon events.
    pub const PRAYERS: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// 0-based position in [`PrayerTimes`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Sunset => "Sunset",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }
}

impl std::fmt::Display for Prayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Event times for one day, as fractional hours from local midnight.
///
/// Values may fall outside [0, 24) when an event belongs to the previous or
/// next civil day. `None` marks an event that does not occur (the Sun never
/// reaches the required depression).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerTimes {
    hours: [Option<f64>; 7],
}

impl PrayerTimes {
    pub fn new(hours: [Option<f64>; 7]) -> Self {
        Self { hours }
    }

    /// Raw fractional hours, in [`Prayer::ALL`] order.
    ///
    /// Values are not reduced to [0, 24). [`PrayerTimes::clock_times`] gives
    /// the reduced view: a clock time in [0, 24) plus a `day_offset`.
    pub fn hours(&self) -> [Option<f64>; 7] {
        self.hours
    }

    pub fn get(&self, prayer: Prayer) -> Option<f64> {
        self.hours[prayer.index()]
    }

    pub fn fajr(&self) -> Option<f64> {
        self.get(Prayer::Fajr)
    }

    pub fn sunrise(&self) -> Option<f64> {
        self.get(Prayer::Sunrise)
    }

    pub fn dhuhr(&self) -> Option<f64> {
        self.get(Prayer::Dhuhr)
    }

    pub fn asr(&self) -> Option<f64> {
        self.get(Prayer::Asr)
    }

    pub fn sunset(&self) -> Option<f64> {
        self.get(Prayer::Sunset)
    }

    pub fn maghrib(&self) -> Option<f64> {
        self.get(Prayer::Maghrib)
    }

    pub fn isha(&self) -> Option<f64> {
        self.get(Prayer::Isha)
    }

    /// `(event, hours)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, Option<f64>)> + '_ {
        Prayer::ALL.iter().map(move |&p| (p, self.get(p)))
    }

    /// Minute-rounded clock times with day offsets.
    pub fn clock_times(&self) -> [Option<ClockTime>; 7] {
        self.hours.map(|h| h.and_then(ClockTime::from_hours))
    }

    /// Display strings; unreachable events render as a placeholder.
    pub fn format(&self, format: TimeFormat) -> [String; 7] {
        self.hours.map(|h| format_hours(h, format))
    }

    /// Calendar timestamps relative to 0h of `date`.
    pub fn datetimes(&self, date: NaiveDate) -> [Option<NaiveDateTime>; 7] {
        self.hours.map(|h| h.and_then(|h| to_datetime(date, h)))
    }

    /// Timestamps of the five prayers that occur on `date`, in order.
    ///
    /// Sunrise and Sunset are left out. This is the reference series a
    /// day-progress indicator is driven by.
    pub fn reference_series(&self, date: NaiveDate) -> Vec<NaiveDateTime> {
        Prayer::PRAYERS
            .iter()
            .filter_map(|&p| self.get(p).and_then(|h| to_datetime(date, h)))
            .collect()
    }
}
