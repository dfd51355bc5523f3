//! Solver configuration.
//!
//! A [`PrayerConfig`] is an immutable value passed into every computation.
//! Start from `PrayerConfig::default()` and override fields with struct
//! update syntax.

use crate::error::PrayerError;
use crate::method::{CalculationMethod, MethodOverrides};

/// Upper bound on solver refinement passes.
pub const MAX_ITERATIONS: usize = 10;

/// Shadow-length convention for Asr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AsrConvention {
    /// Shadow equals object length plus the noon shadow (Shafii, Maliki, Hanbali).
    #[default]
    Standard,
    /// Shadow equals twice the object length plus the noon shadow (Hanafi).
    Extended,
}

impl AsrConvention {
    /// Multiplier used in the Asr altitude formula.
    pub fn shadow_factor(self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Extended => 2.0,
        }
    }
}

/// Correction applied to night-time events at high latitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighLatitudeStrategy {
    /// No correction.
    None,
    /// Cap each event at half the night.
    #[default]
    MidnightSplit,
    /// Cap each event at one seventh of the night.
    OneSeventhSplit,
    /// Cap each event at `angle / 60` of the night.
    AngleBased,
}

impl HighLatitudeStrategy {
    /// Fraction of the night allotted to an event defined by `angle_deg`.
    pub fn night_portion(self, angle_deg: f64) -> f64 {
        match self {
            Self::None => 0.0,
            Self::MidnightSplit => 1.0 / 2.0,
            Self::OneSeventhSplit => 1.0 / 7.0,
            Self::AngleBased => angle_deg / 60.0,
        }
    }
}

/// Everything the solver needs besides date, location, and timezone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerConfig {
    /// Fajr/Maghrib/Isha convention. Default: MWL.
    pub method: CalculationMethod,
    /// Asr shadow convention. Default: Standard.
    pub asr: AsrConvention,
    /// High-latitude correction. Default: MidnightSplit.
    pub high_latitude: HighLatitudeStrategy,
    /// Minutes added to solar noon for Dhuhr. Default: 0.
    pub dhuhr_minutes: f64,
    /// Fixed-point refinement passes. Default: 1.
    pub iterations: usize,
}

impl Default for PrayerConfig {
    fn default() -> Self {
        Self {
            method: CalculationMethod::Mwl,
            asr: AsrConvention::Standard,
            high_latitude: HighLatitudeStrategy::MidnightSplit,
            dhuhr_minutes: 0.0,
            iterations: 1,
        }
    }
}

impl PrayerConfig {
    /// Configuration with the given method and defaults elsewhere.
    pub fn with_method(method: CalculationMethod) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Copy of this configuration with the method customized.
    ///
    /// Unset override fields inherit the currently configured method.
    pub fn customized(&self, overrides: &MethodOverrides) -> Self {
        Self {
            method: self.method.with_overrides(overrides),
            ..*self
        }
    }

    /// Check value domains.
    pub fn validate(&self) -> Result<(), PrayerError> {
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(PrayerError::InvalidConfig("iterations must be in 1..=10"));
        }
        if !self.dhuhr_minutes.is_finite() {
            return Err(PrayerError::InvalidConfig("dhuhr_minutes must be finite"));
        }
        let p = self.method.params();
        if !p.fajr_angle.is_finite() || !p.maghrib.value().is_finite() || !p.isha.value().is_finite()
        {
            return Err(PrayerError::InvalidConfig("method values must be finite"));
        }
        Ok(())
    }
}
