//! Calculation methods: the angle and interval conventions behind Fajr,
//! Maghrib, and Isha.
//!
//! Each named method reduces to one [`MethodParams`] record. Conventions
//! differ in the Fajr depression angle and in whether Maghrib and Isha are
//! defined by a depression angle or by a fixed interval after the previous
//! event.

use crate::error::PrayerError;

/// Number of fields in a positional method record.
pub const METHOD_RECORD_LEN: usize = 5;

/// How an evening event is defined.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventRule {
    /// Sun center this many degrees below the horizon.
    Angle(f64),
    /// This many minutes after the preceding event
    /// (Sunset for Maghrib, Maghrib for Isha).
    MinutesAfter(f64),
}

impl EventRule {
    /// Positional selector: 0 for angle, 1 for minutes.
    pub fn selector(self) -> f64 {
        match self {
            Self::Angle(_) => 0.0,
            Self::MinutesAfter(_) => 1.0,
        }
    }

    /// The angle in degrees or the interval in minutes.
    pub fn value(self) -> f64 {
        match self {
            Self::Angle(v) | Self::MinutesAfter(v) => v,
        }
    }

    /// Angle in degrees if this rule is angle-based.
    pub fn angle(self) -> Option<f64> {
        match self {
            Self::Angle(v) => Some(v),
            Self::MinutesAfter(_) => None,
        }
    }

    /// Interval in minutes if this rule is interval-based.
    pub fn minutes(self) -> Option<f64> {
        match self {
            Self::Angle(_) => None,
            Self::MinutesAfter(v) => Some(v),
        }
    }

    fn from_selector(field: &'static str, selector: f64, value: f64) -> Result<Self, PrayerError> {
        if selector == 0.0 {
            Ok(Self::Angle(value))
        } else if selector == 1.0 {
            Ok(Self::MinutesAfter(value))
        } else {
            Err(PrayerError::InvalidRuleSelector {
                field,
                value: selector,
            })
        }
    }
}

/// Fully resolved parameters of a calculation method.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodParams {
    /// Fajr depression angle in degrees.
    pub fajr_angle: f64,
    /// Maghrib definition.
    pub maghrib: EventRule,
    /// Isha definition.
    pub isha: EventRule,
}

impl MethodParams {
    pub const fn new(fajr_angle: f64, maghrib: EventRule, isha: EventRule) -> Self {
        Self {
            fajr_angle,
            maghrib,
            isha,
        }
    }

    /// Parse a positional record
    /// `[fajr_angle, maghrib_selector, maghrib_value, isha_selector, isha_value]`.
    ///
    /// Selectors are 0 (angle) or 1 (minutes after the preceding event).
    pub fn from_raw(raw: &[f64]) -> Result<Self, PrayerError> {
        let &[fajr_angle, m_sel, m_val, i_sel, i_val] = raw else {
            return Err(PrayerError::ParamCount {
                expected: METHOD_RECORD_LEN,
                found: raw.len(),
            });
        };
        if !fajr_angle.is_finite() || !m_val.is_finite() || !i_val.is_finite() {
            return Err(PrayerError::InvalidConfig("method values must be finite"));
        }
        Ok(Self {
            fajr_angle,
            maghrib: EventRule::from_selector("maghrib", m_sel, m_val)?,
            isha: EventRule::from_selector("isha", i_sel, i_val)?,
        })
    }

    /// The positional record form of these parameters.
    pub fn to_raw(&self) -> [f64; METHOD_RECORD_LEN] {
        [
            self.fajr_angle,
            self.maghrib.selector(),
            self.maghrib.value(),
            self.isha.selector(),
            self.isha.value(),
        ]
    }

    /// Replace the fields that `overrides` sets; keep the rest.
    pub fn apply(&self, overrides: &MethodOverrides) -> Self {
        Self {
            fajr_angle: overrides.fajr_angle.unwrap_or(self.fajr_angle),
            maghrib: overrides.maghrib.unwrap_or(self.maghrib),
            isha: overrides.isha.unwrap_or(self.isha),
        }
    }
}

/// Per-field changes to a calculation method. `None` inherits the value of
/// the method the overrides are applied to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodOverrides {
    pub fajr_angle: Option<f64>,
    pub maghrib: Option<EventRule>,
    pub isha: Option<EventRule>,
}

impl MethodOverrides {
    pub fn fajr_angle(mut self, deg: f64) -> Self {
        self.fajr_angle = Some(deg);
        self
    }

    pub fn maghrib_angle(mut self, deg: f64) -> Self {
        self.maghrib = Some(EventRule::Angle(deg));
        self
    }

    pub fn maghrib_minutes(mut self, minutes: f64) -> Self {
        self.maghrib = Some(EventRule::MinutesAfter(minutes));
        self
    }

    pub fn isha_angle(mut self, deg: f64) -> Self {
        self.isha = Some(EventRule::Angle(deg));
        self
    }

    pub fn isha_minutes(mut self, minutes: f64) -> Self {
        self.isha = Some(EventRule::MinutesAfter(minutes));
        self
    }
}

/// Named calculation conventions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalculationMethod {
    /// Ithna Ashari (Jafari): Fajr 16, Maghrib 4, Isha 14.
    Jafari,
    /// University of Islamic Sciences, Karachi: Fajr 18, Isha 18.
    Karachi,
    /// Islamic Society of North America: Fajr 15, Isha 15.
    Isna,
    /// Muslim World League: Fajr 18, Isha 17.
    #[default]
    Mwl,
    /// Umm al-Qura, Makkah: Fajr 18.5, Isha 90 min after Maghrib.
    UmmAlQura,
    /// Egyptian General Authority of Survey: Fajr 19.5, Isha 17.5.
    Egypt,
    /// Institute of Geophysics, University of Tehran: Fajr 17.7, Maghrib 4.5, Isha 14.
    Tehran,
    /// Caller-defined parameters.
    Custom(MethodParams),
}

/// Starting point for a custom method: the MWL record.
pub const DEFAULT_CUSTOM_PARAMS: MethodParams =
    MethodParams::new(18.0, EventRule::MinutesAfter(0.0), EventRule::Angle(17.0));

/// The seven named presets, in declaration order.
pub const PRESETS: [CalculationMethod; 7] = [
    CalculationMethod::Jafari,
    CalculationMethod::Karachi,
    CalculationMethod::Isna,
    CalculationMethod::Mwl,
    CalculationMethod::UmmAlQura,
    CalculationMethod::Egypt,
    CalculationMethod::Tehran,
];

impl CalculationMethod {
    /// The resolved parameter record.
    pub fn params(&self) -> MethodParams {
        use EventRule::{Angle, MinutesAfter};
        match self {
            Self::Jafari => MethodParams::new(16.0, Angle(4.0), Angle(14.0)),
            Self::Karachi => MethodParams::new(18.0, MinutesAfter(0.0), Angle(18.0)),
            Self::Isna => MethodParams::new(15.0, MinutesAfter(0.0), Angle(15.0)),
            Self::Mwl => MethodParams::new(18.0, MinutesAfter(0.0), Angle(17.0)),
            Self::UmmAlQura => MethodParams::new(18.5, MinutesAfter(0.0), MinutesAfter(90.0)),
            Self::Egypt => MethodParams::new(19.5, MinutesAfter(0.0), Angle(17.5)),
            Self::Tehran => MethodParams::new(17.7, Angle(4.5), Angle(14.0)),
            Self::Custom(p) => *p,
        }
    }

    /// A custom method built on the default custom record (Fajr 18,
    /// Maghrib at Sunset, Isha 17).
    pub fn custom(overrides: &MethodOverrides) -> Self {
        Self::Custom(DEFAULT_CUSTOM_PARAMS.apply(overrides))
    }

    /// Customize this method. Fields the overrides leave unset inherit this
    /// method's values; the result is always `Custom`.
    pub fn with_overrides(&self, overrides: &MethodOverrides) -> Self {
        Self::Custom(self.params().apply(overrides))
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jafari => "Ithna Ashari (Jafari)",
            Self::Karachi => "University of Islamic Sciences, Karachi",
            Self::Isna => "Islamic Society of North America",
            Self::Mwl => "Muslim World League",
            Self::UmmAlQura => "Umm al-Qura, Makkah",
            Self::Egypt => "Egyptian General Authority of Survey",
            Self::Tehran => "Institute of Geophysics, University of Tehran",
            Self::Custom(_) => "Custom",
        }
    }
}
