//! Spatial interaction functions (SIFs).
//!
//! Each function maps an inter-point distance `d` and the shape parameters
//! `b` (base probability), `s` (scale) and `p` (power) to a tie probability:
//!
//! | name         | formula                       |
//! |--------------|-------------------------------|
//! | `standard`   | `b / (1 + s·d)^|p|`           |
//! | `attenuated` | `b / (1 + (s·d)^|p|)`         |
//! | `arctan`     | `b · (1 − (2/π)·atan(s·d))`   |
//! | `decay`      | `b / e^(s·d)`                 |
//! | `logistic`   | `2b / (1 + e^(s·d))`          |
//!
//! Outputs are not clamped to `[0, 1]`. All five share one signature; `arctan`, `decay`
//! and `logistic` ignore `power`.
use std::f64::consts::FRAC_2_PI;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub const DEFAULT_BASE_PROB: f64 = 0.9;
pub const DEFAULT_SCALE: f64 = 1.0;
pub const DEFAULT_POWER: f64 = -2.8;

/// Power-law decay: `b / (1 + s·d)^|p|`.
#[inline]
pub fn standard(distance: f64, base_prob: f64, scale: f64, power: f64) -> f64 {
    base_prob / (1.0 + scale * distance).powf(power.abs())
}

/// Attenuated power-law decay: `b / (1 + (s·d)^|p|)`.
///
/// At `p = 0` the term `(s·d)^0` is 1 for every distance, zero included, so the value is
/// the constant `b / 2`.
#[inline]
pub fn attenuated(distance: f64, base_prob: f64, scale: f64, power: f64) -> f64 {
    base_prob / (1.0 + (scale * distance).powf(power.abs()))
}

/// Arctangent decay: `b · (1 − (2/π)·atan(s·d))`.
#[inline]
pub fn arctan(distance: f64, base_prob: f64, scale: f64, _power: f64) -> f64 {
    base_prob * (1.0 - FRAC_2_PI * (scale * distance).atan())
}

/// Exponential decay: `b / e^(s·d)`.
#[inline]
pub fn decay(distance: f64, base_prob: f64, scale: f64, _power: f64) -> f64 {
    base_prob / (scale * distance).exp()
}

/// Logistic decay: `2b / (1 + e^(s·d))`.
#[inline]
pub fn logistic(distance: f64, base_prob: f64, scale: f64, _power: f64) -> f64 {
    (2.0 * base_prob) / (1.0 + (scale * distance).exp())
}

/// Shape parameters shared by all interaction functions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SifParams {
    /// Probability at distance zero, typically in `(0, 1]`.
    pub base_prob: f64,
    /// Positive distance scale.
    pub scale: f64,
    /// Exponent for the power-law variants (sign ignored).
    pub power: f64,
}

impl Default for SifParams {
    fn default() -> Self {
        Self {
            base_prob: DEFAULT_BASE_PROB,
            scale: DEFAULT_SCALE,
            power: DEFAULT_POWER,
        }
    }
}

impl SifParams {
    pub fn new(base_prob: f64, scale: f64, power: f64) -> Self {
        Self {
            base_prob,
            scale,
            power,
        }
    }
}

/// Closed set of interaction functions available to the network builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SpatialInteraction {
    #[default]
    Standard,
    Attenuated,
    Arctan,
    Decay,
    Logistic,
}

impl SpatialInteraction {
    pub const ALL: [SpatialInteraction; 5] = [
        SpatialInteraction::Standard,
        SpatialInteraction::Attenuated,
        SpatialInteraction::Arctan,
        SpatialInteraction::Decay,
        SpatialInteraction::Logistic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpatialInteraction::Standard => "standard",
            SpatialInteraction::Attenuated => "attenuated",
            SpatialInteraction::Arctan => "arctan",
            SpatialInteraction::Decay => "decay",
            SpatialInteraction::Logistic => "logistic",
        }
    }

    /// The underlying function with the uniform `(d, b, s, p)` signature.
    pub fn function(self) -> fn(f64, f64, f64, f64) -> f64 {
        match self {
            SpatialInteraction::Standard => standard,
            SpatialInteraction::Attenuated => attenuated,
            SpatialInteraction::Arctan => arctan,
            SpatialInteraction::Decay => decay,
            SpatialInteraction::Logistic => logistic,
        }
    }

    #[inline]
    pub fn evaluate(self, distance: f64, params: &SifParams) -> f64 {
        (self.function())(distance, params.base_prob, params.scale, params.power)
    }
}

impl fmt::Display for SpatialInteraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpatialInteraction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|sif| sif.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownInteraction { name: s.to_owned() })
    }
}
