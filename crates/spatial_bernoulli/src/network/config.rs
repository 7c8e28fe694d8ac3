//! Configuration for deriving a network from a point pattern.
use crate::error::{Error, Result};
use crate::sif::{SifParams, SpatialInteraction};

pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Interaction function, its shape parameters, and the tie threshold.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkConfig {
    /// Interaction function mapping distance to tie probability.
    pub sif: SpatialInteraction,
    /// Base probability, scale and power passed to `sif`.
    pub params: SifParams,
    /// An edge exists iff the tie probability is strictly greater than this.
    pub threshold: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            sif: SpatialInteraction::default(),
            params: SifParams::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl NetworkConfig {
    /// Creates a [`NetworkConfig`] using `sif` and default parameters.
    pub fn new(sif: SpatialInteraction) -> Self {
        Self {
            sif,
            ..Default::default()
        }
    }

    /// Sets the interaction function.
    pub fn with_sif(mut self, sif: SpatialInteraction) -> Self {
        self.sif = sif;
        self
    }

    /// Sets the base probability.
    pub fn with_base_prob(mut self, base_prob: f64) -> Self {
        self.params.base_prob = base_prob;
        self
    }

    /// Sets the distance scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.params.scale = scale;
        self
    }

    /// Sets the power-law exponent.
    pub fn with_power(mut self, power: f64) -> Self {
        self.params.power = power;
        self
    }

    /// Sets the tie threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Tie probability for two points `distance` apart.
    #[inline]
    pub fn probability(&self, distance: f64) -> f64 {
        self.sif.evaluate(distance, &self.params)
    }

    /// Validates the configuration, returning an error if any parameter is non-finite.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("base_prob", self.params.base_prob),
            ("scale", self.params.scale),
            ("power", self.params.power),
            ("threshold", self.threshold),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        Ok(())
    }
}
