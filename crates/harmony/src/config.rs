//! Saturation and luminosity bounds for palette generation.

use colorharmony_core::params::param_f64;
use colorharmony_core::HarmonyError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bounds every corrected color is clamped into, in percent.
///
/// Fixed at construction. Each bound lies in [0, 100] and each min is at most
/// its max.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarmonyConfig {
    min_saturation: f64,
    max_saturation: f64,
    min_luminosity: f64,
    max_luminosity: f64,
}

impl Default for HarmonyConfig {
    fn default() -> Self {
        Self {
            min_saturation: 10.0,
            max_saturation: 60.0,
            min_luminosity: 20.0,
            max_luminosity: 60.0,
        }
    }
}

impl HarmonyConfig {
    /// Creates a config from explicit bounds.
    ///
    /// Returns `HarmonyError::InvalidConfig` if a bound is outside [0, 100]
    /// or a min exceeds its max.
    pub fn new(
        min_saturation: f64,
        max_saturation: f64,
        min_luminosity: f64,
        max_luminosity: f64,
    ) -> Result<Self, HarmonyError> {
        let config = Self {
            min_saturation,
            max_saturation,
            min_luminosity,
            max_luminosity,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds a config from a JSON object, falling back to the default for
    /// every missing or non-numeric key.
    pub fn from_json(params: &Value) -> Result<Self, HarmonyError> {
        let d = Self::default();
        Self::new(
            param_f64(params, "min_saturation", d.min_saturation),
            param_f64(params, "max_saturation", d.max_saturation),
            param_f64(params, "min_luminosity", d.min_luminosity),
            param_f64(params, "max_luminosity", d.max_luminosity),
        )
    }

    /// Current bounds as a JSON object.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "min_saturation": self.min_saturation,
            "max_saturation": self.max_saturation,
            "min_luminosity": self.min_luminosity,
            "max_luminosity": self.max_luminosity,
        })
    }

    /// Checks every bound. Deserialized configs should be run through this.
    pub fn validate(&self) -> Result<(), HarmonyError> {
        let bounds = [
            ("min_saturation", self.min_saturation),
            ("max_saturation", self.max_saturation),
            ("min_luminosity", self.min_luminosity),
            ("max_luminosity", self.max_luminosity),
        ];
        if let Some((name, v)) = bounds
            .iter()
            .find(|(_, v)| !(0.0..=100.0).contains(v))
        {
            return Err(HarmonyError::InvalidConfig(format!(
                "{name} must be in [0, 100], got {v}"
            )));
        }
        if self.min_saturation > self.max_saturation {
            return Err(HarmonyError::InvalidConfig(format!(
                "min_saturation {} exceeds max_saturation {}",
                self.min_saturation, self.max_saturation
            )));
        }
        if self.min_luminosity > self.max_luminosity {
            return Err(HarmonyError::InvalidConfig(format!(
                "min_luminosity {} exceeds max_luminosity {}",
                self.min_luminosity, self.max_luminosity
            )));
        }
        Ok(())
    }

    pub fn min_saturation(&self) -> f64 {
        self.min_saturation
    }

    pub fn max_saturation(&self) -> f64 {
        self.max_saturation
    }

    pub fn min_luminosity(&self) -> f64 {
        self.min_luminosity
    }

    pub fn max_luminosity(&self) -> f64 {
        self.max_luminosity
    }
}
