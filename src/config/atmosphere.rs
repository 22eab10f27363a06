use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::{ConfigError, FEET_PER_THOUSAND, ISA_LAPSE_RATE, ISA_SEA_LEVEL_TEMP};

/// Standard atmosphere reference used by the density altitude calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereConfig {
    // ISA temperature at mean sea level (°C).
    pub isa_temp_at_sea_level: f64,
    // Temperature drop per 1000 ft of pressure altitude (°C).
    pub lapse_rate: f64,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            isa_temp_at_sea_level: ISA_SEA_LEVEL_TEMP,
            lapse_rate: ISA_LAPSE_RATE,
        }
    }
}

impl AtmosphereConfig {
    /// ISA temperature (°C) at the given pressure altitude (ft).
    pub fn isa_temperature(&self, pressure_alt: f64) -> f64 {
        self.isa_temp_at_sea_level - self.lapse_rate * (pressure_alt / FEET_PER_THOUSAND)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.isa_temp_at_sea_level.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "isa_temp_at_sea_level must be finite, got {}",
                self.isa_temp_at_sea_level
            )));
        }
        if !self.lapse_rate.is_finite() || self.lapse_rate < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "lapse_rate must be finite and non-negative, got {}",
                self.lapse_rate
            )));
        }
        Ok(())
    }

    /// Parse a YAML document. Keys left out keep their standard values.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: AtmosphereConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}
