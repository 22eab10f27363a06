use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AtmosphereConfig;
use crate::utils::ConfigError;

#[derive(Default, Debug, Serialize, Clone, Deserialize)]
pub struct AtmosphereConfigBuilder {
    pub isa_temp_at_sea_level: Option<f64>,
    pub lapse_rate: Option<f64>,
}

impl AtmosphereConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn isa_temp_at_sea_level(mut self, temp: f64) -> Self {
        self.isa_temp_at_sea_level = Some(temp);
        self
    }

    pub fn lapse_rate(mut self, rate: f64) -> Self {
        self.lapse_rate = Some(rate);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let mut builder = Self::new();

        if let Some(temp) = value.get("isa_temp_at_sea_level") {
            let temp = temp.as_f64().ok_or_else(|| {
                ConfigError::ValidationError(format!(
                    "isa_temp_at_sea_level must be a number, got {}",
                    temp
                ))
            })?;
            builder = builder.isa_temp_at_sea_level(temp);
        }

        if let Some(rate) = value.get("lapse_rate") {
            let rate = rate.as_f64().ok_or_else(|| {
                ConfigError::ValidationError(format!("lapse_rate must be a number, got {}", rate))
            })?;
            builder = builder.lapse_rate(rate);
        }

        Ok(builder)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    pub fn build(self) -> Result<AtmosphereConfig, ConfigError> {
        let mut config = AtmosphereConfig::default();

        if let Some(temp) = self.isa_temp_at_sea_level {
            config.isa_temp_at_sea_level = temp;
        }
        if let Some(rate) = self.lapse_rate {
            config.lapse_rate = rate;
        }

        config.validate()?;
        Ok(config)
    }
}
