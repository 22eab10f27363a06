//! The E6B flight computer.
//!
//! Every operation is a pure function of its arguments and the atmosphere
//! constants fixed at construction. Units are part of each signature:
//!
//! | Quantity        | Unit            |
//! |-----------------|-----------------|
//! | course, wind    | degrees true    |
//! | speed           | knots           |
//! | distance        | nautical miles  |
//! | altitude        | feet            |
//! | temperature     | degrees Celsius |
//! | fuel            | US gallons      |
//! | fuel flow       | gallons/hour    |
//! | time            | minutes         |

mod airspeed;
mod density;
mod fuel;
mod wind;

use crate::config::AtmosphereConfig;
use crate::utils::{E6bError, Result, MAX_DIRECTION};

/// Flight planning calculator reproducing the rules of thumb of a manual E6B.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlightComputer {
    atmosphere: AtmosphereConfig,
}

impl FlightComputer {
    /// Build a computer around a non-standard atmosphere reference.
    pub fn new(atmosphere: AtmosphereConfig) -> Result<Self> {
        atmosphere.validate()?;
        Ok(Self { atmosphere })
    }

    pub fn atmosphere(&self) -> &AtmosphereConfig {
        &self.atmosphere
    }
}

fn require_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(E6bError::invalid(format!("{} must be a finite number, got {}", name, value)))
    }
}

fn require_positive(name: &str, value: f64) -> Result<f64> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(E6bError::invalid(format!(
            "{} must be greater than zero, got {}",
            name, value
        )))
    }
}

fn require_non_negative(name: &str, value: f64) -> Result<f64> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(E6bError::invalid(format!("{} must not be negative, got {}", name, value)))
    }
}

// 360 is accepted alongside 0 for north.
fn require_direction(name: &str, value: f64) -> Result<f64> {
    require_finite(name, value)?;
    if (0.0..=MAX_DIRECTION).contains(&value) {
        Ok(value)
    } else {
        Err(E6bError::invalid(format!(
            "{} must be between 0 and 360 degrees, got {}",
            name, value
        )))
    }
}
