use serde::{Deserialize, Serialize};

use super::constants::MINUTES_PER_HOUR;

/// Heading correction and resulting groundspeed for a leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindCorrection {
    /// Wind correction angle (degrees, positive = correct to the right)
    pub wca: f64,
    /// Groundspeed (knots)
    pub groundspeed: f64,
}

impl From<WindCorrection> for (f64, f64) {
    fn from(wc: WindCorrection) -> Self {
        (wc.wca, wc.groundspeed)
    }
}

/// Time en route and fuel required for a leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelBurn {
    /// Time en route (minutes)
    pub time_minutes: f64,
    /// Fuel required (US gallons)
    pub fuel_gallons: f64,
}

impl FuelBurn {
    pub fn time_hours(&self) -> f64 {
        self.time_minutes / MINUTES_PER_HOUR
    }
}

impl From<FuelBurn> for (f64, f64) {
    fn from(fb: FuelBurn) -> Self {
        (fb.time_minutes, fb.fuel_gallons)
    }
}
